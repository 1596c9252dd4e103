mod login_user;
mod logout_user;
mod register_user;

pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto};
pub use logout_user::{__path_logout_user_handler, logout_user_handler};
pub use register_user::{
    __path_register_user_handler, register_user_handler, AuthResponse, RegisterUserRequest,
    UserAccount,
};
