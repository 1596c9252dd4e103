mod get_own_profile;
mod get_profile;
mod toggle_follow;

pub use get_own_profile::{GetOwnProfileError, GetOwnProfileUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use toggle_follow::{ToggleFollowError, ToggleFollowUseCase};
