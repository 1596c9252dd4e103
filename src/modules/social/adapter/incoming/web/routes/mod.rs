mod follow_user;
mod get_own_profile;
mod get_user_profile;
mod profile_response;

pub use follow_user::{__path_follow_user_handler, follow_user_handler};
pub use get_own_profile::{__path_get_own_profile_handler, get_own_profile_handler};
pub use get_user_profile::{__path_get_user_profile_handler, get_user_profile_handler};
pub use profile_response::{FollowResponse, ProfileResponse};
