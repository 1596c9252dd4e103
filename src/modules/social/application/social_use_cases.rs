use std::sync::Arc;

use crate::modules::social::application::ports::incoming::use_cases::{
    GetOwnProfileUseCase, GetProfileUseCase, ToggleFollowUseCase,
};

#[derive(Clone)]
pub struct SocialUseCases {
    pub get_own_profile: Arc<dyn GetOwnProfileUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub toggle_follow: Arc<dyn ToggleFollowUseCase + Send + Sync>,
}
