use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::UserProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOwnProfileError {
    /// The session is valid but its user record is gone.
    #[error("No user with this ID")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetOwnProfileUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<UserProfile, GetOwnProfileError>;
}
