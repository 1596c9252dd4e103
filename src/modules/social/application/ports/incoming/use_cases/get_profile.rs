use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::PublicProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("No user with this ID")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, target: UserId) -> Result<PublicProfile, GetProfileError>;
}
