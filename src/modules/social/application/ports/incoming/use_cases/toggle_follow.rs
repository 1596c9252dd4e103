use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::FollowOutcome;
use crate::modules::social::application::ports::outgoing::FollowGraphError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleFollowError {
    #[error("You can't follow yourself")]
    SelfFollowForbidden,

    #[error("No user with this ID")]
    TargetNotFound,

    /// The session is valid but its user record is gone.
    #[error("Caller does not exist")]
    CallerNotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FollowGraphError> for ToggleFollowError {
    fn from(err: FollowGraphError) -> Self {
        match err {
            FollowGraphError::FollowerNotFound => ToggleFollowError::CallerNotFound,
            FollowGraphError::FolloweeNotFound => ToggleFollowError::TargetNotFound,
            FollowGraphError::SelfRelation => ToggleFollowError::SelfFollowForbidden,
            FollowGraphError::DatabaseError(msg) => ToggleFollowError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ToggleFollowUseCase: Send + Sync {
    /// Follows `target` if `caller` does not follow it yet, otherwise unfollows.
    async fn execute(
        &self,
        caller: UserId,
        target: UserId,
    ) -> Result<FollowOutcome, ToggleFollowError>;
}
