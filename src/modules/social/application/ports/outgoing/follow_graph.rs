// src/modules/social/application/ports/outgoing/follow_graph.rs

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::{FollowLists, FollowOutcome};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowGraphError {
    #[error("Follower does not exist")]
    FollowerNotFound,

    #[error("Followee does not exist")]
    FolloweeNotFound,

    #[error("A user cannot follow itself")]
    SelfRelation,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Directed follow edges between users. A single edge is both an entry in the
/// follower's `following` and in the followee's `followers`.
#[async_trait]
pub trait FollowGraph: Send + Sync {
    /// Removes the edge `follower -> followee` if present, otherwise creates
    /// it. Atomic: either the edge changes and both sides observe it, or
    /// nothing changes.
    async fn toggle_relation(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<FollowOutcome, FollowGraphError>;

    /// Followers and followees of `user`, oldest edge first. Both lists come
    /// from one snapshot, so a concurrent toggle shows up on both or neither.
    async fn relations_of(&self, user: UserId) -> Result<FollowLists, FollowGraphError>;
}
