use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::social::application::domain::entities::UserProfile;
use crate::modules::social::application::ports::incoming::use_cases::{
    GetOwnProfileError, GetOwnProfileUseCase,
};
use crate::modules::social::application::ports::outgoing::FollowGraph;

use super::load_profile;

pub struct GetOwnProfileService<Q, G>
where
    Q: UserQuery,
    G: FollowGraph,
{
    query: Q,
    graph: G,
}

impl<Q, G> GetOwnProfileService<Q, G>
where
    Q: UserQuery,
    G: FollowGraph,
{
    pub fn new(query: Q, graph: G) -> Self {
        Self { query, graph }
    }
}

#[async_trait]
impl<Q, G> GetOwnProfileUseCase for GetOwnProfileService<Q, G>
where
    Q: UserQuery + Send + Sync,
    G: FollowGraph + Send + Sync,
{
    async fn execute(&self, caller: UserId) -> Result<UserProfile, GetOwnProfileError> {
        load_profile(&self.query, &self.graph, caller)
            .await
            .map_err(GetOwnProfileError::QueryError)?
            .ok_or(GetOwnProfileError::UserNotFound)
    }
}
