use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::social::application::domain::entities::PublicProfile;
use crate::modules::social::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::social::application::ports::outgoing::FollowGraph;

use super::load_profile;

pub struct GetProfileService<Q, G>
where
    Q: UserQuery,
    G: FollowGraph,
{
    query: Q,
    graph: G,
}

impl<Q, G> GetProfileService<Q, G>
where
    Q: UserQuery,
    G: FollowGraph,
{
    pub fn new(query: Q, graph: G) -> Self {
        Self { query, graph }
    }
}

#[async_trait]
impl<Q, G> GetProfileUseCase for GetProfileService<Q, G>
where
    Q: UserQuery + Send + Sync,
    G: FollowGraph + Send + Sync,
{
    async fn execute(&self, target: UserId) -> Result<PublicProfile, GetProfileError> {
        load_profile(&self.query, &self.graph, target)
            .await
            .map_err(GetProfileError::QueryError)?
            .map(PublicProfile::from)
            .ok_or(GetProfileError::UserNotFound)
    }
}
