use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::social::application::domain::entities::FollowOutcome;
use crate::modules::social::application::ports::incoming::use_cases::{
    ToggleFollowError, ToggleFollowUseCase,
};
use crate::modules::social::application::ports::outgoing::FollowGraph;

pub struct ToggleFollowService<Q, G>
where
    Q: UserQuery,
    G: FollowGraph,
{
    query: Q,
    graph: G,
}

impl<Q, G> ToggleFollowService<Q, G>
where
    Q: UserQuery,
    G: FollowGraph,
{
    pub fn new(query: Q, graph: G) -> Self {
        Self { query, graph }
    }
}

#[async_trait]
impl<Q, G> ToggleFollowUseCase for ToggleFollowService<Q, G>
where
    Q: UserQuery + Send + Sync,
    G: FollowGraph + Send + Sync,
{
    async fn execute(
        &self,
        caller: UserId,
        target: UserId,
    ) -> Result<FollowOutcome, ToggleFollowError> {
        if caller == target {
            return Err(ToggleFollowError::SelfFollowForbidden);
        }

        let exists = self
            .query
            .find_by_id(target)
            .await
            .map_err(|e| ToggleFollowError::QueryError(e.to_string()))?
            .is_some();
        if !exists {
            return Err(ToggleFollowError::TargetNotFound);
        }

        // The graph re-checks both users inside its transaction, so a target
        // deleted after the lookup above still surfaces as TargetNotFound.
        let outcome = self
            .graph
            .toggle_relation(caller, target)
            .await?;

        info!(
            follower_id = %caller,
            followee_id = %target,
            outcome = ?outcome,
            "Follow relation updated"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::social::application::domain::entities::FollowLists;
    use crate::modules::social::application::ports::outgoing::FollowGraphError;
    use crate::tests::support::in_memory::InMemoryStore;
    use crate::tests::support::stubs::{FailingFollowGraph, FailingUserQuery};
    use async_trait::async_trait;

    /// Graph that always reports the same error.
    struct RejectingGraph(FollowGraphError);

    #[async_trait]
    impl FollowGraph for RejectingGraph {
        async fn toggle_relation(
            &self,
            _follower: UserId,
            _followee: UserId,
        ) -> Result<FollowOutcome, FollowGraphError> {
            Err(self.0.clone())
        }

        async fn relations_of(&self, _user: UserId) -> Result<FollowLists, FollowGraphError> {
            Ok(FollowLists::default())
        }
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_state() {
        let store = InMemoryStore::default();
        let ann = store.insert_user("Ann", "a@x.com", "h");
        let bob = store.insert_user("Bob", "b@x.com", "h");
        let service = ToggleFollowService::new(store.clone(), store.clone());

        let first = service.execute(ann.id, bob.id).await.unwrap();
        assert_eq!(first, FollowOutcome::Followed);
        assert_eq!(store.relations_of(ann.id).await.unwrap().following, vec![bob.id]);
        assert_eq!(store.relations_of(bob.id).await.unwrap().followers, vec![ann.id]);

        let second = service.execute(ann.id, bob.id).await.unwrap();
        assert_eq!(second, FollowOutcome::Unfollowed);
        assert!(store.relations_of(ann.id).await.unwrap().following.is_empty());
        assert!(store.relations_of(bob.id).await.unwrap().followers.is_empty());
    }

    #[tokio::test]
    async fn follow_is_directed() {
        let store = InMemoryStore::default();
        let ann = store.insert_user("Ann", "a@x.com", "h");
        let bob = store.insert_user("Bob", "b@x.com", "h");
        let service = ToggleFollowService::new(store.clone(), store.clone());

        service.execute(ann.id, bob.id).await.unwrap();

        assert!(store.relations_of(ann.id).await.unwrap().followers.is_empty());
        assert!(store.relations_of(bob.id).await.unwrap().following.is_empty());
    }

    #[tokio::test]
    async fn self_follow_is_rejected_before_any_lookup() {
        let service = ToggleFollowService::new(FailingUserQuery, FailingFollowGraph);
        let me = UserId::new();

        let result = service.execute(me, me).await;

        assert!(matches!(result, Err(ToggleFollowError::SelfFollowForbidden)));
    }

    #[tokio::test]
    async fn unknown_target_leaves_caller_unchanged() {
        let store = InMemoryStore::default();
        let ann = store.insert_user("Ann", "a@x.com", "h");
        let service = ToggleFollowService::new(store.clone(), store.clone());

        let result = service.execute(ann.id, UserId::new()).await;

        assert!(matches!(result, Err(ToggleFollowError::TargetNotFound)));
        assert!(store.relations_of(ann.id).await.unwrap().following.is_empty());
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let service = ToggleFollowService::new(FailingUserQuery, InMemoryStore::default());

        let result = service.execute(UserId::new(), UserId::new()).await;

        assert!(matches!(result, Err(ToggleFollowError::QueryError(_))));
    }

    #[tokio::test]
    async fn graph_errors_are_translated() {
        let cases = vec![
            (FollowGraphError::FollowerNotFound, "CallerNotFound"),
            (FollowGraphError::FolloweeNotFound, "TargetNotFound"),
            (FollowGraphError::DatabaseError("boom".into()), "RepositoryError"),
        ];

        for (graph_err, expected) in cases {
            let store = InMemoryStore::default();
            let ann = store.insert_user("Ann", "a@x.com", "h");
            let bob = store.insert_user("Bob", "b@x.com", "h");
            let service = ToggleFollowService::new(store, RejectingGraph(graph_err));

            let err = service.execute(ann.id, bob.id).await.unwrap_err();

            assert!(format!("{err:?}").starts_with(expected), "got {err:?}");
        }
    }
}
