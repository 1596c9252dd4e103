use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{NewUser, User, UserId};
use crate::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::social::application::domain::entities::{FollowLists, FollowOutcome};
use crate::modules::social::application::ports::outgoing::{FollowGraph, FollowGraphError};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    /// (follower, followee), oldest first
    follows: Vec<(UserId, UserId)>,
}

/// Users and follow edges behind a single lock, so a relation update is
/// observed by both sides at once just like the Postgres transaction.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn insert_user(&self, name: &str, email: &str, password_hash: &str) -> User {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.lock().users.push(user.clone());
        user
    }

    /// Seeds an edge without going through any checks.
    pub fn follow(&self, follower: UserId, followee: UserId) {
        self.lock().follows.push((follower, followee));
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.lock().users.iter().find(|u| u.email == email).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.lock().users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.lock().users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut tables = self.lock();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: UserId::new(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl FollowGraph for InMemoryStore {
    async fn toggle_relation(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<FollowOutcome, FollowGraphError> {
        let mut tables = self.lock();

        if !tables.users.iter().any(|u| u.id == follower) {
            return Err(FollowGraphError::FollowerNotFound);
        }
        if !tables.users.iter().any(|u| u.id == followee) {
            return Err(FollowGraphError::FolloweeNotFound);
        }
        if follower == followee {
            return Err(FollowGraphError::SelfRelation);
        }

        let edge = (follower, followee);
        match tables.follows.iter().position(|e| *e == edge) {
            Some(i) => {
                tables.follows.remove(i);
                Ok(FollowOutcome::Unfollowed)
            }
            None => {
                tables.follows.push(edge);
                Ok(FollowOutcome::Followed)
            }
        }
    }

    async fn relations_of(&self, user: UserId) -> Result<FollowLists, FollowGraphError> {
        let tables = self.lock();

        Ok(FollowLists {
            followers: tables
                .follows
                .iter()
                .filter(|(_, followee)| *followee == user)
                .map(|(follower, _)| *follower)
                .collect(),
            following: tables
                .follows
                .iter()
                .filter(|(follower, _)| *follower == user)
                .map(|(_, followee)| *followee)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toggle_keeps_sides_symmetric() {
        let store = InMemoryStore::default();
        let ann = store.insert_user("Ann", "a@x.com", "h");
        let bob = store.insert_user("Bob", "b@x.com", "h");

        let outcome = store.toggle_relation(ann.id, bob.id).await.unwrap();
        assert_eq!(outcome, FollowOutcome::Followed);
        assert_eq!(store.relations_of(bob.id).await.unwrap().followers, vec![ann.id]);
        assert_eq!(store.relations_of(ann.id).await.unwrap().following, vec![bob.id]);

        let outcome = store.toggle_relation(ann.id, bob.id).await.unwrap();
        assert_eq!(outcome, FollowOutcome::Unfollowed);
        assert_eq!(store.relations_of(bob.id).await.unwrap(), FollowLists::default());
        assert_eq!(store.relations_of(ann.id).await.unwrap(), FollowLists::default());
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let store = InMemoryStore::default();
        store.insert_user("Ann", "a@x.com", "h");

        let result = store
            .create_user(NewUser {
                name: "Other".to_string(),
                email: "a@x.com".to_string(),
                password_hash: "h".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
        assert_eq!(store.user_count(), 1);
    }
}
