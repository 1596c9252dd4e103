use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_insert_err(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let mapped = Self::map_insert_err(e);
            if matches!(mapped, UserRepositoryError::UserAlreadyExists) {
                // Lost a race with a concurrent registration for the same email
                warn!("Unique constraint rejected user insert");
            }
            mapped
        })?;

        Ok(inserted.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_user_data() -> NewUser {
        NewUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let user_data = create_test_user_data();
        let user_id = Uuid::new_v4();
        let curr_time = chrono::Utc::now();

        let mock_user_model = UserModel {
            id: user_id,
            name: user_data.name.clone(),
            email: user_data.email.clone(),
            password_hash: user_data.password_hash.clone(),
            created_at: curr_time.into(),
            updated_at: curr_time.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_user_model.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let user = repository.create_user(user_data.clone()).await.unwrap();

        assert_eq!(user.id.value(), user_id);
        assert_eq!(user.name, user_data.name);
        assert_eq!(user.email, user_data.email);
        assert_eq!(user.password_hash, user_data.password_hash);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.create_user(create_test_user_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            UserRepositoryError::UserAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.create_user(create_test_user_data()).await;

        match result.unwrap_err() {
            UserRepositoryError::DatabaseError(msg) => {
                assert!(msg.contains("connection timeout"));
            }
            other => panic!("Expected DatabaseError variant, got {other:?}"),
        }
    }
}
