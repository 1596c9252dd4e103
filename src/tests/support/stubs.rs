use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenProvider, UserQuery, UserQueryError,
};
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoggedInUser, LoginError, LoginRequest},
    logout_user::{ILogoutUseCase, LogoutRequest, LogoutResponse, LOGOUT_MESSAGE},
    register_user::{IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisteredUser},
};
use crate::modules::social::application::domain::entities::{
    FollowLists, FollowOutcome, PublicProfile, UserProfile,
};
use crate::modules::social::application::ports::incoming::use_cases::{
    GetOwnProfileError, GetOwnProfileUseCase, GetProfileError, GetProfileUseCase,
    ToggleFollowError, ToggleFollowUseCase,
};
use crate::modules::social::application::ports::outgoing::{FollowGraph, FollowGraphError};

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-at-least-32-chars";

/// Real JWT service with a fixed secret; every call verifies the others' tokens.
pub fn test_token_provider() -> Arc<dyn TokenProvider> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "social_backend_test".to_string(),
        session_token_expiry: 3600,
    }))
}

/// App data in the exact shape the `AuthenticatedUser` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider>> {
    web::Data::new(test_token_provider())
}

// ---------------------------------------------------------------------------
// Password hashers
// ---------------------------------------------------------------------------

/// Deterministic and fast; never equal to the plaintext.
#[derive(Default, Clone)]
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

#[derive(Default, Clone)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}

// ---------------------------------------------------------------------------
// Failing ports
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct FailingUserQuery;

#[async_trait]
impl UserQuery for FailingUserQuery {
    async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Err(UserQueryError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        Err(UserQueryError::DatabaseError("connection refused".to_string()))
    }
}

#[derive(Default, Clone)]
pub struct FailingFollowGraph;

#[async_trait]
impl FollowGraph for FailingFollowGraph {
    async fn toggle_relation(
        &self,
        _follower: UserId,
        _followee: UserId,
    ) -> Result<FollowOutcome, FollowGraphError> {
        Err(FollowGraphError::DatabaseError("connection refused".to_string()))
    }

    async fn relations_of(&self, _user: UserId) -> Result<FollowLists, FollowGraphError> {
        Err(FollowGraphError::DatabaseError("connection refused".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Use case stubs (builder defaults)
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisteredUser, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoggedInUser, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: LogoutRequest) -> LogoutResponse {
        LogoutResponse {
            message: LOGOUT_MESSAGE.to_string(),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubGetOwnProfileUseCase;

#[async_trait]
impl GetOwnProfileUseCase for StubGetOwnProfileUseCase {
    async fn execute(&self, _caller: UserId) -> Result<UserProfile, GetOwnProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _target: UserId) -> Result<PublicProfile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubToggleFollowUseCase;

#[async_trait]
impl ToggleFollowUseCase for StubToggleFollowUseCase {
    async fn execute(
        &self,
        _caller: UserId,
        _target: UserId,
    ) -> Result<FollowOutcome, ToggleFollowError> {
        unimplemented!("Not used in this test")
    }
}
