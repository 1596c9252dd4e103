use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{NewUser, User};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionToken, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 255;

// ========================= Register Input =========================
/// Validated registration input. Fields are private so every instance has
/// passed `RegisterUserInput::new`.
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterInputError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name cannot exceed 100 characters")]
    NameTooLong,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Email cannot exceed 255 characters")]
    EmailTooLong,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl RegisterUserInput {
    pub fn new(name: String, email: String, password: String) -> Result<Self, RegisterInputError> {
        let name = Self::validate_name(name)?;
        let email = Self::validate_email(email)?;

        if password.is_empty() {
            return Err(RegisterInputError::EmptyPassword);
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_name(name: String) -> Result<String, RegisterInputError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(RegisterInputError::EmptyName);
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(RegisterInputError::NameTooLong);
        }

        Ok(name.to_string())
    }

    /// Emails are matched exactly as stored, so only surrounding whitespace is removed.
    fn validate_email(email: String) -> Result<String, RegisterInputError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(RegisterInputError::EmptyEmail);
        }

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(RegisterInputError::EmailTooLong);
        }

        if !EmailAddress::is_valid(email) {
            return Err(RegisterInputError::InvalidEmailFormat);
        }

        Ok(email.to_string())
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Already have an account with this email")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The stored account plus the session opened for it.
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user: User,
    pub session: SessionToken,
}

// ============================ Register Use Case =============================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<RegisteredUser, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<RegisteredUser, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(input.email())
            .await
            .map_err(|e| RegisterUserError::QueryError(e.to_string()))?;

        if existing.is_some() {
            warn!("Registration rejected: email already in use");
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(input.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // The unique index still guards against a concurrent registration
        let user = self
            .repository
            .create_user(NewUser {
                name: input.name().to_string(),
                email: input.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        let session = self
            .token_provider
            .issue_session_token(user.id.value())
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User registered");

        Ok(RegisteredUser { user, session })
    }
}
