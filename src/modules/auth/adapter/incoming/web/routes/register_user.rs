use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

pub const REGISTERED_MESSAGE: &str = "User Registered";

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Display name
    #[schema(example = "Ann")]
    pub name: String,

    /// Email address, unique and case-sensitive
    #[schema(example = "a@x.com")]
    pub email: String,

    /// Plaintext password
    #[schema(example = "pw")]
    pub password: String,
}

/// Account fields returned after register and login. Never includes the password hash.
#[derive(Serialize, ToSchema)]
pub struct UserAccount {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "Ann")]
    pub name: String,

    #[schema(example = "a@x.com")]
    pub email: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserAccount {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserAccount,

    #[schema(example = "User Registered")]
    pub message: String,
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyExists => {
            warn!("Registration failed: email already registered");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Already have an account with this email")
        }

        RegisterUserError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed during registration");
            ApiResponse::internal_error()
        }

        RegisterUserError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Session token generation failed during registration");
            ApiResponse::internal_error()
        }

        RegisterUserError::QueryError(ref e) => {
            error!(error = %e, "Database query failed during registration");
            ApiResponse::internal_error()
        }

        RegisterUserError::RepositoryError(ref e) => {
            error!(error = %e, "Database write failed during registration");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account, opens a session and sets the `token` cookie.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User registered, session cookie set",
            body = AuthResponse,
            example = json!({
                "user": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Ann",
                    "email": "a@x.com",
                    "created_at": "2025-03-04T10:54:28Z",
                    "updated_at": "2025-03-04T10:54:28Z"
                },
                "message": "User Registered"
            })
        ),
        (
            status = 400,
            description = "Invalid input or email already registered",
            body = ErrorResponse,
            example = json!({
                "code": "EMAIL_ALREADY_EXISTS",
                "message": "Already have an account with this email"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let input = match RegisterUserInput::new(dto.name, dto.email, dto.password) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "Invalid registration input");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.register_user_use_case.execute(input).await {
        Ok(registered) => {
            info!(user_id = %registered.user.id, "User registered successfully");

            let cookie = data.session_cookie.session_cookie(&registered.session.token);
            HttpResponse::Created().cookie(cookie).json(AuthResponse {
                user: registered.user.into(),
                message: REGISTERED_MESSAGE.to_string(),
            })
        }
        Err(e) => map_register_error(e),
    }
}
