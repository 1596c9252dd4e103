use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::register_user::AuthResponse;

pub const LOGGED_IN_MESSAGE: &str = "Logged in";

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address, matched exactly
    #[schema(example = "a@x.com")]
    pub email: String,

    /// Password
    #[schema(example = "pw")]
    pub password: String,
}

/// User login
///
/// Verifies email and password, opens a session and sets the `token` cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful, session cookie set",
            body = AuthResponse,
            example = json!({
                "user": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Ann",
                    "email": "a@x.com",
                    "created_at": "2025-03-04T10:54:28Z",
                    "updated_at": "2025-03-04T10:54:28Z"
                },
                "message": "Logged in"
            })
        ),
        (
            status = 400,
            description = "Unknown email or wrong password",
            body = ErrorResponse,
            example = json!({
                "code": "WRONG_PASSWORD",
                "message": "Wrong password"
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "code": "INTERNAL_ERROR",
                "message": "An unexpected error occurred"
            })
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(logged_in) => {
            info!(user_id = %logged_in.user.id, "User logged in successfully");

            let cookie = data.session_cookie.session_cookie(&logged_in.session.token);
            HttpResponse::Ok().cookie(cookie).json(AuthResponse {
                user: logged_in.user.into(),
                message: LOGGED_IN_MESSAGE.to_string(),
            })
        }

        Err(LoginError::UserNotFound) => {
            warn!("Login failed: unknown email");
            ApiResponse::bad_request("USER_NOT_FOUND", "No user with this email")
        }

        Err(LoginError::WrongPassword) => {
            warn!("Login failed: wrong password");
            ApiResponse::bad_request("WRONG_PASSWORD", "Wrong password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
