use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::social::application::ports::incoming::use_cases::GetOwnProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ProfileResponse;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Profile of the logged-in user", body = ProfileResponse),
        (
            status = 401,
            description = "No session or invalid session",
            body = ErrorResponse,
            example = json!({ "code": "UNAUTHENTICATED", "message": "Please login" })
        ),
        (
            status = 404,
            description = "Session user no longer exists",
            body = ErrorResponse,
            example = json!({ "code": "USER_NOT_FOUND", "message": "No user with this ID" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/me")]
pub async fn get_own_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.social.get_own_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),

        Err(GetOwnProfileError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Session refers to a missing user");
            ApiResponse::not_found("USER_NOT_FOUND", "No user with this ID")
        }

        Err(GetOwnProfileError::QueryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to load own profile");
            ApiResponse::internal_error()
        }
    }
}
