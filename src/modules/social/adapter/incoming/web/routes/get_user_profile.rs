use actix_web::{get, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ProfileResponse;

/// Public profile of any user
///
/// Never contains a password field.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "Public profile", body = ProfileResponse),
        (
            status = 400,
            description = "Malformed user id",
            body = ErrorResponse,
            example = json!({ "code": "INVALID_USER_ID", "message": "Invalid user id" })
        ),
        (
            status = 404,
            description = "No such user",
            body = ErrorResponse,
            example = json!({ "code": "USER_NOT_FOUND", "message": "No user with this ID" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}")]
pub async fn get_user_profile_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = path.into_inner();

    let target = match Uuid::parse_str(&raw) {
        Ok(id) => UserId::from(id),
        Err(_) => {
            warn!(id = %raw, "Rejected malformed user id");
            return ApiResponse::bad_request("INVALID_USER_ID", "Invalid user id");
        }
    };

    match data.social.get_profile.execute(target).await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),

        Err(GetProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "No user with this ID")
        }

        Err(GetProfileError::QueryError(msg)) => {
            error!(user_id = %target, error = %msg, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
