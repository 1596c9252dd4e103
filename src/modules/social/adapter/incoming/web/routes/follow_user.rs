use actix_web::{post, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::incoming::use_cases::ToggleFollowError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::FollowResponse;

/// Follow or unfollow a user
///
/// Toggles the edge from the logged-in user to `{id}`.
#[utoipa::path(
    post,
    path = "/api/users/{id}/follow",
    tag = "users",
    security(("SessionCookie" = [])),
    params(("id" = String, Path, description = "Id of the user to follow or unfollow")),
    responses(
        (
            status = 200,
            description = "Edge toggled",
            body = FollowResponse,
            example = json!({ "message": "User followed" })
        ),
        (
            status = 400,
            description = "Self-follow, malformed id or unknown target",
            body = ErrorResponse,
            example = json!({ "code": "SELF_FOLLOW_FORBIDDEN", "message": "You can't follow yourself" })
        ),
        (status = 401, description = "No session or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/{id}/follow")]
pub async fn follow_user_handler(
    user: AuthenticatedUser,
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

    match data.social.toggle_follow.execute(user.user_id, target).await {
        Ok(outcome) => ApiResponse::success(FollowResponse {
            message: outcome.message().to_string(),
        }),

        Err(ToggleFollowError::SelfFollowForbidden) => {
            ApiResponse::bad_request("SELF_FOLLOW_FORBIDDEN", "You can't follow yourself")
        }

        Err(ToggleFollowError::TargetNotFound) => {
            ApiResponse::bad_request("USER_NOT_FOUND", "No user with this ID")
        }

        Err(ToggleFollowError::CallerNotFound) => {
            warn!(user_id = %user.user_id, "Session refers to a missing user");
            ApiResponse::unauthorized("UNAUTHENTICATED", "Please login")
        }

        Err(ToggleFollowError::QueryError(msg)) | Err(ToggleFollowError::RepositoryError(msg)) => {
            error!(
                follower_id = %user.user_id,
                followee_id = %target,
                error = %msg,
                "Failed to toggle follow"
            );
            ApiResponse::internal_error()
        }
    }
}
