use crate::api::schemas::MessageBody;
use crate::auth::adapter::incoming::web::session_cookie::extract_session_token;
use crate::modules::auth::application::use_cases::logout_user::LogoutRequest;
use crate::shared::api::MessageResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use tracing::info;

/// Log out
///
/// Replaces the session cookie with an empty, immediately expiring one.
/// Always succeeds, with or without a session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session cookie cleared",
            body = MessageBody,
            example = json!({ "message": "Logged Out Successfully" })
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let request = LogoutRequest::new(extract_session_token(&req));

    let response = data.logout_user_use_case.execute(request).await;
    info!("User logged out");

    HttpResponse::Ok()
        .cookie(data.session_cookie.cleared_cookie())
        .json(MessageResponse {
            message: response.message,
        })
}
