use crate::api::schemas::{ErrorResponse, MessageBody};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AuthResponse, LoginRequestDto, RegisterUserRequest, UserAccount,
};
// Users
use crate::social::adapter::incoming::web::routes::{FollowResponse, ProfileResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Backend API",
        version = "1.0.0",
        description = "Registration, cookie sessions, user profiles and the follow graph"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // User endpoints
        crate::social::adapter::incoming::web::routes::get_own_profile_handler,
        crate::social::adapter::incoming::web::routes::get_user_profile_handler,
        crate::social::adapter::incoming::web::routes::follow_user_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageBody,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            UserAccount,
            AuthResponse,

            // User DTOs
            ProfileResponse,
            FollowResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "users", description = "Profiles and follow relations"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "token",
                "Session cookie set by register and login",
            ))),
        );
    }
}
