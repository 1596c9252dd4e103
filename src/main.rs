pub mod modules;
pub use modules::auth;
pub use modules::social;
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::config::{AppConfig, HasherKind, LogFormat};
use crate::social::adapter::outgoing::FollowGraphPostgres;
use crate::social::application::service::{
    GetOwnProfileService, GetProfileService, ToggleFollowService,
};
use crate::social::application::social_use_cases::SocialUseCases;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub social: SocialUseCases,
    pub session_cookie: SessionCookieConfig,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

#[cfg(not(tarpaulin_include))]
fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
fn build_password_hasher(kind: HasherKind) -> Result<Arc<dyn PasswordHasher>, String> {
    match kind {
        HasherKind::Argon2 => Argon2Hasher::from_env()
            .map(|h| Arc::new(h) as Arc<dyn PasswordHasher>)
            .map_err(|e| e.to_string()),
        HasherKind::Bcrypt => Ok(Arc::new(BcryptHasher::default())),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), Box<dyn std::error::Error>> {
    load_env_files();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    info!("Starting application...");

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    info!(
        max_connections = config.db_max_connections,
        "Connected to database"
    );

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(db);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let session_cookie =
        SessionCookieConfig::new(config.session_cookie_secure, jwt_service.session_ttl_seconds());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let password_hasher = build_password_hasher(config.password_hasher)?;
    info!(hasher = ?config.password_hasher, "Password hasher selected");

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let follow_graph = FollowGraphPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let logout_user_use_case = LogoutUseCase::new(Arc::clone(&token_provider));

    let social = SocialUseCases {
        get_own_profile: Arc::new(GetOwnProfileService::new(
            user_query.clone(),
            follow_graph.clone(),
        )),
        get_profile: Arc::new(GetProfileService::new(
            user_query.clone(),
            follow_graph.clone(),
        )),
        toggle_follow: Arc::new(ToggleFollowService::new(user_query, follow_graph)),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        social,
        session_cookie,
    };

    let openapi = ApiDoc::openapi();
    let server_url = config.server_url();
    info!(address = %server_url, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Users; /me must be registered before /{id}
    cfg.service(crate::social::adapter::incoming::web::routes::get_own_profile_handler);
    cfg.service(crate::social::adapter::incoming::web::routes::get_user_profile_handler);
    cfg.service(crate::social::adapter::incoming::web::routes::follow_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = %e, "Application stopped");
        eprintln!("Error starting app: {e}");
    }
}
