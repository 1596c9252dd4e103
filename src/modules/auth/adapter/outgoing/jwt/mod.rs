mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, DEFAULT_SESSION_EXPIRY};
pub use jwt_service::JwtTokenService;
