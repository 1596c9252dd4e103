use std::env;

use crate::config::ConfigError;

/// 15 days, the lifetime of the session cookie in the legacy service.
pub const DEFAULT_SESSION_EXPIRY: i64 = 15 * 24 * 60 * 60;
const MAX_SESSION_EXPIRY: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Helper function to parse expiry values
    fn parse_expiry(key: &str, default: i64) -> Result<i64, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw.parse::<i64>().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                reason: format!("expected seconds, got {raw:?}"),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key =
            env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?;

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let session_token_expiry =
            Self::parse_expiry("JWT_SESSION_EXPIRY", DEFAULT_SESSION_EXPIRY)?;

        if session_token_expiry <= 0 || session_token_expiry > MAX_SESSION_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY".to_string(),
                reason: format!("must be between 1 and {MAX_SESSION_EXPIRY} seconds"),
            });
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "social_backend".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_token_expiry,
        })
    }
}
