use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

/// Which password hashing scheme new and existing accounts are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Argon2,
    Bcrypt,
}

impl FromStr for HasherKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argon2" => Ok(HasherKind::Argon2),
            "bcrypt" => Ok(HasherKind::Bcrypt),
            other => Err(ConfigError::Invalid {
                key: "PASSWORD_HASHER".to_string(),
                reason: format!("expected \"argon2\" or \"bcrypt\", got {other:?}"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub password_hasher: HasherKind,
    pub session_cookie_secure: bool,
    pub log_format: LogFormat,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_or("PORT", 8080u16)?;

        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 50u32)?;
        let db_min_connections = parse_or("DB_MIN_CONNECTIONS", 5u32)?;
        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS".to_string(),
                reason: format!("must not exceed DB_MAX_CONNECTIONS ({db_max_connections})"),
            });
        }

        let password_hasher = match env::var("PASSWORD_HASHER") {
            Ok(raw) => raw.parse()?,
            Err(_) => HasherKind::Argon2,
        };

        let session_cookie_secure = parse_bool("SESSION_COOKIE_SECURE", false)?;
        let run_migrations = parse_bool("RUN_MIGRATIONS", false)?;

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            password_hasher,
            session_cookie_secure,
            log_format,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads `key`, falling back to `default` when unset. A value that is set
/// but does not parse is an error, never the default.
pub(crate) fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            reason: format!("cannot parse {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(key: &str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid {
                key: key.to_string(),
                reason: format!("expected a boolean, got {raw:?}"),
            }),
        },
        Err(_) => Ok(default),
    }
}
