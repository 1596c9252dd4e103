use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    InvalidIssuer,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::InvalidIssuer => write!(f, "Invalid token issuer"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}
impl Error for TokenError {}

/// Structure for session JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid, // User ID
    pub exp: i64,  // Expiration timestamp
    pub iat: i64,  // Issued at timestamp
    pub nbf: i64,  // Not before timestamp
    pub iss: String,
}

/// A freshly minted session credential and the instant it stops being valid.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, user_id: Uuid) -> Result<SessionToken, TokenError>;
    fn verify_session_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    /// Lifetime of an issued session in seconds; the session cookie uses it as `Max-Age`.
    fn session_ttl_seconds(&self) -> i64;
}
