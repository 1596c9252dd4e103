use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

pub const SESSION_COOKIE_NAME: &str = "token";

/// Attributes shared by every session cookie the service sets or clears.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookieConfig {
    /// Only mark cookies secure when the site is served over HTTPS.
    pub secure: bool,
    pub max_age_seconds: i64,
}

impl SessionCookieConfig {
    pub fn new(secure: bool, max_age_seconds: i64) -> Self {
        Self {
            secure,
            max_age_seconds,
        }
    }

    /// `HttpOnly` cookie carrying the session token.
    pub fn session_cookie(&self, token: &str) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, token.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::seconds(self.max_age_seconds))
            .finish()
    }

    /// Empty, immediately expiring replacement for the session cookie.
    pub fn cleared_cookie(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::ZERO)
            .finish()
    }
}

/// Session token from the cookie, or from `Authorization: Bearer` for
/// non-browser clients.
pub fn extract_session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
