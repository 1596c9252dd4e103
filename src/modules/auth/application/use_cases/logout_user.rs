use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::application::ports::outgoing::TokenProvider;

pub const LOGOUT_MESSAGE: &str = "Logged Out Successfully";

// ========================= Logout Request =========================
#[derive(Debug, Clone, Default)]
pub struct LogoutRequest {
    session_token: Option<String>,
}

impl LogoutRequest {
    pub fn new(session_token: Option<String>) -> Self {
        Self {
            session_token: session_token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct LogoutResponse {
    pub message: String,
}

// ============================ Logout Use Case =============================
/// Sessions are stateless tokens, so logging out cannot fail; the caller
/// is responsible for discarding the credential.
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> LogoutResponse;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    token_provider: Arc<dyn TokenProvider>,
}

impl LogoutUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, request: LogoutRequest) -> LogoutResponse {
        match request
            .session_token()
            .map(|token| self.token_provider.verify_session_token(token))
        {
            Some(Ok(claims)) => info!(user_id = %claims.sub, "Session ended"),
            Some(Err(e)) => debug!(error = %e, "Logout with an unusable session token"),
            None => debug!("Logout without a session token"),
        }

        LogoutResponse {
            message: LOGOUT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::test_token_provider;
    use uuid::Uuid;

    #[test]
    fn test_logout_request_drops_blank_token() {
        assert_eq!(LogoutRequest::new(Some("   ".to_string())).session_token(), None);
        assert_eq!(LogoutRequest::new(None).session_token(), None);
        assert_eq!(
            LogoutRequest::new(Some(" abc ".to_string())).session_token(),
            Some("abc")
        );
    }

    #[tokio::test]
    async fn test_logout_with_valid_session() {
        let token_provider = test_token_provider();
        let session = token_provider.issue_session_token(Uuid::new_v4()).unwrap();
        let use_case = LogoutUseCase::new(token_provider);

        let response = use_case
            .execute(LogoutRequest::new(Some(session.token)))
            .await;

        assert_eq!(response.message, LOGOUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_logout_with_garbage_token_still_succeeds() {
        let use_case = LogoutUseCase::new(test_token_provider());

        let response = use_case
            .execute(LogoutRequest::new(Some("not.a.jwt".to_string())))
            .await;

        assert_eq!(response.message, "Logged Out Successfully");
    }

    #[tokio::test]
    async fn test_logout_without_token() {
        let use_case = LogoutUseCase::new(test_token_provider());

        let response = use_case.execute(LogoutRequest::default()).await;

        assert_eq!(response.message, LOGOUT_MESSAGE);
    }
}
