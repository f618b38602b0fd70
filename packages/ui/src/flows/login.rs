//! Magic link request form.

use api::{ApiError, MagicLinkRequest, MagicLinkResponse};

use super::AuthGateway;

/// Shown when a request fails without a server message.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send magic link. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Loading,
    /// The link is on its way. Stays until the user asks to send another.
    Sent(MagicLinkResponse),
    Failed(String),
}

/// Login form inputs plus where the submission stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub full_name: String,
    pub status: LoginStatus,
}

impl LoginForm {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoginStatus::Loading)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.status, LoginStatus::Sent(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoginStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Start a submission and return the request to send.
    ///
    /// Returns `None` while a previous submission is still in flight. A blank
    /// full name is left out of the request.
    pub fn begin_submit(&mut self) -> Option<MagicLinkRequest> {
        if self.is_loading() {
            return None;
        }
        self.status = LoginStatus::Loading;
        let full_name = self.full_name.trim();
        Some(MagicLinkRequest {
            email: self.email.trim().to_string(),
            full_name: (!full_name.is_empty()).then(|| full_name.to_string()),
        })
    }

    /// Record the outcome of a submission. Inputs are kept either way.
    pub fn finish(&mut self, result: Result<MagicLinkResponse, ApiError>) {
        self.status = match result {
            Ok(response) => LoginStatus::Sent(response),
            Err(e) => LoginStatus::Failed(e.message_or(SEND_FAILED_MESSAGE).to_string()),
        };
    }

    /// "Send another link": back to an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Issue the magic link request. No deduplication: each call is a request.
pub async fn send_magic_link<G: AuthGateway>(
    gateway: &G,
    request: &MagicLinkRequest,
) -> Result<MagicLinkResponse, ApiError> {
    let result = gateway
        .request_magic_link(&request.email, request.full_name.as_deref())
        .await;
    match &result {
        Ok(_) => tracing::info!("magic link sent to {}", request.email),
        Err(e) => tracing::warn!("magic link request failed: {}", e),
    }
    result
}
