//! Magic link verification.
//!
//! `Verifying` is the initial state; `Success` and `Error` are terminal for a
//! view instance. The flow makes at most one network call per page load and has
//! no replay guard of its own: a consumed token comes back as a server error.

use std::future::Future;
use std::time::Duration;

use api::User;

use super::AuthGateway;
use crate::timer::ScheduledNavigation;

/// Pause on the success card before moving to the dashboard.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const MISSING_TOKEN_MESSAGE: &str = "No verification token provided";

/// Shown when the server rejects the token without saying why.
pub const VERIFY_FAILED_MESSAGE: &str = "Failed to verify magic link";

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyStatus {
    Verifying,
    Success(User),
    Error(String),
}

impl VerifyStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Success(user) => Some(user),
            _ => None,
        }
    }
}

/// Verify `token` and return the terminal status.
///
/// A missing or empty token fails immediately without touching the gateway.
pub async fn verify_magic_link<G: AuthGateway>(gateway: &G, token: Option<&str>) -> VerifyStatus {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        tracing::warn!("verification page opened without a token");
        return VerifyStatus::Error(MISSING_TOKEN_MESSAGE.to_string());
    };

    match gateway.verify_token(token).await {
        Ok(response) => {
            tracing::info!("magic link verified for {}", response.user.email);
            VerifyStatus::Success(response.user)
        }
        Err(e) => {
            tracing::warn!("magic link verification failed: {}", e);
            VerifyStatus::Error(e.message_or(VERIFY_FAILED_MESSAGE).to_string())
        }
    }
}

/// Schedule the post-verification redirect.
///
/// Only a `Success` status schedules anything. The guard must outlive the delay
/// for the navigation to happen.
pub fn schedule_redirect<F>(
    status: &VerifyStatus,
    navigate: F,
) -> Option<(ScheduledNavigation, impl Future<Output = ()>)>
where
    F: FnOnce(),
{
    match status {
        VerifyStatus::Success(_) => Some(ScheduledNavigation::new(REDIRECT_DELAY, navigate)),
        _ => None,
    }
}
