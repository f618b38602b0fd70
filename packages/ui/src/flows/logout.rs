use super::AuthGateway;

pub const LOGOUT_FAILED_MESSAGE: &str = "Failed to log out. Please try again.";

/// End the server session.
///
/// On `Ok` the caller clears the local user and returns to login, whatever the
/// confirmation payload says. On `Err` the user stays where they are and sees
/// the message.
pub async fn sign_out<G: AuthGateway>(gateway: &G) -> Result<(), String> {
    match gateway.logout().await {
        Ok(ack) => {
            tracing::info!("logged out: {}", ack.message);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("logout failed: {}", e);
            Err(e.message_or(LOGOUT_FAILED_MESSAGE).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Ack, ApiError, MagicLinkResponse, VerifyResponse};

    struct FakeAuth(Result<Ack, ApiError>);

    impl AuthGateway for FakeAuth {
        async fn request_magic_link(
            &self,
            _email: &str,
            _full_name: Option<&str>,
        ) -> Result<MagicLinkResponse, ApiError> {
            unreachable!()
        }

        async fn verify_token(&self, _token: &str) -> Result<VerifyResponse, ApiError> {
            unreachable!()
        }

        async fn logout(&self) -> Result<Ack, ApiError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_any_ack_counts_as_signed_out() {
        assert_eq!(sign_out(&FakeAuth(Ok(Ack::default()))).await, Ok(()));
        let ack = Ack {
            message: "Logged out successfully".to_string(),
        };
        assert_eq!(sign_out(&FakeAuth(Ok(ack))).await, Ok(()));
    }

    #[tokio::test]
    async fn test_failure_reports_message() {
        let failed = FakeAuth(Err(ApiError::new("", None)));
        assert_eq!(sign_out(&failed).await, Err(LOGOUT_FAILED_MESSAGE.to_string()));

        let detailed = FakeAuth(Err(ApiError::new("Service unavailable", Some(503))));
        assert_eq!(sign_out(&detailed).await, Err("Service unavailable".to_string()));
    }
}
