//! Authentication endpoints.
//!
//! Thin pass-throughs over [`ApiClient`]: no retries, no caching, no local
//! validation. The session itself is a cookie managed by the server.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Ack, MagicLinkRequest, MagicLinkResponse, VerifyResponse, VerifyTokenRequest};

/// Facade over the `/auth` routes.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ask the server to email a magic link. The user is created on first use.
    pub async fn request_magic_link(
        &self,
        email: &str,
        full_name: Option<&str>,
    ) -> Result<MagicLinkResponse, ApiError> {
        let body = MagicLinkRequest {
            email: email.to_string(),
            full_name: full_name.map(str::to_string),
        };
        self.client.post("/auth/magic-link", &body).await
    }

    /// Exchange a magic link token for a session. Tokens are single-use.
    pub async fn verify_token(&self, token: &str) -> Result<VerifyResponse, ApiError> {
        let body = VerifyTokenRequest {
            token: token.to_string(),
        };
        self.client.post("/auth/verify", &body).await
    }

    /// Clear the session cookie server-side.
    pub async fn logout(&self) -> Result<Ack, ApiError> {
        self.client.post_empty("/auth/logout").await
    }
}
