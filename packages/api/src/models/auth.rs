use serde::{Deserialize, Serialize};

use super::User;

/// Body of `POST /auth/magic-link`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MagicLinkRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Acknowledgement of a magic link request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MagicLinkResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub expires_in_minutes: Option<u32>,
}

/// Body of `POST /auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Successful verification. The session cookie arrives alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
    #[serde(default)]
    pub session_token: Option<String>,
}

/// Generic `{"message": ...}` confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}
