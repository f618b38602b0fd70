//! Normalized API errors.
//!
//! Every failure the client can observe (transport errors, non-2xx responses,
//! undecodable bodies) is collapsed into [`ApiError`] before it leaves this
//! crate, so views only ever deal with a message and an optional status code.

use serde_json::Value;

/// Message used when the server gives no usable `detail` or `message`.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// The `{message, status}` shape all failures are normalized into.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status code, if the failure came with a response.
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Normalize a non-2xx response.
    ///
    /// The message is the body's `detail` field, else its `message` field, else
    /// [`UNEXPECTED_ERROR`]. A `detail` list (request validation failures) is
    /// flattened into its `msg` entries.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = server_message(body).unwrap_or_else(|| UNEXPECTED_ERROR.to_string());
        Self::new(message, Some(status))
    }

    /// Normalize a transport failure (connection refused, CORS, aborted fetch).
    pub fn from_transport(error: reqwest::Error) -> Self {
        tracing::debug!("transport error: {}", error);
        Self::new(UNEXPECTED_ERROR, error.status().map(|s| s.as_u16()))
    }

    /// The message, or `fallback` when the message is empty.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    detail_message(value.get("detail")).or_else(|| text(value.get("message")))
}

fn detail_message(detail: Option<&Value>) -> Option<String> {
    match detail? {
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .filter(|msg| !msg.is_empty())
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => text(Some(other)),
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
