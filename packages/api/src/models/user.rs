//! # User model as returned by `/auth/verify`
//!
//! The client never constructs or validates users. It deserializes whatever the
//! server sends and displays it. Fields the server may leave out
//! (`full_name`, `is_active`, `created_at`) are optional so an older or newer
//! backend does not break verification.
//!
//! The helper [`User::display_name`] returns the user's full name or falls back
//! to their username.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// `"admin"`, `"user"` or `"guest"` on the current backend.
    pub role: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Get display name, falling back to username if full name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}
