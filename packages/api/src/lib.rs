//! # API crate — typed client for the SmartKitchen HTTP API
//!
//! This crate is the only place in the workspace that talks to the network. The
//! `ui` crate drives it from the browser; tests drive it natively against a mock
//! server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL resolution (`SMARTKITCHEN_API_URL`, local fallback) |
//! | [`client`] | [`ApiClient`]: JSON requests with cookie credentials and error normalization |
//! | [`error`] | [`ApiError`], the single `{message, status}` shape every failure collapses into |
//! | [`auth`] | [`AuthApi`] facade: magic link request, token verification, logout |
//! | [`ingredients`] | [`IngredientsApi`] facade: pantry CRUD |
//! | [`models`] | Wire types shared with the server |
//!
//! ## Endpoints
//!
//! - **Authentication**: `POST /auth/magic-link`, `POST /auth/verify`, `POST /auth/logout`
//! - **Ingredients**: `GET /ingredients`, `GET|PUT|DELETE /ingredients/{id}`, `POST /ingredients`

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod models;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, UNEXPECTED_ERROR};
pub use ingredients::IngredientsApi;
pub use models::{
    Ack, Ingredient, IngredientUpdate, MagicLinkRequest, MagicLinkResponse, NewIngredient, User,
    VerifyResponse, VerifyTokenRequest,
};
