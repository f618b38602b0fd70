//! HTTP client wrapper for the SmartKitchen API.
//!
//! Owns transport details only: base URL, JSON headers, credential forwarding,
//! body decoding, and mapping every failure to [`ApiError`].

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AuthApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, UNEXPECTED_ERROR};
use crate::ingredients::IngredientsApi;

/// JSON client bound to one API base URL.
///
/// Cloning is cheap and clones share the connection pool and, on native
/// targets, the cookie jar holding the session cookie.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        let http = builder.build().map_err(ApiError::from_transport)?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Build a client from [`ApiConfig::from_env`].
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Authentication endpoints.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Ingredient endpoints.
    pub fn ingredients(&self) -> IngredientsApi {
        IngredientsApi::new(self.clone())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let request = self.http.request(method, self.config.endpoint(path));
        // Browsers only attach the session cookie cross-origin when asked to.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        // The status is known from here on, even if the body never arrives.
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!("reading {} response body failed: {}", status.as_u16(), e);
            ApiError::new(UNEXPECTED_ERROR, Some(status.as_u16()))
        })?;

        if !status.is_success() {
            let error = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!("request failed with {}: {}", status.as_u16(), error.message);
            return Err(error);
        }

        decode_body(status.as_u16(), &body)
    }
}

/// Decode a 2xx body. Empty bodies (204) decode as JSON `null`.
fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("could not decode {} response: {}", status, e);
        ApiError::new(UNEXPECTED_ERROR, Some(status))
    })
}
