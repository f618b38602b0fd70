//! Page flow controllers.
//!
//! Each flow is plain state plus async functions over a gateway trait, so the
//! views stay thin and the flows can be driven by fakes in tests. The API
//! facades from the `api` crate are the production gateways.

use api::{
    Ack, ApiError, AuthApi, Ingredient, IngredientsApi, MagicLinkResponse, NewIngredient,
    VerifyResponse,
};

pub mod ingredients;
pub mod login;
pub mod logout;
pub mod verify;

/// Authentication calls a flow may issue.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn request_magic_link(
        &self,
        email: &str,
        full_name: Option<&str>,
    ) -> Result<MagicLinkResponse, ApiError>;

    async fn verify_token(&self, token: &str) -> Result<VerifyResponse, ApiError>;

    async fn logout(&self) -> Result<Ack, ApiError>;
}

/// Ingredient calls a flow may issue.
#[allow(async_fn_in_trait)]
pub trait IngredientGateway {
    async fn list(&self) -> Result<Vec<Ingredient>, ApiError>;

    async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

impl AuthGateway for AuthApi {
    async fn request_magic_link(
        &self,
        email: &str,
        full_name: Option<&str>,
    ) -> Result<MagicLinkResponse, ApiError> {
        AuthApi::request_magic_link(self, email, full_name).await
    }

    async fn verify_token(&self, token: &str) -> Result<VerifyResponse, ApiError> {
        AuthApi::verify_token(self, token).await
    }

    async fn logout(&self) -> Result<Ack, ApiError> {
        AuthApi::logout(self).await
    }
}

impl IngredientGateway for IngredientsApi {
    async fn list(&self) -> Result<Vec<Ingredient>, ApiError> {
        IngredientsApi::list(self).await
    }

    async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, ApiError> {
        IngredientsApi::create(self, ingredient).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        IngredientsApi::delete(self, id).await
    }
}
