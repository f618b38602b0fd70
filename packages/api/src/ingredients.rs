//! Ingredient endpoints.

use serde::de::IgnoredAny;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Ingredient, IngredientUpdate, NewIngredient};

/// Facade over the `/ingredients` routes.
#[derive(Debug, Clone)]
pub struct IngredientsApi {
    client: ApiClient,
}

impl IngredientsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All ingredients, in server order.
    pub async fn list(&self) -> Result<Vec<Ingredient>, ApiError> {
        self.client.get("/ingredients").await
    }

    pub async fn get(&self, id: &str) -> Result<Ingredient, ApiError> {
        self.client.get(&format!("/ingredients/{id}")).await
    }

    pub async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, ApiError> {
        self.client.post("/ingredients", ingredient).await
    }

    /// Partial update. Not used by any view yet.
    pub async fn update(
        &self,
        id: &str,
        changes: &IngredientUpdate,
    ) -> Result<Ingredient, ApiError> {
        self.client.put(&format!("/ingredients/{id}"), changes).await
    }

    /// Delete an ingredient. The server answers 204 with no body; any body
    /// that does come back is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete::<IgnoredAny>(&format!("/ingredients/{id}"))
            .await
            .map(|_| ())
    }
}
