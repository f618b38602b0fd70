//! Wire types exchanged with the SmartKitchen API.

mod auth;
mod ingredient;
mod user;

pub use auth::{Ack, MagicLinkRequest, MagicLinkResponse, VerifyResponse, VerifyTokenRequest};
pub use ingredient::{Ingredient, IngredientUpdate, NewIngredient};
pub use user::User;
