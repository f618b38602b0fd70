//! Pantry ingredient types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ingredient as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub calories_per_unit: Option<f64>,
    /// Free-form extension data. This client never interprets it.
    #[serde(default)]
    pub additional_data: Map<String, Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /ingredients`. Absent optionals are sent as explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub calories_per_unit: Option<f64>,
    pub additional_data: Map<String, Value>,
}

impl NewIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            unit: None,
            calories_per_unit: None,
            additional_data: Map::new(),
        }
    }
}

/// Partial body of `PUT /ingredients/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<Map<String, Value>>,
}
