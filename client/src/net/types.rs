//! Shared wire DTOs for the catalog REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the upstream JSON exactly so the same structs serve as
//! request bodies, response bodies, and UI state without conversion layers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product as returned by the REST API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier. Never changes after creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub explanation: String,
    /// Price as a whole number.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub price: i64,
}

impl Product {
    /// Attach a server-assigned `id` to a create payload.
    #[must_use]
    pub fn with_id(id: impl Into<String>, draft: NewProduct) -> Self {
        Self { id: id.into(), name: draft.name, explanation: draft.explanation, price: draft.price }
    }
}

/// Create payload: a product before the server has assigned an `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub explanation: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub price: i64,
}

/// Body of `GET /product`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListEnvelope {
    pub products: Vec<Product>,
}

/// Body of `POST /product`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
