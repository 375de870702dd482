//! Product domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// A product in the pet store catalog.
///
/// Products are created and maintained outside this service; the catalog is
/// read-only for the lifetime of the process. The serialized shape is the
/// public API contract - storage-internal fields never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable, externally assigned identifier (slug)
    #[schema(example = "catnip-toy-set")]
    pub id: String,
    /// Display name
    #[schema(example = "Feline Fiesta Catnip Toys")]
    pub name: String,
    /// Short marketing description
    pub description: String,
    /// Price in the store currency, never negative
    #[schema(example = 22.0)]
    pub price: f64,
    /// URL of the product image
    pub image_url: String,
    /// Catalog category
    #[schema(example = "Cats")]
    pub category: String,
}

impl Product {
    /// Creates a product, enforcing the catalog invariants.
    ///
    /// # Validation
    /// - `id` and `name` cannot be empty
    /// - `price` cannot be negative
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Product id cannot be empty".into(),
            ));
        }
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Product name cannot be empty".into(),
            ));
        }
        if price < 0.0 || !price.is_finite() {
            return Err(DomainError::NegativePrice);
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            image_url: image_url.into(),
            category: category.into(),
        })
    }
}
