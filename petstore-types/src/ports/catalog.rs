//! Product catalog port trait.
//!
//! This is the primary read port in our hexagonal architecture.
//! Adapters (MongoDB, InMemory) implement this trait.

use crate::domain::Product;
use crate::error::CatalogError;

/// The catalog port for product reads.
///
/// The service never writes products; documents are created and updated
/// externally. Implementations must already have stripped any
/// storage-internal identifier from what they return.
#[async_trait::async_trait]
pub trait ProductCatalog: Send + Sync + 'static {
    /// Lists every product in the catalog, in cursor order.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}
