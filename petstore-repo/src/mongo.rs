//! MongoDB catalog adapter.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use petstore_types::{CatalogError, Product, ProductCatalog};

/// Database holding the catalog documents.
pub const DATABASE_NAME: &str = "petstore";
/// Collection holding the product documents.
pub const COLLECTION_NAME: &str = "products";

/// Catalog adapter backed by a long-lived MongoDB connection pool.
///
/// One client is opened at process startup and shared across all concurrent
/// requests; the driver's pool handles concurrent use, the adapter adds no
/// locking of its own. Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct MongoCatalog {
    client: Client,
    products: Collection<Product>,
}

impl MongoCatalog {
    /// Connects to the document store and verifies it is reachable.
    ///
    /// Startup must not proceed against a broken dependency: if the `ping`
    /// fails, the partially opened pool is shut down and the error is
    /// returned.
    pub async fn connect(connection_string: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(connection_string).await?;
        let database = client.database(DATABASE_NAME);

        if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
            client.clone().shutdown().await;
            anyhow::bail!("document store unreachable at startup: {e}");
        }

        let products = database.collection::<Product>(COLLECTION_NAME);
        tracing::info!(collection = COLLECTION_NAME, "connected to document store");

        Ok(Self { client, products })
    }

    /// Closes the underlying connection pool.
    ///
    /// Dropping the client would release it eventually; calling this drains
    /// the pool before the process exits.
    pub async fn shutdown(self) {
        // Collection handles keep the pool alive; release them first.
        let Self { client, products } = self;
        drop(products);
        client.shutdown().await;
    }
}

#[async_trait]
impl ProductCatalog for MongoCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        // The projection drops the storage-internal `_id`, so documents
        // deserialize straight into the public Product shape.
        let cursor = self
            .products
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .await
            .map_err(|e| CatalogError::Store(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| CatalogError::Store(e.to_string()))
    }
}
