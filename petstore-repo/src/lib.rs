//! # Petstore Repo
//!
//! Concrete outbound adapters for the petstore service.
//! This crate provides the implementations of the `ProductCatalog` and
//! `PaymentGateway` ports:
//!
//! - [`MongoCatalog`] - reads product documents from MongoDB (production)
//! - [`MemoryCatalog`] - in-process catalog used as a seed/test fixture
//! - [`HttpPaymentGateway`] - forwards payments to the upstream processor

pub mod gateway;
pub mod memory;
pub mod mongo;

pub use gateway::HttpPaymentGateway;
pub use memory::MemoryCatalog;
pub use mongo::MongoCatalog;

/// Build and initialize the production catalog from a connection string.
///
/// This function:
/// 1. Connects to the document store
/// 2. Verifies liveness with a `ping` (fail fast on an unreachable store)
/// 3. Returns a ready-to-use [`MongoCatalog`]
pub async fn build_catalog(connection_string: &str) -> anyhow::Result<MongoCatalog> {
    MongoCatalog::connect(connection_string).await
}
