//! Petstore Application Service
//!
//! Orchestrates catalog reads and payment forwarding through the port traits.
//! Contains NO infrastructure logic - pure business orchestration.

use petstore_types::{
    AppError, PaymentGateway, PaymentRequest, PaymentResponse, Product, ProductCatalog,
};

/// Application service for the petstore operations.
///
/// Generic over `C: ProductCatalog` and `G: PaymentGateway` - the adapters
/// are injected at compile time. This enables:
/// - Swapping the document store or upstream client without code changes
/// - Testing with in-memory fakes
/// - Compile-time checks for port implementation
pub struct PetstoreService<C: ProductCatalog, G: PaymentGateway> {
    catalog: C,
    gateway: G,
}

impl<C: ProductCatalog, G: PaymentGateway> PetstoreService<C, G> {
    /// Creates a new service over the given adapters.
    pub fn new(catalog: C, gateway: G) -> Self {
        Self { catalog, gateway }
    }

    /// Lists the full product catalog.
    ///
    /// Order is whatever the store cursor yields; it carries no meaning.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.catalog.list_products().await.map_err(Into::into)
    }

    /// Validates a payment payload and forwards it upstream.
    ///
    /// Validation happens before any network call, in order:
    /// 1. `total_amount` must be present and numeric
    /// 2. `total_amount` must be strictly greater than zero
    ///
    /// On success the upstream's JSON body is returned unchanged.
    pub async fn create_payment(
        &self,
        payload: serde_json::Value,
    ) -> Result<PaymentResponse, AppError> {
        let total_amount = payload
            .get("total_amount")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| AppError::BadRequest("total_amount must be a number".into()))?;

        if total_amount <= 0.0 {
            return Err(AppError::BadRequest(
                "total_amount must be greater than zero".into(),
            ));
        }

        self.gateway
            .submit(&PaymentRequest { total_amount })
            .await
            .map_err(Into::into)
    }
}
