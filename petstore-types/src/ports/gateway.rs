//! Payment gateway port.
//!
//! This trait defines the interface to the upstream payment processor.
//! Implementations can be HTTP clients, recording mocks, etc.

use crate::dto::{PaymentRequest, PaymentResponse};
use crate::error::GatewayError;

/// Port trait for the upstream payment processor.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Forwards an already-validated payment to the upstream processor.
    ///
    /// On success returns the upstream's JSON body verbatim. A single attempt
    /// is made; failures are reported, never retried.
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentResponse, GatewayError>;
}
