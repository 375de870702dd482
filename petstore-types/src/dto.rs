//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Payment payload forwarded to the upstream processor.
///
/// This is exactly the wire shape the upstream expects; nothing else is added
/// before forwarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentRequest {
    /// Total amount charged, must be strictly greater than zero
    #[schema(example = 25.0)]
    pub total_amount: f64,
}

/// Opaque JSON returned verbatim from the upstream payment service.
pub type PaymentResponse = serde_json::Value;
