//! Error types for the petstore service.

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Catalog adapter errors (document store access failures).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Document store error: {0}")]
    Store(String),
}

/// Payment gateway errors (upstream processor call failures).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The upstream answered with a non-success HTTP status.
    /// Status and body are surfaced to the caller unchanged.
    #[error("Upstream payment service returned {status}")]
    Upstream { status: u16, body: String },

    /// The upstream could not be reached (connect failure, timeout).
    #[error("Payment service unavailable: {0}")]
    Unreachable(String),

    /// The upstream answered success but the body was not valid JSON.
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Propagated upstream HTTP error: same status, upstream body as detail.
    #[error("Upstream error {status}")]
    UpstreamStatus { status: u16, detail: String },

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Internal failure. The detail is logged server-side; clients only ever
    /// see a generic message.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Store(e) => AppError::Internal(e),
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream { status, body } => AppError::UpstreamStatus {
                status,
                detail: body,
            },
            GatewayError::Unreachable(e) => {
                AppError::BadGateway(format!("payment service unavailable: {e}"))
            }
            GatewayError::InvalidResponse(e) => {
                AppError::BadGateway(format!("invalid upstream response: {e}"))
            }
        }
    }
}
