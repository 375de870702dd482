//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use petstore_types::{AppError, PaymentGateway, ProductCatalog};

use crate::PetstoreService;

/// Application state shared across handlers.
pub struct AppState<C: ProductCatalog, G: PaymentGateway> {
    pub service: PetstoreService<C, G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UpstreamStatus { status, detail } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail,
            ),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(msg) => {
                // The raw dependency error stays in the log; clients get a
                // generic message.
                tracing::error!(error = %msg, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Root greeting. Doubles as the liveness probe.
pub async fn root() -> impl IntoResponse {
    Json("Hello world")
}

/// List the product catalog.
#[tracing::instrument(skip(state))]
pub async fn list_products<C: ProductCatalog, G: PaymentGateway>(
    State(state): State<Arc<AppState<C, G>>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.service.list_products().await?;
    Ok(Json(products))
}

/// Validate and forward a payment to the upstream processor.
#[tracing::instrument(skip(state, payload))]
pub async fn create_payment<C: ProductCatalog, G: PaymentGateway>(
    State(state): State<Arc<AppState<C, G>>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let receipt = state.service.create_payment(payload).await?;
    Ok(Json(receipt))
}
