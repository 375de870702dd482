//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use petstore_types::domain::Product;
use petstore_types::dto::PaymentRequest;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Constant greeting", body = inline(String), example = json!("Hello world"))
    )
)]
async fn root() {}

/// List the product catalog
#[utoipa::path(
    get,
    path = "/products",
    tag = "catalog",
    responses(
        (status = 200, description = "All products, storage-internal identifiers stripped", body = Vec<Product>),
        (status = 500, description = "Document store failure (generic message)")
    )
)]
async fn list_products() {}

/// Validate and forward a payment
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Upstream JSON body, forwarded unchanged", body = inline(serde_json::Value), example = json!({"id": "pay_1", "status": "ok"})),
        (status = 400, description = "Missing, non-numeric, or non-positive total_amount"),
        (status = 502, description = "Upstream payment service unreachable")
    )
)]
async fn create_payment() {}

/// OpenAPI documentation for the Petstore API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Petstore Service API",
        version = "1.0.0",
        description = "A small pet store backend exposing the product catalog and a payment-forwarding endpoint. Products are read from an external document store; payments are validated locally and forwarded to the upstream payment processor.",
        license(name = "MIT"),
    ),
    paths(
        root,
        list_products,
        create_payment,
    ),
    components(
        schemas(
            Product,
            PaymentRequest,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "catalog", description = "Product catalog reads"),
        (name = "payments", description = "Payment validation and forwarding"),
    )
)]
pub struct ApiDoc;
