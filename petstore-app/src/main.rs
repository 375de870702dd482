//! # Petstore Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Connect the document-store catalog (fail fast if unreachable)
//! - Construct the upstream payment gateway
//! - Start the HTTP server
//! - Release the store connection on every exit path

mod config;

use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use petstore_hex::{PetstoreService, inbound::HttpServer};
use petstore_repo::{HttpPaymentGateway, build_catalog};

/// Sets up OTLP span export when an exporter endpoint is configured.
///
/// Without `OTEL_EXPORTER_OTLP_ENDPOINT` the service runs with local logging
/// only; tracing is observational and never required for correctness.
fn init_tracer() -> anyhow::Result<Option<sdktrace::SdkTracerProvider>> {
    if std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").is_err() {
        return Ok(None);
    }

    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    Ok(Some(provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize OpenTelemetry tracing (optional)
    let otel_provider = init_tracer()?;
    let telemetry = otel_provider
        .as_ref()
        .map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer("petstore-service")));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,petstore_app=debug,petstore_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    if otel_provider.is_none() {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set - traces stay local");
    }

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting petstore server on port {}", config.port);
    tracing::info!("Using document store: {}", config.store_connection_string);
    tracing::info!("Forwarding payments to: {}", config.payment_base_url);

    // Connect the catalog (pings the store, fails fast when unreachable)
    let catalog = build_catalog(&config.store_connection_string).await?;

    // Construct the shared upstream client
    let gateway = HttpPaymentGateway::new(&config.payment_base_url)?;

    // Create the petstore service
    let service = PetstoreService::new(catalog.clone(), gateway);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    let result = server.run(&addr).await;

    // Release outbound resources on every exit path; the store close must
    // run even when the server loop returned an error.
    catalog.shutdown().await;
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }

    result
}
