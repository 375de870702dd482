//! # Petstore Client SDK
//!
//! A typed Rust client for the Petstore API.

use petstore_types::{PaymentRequest, PaymentResponse, Product};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Petstore API client.
pub struct PetstoreClient {
    base_url: String,
    http: Client,
}

impl PetstoreClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is up.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(format!("{}/", self.base_url)).send().await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the root greeting.
    pub async fn greeting(&self) -> Result<String, ClientError> {
        self.get("/").await
    }

    /// Lists the product catalog.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.get("/products").await
    }

    /// Submits a payment for the given total amount.
    ///
    /// Returns the upstream processor's JSON receipt as forwarded by the
    /// service.
    pub async fn create_payment(&self, total_amount: f64) -> Result<PaymentResponse, ClientError> {
        let req = PaymentRequest { total_amount };
        self.post("/payments", &req).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
