//! Upstream payment processor adapter.

use std::time::Duration;

use async_trait::async_trait;

use petstore_types::{GatewayError, PaymentGateway, PaymentRequest, PaymentResponse};

/// Timeout applied to every upstream payment call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Payment gateway backed by a reusable HTTP client.
///
/// The client is constructed once and shared across requests; reqwest pools
/// connections internally, so no per-request client is ever built.
#[derive(Clone)]
pub struct HttpPaymentGateway {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPaymentGateway {
    /// Creates a gateway pointed at the given base URL.
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentResponse, GatewayError> {
        let resp = self
            .http
            .post(format!("{}/payment", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            resp.json()
                .await
                .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            })
        }
    }
}
