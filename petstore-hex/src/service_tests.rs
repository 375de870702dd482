//! PetstoreService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use petstore_types::{
        AppError, CatalogError, GatewayError, PaymentGateway, PaymentRequest, PaymentResponse,
        Product, ProductCatalog,
    };

    use crate::PetstoreService;

    /// Catalog fake with a fixed answer.
    pub enum MockCatalog {
        Ok(Vec<Product>),
        Err(String),
    }

    #[async_trait]
    impl ProductCatalog for MockCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            match self {
                MockCatalog::Ok(products) => Ok(products.clone()),
                MockCatalog::Err(msg) => Err(CatalogError::Store(msg.clone())),
            }
        }
    }

    /// Gateway outcome configured per test.
    pub enum MockOutcome {
        Ok(serde_json::Value),
        Upstream(u16, String),
        Unreachable(String),
    }

    /// Recording gateway fake. Clones share the submission log, so a test can
    /// keep a handle and assert whether the upstream was contacted.
    #[derive(Clone)]
    pub struct MockGateway {
        submitted: Arc<Mutex<Vec<PaymentRequest>>>,
        outcome: Arc<MockOutcome>,
    }

    impl MockGateway {
        pub fn with_outcome(outcome: MockOutcome) -> Self {
            Self {
                submitted: Arc::new(Mutex::new(Vec::new())),
                outcome: Arc::new(outcome),
            }
        }

        pub fn ok(value: serde_json::Value) -> Self {
            Self::with_outcome(MockOutcome::Ok(value))
        }

        pub fn submitted(&self) -> Vec<PaymentRequest> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn submit(
            &self,
            request: &PaymentRequest,
        ) -> Result<PaymentResponse, GatewayError> {
            self.submitted.lock().unwrap().push(request.clone());
            match &*self.outcome {
                MockOutcome::Ok(value) => Ok(value.clone()),
                MockOutcome::Upstream(status, body) => Err(GatewayError::Upstream {
                    status: *status,
                    body: body.clone(),
                }),
                MockOutcome::Unreachable(msg) => Err(GatewayError::Unreachable(msg.clone())),
            }
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("catnip-toy-set", "Feline Fiesta Catnip Toys", "", 22.0, "", "Cats")
                .unwrap(),
            Product::new("dog-spa-shampoo", "Tail Waggers Spa Shampoo", "", 18.25, "", "Dogs")
                .unwrap(),
        ]
    }

    #[tokio::test]
    async fn test_list_products_success() {
        let service = PetstoreService::new(
            MockCatalog::Ok(sample_products()),
            MockGateway::ok(serde_json::json!({})),
        );

        let products = service.list_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "catnip-toy-set");
    }

    #[tokio::test]
    async fn test_list_products_store_error_maps_to_internal() {
        let service = PetstoreService::new(
            MockCatalog::Err("connection reset by peer".into()),
            MockGateway::ok(serde_json::json!({})),
        );

        let result = service.list_products().await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_create_payment_forwards_exact_amount() {
        let gateway = MockGateway::ok(serde_json::json!({"id": "pay_1", "status": "ok"}));
        let service = PetstoreService::new(MockCatalog::Ok(vec![]), gateway.clone());

        let receipt = service
            .create_payment(serde_json::json!({"total_amount": 25.0}))
            .await
            .unwrap();

        assert_eq!(receipt, serde_json::json!({"id": "pay_1", "status": "ok"}));
        assert_eq!(
            gateway.submitted(),
            vec![PaymentRequest {
                total_amount: 25.0
            }]
        );
    }

    #[tokio::test]
    async fn test_create_payment_missing_amount_rejected() {
        let gateway = MockGateway::ok(serde_json::json!({}));
        let service = PetstoreService::new(MockCatalog::Ok(vec![]), gateway.clone());

        let result = service.create_payment(serde_json::json!({})).await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("number")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert!(gateway.submitted().is_empty(), "upstream must not be contacted");
    }

    #[tokio::test]
    async fn test_create_payment_non_numeric_amount_rejected() {
        let gateway = MockGateway::ok(serde_json::json!({}));
        let service = PetstoreService::new(MockCatalog::Ok(vec![]), gateway.clone());

        let result = service
            .create_payment(serde_json::json!({"total_amount": "abc"}))
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("number")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert!(gateway.submitted().is_empty(), "upstream must not be contacted");
    }

    #[tokio::test]
    async fn test_create_payment_zero_amount_rejected() {
        let gateway = MockGateway::ok(serde_json::json!({}));
        let service = PetstoreService::new(MockCatalog::Ok(vec![]), gateway.clone());

        let result = service
            .create_payment(serde_json::json!({"total_amount": 0}))
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("greater than zero")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_payment_negative_amount_rejected() {
        let gateway = MockGateway::ok(serde_json::json!({}));
        let service = PetstoreService::new(MockCatalog::Ok(vec![]), gateway.clone());

        let result = service
            .create_payment(serde_json::json!({"total_amount": -5}))
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("greater than zero")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert!(gateway.submitted().is_empty(), "upstream must not be contacted");
    }

    #[tokio::test]
    async fn test_create_payment_upstream_error_passthrough() {
        let gateway =
            MockGateway::with_outcome(MockOutcome::Upstream(402, "card declined".into()));
        let service = PetstoreService::new(MockCatalog::Ok(vec![]), gateway);

        let result = service
            .create_payment(serde_json::json!({"total_amount": 10.0}))
            .await;

        match result {
            Err(AppError::UpstreamStatus { status, detail }) => {
                assert_eq!(status, 402);
                assert_eq!(detail, "card declined");
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_payment_unreachable_maps_to_bad_gateway() {
        let gateway =
            MockGateway::with_outcome(MockOutcome::Unreachable("connect timeout".into()));
        let service = PetstoreService::new(MockCatalog::Ok(vec![]), gateway);

        let result = service
            .create_payment(serde_json::json!({"total_amount": 10.0}))
            .await;

        match result {
            Err(AppError::BadGateway(msg)) => assert!(msg.contains("connect timeout")),
            other => panic!("expected BadGateway, got {other:?}"),
        }
    }
}
