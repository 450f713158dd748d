//! HTTP tests for the composite API
//!
//! The router is driven with `oneshot` over in-memory backends.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

use core_kernel::PortError;
use domain_composite::EventChannels;
use interface_api::{config::ApiConfig, create_router, spawn_event_consumers, AppState};
use test_utils::*;

const COMPOSITE_PATH: &str = "/api/v1/product-composite";

fn app(backends: &MockBackends) -> (Router, EventChannels) {
    let (service, channels) = backends.service_with_channels(8);
    let router = create_router(AppState::new(service, ApiConfig::default()));
    (router, channels)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(COMPOSITE_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

mod read {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_aggregate() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, _channels) = app(&backends);

        let (status, body) = send(router, get(&format!("{}/42", COMPOSITE_PATH))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["productID"], 42);
        assert_eq!(body["name"], "Shovel");
        assert_eq!(body["recommendations"]["content"].as_array().unwrap().len(), 3);
        assert_eq!(body["recommendations"]["content"][0]["author"], "author-0");
        assert_eq!(body["reviews"]["page"]["size"], 10);
        assert_eq!(body["reviews"]["page"]["number"], 0);
        assert_eq!(body["reviews"]["page"]["totalElements"], 2);
    }

    #[tokio::test]
    async fn test_get_forwards_page_coordinates() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, _channels) = app(&backends);

        let (status, body) = send(
            router,
            get(&format!("{}/42?pageNumber=1&pageSize=2", COMPOSITE_PATH)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"]["content"].as_array().unwrap().len(), 1);
        assert_eq!(body["recommendations"]["page"]["number"], 1);
        assert_eq!(body["recommendations"]["page"]["totalPages"], 2);
    }

    #[tokio::test]
    async fn test_missing_product_is_404_envelope() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, _channels) = app(&backends);
        let path = format!("{}/13", COMPOSITE_PATH);

        let (status, body) = send(router, get(&path)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error_envelope(&body, 404, &path);
        assert_eq!(body["message"], "No product found for productId: 13");
    }

    #[tokio::test]
    async fn test_zero_page_size_is_422() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, _channels) = app(&backends);

        let (status, body) = send(router, get(&format!("{}/42?pageSize=0", COMPOSITE_PATH))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&body, 422, &format!("{}/42", COMPOSITE_PATH));
        assert!(backends.recommendations.page_requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400() {
        let backends = MockBackends::empty();
        let (router, _channels) = app(&backends);
        let path = format!("{}/abc", COMPOSITE_PATH);

        let (status, body) = send(router, get(&path)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_envelope(&body, 400, &path);
        assert_eq!(backends.products.get_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_downstream_is_422() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        backends
            .recommendations
            .fail_listing_with(PortError::invalid_input("Invalid productId: 42"))
            .await;
        let (router, _channels) = app(&backends);

        let (status, body) = send(router, get(&format!("{}/42", COMPOSITE_PATH))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Invalid productId: 42");
    }

    #[tokio::test]
    async fn test_upstream_status_is_passed_through() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        backends
            .reviews
            .fail_listing_with(PortError::upstream(503, "Review service unavailable", ""))
            .await;
        let (router, _channels) = app(&backends);

        let (status, body) = send(router, get(&format!("{}/42", COMPOSITE_PATH))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["httpStatus"], 503);
        assert_eq!(body["message"], "Review service unavailable");
    }

    #[tokio::test]
    async fn test_transport_failure_is_502() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        backends
            .products
            .fail_get_with(PortError::transport("connection refused"))
            .await;
        let (router, _channels) = app(&backends);

        let (status, body) = send(router, get(&format!("{}/42", COMPOSITE_PATH))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], "connection refused");
    }
}

mod write {
    use super::*;

    #[tokio::test]
    async fn test_post_creates_every_entity() {
        let backends = MockBackends::empty();
        let (router, _channels) = app(&backends);
        let composite = ProductCompositeBuilder::new()
            .with_recommendations(2)
            .with_reviews(1)
            .build();

        let (status, body) = send(router, post_json(serde_json::to_string(&composite).unwrap())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["productID"], 42);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
        assert!(body["recommendations"][0]["recommendationID"].is_number());
        assert_eq!(backends.total_create_calls(), 4);
    }

    #[tokio::test]
    async fn test_post_without_items_creates_product_only() {
        let backends = MockBackends::empty();
        let (router, _channels) = app(&backends);
        let body = json!({"productID": 7, "name": "Rake", "weight": 1.25}).to_string();

        let (status, _) = send(router, post_json(body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(backends.total_create_calls(), 1);
        assert!(backends.products.contains(IdFixtures::other_product_id()).await);
    }

    #[tokio::test]
    async fn test_duplicate_product_is_422() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, _channels) = app(&backends);
        let composite = ProductCompositeBuilder::new().build();

        let (status, body) = send(router, post_json(serde_json::to_string(&composite).unwrap())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&body, 422, COMPOSITE_PATH);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let backends = MockBackends::empty();
        let (router, _channels) = app(&backends);

        let (status, body) = send(router, post_json("{".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_envelope(&body, 400, COMPOSITE_PATH);
        assert_eq!(backends.total_create_calls(), 0);
    }
}

mod delete {
    use super::*;

    fn delete_request(id: i32) -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("{}/{}", COMPOSITE_PATH, id))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_delete_is_accepted_and_publishes_three_events() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, mut channels) = app(&backends);

        let (status, body) = send(router, delete_request(42)).await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, Value::Null);
        for receiver in [
            &mut channels.products,
            &mut channels.recommendations,
            &mut channels.reviews,
        ] {
            let payload = receiver.try_recv().unwrap();
            let event: Value = serde_json::from_slice(&payload).unwrap();
            assert_eq!(event["type"], "DELETE");
            assert_eq!(event["key"], 42);
        }
        // Nothing is deleted synchronously
        assert!(backends.products.contains(IdFixtures::product_id()).await);
    }

    #[tokio::test]
    async fn test_consumers_delete_product_data() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, channels) = app(&backends);
        spawn_event_consumers(
            channels,
            backends.products.clone(),
            backends.recommendations.clone(),
            backends.reviews.clone(),
        );

        let (status, _) = send(router, delete_request(42)).await;
        assert_eq!(status, StatusCode::ACCEPTED);

        tokio::time::timeout(Duration::from_secs(5), async {
            while backends.products.delete_calls() < 1
                || backends.recommendations.delete_calls() < 1
                || backends.reviews.delete_calls() < 1
            {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();

        let product_id = IdFixtures::product_id();
        assert!(!backends.products.contains(product_id).await);
        assert_eq!(backends.recommendations.count_for_product(product_id).await, 0);
        assert_eq!(backends.reviews.count_for_product(product_id).await, 0);
    }

    #[tokio::test]
    async fn test_closed_topic_is_503() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (router, channels) = app(&backends);
        drop(channels);

        let (status, body) = send(router, delete_request(42)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_error_envelope(&body, 503, &format!("{}/42", COMPOSITE_PATH));
    }
}

mod ambient {
    use super::*;

    #[tokio::test]
    async fn test_health_is_served_at_root() {
        let (router, _channels) = app(&MockBackends::empty());

        let (status, body) = send(router, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let (router, _channels) = app(&MockBackends::empty());

        let response = router.oneshot(get("/health")).await.unwrap();

        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert_eq!(id.len(), 36);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let (router, _channels) = app(&MockBackends::empty());
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn test_custom_base_path() {
        let backends = MockBackends::seeded(IdFixtures::product_id()).await;
        let (service, _channels) = backends.service_with_channels(4);
        let config = ApiConfig {
            base_path: "/store/".to_string(),
            ..ApiConfig::default()
        };
        let router = create_router(AppState::new(service, config));

        let (status, _) = send(router, get("/store/product-composite/42")).await;

        assert_eq!(status, StatusCode::OK);
    }
}
