//! Custom Test Assertions
//!
//! Assertion helpers with descriptive failure messages for composite views
//! and error bodies.

use serde_json::Value;

use domain_composite::{PageMetadata, ProductAggregate, ProductComposite};

/// Asserts that an aggregate carries the product data of `expected`
///
/// Only product fields are compared; item pages depend on pagination.
pub fn assert_aggregate_matches(actual: &ProductAggregate, expected: &ProductComposite) {
    assert_eq!(
        actual.product_id, expected.product_id,
        "Aggregate product id mismatch: expected {}, got {}",
        expected.product_id, actual.product_id
    );
    assert_eq!(
        actual.name, expected.name,
        "Aggregate name mismatch for product {}",
        expected.product_id
    );
    assert!(
        (actual.weight - expected.weight).abs() < f64::EPSILON,
        "Aggregate weight mismatch: expected {}, got {}",
        expected.weight,
        actual.weight
    );
}

/// Asserts page coordinates and totals
pub fn assert_page_metadata(
    actual: &PageMetadata,
    number: u32,
    size: u32,
    total_elements: u64,
) {
    assert_eq!(
        (actual.number, actual.size, actual.total_elements),
        (number, size, total_elements),
        "Page metadata mismatch: expected number={} size={} totalElements={}, got {:?}",
        number,
        size,
        total_elements,
        actual
    );
}

/// Asserts that a JSON body is the error envelope with the given status and path
pub fn assert_error_envelope(body: &Value, status: u16, path: &str) {
    assert_eq!(
        body["httpStatus"].as_u64(),
        Some(u64::from(status)),
        "Expected httpStatus {} in error body: {}",
        status,
        body
    );
    assert_eq!(
        body["path"].as_str(),
        Some(path),
        "Expected path {} in error body: {}",
        path,
        body
    );
    assert!(
        body["message"].is_string(),
        "Error body has no message: {}",
        body
    );
    assert!(
        body["timestamp"].is_string(),
        "Error body has no timestamp: {}",
        body
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_accepts_complete_body() {
        let body = json!({
            "timestamp": "2024-01-01T00:00:00Z",
            "path": "/api/v1/product-composite/13",
            "httpStatus": 404,
            "message": "No product found for productId: 13"
        });
        assert_error_envelope(&body, 404, "/api/v1/product-composite/13");
    }

    #[test]
    #[should_panic(expected = "Expected httpStatus 404")]
    fn test_error_envelope_rejects_wrong_status() {
        let body = json!({
            "timestamp": "2024-01-01T00:00:00Z",
            "path": "/x",
            "httpStatus": 500,
            "message": "boom"
        });
        assert_error_envelope(&body, 404, "/x");
    }
}
