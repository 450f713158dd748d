//! Downstream service addressing
//!
//! Service addresses are configured as host and port pairs plus one base
//! path shared by every service. [`ServiceUrls::resolve`] turns them into the
//! three collection URLs once, at start-up.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::IntegrationError;

/// Path segment of the product collection
pub const PRODUCT_PATH: &str = "product";
/// Path segment of the recommendation collection
pub const RECOMMENDATION_PATH: &str = "recommendation";
/// Path segment of the review collection
pub const REVIEW_PATH: &str = "review";

/// Host and port of one downstream service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// Addresses of the three downstream services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEndpoints {
    pub product: ServiceEndpoint,
    pub recommendation: ServiceEndpoint,
    pub review: ServiceEndpoint,
}

impl ServiceEndpoints {
    /// All three services behind one host and port
    pub fn single(host: impl Into<String>, port: u16) -> Self {
        let endpoint = ServiceEndpoint::new(host, port);
        Self {
            product: endpoint.clone(),
            recommendation: endpoint.clone(),
            review: endpoint,
        }
    }
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            product: ServiceEndpoint::new("localhost", 7001),
            recommendation: ServiceEndpoint::new("localhost", 7002),
            review: ServiceEndpoint::new("localhost", 7003),
        }
    }
}

/// Everything the integration layer needs to reach the downstream services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationConfig {
    pub services: ServiceEndpoints,
    /// Base path shared by all services, e.g. `/api/v1`
    pub base_path: String,
    /// Timeout applied to every outbound request
    pub timeout: Duration,
}

impl IntegrationConfig {
    pub fn new(services: ServiceEndpoints, base_path: impl Into<String>) -> Self {
        Self {
            services,
            base_path: base_path.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks that every endpoint is addressable
    pub fn validate(&self) -> Result<(), IntegrationError> {
        let endpoints = [
            (PRODUCT_PATH, &self.services.product),
            (RECOMMENDATION_PATH, &self.services.recommendation),
            (REVIEW_PATH, &self.services.review),
        ];
        for (name, endpoint) in endpoints {
            if endpoint.host.trim().is_empty() {
                return Err(IntegrationError::InvalidConfig(format!(
                    "{} service host is empty",
                    name
                )));
            }
            if endpoint.port == 0 {
                return Err(IntegrationError::InvalidConfig(format!(
                    "{} service port must not be 0",
                    name
                )));
            }
        }
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(IntegrationError::InvalidConfig(format!(
                "base path '{}' must start with '/'",
                self.base_path
            )));
        }
        if self.timeout.is_zero() {
            return Err(IntegrationError::InvalidConfig(
                "request timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self::new(ServiceEndpoints::default(), "/api/v1")
    }
}

/// Collection URLs of the downstream services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrls {
    pub product: String,
    pub recommendation: String,
    pub review: String,
}

impl ServiceUrls {
    /// Composes `http://{host}:{port}{base_path}/{collection}` for each service
    pub fn resolve(config: &IntegrationConfig) -> Self {
        let base_path = config.base_path.trim_end_matches('/');
        let url = |endpoint: &ServiceEndpoint, collection: &str| {
            format!(
                "http://{}:{}{}/{}",
                endpoint.host, endpoint.port, base_path, collection
            )
        };

        Self {
            product: url(&config.services.product, PRODUCT_PATH),
            recommendation: url(&config.services.recommendation, RECOMMENDATION_PATH),
            review: url(&config.services.review, REVIEW_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_composes_urls() {
        let urls = ServiceUrls::resolve(&IntegrationConfig::default());
        assert_eq!(urls.product, "http://localhost:7001/api/v1/product");
        assert_eq!(urls.recommendation, "http://localhost:7002/api/v1/recommendation");
        assert_eq!(urls.review, "http://localhost:7003/api/v1/review");
    }

    #[test]
    fn test_resolve_tolerates_trailing_slash_and_empty_base() {
        let services = ServiceEndpoints::single("product-host", 8080);

        let trailing = ServiceUrls::resolve(&IntegrationConfig::new(services.clone(), "/api/v1/"));
        assert_eq!(trailing.product, "http://product-host:8080/api/v1/product");

        let bare = ServiceUrls::resolve(&IntegrationConfig::new(services, ""));
        assert_eq!(bare.review, "http://product-host:8080/review");
    }

    #[test]
    fn test_validate_rejects_bad_endpoints() {
        let mut config = IntegrationConfig::default();
        assert!(config.validate().is_ok());

        config.services.review.host = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = IntegrationConfig::default();
        config.services.product.port = 0;
        assert!(config.validate().is_err());

        let config = IntegrationConfig::new(ServiceEndpoints::default(), "api");
        assert!(config.validate().is_err());
    }
}
