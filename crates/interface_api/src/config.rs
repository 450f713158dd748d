//! API configuration
//!
//! Loaded once at start-up from `API_`-prefixed environment variables layered
//! over the defaults below. Nested fields use `__`, for example
//! `API_SERVICES__REVIEW__PORT=9003` or `API_PAGINATION__PAGE_SIZE=20`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use core_kernel::{CoreError, PaginationDefaults};
use infra_http::{IntegrationConfig, ServiceEndpoints};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level, used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// Base path of the composite routes and of every downstream service
    pub base_path: String,
    /// Downstream service addresses
    pub services: ServiceEndpoints,
    /// Page coordinates used when a caller omits them
    pub pagination: PaginationDefaults,
    /// Timeout of each downstream request, in seconds
    pub request_timeout_secs: u64,
    /// Capacity of each in-process event topic
    pub event_buffer: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            base_path: "/api/v1".to_string(),
            services: ServiceEndpoints::default(),
            pagination: PaginationDefaults::default(),
            request_timeout_secs: 10,
            event_buffer: 64,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&ApiConfig::default())?)
            .add_source(
                config::Environment::with_prefix("API")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Rejects values the server cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.pagination.page_size == 0 {
            return Err(CoreError::configuration("pagination.page_size must be at least 1"));
        }
        if self.event_buffer == 0 {
            return Err(CoreError::configuration("event_buffer must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::configuration(
                "request_timeout_secs must be at least 1",
            ));
        }
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(CoreError::configuration(format!(
                "base_path must start with '/': {}",
                self.base_path
            )));
        }
        Ok(())
    }

    /// Settings of the downstream integration
    pub fn integration_config(&self) -> IntegrationConfig {
        IntegrationConfig::new(self.services.clone(), self.base_path.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
