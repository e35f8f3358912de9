//! HTTP Address Lookup Adapter
//!
//! Resolves zip codes through an external REST address service. It
//! implements the `AddressLookupPort` trait so the use case never sees
//! HTTP details.
//!
//! # Wire format
//!
//! `GET {base_url}/{zip_code}` returns
//!
//! ```json
//! { "street": "...", "neighborhood": "...", "city": "Beverly Hills", "region": "CA", "postal_code": "90210" }
//! ```
//!
//! Only `city` and `region` are required. Some services answer an unknown
//! code with `200 {"error": true}` instead of a 404; both are treated as
//! not found.
//!
//! # Error Handling
//!
//! - 404 or `"error": true` -> `PortError::NotFound`
//! - 429 -> `PortError::RateLimited`
//! - 5xx -> `PortError::ServiceUnavailable`
//! - Timeouts -> `PortError::Timeout`
//! - Connect failures -> `PortError::Connection`
//! - Undecodable bodies -> `PortError::Transformation`

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use core_kernel::{PortError, DomainPort, HealthCheckable, HealthCheckResult};

use crate::address::Address;
use crate::ports::AddressLookupPort;

const ADAPTER_ID: &str = "http-address-lookup";
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// Configuration for the HTTP address lookup adapter
#[derive(Debug, Clone)]
pub struct AddressLookupConfig {
    /// Base URL of the lookup service (e.g., "https://addresses.example.com/v1/zip")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AddressLookupConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for AddressLookupConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081/addresses".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Address payload as returned by the lookup service
#[derive(Debug, Deserialize)]
struct AddressPayload {
    street: Option<String>,
    neighborhood: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    #[serde(default)]
    error: bool,
}

impl AddressPayload {
    fn into_address(self, zip_code: &str) -> Result<Address, PortError> {
        if self.error {
            return Err(PortError::not_found("Address", zip_code));
        }

        let city = non_blank(self.city)
            .ok_or_else(|| PortError::transformation("address payload has no city"))?;
        let region = non_blank(self.region)
            .ok_or_else(|| PortError::transformation("address payload has no region"))?;

        Ok(Address {
            street: non_blank(self.street),
            neighborhood: non_blank(self.neighborhood),
            city,
            region,
            postal_code: non_blank(self.postal_code).unwrap_or_else(|| zip_code.to_string()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// REST-backed implementation of the AddressLookupPort trait
///
/// # Example
///
/// ```rust,ignore
/// use domain_customer::adapters::{HttpAddressLookupAdapter, AddressLookupConfig};
///
/// let adapter = HttpAddressLookupAdapter::new(
///     AddressLookupConfig::new("https://addresses.example.com/zip").timeout_secs(5),
/// )?;
/// let address = adapter.find_by_zip_code("90210").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpAddressLookupAdapter {
    base_url: Url,
    timeout: Duration,
    client: Client,
}

impl HttpAddressLookupAdapter {
    /// Creates a new adapter
    ///
    /// # Errors
    ///
    /// Returns `PortError::Validation` if the base URL is malformed, or
    /// `PortError::Internal` if the HTTP client cannot be built.
    pub fn new(config: AddressLookupConfig) -> Result<Self, PortError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            PortError::validation_field(format!("invalid address lookup URL: {}", e), "base_url")
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PortError::validation_field(
                "address lookup URL cannot be a base",
                "base_url",
            ));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PortError::internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            timeout,
            client,
        })
    }

    fn lookup_url(&self, zip_code: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(zip_code);
        }
        url
    }

    fn map_request_error(&self, error: reqwest::Error) -> PortError {
        if error.is_timeout() {
            PortError::Timeout {
                operation: "find_by_zip_code".to_string(),
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else if error.is_connect() {
            PortError::connection_with_source("address lookup service unreachable", error)
        } else if error.is_decode() {
            PortError::transformation(format!("invalid address payload: {}", error))
        } else {
            PortError::Internal {
                message: "address lookup request failed".to_string(),
                source: Some(Box::new(error)),
            }
        }
    }
}

fn map_status(status: StatusCode, retry_after: Option<u64>, zip_code: &str) -> PortError {
    match status {
        StatusCode::NOT_FOUND => PortError::not_found("Address", zip_code),
        StatusCode::TOO_MANY_REQUESTS => PortError::RateLimited {
            retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        s if s.is_server_error() => PortError::ServiceUnavailable {
            service: format!("address lookup ({})", s),
        },
        s => PortError::internal(format!("unexpected address lookup status {}", s)),
    }
}

impl DomainPort for HttpAddressLookupAdapter {}

#[async_trait]
impl HealthCheckable for HttpAddressLookupAdapter {
    /// Any HTTP answer counts as reachable; only transport failures are unhealthy
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let result = self.client.get(self.base_url.clone()).send().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(
                ADAPTER_ID,
                latency_ms,
                format!("Address service unreachable: {}", e),
            ),
        }
    }
}

#[async_trait]
impl AddressLookupPort for HttpAddressLookupAdapter {
    #[instrument(skip(self))]
    async fn find_by_zip_code(&self, zip_code: &str) -> Result<Address, PortError> {
        let url = self.lookup_url(zip_code);
        debug!(%url, "Requesting address");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        debug!(%status, "Address service responded");

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(map_status(status, retry_after, zip_code));
        }

        let payload: AddressPayload = response
            .json()
            .await
            .map_err(|e| self.map_request_error(e))?;

        payload.into_address(zip_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn adapter_for(server: &MockServer) -> HttpAddressLookupAdapter {
        HttpAddressLookupAdapter::new(AddressLookupConfig::new(server.url("/addresses")))
            .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = HttpAddressLookupAdapter::new(AddressLookupConfig::new("not a url"));
        assert!(matches!(result, Err(PortError::Validation { .. })));
    }

    #[test]
    fn test_lookup_url_appends_zip_segment() {
        let adapter = HttpAddressLookupAdapter::new(AddressLookupConfig::new(
            "https://addresses.example.com/v1/zip/",
        ))
        .unwrap();
        assert_eq!(
            adapter.lookup_url("90210").as_str(),
            "https://addresses.example.com/v1/zip/90210"
        );
        assert_eq!(
            adapter.lookup_url("a/b").as_str(),
            "https://addresses.example.com/v1/zip/a%2Fb"
        );
    }

    #[tokio::test]
    async fn test_find_by_zip_code_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/90210");
                then.status(200).json_body(json!({
                    "street": "Rodeo Drive",
                    "city": "Beverly Hills",
                    "region": "CA",
                    "postal_code": "90210"
                }));
            })
            .await;

        let address = adapter_for(&server).find_by_zip_code("90210").await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            address,
            Address::new("Beverly Hills", "CA", "90210").with_street("Rodeo Drive")
        );
    }

    #[tokio::test]
    async fn test_missing_postal_code_defaults_to_requested_zip() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/01001000");
                then.status(200).json_body(json!({
                    "street": "  ",
                    "city": "São Paulo",
                    "region": "SP"
                }));
            })
            .await;

        let address = adapter_for(&server).find_by_zip_code("01001000").await.unwrap();
        assert_eq!(address.postal_code, "01001000");
        assert_eq!(address.street, None);
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/00000");
                then.status(404);
            })
            .await;

        let error = adapter_for(&server).find_by_zip_code("00000").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_error_flag_in_body_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/00000");
                then.status(200).json_body(json!({ "error": true }));
            })
            .await;

        let error = adapter_for(&server).find_by_zip_code("00000").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_is_service_unavailable() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/90210");
                then.status(503);
            })
            .await;

        let error = adapter_for(&server).find_by_zip_code("90210").await.unwrap_err();
        assert!(matches!(error, PortError::ServiceUnavailable { .. }));
        // no retry
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/90210");
                then.status(429).header("Retry-After", "30");
            })
            .await;

        let error = adapter_for(&server).find_by_zip_code("90210").await.unwrap_err();
        assert!(matches!(error, PortError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn test_payload_without_city_is_transformation_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/90210");
                then.status(200).json_body(json!({ "region": "CA" }));
            })
            .await;

        let error = adapter_for(&server).find_by_zip_code("90210").await.unwrap_err();
        assert!(matches!(error, PortError::Transformation { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        // Port 9 (discard) is closed on test hosts
        let adapter = HttpAddressLookupAdapter::new(
            AddressLookupConfig::new("http://127.0.0.1:9/addresses").timeout_secs(2),
        )
        .unwrap();

        let error = adapter.find_by_zip_code("90210").await.unwrap_err();
        assert!(error.is_transient());

        let health = adapter.health_check().await;
        assert!(!health.is_operational());
    }
}
