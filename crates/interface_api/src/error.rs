//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_customer::CustomerError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is malformed or fails validation
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        details: Vec<String>,
    },

    /// The lookup service does not know the zip code
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// The lookup service failed or answered garbage
    #[error("Address lookup failed: {0}")]
    AddressLookupFailed(String),

    /// The customer store cannot be reached right now
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// The customer store rejected the write
    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),
}

impl ApiError {
    /// Creates a bad request error without field details
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Returns the HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::AddressNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::AddressLookupFailed(_) => StatusCode::BAD_GATEWAY,
            ApiError::PersistenceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::PersistenceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::AddressNotFound(_) => "address_not_found",
            ApiError::AddressLookupFailed(_) => "address_lookup_failed",
            ApiError::PersistenceUnavailable(_) => "persistence_unavailable",
            ApiError::PersistenceFailed(_) => "persistence_failed",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = %status.as_u16(), error = %self, "Request failed");
        }

        let error_type = self.error_type().to_string();
        let (message, details) = match self {
            ApiError::BadRequest { message, details } => {
                (message, (!details.is_empty()).then_some(details))
            }
            ApiError::AddressNotFound(msg)
            | ApiError::AddressLookupFailed(msg)
            | ApiError::PersistenceUnavailable(msg)
            | ApiError::PersistenceFailed(msg) => (msg, None),
        };

        let body = ErrorResponse {
            error: error_type,
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::Validation(msg) => ApiError::bad_request(msg),
            CustomerError::AddressLookup(port_err) if port_err.is_not_found() => {
                ApiError::AddressNotFound(port_err.to_string())
            }
            CustomerError::AddressLookup(port_err) => {
                ApiError::AddressLookupFailed(port_err.to_string())
            }
            CustomerError::Persistence(port_err) if is_unavailable(&port_err) => {
                ApiError::PersistenceUnavailable(port_err.to_string())
            }
            CustomerError::Persistence(port_err) => ApiError::PersistenceFailed(port_err.to_string()),
        }
    }
}

fn is_unavailable(err: &PortError) -> bool {
    matches!(
        err,
        PortError::Connection { .. } | PortError::Timeout { .. } | PortError::ServiceUnavailable { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_map_by_kind() {
        let not_found = ApiError::from(CustomerError::AddressLookup(PortError::not_found("Address", "00000")));
        assert_eq!(not_found.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let rate_limited = ApiError::from(CustomerError::AddressLookup(PortError::RateLimited {
            retry_after_secs: 5,
        }));
        assert_eq!(rate_limited.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_persistence_errors_map_by_kind() {
        let down = ApiError::from(CustomerError::Persistence(PortError::connection("refused")));
        assert_eq!(down.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let timeout = ApiError::from(CustomerError::Persistence(PortError::Timeout {
            operation: "save".to_string(),
            duration_ms: 30_000,
        }));
        assert_eq!(timeout.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let conflict = ApiError::from(CustomerError::Persistence(PortError::conflict("duplicate")));
        assert_eq!(conflict.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_validation_is_bad_request() {
        let err = ApiError::from(CustomerError::validation("name is blank"));
        assert!(matches!(err, ApiError::BadRequest { ref details, .. } if details.is_empty()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
