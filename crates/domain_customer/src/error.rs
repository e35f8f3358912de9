//! Customer domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors surfaced by the create-customer use case
///
/// Collaborator failures are wrapped, never rewritten, so callers can
/// inspect the original [`PortError`].
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Customer data failed validation before reaching any collaborator
    ///
    /// The HTTP layer validates request bodies itself and never produces
    /// this variant; it is for callers driving `CreateCustomerPort`
    /// directly, and `interface_api` still maps it to `400 Bad Request`.
    #[error("Invalid customer data: {0}")]
    Validation(String),

    /// The address lookup collaborator failed
    #[error("Address lookup failed: {0}")]
    AddressLookup(#[source] PortError),

    /// The persistence collaborator failed
    #[error("Customer persistence failed: {0}")]
    Persistence(#[source] PortError),
}

impl CustomerError {
    /// Creates a Validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        CustomerError::Validation(message.into())
    }

    /// Returns the collaborator error, if any
    pub fn port_error(&self) -> Option<&PortError> {
        match self {
            CustomerError::AddressLookup(e) | CustomerError::Persistence(e) => Some(e),
            CustomerError::Validation(_) => None,
        }
    }

    /// True when the zip code could not be resolved to an address
    pub fn is_address_not_found(&self) -> bool {
        matches!(self, CustomerError::AddressLookup(e) if e.is_not_found())
    }
}
