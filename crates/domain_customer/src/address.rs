//! Address value object

use serde::{Deserialize, Serialize};

/// A postal address resolved from a zip code
///
/// Addresses are produced by the address lookup port and never modified
/// afterwards; a customer owns the address once it is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: String,
    /// State, province or other first-level subdivision
    pub region: String,
    pub postal_code: String,
}

impl Address {
    /// Creates an address with only the mandatory parts
    pub fn new(
        city: impl Into<String>,
        region: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: None,
            neighborhood: None,
            city: city.into(),
            region: region.into(),
            postal_code: postal_code.into(),
        }
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }
}
