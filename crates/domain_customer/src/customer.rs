//! Customer entity

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// A person being onboarded
///
/// The inbound adapter builds a customer without an address. The
/// create-customer use case attaches the looked-up address before the
/// customer reaches the persistence port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name
    pub name: String,
    /// Tax identification number
    pub tax_id: String,
    /// Postal address, set during creation
    pub address: Option<Address>,
}

impl Customer {
    /// Creates a customer that has no address yet
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            address: None,
        }
    }

    /// Attaches an address, replacing any previous one
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }
}
