//! Test Data Builders
//!
//! Builders that let tests specify only the fields they care about.

use domain_customer::{Address, Customer};
use serde_json::{json, Value};

use crate::fixtures::AddressFixtures;

/// Builder for domain customers
pub struct CustomerBuilder {
    name: String,
    tax_id: String,
    address: Option<Address>,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a new builder with default values and no address
    pub fn new() -> Self {
        Self {
            name: "Alice".to_string(),
            tax_id: "123".to_string(),
            address: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = tax_id.into();
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.name, self.tax_id);
        if let Some(address) = self.address {
            customer.set_address(address);
        }
        customer
    }
}

/// Builder for `POST /api/v1/customers` JSON bodies
pub struct CreateCustomerPayloadBuilder {
    name: Option<String>,
    tax_id: Option<String>,
    zip_code: Option<String>,
}

impl Default for CreateCustomerPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateCustomerPayloadBuilder {
    /// Creates a valid payload for Alice in 90210
    pub fn new() -> Self {
        Self {
            name: Some("Alice".to_string()),
            tax_id: Some("123".to_string()),
            zip_code: Some(AddressFixtures::BEVERLY_HILLS_ZIP.to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Drops the zip code field entirely
    pub fn without_zip_code(mut self) -> Self {
        self.zip_code = None;
        self
    }

    /// Drops the name field entirely
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Drops the tax id field entirely
    pub fn without_tax_id(mut self) -> Self {
        self.tax_id = None;
        self
    }

    pub fn build(self) -> Value {
        let mut body = json!({});
        if let Some(name) = self.name {
            body["name"] = json!(name);
        }
        if let Some(tax_id) = self.tax_id {
            body["tax_id"] = json!(tax_id);
        }
        if let Some(zip_code) = self.zip_code {
            body["zip_code"] = json!(zip_code);
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_builder_defaults() {
        let customer = CustomerBuilder::new().build();
        assert_eq!(customer.name, "Alice");
        assert!(!customer.has_address());
    }

    #[test]
    fn test_payload_builder_omits_dropped_fields() {
        let body = CreateCustomerPayloadBuilder::new().without_zip_code().build();
        assert_eq!(body, json!({ "name": "Alice", "tax_id": "123" }));
    }
}
