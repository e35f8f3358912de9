//! Pre-built Test Fixtures
//!
//! Ready-to-use test data. Values are fixed so tests can compare against
//! them directly.

use core_kernel::CustomerId;
use domain_customer::{Address, Customer};
use uuid::Uuid;

/// Fixture for address test data
pub struct AddressFixtures;

impl AddressFixtures {
    /// Zip code that resolves to [`AddressFixtures::beverly_hills`]
    pub const BEVERLY_HILLS_ZIP: &'static str = "90210";

    /// Zip code that no lookup knows
    pub const UNKNOWN_ZIP: &'static str = "00000";

    /// Beverly Hills, CA 90210
    pub fn beverly_hills() -> Address {
        Address::new("Beverly Hills", "CA", Self::BEVERLY_HILLS_ZIP)
    }

    /// A fully populated Brazilian address
    pub fn sao_paulo_se() -> Address {
        Address::new("São Paulo", "SP", "01001-000")
            .with_street("Praça da Sé")
            .with_neighborhood("Sé")
    }
}

/// Fixture for customer test data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// Alice, tax id 123, no address yet
    pub fn alice() -> Customer {
        Customer::new("Alice", "123")
    }

    /// Alice with the Beverly Hills address attached
    pub fn alice_in_beverly_hills() -> Customer {
        let mut customer = Self::alice();
        customer.set_address(AddressFixtures::beverly_hills());
        customer
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic customer ID for testing
    pub fn customer_id() -> CustomerId {
        CustomerId::from_uuid(Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440001))
    }
}
