//! Customer Domain Ports
//!
//! Port interfaces for the customer domain. The use case depends only on
//! these traits; adapters are chosen by the composition root.
//!
//! # Ports
//!
//! - **`CreateCustomerPort`** (inbound): what the HTTP layer calls
//! - **`AddressLookupPort`** (outbound): resolves a zip code to an address
//! - **`CustomerPersistencePort`** (outbound): stores a customer
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_customer::{CreateCustomerUseCase, HttpAddressLookupAdapter};
//! use infra_db::adapters::PostgresCustomerAdapter;
//!
//! let use_case = CreateCustomerUseCase::new(
//!     Arc::new(HttpAddressLookupAdapter::new(lookup_config)?),
//!     Arc::new(PostgresCustomerAdapter::new(pool)),
//! );
//! ```

use async_trait::async_trait;

use core_kernel::{PortError, DomainPort, HealthCheckable};

use crate::address::Address;
use crate::customer::Customer;
use crate::error::CustomerError;

/// Inbound port for onboarding a customer
#[async_trait]
pub trait CreateCustomerPort: DomainPort {
    /// Resolves the address for `zip_code`, attaches it to `customer` and
    /// stores the result
    ///
    /// # Errors
    ///
    /// `CustomerError::AddressLookup` if the lookup fails (nothing is stored),
    /// `CustomerError::Persistence` if the write fails.
    async fn create(&self, customer: Customer, zip_code: &str) -> Result<(), CustomerError>;
}

/// Outbound port resolving postal codes to addresses
#[async_trait]
pub trait AddressLookupPort: DomainPort + HealthCheckable {
    /// Finds the address for a zip code
    ///
    /// # Returns
    ///
    /// The address, or `PortError::NotFound` when the code is unknown
    async fn find_by_zip_code(&self, zip_code: &str) -> Result<Address, PortError>;
}

/// Outbound port storing customers
#[async_trait]
pub trait CustomerPersistencePort: DomainPort + HealthCheckable {
    /// Stores the customer
    ///
    /// The customer must already carry an address. Any identifier the store
    /// generates stays inside the adapter.
    async fn save(&self, customer: &Customer) -> Result<(), PortError>;
}

/// Mock implementations of the outbound ports for testing
///
/// Both mocks record every call so tests can assert on ordering and counts.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    type ErrorFactory = Box<dyn Fn() -> PortError + Send + Sync>;

    /// In-memory address lookup keyed by zip code
    #[derive(Default)]
    pub struct MockAddressLookup {
        addresses: HashMap<String, Address>,
        failure: Option<ErrorFactory>,
        lookups: Arc<RwLock<Vec<String>>>,
    }

    impl fmt::Debug for MockAddressLookup {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("MockAddressLookup")
                .field("addresses", &self.addresses)
                .field("failing", &self.failure.is_some())
                .finish()
        }
    }

    impl MockAddressLookup {
        /// Creates a lookup that knows no zip codes
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers the address returned for `zip_code`
        pub fn with_address(mut self, zip_code: impl Into<String>, address: Address) -> Self {
            self.addresses.insert(zip_code.into(), address);
            self
        }

        /// Makes every lookup fail with the error built by `factory`
        pub fn failing(factory: impl Fn() -> PortError + Send + Sync + 'static) -> Self {
            Self {
                failure: Some(Box::new(factory)),
                ..Self::default()
            }
        }

        /// Zip codes requested so far, in call order
        pub async fn lookups(&self) -> Vec<String> {
            self.lookups.read().await.clone()
        }
    }

    impl DomainPort for MockAddressLookup {}

    #[async_trait]
    impl HealthCheckable for MockAddressLookup {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-address-lookup", 0)
        }
    }

    #[async_trait]
    impl AddressLookupPort for MockAddressLookup {
        async fn find_by_zip_code(&self, zip_code: &str) -> Result<Address, PortError> {
            self.lookups.write().await.push(zip_code.to_string());

            if let Some(factory) = &self.failure {
                return Err(factory());
            }
            self.addresses
                .get(zip_code)
                .cloned()
                .ok_or_else(|| PortError::not_found("Address", zip_code))
        }
    }

    /// In-memory customer store
    #[derive(Default)]
    pub struct MockCustomerPersistence {
        saved: Arc<RwLock<Vec<Customer>>>,
        attempts: AtomicUsize,
        failure: Option<ErrorFactory>,
    }

    impl fmt::Debug for MockCustomerPersistence {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("MockCustomerPersistence")
                .field("attempts", &self.attempts.load(Ordering::Relaxed))
                .field("failing", &self.failure.is_some())
                .finish()
        }
    }

    impl MockCustomerPersistence {
        /// Creates an empty store that accepts every save
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every save fail with the error built by `factory`
        pub fn failing(factory: impl Fn() -> PortError + Send + Sync + 'static) -> Self {
            Self {
                failure: Some(Box::new(factory)),
                ..Self::default()
            }
        }

        /// Customers stored successfully, in call order
        pub async fn saved(&self) -> Vec<Customer> {
            self.saved.read().await.clone()
        }

        /// Number of `save` calls, failed ones included
        pub fn attempts(&self) -> usize {
            self.attempts.load(Ordering::SeqCst)
        }
    }

    impl DomainPort for MockCustomerPersistence {}

    #[async_trait]
    impl HealthCheckable for MockCustomerPersistence {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-customer-persistence", 0)
        }
    }

    #[async_trait]
    impl CustomerPersistencePort for MockCustomerPersistence {
        async fn save(&self, customer: &Customer) -> Result<(), PortError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);

            if let Some(factory) = &self.failure {
                return Err(factory());
            }
            if !customer.has_address() {
                return Err(PortError::validation_field("customer has no address", "address"));
            }
            self.saved.write().await.push(customer.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::{MockAddressLookup, MockCustomerPersistence};

    #[tokio::test]
    async fn test_mock_lookup_known_and_unknown_zip() {
        let lookup = MockAddressLookup::new()
            .with_address("90210", Address::new("Beverly Hills", "CA", "90210"));

        let address = lookup.find_by_zip_code("90210").await.unwrap();
        assert_eq!(address.city, "Beverly Hills");

        let missing = lookup.find_by_zip_code("00000").await.unwrap_err();
        assert!(missing.is_not_found());

        assert_eq!(lookup.lookups().await, vec!["90210", "00000"]);
    }

    #[tokio::test]
    async fn test_mock_persistence_rejects_customer_without_address() {
        let persistence = MockCustomerPersistence::new();
        let result = persistence.save(&Customer::new("Alice", "123")).await;

        assert!(matches!(result, Err(PortError::Validation { .. })));
        assert_eq!(persistence.attempts(), 1);
        assert!(persistence.saved().await.is_empty());
    }

    #[tokio::test]
    async fn test_mock_persistence_failing() {
        let persistence = MockCustomerPersistence::failing(|| PortError::connection("down"));
        let mut customer = Customer::new("Alice", "123");
        customer.set_address(Address::new("Beverly Hills", "CA", "90210"));

        let result = persistence.save(&customer).await;
        assert!(matches!(result, Err(PortError::Connection { .. })));
        assert_eq!(persistence.attempts(), 1);
    }

    #[tokio::test]
    async fn test_mock_health_checks() {
        let lookup = MockAddressLookup::new();
        let persistence = MockCustomerPersistence::new();
        assert!(lookup.health_check().await.is_operational());
        assert!(persistence.health_check().await.is_operational());
    }
}
