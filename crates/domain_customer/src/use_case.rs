//! Create-customer use case
//!
//! Orchestrates the two outbound ports: resolve the address for the given
//! zip code, attach it to the customer, then store the customer.
//!
//! The sequence is strictly ordered and has no recovery: a lookup failure
//! stops before persistence is touched, and a persistence failure discards
//! the resolved address with the request.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use core_kernel::DomainPort;

use crate::customer::Customer;
use crate::error::CustomerError;
use crate::ports::{AddressLookupPort, CreateCustomerPort, CustomerPersistencePort};

/// Use case creating a customer with a looked-up address
///
/// Collaborators are passed in explicitly; the use case holds no other state.
#[derive(Clone)]
pub struct CreateCustomerUseCase {
    address_lookup: Arc<dyn AddressLookupPort>,
    persistence: Arc<dyn CustomerPersistencePort>,
}

impl CreateCustomerUseCase {
    /// Creates the use case from its two collaborators
    ///
    /// # Arguments
    ///
    /// * `address_lookup` - Resolves zip codes to addresses
    /// * `persistence` - Stores the enriched customer
    pub fn new(
        address_lookup: Arc<dyn AddressLookupPort>,
        persistence: Arc<dyn CustomerPersistencePort>,
    ) -> Self {
        Self {
            address_lookup,
            persistence,
        }
    }
}

impl DomainPort for CreateCustomerUseCase {}

#[async_trait]
impl CreateCustomerPort for CreateCustomerUseCase {
    #[instrument(skip(self, customer), fields(zip_code = %zip_code))]
    async fn create(&self, mut customer: Customer, zip_code: &str) -> Result<(), CustomerError> {
        debug!("Looking up address");
        let address = self
            .address_lookup
            .find_by_zip_code(zip_code)
            .await
            .map_err(|e| {
                warn!(error = %e, "Address lookup failed");
                CustomerError::AddressLookup(e)
            })?;

        customer.set_address(address);

        self.persistence.save(&customer).await.map_err(|e| {
            warn!(error = %e, "Saving customer failed");
            CustomerError::Persistence(e)
        })?;

        info!("Customer created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::ports::mock::{MockAddressLookup, MockCustomerPersistence};
    use core_kernel::PortError;
    use proptest::prelude::*;

    fn beverly_hills() -> Address {
        Address::new("Beverly Hills", "CA", "90210")
    }

    fn wire(
        lookup: MockAddressLookup,
        persistence: MockCustomerPersistence,
    ) -> (CreateCustomerUseCase, Arc<MockAddressLookup>, Arc<MockCustomerPersistence>) {
        let lookup = Arc::new(lookup);
        let persistence = Arc::new(persistence);
        let use_case = CreateCustomerUseCase::new(lookup.clone(), persistence.clone());
        (use_case, lookup, persistence)
    }

    #[tokio::test]
    async fn test_create_attaches_looked_up_address() {
        let (use_case, lookup, persistence) = wire(
            MockAddressLookup::new().with_address("90210", beverly_hills()),
            MockCustomerPersistence::new(),
        );

        use_case.create(Customer::new("Alice", "123"), "90210").await.unwrap();

        let saved = persistence.saved().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Alice");
        assert_eq!(saved[0].tax_id, "123");
        assert_eq!(saved[0].address, Some(beverly_hills()));
        assert_eq!(lookup.lookups().await, vec!["90210"]);
    }

    #[tokio::test]
    async fn test_lookup_not_found_skips_persistence() {
        let (use_case, _lookup, persistence) = wire(
            MockAddressLookup::new(),
            MockCustomerPersistence::new(),
        );

        let err = use_case
            .create(Customer::new("Alice", "123"), "00000")
            .await
            .unwrap_err();

        assert!(err.is_address_not_found());
        assert_eq!(persistence.attempts(), 0);
    }

    #[tokio::test]
    async fn test_lookup_unavailable_skips_persistence() {
        let (use_case, _lookup, persistence) = wire(
            MockAddressLookup::failing(|| PortError::ServiceUnavailable {
                service: "address-lookup".to_string(),
            }),
            MockCustomerPersistence::new(),
        );

        let err = use_case
            .create(Customer::new("Alice", "123"), "90210")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CustomerError::AddressLookup(PortError::ServiceUnavailable { .. })
        ));
        assert_eq!(persistence.attempts(), 0);
    }

    #[tokio::test]
    async fn test_persistence_failure_propagates_without_retry() {
        let (use_case, lookup, persistence) = wire(
            MockAddressLookup::new().with_address("90210", beverly_hills()),
            MockCustomerPersistence::failing(|| PortError::connection("connection reset")),
        );

        let err = use_case
            .create(Customer::new("Alice", "123"), "90210")
            .await
            .unwrap_err();

        match err {
            CustomerError::Persistence(PortError::Connection { message, .. }) => {
                assert_eq!(message, "connection reset");
            }
            other => panic!("Expected persistence connection error, got {other:?}"),
        }
        assert_eq!(persistence.attempts(), 1);
        assert_eq!(lookup.lookups().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_twice_writes_twice() {
        let (use_case, _lookup, persistence) = wire(
            MockAddressLookup::new().with_address("90210", beverly_hills()),
            MockCustomerPersistence::new(),
        );

        use_case.create(Customer::new("Alice", "123"), "90210").await.unwrap();
        use_case.create(Customer::new("Alice", "123"), "90210").await.unwrap();

        let saved = persistence.saved().await;
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0], saved[1]);
    }

    proptest! {
        #[test]
        fn prop_saved_customer_carries_lookup_result(
            name in "[A-Za-z][A-Za-z ]{0,30}",
            tax_id in "[0-9]{3,14}",
            zip in "[0-9]{5}",
            city in "[A-Za-z]{1,20}",
            region in "[A-Z]{2}",
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let expected = Address::new(city, region, zip.clone());

            let (use_case, _lookup, persistence) = wire(
                MockAddressLookup::new().with_address(zip.clone(), expected.clone()),
                MockCustomerPersistence::new(),
            );

            let saved = runtime.block_on(async {
                use_case.create(Customer::new(name.clone(), tax_id.clone()), &zip).await.unwrap();
                persistence.saved().await
            });

            prop_assert_eq!(saved.len(), 1);
            prop_assert_eq!(&saved[0].name, &name);
            prop_assert_eq!(&saved[0].tax_id, &tax_id);
            prop_assert_eq!(saved[0].address.as_ref(), Some(&expected));
        }
    }
}
