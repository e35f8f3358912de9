//! Customer Onboarding Domain
//!
//! This crate holds the customer onboarding core: the `Customer` entity,
//! the `Address` value object, the ports the domain talks through, and the
//! create-customer use case that sequences them.
//!
//! # Flow
//!
//! ```text
//! CreateCustomerPort::create(customer, zip_code)
//!     1. AddressLookupPort::find_by_zip_code(zip_code)  -> Address
//!     2. customer.set_address(address)
//!     3. CustomerPersistencePort::save(&customer)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::{Address, Customer};
//!
//! let mut customer = Customer::new("Alice", "123");
//! assert!(!customer.has_address());
//!
//! customer.set_address(Address::new("Beverly Hills", "CA", "90210"));
//! assert_eq!(customer.address().unwrap().region, "CA");
//! ```

pub mod customer;
pub mod address;
pub mod error;
pub mod ports;
pub mod use_case;
pub mod adapters;

pub use customer::Customer;
pub use address::Address;
pub use error::CustomerError;
pub use ports::{CreateCustomerPort, AddressLookupPort, CustomerPersistencePort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockAddressLookup, MockCustomerPersistence};
pub use use_case::CreateCustomerUseCase;
pub use adapters::{HttpAddressLookupAdapter, AddressLookupConfig};
