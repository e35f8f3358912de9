//! External Adapters for the Customer Domain
//!
//! Adapters that live with the domain because they only depend on the
//! outside service, not on any infrastructure crate. The PostgreSQL
//! persistence adapter lives in `infra_db`.
//!
//! # Available Adapters
//!
//! - **HttpAddressLookupAdapter**: resolves zip codes through a REST service
//! - **MockAddressLookup** / **MockCustomerPersistence**: in-memory ports for
//!   testing (re-exported from the ports module behind the `mock` feature)

pub mod http_address_lookup;

pub use http_address_lookup::{HttpAddressLookupAdapter, AddressLookupConfig};
