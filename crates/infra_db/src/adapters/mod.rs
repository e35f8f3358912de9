//! Domain Adapters
//!
//! Adapter implementations of domain ports backed by PostgreSQL.
//!
//! Each adapter:
//! - Implements the domain's port trait
//! - Translates between domain models and storage records
//! - Uses the repository layer for database operations

pub mod customer;

pub use customer::PostgresCustomerAdapter;
