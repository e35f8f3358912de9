//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL and work on storage records only; mapping
//! to and from domain types happens in the adapters.

pub mod customer;

pub use customer::CustomerRepository;
