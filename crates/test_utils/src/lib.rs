//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! customer onboarding test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for customers and addresses
//! - `builders`: Builder patterns for domain values and request payloads
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
