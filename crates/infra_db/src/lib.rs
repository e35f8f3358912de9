//! Infrastructure Database Layer
//!
//! This crate provides the storage side of the customer onboarding service:
//! a PostgreSQL pool, embedded migrations, the customer repository, and the
//! adapter implementing `CustomerPersistencePort`.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Repositories own the SQL and
//! work on storage records; adapters translate between domain types and
//! those records and speak `PortError` to the domain.
//!
//! PostgreSQL is used as a document store: each customer is one row whose
//! address is a JSONB document.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations};
//! use infra_db::adapters::PostgresCustomerAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/customers")).await?;
//! run_migrations(&pool).await?;
//! let adapter = PostgresCustomerAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use adapters::PostgresCustomerAdapter;
