//! PostgreSQL Customer Adapter
//!
//! The internal (database) adapter for customer persistence, implementing
//! `CustomerPersistencePort` on top of `CustomerRepository`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresCustomerAdapter;
//! use domain_customer::CustomerPersistencePort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CustomerPersistencePort> = Arc::new(PostgresCustomerAdapter::new(pool));
//! port.save(&customer).await?;
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CustomerId, PortError, DomainPort, HealthCheckable, HealthCheckResult};
use domain_customer::{Address, Customer, CustomerPersistencePort};

use crate::error::DatabaseError;
use crate::repositories::customer::{AddressDocument, CustomerRepository, NewCustomerEntity};

const ADAPTER_ID: &str = "postgres-customer-adapter";

/// PostgreSQL-backed implementation of the CustomerPersistencePort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - connection failures and pool exhaustion -> `PortError::Connection`
/// - constraint violations -> `PortError::Conflict`
/// - other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresCustomerAdapter {
    repository: CustomerRepository,
}

impl PostgresCustomerAdapter {
    /// Creates a new PostgreSQL customer adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &CustomerRepository {
        &self.repository
    }
}

impl DomainPort for PostgresCustomerAdapter {}

#[async_trait]
impl HealthCheckable for PostgresCustomerAdapter {
    /// Checks database connectivity with `SELECT 1`
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.repository.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(
                ADAPTER_ID,
                latency_ms,
                format!("Database error: {}", e),
            ),
        }
    }
}

#[async_trait]
impl CustomerPersistencePort for PostgresCustomerAdapter {
    #[instrument(skip(self, customer))]
    async fn save(&self, customer: &Customer) -> Result<(), PortError> {
        let entity = customer_to_entity(customer)?;

        let stored = self
            .repository
            .insert(entity)
            .await
            .map_err(db_to_port_error)?;

        debug!(customer_id = %CustomerId::from(stored.id), "Customer stored");
        Ok(())
    }
}

/// Maps a domain customer to a new storage record
///
/// Fails only when the address is missing, which the use case rules out.
pub fn customer_to_entity(customer: &Customer) -> Result<NewCustomerEntity, PortError> {
    let address = customer
        .address()
        .ok_or_else(|| PortError::validation_field("customer has no address", "address"))?;

    Ok(NewCustomerEntity {
        name: customer.name.clone(),
        tax_id: customer.tax_id.clone(),
        address: address_to_document(address),
    })
}

fn address_to_document(address: &Address) -> AddressDocument {
    AddressDocument {
        street: address.street.clone(),
        neighborhood: address.neighborhood.clone(),
        city: address.city.clone(),
        region: address.region.clone(),
        postal_code: address.postal_code.clone(),
    }
}

/// Converts a stored address document back to the domain value object
pub fn document_to_address(document: &AddressDocument) -> Address {
    Address {
        street: document.street.clone(),
        neighborhood: document.neighborhood.clone(),
        city: document.city.clone(),
        region: document.region.clone(),
        postal_code: document.postal_code.clone(),
    }
}

/// Converts database errors to port errors
fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound(msg) => PortError::not_found("Customer", msg),
        DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted => {
            PortError::connection(e.to_string())
        }
        DatabaseError::DuplicateEntry(_) | DatabaseError::ConstraintViolation(_) => {
            PortError::conflict(e.to_string())
        }
        DatabaseError::SerializationError(msg) => PortError::transformation(msg),
        other => PortError::Internal {
            message: "customer write failed".to_string(),
            source: Some(Box::new(other)),
        },
    }
}
