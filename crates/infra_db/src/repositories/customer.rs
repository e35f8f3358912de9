//! Customer repository implementation
//!
//! Stores customers as documents: scalar identity fields are columns and the
//! address is a JSONB document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for the `customers` table
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new customer record
    ///
    /// A fresh time-ordered identifier is generated for every call, so
    /// inserting the same data twice yields two records.
    ///
    /// # Returns
    ///
    /// The stored record with its generated identifier
    pub async fn insert(&self, customer: NewCustomerEntity) -> Result<CustomerEntity, DatabaseError> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        let row = sqlx::query_as::<_, CustomerEntity>(
            r#"
            INSERT INTO customers (id, name, tax_id, address, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, tax_id, address, created_at
            "#,
        )
        .bind(id)
        .bind(&customer.name)
        .bind(&customer.tax_id)
        .bind(Json(&customer.address))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a customer record by identifier
    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerEntity, DatabaseError> {
        sqlx::query_as::<_, CustomerEntity>(
            r#"
            SELECT id, name, tax_id, address, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Customer", id))
    }

    /// Lists all records sharing a tax identifier, oldest first
    pub async fn find_by_tax_id(&self, tax_id: &str) -> Result<Vec<CustomerEntity>, DatabaseError> {
        let rows = sqlx::query_as::<_, CustomerEntity>(
            r#"
            SELECT id, name, tax_id, address, created_at
            FROM customers
            WHERE tax_id = $1
            ORDER BY id
            "#,
        )
        .bind(tax_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Verifies the pool can reach the database
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}

/// Stored customer record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerEntity {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub address: Json<AddressDocument>,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a customer record
#[derive(Debug, Clone)]
pub struct NewCustomerEntity {
    pub name: String,
    pub tax_id: String,
    pub address: AddressDocument,
}

/// JSONB representation of an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    pub city: String,
    pub region: String,
    pub postal_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_document_omits_empty_optionals() {
        let doc = AddressDocument {
            street: None,
            neighborhood: None,
            city: "Beverly Hills".to_string(),
            region: "CA".to_string(),
            postal_code: "90210".to_string(),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "city": "Beverly Hills", "region": "CA", "postal_code": "90210" })
        );
    }

    #[test]
    fn test_address_document_reads_sparse_json() {
        let doc: AddressDocument = serde_json::from_value(serde_json::json!({
            "city": "São Paulo",
            "region": "SP",
            "postal_code": "01001-000"
        }))
        .unwrap();

        assert_eq!(doc.street, None);
        assert_eq!(doc.region, "SP");
    }
}
