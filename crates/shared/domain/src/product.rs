//! Product domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock;
use crate::error::{DomainError, DomainResult};

/// Catalog product. `name` is never empty and `price` is always above zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product with a fresh id and timestamps.
    pub fn new(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = name.into();
        Self::validate_fields(&name, price)?;

        let now = clock::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check the entity invariants.
    pub fn validate(&self) -> DomainResult<()> {
        Self::validate_fields(&self.name, self.price)
    }

    /// Check a name/price pair without building a product.
    pub fn validate_fields(name: &str, price: f64) -> DomainResult<()> {
        if name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::validation("price must be greater than 0"));
        }
        Ok(())
    }

    /// Overwrite name and price, refreshing `updated_at`.
    ///
    /// Leaves the product untouched when the new values are invalid.
    pub fn update(&mut self, name: impl Into<String>, price: f64) -> DomainResult<()> {
        let name = name.into();
        Self::validate_fields(&name, price)?;

        self.name = name;
        self.price = price;
        self.updated_at = clock::now();
        Ok(())
    }
}
