//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock;
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user, hashing the raw password.
    ///
    /// Name and email are checked before the (slow) hash runs.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        Self::validate_fields(&name, &email)?;

        let password_hash = Password::new(password)?.into_string();
        let now = clock::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check the entity invariants.
    pub fn validate(&self) -> DomainResult<()> {
        Self::validate_fields(&self.name, &self.email)
    }

    /// Check a plain text password against the stored hash.
    pub fn validate_password(&self, password: &str) -> bool {
        Password::from_hash(self.password_hash.as_str()).verify(password)
    }

    fn validate_fields(name: &str, email: &str) -> DomainResult<()> {
        if name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if email.is_empty() {
            return Err(DomainError::validation("email is required"));
        }
        Ok(())
    }
}
