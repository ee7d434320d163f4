//! Argon2 password hashing.
//!
//! Wraps an argon2 PHC hash string. The raw password never leaves the
//! constructor.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::constants::MAX_PASSWORD_BYTES;
use crate::error::{DomainError, DomainResult};

/// Hash verified against when no stored hash exists, so that a lookup miss
/// costs the same as a wrong password.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| Password::hash("dummy-password-for-timing").ok());

/// Hashed password. Holds only the PHC string.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns [`DomainError::Hashing`] when the input is longer than
    /// [`MAX_PASSWORD_BYTES`] or the hasher rejects it.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.len() > MAX_PASSWORD_BYTES {
            return Err(DomainError::hashing(format!(
                "password exceeds {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash verifies as `false`.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash)
    }

    /// Burn one verification against a fixed hash. Always returns `false`.
    pub fn verify_dummy(plain_text: &str) -> bool {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = Self::verify_hash(plain_text, hash);
        }
        false
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::hashing(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_stored_hash() {
        let stored = Password::new("correct horse").unwrap().into_string();
        let restored = Password::from_hash(stored);

        assert!(restored.verify("correct horse"));
        assert!(!restored.verify("correct horse "));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let a = Password::new("battery staple").unwrap();
        let b = Password::new("battery staple").unwrap();

        assert_ne!(a, b);
        assert!(a.verify("battery staple") && b.verify("battery staple"));
    }

    #[test]
    fn test_hash_is_not_the_plain_text() {
        let password = Password::new("123").unwrap();
        assert_ne!(password.as_str(), "123");
        assert!(password.as_str().starts_with("$argon2"));
    }

    #[test]
    fn test_password_over_byte_limit_fails_hashing() {
        let result = Password::new(&"A".repeat(MAX_PASSWORD_BYTES + 1));
        assert!(matches!(result, Err(DomainError::Hashing(_))));
    }

    #[test]
    fn test_password_at_byte_limit_is_accepted() {
        assert!(Password::new(&"A".repeat(MAX_PASSWORD_BYTES)).is_ok());
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string");
        assert!(!password.verify("anything"));
    }

    #[test]
    fn test_verify_dummy_is_always_false() {
        assert!(!Password::verify_dummy("dummy-password-for-timing"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("SecurePassword123!").unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("argon2"));
    }
}
