//! Password hashing
//!
//! Argon2 implementation of the [`Cryptography`](crate::contracts::Cryptography)
//! contract consumed by the login and create-user use cases.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use shared::error::SystemError;

use crate::contracts::Cryptography;

/// Argon2-backed password hashing
#[derive(Debug, Clone, Default)]
pub struct Argon2Cryptography;

impl Argon2Cryptography {
    pub fn new() -> Self {
        Self
    }
}

impl Cryptography for Argon2Cryptography {
    fn encode_password(&self, password: &str) -> Result<String, SystemError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| SystemError::internal(format!("could not encrypt password: {e}")))
    }

    fn compare_password(&self, password: &str, encoded: &str) -> Result<bool, SystemError> {
        let parsed = PasswordHash::new(encoded)
            .map_err(|e| SystemError::internal(format!("could not compare passwords: {e}")))?;
        // A mismatch is a clean `false`, not an error
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_compare() {
        let crypto = Argon2Cryptography::new();
        let hash = crypto.encode_password("secret123").unwrap();

        assert!(crypto.compare_password("secret123", &hash).unwrap());
        assert!(!crypto.compare_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let crypto = Argon2Cryptography::new();
        let first = crypto.encode_password("secret123").unwrap();
        let second = crypto.encode_password("secret123").unwrap();

        assert_ne!(first, "secret123");
        assert_ne!(first, second);
    }

    #[test]
    fn test_compare_against_garbage_hash_errors() {
        let crypto = Argon2Cryptography::new();
        assert!(crypto.compare_password("secret123", "not-a-hash").is_err());
    }
}
