//! Salted password hashing helpers.
//!
//! # Responsibility
//! - Produce and verify Argon2id password hashes in PHC string format.
//!
//! # Invariants
//! - Every hash carries its own random salt.
//! - Verification never distinguishes "bad hash" from "wrong password".

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error produced while hashing a password.
#[derive(Debug)]
pub struct PasswordError(argon2::password_hash::Error);

impl Display for PasswordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "password hashing failed: {}", self.0)
    }
}

impl Error for PasswordError {}

impl From<argon2::password_hash::Error> for PasswordError {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self(value)
    }
}

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// Returns `false` for unparseable hashes as well as mismatches.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}
