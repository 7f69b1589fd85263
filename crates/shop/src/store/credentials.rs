//! The credential store.
//!
//! Holds username -> password-verifier mappings. Only the Argon2 PHC string
//! derived from the password is kept; the raw password is never stored or
//! logged. Entries are created once at registration and never updated or
//! deleted.

use std::collections::HashMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use bodega_core::Role;

use super::StoreError;

/// A registered credential entry.
#[derive(Debug, Clone)]
struct Credential {
    /// Argon2 PHC string derived from the password at registration.
    verifier: String,
    role: Role,
}

/// The authoritative collection of registered credentials.
#[derive(Debug, Default)]
pub struct CredentialStore {
    entries: HashMap<String, Credential>,
}

impl CredentialStore {
    /// Register a new credential.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UsernameTaken` if the username already exists,
    /// or `StoreError::CredentialHash` if password hashing fails.
    pub fn register(&mut self, username: &str, password: &str, role: Role) -> Result<(), StoreError> {
        if self.entries.contains_key(username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        let verifier = hash_password(password)?;
        self.entries
            .insert(username.to_string(), Credential { verifier, role });
        Ok(())
    }

    /// Whether `password` is accepted by the verifier stored for `username`.
    ///
    /// Returns false for unknown usernames.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.entries
            .get(username)
            .is_some_and(|entry| verify_password(password, &entry.verifier))
    }

    /// Role stored for a username, if registered.
    #[must_use]
    pub fn role(&self, username: &str) -> Option<Role> {
        self.entries.get(username).map(|entry| entry.role)
    }

    /// Whether a username is registered.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.entries.contains_key(username)
    }
}

/// Derive an Argon2 PHC string from a password.
fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| StoreError::CredentialHash)
}

/// Check a password against a stored PHC string.
fn verify_password(password: &str, verifier: &str) -> bool {
    PasswordHash::new(verifier).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}
