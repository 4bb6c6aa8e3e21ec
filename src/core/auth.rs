//! Login and the session capability that gates writes.
//!
//! Passwords are stored as argon2id PHC strings. Reads work directly on
//! [`Store`]; every mutation goes through a [`Session`], which can only be
//! obtained from [`Store::login`].

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use thiserror::Error;

use crate::core::store::{Store, StoreError};
use crate::entities::{Asset, InventoryItem};

/// Username seeded into a fresh store.
pub const DEFAULT_USERNAME: &str = "admin";
/// Password seeded into a fresh store. Change it with `user passwd`.
pub const DEFAULT_PASSWORD: &str = "admin";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Hash a password with a fresh random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC string.
///
/// A malformed stored hash reports the same error as a wrong password, so
/// callers cannot tell the two apart.
pub fn verify_password(password: &str, stored: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

impl Store {
    /// Verify credentials and hand back a session bound to this store.
    pub fn login(&self, username: &str, password: &str) -> Result<Session<'_>, AuthError> {
        let user = self
            .get_user(username)?
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, &user.password_hash)?;
        Ok(Session {
            store: self,
            username: user.username,
        })
    }
}

/// Proof of a successful login. All store mutations live here.
pub struct Session<'a> {
    store: &'a Store,
    username: String,
}

impl Session<'_> {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn add_asset(&self, asset: &Asset) -> Result<Asset, StoreError> {
        self.store.insert_asset(asset)
    }

    pub fn update_asset(&self, asset: &Asset) -> Result<(), StoreError> {
        self.store.replace_asset(asset)
    }

    pub fn delete_asset(&self, id: i64) -> Result<(), StoreError> {
        self.store.remove_asset(id)
    }

    pub fn add_item(&self, item: &InventoryItem) -> Result<InventoryItem, StoreError> {
        self.store.insert_item(item)
    }

    pub fn update_item(&self, item: &InventoryItem) -> Result<(), StoreError> {
        self.store.replace_item(item)
    }

    pub fn delete_item(&self, id: i64) -> Result<(), StoreError> {
        self.store.remove_item(id)
    }

    /// Replace the logged-in user's password.
    pub fn set_password(&self, new_password: &str) -> Result<(), AuthError> {
        let hash = hash_password(new_password)?;
        self.store.replace_password_hash(&self.username, &hash)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_phc() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert!(a.starts_with("$argon2"));
        assert_ne!(a, "secret");
        // fresh salt every time
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_accepts_matching_password() {
        let hash = hash_password("secret").unwrap();
        assert!(verify_password("secret", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("secret").unwrap();
        let err = verify_password("wrong", &hash).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let err = verify_password("secret", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_login_default_credentials() {
        let store = Store::open_in_memory().unwrap();
        let session = store.login("admin", "admin").unwrap();
        assert_eq!(session.username(), "admin");
    }

    #[test]
    fn test_login_unknown_user_fails() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(
            store.login("nobody", "admin"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_wrong_password_fails() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(
            store.login("admin", "letmein"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_set_password_rotates_login() {
        let store = Store::open_in_memory().unwrap();
        let session = store.login("admin", "admin").unwrap();
        session.set_password("hunter2").unwrap();

        assert!(store.login("admin", "admin").is_err());
        assert!(store.login("admin", "hunter2").is_ok());
    }
}
