//! User table access and the first-run seed

use rusqlite::{params, OptionalExtension};

use super::{Store, StoreError};
use crate::core::auth::{self, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::entities::User;

impl Store {
    pub fn get_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = self
            .conn()
            .query_row(
                "SELECT username, password_hash FROM users WHERE username = ?1",
                params![username],
                |row| {
                    Ok(User {
                        username: row.get(0)?,
                        password_hash: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Insert the default login, but only when no account exists yet.
    /// Operators are expected to change the password immediately.
    pub(super) fn seed_default_user(&self) -> Result<(), StoreError> {
        let count: i64 = self
            .conn()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(());
        }

        let hash = auth::hash_password(DEFAULT_PASSWORD)
            .map_err(|e| StoreError::Credentials(e.to_string()))?;
        self.conn().execute(
            "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
            params![DEFAULT_USERNAME, hash],
        )?;
        Ok(())
    }

    pub(crate) fn replace_password_hash(
        &self,
        username: &str,
        hash: &str,
    ) -> Result<(), StoreError> {
        self.conn().execute(
            "UPDATE users SET password_hash = ?1 WHERE username = ?2",
            params![hash, username],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_seeded_once() {
        let store = Store::open_in_memory().unwrap();
        let user = store.get_user(DEFAULT_USERNAME).unwrap().unwrap();
        assert_eq!(user.username, "admin");
        // PHC string, never the raw password
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[test]
    fn test_seed_does_not_clobber_changed_password() {
        let store = Store::open_in_memory().unwrap();
        let session = store.login("admin", "admin").unwrap();
        session.set_password("hunter2").unwrap();
        let hash_after = store.get_user("admin").unwrap().unwrap().password_hash;

        store.seed_default_user().unwrap();
        let hash_reseeded = store.get_user("admin").unwrap().unwrap().password_hash;
        assert_eq!(hash_after, hash_reseeded);
    }

    #[test]
    fn test_unknown_user_is_none() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.get_user("nobody").unwrap().is_none());
    }
}
