//! User entity type - the login account

use serde::{Deserialize, Serialize};

/// The operator account. Exactly one is seeded when the database is
/// created; only its password hash ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,

    /// Argon2 hash in PHC string format (salt embedded)
    #[serde(skip_serializing)]
    pub password_hash: String,
}
