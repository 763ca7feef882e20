//! User entity - Platform account referenced by JWT claims
//!
//! Credentials and token issuance live in the account service; this crate
//! only reads the row to confirm the token's subject still exists.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
}
