//! UserRepository - Lookup of platform accounts

use super::Read;
use crate::entities::User;
use sqlx::{Error, SqlitePool};

// USER REPO
pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }
}

impl Read<User, i64> for UserRepository {
    async fn read(&self, id: &i64) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(user)
    }
}
