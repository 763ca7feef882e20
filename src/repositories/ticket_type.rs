//! TicketTypeRepository - Lookup of ticket type definitions

use super::Read;
use crate::entities::TicketType;
use sqlx::{Error, SqlitePool};

pub struct TicketTypeRepository {
    connection_pool: SqlitePool,
}

impl TicketTypeRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Read<TicketType, i64> for TicketTypeRepository {
    async fn read(&self, id: &i64) -> Result<Option<TicketType>, Error> {
        let ticket_type = sqlx::query_as::<_, TicketType>(
            r#"
            SELECT id, name, price, includes_hotel, is_remote, created_at, updated_at
            FROM ticket_types
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(ticket_type)
    }
}
