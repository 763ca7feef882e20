//! TicketRepository - Lookup of admission tickets

use crate::entities::Ticket;
use sqlx::{Error, SqlitePool};
use tracing::{debug, instrument};

pub struct TicketRepository {
    connection_pool: SqlitePool,
}

impl TicketRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find the most recent ticket of an enrollment.
    ///
    /// An enrollment can accumulate tickets over time (e.g. after an
    /// upgrade); the entitlement check only looks at the latest one.
    #[instrument(skip(self), fields(enrollment_id = %enrollment_id))]
    pub async fn find_latest_by_enrollment_id(
        &self,
        enrollment_id: &i64,
    ) -> Result<Option<Ticket>, Error> {
        debug!("Fetching latest ticket for enrollment");
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, enrollment_id, ticket_type_id, status, created_at, updated_at
            FROM tickets
            WHERE enrollment_id = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(ticket)
    }
}
