//! Ticket entity - Purchased admission tied to an enrollment

use super::TicketStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Ticket {
    pub id: i64,
    pub enrollment_id: i64,
    pub ticket_type_id: i64,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
