//! TicketType entity - Price and access profile of a ticket
//!
//! `includes_hotel` and `is_remote` drive the hotel entitlement check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct TicketType {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub includes_hotel: bool,
    pub is_remote: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
