//! Enumerations - Enumerated types used by the entities

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Pending,
    Paid,
}
