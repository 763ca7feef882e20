//! Entities module - Domain entities of the application
//!
//! Every entity mirrors one table of the database schema.

pub mod enrollment;
pub mod enums;
pub mod hotel;
pub mod room;
pub mod ticket;
pub mod ticket_type;
pub mod user;

// Re-exports to simplify imports
pub use enrollment::Enrollment;
pub use enums::TicketStatus;
pub use hotel::Hotel;
pub use room::Room;
pub use ticket::Ticket;
pub use ticket_type::TicketType;
pub use user::User;
