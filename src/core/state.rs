//! Application State - Global application state
//!
//! Holds the repositories and shared configuration every route and
//! middleware needs.

use crate::repositories::{
    EnrollmentRepository, HotelRepository, TicketRepository, TicketTypeRepository, UserRepository,
};
use sqlx::SqlitePool;

/// Global application state shared across all routes and middleware
pub struct AppState {
    /// Repository for platform accounts (auth middleware)
    pub user: UserRepository,

    /// Repository for event enrollments
    pub enrollment: EnrollmentRepository,

    /// Repository for admission tickets
    pub ticket: TicketRepository,

    /// Repository for ticket type definitions
    pub ticket_type: TicketTypeRepository,

    /// Repository for the hotel inventory
    pub hotel: HotelRepository,

    /// Secret key for JWT tokens
    pub jwt_secret: String,
}

impl AppState {
    /// Build an AppState, wiring every repository to the given
    /// connection pool.
    ///
    /// # Arguments
    /// * `pool` - Shared SQLite connection pool
    /// * `jwt_secret` - Secret key used to verify JWT signatures
    pub fn new(pool: SqlitePool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            enrollment: EnrollmentRepository::new(pool.clone()),
            ticket: TicketRepository::new(pool.clone()),
            ticket_type: TicketTypeRepository::new(pool.clone()),
            hotel: HotelRepository::new(pool),
            jwt_secret,
        }
    }
}
