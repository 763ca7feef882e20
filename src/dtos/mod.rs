//! DTOs module - Serialization shapes exposed to clients
//!
//! Entities are table-shaped and snake_case; the client contract is
//! camelCase with ISO-8601 timestamps, so every response goes through
//! one of these types.

pub mod hotel;

// Re-exports to simplify imports
pub use hotel::{HotelDTO, HotelWithRoomsDTO, RoomDTO};
