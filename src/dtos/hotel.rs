//! Hotel DTOs - Data Transfer Objects for hotels and rooms

use crate::entities::{Hotel, Room};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelDTO {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDTO {
    fn from(value: Hotel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomDTO {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub hotel_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDTO {
    fn from(value: Room) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// A hotel merged with its rooms, the shape served by `GET /hotels/{hotel_id}`.
///
/// The `Rooms` key is capitalized in the client contract.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsDTO {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomDTO>,
}

impl From<(Hotel, Vec<Room>)> for HotelWithRoomsDTO {
    fn from((hotel, rooms): (Hotel, Vec<Room>)) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
            rooms: rooms.into_iter().map(RoomDTO::from).collect(),
        }
    }
}
