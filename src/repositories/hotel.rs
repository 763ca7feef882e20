//! HotelRepository - Read access to the hotel inventory

use super::Read;
use crate::entities::{Hotel, Room};
use sqlx::{Error, SqlitePool};
use tracing::{debug, instrument};

// HOTEL REPOSITORY
pub struct HotelRepository {
    connection_pool: SqlitePool,
}

impl HotelRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Fetch every hotel, in store order.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Hotel>, Error> {
        debug!("Fetching all hotels");
        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(hotels)
    }

    /// Fetch the rooms of one hotel, in store order. Empty for an
    /// unknown hotel id.
    #[instrument(skip(self), fields(hotel_id = %hotel_id))]
    pub async fn find_rooms_by_hotel_id(&self, hotel_id: &i64) -> Result<Vec<Room>, Error> {
        debug!("Fetching rooms for hotel");
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = ?
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(rooms)
    }
}

impl Read<Hotel, i64> for HotelRepository {
    async fn read(&self, id: &i64) -> Result<Option<Hotel>, Error> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(hotel)
    }
}
