//! Hotel services - Entitlement-gated hotel and room lookups
//!
//! Endpoints:
//! - GET /hotels          -> every hotel, base attributes only
//! - GET /hotels/{hotel_id} -> the hotel merged with its rooms
//!
//! Both run the same entitlement check first: the authenticated user
//! needs an enrollment holding a paid, non-remote ticket whose type
//! includes hotel access.

use crate::core::{AppState, HotelError};
use crate::dtos::{HotelDTO, HotelWithRoomsDTO};
use crate::entities::{Hotel, Room, TicketStatus, User};
use crate::repositories::Read;
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Check that a user may view hotel data.
///
/// Every failure is classified `PaymentRequired`, the missing-enrollment
/// and missing-ticket cases included, so all of them surface as 402.
async fn verify_hotel_entitlement(state: &AppState, user_id: i64) -> Result<(), HotelError> {
    let enrollment = match state.enrollment.find_by_user_id(&user_id).await? {
        Some(enrollment) => enrollment,
        None => {
            warn!("User {} has no enrollment", user_id);
            return Err(HotelError::PaymentRequired);
        }
    };

    let ticket = match state
        .ticket
        .find_latest_by_enrollment_id(&enrollment.id)
        .await?
    {
        Some(ticket) => ticket,
        None => {
            warn!("Enrollment {} has no ticket", enrollment.id);
            return Err(HotelError::PaymentRequired);
        }
    };

    let ticket_type = match state.ticket_type.read(&ticket.ticket_type_id).await? {
        Some(ticket_type) => ticket_type,
        None => {
            warn!("Ticket {} references unknown type", ticket.id);
            return Err(HotelError::PaymentRequired);
        }
    };

    if ticket.status != TicketStatus::Paid {
        warn!("Ticket {} is not paid", ticket.id);
        return Err(HotelError::PaymentRequired);
    }

    if ticket_type.is_remote {
        warn!("Ticket type {} is remote-only", ticket_type.id);
        return Err(HotelError::PaymentRequired);
    }

    if !ticket_type.includes_hotel {
        warn!("Ticket type {} does not include hotel access", ticket_type.id);
        return Err(HotelError::PaymentRequired);
    }

    Ok(())
}

/// List every hotel visible to an entitled user, without rooms.
pub async fn list_hotels(state: &AppState, user_id: i64) -> Result<Vec<Hotel>, HotelError> {
    verify_hotel_entitlement(state, user_id).await?;
    let hotels = state.hotel.find_all().await?;
    Ok(hotels)
}

/// Fetch one hotel paired with its rooms, as a zero-or-one element list.
///
/// An unknown hotel id yields an empty list, not an error.
pub async fn list_hotel_rooms(
    state: &AppState,
    user_id: i64,
    hotel_id: i64,
) -> Result<Vec<(Hotel, Vec<Room>)>, HotelError> {
    verify_hotel_entitlement(state, user_id).await?;

    let hotel = match state.hotel.read(&hotel_id).await? {
        Some(hotel) => hotel,
        None => return Ok(Vec::new()),
    };

    let rooms = state.hotel.find_rooms_by_hotel_id(&hotel_id).await?;
    Ok(vec![(hotel, rooms)])
}

// ********************* HTTP HANDLERS **********************//

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn get_hotels(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<HotelDTO>>, HotelError> {
    debug!("Listing hotels");
    let hotels = list_hotels(&state, current_user.id).await?;
    info!("Returning {} hotels", hotels.len());
    Ok(Json(hotels.into_iter().map(HotelDTO::from).collect()))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id, hotel_id = %hotel_id))]
pub async fn get_hotel_rooms(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(hotel_id): Path<i64>,
) -> Result<Json<Vec<HotelWithRoomsDTO>>, HotelError> {
    debug!("Listing rooms for hotel");
    let hotels = list_hotel_rooms(&state, current_user.id, hotel_id).await?;
    Ok(Json(
        hotels.into_iter().map(HotelWithRoomsDTO::from).collect(),
    ))
}
