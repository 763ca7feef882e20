//! Services module - Coordinator for the HTTP service handlers
//!
//! Each sub-module carries the handlers for one functionality together
//! with the plain service functions they delegate to.

pub mod hotels;

// Re-exports to simplify imports
pub use hotels::{get_hotel_rooms, get_hotels};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
