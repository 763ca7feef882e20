//! Server library - exposes the main modules for the binary and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export the main types to simplify imports
pub use crate::core::{AppError, AppState, HotelError};
pub use crate::services::root;

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Build the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/hotels", configure_hotel_routes(state.clone()))
        .with_state(state)
}

/// Routes serving the hotel inventory (authentication required)
fn configure_hotel_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::{get_hotel_rooms, get_hotels};

    Router::new()
        .route("/", get(get_hotels))
        .route("/{hotel_id}", get(get_hotel_rooms))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
