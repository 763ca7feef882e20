//! Core Module - Infrastructure components of the application
//!
//! This module contains the "core" building blocks:
//! - Authentication and JWT
//! - Configuration
//! - Error handling
//! - Application state

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports to simplify imports
pub use auth::{Claims, authentication_middleware, decode_jwt, encode_jwt};
pub use config::Config;
pub use error::{AppError, HotelError};
pub use state::AppState;
