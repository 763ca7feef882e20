use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Infrastructure error: a status code plus a short message, rendered as a
/// JSON body. Used by the authentication middleware and the bootstrap path.
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::Database(_) => Self::bad_request("Database error"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            _ => Self::internal_server_error("Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

/// Classified outcome of the hotel lookup flow.
///
/// The handler contract is intentionally narrow: `NotFound` renders as 404
/// and every other failure, store errors included, renders as 402 with an
/// empty body. Clients only see the status code.
#[derive(Debug)]
pub enum HotelError {
    /// A requested resource is missing. Never produced by the entitlement
    /// check itself; see `services::hotels`.
    NotFound,
    /// The user is not entitled to view hotel data: no enrollment, no
    /// ticket, unpaid ticket, remote-only ticket, or a ticket without
    /// hotel access.
    PaymentRequired,
    /// Underlying store failure.
    Store(sqlx::Error),
}

impl HotelError {
    fn status(&self) -> StatusCode {
        match self {
            HotelError::NotFound => StatusCode::NOT_FOUND,
            HotelError::PaymentRequired | HotelError::Store(_) => StatusCode::PAYMENT_REQUIRED,
        }
    }
}

impl From<sqlx::Error> for HotelError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for HotelError {
    fn into_response(self) -> axum::response::Response {
        self.status().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(HotelError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn payment_required_maps_to_402() {
        assert_eq!(
            HotelError::PaymentRequired.status(),
            StatusCode::PAYMENT_REQUIRED
        );
    }

    #[test]
    fn store_errors_map_to_402() {
        let err = HotelError::Store(sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn row_not_found_classifies_as_not_found() {
        let err = HotelError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, HotelError::NotFound));
    }

    #[test]
    fn other_sqlx_errors_classify_as_store() {
        let err = HotelError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, HotelError::Store(_)));
    }
}
