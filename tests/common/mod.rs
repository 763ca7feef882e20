use axum_test::TestServer;
use hotels_api::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// JWT secret shared by every test
pub const TEST_JWT_SECRET: &str = "a-test-secret-that-must-absolutely-be-changed";

/// Build an AppState for the tests
///
/// # Arguments
/// * `pool` - SQLite connection pool
///
/// # Returns
/// Arc<AppState> configured with the test JWT secret
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, TEST_JWT_SECRET.to_string()))
}

/// Build a TestServer for the tests
///
/// # Arguments
/// * `state` - AppState the server should use
///
/// # Returns
/// TestServer ready to run requests
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = hotels_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Generate a JWT token for testing
///
/// # Arguments
/// * `user_id` - ID of the user the token is issued for
/// * `jwt_secret` - Secret key used to sign the token
///
/// # Returns
/// JWT token valid for 24 hours
pub fn create_test_jwt(user_id: i64, jwt_secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        exp: usize,
        iat: usize,
        user_id: i64,
    }

    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        exp: expiration,
        iat: now.timestamp() as usize,
        user_id,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}
