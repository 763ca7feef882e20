//! EnrollmentRepository - Lookup of event registrations

use crate::entities::Enrollment;
use sqlx::{Error, SqlitePool};

pub struct EnrollmentRepository {
    connection_pool: SqlitePool,
}

impl EnrollmentRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find the enrollment owned by a user. A user owns at most one.
    pub async fn find_by_user_id(&self, user_id: &i64) -> Result<Option<Enrollment>, Error> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "SELECT id, user_id, name, created_at, updated_at FROM enrollments WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(enrollment)
    }
}
