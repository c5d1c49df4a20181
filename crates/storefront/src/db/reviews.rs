//! Review repository.

use sqlx::PgPool;
use tracing::instrument;

use eblen_core::ValidReview;

use super::RepositoryError;
use crate::models::Review;

/// Repository for review reads and inserts.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored rating is out of range.
    #[instrument(skip(self))]
    pub async fn list_recent(&self) -> Result<Vec<Review>, RepositoryError> {
        let reviews = sqlx::query_as::<_, Review>(
            r"
            SELECT id, name, stars, text, created_at
            FROM reviews
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Insert a validated review. The database assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the row violates a constraint.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, review), fields(stars = %review.stars))]
    pub async fn create(&self, review: &ValidReview) -> Result<Review, RepositoryError> {
        let created = sqlx::query_as::<_, Review>(
            r"
            INSERT INTO reviews (name, stars, text)
            VALUES ($1, $2, $3)
            RETURNING id, name, stars, text, created_at
            ",
        )
        .bind(&review.name)
        .bind(review.stars)
        .bind(&review.text)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
