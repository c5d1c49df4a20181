//! Customer review types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use eblen_core::{ReviewId, Stars};

/// A stored review.
///
/// Created through the intake form and never edited by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Review {
    /// Unique review ID.
    pub id: ReviewId,
    /// Author display name.
    pub name: String,
    /// Rating, always `1..=5`.
    pub stars: Stars,
    /// Review body.
    pub text: String,
    /// Assigned by the database on insert.
    pub created_at: DateTime<Utc>,
}
