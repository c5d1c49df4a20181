//! Review handling shared by the storefront and tooling.
//!
//! - [`sample`] picks the handful of reviews shown on the home page.
//! - [`validate`] turns raw form fields into a [`ValidReview`] ready to insert.

mod intake;
mod sample;

pub use intake::{MAX_NAME_CHARS, MAX_TEXT_CHARS, Rejected, ValidReview, validate};
pub use sample::{sample, sample_with};

/// Number of reviews featured on the home page.
pub const FEATURED_REVIEW_COUNT: usize = 4;
