//! Review intake route handler.
//!
//! Form submissions follow post/redirect/get: every outcome answers with a
//! `303 See Other` back to the review section of the home page.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::routes::home::ReviewNotice;
use crate::state::AppState;

/// Where to send the visitor after a submission.
const REVIEWS_ANCHOR: &str = "/#reviews";

/// Raw review form fields. Missing fields deserialize as `None`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    pub name: Option<String>,
    pub stars: Option<String>,
    pub text: Option<String>,
}

/// Redirect target that shows `notice` above the form.
#[must_use]
pub fn notice_location(notice: ReviewNotice) -> String {
    format!("/?review={}#reviews", notice.query_value())
}

/// Accept a review submission.
///
/// POST /reviews
///
/// - Invalid input: nothing is stored, the page explains what was wrong.
/// - Stored: the cached review list is refreshed and a thank-you is shown.
/// - Store failure: logged (and sent to Sentry); the visitor lands back on
///   the page without a notice.
#[instrument(skip(state, form))]
pub async fn create(State(state): State<AppState>, Form(form): Form<ReviewForm>) -> Redirect {
    let review = match eblen_core::validate(
        form.name.as_deref(),
        form.stars.as_deref(),
        form.text.as_deref(),
    ) {
        Ok(review) => review,
        Err(reason) => {
            tracing::info!(%reason, "Review rejected");
            return Redirect::to(&notice_location(ReviewNotice::Invalid));
        }
    };

    match state.catalog().submit_review(&review).await {
        Ok(created) => {
            let review_id = created.id.to_string();
            add_breadcrumb(
                "reviews",
                "Review submitted",
                Some(&[("review_id", review_id.as_str())]),
            );
            Redirect::to(&notice_location(ReviewNotice::Thanks))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create review");
            Redirect::to(REVIEWS_ANCHOR)
        }
    }
}
