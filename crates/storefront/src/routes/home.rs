//! Home page route handler.
//!
//! The site is a single page: header, hero, catalog, reviews with the intake
//! form, and contacts.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State, rejection::QueryRejection};
use serde::Deserialize;
use tracing::instrument;

use eblen_core::{FEATURED_REVIEW_COUNT, Stars};

use crate::filters;
use crate::models::{Product, Review};
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Product card data.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub name: String,
    pub image_url: Option<String>,
    pub weight: String,
    pub composition: String,
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image_url: product.image_url.clone().filter(|url| !url.is_empty()),
            weight: format!("{} г", product.weight_grams),
            composition: product.composition.clone(),
            price: product.price_rub.to_string(),
        }
    }
}

/// Review card data.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub name: String,
    pub stars: u8,
    pub glyphs: String,
    pub text: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            name: review.name.clone(),
            stars: review.stars.get(),
            glyphs: review.stars.glyphs(),
            text: review.text.clone(),
        }
    }
}

/// Outcome of the last review submission, carried in `?review=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewNotice {
    Thanks,
    Invalid,
}

impl ReviewNotice {
    /// Query value that selects this notice.
    #[must_use]
    pub const fn query_value(self) -> &'static str {
        match self {
            Self::Thanks => "thanks",
            Self::Invalid => "invalid",
        }
    }

    /// Parse a `review` query value; unknown values show nothing.
    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        [Self::Thanks, Self::Invalid]
            .into_iter()
            .find(|notice| notice.query_value() == value)
    }

    /// CSS modifier for the notice box.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Thanks => "success",
            Self::Invalid => "error",
        }
    }

    /// Text shown above the form.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Thanks => "Спасибо! Ваш отзыв опубликован.",
            Self::Invalid => {
                "Отзыв не отправлен: укажите имя, оценку от 1 до 5 и текст отзыва."
            }
        }
    }
}

/// Query parameters accepted by the home page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub review: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub hero_image_url: Option<String>,
    pub products: Vec<ProductView>,
    pub reviews: Vec<ReviewView>,
    pub notice: Option<ReviewNotice>,
    pub star_options: Vec<u8>,
}

/// Rating choices for the form select, best first.
fn star_options() -> Vec<u8> {
    (Stars::MIN..=Stars::MAX).rev().collect()
}

/// Display the home page.
///
/// Products and reviews are fetched concurrently; either one degrades to an
/// empty section if it fails. Four reviews are picked at random per render.
/// A query string that does not parse (e.g. a repeated `review`) is ignored.
#[instrument(skip(state, query))]
pub async fn home(
    State(state): State<AppState>,
    query: Result<Query<HomeQuery>, QueryRejection>,
) -> HomeTemplate {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let listing = state.catalog().home_listing().await;

    let products = listing.products.iter().map(ProductView::from).collect();
    let reviews = eblen_core::sample(listing.reviews.as_slice(), FEATURED_REVIEW_COUNT)
        .iter()
        .map(ReviewView::from)
        .collect();

    HomeTemplate {
        hero_image_url: state.hero_image_url().map(String::from),
        products,
        reviews,
        notice: query.review.as_deref().and_then(ReviewNotice::from_query),
        star_options: star_options(),
    }
}
