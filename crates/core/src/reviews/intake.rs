//! Review intake validation.
//!
//! Raw form fields arrive as optional strings. [`validate`] trims them,
//! checks every constraint and returns either a [`ValidReview`] or the first
//! [`Rejected`] reason. Nothing is persisted on rejection.

use serde::Serialize;

use crate::types::Stars;

/// Longest accepted author name, in characters.
pub const MAX_NAME_CHARS: usize = 80;

/// Longest accepted review body, in characters.
pub const MAX_TEXT_CHARS: usize = 2000;

/// Why a review submission was refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    /// Name absent or blank.
    #[error("name is required")]
    MissingName,
    /// Name over [`MAX_NAME_CHARS`].
    #[error("name must be at most {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Star rating absent or blank.
    #[error("rating is required")]
    MissingStars,
    /// Star rating is not an integer.
    #[error("rating must be a whole number (got {0:?})")]
    InvalidStars(String),
    /// Star rating outside `1..=5`.
    #[error("rating must be between 1 and 5 (got {0})")]
    StarsOutOfRange(i64),
    /// Review text absent or blank.
    #[error("review text is required")]
    MissingText,
    /// Review text over [`MAX_TEXT_CHARS`].
    #[error("review text must be at most {max} characters")]
    TextTooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A normalized submission ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidReview {
    pub name: String,
    pub stars: Stars,
    pub text: String,
}

/// Validate and normalize raw review form fields.
///
/// # Errors
///
/// Returns the first failing check, in form order: name, rating, text.
///
/// ```
/// use eblen_core::{Rejected, validate};
///
/// let review = validate(Some(" Anna "), Some("5"), Some(" Great! ")).unwrap();
/// assert_eq!(review.name, "Anna");
/// assert_eq!(review.stars.get(), 5);
/// assert_eq!(review.text, "Great!");
///
/// assert_eq!(validate(Some("Name"), Some("0"), Some("text")), Err(Rejected::StarsOutOfRange(0)));
/// ```
pub fn validate(
    name: Option<&str>,
    stars_raw: Option<&str>,
    text: Option<&str>,
) -> Result<ValidReview, Rejected> {
    let name = required(name).ok_or(Rejected::MissingName)?;
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(Rejected::NameTooLong {
            max: MAX_NAME_CHARS,
        });
    }

    let stars = parse_stars(stars_raw)?;

    let text = required(text).ok_or(Rejected::MissingText)?;
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(Rejected::TextTooLong {
            max: MAX_TEXT_CHARS,
        });
    }

    Ok(ValidReview {
        name: name.to_owned(),
        stars,
        text: text.to_owned(),
    })
}

/// Trimmed, non-empty field value.
fn required(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_stars(raw: Option<&str>) -> Result<Stars, Rejected> {
    let raw = required(raw).ok_or(Rejected::MissingStars)?;
    let value = raw
        .parse::<i64>()
        .map_err(|_| Rejected::InvalidStars(raw.to_owned()))?;
    Stars::new(value).map_err(|_| Rejected::StarsOutOfRange(value))
}
