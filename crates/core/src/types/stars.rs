//! Star rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Stars`] rating.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StarsError {
    /// The value is outside `1..=5`.
    #[error("rating must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Lowest allowed rating.
        min: u8,
        /// Highest allowed rating.
        max: u8,
    },
}

/// A review's star rating.
///
/// ## Constraints
///
/// - Integer in `1..=5` inclusive
///
/// ## Examples
///
/// ```
/// use eblen_core::Stars;
///
/// assert!(Stars::new(5).is_ok());
/// assert!(Stars::new(0).is_err());
/// assert!(Stars::new(6).is_err());
///
/// assert_eq!(Stars::new(3).unwrap().glyphs(), "★★★☆☆");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Stars(u8);

impl Stars {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Build a rating from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`StarsError::OutOfRange`] unless `1 <= value <= 5`.
    pub fn new(value: i64) -> Result<Self, StarsError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(StarsError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// Returns the rating as a number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of empty stars needed to pad the display up to five.
    #[must_use]
    pub const fn missing(self) -> u8 {
        Self::MAX - self.0
    }

    /// Filled stars followed by empty ones, e.g. `★★★★☆`.
    #[must_use]
    pub fn glyphs(self) -> String {
        let filled = "★".repeat(usize::from(self.0));
        let empty = "☆".repeat(usize::from(self.missing()));
        filled + &empty
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Stars {
    type Error = StarsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for i64 {
    fn from(stars: Stars) -> Self {
        Self::from(stars.0)
    }
}

// Stored as SMALLINT with a CHECK constraint
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Stars {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i16 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i16 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Stars {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <i16 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::new(i64::from(raw))?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Stars {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i16 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&i16::from(self.0), buf)
    }
}
