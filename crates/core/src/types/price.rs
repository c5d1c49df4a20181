//! Whole-ruble price representation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in whole Russian rubles.
///
/// Catalog prices carry no kopecks, so the amount is a plain integer.
/// [`Display`](fmt::Display) formats it the way `ru-RU` locales do: digits
/// grouped in threes with a no-break space, followed by the ruble sign.
///
/// ```
/// use eblen_core::Rubles;
///
/// assert_eq!(Rubles::new(490).to_string(), "490 ₽");
/// assert_eq!(Rubles::new(1290).to_string(), "1\u{a0}290 ₽");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Rubles(i64);

impl Rubles {
    /// The ruble sign.
    pub const SIGN: &'static str = "₽";

    /// Create a price.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in rubles.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// The amount with `ru-RU` digit grouping, without the sign.
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        let lead = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i % 3) == lead {
                out.push('\u{a0}');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Rubles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grouped(), Self::SIGN)
    }
}

impl From<i64> for Rubles {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Rubles {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Rubles {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        Ok(Self(<i64 as sqlx::Decode<sqlx::Postgres>>::decode(value)?))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Rubles {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(Rubles::new(0).grouped(), "0");
        assert_eq!(Rubles::new(999).grouped(), "999");
        assert_eq!(Rubles::new(1000).grouped(), "1\u{a0}000");
        assert_eq!(Rubles::new(12_345).grouped(), "12\u{a0}345");
        assert_eq!(Rubles::new(1_234_567).grouped(), "1\u{a0}234\u{a0}567");
        assert_eq!(Rubles::new(-4500).grouped(), "-4\u{a0}500");
    }

    #[test]
    fn test_display_appends_sign() {
        assert_eq!(Rubles::new(350).to_string(), "350 ₽");
    }
}
