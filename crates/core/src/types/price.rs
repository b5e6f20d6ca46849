//! Type-safe price representation.
//!
//! Catalog prices are whole currency units (no fractional part), so the
//! wrapper holds a non-negative `i64` rather than a decimal type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error constructing a [`Price`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price must be non-negative (got {0})")]
    Negative(i64),
}

/// A non-negative whole-unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `amount` is below zero.
    pub const fn new(amount: i64) -> Result<Self, PriceError> {
        if amount < 0 {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    /// Format with space-separated thousands grouping, e.g. `600 500`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        f.write_str(&out)
    }
}

#[cfg(feature = "postgres")]
mod pg {
    use super::Price;

    impl sqlx::Type<sqlx::Postgres> for Price {
        fn type_info() -> sqlx::postgres::PgTypeInfo {
            <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
        }

        fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
            <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
        }
    }

    impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
        fn decode(
            value: sqlx::postgres::PgValueRef<'r>,
        ) -> Result<Self, sqlx::error::BoxDynError> {
            let amount = <i64 as sqlx::Decode<'_, sqlx::Postgres>>::decode(value)?;
            Ok(Self::new(amount)?)
        }
    }

    impl sqlx::Encode<'_, sqlx::Postgres> for Price {
        fn encode_by_ref(
            &self,
            buf: &mut sqlx::postgres::PgArgumentBuffer,
        ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
            <i64 as sqlx::Encode<'_, sqlx::Postgres>>::encode_by_ref(&self.amount(), buf)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_negative() {
        assert_eq!(Price::new(-1), Err(PriceError::Negative(-1)));
    }

    #[test]
    fn test_price_accepts_zero() {
        assert_eq!(Price::new(0).unwrap().amount(), 0);
    }

    #[test]
    fn test_price_display_groups_thousands() {
        assert_eq!(Price::new(600_500).unwrap().to_string(), "600 500");
        assert_eq!(Price::new(999).unwrap().to_string(), "999");
        assert_eq!(Price::new(1_000_000).unwrap().to_string(), "1 000 000");
    }
}
