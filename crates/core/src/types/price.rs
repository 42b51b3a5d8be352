//! Decimal price representation.
//!
//! Prices are stored as `NUMERIC` in `PostgreSQL` and carried as
//! [`rust_decimal::Decimal`] everywhere else; floating point never touches
//! money values.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price in the catalog's single display currency (USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type), sqlx(transparent))]
pub struct Price(Decimal);

/// Error parsing a price from user input.
#[derive(Debug, thiserror::Error)]
#[error("invalid price: {0}")]
pub struct ParsePriceError(String);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The raw decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Format for display, e.g. `$19.99`.
    #[must_use]
    pub fn display(self) -> String {
        format!("${:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('$');
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| ParsePriceError(s.to_string()))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        let price: Price = "19.9".parse().expect("parse");
        assert_eq!(price.display(), "$19.90");
    }

    #[test]
    fn test_parse_trims_whitespace_and_dollar_sign() {
        let price: Price = " $42.50 ".parse().expect("parse");
        assert_eq!(price.display(), "$42.50");
    }

    #[test]
    fn test_parse_integer_amount() {
        let price: Price = "100".parse().expect("parse");
        assert_eq!(price.display(), "$100.00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-price".parse::<Price>().is_err());
        assert!(String::new().parse::<Price>().is_err());
    }
}
