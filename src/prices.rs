//! Prices

use std::{fmt, ops::Deref, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading an amount.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The text could not be read as a decimal amount.
    #[error("invalid amount: {0:?}")]
    Invalid(String),

    /// The number was NaN, infinite or outside the decimal range.
    #[error("amount is not a finite decimal")]
    NotFinite,
}

/// Represents a catalog amount (regular or promotional price).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "RawAmount")]
pub struct Price {
    amount: Decimal,
}

impl Price {
    /// Creates a new Price
    pub fn new(amount: Decimal) -> Self {
        Price { amount }
    }

    /// The exact decimal amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.amount
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Decimal>()
            .map(Price::new)
            .map_err(|_err| PriceError::Invalid(s.to_string()))
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }

        // Shortest round-trip text, so 79.9 stays 79.9 rather than its binary expansion.
        value
            .to_string()
            .parse::<Decimal>()
            .map(Price::new)
            .map_err(|_err| PriceError::NotFinite)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_fixed(self.amount))
    }
}

/// Catalog amounts arrive either as numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl TryFrom<RawAmount> for Price {
    type Error = PriceError;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        match raw {
            RawAmount::Number(value) => Price::try_from(value),
            RawAmount::Text(text) => text.parse(),
        }
    }
}

/// Round to cents, midpoint away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Format an amount with exactly two fraction digits (e.g. `80` -> `"80.00"`).
pub fn to_fixed(amount: Decimal) -> String {
    format!("{:.2}", round_to_cents(amount))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(Decimal::new(10_00, 2));

        assert_eq!(price.amount, Decimal::new(1000, 2));
    }

    #[test]
    fn price_derefs_to_decimal() {
        let price = Price::new(Decimal::ONE);

        assert_eq!(*price, Decimal::ONE);
    }

    #[test]
    fn parses_numeric_strings() -> TestResult {
        let price: Price = "100.00".parse()?;

        assert_eq!(price.amount(), Decimal::new(100, 0));

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        let result = "ten pounds".parse::<Price>();

        assert_eq!(result, Err(PriceError::Invalid("ten pounds".to_string())));
    }

    #[test]
    fn nan_is_not_a_price() {
        assert_eq!(Price::try_from(f64::NAN), Err(PriceError::NotFinite));
    }

    #[test]
    fn deserializes_from_number_or_string() -> TestResult {
        let from_text: Price = serde_json::from_str("\"79.90\"")?;
        let from_float: Price = serde_json::from_str("79.9")?;
        let from_int: Price = serde_json::from_str("80")?;

        assert_eq!(from_text.amount(), Decimal::new(79_90, 2));
        assert_eq!(from_float.amount(), Decimal::new(799, 1));
        assert_eq!(from_int.amount(), Decimal::new(80, 0));

        Ok(())
    }

    #[test]
    fn to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(Decimal::new(80, 0)), "80.00");
        assert_eq!(to_fixed(Decimal::new(1_005, 3)), "1.01");
        assert_eq!(to_fixed(Decimal::new(-1_005, 3)), "-1.01");
        assert_eq!(to_fixed(Decimal::new(33_333, 3)), "33.33");
    }

    #[test]
    fn to_fixed_never_prints_negative_zero() {
        assert_eq!(to_fixed(Decimal::new(-1, 3)), "0.00");
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Price::new(Decimal::new(5, 1)).to_string(), "0.50");
    }
}
