//! Discounts
//!
//! Savings of the promotional total against the regular total, as an amount
//! and as a share of the regular total.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    prices::{round_to_cents, to_fixed},
    pricing::Totals,
};

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely represented.
    #[error("discount percentage overflowed")]
    PercentConversion,
}

/// Discount of a cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discount {
    value: Decimal,
    percent: Percentage,
    points: Decimal,
}

impl Discount {
    /// Amount saved, rounded to cents. Negative if promotions raise the price.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Share of the regular total that was saved, as a fraction.
    pub fn percent(&self) -> Percentage {
        self.percent
    }

    /// Share of the regular total that was saved, in percent points rounded to two decimals.
    pub fn percent_points(&self) -> Decimal {
        self.points
    }

    /// Amount saved, formatted with two decimals (e.g. `"20.00"`).
    pub fn formatted_value(&self) -> String {
        to_fixed(self.value)
    }

    /// Share saved, formatted as percent points (e.g. `"20.00%"`).
    pub fn formatted_percent(&self) -> String {
        format!("{}%", to_fixed(self.percent_points()))
    }
}

/// Calculates the discount between the cent-rounded totals.
///
/// A regular total of zero yields a 0% discount.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the percentage cannot be represented.
pub fn calculate_discount(totals: &Totals) -> Result<Discount, DiscountError> {
    let regular = totals.regular();
    let value = round_to_cents(
        regular
            .checked_sub(totals.promotional())
            .ok_or(DiscountError::PercentConversion)?,
    );

    if regular.is_zero() {
        return Ok(Discount {
            value,
            percent: Percentage::from(Decimal::ZERO),
            points: Decimal::ZERO,
        });
    }

    let fraction = value
        .checked_div(regular)
        .ok_or(DiscountError::PercentConversion)?;

    let points = fraction
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(DiscountError::PercentConversion)?;

    Ok(Discount {
        value,
        percent: Percentage::from(fraction),
        points: round_to_cents(points),
    })
}
