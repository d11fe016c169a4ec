//! Pricing
//!
//! Regular and look-dependent promotional prices for single products, and the
//! cart totals built from them.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    looks::Look,
    prices::{Price, round_to_cents, to_fixed},
    products::Product,
};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalPriceError {
    /// The running total left the decimal range.
    #[error("total price overflowed")]
    Overflow,
}

/// Price of a product under a look, and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedPrice {
    /// A promotion entry for the look applied.
    Promotional(Price),

    /// No promotion entry matched; the regular price applies.
    Regular(Price),
}

impl ResolvedPrice {
    /// The price to charge, whatever its source.
    pub fn price(self) -> Price {
        match self {
            ResolvedPrice::Promotional(price) | ResolvedPrice::Regular(price) => price,
        }
    }

    /// Whether a promotion entry supplied this price.
    pub fn is_promotional(self) -> bool {
        matches!(self, ResolvedPrice::Promotional(_))
    }
}

/// Regular (list) price of a product.
pub fn regular_price(product: &Product) -> Price {
    product.regular_price
}

/// Price of the first promotion entry valid for `look`, if any.
pub fn promotion_price_for(product: &Product, look: Look) -> Option<Price> {
    product
        .promotions
        .iter()
        .find(|promotion| promotion.applies_to(look))
        .map(|promotion| promotion.price)
}

/// Price of a product while `look` is active, falling back to the regular price.
pub fn promotional_price(product: &Product, look: Look) -> ResolvedPrice {
    promotion_price_for(product, look).map_or_else(
        || ResolvedPrice::Regular(regular_price(product)),
        ResolvedPrice::Promotional,
    )
}

/// Regular and promotional cart totals, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    regular: Decimal,
    promotional: Decimal,
}

impl Totals {
    /// Create totals from raw sums; both are rounded to cents.
    pub fn new(regular: Decimal, promotional: Decimal) -> Self {
        Self {
            regular: round_to_cents(regular),
            promotional: round_to_cents(promotional),
        }
    }

    /// Total at regular prices.
    pub fn regular(&self) -> Decimal {
        self.regular
    }

    /// Total at promotional prices.
    pub fn promotional(&self) -> Decimal {
        self.promotional
    }

    /// Total at regular prices, formatted with two decimals.
    pub fn formatted_regular(&self) -> String {
        to_fixed(self.regular)
    }

    /// Total at promotional prices, formatted with two decimals.
    pub fn formatted_promotional(&self) -> String {
        to_fixed(self.promotional)
    }
}

/// Calculates the regular and promotional totals of a list of items under `look`.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a running total left the decimal range.
pub fn total_prices(items: &[&Product], look: Look) -> Result<Totals, TotalPriceError> {
    let (regular, promotional) = items.iter().try_fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(regular, promotional), product| -> Result<_, TotalPriceError> {
            let regular = regular
                .checked_add(regular_price(product).amount())
                .ok_or(TotalPriceError::Overflow)?;
            let promotional = promotional
                .checked_add(promotional_price(product, look).price().amount())
                .ok_or(TotalPriceError::Overflow)?;

            Ok((regular, promotional))
        },
    )?;

    let totals = Totals::new(regular, promotional);

    debug!(
        %look,
        regular = %totals.formatted_regular(),
        promotional = %totals.formatted_promotional(),
        "calculated totals"
    );

    Ok(totals)
}
