//! Cart Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{cart::CartSummary, looks::Look, products::ProductId};

/// Wrapper for named carts in YAML
#[derive(Debug, Deserialize)]
pub struct CartsFixture {
    /// Map of cart name -> cart fixture
    pub carts: FxHashMap<String, CartFixture>,
}

/// Cart Fixture
#[derive(Debug, Clone, Deserialize)]
pub struct CartFixture {
    /// Requested product identifiers
    pub ids: Vec<ProductId>,

    /// Summary the cart is expected to produce, if it produces one
    #[serde(default)]
    pub expected: Option<ExpectedSummary>,
}

/// Expected summary values of a fixture cart
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedSummary {
    /// Expected look
    pub promotion: Look,

    /// Expected promotional total
    pub total_price: String,

    /// Expected discount amount
    pub discount_value: String,

    /// Expected discount percentage
    pub discount: String,
}

impl ExpectedSummary {
    /// Whether `summary` carries the expected look, totals and discount.
    pub fn matches(&self, summary: &CartSummary) -> bool {
        self.promotion == summary.promotion
            && self.total_price == summary.total_price
            && self.discount_value == summary.discount_value
            && self.discount == summary.discount
    }
}
