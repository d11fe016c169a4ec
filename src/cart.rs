//! Shopping Cart
//!
//! Entry point tying the pipeline together: resolve the requested products,
//! select the look from their categories, total both price lists and report
//! the discount.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    basket::{Basket, BasketError},
    discounts::{DiscountError, calculate_discount},
    looks::{Look, LookError},
    pricing::{TotalPriceError, total_prices},
    products::{Product, ProductId, ProductSummary},
};

/// Errors that can occur while building a cart summary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No product identifiers were requested.
    #[error("cart is empty")]
    EmptyCart,

    /// A requested product could not be resolved.
    #[error(transparent)]
    Basket(#[from] BasketError),

    /// The cart's categories do not map to a look.
    #[error(transparent)]
    Look(#[from] LookError),

    /// Totals could not be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// The discount could not be calculated.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Summary of a shopping cart under its look promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Name and category of each cart line, in request order
    pub products: Vec<ProductSummary>,

    /// Look unlocked by the cart
    pub promotion: Look,

    /// Promotional total (e.g. `"80.00"`)
    pub total_price: String,

    /// Amount saved against the regular total (e.g. `"20.00"`)
    pub discount_value: String,

    /// Share of the regular total saved (e.g. `"20.00%"`)
    pub discount: String,
}

/// Build the summary of a cart holding the products named by `ids`.
///
/// # Errors
///
/// - [`CartError::EmptyCart`]: `ids` is empty.
/// - [`CartError::Basket`]: an identifier has no product in `products`.
/// - [`CartError::Look`]: the cart spans more than four categories.
/// - [`CartError::TotalPrice`] / [`CartError::Discount`]: decimal overflow.
#[instrument(skip_all, fields(ids = ids.len(), catalog = products.len()))]
pub fn shopping_cart(ids: &[ProductId], products: &[Product]) -> Result<CartSummary, CartError> {
    if ids.is_empty() {
        return Err(CartError::EmptyCart);
    }

    let basket = Basket::from_ids(ids, products)?;
    let summaries = basket.iter().map(Product::summary).collect();
    let look = basket.look()?;
    let totals = total_prices(basket.items(), look)?;
    let discount = calculate_discount(&totals)?;

    let total_price = totals.formatted_promotional();
    let discount_percent = discount.formatted_percent();

    debug!(%look, total = %total_price, discount = %discount_percent, "built cart summary");

    Ok(CartSummary {
        products: summaries,
        promotion: look,
        total_price,
        discount_value: discount.formatted_value(),
        discount: discount_percent,
    })
}
