//! Lookbook prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError, resolve_items},
    cart::{CartError, CartSummary, shopping_cart},
    discounts::{Discount, DiscountError, calculate_discount},
    fixtures::{Fixture, FixtureError, load_catalog},
    looks::{Look, LookError},
    prices::{Price, PriceError},
    pricing::{ResolvedPrice, TotalPriceError, Totals, promotional_price, regular_price, total_prices},
    products::{Product, ProductId, ProductSummary, PromotionPrice},
    receipt::ReceiptError,
};
