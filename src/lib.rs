//! Lookbook
//!
//! Lookbook prices shopping carts under "look" promotions: the more product
//! categories a cart mixes, the higher the look it unlocks, and each product
//! may carry a cheaper price for particular looks.
//!
//! [`cart::shopping_cart`] runs the whole pipeline and returns a
//! [`cart::CartSummary`].

pub mod basket;
pub mod cart;
pub mod categories;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod looks;
pub mod observability;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
