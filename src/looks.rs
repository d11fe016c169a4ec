//! Looks
//!
//! A look is the promotion tier a cart unlocks by mixing product categories:
//! one category is a single look, four categories make a full look.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    categories::{categories_of, distinct_categories},
    products::Product,
};

/// Errors raised when a category count has no look.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookError {
    /// The cart has no categories at all.
    #[error("cart has no categories; no look applies")]
    NoCategories,

    /// The cart mixes more categories than the largest look covers.
    #[error("cart has {0} distinct categories; at most {max} are supported", max = Look::ALL.len())]
    TooManyCategories(usize),
}

/// Promotion tier selected by the number of distinct categories in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Look {
    /// One category
    #[serde(rename = "SINGLE LOOK")]
    Single,

    /// Two categories
    #[serde(rename = "DOUBLE LOOK")]
    Double,

    /// Three categories
    #[serde(rename = "TRIPLE LOOK")]
    Triple,

    /// Four categories
    #[serde(rename = "FULL LOOK")]
    Full,
}

impl Look {
    /// Every look, ordered by the category count that unlocks it.
    pub const ALL: [Look; 4] = [Look::Single, Look::Double, Look::Triple, Look::Full];

    /// Label used by catalogs and cart summaries.
    pub fn label(self) -> &'static str {
        match self {
            Look::Single => "SINGLE LOOK",
            Look::Double => "DOUBLE LOOK",
            Look::Triple => "TRIPLE LOOK",
            Look::Full => "FULL LOOK",
        }
    }

    /// Number of distinct categories that unlock this look.
    pub fn category_count(self) -> usize {
        match self {
            Look::Single => 1,
            Look::Double => 2,
            Look::Triple => 3,
            Look::Full => 4,
        }
    }

    /// Select the look for a number of distinct categories.
    ///
    /// # Errors
    ///
    /// - [`LookError::NoCategories`]: `count` is zero.
    /// - [`LookError::TooManyCategories`]: `count` is above four.
    pub fn from_category_count(count: usize) -> Result<Self, LookError> {
        match count {
            0 => Err(LookError::NoCategories),
            1 => Ok(Look::Single),
            2 => Ok(Look::Double),
            3 => Ok(Look::Triple),
            4 => Ok(Look::Full),
            n => Err(LookError::TooManyCategories(n)),
        }
    }

    /// Select the look for a set of cart items.
    ///
    /// # Errors
    ///
    /// Returns a [`LookError`] if the items span zero or more than four categories.
    pub fn for_items(items: &[&Product]) -> Result<Self, LookError> {
        let distinct = distinct_categories(categories_of(items));
        let look = Look::from_category_count(distinct.len());

        debug!(categories = ?distinct, ?look, "selected look");

        look
    }
}

impl fmt::Display for Look {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    fn product(id: i64, category: &str) -> TestResult<Product> {
        Ok(Product {
            id: ProductId::from(id),
            name: format!("product {id}"),
            category: category.to_string(),
            regular_price: "10".parse()?,
            promotions: Vec::new(),
        })
    }

    #[test]
    fn category_counts_map_to_looks() -> TestResult {
        for look in Look::ALL {
            assert_eq!(Look::from_category_count(look.category_count())?, look);
        }

        Ok(())
    }

    #[test]
    fn zero_categories_is_an_error() {
        assert_eq!(Look::from_category_count(0), Err(LookError::NoCategories));
    }

    #[test]
    fn more_than_four_categories_is_an_error() {
        assert_eq!(
            Look::from_category_count(5),
            Err(LookError::TooManyCategories(5))
        );
    }

    #[test]
    fn labels_match_serialized_form() -> TestResult {
        for look in Look::ALL {
            assert_eq!(serde_json::to_string(&look)?, format!("\"{look}\""));
        }

        Ok(())
    }

    #[test]
    fn for_items_ignores_category_case_and_repeats() -> TestResult {
        let shirt = product(1, "Shirt")?;
        let other_shirt = product(2, "SHIRT")?;
        let pants = product(3, "pants")?;

        let look = Look::for_items(&[&shirt, &other_shirt, &pants])?;

        assert_eq!(look, Look::Double);

        Ok(())
    }

    #[test]
    fn for_items_with_five_categories_errors() -> TestResult {
        let products = [
            product(1, "Shirt")?,
            product(2, "Pants")?,
            product(3, "Shoes")?,
            product(4, "Accessories")?,
            product(5, "Hats")?,
        ];
        let items: Vec<&Product> = products.iter().collect();

        assert_eq!(
            Look::for_items(&items),
            Err(LookError::TooManyCategories(5))
        );

        Ok(())
    }
}
