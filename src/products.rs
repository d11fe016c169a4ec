//! Products

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{looks::Look, prices::Price};

/// Product identifier, held in its canonical string form.
///
/// Catalogs and requests may spell the same identifier as a number or as a
/// string; both sides are normalised to the same text before comparison, so
/// `1`, `1.0` and `"1"` all name the same product while `"01"` does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(from = "RawId", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Canonical text of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId(value.to_string())
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        ProductId::from(i64::from(value))
    }
}

impl From<f64> for ProductId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "only whole floats within the exactly representable range are narrowed"
    )]
    fn from(value: f64) -> Self {
        let whole = value.is_finite()
            && value.fract() == 0.0
            && value >= -9_007_199_254_740_992.0
            && value <= 9_007_199_254_740_992.0;

        if whole {
            ProductId::from(value as i64)
        } else {
            ProductId(value.to_string())
        }
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        ProductId(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for ProductId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Integer(value) => ProductId::from(value),
            RawId::Float(value) => ProductId::from(value),
            RawId::Text(value) => ProductId::from(value),
        }
    }
}

/// A price that applies while the cart qualifies for one of `looks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromotionPrice {
    /// Look labels this price is valid for (e.g. `"DOUBLE LOOK"`).
    pub looks: SmallVec<[String; 4]>,

    /// Price while one of the looks is active
    pub price: Price,
}

impl PromotionPrice {
    /// Create a promotion price valid for the given looks.
    pub fn new(looks: &[Look], price: Price) -> Self {
        Self {
            looks: looks.iter().map(|look| look.label().to_string()).collect(),
            price,
        }
    }

    /// Whether this price is valid for `look`.
    pub fn applies_to(&self, look: Look) -> bool {
        self.looks.iter().any(|label| label == look.label())
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product category, compared case-insensitively
    pub category: String,

    /// Non-promotional list price
    pub regular_price: Price,

    /// Promotion prices, in priority order
    #[serde(default)]
    pub promotions: Vec<PromotionPrice>,
}

impl Product {
    /// Name and category as shown in a cart summary.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }
}

/// Name and original-case category of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    /// Product name
    pub name: String,

    /// Product category, as written in the catalog
    pub category: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn numeric_and_string_ids_normalise_to_the_same_text() {
        assert_eq!(ProductId::from(120), ProductId::from("120"));
        assert_eq!(ProductId::from(120.0), ProductId::from("120"));
        assert_ne!(ProductId::from(120), ProductId::from("0120"));
    }

    #[test]
    fn fractional_float_ids_keep_their_fraction() {
        assert_eq!(ProductId::from(1.5).as_str(), "1.5");
    }

    #[test]
    fn ids_deserialize_from_numbers_and_strings() -> TestResult {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[110, "120", 130.0]"#)?;

        assert_eq!(
            ids,
            vec![
                ProductId::from(110),
                ProductId::from(120),
                ProductId::from(130)
            ]
        );

        Ok(())
    }

    #[test]
    fn product_deserializes_camel_case_fields() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Oxford Shirt",
                "category": "Shirt",
                "regularPrice": "100.00",
                "promotions": [{ "looks": ["SINGLE LOOK"], "price": "80.00" }]
            }"#,
        )?;

        assert_eq!(product.id, ProductId::from(1));
        assert_eq!(product.regular_price.amount(), Decimal::new(100, 0));
        assert_eq!(product.promotions.len(), 1);
        assert!(
            product
                .promotions
                .iter()
                .any(|promotion| promotion.applies_to(Look::Single))
        );

        Ok(())
    }

    #[test]
    fn promotions_default_to_empty() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{ "id": "a", "name": "Belt", "category": "Accessories", "regularPrice": 15 }"#,
        )?;

        assert!(product.promotions.is_empty());

        Ok(())
    }

    #[test]
    fn malformed_price_is_rejected() {
        let result = serde_json::from_str::<Product>(
            r#"{ "id": 1, "name": "Hat", "category": "Hats", "regularPrice": "n/a" }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn summary_keeps_original_category_case() -> TestResult {
        let product = Product {
            id: ProductId::from(1),
            name: "Linen Trousers".to_string(),
            category: "Pants".to_string(),
            regular_price: "60".parse()?,
            promotions: Vec::new(),
        };

        assert_eq!(
            product.summary(),
            ProductSummary {
                name: "Linen Trousers".to_string(),
                category: "Pants".to_string(),
            }
        );

        Ok(())
    }
}
