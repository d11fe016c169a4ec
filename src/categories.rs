//! Categories

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::products::Product;

/// Upper-cased category of every cart item, in cart order (repeats included).
pub fn categories_of(items: &[&Product]) -> Vec<String> {
    items
        .iter()
        .map(|product| product.category.to_uppercase())
        .collect()
}

/// Reduce categories to their distinct values; the first occurrence keeps its place.
pub fn distinct_categories(categories: Vec<String>) -> SmallVec<[String; 4]> {
    let mut seen = FxHashSet::default();

    categories
        .into_iter()
        .filter(|category| seen.insert(category.clone()))
        .collect()
}
