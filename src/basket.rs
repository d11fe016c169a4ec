//! Basket

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    categories::{categories_of, distinct_categories},
    looks::{Look, LookError},
    products::{Product, ProductId},
};

/// Errors related to basket construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// A requested identifier has no product in the catalog (request index, identifier).
    #[error("no product with id {id:?} (requested at position {index})")]
    ProductNotFound {
        /// Position of the identifier in the request
        index: usize,

        /// The identifier that was not found
        id: ProductId,
    },
}

/// Look up each requested identifier in the catalog, in request order.
///
/// The first catalog entry with a matching identifier wins. Identifiers with
/// no product leave a `None` in their slot.
pub fn resolve_items<'a>(ids: &[ProductId], products: &'a [Product]) -> Vec<Option<&'a Product>> {
    let mut index: FxHashMap<&ProductId, &'a Product> = FxHashMap::default();

    for product in products {
        index.entry(&product.id).or_insert(product);
    }

    ids.iter().map(|id| index.get(id).copied()).collect()
}

/// Basket of resolved catalog products, in request order.
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    items: Vec<&'a Product>,
}

impl<'a> Basket<'a> {
    /// Create a basket from already resolved products.
    pub fn with_items(items: impl Into<Vec<&'a Product>>) -> Self {
        Basket {
            items: items.into(),
        }
    }

    /// Resolve requested identifiers against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::ProductNotFound`] for the first identifier with no product.
    pub fn from_ids(ids: &[ProductId], products: &'a [Product]) -> Result<Self, BasketError> {
        let items = resolve_items(ids, products)
            .into_iter()
            .zip(ids)
            .enumerate()
            .map(|(index, (item, id))| {
                item.ok_or_else(|| {
                    warn!(%id, index, "product not found in catalog");

                    BasketError::ProductNotFound {
                        index,
                        id: id.clone(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(items = items.len(), "resolved basket");

        Ok(Basket { items })
    }

    /// Products in the basket.
    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    /// Iterate over the products in the basket.
    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Upper-cased categories of the basket items, in basket order.
    pub fn categories(&self) -> Vec<String> {
        categories_of(&self.items)
    }

    /// Number of distinct categories in the basket.
    pub fn distinct_category_count(&self) -> usize {
        distinct_categories(self.categories()).len()
    }

    /// Look unlocked by this basket.
    ///
    /// # Errors
    ///
    /// Returns a [`LookError`] if the basket spans zero or more than four categories.
    pub fn look(&self) -> Result<Look, LookError> {
        Look::for_items(&self.items)
    }

    /// Get the number of items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
