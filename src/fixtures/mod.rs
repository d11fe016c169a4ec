//! Fixtures

use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    fixtures::{
        carts::{CartFixture, CartsFixture},
        products::{CatalogFile, ProductsFixture},
    },
    products::Product,
};

pub mod carts;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Cart not found
    #[error("Cart not found: {0}")]
    CartNotFound(String),
}

/// Load a product catalog from a JSON (`.json`) or YAML (anything else) file.
///
/// The file may hold a bare list of products or a `products` wrapper.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, FixtureError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file: CatalogFile = if is_json {
        serde_json::from_str(&contents)?
    } else {
        serde_norway::from_str(&contents)?
    };

    let products: Vec<Product> = file.into();

    debug!(path = %path.display(), products = products.len(), "loaded catalog");

    Ok(products)
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog products, in file order
    products: Vec<Product>,

    /// Named carts
    carts: FxHashMap<String, CartFixture>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: Vec::new(),
            carts: FxHashMap::default(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        self.products.extend(fixture.products);

        Ok(self)
    }

    /// Load named carts from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_carts(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartsFixture = serde_norway::from_str(&contents)?;

        self.carts.extend(fixture.carts);

        Ok(self)
    }

    /// Load a complete fixture set (products and carts with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_carts(name)?;

        Ok(fixture)
    }

    /// Get all products
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a cart by its name
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is not found.
    pub fn cart(&self, name: &str) -> Result<&CartFixture, FixtureError> {
        self.carts
            .get(name)
            .ok_or_else(|| FixtureError::CartNotFound(name.to_string()))
    }

    /// Names of all loaded carts, sorted
    pub fn cart_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.carts.keys().map(String::as_str).collect();

        names.sort_unstable();

        names
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
