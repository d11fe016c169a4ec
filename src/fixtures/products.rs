//! Product Fixtures

use serde::Deserialize;

use crate::products::Product;

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Catalog products, in catalog order
    pub products: Vec<Product>,
}

/// Catalog file contents: either a bare list of products or a `products` wrapper.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    /// `{ products: [...] }`
    Wrapped(ProductsFixture),

    /// `[...]`
    Bare(Vec<Product>),
}

impl From<CatalogFile> for Vec<Product> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Wrapped(fixture) => fixture.products,
            CatalogFile::Bare(products) => products,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    #[test]
    fn catalog_file_accepts_both_shapes() -> TestResult {
        let wrapped: CatalogFile = serde_json::from_str(
            r#"{ "products": [{ "id": 1, "name": "Tee", "category": "Shirt", "regularPrice": "20" }] }"#,
        )?;
        let bare: CatalogFile = serde_json::from_str(
            r#"[{ "id": 1, "name": "Tee", "category": "Shirt", "regularPrice": "20" }]"#,
        )?;

        let wrapped: Vec<Product> = wrapped.into();
        let bare: Vec<Product> = bare.into();

        assert_eq!(wrapped, bare);
        assert_eq!(
            wrapped.first().map(|product| &product.id),
            Some(&ProductId::from(1))
        );

        Ok(())
    }
}
