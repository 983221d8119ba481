//! Parser for catalog files.
//!
//! A catalog file is a JSON array of products:
//!
//! ```json
//! [
//!   { "id": "1", "name": "Premium Wireless Headphones", "price": 299,
//!     "original_price": 399, "category": "Audio", "rating": 4.8,
//!     "reviews": 245, "is_new": true, "is_featured": true }
//! ]
//! ```
//!
//! `original_price`, `is_new` and `is_featured` are optional.

use crate::error::{CatalogError, Result};
use crate::types::Product;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

/// Read and parse a catalog file.
///
/// Products are returned in file order and individually validated;
/// duplicate ids are checked when the `Catalog` is built.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse a catalog document from a JSON string
pub fn parse_catalog(json: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    for product in &products {
        validate_product(product)?;
    }
    Ok(products)
}

/// Check the field ranges of a single product
pub fn validate_product(product: &Product) -> Result<()> {
    if product.id.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            field: "id".to_string(),
            value: product.id.clone(),
        });
    }
    if product.category.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            field: "category".to_string(),
            value: product.category.clone(),
        });
    }
    if product.price < Decimal::ZERO {
        return Err(CatalogError::InvalidValue {
            field: "price".to_string(),
            value: product.price.to_string(),
        });
    }
    if let Some(original) = product.original_price {
        if original < Decimal::ZERO {
            return Err(CatalogError::InvalidValue {
                field: "original_price".to_string(),
                value: original.to_string(),
            });
        }
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::InvalidValue {
            field: "rating".to_string(),
            value: product.rating.to_string(),
        });
    }
    Ok(())
}
