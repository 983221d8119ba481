//! Building a `Catalog` from product lists and files.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Catalog, Product};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Build a catalog from products in listing order.
    ///
    /// Unlike `insert_product`, a repeated id is an error here: a catalog
    /// document listing the same product twice is malformed.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct {
                    id: product.id.clone(),
                });
            }
        }

        let mut catalog = Catalog {
            products,
            ..Catalog::default()
        };
        catalog.build_secondary_indices();
        catalog.validate()?;

        debug!(
            "Built catalog with {} products in {} categories",
            catalog.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);
        let products = parser::parse_catalog_file(path)?;
        let catalog = Self::from_products(products)?;
        info!("Loaded {} products", catalog.len());
        Ok(catalog)
    }

    /// Validate catalog integrity
    ///
    /// `insert_product` does not check field ranges, so a catalog built one
    /// product at a time is only known to be well formed after this.
    pub fn validate(&self) -> Result<()> {
        for product in &self.products {
            parser::validate_product(product)?;
        }
        Ok(())
    }

    /// The eight products the storefront ships with
    pub fn sample() -> Self {
        #[rustfmt::skip]
        let products = vec![
            sample_product("1", "Premium Wireless Headphones", 299, Some(399), "Audio", 4.8, 245, true, true),
            sample_product("2", "Smart Fitness Watch", 399, Some(499), "Wearables", 4.6, 189, false, true),
            sample_product("3", "Luxury Leather Backpack", 199, None, "Accessories", 4.9, 156, true, false),
            sample_product("4", "Ultra-thin Laptop", 1299, Some(1499), "Computers", 4.7, 89, false, true),
            sample_product("5", "RGB Gaming Keyboard", 149, None, "Gaming", 4.5, 203, false, false),
            sample_product("6", "Latest Smartphone", 899, Some(999), "Mobile", 4.8, 334, false, true),
            sample_product("7", "Modern Desk Lamp", 89, None, "Home", 4.4, 67, true, false),
            sample_product("8", "Wireless Gaming Mouse", 79, Some(99), "Gaming", 4.6, 128, false, false),
        ];

        let mut catalog = Catalog::new();
        for product in products {
            catalog.insert_product(product);
        }
        catalog
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_product(
    id: &str,
    name: &str,
    price: u32,
    original_price: Option<u32>,
    category: &str,
    rating: f64,
    reviews: u32,
    is_new: bool,
    is_featured: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
        original_price: original_price.map(Decimal::from),
        category: category.to_string(),
        rating,
        reviews,
        is_new,
        is_featured,
    }
}
