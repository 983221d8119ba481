//! Core domain types for the storefront.
//!
//! - `ProductId` keeps product identifiers distinct from other strings
//! - `Product` and `CartEntry` are plain data, cloned freely
//! - `Catalog` owns the products in their listing order plus lookup indices

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a product ("1".."8" in the sample catalog)
pub type ProductId = String;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the storefront.
///
/// Prices use `Decimal` so cart totals never pick up binary rounding noise.
/// `rating` stays a float: the ranking formulas multiply it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Price before discount, only used to display a discount badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub category: String,
    /// Average rating from 0.0 to 5.0
    pub rating: f64,
    /// Number of reviews behind `rating`
    pub reviews: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    /// Discount badge value in whole percent.
    ///
    /// Returns 0 when there is no original price or it is not above the
    /// current price. Halves round away from zero.
    pub fn discount_percent(&self) -> u32 {
        let Some(original) = self.original_price else {
            return 0;
        };
        if original <= Decimal::ZERO || original <= self.price {
            return 0;
        }

        let percent = (original - self.price) / original * Decimal::ONE_HUNDRED;
        percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// One line in the shopping cart.
///
/// Holds its own copy of the product, so later catalog reloads do not
/// change what the shopper put in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    /// Always at least 1; a line with quantity 0 is removed instead
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn category(&self) -> &str {
        &self.product.category
    }

    /// Price of this line (`price * quantity`)
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

// =============================================================================
// Catalog - The In-Memory Product Store
// =============================================================================

/// Ordered product store with O(1) lookups.
///
/// Listing order matters: every ranking in the workspace breaks ties by the
/// position a product has here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) products: Vec<Product>,

    /// Position of each product in `products`
    pub(crate) id_index: HashMap<ProductId, usize>,

    /// Distinct categories in first-seen order
    pub(crate) categories: Vec<String>,
    /// Positions of the products in each category, ascending
    pub(crate) category_index: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a product by ID
    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.id_index.get(id).map(|&pos| &self.products[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// All products in listing order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, in the order they first appear in the listing
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Products of one category, in listing order
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.category_index
            .get(category)
            .map(|positions| positions.iter().map(|&pos| &self.products[pos]).collect())
            .unwrap_or_default()
    }

    /// Insert a product.
    ///
    /// A product with an id already present replaces the old one and keeps
    /// its listing position.
    pub fn insert_product(&mut self, product: Product) {
        if let Some(&pos) = self.id_index.get(&product.id) {
            self.products[pos] = product;
            self.build_secondary_indices();
            return;
        }

        let pos = self.products.len();
        self.id_index.insert(product.id.clone(), pos);
        self.index_category(&product.category, pos);
        self.products.push(product);
    }

    /// Rebuild the id and category indices from `products`
    pub fn build_secondary_indices(&mut self) {
        self.id_index.clear();
        self.categories.clear();
        self.category_index.clear();

        for pos in 0..self.products.len() {
            let id = self.products[pos].id.clone();
            let category = self.products[pos].category.clone();
            self.id_index.insert(id, pos);
            self.index_category(&category, pos);
        }
    }

    fn index_category(&mut self, category: &str, pos: usize) {
        match self.category_index.get_mut(category) {
            Some(positions) => positions.push(pos),
            None => {
                self.categories.push(category.to_string());
                self.category_index.insert(category.to_string(), vec![pos]);
            }
        }
    }
}
