//! # Catalog Crate
//!
//! Product data for the storefront: the domain types, the ordered in-memory
//! product store and the queries the product grid runs against it.
//!
//! ## Main Components
//!
//! - **types**: `Product`, `CartEntry`, `Catalog`
//! - **parser**: JSON catalog files and per-product validation
//! - **index**: building and validating a `Catalog`, the sample catalog
//! - **browse**: category filter, sort orders, name search
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, CategoryFilter, SortOrder};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/catalog.json"))?;
//!
//! let headphones = catalog.get_product("1").unwrap();
//! let gaming = catalog.browse(&CategoryFilter::parse("Gaming"), SortOrder::PriceLow);
//! ```
//!
//! Listing order is part of the contract: rankings built on top of a
//! `Catalog` use it to break ties.

// Public modules
pub mod browse;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use browse::{CategoryFilter, SortOrder};
pub use error::{CatalogError, Result};
pub use types::{CartEntry, Catalog, Product, ProductId};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Decimal::from(10),
            original_price: None,
            category: category.to_string(),
            rating: 4.0,
            reviews: 10,
            is_new: false,
            is_featured: false,
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.get_product("1").is_none());
        assert!(catalog.products_in_category("Audio").is_empty());
    }

    #[test]
    fn test_insert_product() {
        let mut catalog = Catalog::new();
        catalog.insert_product(product("a", "Desk Lamp", "Home"));
        catalog.insert_product(product("b", "Floor Lamp", "Home"));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("b"));
        assert_eq!(catalog.categories(), &["Home"]);
        assert_eq!(catalog.products_in_category("Home").len(), 2);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut catalog = Catalog::new();
        catalog.insert_product(product("a", "Desk Lamp", "Home"));
        catalog.insert_product(product("b", "Mouse", "Gaming"));
        catalog.insert_product(product("a", "Desk Lamp v2", "Office"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].name, "Desk Lamp v2");
        assert_eq!(catalog.categories(), &["Office", "Gaming"]);
        assert!(catalog.products_in_category("Home").is_empty());
    }

    #[test]
    fn test_search_ranks_exact_name_first() {
        let mut catalog = Catalog::new();
        catalog.insert_product(product("a", "Desk Lamp", "Home"));
        catalog.insert_product(product("b", "Lamp", "Home"));

        let results = catalog.search("LAMP");
        assert_eq!(results[0].id, "b");
        assert_eq!(results[1].id, "a");
    }

    #[test]
    fn test_discount_percent() {
        let catalog = Catalog::sample();
        // (399 - 299) / 399 = 25.06%
        assert_eq!(catalog.get_product("1").unwrap().discount_percent(), 25);
        // (99 - 79) / 99 = 20.2%
        assert_eq!(catalog.get_product("8").unwrap().discount_percent(), 20);
        assert_eq!(catalog.get_product("3").unwrap().discount_percent(), 0);

        let mut marked_up = product("x", "X", "Y");
        marked_up.original_price = Some(Decimal::from(5));
        assert_eq!(marked_up.discount_percent(), 0);
    }

    #[test]
    fn test_cart_entry_line_total() {
        let mut entry = CartEntry::new(product("a", "Desk Lamp", "Home"));
        entry.quantity = 3;
        assert_eq!(entry.id(), "a");
        assert_eq!(entry.category(), "Home");
        assert_eq!(entry.line_total(), Decimal::from(30));
    }
}
