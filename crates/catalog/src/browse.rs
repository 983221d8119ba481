//! Product grid queries: category filter, sort order and name search.

use crate::types::{Catalog, Product};
use std::str::FromStr;

/// Which part of the catalog the grid shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// "all" (any case) selects everything, anything else is a category name
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(s.to_string())
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => &product.category == category,
        }
    }
}

/// Grid sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Featured products first, listing order otherwise
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    /// Unknown keys fall back to `Featured`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price-low" => SortOrder::PriceLow,
            "price-high" => SortOrder::PriceHigh,
            "rating" => SortOrder::Rating,
            _ => SortOrder::Featured,
        })
    }
}

impl Catalog {
    /// Filter and sort the catalog for display.
    ///
    /// All sorts are stable, so equal keys keep listing order.
    pub fn browse(&self, filter: &CategoryFilter, sort: SortOrder) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .collect();

        match sort {
            SortOrder::Featured => products.sort_by_key(|p| !p.is_featured),
            SortOrder::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
        products
    }

    /// Case-insensitive search by product name.
    ///
    /// Exact name matches come first, then substring matches, each group in
    /// listing order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(u8, &Product)> = self
            .products
            .iter()
            .filter_map(|product| {
                let name = product.name.to_lowercase();
                if name == query {
                    Some((0, product))
                } else if name.contains(&query) {
                    Some((1, product))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by_key(|(relevance, _)| *relevance);
        matches.into_iter().map(|(_, product)| product).collect()
    }
}
