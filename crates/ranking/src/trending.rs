//! Trending ranking: popularity (review count) times quality (rating).
//!
//! Independent of the shopper; the same catalog always trends the same way.

use crate::config::RankingConfig;
use catalog::{Catalog, Product};
use std::cmp::Ordering;

/// Sort key of the trending list
pub fn trending_key(product: &Product) -> f64 {
    f64::from(product.reviews) * product.rating
}

#[derive(Debug, Clone)]
pub struct TrendingRanker {
    min_rating: f64,
    limit: usize,
}

impl TrendingRanker {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            min_rating: config.trending_min_rating,
            limit: config.limit,
        }
    }

    /// Products rated at least `min_rating`, by `reviews * rating` descending.
    ///
    /// Stable: equal keys keep catalog order.
    pub fn rank<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut trending: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|product| product.rating >= self.min_rating)
            .collect();

        trending.sort_by(|a, b| {
            trending_key(b)
                .partial_cmp(&trending_key(a))
                .unwrap_or(Ordering::Equal)
        });
        trending.truncate(self.limit);
        trending
    }
}

impl Default for TrendingRanker {
    fn default() -> Self {
        Self::new(&RankingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, rating: f64, reviews: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Decimal::from(10),
            original_price: None,
            category: "Misc".to_string(),
            rating,
            reviews,
            is_new: false,
            is_featured: false,
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_sample_trending() {
        let catalog = Catalog::sample();
        // 334*4.8, 245*4.8, 203*4.5, 189*4.6
        let trending = TrendingRanker::default().rank(&catalog);
        assert_eq!(ids(&trending), vec!["6", "1", "5", "2"]);
    }

    #[test]
    fn test_min_rating_filter() {
        let mut catalog = Catalog::new();
        catalog.insert_product(product("low", 3.9, 10_000));
        catalog.insert_product(product("edge", 4.0, 1));

        let trending = TrendingRanker::default().rank(&catalog);
        assert_eq!(ids(&trending), vec!["edge"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let mut catalog = Catalog::new();
        catalog.insert_product(product("a", 4.0, 50));
        catalog.insert_product(product("b", 5.0, 40));
        catalog.insert_product(product("c", 4.5, 100));

        // a and b both have key 200
        let trending = TrendingRanker::default().rank(&catalog);
        assert_eq!(ids(&trending), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(TrendingRanker::default().rank(&Catalog::new()).is_empty());
    }
}
