//! Tunable weights and thresholds for the rankings.
//!
//! The defaults are the storefront's production values.

use serde::{Deserialize, Serialize};

/// Settings shared by the recommendation and trending rankings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Maximum number of products in each list
    pub limit: usize,

    /// Added to the score of products in the top category
    pub category_boost: f64,

    /// Added to the score of featured products
    pub featured_boost: f64,

    /// Multiplier applied to a product's rating
    pub rating_weight: f64,

    /// Viewed products at or above this rating stay recommendable
    pub high_rating_threshold: f64,

    /// Minimum rating for a product to trend
    pub trending_min_rating: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: 4,
            category_boost: 2.0,
            featured_boost: 1.0,
            rating_weight: 0.5,
            high_rating_threshold: 4.5,
            trending_min_rating: 4.0,
        }
    }
}

impl RankingConfig {
    /// Configure the list length (default: 4)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Configure the top-category boost (default: 2.0)
    pub fn with_category_boost(mut self, boost: f64) -> Self {
        self.category_boost = boost;
        self
    }

    /// Configure the featured boost (default: 1.0)
    pub fn with_featured_boost(mut self, boost: f64) -> Self {
        self.featured_boost = boost;
        self
    }

    /// Configure the rating multiplier (default: 0.5)
    pub fn with_rating_weight(mut self, weight: f64) -> Self {
        self.rating_weight = weight;
        self
    }

    /// Configure the rating that keeps viewed products recommendable (default: 4.5)
    pub fn with_high_rating_threshold(mut self, threshold: f64) -> Self {
        self.high_rating_threshold = threshold;
        self
    }

    /// Configure the minimum trending rating (default: 4.0)
    pub fn with_trending_min_rating(mut self, rating: f64) -> Self {
        self.trending_min_rating = rating;
        self
    }
}
