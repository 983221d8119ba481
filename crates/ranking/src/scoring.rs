//! Relevance scoring for recommendation candidates.
//!
//! ```text
//! score = category_boost  (if in the top category)
//!       + featured_boost  (if featured)
//!       + rating_weight * rating
//! ```
//!
//! With the default config that is `2 + 1 + 0.5 * rating` at most.

use crate::config::RankingConfig;
use crate::context::RankingContext;
use catalog::Product;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A candidate together with its relevance score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    category_boost: f64,
    featured_boost: f64,
    rating_weight: f64,
}

impl RelevanceScorer {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            category_boost: config.category_boost,
            featured_boost: config.featured_boost,
            rating_weight: config.rating_weight,
        }
    }

    /// Score a single product
    pub fn score(&self, product: &Product, context: &RankingContext) -> f64 {
        let category = if context.is_top_category(&product.category) {
            self.category_boost
        } else {
            0.0
        };
        let featured = if product.is_featured {
            self.featured_boost
        } else {
            0.0
        };
        category + featured + self.rating_weight * product.rating
    }

    /// Score candidates, keeping their order
    pub fn score_all<'a>(
        &self,
        candidates: &[&'a Product],
        context: &RankingContext,
    ) -> Vec<ScoredProduct<'a>> {
        candidates
            .par_iter()
            .map(|&product| ScoredProduct {
                product,
                score: self.score(product, context),
            })
            .collect()
    }

    /// Score, sort by score descending and keep the best `limit`.
    ///
    /// The sort is stable: equal scores keep the order of `candidates`.
    pub fn rank<'a>(
        &self,
        candidates: &[&'a Product],
        context: &RankingContext,
        limit: usize,
    ) -> Vec<ScoredProduct<'a>> {
        let mut scored = self.score_all(candidates, context);
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        scored
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(&RankingConfig::default())
    }
}
