//! Filter to keep viewed products only when they are still relevant.
//!
//! Products the shopper has not looked at are always kept. A product they
//! have already viewed stays only if it belongs to the top category or is
//! highly rated.

use crate::context::RankingContext;
use crate::traits::Filter;
use catalog::Product;

pub struct BrowsingHistoryFilter {
    high_rating_threshold: f64,
}

impl BrowsingHistoryFilter {
    /// Create a new BrowsingHistoryFilter.
    ///
    /// # Arguments
    /// * `high_rating_threshold` - Viewed products rated at least this much
    ///   are kept (typically 4.5)
    pub fn new(high_rating_threshold: f64) -> Self {
        Self {
            high_rating_threshold,
        }
    }

    fn keeps(&self, product: &Product, context: &RankingContext) -> bool {
        !context.was_viewed(&product.id)
            || context.is_top_category(&product.category)
            || product.rating >= self.high_rating_threshold
    }
}

impl Filter for BrowsingHistoryFilter {
    fn name(&self) -> &str {
        "BrowsingHistoryFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Product>,
        context: &RankingContext,
    ) -> Vec<&'a Product> {
        candidates
            .into_iter()
            .filter(|product| self.keeps(product, context))
            .collect()
    }
}
