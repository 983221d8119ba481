//! The FilterPipeline runs candidate filters in sequence.

use crate::context::RankingContext;
use crate::traits::Filter;
use catalog::Product;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(InCartFilter)
///     .add_filter(BrowsingHistoryFilter::new(4.5));
///
/// let candidates = pipeline.apply(catalog.products().iter().collect(), &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each filter preserves the order of what it keeps, so the output is a
    /// subsequence of the input.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a Product>,
        context: &RankingContext,
    ) -> Vec<&'a Product> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, context);
            debug!(
                "Filter applied: {} ({} -> {} candidates)",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{BrowsingHistoryFilter, InCartFilter};
    use catalog::Catalog;

    #[test]
    fn test_empty_pipeline() {
        let catalog = Catalog::sample();
        let pipeline = FilterPipeline::new();

        let candidates: Vec<&Product> = catalog.products().iter().collect();
        let filtered = pipeline.apply(candidates, &RankingContext::default());
        assert_eq!(filtered.len(), 8);
    }

    #[test]
    fn test_chained_filters() {
        let catalog = Catalog::sample();
        let mut context = RankingContext::default();
        context.cart_ids.insert("1".to_string());
        context.viewed_ids.insert("1".to_string());
        context.viewed_ids.insert("7".to_string());
        context.top_category = Some("Audio".to_string());

        let pipeline = FilterPipeline::new()
            .add_filter(InCartFilter)
            .add_filter(BrowsingHistoryFilter::new(4.5));
        assert_eq!(
            pipeline.filter_names(),
            vec!["InCartFilter", "BrowsingHistoryFilter"]
        );

        let candidates: Vec<&Product> = catalog.products().iter().collect();
        let filtered = pipeline.apply(candidates, &context);

        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4", "5", "6", "8"]);
    }
}
