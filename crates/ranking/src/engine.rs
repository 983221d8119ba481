//! # Recommendation Engine
//!
//! Coordinates one ranking pass:
//! 1. Build the ranking context from cart and view history
//! 2. Filter the catalog down to candidates
//! 3. Score and sort the candidates, keep the best few
//! 4. Rank the trending list
//!
//! The engine holds no shopper state. Every call works only on its
//! arguments and returns freshly allocated results, so calling it twice
//! with the same inputs gives the same lists in the same order.

use std::time::Instant;

use catalog::{CartEntry, Catalog, Product};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::RankingConfig;
use crate::context::{RankingContext, build_ranking_context};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{BrowsingHistoryFilter, InCartFilter};
use crate::scoring::{RelevanceScorer, ScoredProduct};
use crate::trending::TrendingRanker;

/// Both lists shown in the recommendations section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub recommended: Vec<Product>,
    pub trending: Vec<Product>,
}

impl RecommendationResult {
    /// True when there is nothing to show at all
    pub fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.trending.is_empty()
    }
}

/// Scored recommendations plus the context they were ranked against
#[derive(Debug, Clone)]
pub struct Explanation<'a> {
    pub context: RankingContext,
    pub ranked: Vec<ScoredProduct<'a>>,
}

impl Explanation<'_> {
    /// The ranked products without their scores
    pub fn recommended(&self) -> Vec<Product> {
        self.ranked
            .iter()
            .map(|scored| scored.product.clone())
            .collect()
    }
}

pub struct RecommendationEngine {
    config: RankingConfig,
    filter_pipeline: FilterPipeline,
    scorer: RelevanceScorer,
    trending: TrendingRanker,
}

impl RecommendationEngine {
    /// Create an engine with the default filters:
    /// - InCartFilter
    /// - BrowsingHistoryFilter (threshold from `config`)
    pub fn new(config: RankingConfig) -> Self {
        let filter_pipeline = FilterPipeline::new()
            .add_filter(InCartFilter)
            .add_filter(BrowsingHistoryFilter::new(config.high_rating_threshold));
        let scorer = RelevanceScorer::new(&config);
        let trending = TrendingRanker::new(&config);

        Self {
            config,
            filter_pipeline,
            scorer,
            trending,
        }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Personalized recommendations, best first
    pub fn recommendations<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        cart_entries: &[CartEntry],
        viewed_ids: &[S],
    ) -> Vec<Product> {
        let explanation = self.explain(catalog, cart_entries, viewed_ids);
        explanation.recommended()
    }

    /// Like `recommendations`, but keeps the scores and the context
    pub fn explain<'a, S: AsRef<str>>(
        &self,
        catalog: &'a Catalog,
        cart_entries: &[CartEntry],
        viewed_ids: &[S],
    ) -> Explanation<'a> {
        let context = build_ranking_context(catalog, cart_entries, viewed_ids);
        let ranked = self.rank(catalog, &context);
        Explanation { context, ranked }
    }

    /// Filter and score the catalog against an existing context
    pub fn rank<'a>(
        &self,
        catalog: &'a Catalog,
        context: &RankingContext,
    ) -> Vec<ScoredProduct<'a>> {
        let candidates = self
            .filter_pipeline
            .apply(catalog.products().iter().collect(), context);
        debug!("{} candidates after filtering", candidates.len());

        self.scorer.rank(&candidates, context, self.config.limit)
    }

    /// Trending products, most popular first
    pub fn trending(&self, catalog: &Catalog) -> Vec<Product> {
        self.trending.rank(catalog).into_iter().cloned().collect()
    }

    /// Compute both lists for the current cart and history
    #[instrument(skip_all, fields(cart = cart_entries.len(), viewed = viewed_ids.len()))]
    pub fn recommend<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        cart_entries: &[CartEntry],
        viewed_ids: &[S],
    ) -> RecommendationResult {
        let start_time = Instant::now();

        let result = RecommendationResult {
            recommended: self.recommendations(catalog, cart_entries, viewed_ids),
            trending: self.trending(catalog),
        };

        info!(
            "Ranked {} recommended and {} trending products in {:.2?}",
            result.recommended.len(),
            result.trending.len(),
            start_time.elapsed()
        );
        result
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

/// Personalized recommendations with the default config (at most 4)
pub fn compute_recommendations<S: AsRef<str>>(
    catalog: &Catalog,
    cart_entries: &[CartEntry],
    viewed_ids: &[S],
) -> Vec<Product> {
    RecommendationEngine::default().recommendations(catalog, cart_entries, viewed_ids)
}

/// Trending products with the default config (at most 4)
pub fn compute_trending(catalog: &Catalog) -> Vec<Product> {
    RecommendationEngine::default().trending(catalog)
}
