//! # Ranking Crate
//!
//! Product rankings for the storefront's recommendation section.
//!
//! ## Personalized recommendations
//! 1. Count categories over the cart and the resolvable view history, in
//!    first-seen order; the most frequent is the top category (the first
//!    counted wins a tie)
//! 2. Drop products in the cart, and viewed products that are neither in
//!    the top category nor rated 4.5 or higher
//! 3. Score `2 (top category) + 1 (featured) + 0.5 * rating`
//! 4. Stable sort by score, keep the first 4
//!
//! ## Trending
//! Products rated 4.0 or higher, stable sorted by `reviews * rating`, first 4.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use ranking::RecommendationEngine;
//! use session::Session;
//!
//! let catalog = Catalog::sample();
//! let mut session = Session::new();
//! session.add_to_cart(catalog.get_product("1").unwrap());
//!
//! let snapshot = session.snapshot();
//! let engine = RecommendationEngine::default();
//! let result = engine.recommend(&catalog, &snapshot.cart_entries, &snapshot.viewed_ids);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod scoring;
pub mod traits;
pub mod trending;

// Re-export main types
pub use config::RankingConfig;
pub use context::{CategoryFrequency, RankingContext, build_ranking_context};
pub use engine::{
    Explanation, RecommendationEngine, RecommendationResult, compute_recommendations,
    compute_trending,
};
pub use filter_pipeline::FilterPipeline;
pub use scoring::{RelevanceScorer, ScoredProduct};
pub use traits::Filter;
pub use trending::{TrendingRanker, trending_key};
