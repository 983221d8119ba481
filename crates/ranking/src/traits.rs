//! Core traits for the candidate filtering stage.

use crate::context::RankingContext;
use catalog::Product;

/// A step that narrows the recommendation candidates.
///
/// ## Design Note
/// - `Send + Sync` so an engine can be shared between threads
/// - Filters take the candidate list by value and must keep the relative
///   order of what they retain; ranking ties are broken by that order
/// - Filtering never fails: every catalog and session is a valid input
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - Products still in the running, in catalog order
    /// * `context` - Cart ids, viewed ids and the top category
    fn apply<'a>(
        &self,
        candidates: Vec<&'a Product>,
        context: &RankingContext,
    ) -> Vec<&'a Product>;
}
