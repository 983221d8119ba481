//! Shopper context for ranking, built from the cart and view history.
//!
//! The context answers three questions for the filters and the scorer:
//! is a product in the cart, has it been viewed, and which category is the
//! shopper most interested in.

use catalog::{CartEntry, Catalog, ProductId};
use std::collections::HashSet;
use tracing::debug;

/// Category counts in first-seen order.
///
/// An ordered list instead of a map: ties for the highest count go to the
/// category that was counted first, and that has to be reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFrequency {
    counts: Vec<(String, u32)>,
}

impl CategoryFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a category
    pub fn record(&mut self, category: &str) {
        match self.counts.iter_mut().find(|(c, _)| c == category) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((category.to_string(), 1)),
        }
    }

    pub fn count(&self, category: &str) -> u32 {
        self.counts
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Most frequent category; the earliest recorded wins a tie.
    ///
    /// `None` when nothing has been recorded.
    pub fn top(&self) -> Option<&str> {
        let mut best: Option<&(String, u32)> = None;
        for entry in &self.counts {
            match best {
                Some((_, best_count)) if entry.1 <= *best_count => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(category, _)| category.as_str())
    }

    /// `(category, count)` pairs in first-seen order
    pub fn entries(&self) -> &[(String, u32)] {
        &self.counts
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Everything the ranking needs to know about the shopper
#[derive(Debug, Clone, Default)]
pub struct RankingContext {
    /// Ids of products in the cart
    pub cart_ids: HashSet<ProductId>,

    /// Ids from the view history, resolvable or not
    pub viewed_ids: HashSet<ProductId>,

    pub category_frequency: CategoryFrequency,

    /// The category the shopper cares most about, if there is any signal
    pub top_category: Option<String>,
}

impl RankingContext {
    pub fn in_cart(&self, id: &str) -> bool {
        self.cart_ids.contains(id)
    }

    pub fn was_viewed(&self, id: &str) -> bool {
        self.viewed_ids.contains(id)
    }

    pub fn is_top_category(&self, category: &str) -> bool {
        self.top_category.as_deref() == Some(category)
    }
}

/// Build a RankingContext from the cart and view history
///
/// Category counting:
/// - every cart line counts its category once, whatever its quantity
/// - every viewed id counts its product's category once; ids missing from
///   the catalog are skipped
/// - cart lines are counted before viewed ids, each in the given order
pub fn build_ranking_context<S: AsRef<str>>(
    catalog: &Catalog,
    cart_entries: &[CartEntry],
    viewed_ids: &[S],
) -> RankingContext {
    let mut context = RankingContext::default();

    for entry in cart_entries {
        context.cart_ids.insert(entry.id().to_string());
        context.category_frequency.record(entry.category());
    }

    let mut skipped = 0;
    for id in viewed_ids {
        let id = id.as_ref();
        context.viewed_ids.insert(id.to_string());
        match catalog.get_product(id) {
            Some(product) => context.category_frequency.record(&product.category),
            None => skipped += 1,
        }
    }

    context.top_category = context.category_frequency.top().map(str::to_string);

    debug!(
        "Built ranking context: cart={}, viewed={}, skipped={}, top_category={:?}",
        context.cart_ids.len(),
        context.viewed_ids.len(),
        skipped,
        context.top_category
    );
    context
}
