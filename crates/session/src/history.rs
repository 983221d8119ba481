//! Viewed-product history.
//!
//! Each product id is recorded once, at the position of its first view.
//! Ids are not checked against the catalog; the ranking engine skips ids
//! that no longer resolve.

use catalog::ProductId;

#[derive(Debug, Clone, Default)]
pub struct ViewHistory {
    ids: Vec<ProductId>,
}

impl ViewHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view. Returns false if the product was already recorded.
    pub fn record(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|v| v == id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
