//! Favorite products ("wishlist").

use catalog::ProductId;

/// What `Favorites::toggle` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteEvent {
    Added,
    Removed,
}

/// Favorited product ids in the order they were favorited
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Favorite a product, or unfavorite it if it already is one
    pub fn toggle(&mut self, id: &str) -> FavoriteEvent {
        match self.ids.iter().position(|f| f == id) {
            Some(pos) => {
                self.ids.remove(pos);
                FavoriteEvent::Removed
            }
            None => {
                self.ids.push(id.to_string());
                FavoriteEvent::Added
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
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
