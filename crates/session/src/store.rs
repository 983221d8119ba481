//! The shopper's session: cart, favorites and view history together.

use crate::cart::{Cart, CartEvent};
use crate::favorites::{FavoriteEvent, Favorites};
use crate::history::ViewHistory;
use catalog::{CartEntry, Product, ProductId};

/// Owned copy of the inputs the ranking engine needs.
///
/// Taken after a mutation commits, so recommendations always reflect the
/// latest cart and history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub cart_entries: Vec<CartEntry>,
    pub viewed_ids: Vec<ProductId>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub cart: Cart,
    pub favorites: Favorites,
    pub history: ViewHistory,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart and record it as viewed
    pub fn add_to_cart(&mut self, product: &Product) -> CartEvent {
        let event = self.cart.add_product(product);
        self.history.record(&product.id);
        event
    }

    pub fn view(&mut self, id: &str) -> bool {
        self.history.record(id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> FavoriteEvent {
        self.favorites.toggle(id)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cart_entries: self.cart.entries().to_vec(),
            viewed_ids: self.history.ids().to_vec(),
        }
    }
}
