//! Shopping cart store.
//!
//! Cart lines keep the order products were first added. Mutations return a
//! `CartEvent` describing what happened so the caller can notify the shopper.

use catalog::{CartEntry, Product, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Orders above this subtotal ship for free
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// What a cart mutation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Added {
        id: ProductId,
        name: String,
    },
    QuantityIncreased {
        id: ProductId,
        name: String,
        quantity: u32,
    },
    QuantityChanged {
        id: ProductId,
        quantity: u32,
    },
    Removed {
        id: ProductId,
        name: String,
    },
}

/// Price breakdown of the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    fn from_subtotal(subtotal: Decimal) -> Self {
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            Decimal::TEN
        };
        // 8% sales tax
        let tax = subtotal * Decimal::new(8, 2);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart gets its quantity bumped instead of a
    /// second line.
    pub fn add_product(&mut self, product: &Product) -> CartEvent {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product.id) {
            entry.quantity += 1;
            debug!("Increased quantity of {} to {}", product.id, entry.quantity);
            return CartEvent::QuantityIncreased {
                id: product.id.clone(),
                name: product.name.clone(),
                quantity: entry.quantity,
            };
        }

        self.entries.push(CartEntry::new(product.clone()));
        debug!("Added {} to cart", product.id);
        CartEvent::Added {
            id: product.id.clone(),
            name: product.name.clone(),
        }
    }

    /// Set the quantity of a line. Quantity 0 removes it.
    ///
    /// Returns `None` when the product is not in the cart.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Option<CartEvent> {
        if quantity == 0 {
            return self.remove(id);
        }

        let entry = self.entries.iter_mut().find(|e| e.product.id == id)?;
        entry.quantity = quantity;
        Some(CartEvent::QuantityChanged {
            id: entry.product.id.clone(),
            quantity,
        })
    }

    /// Remove a line regardless of its quantity
    pub fn remove(&mut self, id: &str) -> Option<CartEvent> {
        let pos = self.entries.iter().position(|e| e.product.id == id)?;
        let entry = self.entries.remove(pos);
        debug!("Removed {} from cart", entry.product.id);
        Some(CartEvent::Removed {
            id: entry.product.id,
            name: entry.product.name,
        })
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.product.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of units across all lines (the header badge count)
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal = self.entries.iter().map(CartEntry::line_total).sum();
        CartTotals::from_subtotal(subtotal)
    }
}
