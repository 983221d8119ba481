//! # Session Crate
//!
//! In-memory shopping session state. Nothing here is persisted; a session
//! lives as long as the value that owns it.
//!
//! ## Components
//!
//! - **cart**: cart lines, quantities and the price breakdown
//! - **favorites**: toggled favorite products
//! - **history**: viewed-product history
//! - **store**: `Session` tying the three together and `SessionSnapshot`,
//!   the owned input handed to the ranking engine
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use session::Session;
//!
//! let catalog = Catalog::sample();
//! let mut session = Session::new();
//!
//! session.add_to_cart(catalog.get_product("1").unwrap());
//! let snapshot = session.snapshot();
//! ```

pub mod cart;
pub mod favorites;
pub mod history;
pub mod store;

// Re-export commonly used types
pub use cart::{Cart, CartEvent, CartTotals};
pub use favorites::{FavoriteEvent, Favorites};
pub use history::ViewHistory;
pub use store::{Session, SessionSnapshot};
