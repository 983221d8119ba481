//! Filter implementations for the recommendation candidates.
//!
//! The default engine chains them in this order:
//! 1. `InCartFilter` drops what the shopper is already buying
//! 2. `BrowsingHistoryFilter` drops viewed products that are neither in
//!    the top category nor highly rated

pub mod browsing_history;
pub mod in_cart;

// Re-export for convenience
pub use browsing_history::BrowsingHistoryFilter;
pub use in_cart::InCartFilter;
