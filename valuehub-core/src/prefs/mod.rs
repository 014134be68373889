//! User preference aggregates
//!
//! Four independent aggregates built on the persistence adapter: favorites,
//! price alerts, view history, and ratings. Each loads at startup (falling
//! back to empty on missing/corrupt blobs), mutates in memory, and persists
//! on every mutation. Tool identity is the catalog name; persisted names
//! are re-resolved against the live catalog on load and unknown names are
//! dropped.

pub mod alerts;
pub mod favorites;
pub mod history;
pub mod ratings;

pub use alerts::PriceAlerts;
pub use favorites::Favorites;
pub use history::History;
pub use ratings::Ratings;
