//! # valuehub-core
//!
//! Core library for Value Hub - a software-deals catalog.
//!
//! This library provides:
//! - The immutable catalog of Tool records and its query engine
//! - A key/value persistence adapter for named JSON blobs
//! - The session/identity service over the simulated user directory
//! - The four user-preference aggregates (favorites, price alerts,
//!   view history, ratings)
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! The catalog is static and flows one way:
//! catalog store → query engine (driven by live filter state) → consumer.
//! The preference aggregates are loaded from storage at startup, mutated
//! by consumer actions, and written back on every mutation. Storage reads
//! never fail (they degrade to empty defaults) and writes are best-effort.
//!
//! ## Example
//!
//! ```rust,no_run
//! use valuehub_core::{Config, ValueHub};
//! use valuehub_core::catalog::query::FilterSpec;
//!
//! let mut hub = ValueHub::open(&Config::store_path()).expect("failed to open store");
//!
//! let spec = FilterSpec {
//!     search_text: "notion".to_string(),
//!     ..Default::default()
//! };
//! for tool in hub.filter_tools(&spec) {
//!     println!("{}", tool.name);
//! }
//! ```

// Re-export commonly used items at the crate root
pub use catalog::query::FilterSpec;
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use hub::ValueHub;
pub use store::Store;
pub use types::*;

// Public modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod hub;
pub mod logging;
pub mod prefs;
pub mod session;
pub mod store;
pub mod types;
