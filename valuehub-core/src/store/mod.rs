//! Persistence adapter for valuehub
//!
//! This module provides the storage layer: named JSON blobs in a single
//! SQLite key/value table. The blob under each key is the data contract;
//! SQLite is only the carrier (the local equivalent of browser storage).
//!
//! Reads never fail from the caller's perspective: a missing key or a
//! malformed blob falls back to the caller-supplied default. Writes are
//! best-effort; failures are logged and swallowed so a storage problem
//! never blocks the user action that triggered it.

pub mod keys;
pub mod kv;
pub mod schema;

pub use kv::Store;
