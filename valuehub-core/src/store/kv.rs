//! Key/value store backing the persistence adapter
//!
//! `load` never fails: missing or corrupt blobs degrade to the supplied
//! fallback with a warning. `save`/`remove` are best-effort and swallow
//! errors for the same reason — a quota or disk problem must not block
//! the UI action that triggered the write.

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Mutex;

/// Store handle (single connection, serialized behind a mutex)
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open or create a store at the given path
    pub fn open(path: &PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    /// Run migrations on this store
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    /// Load the blob under `key`, or `fallback` if it is missing or corrupt.
    ///
    /// Storage and parse failures are logged and swallowed; the caller
    /// always gets a usable value.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = {
            let conn = self.conn.lock().unwrap();
            conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
        };

        let raw = match raw {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage read failed, using fallback");
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt blob, using fallback");
                fallback
            }
        }
    }

    /// Serialize `value` to JSON and store it under `key`.
    ///
    /// Failures are logged, never propagated.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to serialize value, skipping save");
                return;
            }
        };

        let conn = self.conn.lock().unwrap();
        let result = conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, json],
        );

        if let Err(e) = result {
            tracing::warn!(key, error = %e, "Storage write failed");
        }
    }

    /// Delete the blob under `key`, if any.
    pub fn remove(&self, key: &str) {
        let conn = self.conn.lock().unwrap();
        if let Err(e) = conn.execute("DELETE FROM kv_store WHERE key = ?1", [key]) {
            tracing::warn!(key, error = %e, "Storage delete failed");
        }
    }

    /// Store raw (possibly non-JSON) text under `key`. Test helper for
    /// simulating corrupt blobs.
    #[doc(hidden)]
    pub fn save_raw(&self, key: &str, raw: &str) {
        let conn = self.conn.lock().unwrap();
        let _ = conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, raw],
        );
    }
}
