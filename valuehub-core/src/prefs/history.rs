//! View history aggregate: a bounded recency list of tool names.

use crate::catalog::Catalog;
use crate::store::{keys, Store};
use crate::types::Tool;
use std::sync::Arc;

/// Most-recent-first history, bounded to the last 10 distinct tools.
pub const HISTORY_LIMIT: usize = 10;

/// Recently-viewed tools, persisted as a name list.
pub struct History {
    store: Arc<Store>,
    names: Vec<String>,
}

impl History {
    /// Load history, dropping names no longer in the catalog.
    pub fn load(store: Arc<Store>, catalog: &Catalog) -> Self {
        let mut names: Vec<String> = store.load(keys::HISTORY, Vec::new());
        names.retain(|name| catalog.get(name).is_some());
        names.truncate(HISTORY_LIMIT);
        Self { store, names }
    }

    /// Record a view: move `tool` to the front, dropping any older
    /// occurrence, and truncate to the limit.
    pub fn record(&mut self, tool: &Tool) {
        self.names.retain(|n| *n != tool.name);
        self.names.insert(0, tool.name.clone());
        self.names.truncate(HISTORY_LIMIT);
        self.store.save(keys::HISTORY, &self.names);
    }

    /// Empty the list and drop the persisted key.
    pub fn clear(&mut self) {
        self.names.clear();
        self.store.remove(keys::HISTORY);
    }

    /// Viewed names, most recent first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resolve history to live catalog records, most recent first.
    pub fn tools<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Tool> {
        self.names
            .iter()
            .filter_map(|name| catalog.get(name))
            .collect()
    }
}
