//! Favorites aggregate: an ordered set of tool names.

use crate::catalog::Catalog;
use crate::store::{keys, Store};
use crate::types::Tool;
use std::collections::HashSet;
use std::sync::Arc;

/// The favorite-tool set, persisted as a name list.
pub struct Favorites {
    store: Arc<Store>,
    names: Vec<String>,
}

impl Favorites {
    /// Load favorites, dropping names no longer in the catalog.
    pub fn load(store: Arc<Store>, catalog: &Catalog) -> Self {
        let mut names: Vec<String> = store.load(keys::FAVORITES, Vec::new());
        names.retain(|name| catalog.get(name).is_some());
        Self { store, names }
    }

    /// Toggle membership for `tool`: remove if present, append otherwise.
    /// The full name list is persisted after every call.
    pub fn toggle(&mut self, tool: &Tool) {
        if let Some(pos) = self.names.iter().position(|n| *n == tool.name) {
            self.names.remove(pos);
        } else {
            self.names.push(tool.name.clone());
        }
        self.store.save(keys::FAVORITES, &self.names);
    }

    /// Membership test by name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Favorite names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name set for the query engine's favorites-only constraint.
    pub fn name_set(&self) -> HashSet<String> {
        self.names.iter().cloned().collect()
    }

    /// Resolve favorites to live catalog records.
    pub fn tools<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Tool> {
        self.names
            .iter()
            .filter_map(|name| catalog.get(name))
            .collect()
    }
}
