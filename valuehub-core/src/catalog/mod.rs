//! Catalog store and query engine
//!
//! The catalog is an immutable, ordered list of [`Tool`] records assembled
//! once at startup from the static tables in [`data`]. Tool names are the
//! identity key for every aggregate, so duplicates are rejected at load.

mod data;
pub mod query;

use crate::error::{Error, Result};
use crate::types::Tool;
use std::collections::HashSet;

/// Sentinel category meaning "no category constraint"
pub const ALL_CATEGORIES: &str = "All";

/// Sentinel duration meaning "no duration constraint"
pub const ALL_DURATIONS: &str = "All Durations";

/// Sentinel tag meaning "no tag constraint"
pub const ALL_TAGS: &str = "All Tags";

/// Duration filter choices, sentinel first.
pub const DURATIONS: &[&str] = &[
    ALL_DURATIONS,
    "1 Year",
    "6 Months",
    "3 Months",
    "2 Months",
    "1 Month",
    "Lifetime",
];

/// Tag filter choices, sentinel first.
pub const TAGS: &[&str] = &[ALL_TAGS, "Universal", "Fast Moving", "Featured", "New"];

/// Category names in display order.
pub fn categories() -> Vec<&'static str> {
    data::CATEGORY_DESCRIPTIONS.iter().map(|(c, _)| *c).collect()
}

/// One-line description of a category, if it exists.
pub fn category_description(category: &str) -> Option<&'static str> {
    data::CATEGORY_DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, d)| *d)
}

/// The immutable catalog of deals.
#[derive(Debug)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Assemble the catalog from the static data tables.
    ///
    /// Resolves image URLs, sorts by name, and validates that every name is
    /// unique (names are the persisted identity key for favorites, alerts,
    /// history, and ratings).
    pub fn load() -> Result<Self> {
        let mut tools: Vec<Tool> = data::RAW_TOOLS
            .iter()
            .map(|raw| Tool {
                name: raw.name.to_string(),
                category: raw.category.to_string(),
                description: raw.description.to_string(),
                image_url: raw
                    .image_override
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("https://logo.clearbit.com/{}", raw.domain)),
                duration: Some(raw.duration.to_string()),
                tags: if raw.tags.is_empty() {
                    None
                } else {
                    Some(raw.tags.iter().map(|t| t.to_string()).collect())
                },
                original_price: Some(raw.original_price),
                offer_price: Some(raw.offer_price),
            })
            .collect();

        tools.sort_by(|a, b| a.name.cmp(&b.name));

        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name.as_str()) {
                return Err(Error::DuplicateTool(tool.name.clone()));
            }
        }

        tracing::debug!(count = tools.len(), "Catalog assembled");
        Ok(Self { tools })
    }

    /// The full ordered catalog; identical list every call.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Resolve a tool by exact name.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads_and_is_sorted() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());

        let names: Vec<_> = catalog.tools().iter().map(|t| t.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = Catalog::load().unwrap();
        let mut seen = HashSet::new();
        for tool in catalog.tools() {
            assert!(seen.insert(&tool.name), "duplicate name: {}", tool.name);
        }
    }

    #[test]
    fn test_every_tool_has_known_category() {
        let catalog = Catalog::load().unwrap();
        let cats = categories();
        for tool in catalog.tools() {
            assert!(
                cats.contains(&tool.category.as_str()),
                "unknown category on {}: {}",
                tool.name,
                tool.category
            );
        }
    }

    #[test]
    fn test_tags_come_from_fixed_vocabulary() {
        let catalog = Catalog::load().unwrap();
        for tool in catalog.tools() {
            if let Some(tags) = &tool.tags {
                for tag in tags {
                    assert!(TAGS.contains(&tag.as_str()), "unknown tag: {}", tag);
                }
            }
        }
    }

    #[test]
    fn test_image_url_falls_back_to_domain_logo() {
        let catalog = Catalog::load().unwrap();
        let tool = catalog.get("Notion (Plus)").unwrap();
        assert_eq!(tool.image_url, "https://logo.clearbit.com/notion.so");

        // Overrides are respected
        let zoom = catalog.get("Zoom (Pro)").unwrap();
        assert!(zoom.image_url.contains("wikimedia"));
    }

    #[test]
    fn test_category_descriptions() {
        for cat in categories() {
            assert!(category_description(cat).is_some());
        }
        assert!(category_description("nope").is_none());
    }
}
