//! Catalog query engine
//!
//! Pure filtering over the catalog slice: all active constraints are
//! AND-combined, the result preserves catalog order, and an empty result
//! is a normal outcome, not an error.

use crate::catalog::{ALL_CATEGORIES, ALL_DURATIONS, ALL_TAGS};
use crate::types::Tool;
use std::collections::HashSet;

/// Filter constraints for a catalog query.
///
/// Every field has a "no constraint" sentinel; `Default` yields a spec that
/// matches the full catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Case-insensitive substring match against name OR description
    pub search_text: String,
    /// Exact category, or [`ALL_CATEGORIES`]
    pub category: String,
    /// Exact duration, or [`ALL_DURATIONS`]
    pub duration: String,
    /// Required tag, or [`ALL_TAGS`]
    pub tag: String,
    /// Restrict to the caller-supplied favorite set
    pub favorites_only: bool,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: ALL_CATEGORIES.to_string(),
            duration: ALL_DURATIONS.to_string(),
            tag: ALL_TAGS.to_string(),
            favorites_only: false,
        }
    }
}

impl FilterSpec {
    /// True iff any constraint differs from its sentinel.
    ///
    /// Drives whether a "reset filters" affordance is shown.
    pub fn is_filtering(&self) -> bool {
        !self.search_text.is_empty()
            || self.category != ALL_CATEGORIES
            || self.duration != ALL_DURATIONS
            || self.tag != ALL_TAGS
            || self.favorites_only
    }
}

/// Filter `tools` by `spec`, preserving their relative order.
///
/// `favorites` is only consulted when `spec.favorites_only` is set. Pure and
/// deterministic: the same inputs always yield the same subset.
pub fn filter_tools<'a>(
    tools: &'a [Tool],
    spec: &FilterSpec,
    favorites: &HashSet<String>,
) -> Vec<&'a Tool> {
    let search = spec.search_text.trim().to_lowercase();

    tools
        .iter()
        .filter(|tool| {
            let matches_search = search.is_empty()
                || tool.name.to_lowercase().contains(&search)
                || tool.description.to_lowercase().contains(&search);

            let matches_category =
                spec.category == ALL_CATEGORIES || tool.category == spec.category;

            let matches_duration = spec.duration == ALL_DURATIONS
                || tool.duration.as_deref() == Some(spec.duration.as_str());

            let matches_tag = spec.tag == ALL_TAGS || tool.has_tag(&spec.tag);

            let matches_favorites = !spec.favorites_only || favorites.contains(&tool.name);

            matches_search && matches_category && matches_duration && matches_tag && matches_favorites
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn no_favorites() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn test_default_spec_matches_everything() {
        let catalog = Catalog::load().unwrap();
        let spec = FilterSpec::default();
        assert!(!spec.is_filtering());

        let result = filter_tools(catalog.tools(), &spec, &no_favorites());
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let catalog = Catalog::load().unwrap();
        let spec = FilterSpec {
            search_text: "NOTION".to_string(),
            ..Default::default()
        };

        let result = filter_tools(catalog.tools(), &spec, &no_favorites());
        assert!(!result.is_empty());
        for tool in &result {
            assert!(
                tool.name.to_lowercase().contains("notion")
                    || tool.description.to_lowercase().contains("notion")
            );
        }
    }

    #[test]
    fn test_search_is_trimmed() {
        let catalog = Catalog::load().unwrap();
        let trimmed = FilterSpec {
            search_text: "notion".to_string(),
            ..Default::default()
        };
        let padded = FilterSpec {
            search_text: "  notion  ".to_string(),
            ..Default::default()
        };

        assert_eq!(
            filter_tools(catalog.tools(), &trimmed, &no_favorites()),
            filter_tools(catalog.tools(), &padded, &no_favorites())
        );
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let catalog = Catalog::load().unwrap();
        let spec = FilterSpec {
            category: "🧠 AI & Automation Tools".to_string(),
            tag: "New".to_string(),
            ..Default::default()
        };

        let result = filter_tools(catalog.tools(), &spec, &no_favorites());
        assert!(!result.is_empty());
        for tool in &result {
            assert_eq!(tool.category, "🧠 AI & Automation Tools");
            assert!(tool.has_tag("New"));
        }
    }

    #[test]
    fn test_duration_filter() {
        let catalog = Catalog::load().unwrap();
        let spec = FilterSpec {
            duration: "Lifetime".to_string(),
            ..Default::default()
        };

        let result = filter_tools(catalog.tools(), &spec, &no_favorites());
        assert!(!result.is_empty());
        for tool in &result {
            assert_eq!(tool.duration.as_deref(), Some("Lifetime"));
        }
    }

    #[test]
    fn test_favorites_only() {
        let catalog = Catalog::load().unwrap();
        let favorites: HashSet<String> = ["Notion (Plus)".to_string()].into_iter().collect();
        let spec = FilterSpec {
            favorites_only: true,
            ..Default::default()
        };

        let result = filter_tools(catalog.tools(), &spec, &favorites);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Notion (Plus)");
    }

    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = Catalog::load().unwrap();
        let spec = FilterSpec {
            duration: "1 Year".to_string(),
            ..Default::default()
        };

        let result = filter_tools(catalog.tools(), &spec, &no_favorites());
        let positions: Vec<_> = result
            .iter()
            .map(|t| catalog.tools().iter().position(|c| c.name == t.name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = Catalog::load().unwrap();
        let spec = FilterSpec {
            search_text: "zzz-no-such-tool".to_string(),
            ..Default::default()
        };

        let result = filter_tools(catalog.tools(), &spec, &no_favorites());
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::load().unwrap();
        let spec = FilterSpec {
            search_text: "ai".to_string(),
            duration: "1 Year".to_string(),
            ..Default::default()
        };

        let first = filter_tools(catalog.tools(), &spec, &no_favorites());
        let second = filter_tools(catalog.tools(), &spec, &no_favorites());
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_filtering_flags_each_constraint() {
        assert!(!FilterSpec::default().is_filtering());
        assert!(FilterSpec {
            search_text: "x".to_string(),
            ..Default::default()
        }
        .is_filtering());
        assert!(FilterSpec {
            category: "🎮 Streaming & Entertainment".to_string(),
            ..Default::default()
        }
        .is_filtering());
        assert!(FilterSpec {
            favorites_only: true,
            ..Default::default()
        }
        .is_filtering());
    }
}
