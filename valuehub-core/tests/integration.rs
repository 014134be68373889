//! Integration tests for the Value Hub core
//!
//! These exercise the composed `ValueHub` facade over an in-memory store,
//! plus cross-service flows the unit tests don't cover (reloads against
//! the same store, corrupt blobs, directory/session interplay).

use std::collections::HashSet;
use std::sync::Arc;
use valuehub_core::catalog::query::{filter_tools, FilterSpec};
use valuehub_core::store::keys;
use valuehub_core::{Error, PlanTier, Role, Store, ValueHub};

// ============================================
// Query engine properties
// ============================================

#[test]
fn test_filter_result_is_ordered_subset_of_catalog() {
    let hub = ValueHub::open_in_memory().unwrap();
    let specs = [
        FilterSpec::default(),
        FilterSpec {
            search_text: "ai".to_string(),
            ..Default::default()
        },
        FilterSpec {
            category: "☁️ Cloud, Storage & Security".to_string(),
            duration: "1 Year".to_string(),
            ..Default::default()
        },
        FilterSpec {
            tag: "Universal".to_string(),
            ..Default::default()
        },
    ];

    for spec in &specs {
        let result = hub.filter_tools(spec);
        let catalog_names: Vec<_> = hub.tools().iter().map(|t| &t.name).collect();

        let mut last_pos = 0;
        for tool in &result {
            let pos = catalog_names
                .iter()
                .position(|n| *n == &tool.name)
                .expect("result must be a subset of the catalog");
            assert!(pos >= last_pos, "catalog order must be preserved");
            last_pos = pos;
        }

        // Same spec twice yields identical results
        assert_eq!(hub.filter_tools(spec), result);
    }
}

#[test]
fn test_unconstrained_spec_returns_full_catalog() {
    let hub = ValueHub::open_in_memory().unwrap();
    let result = hub.filter_tools(&FilterSpec::default());
    assert_eq!(result.len(), hub.tools().len());
}

#[test]
fn test_search_notion_returns_exactly_matching_tools() {
    let hub = ValueHub::open_in_memory().unwrap();
    let spec = FilterSpec {
        search_text: "notion".to_string(),
        ..Default::default()
    };

    let result: HashSet<_> = hub
        .filter_tools(&spec)
        .iter()
        .map(|t| t.name.clone())
        .collect();
    let expected: HashSet<_> = hub
        .tools()
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains("notion")
                || t.description.to_lowercase().contains("notion")
        })
        .map(|t| t.name.clone())
        .collect();

    assert!(!expected.is_empty());
    assert_eq!(result, expected);
}

#[test]
fn test_filter_is_pure_over_borrowed_slices() {
    let hub = ValueHub::open_in_memory().unwrap();
    let favorites = HashSet::new();
    let spec = FilterSpec {
        duration: "Lifetime".to_string(),
        ..Default::default()
    };

    let before: Vec<_> = hub.tools().to_vec();
    let _ = filter_tools(hub.tools(), &spec, &favorites);
    assert_eq!(hub.tools(), before.as_slice());
}

// ============================================
// Favorites
// ============================================

#[test]
fn test_toggle_favorite_is_an_involution() {
    let mut hub = ValueHub::open_in_memory().unwrap();
    let tool = hub.tool("Canva (Pro)").unwrap().clone();

    let before: Vec<String> = hub
        .favorite_tools()
        .iter()
        .map(|t| t.name.clone())
        .collect();

    hub.toggle_favorite(&tool);
    hub.toggle_favorite(&tool);

    let after: Vec<String> = hub
        .favorite_tools()
        .iter()
        .map(|t| t.name.clone())
        .collect();
    assert_eq!(before, after);
}

// ============================================
// Ratings
// ============================================

#[test]
fn test_rating_sequence_tracks_latest_value() {
    let mut hub = ValueHub::open_in_memory().unwrap();
    hub.login("rater@example.com");

    hub.rate_tool("Notion (Plus)", 5).unwrap();
    let after_first = hub.tool_stats("Notion (Plus)");
    assert_eq!(after_first.count, 1);
    assert_eq!(after_first.average, 5.0);

    hub.rate_tool("Notion (Plus)", 5).unwrap();
    assert_eq!(hub.tool_stats("Notion (Plus)").count, 1);

    hub.rate_tool("Notion (Plus)", 3).unwrap();
    let final_stats = hub.tool_stats("Notion (Plus)");
    assert_eq!(final_stats.count, 1);
    assert_eq!(final_stats.average, 3.0);
}

// ============================================
// Price alerts
// ============================================

#[test]
fn test_alert_notification_threshold() {
    // PromptDrive.ai has offer_price 49
    let mut hub = ValueHub::open_in_memory().unwrap();

    hub.set_price_alert("PromptDrive.ai", 50.0);
    assert_eq!(hub.notifications().len(), 1);
    assert!(hub.notifications()[0].contains("PromptDrive.ai"));

    let mut hub = ValueHub::open_in_memory().unwrap();
    hub.set_price_alert("PromptDrive.ai", 40.0);
    assert!(hub.notifications().is_empty());
}

// ============================================
// History
// ============================================

#[test]
fn test_history_move_to_front_dedup() {
    let mut hub = ValueHub::open_in_memory().unwrap();

    hub.record_view("Airtable (Teams)");
    hub.record_view("Buffer (Essentials)");
    hub.record_view("Canva (Pro)");
    hub.record_view("Airtable (Teams)");

    let names: Vec<_> = hub.history().iter().map(|t| t.name.clone()).collect();
    assert_eq!(
        names,
        ["Airtable (Teams)", "Canva (Pro)", "Buffer (Essentials)"]
    );
}

#[test]
fn test_history_bounded_on_overflow() {
    let mut hub = ValueHub::open_in_memory().unwrap();
    let names: Vec<String> = hub.tools().iter().map(|t| t.name.clone()).collect();

    for name in names.iter().take(14) {
        hub.record_view(name);
    }
    assert_eq!(hub.history().len(), 10);
}

// ============================================
// Session and directory
// ============================================

#[test]
fn test_login_auto_creates_free_account() {
    let mut hub = ValueHub::open_in_memory().unwrap();
    let user = hub.login("newcomer@example.com");

    assert_eq!(user.plan, PlanTier::Free);
    assert_eq!(user.role, Role::User);
}

#[test]
fn test_admin_login_resolves_to_seed() {
    let mut hub = ValueHub::open_in_memory().unwrap();
    let user = hub.login("admin@valuehub.com");

    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.plan, PlanTier::Enterprise);
}

#[test]
fn test_upgrade_unknown_user_fails_without_side_effects() {
    let mut hub = ValueHub::open_in_memory().unwrap();
    let before = hub.users().to_vec();

    let result = hub.upgrade_plan("ghost-id", PlanTier::Enterprise);
    assert!(matches!(result, Err(Error::UserNotFound(_))));
    assert_eq!(hub.users(), before.as_slice());
}

#[test]
fn test_logout_keeps_profile_preferences() {
    let mut hub = ValueHub::open_in_memory().unwrap();
    hub.login("sam@example.com");

    let tool = hub.tool("Spotify (Premium)").unwrap().clone();
    hub.toggle_favorite(&tool);
    hub.set_price_alert("Spotify (Premium)", 70.0);
    hub.record_view("Spotify (Premium)");

    hub.logout();
    assert!(hub.current_user().is_none());
    assert!(hub.is_favorite("Spotify (Premium)"));
    assert_eq!(hub.price_alert("Spotify (Premium)"), Some(70.0));
    assert_eq!(hub.history().len(), 1);
}

// ============================================
// Persistence adapter degradation
// ============================================

#[test]
fn test_corrupt_blobs_degrade_to_defaults() {
    let store = Arc::new(Store::open_in_memory().unwrap());
    store.save_raw(keys::FAVORITES, "][ definitely not json");
    store.save_raw(keys::PRICE_ALERTS, "{\"half\": ");
    store.save_raw(keys::USER_RATINGS, "42");

    let names: Vec<String> = store.load(keys::FAVORITES, Vec::new());
    assert!(names.is_empty());

    let alerts: Vec<valuehub_core::PriceAlert> = store.load(keys::PRICE_ALERTS, Vec::new());
    assert!(alerts.is_empty());

    let ratings: std::collections::HashMap<String, u8> =
        store.load(keys::USER_RATINGS, Default::default());
    assert!(ratings.is_empty());
}

#[test]
fn test_preferences_survive_reload_of_same_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data.db");

    {
        let mut hub = ValueHub::open(&path).unwrap();
        hub.login("sam@example.com");
        let tool = hub.tool("Notion (Plus)").unwrap().clone();
        hub.toggle_favorite(&tool);
        hub.set_price_alert("Notion (Plus)", 50.0);
        hub.rate_tool("Notion (Plus)", 4).unwrap();
        hub.record_view("Notion (Plus)");
    }

    let hub = ValueHub::open(&path).unwrap();
    assert!(hub.is_favorite("Notion (Plus)"));
    assert_eq!(hub.price_alert("Notion (Plus)"), Some(50.0));
    assert_eq!(hub.tool_stats("Notion (Plus)").count, 1);
    assert_eq!(hub.history().len(), 1);
    assert_eq!(hub.current_user().unwrap().email, "sam@example.com");
    // Notifications were re-derived (offer 48 <= target 50)
    assert_eq!(hub.notifications().len(), 1);
}
