//! Price alerts aggregate
//!
//! Alerts persist as `{toolName, targetPrice}` pairs, at most one per tool.
//! Notifications are derived, not stored: after load and after every
//! set/remove, the current alerts are scanned against the catalog's live
//! offer prices, and qualifying messages are merged into the in-memory
//! list deduplicated by text. Dismissal only touches the in-memory list,
//! so a reload loses pending notifications but keeps the alerts.

use crate::catalog::Catalog;
use crate::store::{keys, Store};
use crate::types::{PriceAlert, Tool};
use std::sync::Arc;

/// Price-drop alerts and their derived notifications.
pub struct PriceAlerts {
    store: Arc<Store>,
    alerts: Vec<PriceAlert>,
    notifications: Vec<String>,
}

/// Render the notification line for a triggered alert.
fn notification_text(tool: &Tool, offer: f64, target: f64) -> String {
    format!(
        "Good news! {} is now available for ${} (Target: ${})",
        tool.name, offer, target
    )
}

impl PriceAlerts {
    /// Load alerts and derive the initial notification list.
    pub fn load(store: Arc<Store>, catalog: &Catalog) -> Self {
        let alerts: Vec<PriceAlert> = store.load(keys::PRICE_ALERTS, Vec::new());
        let mut aggregate = Self {
            store,
            alerts,
            notifications: Vec::new(),
        };
        aggregate.check(catalog);
        aggregate
    }

    /// Set an alert for `tool_name`, replacing any existing one.
    pub fn set(&mut self, catalog: &Catalog, tool_name: &str, target_price: f64) {
        self.alerts.retain(|a| a.tool_name != tool_name);
        self.alerts.push(PriceAlert {
            tool_name: tool_name.to_string(),
            target_price,
        });
        self.store.save(keys::PRICE_ALERTS, &self.alerts);
        self.check(catalog);
    }

    /// Remove the alert for `tool_name`, if any.
    pub fn remove(&mut self, catalog: &Catalog, tool_name: &str) {
        self.alerts.retain(|a| a.tool_name != tool_name);
        self.store.save(keys::PRICE_ALERTS, &self.alerts);
        self.check(catalog);
    }

    /// The target price for `tool_name`, if an alert exists.
    pub fn target(&self, tool_name: &str) -> Option<f64> {
        self.alerts
            .iter()
            .find(|a| a.tool_name == tool_name)
            .map(|a| a.target_price)
    }

    /// All current alerts.
    pub fn alerts(&self) -> &[PriceAlert] {
        &self.alerts
    }

    /// Pending notification messages, oldest first.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Dismiss the notification at `index` (in-memory only).
    pub fn dismiss(&mut self, index: usize) {
        if index < self.notifications.len() {
            self.notifications.remove(index);
        }
    }

    /// Scan all alerts against current offer prices and merge qualifying
    /// messages into the notification list, deduplicated by text.
    fn check(&mut self, catalog: &Catalog) {
        for alert in &self.alerts {
            let Some(tool) = catalog.get(&alert.tool_name) else {
                continue;
            };
            let Some(offer) = tool.offer_price else {
                continue;
            };
            if offer <= alert.target_price {
                let text = notification_text(tool, offer, alert.target_price);
                if !self.notifications.contains(&text) {
                    self.notifications.push(text);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PriceAlerts, Catalog) {
        let catalog = Catalog::load().unwrap();
        let store = Arc::new(Store::open_in_memory().unwrap());
        (PriceAlerts::load(Arc::clone(&store), &catalog), catalog)
    }

    #[test]
    fn test_alert_at_or_above_offer_notifies() {
        let (mut alerts, catalog) = setup();

        // PromptDrive.ai has offer_price 49
        alerts.set(&catalog, "PromptDrive.ai", 50.0);
        assert_eq!(alerts.notifications().len(), 1);
        assert!(alerts.notifications()[0].contains("PromptDrive.ai"));
        assert!(alerts.notifications()[0].contains("$49"));
        assert!(alerts.notifications()[0].contains("Target: $50"));
    }

    #[test]
    fn test_alert_below_offer_is_silent() {
        let (mut alerts, catalog) = setup();

        alerts.set(&catalog, "PromptDrive.ai", 40.0);
        assert!(alerts.notifications().is_empty());
        assert_eq!(alerts.target("PromptDrive.ai"), Some(40.0));
    }

    #[test]
    fn test_set_replaces_existing_alert() {
        let (mut alerts, catalog) = setup();

        alerts.set(&catalog, "PromptDrive.ai", 40.0);
        alerts.set(&catalog, "PromptDrive.ai", 60.0);

        assert_eq!(alerts.alerts().len(), 1);
        assert_eq!(alerts.target("PromptDrive.ai"), Some(60.0));
    }

    #[test]
    fn test_notifications_dedup_by_text() {
        let (mut alerts, catalog) = setup();

        alerts.set(&catalog, "PromptDrive.ai", 50.0);
        // Re-adding an unrelated alert re-scans everything; the first
        // message must not duplicate
        alerts.set(&catalog, "Notion (Plus)", 10.0);
        assert_eq!(alerts.notifications().len(), 1);
    }

    #[test]
    fn test_dismiss_is_in_memory_only() {
        let catalog = Catalog::load().unwrap();
        let store = Arc::new(Store::open_in_memory().unwrap());
        let mut alerts = PriceAlerts::load(Arc::clone(&store), &catalog);

        alerts.set(&catalog, "PromptDrive.ai", 50.0);
        alerts.dismiss(0);
        assert!(alerts.notifications().is_empty());
        // Underlying alert is untouched
        assert_eq!(alerts.target("PromptDrive.ai"), Some(50.0));

        // Reload re-derives the notification from the surviving alert
        let reloaded = PriceAlerts::load(store, &catalog);
        assert_eq!(reloaded.notifications().len(), 1);
    }

    #[test]
    fn test_dismiss_out_of_range_is_noop() {
        let (mut alerts, _catalog) = setup();
        alerts.dismiss(3);
        assert!(alerts.notifications().is_empty());
    }

    #[test]
    fn test_remove_deletes_alert() {
        let (mut alerts, catalog) = setup();
        alerts.set(&catalog, "PromptDrive.ai", 40.0);
        alerts.remove(&catalog, "PromptDrive.ai");

        assert!(alerts.alerts().is_empty());
        assert_eq!(alerts.target("PromptDrive.ai"), None);
    }

    #[test]
    fn test_alerts_survive_reload() {
        let catalog = Catalog::load().unwrap();
        let store = Arc::new(Store::open_in_memory().unwrap());

        {
            let mut alerts = PriceAlerts::load(Arc::clone(&store), &catalog);
            alerts.set(&catalog, "Spotify (Premium)", 30.0);
        }

        let alerts = PriceAlerts::load(store, &catalog);
        assert_eq!(alerts.target("Spotify (Premium)"), Some(30.0));
    }
}
