//! Composed application state
//!
//! `ValueHub` wires the catalog, the key/value store, the session service,
//! and the four preference aggregates into the one capability surface the
//! Presentation Layer consumes. Services are plain owned structs composed
//! here rather than ambient globals; each owns its own load lifecycle,
//! tied to construction.

use crate::catalog::query::{filter_tools, FilterSpec};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::prefs::{Favorites, History, PriceAlerts, Ratings};
use crate::session::SessionService;
use crate::store::{keys, Store};
use crate::types::{PlanTier, RatingStats, Theme, Tool, User};
use std::path::PathBuf;
use std::sync::Arc;

/// The application core behind the Presentation Layer.
pub struct ValueHub {
    catalog: Catalog,
    store: Arc<Store>,
    session: SessionService,
    favorites: Favorites,
    alerts: PriceAlerts,
    history: History,
    ratings: Ratings,
}

impl ValueHub {
    /// Open the store at `path` and load every service.
    pub fn open(path: &PathBuf) -> Result<Self> {
        Self::with_store(Arc::new(Store::open(path)?))
    }

    /// Fully in-memory instance (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Self::with_store(Arc::new(Store::open_in_memory()?))
    }

    fn with_store(store: Arc<Store>) -> Result<Self> {
        let catalog = Catalog::load()?;
        let session = SessionService::load(Arc::clone(&store));
        let favorites = Favorites::load(Arc::clone(&store), &catalog);
        let alerts = PriceAlerts::load(Arc::clone(&store), &catalog);
        let history = History::load(Arc::clone(&store), &catalog);
        let ratings = Ratings::load(Arc::clone(&store));

        Ok(Self {
            catalog,
            store,
            session,
            favorites,
            alerts,
            history,
            ratings,
        })
    }

    // ============================================
    // Catalog
    // ============================================

    /// The full ordered catalog; identical list every call.
    pub fn tools(&self) -> &[Tool] {
        self.catalog.tools()
    }

    /// Resolve a tool by exact name.
    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.catalog.get(name)
    }

    /// Apply `spec` to the catalog (see [`crate::catalog::query`]).
    pub fn filter_tools(&self, spec: &FilterSpec) -> Vec<&Tool> {
        filter_tools(self.catalog.tools(), spec, &self.favorites.name_set())
    }

    // ============================================
    // Session
    // ============================================

    pub fn login(&mut self, email: &str) -> User {
        self.session.login(email)
    }

    pub fn logout(&mut self) {
        self.session.logout()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn upgrade_plan(&mut self, id: &str, plan: PlanTier) -> Result<User> {
        self.session.upgrade_plan(id, plan)
    }

    pub fn users(&self) -> &[User] {
        self.session.users()
    }

    pub fn delete_user(&mut self, id: &str) {
        self.session.delete_user(id)
    }

    // ============================================
    // Favorites
    // ============================================

    pub fn toggle_favorite(&mut self, tool: &Tool) {
        self.favorites.toggle(tool)
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    pub fn favorite_tools(&self) -> Vec<&Tool> {
        self.favorites.tools(&self.catalog)
    }

    // ============================================
    // Price alerts
    // ============================================

    pub fn set_price_alert(&mut self, tool_name: &str, target_price: f64) {
        self.alerts.set(&self.catalog, tool_name, target_price)
    }

    pub fn remove_price_alert(&mut self, tool_name: &str) {
        self.alerts.remove(&self.catalog, tool_name)
    }

    pub fn price_alert(&self, tool_name: &str) -> Option<f64> {
        self.alerts.target(tool_name)
    }

    pub fn price_alerts(&self) -> &[crate::types::PriceAlert] {
        self.alerts.alerts()
    }

    pub fn notifications(&self) -> &[String] {
        self.alerts.notifications()
    }

    pub fn dismiss_notification(&mut self, index: usize) {
        self.alerts.dismiss(index)
    }

    // ============================================
    // History
    // ============================================

    pub fn record_view(&mut self, name: &str) {
        if let Some(tool) = self.catalog.get(name) {
            let tool = tool.clone();
            self.history.record(&tool);
        }
    }

    pub fn history(&self) -> Vec<&Tool> {
        self.history.tools(&self.catalog)
    }

    pub fn clear_history(&mut self) {
        self.history.clear()
    }

    // ============================================
    // Ratings
    // ============================================

    pub fn rate_tool(&mut self, tool_name: &str, rating: u8) -> Result<()> {
        self.ratings.rate(tool_name, rating)
    }

    pub fn tool_stats(&self, tool_name: &str) -> RatingStats {
        self.ratings.stats(tool_name)
    }

    pub fn user_rating(&self, tool_name: &str) -> Option<u8> {
        self.ratings.user_rating(tool_name)
    }

    // ============================================
    // Theme
    // ============================================

    pub fn theme(&self) -> Theme {
        self.store.load(keys::THEME, Theme::default())
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.save(keys::THEME, &theme);
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }
}
