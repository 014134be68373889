//! Session and identity service
//!
//! Maps an email to a [`User`] record in the persisted directory,
//! auto-provisioning one on first login. "Authentication" is an email-only
//! lookup; there are no credentials. The current session is a pointer to
//! one directory entry, persisted as that user's full record but
//! re-resolved against the directory by id at load so directory edits win.

use crate::error::{Error, Result};
use crate::store::{keys, Store};
use crate::types::{PlanTier, Role, SubscriptionStatus, User};
use chrono::Utc;
use std::sync::Arc;

fn seed_admin() -> User {
    User {
        id: "admin-1".to_string(),
        name: "Admin User".to_string(),
        email: "admin@valuehub.com".to_string(),
        role: Role::Admin,
        plan: PlanTier::Enterprise,
        joined_at: Utc::now(),
        subscription_status: SubscriptionStatus::Active,
    }
}

/// Identity service over the persisted user directory.
pub struct SessionService {
    store: Arc<Store>,
    users: Vec<User>,
    current: Option<User>,
}

impl SessionService {
    /// Load the directory and session pointer from storage.
    ///
    /// An empty directory gets the fixed seed admin so the admin view is
    /// reachable from first run.
    pub fn load(store: Arc<Store>) -> Self {
        let mut users: Vec<User> = store.load(keys::USERS, Vec::new());
        if users.is_empty() {
            users.push(seed_admin());
            store.save(keys::USERS, &users);
            tracing::info!("Seeded admin user into empty directory");
        }

        let current = store
            .load::<Option<User>>(keys::CURRENT_USER, None)
            .and_then(|stored| users.iter().find(|u| u.id == stored.id).cloned());

        Self {
            store,
            users,
            current,
        }
    }

    /// Resolve or auto-provision the user for `email` and make them the
    /// current session. Never rejects: an unseen email creates a Free/user
    /// account with a display name derived from the local-part.
    pub fn login(&mut self, email: &str) -> User {
        let email = email.trim();

        let user = match self.users.iter().find(|u| u.matches_email(email)) {
            Some(user) => user.clone(),
            None => {
                let user = User {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: email.split('@').next().unwrap_or(email).to_string(),
                    email: email.to_string(),
                    role: Role::User,
                    plan: PlanTier::Free,
                    joined_at: Utc::now(),
                    subscription_status: SubscriptionStatus::Active,
                };
                self.users.push(user.clone());
                self.store.save(keys::USERS, &self.users);
                tracing::info!(email, "Auto-provisioned user");
                user
            }
        };

        self.store.save(keys::CURRENT_USER, &user);
        self.current = Some(user.clone());
        user
    }

    /// Clear the session pointer. Preferences are profile-scoped and
    /// survive logout.
    pub fn logout(&mut self) {
        self.current = None;
        self.store.remove(keys::CURRENT_USER);
    }

    /// The currently logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Set `plan` on the user with `id`, reactivating their subscription.
    ///
    /// Fails with [`Error::UserNotFound`] and leaves the directory
    /// unchanged when the id is unknown.
    pub fn upgrade_plan(&mut self, id: &str, plan: PlanTier) -> Result<User> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))?;

        user.plan = plan;
        user.subscription_status = SubscriptionStatus::Active;
        let updated = user.clone();
        self.store.save(keys::USERS, &self.users);

        // Refresh the session pointer if it points at the updated user
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.store.save(keys::CURRENT_USER, &updated);
            self.current = Some(updated.clone());
        }

        Ok(updated)
    }

    /// The full user directory.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Remove the user with `id` from the directory, unconditionally.
    ///
    /// Guarding the sole admin is the caller's responsibility. If the
    /// deleted user is the current session, the pointer is cleared.
    pub fn delete_user(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
        self.store.save(keys::USERS, &self.users);

        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.logout();
        }
    }
}
