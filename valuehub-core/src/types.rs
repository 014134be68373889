//! Core domain types for Value Hub
//!
//! These types represent the catalog entries, the simulated user directory,
//! and the records the preference aggregates persist.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Tool** | A catalog entry for a third-party software product/subscription offer |
//! | **User** | A record in the simulated user directory, keyed by id and email |
//! | **PriceAlert** | A target price a user wants to be notified about for one tool |
//! | **RatingStats** | The per-tool running average/count aggregate |
//!
//! Tools are identified by `name` throughout the system. Favorites, alerts,
//! history, and ratings all persist tool names rather than surrogate ids;
//! this is the existing data contract of the saved blobs, and the catalog
//! validates name uniqueness at load time to keep it sound.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Tool
// ============================================

/// A catalog entry. Constructed once at startup from the static data tables
/// and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique name within the catalog; the identity key for all aggregates
    pub name: String,
    /// One of the fixed category set (see [`crate::catalog::categories`])
    pub category: String,
    /// Short marketing description
    pub description: String,
    /// Logo/image reference; never fetched or validated by the core
    pub image_url: String,
    /// Subscription duration, e.g. "1 Year", "Lifetime"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Tags from the fixed vocabulary (see [`crate::catalog::TAGS`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// List price; `offer_price <= original_price` expected but not enforced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Current deal price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<f64>,
}

impl Tool {
    /// Check whether this tool carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

// ============================================
// Users
// ============================================

/// Role of a directory user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// Subscription plan tier
///
/// Serialized capitalized ("Free", "Pro", "Enterprise") to match the
/// persisted user directory blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanTier {
    Free,
    Pro,
    Enterprise,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Pro => "Pro",
            PlanTier::Enterprise => "Enterprise",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Free" | "free" => Ok(PlanTier::Free),
            "Pro" | "pro" => Ok(PlanTier::Pro),
            "Enterprise" | "enterprise" => Ok(PlanTier::Enterprise),
            _ => Err(format!("unknown plan tier: {}", s)),
        }
    }
}

/// Whether a user's subscription is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user in the simulated directory.
///
/// Created on first login with a given email; mutated by plan upgrades and
/// admin deletes. Serde renames keep the persisted field spellings stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Display name (derived from the email local-part on auto-provision)
    pub name: String,
    /// Unique email; matched case-insensitively on login
    pub email: String,
    pub role: Role,
    pub plan: PlanTier,
    /// When the account was created
    pub joined_at: DateTime<Utc>,
    pub subscription_status: SubscriptionStatus,
}

impl User {
    /// Check whether two emails refer to the same account.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

// ============================================
// Preference records
// ============================================

/// A price-drop alert: at most one per tool name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    /// Name of the watched tool
    pub tool_name: String,
    /// Notify once `offer_price <= target_price`
    pub target_price: f64,
}

/// Running rating aggregate for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingStats {
    /// Mean of exactly `count` contributing ratings, rounded to 1 decimal
    pub average: f64,
    /// Number of contributing ratings
    pub count: u32,
}

// ============================================
// Theme
// ============================================

/// UI theme preference, persisted alongside the aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("unknown theme: {}", s)),
        }
    }
}
