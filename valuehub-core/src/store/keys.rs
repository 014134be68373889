//! Storage key names
//!
//! These are stable and namespaced; they must not collide, and existing
//! saved data depends on them staying exactly as spelled.

/// User directory (list of User records)
pub const USERS: &str = "vh_users";

/// Current-session pointer (full User record of whoever is logged in)
pub const CURRENT_USER: &str = "vh_current_user";

/// Theme preference ("dark" or "light")
pub const THEME: &str = "theme";

/// Favorite tool names (ordered list)
pub const FAVORITES: &str = "favorite_tool_names";

/// Price alerts (list of {toolName, targetPrice})
pub const PRICE_ALERTS: &str = "price_alerts";

/// View history (tool names, most recent first)
pub const HISTORY: &str = "recently_viewed";

/// Per-user rating map (toolName -> 1..5)
pub const USER_RATINGS: &str = "user_ratings";

/// Per-tool rating aggregates (toolName -> {average, count})
pub const TOOL_STATS: &str = "tool_stats";
