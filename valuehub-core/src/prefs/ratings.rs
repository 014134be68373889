//! Ratings aggregate
//!
//! Two persisted maps: the per-user rating map (`toolName -> 1..5`) and the
//! per-tool running aggregate (`toolName -> {average, count}`). Re-rating
//! replaces the user's previous contribution without double-counting.
//!
//! Tools with no recorded aggregate show a deterministic cosmetic seed so
//! the catalog is never a wall of zero ratings. The seed is derived from a
//! polynomial rolling hash over the tool name's UTF-8 bytes, so it is
//! stable across reloads, and it is entirely replaced by the first real
//! rating.

use crate::store::{keys, Store};
use crate::types::RatingStats;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Polynomial rolling hash (`h = h * 31 + byte`, wrapping i32) over the
/// tool name's UTF-8 bytes. The basis for cosmetic seed stats only.
pub fn name_hash(name: &str) -> i32 {
    let mut hash: i32 = 0;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as i32);
    }
    hash
}

/// Round to 1 decimal place, the precision of persisted averages.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Cosmetic placeholder stats for a tool nobody has rated yet:
/// average in 4.2..=5.0, count in 20..=218, both functions of the name.
fn seeded_stats(name: &str) -> RatingStats {
    let bucket = name_hash(name).unsigned_abs() % 100;
    let random = bucket as f64 / 100.0;
    RatingStats {
        average: round1(4.2 + random * 0.8),
        count: 20 + bucket * 2,
    }
}

/// Per-user ratings and per-tool aggregates.
pub struct Ratings {
    store: Arc<Store>,
    user_ratings: HashMap<String, u8>,
    tool_stats: HashMap<String, RatingStats>,
}

impl Ratings {
    /// Load both maps from storage.
    pub fn load(store: Arc<Store>) -> Self {
        let user_ratings = store.load(keys::USER_RATINGS, HashMap::new());
        let tool_stats = store.load(keys::TOOL_STATS, HashMap::new());
        Self {
            store,
            user_ratings,
            tool_stats,
        }
    }

    /// Record a rating of 1..=5 stars for `tool_name`.
    ///
    /// A first rating grows the aggregate count by one; a re-rating by the
    /// same user replaces their previous contribution in the running total
    /// and leaves the count unchanged. Both maps persist after every call.
    pub fn rate(&mut self, tool_name: &str, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(Error::Validation(format!(
                "rating must be between 1 and 5, got {}",
                rating
            )));
        }

        let previous = self.user_ratings.insert(tool_name.to_string(), rating);

        // Seeded values are cosmetic and never contribute: the real
        // aggregate starts from zero on the first recorded rating.
        let current = self
            .tool_stats
            .get(tool_name)
            .copied()
            .unwrap_or_default();

        let mut total = current.average * current.count as f64;
        let mut count = current.count;
        match previous {
            Some(old) => total += rating as f64 - old as f64,
            None => {
                total += rating as f64;
                count += 1;
            }
        }

        let average = if count > 0 {
            round1(total / count as f64)
        } else {
            0.0
        };
        self.tool_stats
            .insert(tool_name.to_string(), RatingStats { average, count });

        self.store.save(keys::USER_RATINGS, &self.user_ratings);
        self.store.save(keys::TOOL_STATS, &self.tool_stats);
        Ok(())
    }

    /// The aggregate for `tool_name`: the recorded one when present,
    /// otherwise the deterministic seed.
    pub fn stats(&self, tool_name: &str) -> RatingStats {
        self.tool_stats
            .get(tool_name)
            .copied()
            .unwrap_or_else(|| seeded_stats(tool_name))
    }

    /// This user's rating for `tool_name`, if they rated it.
    pub fn user_rating(&self, tool_name: &str) -> Option<u8> {
        self.user_ratings.get(tool_name).copied()
    }
}
