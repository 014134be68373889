//! Terminal output helpers.

use chrono::{DateTime, Utc};
use valuehub_core::{RatingStats, Tool, User};

/// Format a timestamp as relative time (e.g., "2m ago").
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 0 {
        "just now".to_string()
    } else if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds())
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else {
        ts.format("%b %d, %Y").to_string()
    }
}

/// One-line price summary: "$49 (was $120)" with graceful gaps.
pub fn format_price(tool: &Tool) -> String {
    match (tool.offer_price, tool.original_price) {
        (Some(offer), Some(original)) => format!("${} (was ${})", offer, original),
        (Some(offer), None) => format!("${}", offer),
        _ => "—".to_string(),
    }
}

/// One catalog row for list views.
pub fn print_tool_row(tool: &Tool, stats: &RatingStats, favorite: bool) {
    let marker = if favorite { "★" } else { " " };
    let duration = tool.duration.as_deref().unwrap_or("—");
    println!(
        "{} {:<36} {:>20}  {:<10} {:.1}☆ ({})",
        marker,
        tool.name,
        format_price(tool),
        duration,
        stats.average,
        stats.count
    );
}

/// Full detail view for `show`.
pub fn print_tool_detail(tool: &Tool, stats: &RatingStats, alert_target: Option<f64>) {
    println!("{}", tool.name);
    println!("  {}", tool.description);
    println!("  Category:  {}", tool.category);
    if let Some(duration) = &tool.duration {
        println!("  Duration:  {}", duration);
    }
    if let Some(tags) = &tool.tags {
        println!("  Tags:      {}", tags.join(", "));
    }
    println!("  Price:     {}", format_price(tool));
    println!("  Rating:    {:.1}☆ ({} ratings)", stats.average, stats.count);
    if let Some(target) = alert_target {
        println!("  Alert:     notify at ${}", target);
    }
    println!("  Image:     {}", tool.image_url);
}

/// One directory row for the admin list.
pub fn print_user_row(user: &User) {
    println!(
        "{:<38} {:<26} {:<6} {:<10} {:<8} joined {}",
        user.id,
        user.email,
        user.role,
        user.plan,
        user.subscription_status,
        format_relative_time(user.joined_at)
    );
}
