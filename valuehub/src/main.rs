//! valuehub - software deals catalog CLI
//!
//! Thin presentation layer over `valuehub-core`: browse and filter the
//! catalog, manage favorites, price alerts, view history, ratings, and the
//! simulated user directory.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use valuehub_core::catalog::{self, query::FilterSpec};
use valuehub_core::{Config, PlanTier, Role, Theme, ValueHub};

use crate::output::{print_tool_detail, print_tool_row, print_user_row};

#[derive(Parser)]
#[command(name = "valuehub")]
#[command(about = "Browse and manage the Value Hub deals catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog tools, optionally filtered
    Tools {
        /// Case-insensitive search over name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category name
        #[arg(short, long)]
        category: Option<String>,

        /// Exact duration (e.g. "1 Year", "Lifetime")
        #[arg(short, long)]
        duration: Option<String>,

        /// Required tag (e.g. "Featured")
        #[arg(short, long)]
        tag: Option<String>,

        /// Only favorited tools
        #[arg(short, long)]
        favorites: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one tool in detail (records a view)
    Show { name: String },

    /// Toggle a tool in the favorite set
    Favorite { name: String },

    /// List favorited tools
    Favorites,

    /// Manage price-drop alerts
    Alert {
        #[command(subcommand)]
        command: AlertCommand,
    },

    /// Show recently viewed tools
    History {
        /// Clear the history instead
        #[arg(long)]
        clear: bool,
    },

    /// Rate a tool 1-5 stars (requires login)
    Rate { name: String, stars: u8 },

    /// Log in (auto-registers unseen emails)
    Login { email: String },

    /// Log out
    Logout,

    /// Show the current user
    Whoami,

    /// Admin: manage the user directory
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },

    /// Show or set the theme preference
    Theme {
        /// "dark" or "light"; omit to show the current theme
        theme: Option<String>,
    },
}

#[derive(Subcommand)]
enum AlertCommand {
    /// Set (or replace) the alert for a tool
    Set { name: String, target_price: f64 },
    /// Remove the alert for a tool
    Remove { name: String },
    /// List alerts and pending notifications
    List,
    /// Dismiss one pending notification by index
    Dismiss { index: usize },
}

#[derive(Subcommand)]
enum UsersCommand {
    /// List the directory
    List,
    /// Change a user's plan (Free, Pro, Enterprise)
    Upgrade { id: String, plan: String },
    /// Delete a user by id
    Delete { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard =
        valuehub_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let store_path = Config::store_path();
    tracing::info!(path = %store_path.display(), "Opening store");
    let mut hub = ValueHub::open(&store_path).context("failed to open store")?;

    match cli.command {
        Command::Tools {
            search,
            category,
            duration,
            tag,
            favorites,
            json,
        } => {
            let spec = FilterSpec {
                search_text: search.unwrap_or_default(),
                category: category.unwrap_or_else(|| catalog::ALL_CATEGORIES.to_string()),
                duration: duration.unwrap_or_else(|| catalog::ALL_DURATIONS.to_string()),
                tag: tag.unwrap_or_else(|| catalog::ALL_TAGS.to_string()),
                favorites_only: favorites,
            };
            let tools = hub.filter_tools(&spec);

            if json {
                println!("{}", serde_json::to_string_pretty(&tools)?);
                return Ok(());
            }

            if tools.is_empty() {
                println!("No tools found.");
                if spec.is_filtering() {
                    println!("Try resetting your filters.");
                }
                return Ok(());
            }

            let names: Vec<String> = tools.iter().map(|t| t.name.clone()).collect();
            for name in &names {
                let tool = hub.tool(name).expect("filtered tool is in catalog");
                print_tool_row(tool, &hub.tool_stats(name), hub.is_favorite(name));
            }
            println!(
                "\nShowing {} {}",
                names.len(),
                if names.len() == 1 { "tool" } else { "tools" }
            );
        }

        Command::Show { name } => {
            let tool = hub
                .tool(&name)
                .with_context(|| format!("no tool named '{}'", name))?
                .clone();
            hub.record_view(&name);
            print_tool_detail(&tool, &hub.tool_stats(&name), hub.price_alert(&name));
        }

        Command::Favorite { name } => {
            let tool = hub
                .tool(&name)
                .with_context(|| format!("no tool named '{}'", name))?
                .clone();
            hub.toggle_favorite(&tool);
            if hub.is_favorite(&name) {
                println!("Added '{}' to favorites.", name);
            } else {
                println!("Removed '{}' from favorites.", name);
            }
        }

        Command::Favorites => {
            let names: Vec<String> = hub
                .favorite_tools()
                .iter()
                .map(|t| t.name.clone())
                .collect();
            if names.is_empty() {
                println!("No favorites yet.");
                return Ok(());
            }
            for name in &names {
                let tool = hub.tool(name).expect("favorite resolves in catalog");
                print_tool_row(tool, &hub.tool_stats(name), true);
            }
        }

        Command::Alert { command } => match command {
            AlertCommand::Set { name, target_price } => {
                anyhow::ensure!(hub.tool(&name).is_some(), "no tool named '{}'", name);
                hub.set_price_alert(&name, target_price);
                println!("Alert set: '{}' at ${}", name, target_price);
                for msg in hub.notifications() {
                    println!("  {}", msg);
                }
            }
            AlertCommand::Remove { name } => {
                hub.remove_price_alert(&name);
                println!("Alert removed for '{}'.", name);
            }
            AlertCommand::List => {
                if hub.price_alerts().is_empty() {
                    println!("No alerts set.");
                }
                for alert in hub.price_alerts() {
                    println!("{:<36} notify at ${}", alert.tool_name, alert.target_price);
                }
                if !hub.notifications().is_empty() {
                    println!("\nNotifications:");
                    for (i, msg) in hub.notifications().iter().enumerate() {
                        println!("  [{}] {}", i, msg);
                    }
                }
            }
            AlertCommand::Dismiss { index } => {
                hub.dismiss_notification(index);
                println!("Dismissed.");
            }
        },

        Command::History { clear } => {
            if clear {
                hub.clear_history();
                println!("History cleared.");
                return Ok(());
            }
            let names: Vec<String> = hub.history().iter().map(|t| t.name.clone()).collect();
            if names.is_empty() {
                println!("No recently viewed tools.");
                return Ok(());
            }
            for name in &names {
                let tool = hub.tool(name).expect("history resolves in catalog");
                print_tool_row(tool, &hub.tool_stats(name), hub.is_favorite(name));
            }
        }

        Command::Rate { name, stars } => {
            // Rating is gated on login at the presentation layer; the core
            // does not enforce authorization.
            anyhow::ensure!(
                hub.current_user().is_some(),
                "log in before rating (valuehub login <email>)"
            );
            anyhow::ensure!(hub.tool(&name).is_some(), "no tool named '{}'", name);
            hub.rate_tool(&name, stars)?;
            let stats = hub.tool_stats(&name);
            println!(
                "Rated '{}' {}☆ — now {:.1}☆ ({} ratings)",
                name, stars, stats.average, stats.count
            );
        }

        Command::Login { email } => {
            let user = hub.login(&email);
            println!("Logged in as {} <{}> ({})", user.name, user.email, user.plan);
        }

        Command::Logout => {
            hub.logout();
            println!("Logged out.");
        }

        Command::Whoami => match hub.current_user() {
            Some(user) => println!(
                "{} <{}> — {} / {} / {}",
                user.name, user.email, user.role, user.plan, user.subscription_status
            ),
            None => println!("Not logged in."),
        },

        Command::Users { command } => match command {
            UsersCommand::List => {
                for user in hub.users() {
                    print_user_row(user);
                }
            }
            UsersCommand::Upgrade { id, plan } => {
                let plan: PlanTier = plan
                    .parse()
                    .map_err(|e: String| anyhow::anyhow!(e))
                    .context("invalid plan tier")?;
                let user = hub.upgrade_plan(&id, plan)?;
                println!("{} is now on {}.", user.email, user.plan);
            }
            UsersCommand::Delete { id } => {
                // Don't strand the directory without an admin; the core
                // deletes unconditionally by contract.
                let is_last_admin = hub
                    .users()
                    .iter()
                    .filter(|u| u.role == Role::Admin)
                    .all(|u| u.id == id)
                    && hub.users().iter().any(|u| u.id == id && u.role == Role::Admin);
                anyhow::ensure!(!is_last_admin, "refusing to delete the only admin");

                hub.delete_user(&id);
                println!("Deleted user {}.", id);
            }
        },

        Command::Theme { theme } => match theme {
            Some(value) => {
                let theme: Theme = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                hub.set_theme(theme);
                println!("Theme set to {}.", theme);
            }
            None => println!("{}", hub.theme()),
        },
    }

    Ok(())
}
