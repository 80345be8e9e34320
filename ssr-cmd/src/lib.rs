//! Command implementations for SSR CLI.
//!
//! Provides subcommands for browsing resort snow reports, managing
//! favorites, and snapshotting the hosted resort table to CSV.

use chrono::Local;
use clap::Subcommand;
use ssr_resort::ResortId;
use std::path::PathBuf;

pub mod config;
pub mod favorites;
pub mod fetch;
pub mod render;
pub mod resorts;
pub mod source;

pub use favorites::FavoritesAction;

#[derive(Subcommand)]
pub enum Command {
    /// List resorts, optionally filtered by name
    Resorts {
        /// Case-insensitive part of the resort name
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show one resort with its per-day snowfall
    Show {
        /// Resort id
        id: ResortId,
    },

    /// Manage favorite resorts
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Snapshot the hosted resort table to CSV
    Fetch {
        /// Output path for the resorts CSV
        #[arg(short = 'o', long)]
        out: PathBuf,
    },
}

pub async fn run(config: &config::Config, command: Command) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let output = match command {
        Command::Resorts { search } => resorts::run_resorts(config, &search, today).await?,
        Command::Show { id } => resorts::run_show(config, id, today).await?,
        Command::Favorites { action } => favorites::run_favorites(config, action, today).await?,
        Command::Fetch { out } => fetch::run_fetch(config, &out).await?,
    };
    print!("{}", output);
    Ok(())
}
