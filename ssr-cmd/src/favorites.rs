//! Favorites commands.
//!
//! Favorites persist in `favorites-storage.json` under the data directory.

use crate::config::Config;
use crate::render::render_json;
use crate::resorts::render_cards;
use crate::source::load_resorts;
use chrono::NaiveDate;
use clap::Subcommand;
use log::info;
use ssr_resort::ResortId;
use ssr_store::{FavoritesStore, FileStorage};
use ssr_view::state::FavoritesScreenState;
use std::fmt::Write;

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorite resorts with their snow stats
    List {
        /// Show the per-day table for these favorites
        #[arg(short, long)]
        expand: Vec<ResortId>,
    },

    /// Add a resort to the favorites
    Add {
        /// Resort id
        id: ResortId,
    },

    /// Remove a resort from the favorites
    Remove {
        /// Resort id
        id: ResortId,
    },

    /// Search resorts that are not favorites yet
    Search {
        /// Case-insensitive part of the resort name
        #[arg(default_value = "")]
        query: String,
    },
}

pub fn open_store(config: &Config) -> FavoritesStore<FileStorage> {
    let dir = config.data_dir();
    info!("Opening favorites in {}", dir.display());
    FavoritesStore::open(FileStorage::new(dir))
}

pub async fn run_favorites(
    config: &Config,
    action: FavoritesAction,
    today: NaiveDate,
) -> anyhow::Result<String> {
    let mut store = open_store(config);
    let mut screen = FavoritesScreenState::new();
    match action {
        FavoritesAction::List { expand } => {
            if screen.shows_empty_state(&store) && !config.json {
                return Ok("No favorites yet\nAdd resorts to your favorites to track them here\n"
                    .to_string());
            }
            let resorts = load_resorts(config).await?;
            for id in expand {
                screen.toggle_card(id);
            }
            let favorites = screen.favorite_resorts(&resorts, &store);
            render_cards(config, favorites, |id| screen.is_expanded(id), today)
        }
        FavoritesAction::Add { id } => {
            screen.open_add_modal();
            screen.pick(id, &mut store);
            Ok(format!("Added favorite {}\n", id))
        }
        FavoritesAction::Remove { id } => {
            screen.remove(id, &mut store);
            Ok(format!("Removed favorite {}\n", id))
        }
        FavoritesAction::Search { query } => {
            let resorts = load_resorts(config).await?;
            screen.open_add_modal();
            screen.set_search_query(&query);
            let results = screen.search_results(&resorts, &store);
            if config.json {
                let rows: Vec<_> = results.iter().map(|r| (r.id, r.name.as_str())).collect();
                return Ok(format!("{}\n", render_json(&rows)?));
            }
            let mut out = String::new();
            for resort in results {
                let _ = writeln!(out, "{:>4}  {}", resort.id, resort.name);
            }
            Ok(out)
        }
    }
}
