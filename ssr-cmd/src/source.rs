//! Where the resort list comes from.
//!
//! Rows from any source are loaded into the in-memory database. Remote rows
//! are already ordered by display name and are read back as they arrived;
//! bundled and CSV rows are sorted by name, ignoring case.

use crate::config::Config;
use anyhow::Context;
use log::{info, warn};
use ssr_db::Database;
use ssr_resort::api::RestClient;
use ssr_resort::Resort;
use ssr_view::query::ResortQuery;
use std::path::PathBuf;

pub enum ResortSource {
    /// The list compiled into the binary
    Bundled,
    /// A CSV file, e.g. a snapshot written by `fetch`
    Csv(PathBuf),
    /// The hosted resort table
    Remote(RestClient),
}

impl ResortSource {
    /// Remote when credentials are configured, then `--resorts-csv`, then the bundled list.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        if let Some((url, key)) = config.remote() {
            return Ok(ResortSource::Remote(RestClient::new(url, key, &config.table)?));
        }
        Ok(match &config.resorts_csv {
            Some(path) => ResortSource::Csv(path.clone()),
            None => ResortSource::Bundled,
        })
    }

    /// Fetch every resort, ordered by display name.
    pub async fn fetch(&self) -> anyhow::Result<Vec<Resort>> {
        let rows = match self {
            ResortSource::Bundled => Resort::get_resort_vector()?,
            ResortSource::Csv(path) => {
                let data = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Resort::parse_resort_csv(&data)?
            }
            ResortSource::Remote(client) => client.fetch_all_ordered_by_name().await?,
        };
        self.order(&rows)
    }

    fn order(&self, rows: &[Resort]) -> anyhow::Result<Vec<Resort>> {
        let db = Database::new()?;
        db.insert_resorts(rows)?;
        match self {
            ResortSource::Remote(_) => db.query_resorts(),
            ResortSource::Bundled | ResortSource::Csv(_) => db.query_resorts_by_name(),
        }
    }
}

/// Load the resort list, re-issuing the fetch up to `config.retries` times.
pub async fn load_resorts(config: &Config) -> anyhow::Result<Vec<Resort>> {
    let source = ResortSource::from_config(config)?;
    let mut query = ResortQuery::new();
    let mut attempt = 0;
    loop {
        match query.refetch(|| source.fetch()).await {
            Ok(resorts) => {
                info!("Using {} resorts", resorts.len());
                return Ok(resorts.to_vec());
            }
            Err(e) if attempt < config.retries => {
                attempt += 1;
                warn!("{:#}; retrying ({}/{})", e, attempt, config.retries);
            }
            Err(e) => return Err(e),
        }
    }
}
