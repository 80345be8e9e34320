//! Snapshot the hosted resort table to CSV.
//!
//! The snapshot uses the same layout as the bundled fixture, so it can be
//! passed back with `--resorts-csv` to work offline.

use crate::config::Config;
use crate::source::{load_resorts, ResortSource};
use anyhow::Context;
use log::info;
use ssr_resort::Resort;
use std::path::Path;

pub async fn run_fetch(config: &Config, out: &Path) -> anyhow::Result<String> {
    if !matches!(ResortSource::from_config(config)?, ResortSource::Remote(_)) {
        anyhow::bail!("fetch needs --supabase-url and --supabase-key (or SUPABASE_URL / SUPABASE_ANON_KEY)");
    }
    let resorts = load_resorts(config).await?;
    let csv = Resort::to_csv(&resorts)?;
    std::fs::write(out, csv).with_context(|| format!("failed to write {}", out.display()))?;
    info!("Snapshot of {} resorts written to {}", resorts.len(), out.display());
    Ok(format!("Wrote {} resorts to {}\n", resorts.len(), out.display()))
}
