//! Global options shared by every subcommand.
//!
//! Each option can also come from the environment, so a shell profile can
//! carry the remote credentials.

use clap::Args;
use ssr_resort::api::DEFAULT_TABLE;
use std::path::PathBuf;

const APP_DIR: &str = "ski-snow-report";

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Resort CSV to read instead of the bundled list
    #[arg(long, global = true, env = "SSR_RESORTS_CSV")]
    pub resorts_csv: Option<PathBuf>,

    /// Directory holding persisted favorites
    #[arg(long, global = true, env = "SSR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the hosted resort database
    #[arg(long, global = true, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// Anonymous API key for the hosted resort database
    #[arg(long, global = true, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,

    /// Remote table holding the resorts
    #[arg(long, global = true, env = "SSR_TABLE", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Extra fetch attempts after a failed load
    #[arg(long, global = true, default_value_t = 0)]
    pub retries: u32,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

impl Config {
    /// Favorites directory: `--data-dir`, else the platform data dir, else `./.ski-snow-report`.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR))),
        }
    }

    /// Remote credentials, when both the URL and the key are configured.
    pub fn remote(&self) -> Option<(&str, &str)> {
        match (&self.supabase_url, &self.supabase_key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                Some((url.as_str(), key.as_str()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_config(data_dir: &std::path::Path) -> Config {
    Config {
        resorts_csv: None,
        data_dir: Some(data_dir.to_path_buf()),
        supabase_url: None,
        supabase_key: None,
        table: DEFAULT_TABLE.to_string(),
        retries: 0,
        json: false,
    }
}
