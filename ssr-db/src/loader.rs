//! Data loading functions for populating the in-memory SQLite database.
//!
//! Rows come either from CSV (the bundled fixture or a snapshot written by
//! `ssr-cli fetch`) or from already-parsed [`Resort`] values returned by the
//! remote client.
//!
//! # CSV Format
//!
//! Header row with the remote column names:
//! `id,created_at,Ski Resort,Snowfall 6 days ago,...,Mid Mountain Snow,Lifts Open,Runs Open`.
//! Empty cells are stored as NULL.

use crate::Database;
use rusqlite::params;
use ssr_resort::Resort;

impl Database {
    /// Load resort rows from a CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// id,created_at,Ski Resort,Snowfall 6 days ago,...,Runs Open
    /// 1,2025-01-14T15:02:11+00:00,Alta,0,2,5,0,3,7,4,6,1,0,0,2,96,6/6,116/119
    /// ```
    pub fn load_resorts_csv(&self, csv_data: &str) -> anyhow::Result<()> {
        let resorts = Resort::parse_resort_csv(csv_data)?;
        self.insert_resorts(&resorts)
    }

    /// Insert or replace resort rows, keyed by resort id.
    ///
    /// Each row is placed after every row already loaded, so a replaced row
    /// moves to the end. Names are stored as given.
    pub fn insert_resorts(&self, resorts: &[Resort]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for r in resorts {
            let past = r.past_snowfall();
            let forecast = r.forecast_snowfall();
            conn.execute(
                "INSERT OR REPLACE INTO resorts
                 (id, position, created_at, name,
                  past_6, past_5, past_4, past_3, past_2, past_1,
                  forecast_0, forecast_1, forecast_2, forecast_3, forecast_4, forecast_5,
                  mid_mountain_snow, lifts_open, runs_open)
                 VALUES (?1, (SELECT COALESCE(MAX(position), 0) + 1 FROM resorts),
                         ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
                params![
                    r.id,
                    r.created_at,
                    r.name,
                    past[0],
                    past[1],
                    past[2],
                    past[3],
                    past[4],
                    past[5],
                    forecast[0],
                    forecast[1],
                    forecast[2],
                    forecast[3],
                    forecast[4],
                    forecast[5],
                    r.mid_mountain_snow,
                    r.lifts_open,
                    r.runs_open,
                ],
            )?;
            count += 1;
        }
        log::info!("[SSR] loader: Loaded {} resorts", count);
        Ok(())
    }

    /// Remove every resort row, e.g. before loading a fresh fetch.
    pub fn clear_resorts(&self) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let removed = conn.execute("DELETE FROM resorts", [])?;
        log::info!("[SSR] loader: Cleared {} resorts", removed);
        Ok(())
    }
}
