//! SQL schema definitions for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// `resorts` mirrors the remote table: one row per resort, every
/// measurement nullable. Snowfall columns are named by day offset
/// (`past_6` is six days ago, `forecast_0` is today). `position` records
/// load order so rows can be read back exactly as sourced.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS resorts (
        id INTEGER PRIMARY KEY,
        position INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        name TEXT NOT NULL,
        past_6 REAL,
        past_5 REAL,
        past_4 REAL,
        past_3 REAL,
        past_2 REAL,
        past_1 REAL,
        forecast_0 REAL,
        forecast_1 REAL,
        forecast_2 REAL,
        forecast_3 REAL,
        forecast_4 REAL,
        forecast_5 REAL,
        mid_mountain_snow REAL,
        lifts_open TEXT,
        runs_open TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_resorts_name ON resorts(name COLLATE NOCASE);
    CREATE INDEX IF NOT EXISTS idx_resorts_position ON resorts(position);
    "#
}
