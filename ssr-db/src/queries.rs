//! Typed query methods for retrieving resort rows from the database.

use crate::Database;
use rusqlite::{params, OptionalExtension, Row};
use ssr_resort::Resort;

const RESORT_COLUMNS: &str = "id, created_at, name,
    past_6, past_5, past_4, past_3, past_2, past_1,
    forecast_0, forecast_1, forecast_2, forecast_3, forecast_4, forecast_5,
    mid_mountain_snow, lifts_open, runs_open";

fn row_to_resort(row: &Row<'_>) -> rusqlite::Result<Resort> {
    Ok(Resort {
        id: row.get(0)?,
        created_at: row.get(1)?,
        name: row.get(2)?,
        snowfall_6_days_ago: row.get(3)?,
        snowfall_5_days_ago: row.get(4)?,
        snowfall_4_days_ago: row.get(5)?,
        snowfall_3_days_ago: row.get(6)?,
        snowfall_2_days_ago: row.get(7)?,
        snowfall_1_day_ago: row.get(8)?,
        forecast_today: row.get(9)?,
        forecast_in_1_day: row.get(10)?,
        forecast_in_2_days: row.get(11)?,
        forecast_in_3_days: row.get(12)?,
        forecast_in_4_days: row.get(13)?,
        forecast_in_5_days: row.get(14)?,
        mid_mountain_snow: row.get(15)?,
        lifts_open: row.get(16)?,
        runs_open: row.get(17)?,
    })
}

impl Database {
    /// Get every resort in the order it was loaded.
    pub fn query_resorts(&self) -> anyhow::Result<Vec<Resort>> {
        let rows = self.query_ordered("position")?;
        log::info!("[SSR] query: query_resorts returned {} records", rows.len());
        Ok(rows)
    }

    /// Get every resort ordered by display name, ignoring ASCII case.
    ///
    /// Used for sources that are not already sorted, such as a CSV file.
    pub fn query_resorts_by_name(&self) -> anyhow::Result<Vec<Resort>> {
        let rows = self.query_ordered("name COLLATE NOCASE, id")?;
        log::info!(
            "[SSR] query: query_resorts_by_name returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    fn query_ordered(&self, order_by: &str) -> anyhow::Result<Vec<Resort>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM resorts ORDER BY {}",
            RESORT_COLUMNS, order_by
        ))?;
        let rows = stmt
            .query_map([], row_to_resort)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Get a single resort by id, if present.
    pub fn query_resort(&self, id: i64) -> anyhow::Result<Option<Resort>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM resorts WHERE id = ?1",
            RESORT_COLUMNS
        ))?;
        let resort = stmt.query_row(params![id], row_to_resort).optional()?;
        Ok(resort)
    }

    /// Number of resort rows currently loaded.
    pub fn query_resort_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM resorts", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use ssr_resort::Resort;

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let mut snowbird = Resort::new(2, "Snowbird");
        snowbird.snowfall_1_day_ago = Some(6.0);
        snowbird.lifts_open = Some("10/11".to_string());
        let mut alta = Resort::new(1, "Alta");
        alta.forecast_in_5_days = Some(2.5);
        alta.mid_mountain_snow = Some(96.0);
        db.insert_resorts(&[snowbird, Resort::new(3, "Brighton"), alta])
            .unwrap();
        db
    }

    fn names(resorts: &[Resort]) -> Vec<&str> {
        resorts.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn query_resorts_keeps_load_order() {
        let db = Database::new().unwrap();
        db.insert_resorts(&[
            Resort::new(1, "alpine meadows"),
            Resort::new(2, "Brighton"),
            Resort::new(3, " Zermatt"),
        ])
        .unwrap();
        let resorts = db.query_resorts().unwrap();
        assert_eq!(names(&resorts), vec!["alpine meadows", "Brighton", " Zermatt"]);
    }

    #[test]
    fn replaced_row_moves_to_end() {
        let db = sample_db();
        db.insert_resorts(&[Resort::new(2, "Snowbird")]).unwrap();
        let resorts = db.query_resorts().unwrap();
        assert_eq!(names(&resorts), vec!["Brighton", "Alta", "Snowbird"]);
    }

    #[test]
    fn query_resorts_by_name_ignores_case() {
        let db = Database::new().unwrap();
        db.insert_resorts(&[
            Resort::new(1, "Snowbird"),
            Resort::new(2, "alpine meadows"),
            Resort::new(3, "Brighton"),
        ])
        .unwrap();
        let resorts = db.query_resorts_by_name().unwrap();
        assert_eq!(names(&resorts), vec!["alpine meadows", "Brighton", "Snowbird"]);
    }

    #[test]
    fn query_resorts_round_trips_fields() {
        let db = sample_db();
        let resorts = db.query_resorts_by_name().unwrap();
        let alta = &resorts[0];
        assert_eq!(alta.forecast_in_5_days, Some(2.5));
        assert_eq!(alta.mid_mountain_snow, Some(96.0));
        assert_eq!(alta.snowfall_1_day_ago, None);
        let snowbird = &resorts[2];
        assert_eq!(snowbird.snowfall_1_day_ago, Some(6.0));
        assert_eq!(snowbird.lifts_open.as_deref(), Some("10/11"));
        assert_eq!(snowbird.runs_open, None);
    }

    #[test]
    fn query_resort_by_id() {
        let db = sample_db();
        let brighton = db.query_resort(3).unwrap().unwrap();
        assert_eq!(brighton.name, "Brighton");
        assert!(db.query_resort(99).unwrap().is_none());
    }

    #[test]
    fn query_resort_count_matches_rows() {
        let db = sample_db();
        assert_eq!(db.query_resort_count().unwrap(), 3);
    }
}
