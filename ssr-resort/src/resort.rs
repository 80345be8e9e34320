use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use serde::{Deserialize, Serialize};

/// Embedded CSV data for the bundled resort list.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/resorts.csv");

/// Stable identifier of a resort row.
pub type ResortId = i64;

/// Number of days covered by each of the past and forecast series.
pub const SERIES_DAYS: usize = 6;

/// A single ski area record as stored in the remote `onthesnow` table.
///
/// Field names on the wire are the table's column names, spaces included.
/// Every measurement may be missing; consumers treat a missing value as zero.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Resort {
    pub id: ResortId,
    /// Row creation timestamp (ISO-8601)
    pub created_at: String,
    #[serde(rename = "Ski Resort")]
    pub name: String,
    #[serde(rename = "Snowfall 6 days ago", default)]
    pub snowfall_6_days_ago: Option<f64>,
    #[serde(rename = "Snowfall 5 days ago", default)]
    pub snowfall_5_days_ago: Option<f64>,
    #[serde(rename = "Snowfall 4 days ago", default)]
    pub snowfall_4_days_ago: Option<f64>,
    #[serde(rename = "Snowfall 3 days ago", default)]
    pub snowfall_3_days_ago: Option<f64>,
    #[serde(rename = "Snowfall 2 days ago", default)]
    pub snowfall_2_days_ago: Option<f64>,
    #[serde(rename = "Snowfall 1 day ago", default)]
    pub snowfall_1_day_ago: Option<f64>,
    #[serde(rename = "Snowfall forecasted today", default)]
    pub forecast_today: Option<f64>,
    #[serde(rename = "Snowfall forecasted in 1 day", default)]
    pub forecast_in_1_day: Option<f64>,
    #[serde(rename = "Snowfall forecasted in 2 days", default)]
    pub forecast_in_2_days: Option<f64>,
    #[serde(rename = "Snowfall forecasted in 3 days", default)]
    pub forecast_in_3_days: Option<f64>,
    #[serde(rename = "Snowfall forecasted in 4 days", default)]
    pub forecast_in_4_days: Option<f64>,
    #[serde(rename = "Snowfall forecasted in 5 days", default)]
    pub forecast_in_5_days: Option<f64>,
    /// Mid-mountain base depth in inches
    #[serde(rename = "Mid Mountain Snow", default)]
    pub mid_mountain_snow: Option<f64>,
    /// Free text, e.g. "6/6"
    #[serde(rename = "Lifts Open", default)]
    pub lifts_open: Option<String>,
    /// Free text, e.g. "116/119"
    #[serde(rename = "Runs Open", default)]
    pub runs_open: Option<String>,
}

impl Resort {
    /// A resort with a name and no measurements.
    pub fn new(id: ResortId, name: &str) -> Self {
        Resort {
            id,
            created_at: String::new(),
            name: name.to_string(),
            snowfall_6_days_ago: None,
            snowfall_5_days_ago: None,
            snowfall_4_days_ago: None,
            snowfall_3_days_ago: None,
            snowfall_2_days_ago: None,
            snowfall_1_day_ago: None,
            forecast_today: None,
            forecast_in_1_day: None,
            forecast_in_2_days: None,
            forecast_in_3_days: None,
            forecast_in_4_days: None,
            forecast_in_5_days: None,
            mid_mountain_snow: None,
            lifts_open: None,
            runs_open: None,
        }
    }

    /// Past snowfall, oldest first: 6 days ago through 1 day ago.
    pub fn past_snowfall(&self) -> [Option<f64>; SERIES_DAYS] {
        [
            self.snowfall_6_days_ago,
            self.snowfall_5_days_ago,
            self.snowfall_4_days_ago,
            self.snowfall_3_days_ago,
            self.snowfall_2_days_ago,
            self.snowfall_1_day_ago,
        ]
    }

    /// Forecast snowfall: today through 5 days out.
    pub fn forecast_snowfall(&self) -> [Option<f64>; SERIES_DAYS] {
        [
            self.forecast_today,
            self.forecast_in_1_day,
            self.forecast_in_2_days,
            self.forecast_in_3_days,
            self.forecast_in_4_days,
            self.forecast_in_5_days,
        ]
    }

    /// Parse resort rows from CSV with a header row of wire column names.
    ///
    /// Empty cells become missing values.
    pub fn parse_resort_csv(csv_object: &str) -> anyhow::Result<Vec<Resort>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut resort_list: Vec<Resort> = Vec::new();
        for row in rdr.deserialize() {
            let resort: Resort = row?;
            resort_list.push(resort);
        }
        info!("Parsed {} resorts from CSV", resort_list.len());
        Ok(resort_list)
    }

    /// Parse the JSON array returned by the remote table.
    pub fn parse_resort_json(json: &str) -> anyhow::Result<Vec<Resort>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize resorts as CSV in the same layout [`parse_resort_csv`](Self::parse_resort_csv) reads.
    pub fn to_csv(resorts: &[Resort]) -> anyhow::Result<String> {
        let mut wtr = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
        for resort in resorts {
            wtr.serialize(resort)?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush CSV: {}", e.error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// The bundled resort list.
    pub fn get_resort_vector() -> anyhow::Result<Vec<Resort>> {
        Resort::parse_resort_csv(CSV_OBJECT)
    }
}
