//! Snow statistics derived from a single resort.
//!
//! Missing measurements count as zero everywhere. Amounts are shown as-is
//! in inches, without rounding.

use chrono::NaiveDate;
use serde::Serialize;
use ssr_resort::resort::SERIES_DAYS;
use ssr_resort::{Resort, ResortId};
use ssr_utils::dates::{format_day_label, offset_date, parse_timestamp_date};

/// Snowfall over the last two days ("1 day ago" + "2 days ago").
pub fn recent_snow(resort: &Resort) -> f64 {
    resort.snowfall_1_day_ago.unwrap_or(0.0) + resort.snowfall_2_days_ago.unwrap_or(0.0)
}

/// Forecast snowfall for today and the next two days.
pub fn forecasted_snow(resort: &Resort) -> f64 {
    resort.forecast_today.unwrap_or(0.0)
        + resort.forecast_in_1_day.unwrap_or(0.0)
        + resort.forecast_in_2_days.unwrap_or(0.0)
}

/// Mid-mountain base depth.
pub fn base_depth(resort: &Resort) -> f64 {
    resort.mid_mountain_snow.unwrap_or(0.0)
}

/// An amount with an inch suffix, e.g. `7"` or `2.5"`.
pub fn format_inches(amount: f64) -> String {
    format!("{}\"", amount)
}

/// One column of the detail table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayAmount {
    /// e.g. "Tue 1/14"
    pub label: String,
    pub date: NaiveDate,
    pub amount: f64,
}

impl DayAmount {
    fn new(date: NaiveDate, amount: Option<f64>) -> Self {
        DayAmount {
            label: format_day_label(&date),
            date,
            amount: amount.unwrap_or(0.0),
        }
    }
}

/// Per-day snowfall around a reference date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailTable {
    /// Days -6 through -1, oldest first.
    pub past: [DayAmount; SERIES_DAYS],
    /// Day 0 (today) through day 5.
    pub forecast: [DayAmount; SERIES_DAYS],
}

/// Build the detail table for `resort` with labels relative to `today`.
pub fn detail_table(resort: &Resort, today: NaiveDate) -> DetailTable {
    let past = resort.past_snowfall();
    let forecast = resort.forecast_snowfall();
    DetailTable {
        past: std::array::from_fn(|i| {
            DayAmount::new(offset_date(today, i as i64 - SERIES_DAYS as i64), past[i])
        }),
        forecast: std::array::from_fn(|i| DayAmount::new(offset_date(today, i as i64), forecast[i])),
    }
}

/// The figures shown on a resort card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardSummary {
    pub id: ResortId,
    pub name: String,
    /// Last 2 days
    pub recent_snow: f64,
    /// Next 3 days
    pub forecasted_snow: f64,
    pub base_depth: f64,
    pub lifts_open: String,
    pub runs_open: String,
    /// Calendar date of the row's `created_at`, when it parses.
    pub updated: Option<NaiveDate>,
}

pub fn summarize(resort: &Resort) -> CardSummary {
    CardSummary {
        id: resort.id,
        name: resort.name.clone(),
        recent_snow: recent_snow(resort),
        forecasted_snow: forecasted_snow(resort),
        base_depth: base_depth(resort),
        lifts_open: resort.lifts_open.clone().unwrap_or_default(),
        runs_open: resort.runs_open.clone().unwrap_or_default(),
        updated: parse_timestamp_date(&resort.created_at).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_resort() -> Resort {
        let mut resort = Resort::new(1, "Alta");
        resort.snowfall_6_days_ago = Some(6.0);
        resort.snowfall_5_days_ago = Some(5.0);
        resort.snowfall_4_days_ago = Some(4.0);
        resort.snowfall_3_days_ago = Some(3.0);
        resort.snowfall_2_days_ago = Some(2.0);
        resort.snowfall_1_day_ago = Some(1.0);
        resort.forecast_today = Some(10.0);
        resort.forecast_in_1_day = Some(11.0);
        resort.forecast_in_2_days = Some(12.0);
        resort.forecast_in_3_days = Some(13.0);
        resort.forecast_in_4_days = Some(14.0);
        resort.forecast_in_5_days = Some(15.0);
        resort.mid_mountain_snow = Some(96.0);
        resort
    }

    #[test]
    fn sums_use_only_their_fields() {
        let resort = full_resort();
        assert_eq!(recent_snow(&resort), 3.0);
        assert_eq!(forecasted_snow(&resort), 33.0);
        assert_eq!(base_depth(&resort), 96.0);
    }

    #[test]
    fn absent_fields_count_as_zero() {
        let mut resort = Resort::new(1, "Alta");
        resort.snowfall_1_day_ago = Some(3.0);
        assert_eq!(recent_snow(&resort), 3.0);
        assert_eq!(forecasted_snow(&resort), 0.0);
        assert_eq!(base_depth(&resort), 0.0);

        let empty = Resort::new(2, "Snowbird");
        assert_eq!(recent_snow(&empty), 0.0);
        assert_eq!(forecasted_snow(&empty), 0.0);
    }

    #[test]
    fn fractional_sums_are_not_rounded() {
        let mut resort = Resort::new(1, "Mammoth");
        resort.forecast_in_1_day = Some(0.5);
        resort.forecast_in_2_days = Some(1.5);
        assert_eq!(forecasted_snow(&resort), 2.0);
        resort.forecast_today = Some(0.25);
        assert_eq!(format_inches(forecasted_snow(&resort)), "2.25\"");
    }

    #[test]
    fn format_inches_whole_numbers() {
        assert_eq!(format_inches(7.0), "7\"");
        assert_eq!(format_inches(0.0), "0\"");
        assert_eq!(format_inches(2.5), "2.5\"");
    }

    #[test]
    fn detail_table_labels_and_amounts() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
        let table = detail_table(&full_resort(), today);

        assert_eq!(table.past[0].label, "Wed 1/8");
        assert_eq!(table.past[0].amount, 6.0);
        assert_eq!(table.past[5].label, "Mon 1/13");
        assert_eq!(table.past[5].amount, 1.0);

        assert_eq!(table.forecast[0].label, "Tue 1/14");
        assert_eq!(table.forecast[0].date, today);
        assert_eq!(table.forecast[0].amount, 10.0);
        assert_eq!(table.forecast[5].label, "Sun 1/19");
        assert_eq!(table.forecast[5].amount, 15.0);
    }

    #[test]
    fn detail_table_always_six_and_six() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let table = detail_table(&Resort::new(9, "Empty"), today);
        assert_eq!(table.past.len(), 6);
        assert_eq!(table.forecast.len(), 6);
        assert!(table.past.iter().all(|d| d.amount == 0.0));
        assert!(table.forecast.iter().all(|d| d.amount == 0.0));
        // crosses the February boundary
        assert_eq!(table.past[0].label, "Mon 2/24");
    }

    #[test]
    fn summarize_card() {
        let mut resort = full_resort();
        resort.created_at = "2025-01-14T15:02:11.52+00:00".to_string();
        resort.lifts_open = Some("6/6".to_string());
        let card = summarize(&resort);
        assert_eq!(card.recent_snow, 3.0);
        assert_eq!(card.forecasted_snow, 33.0);
        assert_eq!(card.lifts_open, "6/6");
        assert_eq!(card.runs_open, "");
        assert_eq!(card.updated, NaiveDate::from_ymd_opt(2025, 1, 14));
    }
}
