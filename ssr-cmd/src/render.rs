//! Text and JSON rendering of resort cards.

use serde::Serialize;
use ssr_utils::dates::format_date;
use ssr_view::snow::{format_inches, CardSummary, DayAmount, DetailTable};
use std::fmt::Write;

/// A card as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct CardView {
    #[serde(flatten)]
    pub card: CardSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailTable>,
}

pub fn render_card(card: &CardSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", card.name, card.id);
    let _ = writeln!(
        out,
        "  Last 2 Days: {}  Next 3 Days: {}  Base Depth: {}",
        format_inches(card.recent_snow),
        format_inches(card.forecasted_snow),
        format_inches(card.base_depth)
    );
    if let Some(updated) = card.updated {
        let _ = writeln!(out, "  Updated: {}", format_date(&updated));
    }
    out
}

fn render_days(out: &mut String, title: &str, days: &[DayAmount]) {
    let _ = writeln!(out, "  {}", title);
    let labels: Vec<String> = days.iter().map(|d| format!("{:>9}", d.label)).collect();
    let amounts: Vec<String> = days
        .iter()
        .map(|d| format!("{:>9}", format_inches(d.amount)))
        .collect();
    let _ = writeln!(out, "  {}", amounts.join(""));
    let _ = writeln!(out, "  {}", labels.join(""));
}

pub fn render_detail(card: &CardSummary, table: &DetailTable) -> String {
    let mut out = String::new();
    render_days(&mut out, "Past Snowfall", &table.past);
    render_days(&mut out, "Forecast", &table.forecast);
    let _ = writeln!(
        out,
        "  Lifts Open: {}  Runs Open: {}",
        card.lifts_open, card.runs_open
    );
    out
}

pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ssr_resort::Resort;
    use ssr_view::snow::{detail_table, summarize};

    fn alta() -> Resort {
        let mut resort = Resort::new(1, "Alta");
        resort.created_at = "2025-01-14T15:02:11+00:00".to_string();
        resort.snowfall_1_day_ago = Some(7.0);
        resort.snowfall_2_days_ago = Some(3.0);
        resort.forecast_in_1_day = Some(2.5);
        resort.mid_mountain_snow = Some(96.0);
        resort.lifts_open = Some("6/6".to_string());
        resort
    }

    #[test]
    fn card_shows_sums_with_inch_suffix() {
        let text = render_card(&summarize(&alta()));
        assert!(text.starts_with("Alta (#1)\n"));
        assert!(text.contains("Last 2 Days: 10\""));
        assert!(text.contains("Next 3 Days: 2.5\""));
        assert!(text.contains("Base Depth: 96\""));
        assert!(text.contains("Updated: 1/14/2025"));
    }

    #[test]
    fn detail_lists_both_series() {
        let resort = alta();
        let today = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
        let text = render_detail(&summarize(&resort), &detail_table(&resort, today));
        assert!(text.contains("Past Snowfall"));
        assert!(text.contains("Forecast"));
        assert!(text.contains("Mon 1/13"));
        assert!(text.contains("Sun 1/19"));
        assert!(text.contains("Lifts Open: 6/6"));
    }

    #[test]
    fn json_card_omits_missing_detail() {
        let view = CardView {
            card: summarize(&alta()),
            detail: None,
        };
        let json = render_json(&view).unwrap();
        assert!(json.contains("\"recent_snow\": 10.0"));
        assert!(!json.contains("detail"));
    }
}
