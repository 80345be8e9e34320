//! Resort list and detail commands.

use crate::config::Config;
use crate::render::{render_card, render_detail, render_json, CardView};
use crate::source::load_resorts;
use chrono::NaiveDate;
use ssr_resort::{Resort, ResortId};
use ssr_view::snow::{detail_table, summarize};
use ssr_view::state::ResortListState;

/// Render the cards for `resorts`, with the detail table for expanded ones.
pub(crate) fn render_cards<'a, I>(
    config: &Config,
    resorts: I,
    is_expanded: impl Fn(ResortId) -> bool,
    today: NaiveDate,
) -> anyhow::Result<String>
where
    I: IntoIterator<Item = &'a Resort>,
{
    if config.json {
        let views: Vec<CardView> = resorts
            .into_iter()
            .map(|resort| CardView {
                card: summarize(resort),
                detail: is_expanded(resort.id).then(|| detail_table(resort, today)),
            })
            .collect();
        return Ok(format!("{}\n", render_json(&views)?));
    }
    let mut out = String::new();
    for resort in resorts {
        let card = summarize(resort);
        out.push_str(&render_card(&card));
        if is_expanded(resort.id) {
            out.push_str(&render_detail(&card, &detail_table(resort, today)));
        }
        out.push('\n');
    }
    Ok(out)
}

/// List resorts matching `search`. A search that narrows the list to a
/// single resort expands it.
pub async fn run_resorts(config: &Config, search: &str, today: NaiveDate) -> anyhow::Result<String> {
    let resorts = load_resorts(config).await?;
    let mut state = ResortListState::new();
    state.set_search_query(search, &resorts);
    let visible = state.visible(&resorts);
    if visible.is_empty() && !config.json {
        return Ok("No resorts found\n".to_string());
    }
    render_cards(config, visible, |id| state.is_expanded(id), today)
}

/// Show a single resort, expanded.
pub async fn run_show(config: &Config, id: ResortId, today: NaiveDate) -> anyhow::Result<String> {
    let resorts = load_resorts(config).await?;
    let resort = resorts
        .iter()
        .find(|resort| resort.id == id)
        .ok_or_else(|| anyhow::anyhow!("No resort with id {}", id))?;
    let mut state = ResortListState::new();
    state.toggle(resort.id);
    render_cards(config, [resort], |id| state.is_expanded(id), today)
}
