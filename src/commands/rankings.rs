//! Ranked ladder and raw endpoint commands.

use crate::{
    api::{Bracket, RankingEntry, Region},
    Result,
};

use super::{
    common::{emit, win_rate},
    CommandContext,
};

pub fn format_rankings(entries: &[RankingEntry]) -> String {
    if entries.is_empty() {
        return "No ranked players on this page".to_string();
    }

    entries
        .iter()
        .map(|e| {
            format!(
                "{:>6}  {:<28} {:<6} {:<11} {:>5}  {}",
                e.rank,
                e.display_name(),
                e.region,
                e.tier,
                e.rating,
                win_rate(e.wins, e.games)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn handle_rankings(
    ctx: &CommandContext,
    bracket: Bracket,
    region: Region,
    page: u32,
    name: Option<String>,
) -> Result<()> {
    let entries = ctx
        .client
        .get_ranked_page(bracket, region, page, name.as_deref())
        .await?;
    emit(entries, ctx.as_json, |e| format_rankings(e))
}

/// Print any endpoint's body as JSON.
pub async fn handle_raw(ctx: &CommandContext, path: &str) -> Result<()> {
    let response = ctx.client.get_raw(path, &[]).await?;
    emit(response, true, |_| String::new())
}
