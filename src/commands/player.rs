//! Player lookup commands: lifetime stats, ranked stats and Steam search.

use crate::{
    api::{HasTier, PlayerRanked, PlayerSearch, PlayerStats},
    BrawlhallaId, Result, SteamId,
};

use super::{
    common::{emit, win_rate},
    CommandContext,
};

pub fn format_player_stats(stats: &PlayerStats) -> String {
    let mut out = format!(
        "{} (#{}) - level {}, {} games, {} wins ({})",
        stats.name,
        stats.brawlhalla_id,
        stats.level,
        stats.games,
        stats.wins,
        win_rate(stats.wins, stats.games)
    );

    if let Some(clan) = &stats.clan {
        out.push_str(&format!("\nClan: {} (#{})", clan.clan_name, clan.clan_id));
    }

    let mut legends: Vec<_> = stats.legends.iter().filter(|l| l.games > 0).collect();
    legends.sort_by(|a, b| b.games.cmp(&a.games));
    for legend in legends {
        out.push_str(&format!(
            "\n  {:<16} level {:>3}  {:>5} games  {}",
            legend.legend_name_key,
            legend.level,
            legend.games,
            win_rate(legend.wins, legend.games)
        ));
    }
    out
}

pub fn format_player_ranked(ranked: &PlayerRanked) -> String {
    // Unknown tier strings are shown verbatim.
    let tier = ranked
        .tier()
        .map(|t| t.to_string())
        .unwrap_or_else(|_| ranked.tier.clone());

    let mut out = format!(
        "{} (#{}) - {} {} (peak {}), {} region, rank {} global / {} region, {} games ({})",
        ranked.name,
        ranked.brawlhalla_id,
        tier,
        ranked.rating,
        ranked.peak_rating,
        ranked.region,
        ranked.global_rank,
        ranked.region_rank,
        ranked.games,
        win_rate(ranked.wins, ranked.games)
    );

    for legend in &ranked.legends {
        out.push_str(&format!(
            "\n  {:<16} {:<11} {:>5} (peak {})",
            legend.legend_name_key, legend.tier, legend.rating, legend.peak_rating
        ));
    }
    for team in &ranked.teams {
        out.push_str(&format!(
            "\n  2v2 {:<24} {:<11} {:>5} (peak {})",
            team.teamname, team.tier, team.rating, team.peak_rating
        ));
    }
    out
}

pub fn format_player_search(found: &PlayerSearch) -> String {
    format!("{} (#{})", found.name, found.brawlhalla_id)
}

pub async fn handle_player_stats(ctx: &CommandContext, id: BrawlhallaId) -> Result<()> {
    let stats = ctx.client.get_player_stats(id).await?;
    emit(stats, ctx.as_json, format_player_stats)
}

pub async fn handle_player_ranked(ctx: &CommandContext, id: BrawlhallaId) -> Result<()> {
    let ranked = ctx.client.get_player_ranked_stats(id).await?;
    emit(ranked, ctx.as_json, format_player_ranked)
}

pub async fn handle_search(ctx: &CommandContext, steam_id: SteamId) -> Result<()> {
    let found = ctx.client.get_player_from_steam_id(steam_id).await?;
    emit(found, ctx.as_json, format_player_search)
}
