//! Legend and clan commands.

use crate::{
    api::{Clan, Legend, LegendInfo},
    ClanId, LegendId, Result,
};

use super::{common::emit, CommandContext};

pub fn format_legend(info: &LegendInfo) -> String {
    let name = if info.bio_name.is_empty() {
        Legend::from_id(info.legend_id)
            .map(|l| l.name().to_string())
            .unwrap_or_else(|| info.legend_name_key.clone())
    } else {
        info.bio_name.clone()
    };

    format!(
        "{} (#{}) - {} / {}  STR {} DEX {} DEF {} SPD {}",
        name,
        info.legend_id,
        info.weapon_one,
        info.weapon_two,
        info.strength,
        info.dexterity,
        info.defense,
        info.speed
    )
}

pub fn format_legends(legends: &[LegendInfo]) -> String {
    legends
        .iter()
        .map(format_legend)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_clan(clan: &Clan) -> String {
    let mut out = format!(
        "{} (#{}) - {} members, {} xp",
        clan.clan_name,
        clan.clan_id,
        clan.members.len(),
        clan.clan_xp
    );

    let mut members: Vec<_> = clan.members.iter().collect();
    members.sort_by(|a, b| b.xp.cmp(&a.xp));
    for member in members {
        out.push_str(&format!(
            "\n  {:<24} {:<8} {:>8} xp",
            member.name, member.rank, member.xp
        ));
    }
    out
}

pub async fn handle_legend(ctx: &CommandContext, legend: LegendId) -> Result<()> {
    let info = ctx.client.get_legend_info(legend).await?;
    emit(info, ctx.as_json, format_legend)
}

pub async fn handle_legends(ctx: &CommandContext) -> Result<()> {
    let legends = ctx.client.get_all_legends().await?;
    emit(legends, ctx.as_json, |l| format_legends(l))
}

pub async fn handle_clan(ctx: &CommandContext, id: ClanId) -> Result<()> {
    let clan = ctx.client.get_clan(id).await?;
    emit(clan, ctx.as_json, format_clan)
}
