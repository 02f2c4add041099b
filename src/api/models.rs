//! Typed records for the Brawlhalla API endpoints.
//!
//! Each record names the fields callers commonly read and keeps every other
//! field returned by the API in `extra`, so nothing the server sends is lost.

use crate::api::ids::{BrawlhallaId, ClanId, LegendId};
use crate::api::tier::Tier;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
mod tests;

/// Records carrying a raw `tier` string.
pub trait HasTier {
    fn tier_str(&self) -> &str;

    /// Parse the raw tier string.
    fn tier(&self) -> Result<Tier> {
        self.tier_str().parse()
    }
}

/// `search?steamid=`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSearch {
    pub brawlhalla_id: BrawlhallaId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Clan membership summary embedded in player stats.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerClan {
    pub clan_name: String,
    pub clan_id: ClanId,
    #[serde(default)]
    pub clan_xp: String,
    #[serde(default)]
    pub personal_xp: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-legend lifetime stats.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LegendStats {
    pub legend_id: LegendId,
    pub legend_name_key: String,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub xp_percentage: f64,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `player/{id}/stats`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerStats {
    pub brawlhalla_id: BrawlhallaId,
    pub name: String,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub xp_percentage: f64,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub legends: Vec<LegendStats>,
    #[serde(default)]
    pub clan: Option<PlayerClan>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerStats {
    pub fn losses(&self) -> u32 {
        self.games.saturating_sub(self.wins)
    }

    /// Legend with the most games played.
    pub fn most_played_legend(&self) -> Option<&LegendStats> {
        self.legends.iter().max_by_key(|l| l.games)
    }
}

/// Per-legend ranked standing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankedLegend {
    pub legend_id: LegendId,
    pub legend_name_key: String,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub peak_rating: u32,
    pub tier: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub games: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HasTier for RankedLegend {
    fn tier_str(&self) -> &str {
        &self.tier
    }
}

/// A 2v2 team the player belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankedTeam {
    pub brawlhalla_id_one: BrawlhallaId,
    pub brawlhalla_id_two: BrawlhallaId,
    #[serde(default)]
    pub teamname: String,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub peak_rating: u32,
    pub tier: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub games: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HasTier for RankedTeam {
    fn tier_str(&self) -> &str {
        &self.tier
    }
}

/// `player/{id}/ranked`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerRanked {
    pub brawlhalla_id: BrawlhallaId,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub peak_rating: u32,
    pub tier: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub global_rank: u64,
    #[serde(default)]
    pub region_rank: u64,
    #[serde(default)]
    pub legends: Vec<RankedLegend>,
    #[serde(rename = "2v2", default)]
    pub teams: Vec<RankedTeam>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HasTier for PlayerRanked {
    fn tier_str(&self) -> &str {
        &self.tier
    }
}

/// A clan roster entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClanMember {
    pub brawlhalla_id: BrawlhallaId,
    pub name: String,
    /// Leader, Officer, Member or Recruit.
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub join_date: u64,
    #[serde(default)]
    pub xp: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `clan/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Clan {
    pub clan_id: ClanId,
    pub clan_name: String,
    #[serde(default)]
    pub clan_create_date: u64,
    #[serde(default)]
    pub clan_xp: String,
    #[serde(rename = "clan", default)]
    pub members: Vec<ClanMember>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Clan {
    pub fn leader(&self) -> Option<&ClanMember> {
        self.members.iter().find(|m| m.rank == "Leader")
    }
}

/// `legend/{id}`; `legend/all` returns a list of these.
///
/// Stat values arrive as strings (`"6"`), and are kept that way.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LegendInfo {
    pub legend_id: LegendId,
    pub legend_name_key: String,
    #[serde(default)]
    pub bio_name: String,
    #[serde(default)]
    pub bio_aka: String,
    #[serde(default)]
    pub weapon_one: String,
    #[serde(default)]
    pub weapon_two: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub dexterity: String,
    #[serde(default)]
    pub defense: String,
    #[serde(default)]
    pub speed: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One row of `rankings/{bracket}/{region}/{page}`.
///
/// 1v1 rows carry `name`/`brawlhalla_id`; 2v2 rows carry `teamname` and the
/// two member IDs instead.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankingEntry {
    #[serde(default)]
    pub rank: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brawlhalla_id: Option<BrawlhallaId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teamname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brawlhalla_id_one: Option<BrawlhallaId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brawlhalla_id_two: Option<BrawlhallaId>,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub peak_rating: u32,
    pub tier: String,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub region: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RankingEntry {
    /// Player or team name, whichever this row has.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.teamname.as_deref())
            .unwrap_or("")
    }
}

impl HasTier for RankingEntry {
    fn tier_str(&self) -> &str {
        &self.tier
    }
}
