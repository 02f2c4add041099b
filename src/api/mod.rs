//! Brawlhalla API data types.
//!
//! - `response`: generic container mirroring any JSON body
//! - `models`: typed records per endpoint
//! - `tier`, `legend`, `ranking`, `ids`: value types used in requests and responses

pub mod ids;
pub mod legend;
pub mod models;
pub mod ranking;
pub mod response;
pub mod tier;

pub use ids::{BrawlhallaId, ClanId, LegendId, SteamId};
pub use legend::{Legend, LegendArg};
pub use models::{
    Clan, ClanMember, HasTier, LegendInfo, LegendStats, PlayerClan, PlayerRanked, PlayerSearch,
    PlayerStats, RankedLegend, RankedTeam, RankingEntry,
};
pub use ranking::{Bracket, Region};
pub use response::Response;
pub use tier::{Rank, Tier};
