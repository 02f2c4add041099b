//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::api::{BrawlhallaId, Bracket, ClanId, LegendArg, Region, SteamId};

/// Arguments shared by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// API key (or set `BRAWLHALLA_API_KEY`, or save one with `save-key`).
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    /// Read the API key from this file.
    #[clap(long, global = true)]
    pub key_file: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Per-request timeout in seconds.
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Send requests immediately instead of pacing them to the API limits.
    #[clap(long, global = true)]
    pub no_ratelimit: bool,

    /// Fail straight away on HTTP 429 instead of waiting and retrying.
    #[clap(long, global = true)]
    pub no_retry: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Lifetime stats for a player.
    Stats {
        /// Brawlhalla account ID.
        id: BrawlhallaId,
    },

    /// Ranked season stats for a player.
    Ranked {
        /// Brawlhalla account ID.
        id: BrawlhallaId,
    },

    /// Clan details and roster.
    Clan {
        id: ClanId,
    },

    /// Details for one legend, by name (`"lord vraxx"`) or ID (`6`).
    Legend {
        legend: LegendArg,
    },

    /// Details for every legend.
    Legends,

    /// One page of a ranked ladder.
    Rankings {
        /// `1v1` or `2v2`.
        #[clap(long, short, default_value_t = Bracket::default())]
        bracket: Bracket,

        /// all, us-e, eu, sea, brz, aus, us-w, jpn, sa or me.
        #[clap(long, short, default_value_t = Region::default())]
        region: Region,

        #[clap(long, short, default_value_t = 1)]
        page: u32,

        /// Only players whose name starts with this.
        #[clap(long, short)]
        name: Option<String>,
    },

    /// Any endpoint path (e.g. `player/2/stats`), printed as JSON.
    Raw {
        path: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Brawlhalla API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Find the Brawlhalla account linked to a Steam ID.
    Search {
        steam_id: SteamId,
    },

    /// Check that a tier string is well formed (e.g. "Gold 4", "Diamond").
    Tier {
        tier: String,
    },

    /// Store an API key in the key file.
    SaveKey {
        key: String,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "brawlhalla", about = "Brawlhalla stats CLI")]
pub struct Brawlhalla {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
