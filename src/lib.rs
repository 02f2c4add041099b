//! Brawlhalla API Client Library
//!
//! An asynchronous Rust client for the Brawlhalla stats API
//! (<http://dev.brawlhalla.com/>), plus the pieces the `brawlhalla` CLI is
//! built from.
//!
//! ## Features
//!
//! - **Typed Endpoints**: Player stats, ranked stats, clans, legends, ladders and Steam search
//! - **Generic Responses**: Any endpoint as a [`Response`] mirroring the JSON 1:1
//! - **Rate Limiting**: Built-in pacing to the API's 15 minute and per-second budgets
//! - **429 Handling**: Optional retry, swallow or propagate of rate-limit responses
//! - **Tier Strings**: Exact parsing and formatting of `"Gold 4"` / `"Diamond"`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brawlhalla::{BrawlhallaClient, BrawlhallaId, Legend};
//!
//! # async fn example() -> brawlhalla::Result<()> {
//! let client = BrawlhallaClient::new("your-api-key")?;
//!
//! if let Some(ranked) = client.get_player_ranked_stats(BrawlhallaId::new(2)).await? {
//!     println!("{} is {}", ranked.name, ranked.tier);
//! }
//!
//! let azoth = client.get_legend_info(Legend::Azoth).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI reads the API key from `--api-key`, then:
//! ```bash
//! export BRAWLHALLA_API_KEY=your-api-key
//! ```
//! then `--key-file`, then `~/.config/brawlhalla/key.txt`.

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod core;
pub mod error;
pub mod ratelimit;

// Re-export commonly used types
pub use api::{
    BrawlhallaId, Bracket, ClanId, HasTier, Legend, LegendId, Rank, Region, Response, SteamId,
    Tier,
};
pub use client::{BrawlhallaClient, ClientOptions};
pub use error::{BrawlhallaError, Result};
pub use ratelimit::RateBucket;

pub const API_KEY_ENV_VAR: &str = "BRAWLHALLA_API_KEY";
