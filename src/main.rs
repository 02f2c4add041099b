//! Entry point: parse CLI and dispatch to command handlers.

use std::io;

use anyhow::Context;
use clap::Parser;
use brawlhalla::{
    cli::{Brawlhalla, Commands, GetCmd},
    commands::{
        legend::{handle_clan, handle_legend, handle_legends},
        player::{handle_player_ranked, handle_player_stats, handle_search},
        rankings::{handle_rankings, handle_raw},
        tier::{handle_save_key, handle_tier},
        CommandContext,
    },
    core::default_key_path,
};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let app = Brawlhalla::parse();

    match app.command {
        Commands::Tier { tier } => handle_tier(&tier)?,

        Commands::SaveKey { key } => {
            let path = app.global.key_file.clone().unwrap_or_else(default_key_path);
            handle_save_key(&key, &path)
                .with_context(|| format!("saving API key to {}", path.display()))?
        }

        Commands::Search { steam_id } => {
            let ctx = CommandContext::new(&app.global)?;
            handle_search(&ctx, steam_id).await?
        }

        Commands::Get { cmd } => {
            let ctx = CommandContext::new(&app.global)?;
            match cmd {
                GetCmd::Stats { id } => handle_player_stats(&ctx, id)
                    .await
                    .with_context(|| format!("fetching stats for player {}", id))?,

                GetCmd::Ranked { id } => handle_player_ranked(&ctx, id)
                    .await
                    .with_context(|| format!("fetching ranked stats for player {}", id))?,

                GetCmd::Clan { id } => handle_clan(&ctx, id)
                    .await
                    .with_context(|| format!("fetching clan {}", id))?,

                GetCmd::Legend { legend } => handle_legend(&ctx, legend.into())
                    .await
                    .with_context(|| format!("fetching legend {}", legend.0))?,

                GetCmd::Legends => handle_legends(&ctx).await?,

                GetCmd::Rankings {
                    bracket,
                    region,
                    page,
                    name,
                } => handle_rankings(&ctx, bracket, region, page, name)
                    .await
                    .with_context(|| format!("fetching {} {} rankings page {}", bracket, region, page))?,

                GetCmd::Raw { path } => handle_raw(&ctx, &path)
                    .await
                    .with_context(|| format!("fetching {}", path))?,
            }
        }
    }

    Ok(())
}
