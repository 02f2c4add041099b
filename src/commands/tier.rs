//! Offline commands: tier validation and key storage.

use std::path::Path;

use crate::{api::Tier, core::write_string, Result};

/// Describe a valid tier string, or fail with `InvalidTier`.
pub fn describe_tier(raw: &str) -> Result<String> {
    let tier: Tier = raw.parse()?;
    Ok(match tier {
        Tier::Diamond => "Diamond (top tier)".to_string(),
        Tier::Ranked { rank, division } => format!("{} - rank {}, division {}", tier, rank, division),
    })
}

pub fn handle_tier(raw: &str) -> Result<()> {
    println!("{}", describe_tier(raw)?);
    Ok(())
}

pub fn handle_save_key(key: &str, path: &Path) -> Result<()> {
    write_string(path, key.trim())?;
    println!("API key saved to {}", path.display());
    Ok(())
}
