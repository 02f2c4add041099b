//! Command implementations for the Brawlhalla CLI

pub mod common;
pub mod legend;
pub mod player;
pub mod rankings;
pub mod tier;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::{
    cli::GlobalArgs, client::ClientOptions, core::resolve_api_key, BrawlhallaClient, Result,
};

/// Shared resources for every command that talks to the API
pub struct CommandContext {
    pub client: BrawlhallaClient,
    pub as_json: bool,
}

impl CommandContext {
    /// Resolve the API key and build a client configured from the global flags.
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let api_key = resolve_api_key(global.api_key.clone(), global.key_file.as_deref())?;
        let client = BrawlhallaClient::with_options(api_key, client_options(global))?;

        Ok(Self {
            client,
            as_json: global.json,
        })
    }
}

/// CLI flags layered over the library defaults.
pub fn client_options(global: &GlobalArgs) -> ClientOptions {
    let mut options = ClientOptions::default()
        .with_internal_ratelimiter(!global.no_ratelimit)
        // The CLI reports failures instead of printing nothing.
        .with_swallow_429(false);

    if let Some(secs) = global.timeout {
        options = options.with_timeout(Duration::from_secs(secs));
    }
    if global.no_retry {
        options = options.with_retry_on_429(None);
    }
    options
}
