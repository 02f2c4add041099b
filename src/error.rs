//! Error types for the Brawlhalla API client

use std::time::Duration;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, BrawlhallaError>;

/// Detail reported when a failed response carries no `error.message`.
pub const NO_FURTHER_DETAILS: &str = "No further details.";

#[derive(Error, Debug)]
pub enum BrawlhallaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The API answered with a non-200 status.
    #[error("Brawlhalla API returned {status} {reason}: {detail}")]
    Api {
        status: u16,
        reason: String,
        detail: String,
    },

    #[error("Rate limited by the Brawlhalla API (gave up after {retries} retries)")]
    RateLimited { retries: u32 },

    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Unsupported response data type: {kind}")]
    UnsupportedResponse { kind: String },

    #[error("Invalid tier: {tier:?}")]
    InvalidTier { tier: String },

    #[error("Unknown legend: {name}")]
    InvalidLegend { name: String },

    #[error("Invalid region: {region}")]
    InvalidRegion { region: String },

    #[error("Invalid bracket: {bracket}")]
    InvalidBracket { bracket: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    /// A key file named explicitly could not be used.
    #[error("Cannot read API key file {path}: {reason}")]
    KeyFile { path: String, reason: String },
}

impl BrawlhallaError {
    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            BrawlhallaError::Api { status, .. } => Some(*status),
            BrawlhallaError::RateLimited { .. } => Some(429),
            BrawlhallaError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
