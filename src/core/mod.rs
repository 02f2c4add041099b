//! Core utilities for the Brawlhalla CLI
//!
//! - `config`: API key resolution and key file storage

pub mod config;

pub use config::{default_key_path, resolve_api_key, try_read_to_string, write_string};
