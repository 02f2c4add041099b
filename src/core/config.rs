use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{error::BrawlhallaError, Result, API_KEY_ENV_VAR};


/// Path: ~/.config/brawlhalla/key.txt
pub fn default_key_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("brawlhalla").join("key.txt")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

fn non_empty(key: String) -> Option<String> {
    let trimmed = key.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Read a key file the user named explicitly. Unlike the default file, a
/// missing, unreadable or blank file is an error.
fn read_key_file(path: &Path) -> Result<String> {
    let key_file_error = |reason: String| BrawlhallaError::KeyFile {
        path: path.display().to_string(),
        reason,
    };
    let contents = fs::read_to_string(path).map_err(|e| key_file_error(e.to_string()))?;
    non_empty(contents).ok_or_else(|| key_file_error("file is empty".to_string()))
}

/// Pick the first key available from, in order: the explicit value, the
/// environment value, the given key file, the default key file.
///
/// A given key file that cannot supply a key fails with
/// [`BrawlhallaError::KeyFile`] instead of falling through to the default.
pub fn resolve_api_key_from(
    explicit: Option<String>,
    env_value: Option<String>,
    key_file: Option<&Path>,
    default_file: &Path,
) -> Result<String> {
    if let Some(key) = explicit
        .and_then(non_empty)
        .or_else(|| env_value.and_then(non_empty))
    {
        return Ok(key);
    }

    if let Some(path) = key_file {
        return read_key_file(path);
    }

    try_read_to_string(default_file)
        .and_then(non_empty)
        .ok_or_else(|| BrawlhallaError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
}

/// Resolve the API key from CLI flags, `BRAWLHALLA_API_KEY` and key files.
pub fn resolve_api_key(explicit: Option<String>, key_file: Option<&Path>) -> Result<String> {
    resolve_api_key_from(
        explicit,
        std::env::var(API_KEY_ENV_VAR).ok(),
        key_file,
        &default_key_path(),
    )
}
