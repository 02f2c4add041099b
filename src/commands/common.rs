//! Output helpers shared across commands.

use serde::Serialize;

use crate::Result;

/// Message printed when the API gave nothing back.
pub const NO_DATA: &str = "No data returned by the Brawlhalla API";

/// Print `value` as pretty JSON or through `render`.
pub fn emit<T: Serialize>(
    value: Option<T>,
    as_json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    let Some(value) = value else {
        eprintln!("{}", NO_DATA);
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render(&value));
    }
    Ok(())
}

/// "63.2%"; "-" when no games were played.
pub fn win_rate(wins: u32, games: u32) -> String {
    if games == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", f64::from(wins) * 100.0 / f64::from(games))
    }
}
