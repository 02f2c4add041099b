//! Unit tests for command helpers and text output

use super::*;
use crate::{
    api::{Clan, LegendInfo, PlayerRanked, PlayerStats, RankingEntry},
    commands::{legend::*, player::*, rankings::*, tier::*},
    error::BrawlhallaError,
};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

fn global_args() -> GlobalArgs {
    GlobalArgs {
        api_key: Some("k".to_string()),
        key_file: None,
        json: false,
        timeout: None,
        no_ratelimit: false,
        no_retry: false,
    }
}

#[cfg(test)]
mod options_tests {
    use super::*;

    #[test]
    fn test_default_flags_keep_library_defaults_but_report_429() {
        let options = client_options(&global_args());
        assert!(options.use_internal_ratelimiter);
        assert!(options.retry_on_429);
        assert!(!options.swallow_429);
        assert_eq!(options.max_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_flags_override_options() {
        let mut args = global_args();
        args.timeout = Some(3);
        args.no_ratelimit = true;
        args.no_retry = true;

        let options = client_options(&args);
        assert!(!options.use_internal_ratelimiter);
        assert!(!options.retry_on_429);
        assert_eq!(options.max_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_context_uses_explicit_key() {
        let mut args = global_args();
        args.json = true;
        let ctx = CommandContext::new(&args).unwrap();
        assert!(ctx.as_json);
        assert_eq!(ctx.client.base_url(), crate::client::BRAWLHALLA_BASE_URL);
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn test_format_player_stats() {
        let stats: PlayerStats = serde_json::from_value(json!({
            "brawlhalla_id": 2,
            "name": "bmg | dan",
            "level": 47,
            "games": 10,
            "wins": 5,
            "legends": [
                {"legend_id": 3, "legend_name_key": "bodvar", "level": 4, "games": 2, "wins": 1},
                {"legend_id": 4, "legend_name_key": "cassidy", "level": 9, "games": 8, "wins": 4},
                {"legend_id": 5, "legend_name_key": "orion", "level": 0, "games": 0, "wins": 0}
            ],
            "clan": {"clan_name": "BMG", "clan_id": 1}
        }))
        .unwrap();

        let text = format_player_stats(&stats);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "bmg | dan (#2) - level 47, 10 games, 5 wins (50.0%)"
        );
        assert_eq!(lines[1], "Clan: BMG (#1)");
        // Most played first, unplayed legends hidden.
        assert!(lines[2].contains("cassidy"));
        assert!(lines[3].contains("bodvar"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_format_player_ranked_keeps_unknown_tier() {
        let ranked: PlayerRanked = serde_json::from_value(json!({
            "name": "x",
            "brawlhalla_id": 9,
            "tier": "Valhallan",
            "rating": 2600,
            "region": "EU"
        }))
        .unwrap();

        let text = format_player_ranked(&ranked);
        assert!(text.starts_with("x (#9) - Valhallan 2600"));
    }

    #[test]
    fn test_format_player_search() {
        let found = serde_json::from_value(json!({"brawlhalla_id": 2, "name": "bmg | dan"}))
            .unwrap();
        assert_eq!(format_player_search(&found), "bmg | dan (#2)");
    }

    #[test]
    fn test_format_legend_falls_back_to_catalogue_name() {
        let info: LegendInfo = serde_json::from_value(json!({
            "legend_id": 6,
            "legend_name_key": "vraxx",
            "weapon_one": "Rocket Lance",
            "weapon_two": "Blasters",
            "strength": "7",
            "dexterity": "4",
            "defense": "4",
            "speed": "7"
        }))
        .unwrap();

        assert_eq!(
            format_legend(&info),
            "Lord Vraxx (#6) - Rocket Lance / Blasters  STR 7 DEX 4 DEF 4 SPD 7"
        );
        assert_eq!(format_legends(&[info.clone(), info]).lines().count(), 2);
    }

    #[test]
    fn test_format_clan_sorts_by_xp() {
        let clan: Clan = serde_json::from_value(json!({
            "clan_id": 1,
            "clan_name": "BMG",
            "clan_xp": "100",
            "clan": [
                {"brawlhalla_id": 3, "name": "low", "rank": "Member", "xp": 1},
                {"brawlhalla_id": 2, "name": "high", "rank": "Leader", "xp": 99}
            ]
        }))
        .unwrap();

        let text = format_clan(&clan);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "BMG (#1) - 2 members, 100 xp");
        assert!(lines[1].contains("high"));
        assert!(lines[2].contains("low"));
    }

    #[test]
    fn test_format_rankings() {
        assert_eq!(format_rankings(&[]), "No ranked players on this page");

        let entries: Vec<RankingEntry> = serde_json::from_value(json!([
            {"rank": "1", "name": "top", "tier": "Diamond", "rating": 2800, "games": 4, "wins": 3, "region": "EU"}
        ]))
        .unwrap();
        let text = format_rankings(&entries);
        assert!(text.contains("top"));
        assert!(text.contains("Diamond"));
        assert!(text.ends_with("75.0%"));
    }
}

#[cfg(test)]
mod offline_command_tests {
    use super::*;

    #[test]
    fn test_describe_tier() {
        assert_eq!(
            describe_tier("Gold 4").unwrap(),
            "Gold 4 - rank Gold, division 4"
        );
        assert_eq!(describe_tier("Diamond").unwrap(), "Diamond (top tier)");
        assert!(matches!(
            describe_tier("Emerald 1"),
            Err(BrawlhallaError::InvalidTier { .. })
        ));
    }

    #[test]
    fn test_save_key_writes_trimmed_key() {
        let temp_dir = TempDir::new().unwrap();
        let path: PathBuf = temp_dir.path().join("brawlhalla").join("key.txt");

        handle_save_key("  my-key \n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "my-key");
    }
}
