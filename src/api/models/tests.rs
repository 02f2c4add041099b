//! Unit tests for typed API records

use super::*;
use crate::api::tier::Rank;
use serde_json::json;

fn player_stats_payload() -> Value {
    json!({
        "brawlhalla_id": 2,
        "name": "bmg | dan",
        "xp": 59185,
        "level": 47,
        "xp_percentage": 0.1232,
        "games": 327,
        "wins": 203,
        "damagebomb": "2317",
        "legends": [
            {
                "legend_id": 4,
                "legend_name_key": "cassidy",
                "damagedealt": "8429",
                "xp": 2150,
                "level": 9,
                "xp_percentage": 0.58,
                "games": 28,
                "wins": 19
            },
            {
                "legend_id": 23,
                "legend_name_key": "azoth",
                "xp": 9000,
                "level": 20,
                "xp_percentage": 0,
                "games": 112,
                "wins": 70
            }
        ],
        "clan": {
            "clan_name": "Blue Mammoth Games",
            "clan_id": 1,
            "clan_xp": "86962",
            "personal_xp": 16204
        }
    })
}

fn player_ranked_payload() -> Value {
    json!({
        "name": "bmg | dan",
        "brawlhalla_id": 2,
        "rating": 1745,
        "peak_rating": 1792,
        "tier": "Platinum 2",
        "wins": 207,
        "games": 391,
        "region": "US-E",
        "global_rank": 5698,
        "region_rank": 1644,
        "legends": [
            {
                "legend_id": 4,
                "legend_name_key": "cassidy",
                "rating": 1736,
                "peak_rating": 1792,
                "tier": "Platinum 1",
                "wins": 161,
                "games": 300
            }
        ],
        "2v2": [
            {
                "brawlhalla_id_one": 1,
                "brawlhalla_id_two": 2,
                "rating": 1559,
                "peak_rating": 1564,
                "tier": "Gold 4",
                "wins": 13,
                "games": 22,
                "teamname": "bmg | mike+bmg | dan",
                "region": 2,
                "global_rank": 0
            }
        ]
    })
}

#[cfg(test)]
mod models_tests {
    use super::*;

    #[test]
    fn test_player_search_deserialization() {
        let search: PlayerSearch =
            serde_json::from_value(json!({"brawlhalla_id": 2, "name": "bmg | dan"})).unwrap();
        assert_eq!(search.brawlhalla_id, BrawlhallaId::new(2));
        assert_eq!(search.name, "bmg | dan");
        assert!(search.extra.is_empty());
    }

    #[test]
    fn test_nested_records_keep_unknown_fields() {
        let search: PlayerSearch = serde_json::from_value(json!({
            "brawlhalla_id": 2,
            "name": "bmg | dan",
            "platform": "steam"
        }))
        .unwrap();
        assert_eq!(search.extra.get("platform"), Some(&json!("steam")));

        let clan: PlayerClan = serde_json::from_value(json!({
            "clan_name": "Blue Mammoth Games",
            "clan_id": 1,
            "clan_xp": "86962",
            "personal_xp": 16204,
            "clan_lifetime_xp": 120000
        }))
        .unwrap();
        assert_eq!(clan.personal_xp, 16204);
        assert_eq!(clan.extra.get("clan_lifetime_xp"), Some(&json!(120000)));

        let member: ClanMember = serde_json::from_value(json!({
            "brawlhalla_id": 3,
            "name": "bmg | mike",
            "rank": "Officer",
            "join_date": 1464221142,
            "xp": 6020,
            "last_online": 1700000000
        }))
        .unwrap();
        assert_eq!(member.rank, "Officer");
        assert_eq!(member.extra.get("last_online"), Some(&json!(1700000000)));

        // Unknown fields are written back out unchanged.
        let round_trip = serde_json::to_value(&member).unwrap();
        assert_eq!(round_trip["last_online"], json!(1700000000));
    }

    #[test]
    fn test_player_stats_deserialization() {
        let stats: PlayerStats = serde_json::from_value(player_stats_payload()).unwrap();

        assert_eq!(stats.brawlhalla_id.as_u64(), 2);
        assert_eq!(stats.level, 47);
        assert_eq!(stats.losses(), 124);
        assert_eq!(stats.legends.len(), 2);
        assert_eq!(stats.legends[0].legend_name_key, "cassidy");
        assert_eq!(stats.legends[0].extra["damagedealt"], json!("8429"));
        assert_eq!(stats.most_played_legend().unwrap().legend_id, LegendId::new(23));

        let clan = stats.clan.as_ref().unwrap();
        assert_eq!(clan.clan_id, ClanId::new(1));
        assert_eq!(clan.clan_xp, "86962");

        // Unmodelled fields survive.
        assert_eq!(stats.extra["damagebomb"], json!("2317"));
    }

    #[test]
    fn test_player_stats_without_clan_or_legends() {
        let stats: PlayerStats =
            serde_json::from_value(json!({"brawlhalla_id": 9, "name": "new"})).unwrap();
        assert!(stats.clan.is_none());
        assert!(stats.legends.is_empty());
        assert!(stats.most_played_legend().is_none());
        assert_eq!(stats.losses(), 0);
    }

    #[test]
    fn test_player_ranked_deserialization() {
        let ranked: PlayerRanked = serde_json::from_value(player_ranked_payload()).unwrap();

        assert_eq!(ranked.name, "bmg | dan");
        assert_eq!(ranked.region, "US-E");
        assert_eq!(
            ranked.tier().unwrap(),
            Tier::Ranked {
                rank: Rank::Platinum,
                division: 2
            }
        );
        assert_eq!(ranked.legends[0].tier().unwrap().rank(), Some(Rank::Platinum));

        assert_eq!(ranked.teams.len(), 1);
        let team = &ranked.teams[0];
        assert_eq!(team.brawlhalla_id_one, BrawlhallaId::new(1));
        assert_eq!(team.teamname, "bmg | mike+bmg | dan");
        assert_eq!(team.tier().unwrap().division(), Some(4));
        assert_eq!(team.extra["region"], json!(2));
    }

    #[test]
    fn test_bad_tier_surfaces_on_access_only() {
        let mut payload = player_ranked_payload();
        payload["tier"] = json!("Valhallan");

        let ranked: PlayerRanked = serde_json::from_value(payload).unwrap();
        assert_eq!(ranked.tier_str(), "Valhallan");
        assert!(ranked.tier().is_err());
    }

    #[test]
    fn test_player_ranked_serializes_teams_as_2v2() {
        let ranked: PlayerRanked = serde_json::from_value(player_ranked_payload()).unwrap();
        let back = serde_json::to_value(&ranked).unwrap();
        assert!(back.get("2v2").is_some());
        assert!(back.get("teams").is_none());
    }

    #[test]
    fn test_clan_deserialization() {
        let clan: Clan = serde_json::from_value(json!({
            "clan_id": 1,
            "clan_name": "Blue Mammoth Games",
            "clan_create_date": 1464206400,
            "clan_xp": "86962",
            "clan": [
                {
                    "brawlhalla_id": 3,
                    "name": "bmg | mike",
                    "rank": "Officer",
                    "join_date": 1464221142,
                    "xp": 6020
                },
                {
                    "brawlhalla_id": 2,
                    "name": "bmg | dan",
                    "rank": "Leader",
                    "join_date": 1464206400,
                    "xp": 16204
                }
            ]
        }))
        .unwrap();

        assert_eq!(clan.members.len(), 2);
        assert_eq!(clan.leader().unwrap().name, "bmg | dan");
        assert_eq!(clan.clan_create_date, 1464206400);
    }

    #[test]
    fn test_legend_info_deserialization() {
        let legend: LegendInfo = serde_json::from_value(json!({
            "legend_id": 3,
            "legend_name_key": "bodvar",
            "bio_name": "B\u{f6}dvar",
            "bio_aka": "The Unconquered Viking, The Great Bear",
            "bio_quote": "\"I am Bödvar...\"",
            "weapon_one": "Hammer",
            "weapon_two": "Sword",
            "strength": "6",
            "dexterity": "6",
            "defense": "5",
            "speed": "5"
        }))
        .unwrap();

        assert_eq!(legend.legend_id, LegendId::new(3));
        assert_eq!(legend.bio_name, "Bödvar");
        assert_eq!(legend.weapon_two, "Sword");
        assert_eq!(legend.strength, "6");
        assert!(legend.extra.contains_key("bio_quote"));
    }

    #[test]
    fn test_ranking_entries_for_both_brackets() {
        let solo: RankingEntry = serde_json::from_value(json!({
            "rank": "1",
            "name": "Sandstorm",
            "brawlhalla_id": 1,
            "best_legend": 6,
            "best_legend_games": 1000,
            "best_legend_wins": 900,
            "rating": 2800,
            "tier": "Diamond",
            "games": 1200,
            "wins": 1000,
            "region": "US-E",
            "peak_rating": 2900
        }))
        .unwrap();
        assert_eq!(solo.display_name(), "Sandstorm");
        assert_eq!(solo.tier().unwrap(), Tier::Diamond);
        assert!(solo.teamname.is_none());
        assert_eq!(solo.extra["best_legend"], json!(6));

        let duo: RankingEntry = serde_json::from_value(json!({
            "rank": "3",
            "teamname": "a+b",
            "brawlhalla_id_one": 10,
            "brawlhalla_id_two": 11,
            "rating": 2400,
            "tier": "Platinum 5",
            "wins": 50,
            "games": 60,
            "region": "EU",
            "peak_rating": 2410
        }))
        .unwrap();
        assert_eq!(duo.display_name(), "a+b");
        assert_eq!(duo.brawlhalla_id_two, Some(BrawlhallaId::new(11)));
        assert!(duo.name.is_none());

        let back = serde_json::to_value(&duo).unwrap();
        assert!(back.get("name").is_none());
    }
}
