//! Ranked tier strings.
//!
//! The API encodes a ladder standing as `"<RANK> <DIVISION>"` (for example
//! `"Gold 4"`), except for the top tier which is the bare token `"Diamond"`.

use crate::error::BrawlhallaError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Highest division number accepted after a rank name.
pub const MAX_DIVISION: u8 = 5;

/// Rank names that carry a division suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Tin,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::Tin,
        Rank::Bronze,
        Rank::Silver,
        Rank::Gold,
        Rank::Platinum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Tin => "Tin",
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player's standing on the ranked ladder.
///
/// Parsing is exact: rank names are case-sensitive and separated from the
/// division by a single space.
///
/// # Examples
///
/// ```rust
/// use brawlhalla::{Rank, Tier};
///
/// let tier: Tier = "Gold 4".parse().unwrap();
/// assert_eq!(tier, Tier::Ranked { rank: Rank::Gold, division: 4 });
/// assert_eq!(Tier::Diamond.to_string(), "Diamond");
/// assert!("Diamond 3".parse::<Tier>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Ranked { rank: Rank, division: u8 },
    Diamond,
}

impl Tier {
    /// Build a divisioned tier, checking the division range.
    pub fn new(rank: Rank, division: u8) -> Option<Self> {
        (division <= MAX_DIVISION).then_some(Tier::Ranked { rank, division })
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Tier::Ranked { rank, .. } => Some(*rank),
            Tier::Diamond => None,
        }
    }

    pub fn division(&self) -> Option<u8> {
        match self {
            Tier::Ranked { division, .. } => Some(*division),
            Tier::Diamond => None,
        }
    }

    /// True when `s` is a well-formed tier string.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Tier>().is_ok()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Ranked { rank, division } => write!(f, "{} {}", rank, division),
            Tier::Diamond => f.write_str("Diamond"),
        }
    }
}

impl FromStr for Tier {
    type Err = BrawlhallaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BrawlhallaError::InvalidTier {
            tier: s.to_string(),
        };

        if s == "Diamond" {
            return Ok(Tier::Diamond);
        }

        let (name, division) = s.split_once(' ').ok_or_else(invalid)?;
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.as_str() == name)
            .ok_or_else(invalid)?;

        // Exactly one ASCII digit: rejects "+3", "03", " 3" and friends.
        let mut chars = division.chars();
        let division = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).ok_or_else(invalid)? as u8,
            _ => return Err(invalid()),
        };

        Tier::new(rank, division).ok_or_else(invalid)
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
