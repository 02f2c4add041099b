//! Ladder selectors for the `rankings` endpoint.

use crate::error::BrawlhallaError;
use std::fmt;
use std::str::FromStr;

/// Ranked queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bracket {
    #[default]
    OneVOne,
    TwoVTwo,
}

impl Bracket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bracket::OneVOne => "1v1",
            Bracket::TwoVTwo => "2v2",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bracket {
    type Err = BrawlhallaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1v1" => Ok(Bracket::OneVOne),
            "2v2" => Ok(Bracket::TwoVTwo),
            _ => Err(BrawlhallaError::InvalidBracket {
                bracket: s.to_string(),
            }),
        }
    }
}

/// Server region. `All` is the global ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    All,
    UsEast,
    Europe,
    SoutheastAsia,
    Brazil,
    Australia,
    UsWest,
    Japan,
    SouthAfrica,
    MiddleEast,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::All,
        Region::UsEast,
        Region::Europe,
        Region::SoutheastAsia,
        Region::Brazil,
        Region::Australia,
        Region::UsWest,
        Region::Japan,
        Region::SouthAfrica,
        Region::MiddleEast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::All => "all",
            Region::UsEast => "us-e",
            Region::Europe => "eu",
            Region::SoutheastAsia => "sea",
            Region::Brazil => "brz",
            Region::Australia => "aus",
            Region::UsWest => "us-w",
            Region::Japan => "jpn",
            Region::SouthAfrica => "sa",
            Region::MiddleEast => "me",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = BrawlhallaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| BrawlhallaError::InvalidRegion {
                region: s.to_string(),
            })
    }
}
