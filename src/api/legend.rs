//! Legend catalogue.

use crate::api::ids::LegendId;
use crate::error::BrawlhallaError;
use std::fmt;
use std::str::FromStr;

/// Legends known to this client, keyed by their API legend ID.
///
/// Legends released later are still reachable through a raw [`LegendId`];
/// anything that takes a legend accepts `impl Into<LegendId>`.
///
/// # Examples
///
/// ```rust
/// use brawlhalla::{Legend, LegendId};
///
/// assert_eq!(Legend::Azoth.id(), LegendId::new(23));
/// assert_eq!("lord vraxx".parse::<Legend>().unwrap(), Legend::LordVraxx);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Legend {
    Bodvar,
    Cassidy,
    Orion,
    LordVraxx,
    Gnash,
    QueenNai,
    Lucien,
    Hattori,
    SirRoland,
    Scarlet,
    Thatch,
    Ada,
    Sentinel,
    Teros,
    Ember,
    Brynn,
    Asuri,
    Barraza,
    Ulgrim,
    Azoth,
    Koji,
    Diana,
    Jhala,
    Kor,
    WuShang,
    Val,
    Ragnir,
    Cross,
    Mirage,
    Nix,
    Mordex,
    Yumiko,
    Artemis,
    Caspian,
}

impl Legend {
    pub const ALL: [Legend; 34] = [
        Legend::Bodvar,
        Legend::Cassidy,
        Legend::Orion,
        Legend::LordVraxx,
        Legend::Gnash,
        Legend::QueenNai,
        Legend::Lucien,
        Legend::Hattori,
        Legend::SirRoland,
        Legend::Scarlet,
        Legend::Thatch,
        Legend::Ada,
        Legend::Sentinel,
        Legend::Teros,
        Legend::Ember,
        Legend::Brynn,
        Legend::Asuri,
        Legend::Barraza,
        Legend::Ulgrim,
        Legend::Azoth,
        Legend::Koji,
        Legend::Diana,
        Legend::Jhala,
        Legend::Kor,
        Legend::WuShang,
        Legend::Val,
        Legend::Ragnir,
        Legend::Cross,
        Legend::Mirage,
        Legend::Nix,
        Legend::Mordex,
        Legend::Yumiko,
        Legend::Artemis,
        Legend::Caspian,
    ];

    /// API legend ID. There are no legends 17 or 27.
    pub fn id(&self) -> LegendId {
        let id = match self {
            Legend::Bodvar => 3,
            Legend::Cassidy => 4,
            Legend::Orion => 5,
            Legend::LordVraxx => 6,
            Legend::Gnash => 7,
            Legend::QueenNai => 8,
            Legend::Lucien => 9,
            Legend::Hattori => 10,
            Legend::SirRoland => 11,
            Legend::Scarlet => 12,
            Legend::Thatch => 13,
            Legend::Ada => 14,
            Legend::Sentinel => 15,
            Legend::Teros => 16,
            Legend::Ember => 18,
            Legend::Brynn => 19,
            Legend::Asuri => 20,
            Legend::Barraza => 21,
            Legend::Ulgrim => 22,
            Legend::Azoth => 23,
            Legend::Koji => 24,
            Legend::Diana => 25,
            Legend::Jhala => 26,
            Legend::Kor => 28,
            Legend::WuShang => 29,
            Legend::Val => 30,
            Legend::Ragnir => 31,
            Legend::Cross => 32,
            Legend::Mirage => 33,
            Legend::Nix => 34,
            Legend::Mordex => 35,
            Legend::Yumiko => 36,
            Legend::Artemis => 37,
            Legend::Caspian => 38,
        };
        LegendId::new(id)
    }

    /// Look a legend up by its API ID.
    pub fn from_id(id: LegendId) -> Option<Self> {
        Self::ALL.into_iter().find(|legend| legend.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Legend::Bodvar => "Bödvar",
            Legend::Cassidy => "Cassidy",
            Legend::Orion => "Orion",
            Legend::LordVraxx => "Lord Vraxx",
            Legend::Gnash => "Gnash",
            Legend::QueenNai => "Queen Nai",
            Legend::Lucien => "Lucien",
            Legend::Hattori => "Hattori",
            Legend::SirRoland => "Sir Roland",
            Legend::Scarlet => "Scarlet",
            Legend::Thatch => "Thatch",
            Legend::Ada => "Ada",
            Legend::Sentinel => "Sentinel",
            Legend::Teros => "Teros",
            Legend::Ember => "Ember",
            Legend::Brynn => "Brynn",
            Legend::Asuri => "Asuri",
            Legend::Barraza => "Barraza",
            Legend::Ulgrim => "Ulgrim",
            Legend::Azoth => "Azoth",
            Legend::Koji => "Koji",
            Legend::Diana => "Diana",
            Legend::Jhala => "Jhala",
            Legend::Kor => "Kor",
            Legend::WuShang => "Wu Shang",
            Legend::Val => "Val",
            Legend::Ragnir => "Ragnir",
            Legend::Cross => "Cross",
            Legend::Mirage => "Mirage",
            Legend::Nix => "Nix",
            Legend::Mordex => "Mordex",
            Legend::Yumiko => "Yumiko",
            Legend::Artemis => "Artemis",
            Legend::Caspian => "Caspian",
        }
    }
}

impl From<Legend> for LegendId {
    fn from(legend: Legend) -> Self {
        legend.id()
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase ASCII letters only, with "ö" folded to "o".
fn normalize(s: &str) -> String {
    s.chars()
        .map(|c| if c == 'ö' || c == 'Ö' { 'o' } else { c })
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Legend {
    type Err = BrawlhallaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|legend| normalize(legend.name()) == wanted)
            .ok_or_else(|| BrawlhallaError::InvalidLegend {
                name: s.to_string(),
            })
    }
}

/// A legend given either by name or by numeric ID, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendArg(pub LegendId);

impl FromStr for LegendArg {
    type Err = BrawlhallaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.trim().parse::<u32>() {
            return Ok(Self(LegendId::new(id)));
        }
        Ok(Self(s.parse::<Legend>()?.id()))
    }
}

impl From<LegendArg> for LegendId {
    fn from(arg: LegendArg) -> Self {
        arg.0
    }
}
