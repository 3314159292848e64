//! Mood attached to every journal entry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Five ordered moods, worst first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Awful,
    Bad,
    #[default]
    Okay,
    Good,
    Great,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Awful, Mood::Bad, Mood::Okay, Mood::Good, Mood::Great];

    /// Rank from 1 (awful) to 5 (great)
    pub fn rank(&self) -> u8 {
        match self {
            Mood::Awful => 1,
            Mood::Bad => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Great => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Awful => "awful",
            Mood::Bad => "bad",
            Mood::Okay => "okay",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "awful" | "1" => Ok(Mood::Awful),
            "bad" | "2" => Ok(Mood::Bad),
            "okay" | "ok" | "3" => Ok(Mood::Okay),
            "good" | "4" => Ok(Mood::Good),
            "great" | "5" => Ok(Mood::Great),
            _ => Err(s.to_string()),
        }
    }
}
