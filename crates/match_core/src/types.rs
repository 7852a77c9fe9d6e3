//! Match records and the labels stored with them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maps offered by the form when no configuration overrides them
pub const MAP_POOL: [&str; 7] = [
    "Mirage", "Inferno", "Nuke", "Dust 2", "Vertigo", "Ancient", "Anubis",
];

/// One of the two sides in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    T,
    CT,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::T => write!(f, "T"),
            Side::CT => write!(f, "CT"),
        }
    }
}

/// Error returned when text does not name a side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError(pub String);

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a side: {:?}", self.0)
    }
}

impl std::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    /// Surrounding whitespace is ignored, case is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "T" => Ok(Side::T),
            "CT" => Ok(Side::CT),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

/// Result label of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "Win")]
    Win,
    #[serde(rename = "Loss")]
    Loss,
    #[serde(rename = "Overtime Win (T)")]
    OvertimeWinT,
    #[serde(rename = "Overtime Win (CT)")]
    OvertimeWinCt,
    #[serde(rename = "Overtime Loss")]
    OvertimeLoss,
    #[serde(rename = "Overtime Win")]
    OvertimeWin,
}

impl MatchOutcome {
    /// The label exactly as it appears in the history file
    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "Win",
            MatchOutcome::Loss => "Loss",
            MatchOutcome::OvertimeWinT => "Overtime Win (T)",
            MatchOutcome::OvertimeWinCt => "Overtime Win (CT)",
            MatchOutcome::OvertimeLoss => "Overtime Loss",
            MatchOutcome::OvertimeWin => "Overtime Win",
        }
    }

    /// Substring test on the label, so every overtime win counts too
    pub fn is_win(&self) -> bool {
        self.label().contains("Win")
    }

    pub fn is_overtime(&self) -> bool {
        self.label().contains("Overtime")
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recorded match, one row of the history file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Map")]
    pub map: String,
    #[serde(rename = "T Rounds")]
    pub t_rounds: u32,
    #[serde(rename = "CT Rounds")]
    pub ct_rounds: u32,
    #[serde(rename = "Result")]
    pub result: MatchOutcome,
}

impl MatchRecord {
    pub fn new(map: &str, t_rounds: u32, ct_rounds: u32, result: MatchOutcome) -> Self {
        Self {
            map: map.to_string(),
            t_rounds,
            ct_rounds,
            result,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
