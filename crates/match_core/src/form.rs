//! Save-form state and the two-step overtime flow
//!
//! Saving a match is split into `submit`, which validates the fields, and
//! for overtime matches a second `resolve` step once the winner is known.
//! The caller holds a [`SaveFlow`] between the two steps.

use crate::classify::classify;
use crate::error::InputError;
use crate::types::{MatchRecord, Side};

/// Raw form fields as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchForm {
    pub map: String,
    pub t_rounds: String,
    pub ct_rounds: String,
    pub overtime: bool,
}

/// Outcome of a successful `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Ready to append
    Ready(MatchRecord),
    /// Needs the overtime winner before a record can be built
    AwaitingOvertimeWinner(PendingMatch),
}

/// A validated overtime match waiting for its winner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMatch {
    map: String,
    t_rounds: u32,
    ct_rounds: u32,
}

/// Where the save flow currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveFlow {
    #[default]
    Editing,
    AwaitingOvertimeWinner(PendingMatch),
}

impl MatchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the fields and classify the match.
    pub fn submit(&self) -> Result<Submission, InputError> {
        let t_rounds = parse_rounds(&self.t_rounds)?;
        let ct_rounds = parse_rounds(&self.ct_rounds)?;

        let map = self.map.trim();
        if map.is_empty() || t_rounds < 0 || ct_rounds < 0 {
            return Err(InputError::InvalidMatchData);
        }
        let t_rounds = u32::try_from(t_rounds).map_err(|_| InputError::InvalidMatchData)?;
        let ct_rounds = u32::try_from(ct_rounds).map_err(|_| InputError::InvalidMatchData)?;

        if self.overtime {
            return Ok(Submission::AwaitingOvertimeWinner(PendingMatch {
                map: map.to_string(),
                t_rounds,
                ct_rounds,
            }));
        }

        let result = classify(t_rounds, ct_rounds, false, None);
        Ok(Submission::Ready(MatchRecord::new(map, t_rounds, ct_rounds, result)))
    }

    /// Clear every field and uncheck overtime
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl PendingMatch {
    pub fn map(&self) -> &str {
        &self.map
    }

    /// Build the record from the user's answer to "who won in overtime".
    pub fn resolve(&self, answer: &str) -> Result<MatchRecord, InputError> {
        let winner: Side = answer
            .parse()
            .map_err(|_| InputError::InvalidOvertimeWinner)?;
        let result = classify(self.t_rounds, self.ct_rounds, true, Some(winner));
        Ok(MatchRecord::new(&self.map, self.t_rounds, self.ct_rounds, result))
    }
}

/// Integers only; range is checked separately so "-3" reads as bad data.
fn parse_rounds(field: &str) -> Result<i64, InputError> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::RoundsNotInteger)
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
