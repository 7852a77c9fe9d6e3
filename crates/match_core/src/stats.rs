//! History filtering and win aggregation

use std::collections::BTreeMap;
use std::fmt;

use crate::types::MatchRecord;

/// Which subset of the history to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    /// Any result whose label contains "Win"
    Wins,
    /// Any result whose label contains "Overtime"
    Overtime,
}

impl HistoryFilter {
    pub const ALL: [HistoryFilter; 3] =
        [HistoryFilter::All, HistoryFilter::Wins, HistoryFilter::Overtime];

    pub fn matches(&self, record: &MatchRecord) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Wins => record.result.is_win(),
            HistoryFilter::Overtime => record.result.is_overtime(),
        }
    }
}

impl fmt::Display for HistoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryFilter::All => write!(f, "All"),
            HistoryFilter::Wins => write!(f, "Wins"),
            HistoryFilter::Overtime => write!(f, "Overtime"),
        }
    }
}

/// Records matching the filter, in their original order
pub fn filter(records: &[MatchRecord], filter: HistoryFilter) -> Vec<MatchRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Number of wins recorded on each map
pub fn count_wins_by_map(records: &[MatchRecord]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for record in records.iter().filter(|r| r.result.is_win()) {
        *counts.entry(record.map.clone()).or_insert(0) += 1;
    }
    counts
}

/// Win counts as chart bars, most wins first
pub fn win_chart(records: &[MatchRecord]) -> Vec<(String, u32)> {
    let mut bars: Vec<_> = count_wins_by_map(records).into_iter().collect();
    // BTreeMap order already breaks ties by map name; the sort is stable.
    bars.sort_by(|a, b| b.1.cmp(&a.1));
    bars
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
