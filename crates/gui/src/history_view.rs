//! Match history table with result filters

use std::fs;
use std::io;

use iced::widget::{button, column, horizontal_rule, row, scrollable, text, vertical_space};
use iced::{Element, Length};
use match_core::{filter, HistoryFilter, MatchRecord, MatchStore};
use tracing::warn;

/// History as last read from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryState {
    /// No history file exists yet
    NoFile,
    Loaded(Vec<MatchRecord>),
    /// The file exists but could not be read
    Failed(String),
}

impl HistoryState {
    pub fn load(store: &MatchStore) -> Self {
        match fs::metadata(store.path()) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => return HistoryState::NoFile,
            Err(e) => {
                warn!(path = %store.path().display(), "failed to inspect history: {}", e);
                return HistoryState::Failed(format!("Failed to load match history: {}", e));
            }
            Ok(_) => {}
        }
        match store.load_all() {
            Ok(records) => HistoryState::Loaded(records),
            Err(e) => {
                warn!(path = %store.path().display(), "failed to load history: {}", e);
                HistoryState::Failed(format!("Failed to load match history: {}", e))
            }
        }
    }

    /// Records to show, or the message explaining why there are none
    pub fn records(&self) -> Result<&[MatchRecord], String> {
        match self {
            HistoryState::NoFile => Err("No match data found!".to_string()),
            HistoryState::Loaded(records) if records.is_empty() => {
                Err("No match history available!".to_string())
            }
            HistoryState::Loaded(records) => Ok(records.as_slice()),
            HistoryState::Failed(msg) => Err(msg.clone()),
        }
    }
}

/// Messages for the history view
#[derive(Debug, Clone)]
pub enum HistoryMessage {
    FilterSelected(HistoryFilter),
    Refresh,
}

/// Render the history view
pub fn history_view(state: &HistoryState, active: HistoryFilter) -> Element<'_, HistoryMessage> {
    let title = text(format!("Match History - {}", active)).size(24);

    let mut filter_row = row![].spacing(5);
    for option in HistoryFilter::ALL {
        let label = match option {
            HistoryFilter::All => "Show All Matches",
            HistoryFilter::Wins => "Show Only Wins",
            HistoryFilter::Overtime => "Show Only Overtime",
        };
        filter_row = filter_row.push(
            button(text(label).size(13))
                .on_press(HistoryMessage::FilterSelected(option))
                .style(if option == active {
                    button::primary
                } else {
                    button::secondary
                }),
        );
    }
    filter_row = filter_row.push(
        button(text("Refresh").size(13))
            .on_press(HistoryMessage::Refresh)
            .style(button::secondary),
    );

    let body: Element<'_, HistoryMessage> = match state.records() {
        Ok(records) => history_table(filter(records, active)),
        Err(msg) => text(msg).size(14).into(),
    };

    column![
        title,
        vertical_space().height(10),
        filter_row,
        vertical_space().height(15),
        body,
    ]
    .spacing(5)
    .padding(20)
    .into()
}

fn history_table(records: Vec<MatchRecord>) -> Element<'static, HistoryMessage> {
    let header = row![
        text("Map").width(Length::FillPortion(2)),
        text("T Rounds").width(Length::FillPortion(1)),
        text("CT Rounds").width(Length::FillPortion(1)),
        text("Result").width(Length::FillPortion(2)),
    ]
    .spacing(10);

    let mut rows = column![header, horizontal_rule(1)].spacing(5);

    for record in records {
        rows = rows.push(
            row![
                text(record.map).width(Length::FillPortion(2)),
                text(record.t_rounds.to_string()).width(Length::FillPortion(1)),
                text(record.ct_rounds.to_string()).width(Length::FillPortion(1)),
                text(record.result.label()).width(Length::FillPortion(2)),
            ]
            .spacing(10),
        );
    }

    scrollable(rows).height(Length::Fill).into()
}
