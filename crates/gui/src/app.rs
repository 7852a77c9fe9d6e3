//! Main application state and logic

use crate::chart_view::chart_view;
use crate::history_view::{self, HistoryMessage, HistoryState};
use crate::record_view::{self, RecordMessage};
use crate::styles;

use iced::widget::{button, column, combo_box, container, horizontal_rule, row, text};
use iced::{Element, Task, Theme};
use match_core::{
    HistoryFilter, MatchForm, MatchRecord, MatchStore, SaveFlow, Submission, TrackerConfig,
    CONFIG_FILE,
};
use tracing::{error, info, warn};

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Record,
    History,
    Chart,
}

/// Feedback shown under the tabs after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

/// Main application state
pub struct TrackerApp {
    /// Current tab
    tab: Tab,
    /// Maps suggested by the editable map box
    map_options: combo_box::State<String>,
    /// Backing history file
    store: MatchStore,
    /// Form fields
    form: MatchForm,
    /// Whether a save is waiting on the overtime winner
    save_flow: SaveFlow,
    /// Answer typed into the overtime prompt
    overtime_answer: String,
    /// Last loaded history
    history: HistoryState,
    history_filter: HistoryFilter,
    notice: Option<Notice>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    TabSelected(Tab),

    Record(RecordMessage),
    History(HistoryMessage),
}

impl TrackerApp {
    pub fn new() -> (Self, Task<Message>) {
        let config = TrackerConfig::load_or_default(CONFIG_FILE).unwrap_or_else(|e| {
            warn!("{}, using defaults", e);
            TrackerConfig::default()
        });
        info!(data_file = %config.data_file.display(), "starting match tracker");
        (Self::with_config(config), Task::none())
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        let store = MatchStore::new(config.data_file);
        let history = HistoryState::load(&store);
        Self {
            tab: Tab::Record,
            map_options: combo_box::State::new(config.maps),
            store,
            form: MatchForm::new(),
            save_flow: SaveFlow::Editing,
            overtime_answer: String::new(),
            history,
            history_filter: HistoryFilter::All,
            notice: None,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                if tab != Tab::Record {
                    self.refresh_history();
                }
            }
            Message::Record(msg) => self.handle_record_message(msg),
            Message::History(msg) => self.handle_history_message(msg),
        }
        Task::none()
    }

    fn handle_record_message(&mut self, msg: RecordMessage) {
        match msg {
            RecordMessage::MapSelected(map) | RecordMessage::MapTyped(map) => self.form.map = map,
            RecordMessage::TRoundsChanged(s) => self.form.t_rounds = s,
            RecordMessage::CtRoundsChanged(s) => self.form.ct_rounds = s,
            RecordMessage::OvertimeToggled(checked) => self.form.overtime = checked,
            RecordMessage::Save => match self.form.submit() {
                Ok(Submission::Ready(record)) => self.persist(record),
                Ok(Submission::AwaitingOvertimeWinner(pending)) => {
                    self.overtime_answer.clear();
                    self.save_flow = SaveFlow::AwaitingOvertimeWinner(pending);
                    self.notice = None;
                }
                Err(e) => self.notice = Some(Notice::Error(e.to_string())),
            },
            RecordMessage::OvertimeAnswerChanged(s) => self.overtime_answer = s,
            RecordMessage::ConfirmOvertimeWinner => {
                if let SaveFlow::AwaitingOvertimeWinner(pending) =
                    std::mem::take(&mut self.save_flow)
                {
                    match pending.resolve(&self.overtime_answer) {
                        Ok(record) => self.persist(record),
                        Err(e) => self.notice = Some(Notice::Error(e.to_string())),
                    }
                }
            }
            RecordMessage::CancelOvertimeWinner => {
                self.save_flow = SaveFlow::Editing;
                self.notice = Some(Notice::Info("Save cancelled".to_string()));
            }
        }
    }

    fn handle_history_message(&mut self, msg: HistoryMessage) {
        match msg {
            HistoryMessage::FilterSelected(filter) => {
                self.history_filter = filter;
                self.refresh_history();
            }
            HistoryMessage::Refresh => self.refresh_history(),
        }
    }

    /// Append the record and reset the form on success
    fn persist(&mut self, record: MatchRecord) {
        match self.store.append(&record) {
            Ok(()) => {
                info!(map = %record.map, result = %record.result, "match saved");
                self.notice = Some(Notice::Success("Match saved successfully!".to_string()));
                self.form.reset();
                self.refresh_history();
            }
            Err(e) => {
                error!(path = %self.store.path().display(), "failed to save match: {}", e);
                self.notice = Some(Notice::Error(format!("Failed to save match: {}", e)));
            }
        }
    }

    fn refresh_history(&mut self) {
        self.history = HistoryState::load(&self.store);
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tabs = row![
            tab_button("Record", Tab::Record, self.tab),
            tab_button("History", Tab::History, self.tab),
            tab_button("Chart", Tab::Chart, self.tab),
        ]
        .spacing(5)
        .padding(10);

        let content: Element<'_, Message> = match self.tab {
            Tab::Record => record_view::record_view(
                &self.form,
                &self.map_options,
                &self.save_flow,
                &self.overtime_answer,
            )
            .map(Message::Record),
            Tab::History => history_view::history_view(&self.history, self.history_filter)
                .map(Message::History),
            Tab::Chart => chart_view(&self.history),
        };

        let notice: Element<'_, Message> = match &self.notice {
            Some(Notice::Success(msg)) => {
                text(msg.as_str()).size(14).color(styles::SUCCESS_TEXT).into()
            }
            Some(Notice::Info(msg)) => {
                text(msg.as_str()).size(14).color(styles::INFO_TEXT).into()
            }
            Some(Notice::Error(msg)) => {
                text(msg.as_str()).size(14).color(styles::ERROR_TEXT).into()
            }
            None => text("").size(14).into(),
        };

        column![
            tabs,
            horizontal_rule(2),
            container(notice).padding([5, 20]),
            content,
        ]
        .into()
    }
}

/// Create a tab button
fn tab_button(label: &str, tab: Tab, current: Tab) -> Element<'static, Message> {
    let is_active = tab == current;

    button(text(label.to_string()))
        .on_press(Message::TabSelected(tab))
        .style(if is_active {
            button::primary
        } else {
            button::secondary
        })
        .into()
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
