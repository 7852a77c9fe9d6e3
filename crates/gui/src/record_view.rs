//! Form for recording a new match

use crate::styles::FORM_WIDTH;
use iced::widget::{button, checkbox, column, combo_box, row, text, text_input, vertical_space};
use iced::Element;
use match_core::{MatchForm, SaveFlow};

/// Messages for the record view
#[derive(Debug, Clone)]
pub enum RecordMessage {
    MapSelected(String),
    /// Free text typed into the map box
    MapTyped(String),
    TRoundsChanged(String),
    CtRoundsChanged(String),
    OvertimeToggled(bool),
    Save,
    /// Text typed into the overtime winner prompt
    OvertimeAnswerChanged(String),
    ConfirmOvertimeWinner,
    CancelOvertimeWinner,
}

/// Render the match entry form
pub fn record_view<'a>(
    form: &'a MatchForm,
    maps: &'a combo_box::State<String>,
    flow: &'a SaveFlow,
    overtime_answer: &'a str,
) -> Element<'a, RecordMessage> {
    let title = text("Record Match").size(24);

    // The pool is only a suggestion; typed names are kept as entered
    let selected_map = if form.map.is_empty() {
        None
    } else {
        Some(&form.map)
    };
    let map_picker = combo_box(
        maps,
        "Select or type a map",
        selected_map,
        RecordMessage::MapSelected,
    )
    .on_input(RecordMessage::MapTyped)
    .width(FORM_WIDTH);

    let t_input = text_input("0", &form.t_rounds)
        .on_input(RecordMessage::TRoundsChanged)
        .width(FORM_WIDTH);

    let ct_input = text_input("0", &form.ct_rounds)
        .on_input(RecordMessage::CtRoundsChanged)
        .width(FORM_WIDTH);

    let overtime_check =
        checkbox("Overtime", form.overtime).on_toggle(RecordMessage::OvertimeToggled);

    // Save is disabled while the overtime prompt is open
    let awaiting = matches!(flow, SaveFlow::AwaitingOvertimeWinner(_));
    let save_button = button(text("Save Match")).style(button::success);
    let save_button = if awaiting {
        save_button
    } else {
        save_button.on_press(RecordMessage::Save)
    };

    let prompt: Element<'a, RecordMessage> = match flow {
        SaveFlow::Editing => vertical_space().height(0).into(),
        SaveFlow::AwaitingOvertimeWinner(pending) => column![
            text(format!("Who won in overtime on {}? (T or CT)", pending.map())).size(14),
            text_input("T or CT", overtime_answer)
                .on_input(RecordMessage::OvertimeAnswerChanged)
                .on_submit(RecordMessage::ConfirmOvertimeWinner)
                .width(FORM_WIDTH),
            row![
                button(text("Confirm"))
                    .on_press(RecordMessage::ConfirmOvertimeWinner)
                    .style(button::primary),
                button(text("Cancel"))
                    .on_press(RecordMessage::CancelOvertimeWinner)
                    .style(button::secondary),
            ]
            .spacing(10),
        ]
        .spacing(8)
        .into(),
    };

    column![
        title,
        vertical_space().height(15),
        text("Map:").size(14),
        map_picker,
        text("T Rounds Won:").size(14),
        t_input,
        text("CT Rounds Won:").size(14),
        ct_input,
        vertical_space().height(5),
        overtime_check,
        vertical_space().height(10),
        save_button,
        vertical_space().height(10),
        prompt,
    ]
    .spacing(5)
    .padding(20)
    .into()
}
