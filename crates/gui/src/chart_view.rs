//! Bar chart of wins per map

use crate::history_view::HistoryState;
use crate::styles::{BAR_COLOR, BAR_MAX_HEIGHT, BAR_WIDTH};
use iced::widget::{column, container, row, text, vertical_space, Space};
use iced::{Alignment, Background, Element};
use match_core::win_chart;

/// Render the chart view
pub fn chart_view<Message: 'static>(state: &HistoryState) -> Element<'static, Message> {
    let title = text("Wins per Map").size(24);

    let body: Element<'static, Message> = match state {
        HistoryState::NoFile => text("No match data found!").size(14).into(),
        HistoryState::Failed(msg) => text(msg.clone()).size(14).into(),
        HistoryState::Loaded(records) if records.is_empty() => {
            text("No data available for plotting!").size(14).into()
        }
        HistoryState::Loaded(records) => {
            let bars = win_chart(records);
            if bars.is_empty() {
                text("No wins available to display!").size(14).into()
            } else {
                bar_chart(bars)
            }
        }
    };

    column![title, vertical_space().height(20), body]
        .spacing(5)
        .padding(20)
        .into()
}

/// One vertical bar per map, scaled to the largest count
fn bar_chart<Message: 'static>(bars: Vec<(String, u32)>) -> Element<'static, Message> {
    let max = bars.iter().map(|(_, count)| *count).max().unwrap_or(1).max(1);

    let mut chart = row![].spacing(16).align_y(Alignment::End);
    for (map, count) in bars {
        let height = BAR_MAX_HEIGHT * count as f32 / max as f32;
        let bar = container(Space::new(BAR_WIDTH, height)).style(|_theme| container::Style {
            background: Some(Background::Color(BAR_COLOR)),
            ..Default::default()
        });

        chart = chart.push(
            column![text(count.to_string()).size(13), bar, text(map).size(13)]
                .spacing(4)
                .align_x(Alignment::Center),
        );
    }

    column![chart, text("Number of Wins by Map").size(12)]
        .spacing(10)
        .into()
}
