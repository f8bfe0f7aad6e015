use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::Display;

pub const LOADING_TEXT: &str = "Loading shops...";
pub const EMPTY_TEXT: &str = "No shops found nearby.";

/// Text and style for the message line, if the display condition has one
pub fn message_line(display: &Display<'_>) -> Option<(&'static str, Style)> {
    match display {
        Display::Error(text) => Some((
            *text,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Display::Loading { .. } => Some((LOADING_TEXT, Style::default().fg(Color::Yellow))),
        Display::Empty => Some((EMPTY_TEXT, Style::default().fg(Color::Gray))),
        Display::Results(_) => None,
    }
}

/// Render the error / loading / empty line
pub fn render_message(f: &mut Frame, area: Rect, display: &Display<'_>) {
    let Some((text, style)) = message_line(display) else {
        return;
    };

    let paragraph = Paragraph::new(Line::from(text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
