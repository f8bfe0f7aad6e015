//! Radius Input UI
//!
//! Renders the radius field. While editing, the typed text is shown with a
//! blinking cursor; otherwise the current radius is shown with its bounds.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::radius::{MAX_RADIUS, MIN_RADIUS, RADIUS_STEP};

pub const RADIUS_LABEL: &str = "Enter radius (in meters): ";

/// Render the radius field
///
/// # Arguments
/// - `radius`: Radius currently in use
/// - `editing`: Text being typed, if the field is in edit mode
pub fn render_radius_input(f: &mut Frame, area: Rect, radius: u32, editing: Option<&str>) {
    let active = editing.is_some();
    let title = if active {
        format!(" Radius (now {} m) - Enter to apply, Esc to cancel ", radius)
    } else {
        " Radius ".to_string()
    };
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let hint = Span::styled(
        format!("   [{}-{}, step {}]", MIN_RADIUS, MAX_RADIUS, RADIUS_STEP),
        Style::default().fg(Color::DarkGray),
    );

    let line = match editing {
        Some(text) => Line::from(vec![
            Span::raw(RADIUS_LABEL),
            Span::styled(text.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            hint,
        ]),
        None => Line::from(vec![
            Span::raw(RADIUS_LABEL),
            Span::styled(
                radius.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            hint,
        ]),
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
