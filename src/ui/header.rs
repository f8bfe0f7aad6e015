use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// App title shown in the shell header
pub const APP_TITLE: &str = "Nearby Shops Finder";

/// Widget heading inside the header
pub const WIDGET_HEADING: &str = "Nearby Shops";

/// Render the static page header
pub fn render_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(format!(" {} ", APP_TITLE)).centered())
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let heading = Paragraph::new(Line::from(WIDGET_HEADING))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(block);

    f.render_widget(heading, area);
}
