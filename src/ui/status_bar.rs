use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::formatting::format_radius;
use crate::model::{FinderModel, LocationStatus};

/// Build the status bar text (extracted for testability)
pub fn build_status_text(finder: &FinderModel) -> String {
    let location = match (finder.location_status, finder.location) {
        (LocationStatus::Resolved, Some(loc)) => format!("{:.4}, {:.4}", loc.lat, loc.lon),
        (LocationStatus::Pending, _) => "Locating...".to_string(),
        (LocationStatus::Failed, _) => "Unavailable".to_string(),
        (LocationStatus::Unsupported, _) => "Unsupported".to_string(),
        (LocationStatus::Resolved, None) => "-".to_string(),
    };

    let updated = finder
        .last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "Location: {} │ Radius: {} │ Shops: {} │ Updated: {}",
        location,
        format_radius(finder.radius),
        finder.shops.len(),
        updated
    )
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, finder: &FinderModel) {
    let line = Line::from(vec![Span::raw(build_status_text(finder))]);

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    #[test]
    fn test_status_while_locating() {
        let finder = FinderModel::new(1000);
        assert_eq!(
            build_status_text(&finder),
            "Location: Locating... │ Radius: 1000 m (1.0 km) │ Shops: 0 │ Updated: -"
        );
    }

    #[test]
    fn test_status_with_location() {
        let mut finder = FinderModel::new(300);
        finder.location = Some(Location { lat: 48.137154, lon: 11.576124 });
        finder.location_status = LocationStatus::Resolved;
        let text = build_status_text(&finder);
        assert!(text.starts_with("Location: 48.1372, 11.5761 │ Radius: 300 m"));
    }
}
