use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Page header (shell chrome)
    pub header_area: Rect,
    /// Radius input field
    pub radius_area: Rect,
    /// One line for error / loading / empty text
    pub message_area: Rect,
    /// Card grid
    pub cards_area: Rect,
    /// Map link of the selected card
    pub link_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(3),             // Radius input
            Constraint::Length(1),             // Message line
            Constraint::Min(3),                // Cards
            Constraint::Length(1),             // Selected map link
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        radius_area: chunks[1],
        message_area: chunks[2],
        cards_area: chunks[3],
        link_area: chunks[4],
        legend_area: chunks[5],
        status_area: chunks[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_vertically() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40), 3);
        assert_eq!(info.header_area.height, 3);
        assert_eq!(info.radius_area.y, 3);
        assert_eq!(info.message_area.y, 6);
        assert_eq!(info.cards_area.y, 7);
        assert_eq!(info.status_area.y + info.status_area.height, 40);
        // 40 - (3 + 3 + 1 + 1 + 3 + 3)
        assert_eq!(info.cards_area.height, 26);
    }
}
