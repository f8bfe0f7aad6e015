//! Shop Cards UI
//!
//! Renders one bordered card per shop in a centered, wrapping grid. The
//! grid scrolls by whole rows so the selected card is always visible.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Shop;
use crate::logic::formatting::{
    format_coordinates, shop_display_name, shop_type_label, truncate_to_width,
};
use crate::logic::layout::{calculate_grid_window, CARD_GAP, CARD_HEIGHT, CARD_WIDTH};

/// Build the text lines inside a card
pub fn card_lines(shop: &Shop, inner_width: usize) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);

    vec![
        Line::from(vec![
            Span::styled("Type: ", label),
            Span::raw(truncate_to_width(
                shop_type_label(shop),
                inner_width.saturating_sub(6),
            )),
        ]),
        Line::from(vec![
            Span::styled("Location: ", label),
            Span::styled(
                "View on Map",
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(vec![
            Span::styled("Coordinates: ", label),
            Span::raw(format_coordinates(shop.lat, shop.lon)),
        ]),
    ]
}

/// Render the card grid
///
/// `dimmed` draws the cards greyed out (stale results under a loading
/// indicator). Returns the number of columns used, for row navigation.
pub fn render_shop_cards(
    f: &mut Frame,
    area: Rect,
    shops: &[Shop],
    selected: Option<usize>,
    dimmed: bool,
) -> usize {
    let window = calculate_grid_window(area.width, area.height, shops.len(), selected);
    if shops.is_empty() {
        return window.columns;
    }

    let card_width = CARD_WIDTH.min(area.width);
    let used_width = window.columns as u16 * card_width
        + (window.columns as u16).saturating_sub(1) * CARD_GAP;
    let left = area.x + area.width.saturating_sub(used_width) / 2;

    let range = window.card_range(shops.len());
    let first = range.start;

    for idx in range {
        let slot = idx - first;
        let row = (slot / window.columns) as u16;
        let col = (slot % window.columns) as u16;

        let y = area.y + row * CARD_HEIGHT;
        let height = CARD_HEIGHT.min((area.y + area.height).saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect {
            x: left + col * (card_width + CARD_GAP),
            y,
            width: card_width,
            height,
        };

        render_card(f, card_area, &shops[idx], selected == Some(idx), dimmed);
    }

    window.columns
}

fn render_card(f: &mut Frame, area: Rect, shop: &Shop, is_selected: bool, dimmed: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let border_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = truncate_to_width(shop_display_name(shop), inner_width.saturating_sub(2));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(format!(" {} ", title)).centered())
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let mut paragraph = Paragraph::new(card_lines(shop, inner_width)).block(block);
    if dimmed {
        paragraph = paragraph.style(Style::default().fg(Color::DarkGray));
    }

    f.render_widget(paragraph, area);
}
