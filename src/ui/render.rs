use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{
    header, layout,
    legend::{self, LegendContext},
    message, radius_input, shop_cards, status_bar, toast,
};
use crate::logic::formatting::truncate_to_width;
use crate::model::{Display, Model};

/// Main render function - orchestrates all UI rendering
///
/// Takes `&mut Model` only to record the card grid's column count for
/// row-wise keyboard navigation.
pub fn render(f: &mut Frame, model: &mut Model) {
    let size = f.area();

    let legend_ctx = LegendContext {
        vim_mode: model.ui.vim_mode,
        editing_radius: model.ui.is_editing_radius(),
        can_open_links: model.ui.can_open_links,
        can_copy_links: model.ui.can_copy_links,
        has_results: !model.finder.shops.is_empty() && model.finder.error.is_none(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let areas = layout::calculate_layout(size, legend_height);

    header::render_header(f, areas.header_area);
    radius_input::render_radius_input(
        f,
        areas.radius_area,
        model.finder.radius,
        model.ui.radius_edit.as_deref(),
    );

    let display = model.finder.display();
    message::render_message(f, areas.message_area, &display);

    let selected = model.ui.selected_card;
    let columns = match display {
        Display::Results(shops) => {
            shop_cards::render_shop_cards(f, areas.cards_area, shops, selected, false)
        }
        Display::Loading { stale } => {
            shop_cards::render_shop_cards(f, areas.cards_area, stale, selected, true)
        }
        Display::Error(_) | Display::Empty => {
            crate::logic::layout::columns_for_width(areas.cards_area.width)
        }
    };

    if matches!(display, Display::Results(_)) {
        if let Some(link) = model.selected_map_link() {
            let text = truncate_to_width(&link, areas.link_area.width.saturating_sub(6) as usize);
            let line = Line::from(vec![
                Span::styled(" Map: ", Style::default().fg(Color::Gray)),
                Span::styled(text, Style::default().fg(Color::LightBlue)),
            ]);
            f.render_widget(Paragraph::new(line), areas.link_area);
        }
    }

    legend::render_legend(f, areas.legend_area, legend_ctx);
    status_bar::render_status_bar(f, areas.status_area, &model.finder);

    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    model.ui.grid_columns = columns;
}
