use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Inputs that change which hotkeys are shown
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub editing_radius: bool,
    pub can_open_links: bool,
    pub can_copy_links: bool,
    pub has_results: bool,
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    if ctx.editing_radius {
        return vec![
            key("0-9"),
            Span::raw(":Type  "),
            key("Backspace"),
            Span::raw(":Delete  "),
            key("Enter"),
            Span::raw(":Apply  "),
            key("Esc"),
            Span::raw(":Cancel"),
        ];
    }

    let mut spans = vec![
        key("+/-"),
        Span::raw(":Radius  "),
        key("e"),
        Span::raw(":Edit radius  "),
    ];

    if ctx.has_results {
        if ctx.vim_mode {
            spans.extend(vec![
                key("hjkl"),
                Span::raw(":Select  "),
                key("gg/G"),
                Span::raw(":First/Last  "),
            ]);
        } else {
            spans.extend(vec![key("←↑↓→"), Span::raw(":Select  ")]);
        }

        // Link actions only when a command is configured
        if ctx.can_open_links {
            spans.extend(vec![key("o"), Span::raw(":View on Map  ")]);
        }
        if ctx.can_copy_links {
            spans.extend(vec![key("c"), Span::raw(":Copy link  ")]);
        }
    }

    spans.extend(vec![
        key("r"),
        Span::raw(":Refresh  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    spans
}

/// Build the legend paragraph
pub fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    Paragraph::new(Line::from(build_hotkey_spans(ctx)))
        .block(Block::default().borders(Borders::ALL).title(" Hotkeys "))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Required legend height for the terminal width, borders included
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count without the block; line_count() misjudges bordered paragraphs
    let paragraph =
        Paragraph::new(Line::from(build_hotkey_spans(ctx))).wrap(Wrap { trim: false });
    let line_count = paragraph.line_count(terminal_width.saturating_sub(2));

    (line_count as u16).saturating_add(2).max(3)
}
