// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, radius, cards, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Static page chrome ("Nearby Shops Finder")
// - radius_input: Radius field with edit cursor
// - message: Error / loading / empty line
// - shop_cards: Wrapping grid of shop cards
// - legend: Renders hotkey legend
// - status_bar: Location, radius, result count, last update
// - toast: Renders toast notifications (brief pop-up messages)

pub mod header;
pub mod layout;
pub mod legend;
pub mod message;
pub mod radius_input;
pub mod render;
pub mod shop_cards;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
