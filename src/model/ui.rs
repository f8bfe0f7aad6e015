//! UI Model
//!
//! State that only matters to the terminal front end: which card is
//! selected, the radius edit buffer, toasts and preferences.

use std::time::Instant;

use crate::logic::formatting::DEFAULT_MAP_URL_BASE;

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// hjkl / g / G navigation
    pub vim_mode: bool,

    /// Map viewer root for deep links
    pub map_url_base: String,

    /// Whether an open command is configured (legend shows `o`)
    pub can_open_links: bool,

    /// Whether a clipboard command is configured (legend shows `c`)
    pub can_copy_links: bool,

    // ============================================
    // WIDGETS
    // ============================================
    /// Selected card index into `finder.shops`
    pub selected_card: Option<usize>,

    /// Radius text being typed (Some while editing)
    pub radius_edit: Option<String>,

    /// Cards per row at the last render, used for row-wise movement
    pub grid_columns: usize,

    /// Transient feedback for link actions, with the time it was shown
    pub toast_message: Option<(String, Instant)>,

    /// Set by q / Esc / Ctrl-C; the run loop exits on the next frame
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            map_url_base: DEFAULT_MAP_URL_BASE.to_string(),
            can_open_links: false,
            can_copy_links: false,
            selected_card: None,
            radius_edit: None,
            grid_columns: 1,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn is_editing_radius(&self) -> bool {
        self.radius_edit.is_some()
    }

    /// Replace any visible toast
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// True once the toast has been visible for the full duration
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .is_some_and(|(_, shown_at)| {
                crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
            })
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
