//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is split into focused sub-models:
//!
//! - **FinderModel**: Location, radius, shop results, loading and error state
//! - **UiModel**: Card selection, radius editing, toasts, preferences
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the runtime `App`
//! - All changes to `FinderModel` flow through `logic::update::update`

pub mod finder;
pub mod types;
pub mod ui;

pub use finder::FinderModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::Shop;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Search state and results
    pub finder: FinderModel,

    /// UI preferences and transient widgets
    pub ui: UiModel,
}

impl Model {
    pub fn new(radius: u32, vim_mode: bool) -> Self {
        Self {
            finder: FinderModel::new(radius),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Which of the four display conditions holds right now
    pub fn display(&self) -> Display<'_> {
        self.finder.display()
    }

    /// Currently selected shop card (if any)
    pub fn selected_shop(&self) -> Option<&Shop> {
        self.ui
            .selected_card
            .and_then(|idx| self.finder.shops.get(idx))
    }

    /// Map link of the selected card
    pub fn selected_map_link(&self) -> Option<String> {
        self.selected_shop().map(|shop| {
            crate::logic::formatting::shop_map_link(&self.ui.map_url_base, shop)
        })
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
