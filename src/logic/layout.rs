//! Card grid layout logic
//!
//! Pure functions for placing shop cards in a wrapping grid and scrolling
//! it so the selected card stays visible.

/// Width of one card including borders
pub const CARD_WIDTH: u16 = 36;

/// Height of one card including borders
pub const CARD_HEIGHT: u16 = 5;

/// Horizontal gap between cards
pub const CARD_GAP: u16 = 2;

/// Visible slice of the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWindow {
    /// Cards per row
    pub columns: usize,
    /// Rows that fit in the area
    pub visible_rows: usize,
    /// First grid row drawn
    pub first_row: usize,
}

impl GridWindow {
    /// Index range of cards to draw
    pub fn card_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.first_row * self.columns).min(total);
        let end = (start + self.visible_rows * self.columns).min(total);
        start..end
    }
}

/// Number of cards that fit side by side
///
/// # Examples
/// ```
/// use shopfinder::logic::layout::columns_for_width;
///
/// assert_eq!(columns_for_width(10), 1);  // Never less than one
/// assert_eq!(columns_for_width(36), 1);
/// assert_eq!(columns_for_width(74), 2);  // 36 + 2 + 36
/// assert_eq!(columns_for_width(120), 3);
/// ```
pub fn columns_for_width(width: u16) -> usize {
    let columns = (width + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
    (columns as usize).max(1)
}

/// Compute which grid rows to draw so `selected` is on screen
pub fn calculate_grid_window(
    width: u16,
    height: u16,
    total: usize,
    selected: Option<usize>,
) -> GridWindow {
    let columns = columns_for_width(width);
    let visible_rows = ((height / CARD_HEIGHT) as usize).max(1);
    let total_rows = total.div_ceil(columns);

    let selected_row = selected.map(|i| i / columns).unwrap_or(0);
    let first_row = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };
    let max_first = total_rows.saturating_sub(visible_rows);

    GridWindow {
        columns,
        visible_rows,
        first_row: first_row.min(max_first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_everything() {
        let window = calculate_grid_window(120, 20, 6, Some(0));
        assert_eq!(window.columns, 3);
        assert_eq!(window.visible_rows, 4);
        assert_eq!(window.first_row, 0);
        assert_eq!(window.card_range(6), 0..6);
    }

    #[test]
    fn test_grid_scrolls_to_selection() {
        // 1 column, 2 visible rows, selecting the 5th card
        let window = calculate_grid_window(40, 10, 8, Some(4));
        assert_eq!(window.columns, 1);
        assert_eq!(window.visible_rows, 2);
        assert_eq!(window.first_row, 3);
        assert_eq!(window.card_range(8), 3..5);
    }

    #[test]
    fn test_grid_tiny_area_still_draws_one_row() {
        let window = calculate_grid_window(5, 2, 3, None);
        assert_eq!(window.visible_rows, 1);
        assert_eq!(window.card_range(3), 0..1);
    }

    #[test]
    fn test_grid_empty() {
        let window = calculate_grid_window(120, 20, 0, None);
        assert_eq!(window.card_range(0), 0..0);
    }
}
