//! Card selection logic
//!
//! Pure functions for moving the card selection with wrapping behavior.

/// Select the next card, wrapping to the first after the last
///
/// # Examples
/// ```
/// use shopfinder::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Select the previous card, wrapping to the last before the first
pub fn prev_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => len - 1,
        Some(i) if i >= len => len - 1,
        Some(i) => i - 1,
    })
}

/// Move by a whole grid row, stopping at the edges
pub fn move_by_row(
    current: Option<usize>,
    len: usize,
    columns: usize,
    down: bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);
    let i = current.unwrap_or(0).min(len - 1);

    Some(if down {
        if i + columns < len {
            i + columns
        } else {
            i
        }
    } else {
        i.saturating_sub(columns)
    })
}

/// Keep a selection valid after the card list was replaced
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(current.unwrap_or(0).min(len - 1))
    }
}
