//! UI timing logic

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use shopfinder::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(1499));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Toasts starting with "Error:" get the error styling
pub fn is_error_toast(message: &str) -> bool {
    message.starts_with("Error:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal_boundary() {
        assert!(!should_dismiss_toast(TOAST_DURATION_MS - 1));
        assert!(should_dismiss_toast(TOAST_DURATION_MS));
        assert!(should_dismiss_toast(10_000));
    }

    #[test]
    fn test_error_toast_detection() {
        assert!(is_error_toast("Error: open_command not configured"));
        assert!(!is_error_toast("Opened: https://www.openstreetmap.org/"));
    }
}
