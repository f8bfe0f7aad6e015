//! Radius input affordance
//!
//! The search radius is bounded to [100, 5000] meters in steps of 100, but
//! only by the input control. The reducer accepts whatever value it is given.

pub const MIN_RADIUS: u32 = 100;
pub const MAX_RADIUS: u32 = 5000;
pub const RADIUS_STEP: u32 = 100;
pub const DEFAULT_RADIUS: u32 = 1000;

/// Clamp a raw value to the nearest bound
///
/// # Examples
/// ```
/// use shopfinder::logic::radius::clamp_radius;
///
/// assert_eq!(clamp_radius(-20), 100);
/// assert_eq!(clamp_radius(50), 100);
/// assert_eq!(clamp_radius(2300), 2300);
/// assert_eq!(clamp_radius(12_000), 5000);
/// ```
pub fn clamp_radius(value: i64) -> u32 {
    value.clamp(MIN_RADIUS as i64, MAX_RADIUS as i64) as u32
}

/// Clamp, then round to the nearest step (halves round up)
pub fn snap_radius(value: i64) -> u32 {
    let clamped = clamp_radius(value);
    let snapped = (clamped + RADIUS_STEP / 2) / RADIUS_STEP * RADIUS_STEP;
    snapped.clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Next step up, landing on a step boundary
pub fn step_up(current: u32) -> u32 {
    let next = (i64::from(current) / i64::from(RADIUS_STEP) + 1) * i64::from(RADIUS_STEP);
    clamp_radius(next)
}

/// Next step down, landing on a step boundary
pub fn step_down(current: u32) -> u32 {
    let prev = if current % RADIUS_STEP == 0 {
        current.saturating_sub(RADIUS_STEP)
    } else {
        current / RADIUS_STEP * RADIUS_STEP
    };
    clamp_radius(prev as i64)
}

/// Parse typed radius text; clamps and snaps anything numeric
///
/// Returns `None` for empty or non-numeric input.
pub fn parse_radius_input(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok().map(snap_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_below_minimum() {
        assert_eq!(clamp_radius(0), MIN_RADIUS);
        assert_eq!(clamp_radius(99), MIN_RADIUS);
        assert_eq!(clamp_radius(i64::MIN), MIN_RADIUS);
    }

    #[test]
    fn test_clamp_above_maximum() {
        assert_eq!(clamp_radius(5001), MAX_RADIUS);
        assert_eq!(clamp_radius(i64::MAX), MAX_RADIUS);
    }

    #[test]
    fn test_clamp_inside_range_is_identity() {
        for value in [100, 101, 1000, 4999, 5000] {
            assert_eq!(clamp_radius(value), value as u32);
        }
    }

    #[test]
    fn test_snap_to_nearest_step() {
        assert_eq!(snap_radius(1049), 1000);
        assert_eq!(snap_radius(1050), 1100);
        assert_eq!(snap_radius(4990), 5000);
        assert_eq!(snap_radius(7), 100);
    }

    #[test]
    fn test_step_up() {
        assert_eq!(step_up(1000), 1100);
        assert_eq!(step_up(1050), 1100);
        assert_eq!(step_up(4900), 5000);
        assert_eq!(step_up(5000), 5000);
    }

    #[test]
    fn test_steps_from_unbounded_radius() {
        // --radius and the config file are not range-checked
        assert_eq!(step_up(u32::MAX), MAX_RADIUS);
        assert_eq!(step_down(u32::MAX), MAX_RADIUS);
        assert_eq!(step_up(0), 100);
        assert_eq!(step_down(0), MIN_RADIUS);
    }

    #[test]
    fn test_step_down() {
        assert_eq!(step_down(1000), 900);
        assert_eq!(step_down(1050), 1000);
        assert_eq!(step_down(200), 100);
        assert_eq!(step_down(100), 100);
    }

    #[test]
    fn test_parse_radius_input() {
        assert_eq!(parse_radius_input("2500"), Some(2500));
        assert_eq!(parse_radius_input(" 30 "), Some(100));
        assert_eq!(parse_radius_input("900000"), Some(5000));
        assert_eq!(parse_radius_input("-5"), Some(100));
        assert_eq!(parse_radius_input(""), None);
        assert_eq!(parse_radius_input("abc"), None);
    }
}
