//! Formatting and display logic
//!
//! Pure functions turning shop data into card text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Shop;

/// Shown when a shop has no `name` tag
pub const UNNAMED_SHOP: &str = "Unnamed Shop";

/// OpenStreetMap viewer root used for deep links
pub const DEFAULT_MAP_URL_BASE: &str = "https://www.openstreetmap.org/";

/// Zoom level used in map deep links
const MAP_ZOOM: u8 = 18;

pub fn shop_display_name(shop: &Shop) -> &str {
    shop.name().unwrap_or(UNNAMED_SHOP)
}

/// Shop type tag, blank when the tag is missing
pub fn shop_type_label(shop: &Shop) -> &str {
    shop.shop_type().unwrap_or("")
}

/// Format a coordinate pair to 4 decimal places
///
/// # Examples
/// ```
/// use shopfinder::logic::formatting::format_coordinates;
///
/// assert_eq!(format_coordinates(10.12345, 20.6789), "(10.1235, 20.6789)");
/// assert_eq!(format_coordinates(0.0, -1.5), "(0.0000, -1.5000)");
/// ```
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("({:.4}, {:.4})", lat, lon)
}

/// Deep link that opens the map viewer centered on a point with a marker
///
/// # Examples
/// ```
/// use shopfinder::logic::formatting::map_link;
///
/// assert_eq!(
///     map_link("https://www.openstreetmap.org/", 10.5, 20.25),
///     "https://www.openstreetmap.org/?mlat=10.5&mlon=20.25#map=18/10.5/20.25"
/// );
/// ```
pub fn map_link(base: &str, lat: f64, lon: f64) -> String {
    format!(
        "{}?mlat={}&mlon={}#map={}/{}/{}",
        base, lat, lon, MAP_ZOOM, lat, lon
    )
}

pub fn shop_map_link(base: &str, shop: &Shop) -> String {
    map_link(base, shop.lat, shop.lon)
}

/// Format a radius for the status bar
pub fn format_radius(radius: u32) -> String {
    if radius >= 1000 && radius % 100 == 0 {
        format!("{} m ({:.1} km)", radius, radius as f64 / 1000.0)
    } else {
        format!("{} m", radius)
    }
}

/// Truncate to a display width, appending an ellipsis when cut
///
/// Width is measured in terminal cells, so wide characters count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn shop(tags: &[(&str, &str)]) -> Shop {
        Shop {
            id: 1,
            lat: 10.12345,
            lon: 20.6789,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_unnamed_fallback() {
        let s = shop(&[("shop", "bakery")]);
        assert_eq!(shop_display_name(&s), "Unnamed Shop");
        assert_eq!(shop_type_label(&s), "bakery");
    }

    #[test]
    fn test_named_shop() {
        let s = shop(&[("name", "Kiosk 24"), ("shop", "kiosk")]);
        assert_eq!(shop_display_name(&s), "Kiosk 24");
    }

    #[test]
    fn test_missing_type_is_blank() {
        let s = shop(&[("name", "Mystery")]);
        assert_eq!(shop_type_label(&s), "");
    }

    #[test]
    fn test_coordinates_round_to_four_places() {
        assert_eq!(format_coordinates(10.12345, 20.6789), "(10.1235, 20.6789)");
        assert_eq!(format_coordinates(-0.00004, 179.99999), "(-0.0000, 180.0000)");
    }

    #[test]
    fn test_shop_map_link_uses_raw_coordinates() {
        let s = shop(&[]);
        assert_eq!(
            shop_map_link(DEFAULT_MAP_URL_BASE, &s),
            "https://www.openstreetmap.org/?mlat=10.12345&mlon=20.6789#map=18/10.12345/20.6789"
        );
    }

    #[test]
    fn test_format_radius() {
        assert_eq!(format_radius(100), "100 m");
        assert_eq!(format_radius(1500), "1500 m (1.5 km)");
        assert_eq!(format_radius(1050), "1050 m");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Bakery", 10), "Bakery");
        assert_eq!(truncate_to_width("Supermarket Express", 8), "Superma…");
        assert_eq!(truncate_to_width("アイウエオ", 5), "アイ…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
