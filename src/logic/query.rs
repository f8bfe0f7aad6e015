//! Overpass query construction
//!
//! The Overpass QL payload asks for every node carrying a `shop` tag inside
//! a circle around the user, and is sent percent-encoded in the `data`
//! query parameter.

/// Build the Overpass QL query for shop nodes around a coordinate
///
/// # Examples
/// ```
/// use shopfinder::logic::query::build_shop_query;
///
/// let query = build_shop_query(10.0, 20.0, 1000);
/// assert!(query.contains(r#"node["shop"](around:1000,10,20);"#));
/// assert!(query.starts_with("[out:json];"));
/// ```
pub fn build_shop_query(lat: f64, lon: f64, radius: u32) -> String {
    format!(
        "[out:json];\nnode[\"shop\"](around:{},{},{});\nout;",
        radius, lat, lon
    )
}

/// Append a percent-encoded query to the interpreter endpoint
pub fn build_request_url(base_url: &str, query: &str) -> String {
    format!("{}?data={}", base_url, urlencoding::encode(query))
}
