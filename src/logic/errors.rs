use anyhow::Error;

/// Geolocation was denied or failed
pub const LOCATION_UNAVAILABLE: &str = "Could not retrieve location.";

/// No geolocation capability configured
pub const LOCATION_UNSUPPORTED: &str = "Geolocation is not supported by this browser.";

/// Any network, status or decode failure while fetching shops
pub const FETCH_FAILED: &str = "Error fetching data from Overpass API";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    HttpStatus(u16),
    Decode,       // Body was not the JSON we expected
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify a fetch error for logging
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if let Some(status) = reqwest_err.status() {
                return ErrorType::HttpStatus(status.as_u16());
            }
            if reqwest_err.is_decode() {
                return ErrorType::Decode;
            }
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("failed to parse") || error_msg.contains("expected") {
        return ErrorType::Decode;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Raw error detail for the debug log
///
/// Prefers the reqwest error in the chain, otherwise the root cause.
pub fn format_error_message(error: &Error) -> String {
    if let Some(reqwest_err) = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
    {
        return reqwest_err.to_string();
    }

    error.root_cause().to_string()
}
