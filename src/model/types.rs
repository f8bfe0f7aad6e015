//! Shared types for the Model

use crate::api::Shop;
use crate::logic::errors;

/// Device coordinates in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Progress of the one-shot location request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationStatus {
    Pending,
    Resolved,
    Failed,
    Unsupported,
}

/// Error currently shown to the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinderError {
    LocationUnavailable,
    LocationUnsupported,
    Fetch,
}

impl FinderError {
    pub fn message(self) -> &'static str {
        match self {
            FinderError::LocationUnavailable => errors::LOCATION_UNAVAILABLE,
            FinderError::LocationUnsupported => errors::LOCATION_UNSUPPORTED,
            FinderError::Fetch => errors::FETCH_FAILED,
        }
    }
}

/// The four mutually exclusive display conditions
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Display<'a> {
    /// Error text; results are suppressed
    Error(&'static str),
    /// Request in flight; previous results may still be drawn beneath
    Loading { stale: &'a [Shop] },
    /// One card per shop
    Results(&'a [Shop]),
    /// "No shops found nearby."
    Empty,
}
