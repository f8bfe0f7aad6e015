//! External Services
//!
//! Background workers that talk to the outside world:
//! - api: Overpass fetch service (one task per request)
//! - location: Locator implementations and the one-shot locator task

pub mod api;
pub mod location;

pub use api::{FetchRequest, FetchResponse};
pub use location::{LocationError, Locator};
