//! Message types for the Elm Architecture pattern
//!
//! `Msg` is every event that can change the finder state; `Command` is every
//! side effect the reducer asks the runtime to perform.
//!
//! Message sources:
//! - Locator (one-shot location result)
//! - Keyboard (radius changes, refresh, quit)
//! - Fetch service (Overpass responses, tagged with a sequence number)

use crate::api::Shop;
use crate::model::Location;
use crate::services::api::FetchRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Locator produced coordinates
    LocationResolved(Location),

    /// Locator failed (denied, unreachable, bad response)
    LocationFailed(String),

    /// No geolocation capability is available
    LocationUnsupported,

    /// User picked a new radius
    RadiusChanged(u32),

    /// Re-run the current search
    Refresh,

    /// Overpass returned shops for request `seq`
    FetchSucceeded { seq: u64, shops: Vec<Shop> },

    /// Request `seq` failed; `message` is the raw cause for the log
    FetchFailed { seq: u64, message: String },

    /// Widget is going away; later completions must be ignored
    Unmounted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Dispatch an Overpass request
    Fetch(FetchRequest),

    /// Hand a map link to the configured open command
    OpenLink(String),

    /// Pipe a map link into the configured clipboard command
    CopyLink(String),
}
