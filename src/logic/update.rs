//! Finder reducer
//!
//! Applies one `Msg` to the `Model` and returns the side effects to run.
//! Responses carry the sequence number of the request that produced them;
//! only the latest dispatched request may change the shop list, so a slow
//! response to an older radius can never overwrite a newer one.

use tracing::{debug, error, info, warn};

use crate::messages::{Command, Msg};
use crate::model::{FinderError, LocationStatus, Model};
use crate::services::api::FetchRequest;

use super::navigation::clamp_selection;

pub fn update(model: &mut Model, msg: Msg) -> Vec<Command> {
    if !model.finder.alive {
        debug!(?msg, "ignoring message after unmount");
        return Vec::new();
    }

    match msg {
        Msg::LocationResolved(location) => {
            if model.finder.location.is_some() {
                // One-shot: a second position is not a subscription update
                return Vec::new();
            }
            model.finder.location = Some(location);
            model.finder.location_status = LocationStatus::Resolved;
            start_fetch(model).into_iter().collect()
        }

        Msg::LocationFailed(reason) => {
            warn!("location failed: {}", reason);
            model.finder.location_status = LocationStatus::Failed;
            model.finder.error = Some(FinderError::LocationUnavailable);
            Vec::new()
        }

        Msg::LocationUnsupported => {
            model.finder.location_status = LocationStatus::Unsupported;
            model.finder.error = Some(FinderError::LocationUnsupported);
            Vec::new()
        }

        Msg::RadiusChanged(radius) => {
            if radius == model.finder.radius {
                return Vec::new();
            }
            model.finder.radius = radius;
            start_fetch(model).into_iter().collect()
        }

        Msg::Refresh => start_fetch(model).into_iter().collect(),

        Msg::FetchSucceeded { seq, shops } => {
            if !model.finder.is_current(seq) {
                debug!(
                    seq,
                    latest = model.finder.latest_seq,
                    "discarding stale response"
                );
                return Vec::new();
            }
            info!(seq, count = shops.len(), "shops loaded");
            model.finder.shops = shops;
            model.finder.loading = false;
            model.finder.last_updated = Some(chrono::Local::now());
            model.ui.selected_card =
                clamp_selection(model.ui.selected_card, model.finder.shops.len());
            Vec::new()
        }

        Msg::FetchFailed { seq, message } => {
            if !model.finder.is_current(seq) {
                debug!(
                    seq,
                    latest = model.finder.latest_seq,
                    "discarding stale failure"
                );
                return Vec::new();
            }
            error!(seq, "Error fetching data from Overpass API: {}", message);
            // Previous results stay in place
            model.finder.error = Some(FinderError::Fetch);
            model.finder.loading = false;
            Vec::new()
        }

        Msg::Unmounted => {
            model.finder.alive = false;
            Vec::new()
        }
    }
}

/// Dispatch a search for the current location and radius, if located
fn start_fetch(model: &mut Model) -> Option<Command> {
    let location = model.finder.location?;

    // A new attempt clears a previous fetch error, never a location error
    if model.finder.error == Some(FinderError::Fetch) {
        model.finder.error = None;
    }

    let seq = model.finder.next_seq();
    model.finder.loading = true;

    Some(Command::Fetch(FetchRequest {
        seq,
        location,
        radius: model.finder.radius,
    }))
}
