//! Location Result Handler

use crate::logic::update::update;
use crate::messages::{Command, Msg};
use crate::model::{Location, Model};
use crate::services::location::LocationError;

/// Feed the locator's one-shot result into the reducer
pub fn handle_location_result(
    model: &mut Model,
    result: Result<Location, LocationError>,
) -> Vec<Command> {
    let msg = match result {
        Ok(location) => Msg::LocationResolved(location),
        Err(LocationError::Unsupported) => Msg::LocationUnsupported,
        Err(LocationError::Unavailable(reason)) => Msg::LocationFailed(reason),
    };

    update(model, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationStatus;

    #[test]
    fn test_unsupported_message() {
        let mut model = Model::new(1000, false);
        let commands = handle_location_result(&mut model, Err(LocationError::Unsupported));
        assert!(commands.is_empty());
        assert_eq!(model.finder.location_status, LocationStatus::Unsupported);
        assert_eq!(
            model.finder.error_message(),
            Some("Geolocation is not supported by this browser.")
        );
    }

    #[test]
    fn test_unavailable_message() {
        let mut model = Model::new(1000, false);
        let commands = handle_location_result(
            &mut model,
            Err(LocationError::Unavailable("denied".to_string())),
        );
        assert!(commands.is_empty());
        assert!(model.finder.location.is_none());
        assert_eq!(model.finder.error_message(), Some("Could not retrieve location."));
    }

    #[test]
    fn test_success_dispatches_fetch() {
        let mut model = Model::new(1000, false);
        let commands = handle_location_result(&mut model, Ok(Location { lat: 10.0, lon: 20.0 }));
        assert_eq!(commands.len(), 1);
        assert!(model.finder.loading);
    }
}
