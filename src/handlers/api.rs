//! Fetch Response Handler

use tracing::debug;

use crate::logic::errors::{classify_error, format_error_message};
use crate::logic::update::update;
use crate::messages::{Command, Msg};
use crate::model::Model;
use crate::services::api::FetchResponse;

/// Feed a fetch service response into the reducer
pub fn handle_fetch_response(model: &mut Model, response: FetchResponse) -> Vec<Command> {
    let FetchResponse { seq, shops } = response;

    let msg = match shops {
        Ok(shops) => Msg::FetchSucceeded { seq, shops },
        Err(error) => {
            debug!(seq, kind = ?classify_error(&error), "fetch failed: {:#}", error);
            Msg::FetchFailed {
                seq,
                message: format_error_message(&error),
            }
        }
    };

    update(model, msg)
}
