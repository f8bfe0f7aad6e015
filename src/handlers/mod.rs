//! Event Handlers
//!
//! Translate raw inputs into `Msg`s and run them through the reducer:
//! - api: Responses from the fetch service
//! - location: The one-shot locator result
//! - keyboard: User keyboard input
//!
//! Each handler returns the `Command`s the runtime must execute.

pub mod api;
pub mod keyboard;
pub mod location;

pub use api::handle_fetch_response;
pub use keyboard::handle_key;
pub use location::handle_location_result;
