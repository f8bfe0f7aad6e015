//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or network:
//! - errors: User-facing error text and error-chain inspection
//! - formatting: Card text (names, types, coordinates, map links)
//! - layout: Card grid geometry and scrolling
//! - navigation: Card selection with wrapping
//! - query: Overpass query and request url construction
//! - radius: Radius input affordance (step, clamp, parse)
//! - ui: Toast timing
//! - update: Reducer applying `Msg` events to the `Model`

pub mod errors;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod query;
pub mod radius;
pub mod ui;
pub mod update;
