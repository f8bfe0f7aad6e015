//! Nearby Shops Finder Library
//!
//! Exposes modules for testing. The binary in `main.rs` owns the terminal,
//! the runtime `App` and the command executor; everything else lives here.

pub mod api;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod messages;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;
