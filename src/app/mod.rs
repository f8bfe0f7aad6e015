//! App Orchestration Methods
//!
//! `impl App` methods that execute the `Command`s produced by the reducer
//! and handlers, grouped by domain:
//! - commands: Dispatch loop from `Command` to the right service
//! - links: Opening and copying map links with user-configured programs

pub(crate) mod commands;
pub(crate) mod links;
