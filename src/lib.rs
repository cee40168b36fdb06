// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod forecast;
pub mod logging;
pub mod model;
pub mod report;
pub mod session;
pub mod store;
pub mod synthetic;

#[cfg(feature = "tui")]
pub mod tui;
