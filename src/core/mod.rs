//! Core module for common functionality across the library and CLI

pub mod config;
pub mod loader;
pub mod models;
pub mod progress;
pub mod report;

/// Returns the current version of the `malla-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
