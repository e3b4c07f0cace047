//! CLI command handlers for `mallatrack`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod export;
pub mod show;
pub mod track;

use logger::{error, info};
use malla_tracker::config::Config;
use malla_tracker::core::loader;
use malla_tracker::core::models::Curriculum;
use std::path::{Path, PathBuf};

/// Resolve a curriculum argument to a document path.
///
/// Existing paths and paths with an extension are used as-is; a bare name is
/// looked up in the configured catalog directory as `<name>.json`.
#[must_use]
pub fn resolve_input(input: &Path, config: &Config) -> PathBuf {
    if input.exists() || input.extension().is_some() {
        return input.to_path_buf();
    }

    PathBuf::from(&config.paths.catalog_dir).join(format!("{}.json", input.display()))
}

/// Load a curriculum document, reporting failures to the user.
///
/// Load failure is terminal for the invoking command; there is no retry.
pub(crate) fn load_or_report(input: &Path, config: &Config) -> Option<Curriculum> {
    let path = resolve_input(input, config);

    match loader::load_curriculum(&path) {
        Ok(curriculum) => {
            info!("Curriculum loaded: {}", path.display());
            Some(curriculum)
        }
        Err(err) => {
            error!("Failed to load curriculum {}: {err}", path.display());
            eprintln!("✗ {err}");
            None
        }
    }
}
