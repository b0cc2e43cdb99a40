//! CLI command handlers for `udsgpa`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod course;
pub mod report;
pub mod scale;
pub mod summary;

use logger::{debug, error};
use uds_gpa::config::Config;
use uds_gpa::models::GradeScale;
use uds_gpa::store::{JsonFileStore, OwnerKey};

/// Resolve the active grading scale, exiting on an invalid `grading.scale`
pub fn resolve_scale(config: &Config) -> &'static GradeScale {
    match config.grade_scale() {
        Ok(scale) => scale,
        Err(e) => {
            error!("Invalid grading scale in config: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Open the JSON course store and owner named by the config
///
/// Exits with status 1 if the scale or owner key is invalid.
pub fn open_store(config: &Config) -> (JsonFileStore, OwnerKey) {
    let scale = resolve_scale(config);
    let owner = match OwnerKey::new(&config.store.owner) {
        Ok(owner) => owner,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    debug!(
        "Using {} scale, owner '{owner}', data dir {}",
        scale.kind(),
        config.store.data_dir
    );
    (JsonFileStore::new(&config.store.data_dir, scale), owner)
}
