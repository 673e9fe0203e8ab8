//! File-backed tracing setup. The terminal belongs to the live view, so
//! nothing is logged to stdout or stderr.

use std::{
    fs::{self, File},
    io,
    path::Path,
    sync::Mutex,
};

use anyhow::{anyhow, Context};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use crate::config::Settings;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. A log file that cannot be opened only
/// disables logging; the player still runs.
pub fn init(settings: &Settings) -> anyhow::Result<()> {
    let path = settings.log_path();
    let writer = match open_log_file(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(err) => {
            eprintln!("soxnoise: logging disabled: {err:#}");
            BoxMakeWriter::new(io::sink)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter(settings)?)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create log directory '{}'", parent.display())
        })?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))
}

/// `RUST_LOG` wins over the configured level, which wins over `info`.
fn filter(settings: &Settings) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = settings.log_level.as_deref().unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directive).with_context(|| format!("invalid log level '{directive}'"))
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
