use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use noise_model::DEFAULT_PLAYER;
use playback::DEFAULT_KILL_GRACE_MS;
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "soxnoise.toml";
const APP_DIR_NAME: &str = "soxnoise";
const LOG_FILE_NAME: &str = "soxnoise.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub player: String,
    pub input_timeout_ms: u64,
    pub kill_grace_ms: u64,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER.into(),
            input_timeout_ms: 100,
            kill_grace_ms: DEFAULT_KILL_GRACE_MS,
            log_level: None,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn input_timeout(&self) -> Duration {
        Duration::from_millis(self.input_timeout_ms)
    }

    pub fn kill_grace(&self) -> Duration {
        Duration::from_millis(self.kill_grace_ms)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.player.trim().is_empty() {
            bail!("player must not be empty");
        }
        if self.input_timeout_ms == 0 {
            bail!("input_timeout_ms must be greater than zero");
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    player: Option<String>,
    input_timeout_ms: Option<u64>,
    kill_grace_ms: Option<u64>,
    log_level: Option<String>,
    log_file: Option<PathBuf>,
}

/// Defaults, then the first settings file found, then environment overrides.
///
/// An explicit `path` must exist. Without one, `./soxnoise.toml` and the
/// user config directory are tried in that order.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_with(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file_path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths().into_iter().find(|p| p.is_file()),
    };

    if let Some(file_path) = file_path {
        let raw = fs::read_to_string(&file_path).with_context(|| {
            format!("failed to read settings file '{}'", file_path.display())
        })?;
        let file_cfg: FileSettings = toml::from_str(&raw).with_context(|| {
            format!("failed to parse settings file '{}'", file_path.display())
        })?;
        apply_file(&mut settings, file_cfg);
    }

    apply_env(&mut settings, env)?;
    settings.validate()?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.player {
        settings.player = v;
    }
    if let Some(v) = file_cfg.input_timeout_ms {
        settings.input_timeout_ms = v;
    }
    if let Some(v) = file_cfg.kill_grace_ms {
        settings.kill_grace_ms = v;
    }
    if let Some(v) = file_cfg.log_level {
        settings.log_level = Some(v);
    }
    if let Some(v) = file_cfg.log_file {
        settings.log_file = Some(v);
    }
}

fn apply_env(
    settings: &mut Settings,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = env("SOXNOISE_PLAYER") {
        settings.player = v;
    }
    if let Some(v) = env("SOXNOISE__PLAYER") {
        settings.player = v;
    }

    if let Some(v) = env("SOXNOISE__INPUT_TIMEOUT_MS") {
        settings.input_timeout_ms = v
            .parse()
            .with_context(|| format!("SOXNOISE__INPUT_TIMEOUT_MS is not a number: '{v}'"))?;
    }
    if let Some(v) = env("SOXNOISE__KILL_GRACE_MS") {
        settings.kill_grace_ms = v
            .parse()
            .with_context(|| format!("SOXNOISE__KILL_GRACE_MS is not a number: '{v}'"))?;
    }

    if let Some(v) = env("SOXNOISE__LOG_LEVEL") {
        settings.log_level = Some(v);
    }
    if let Some(v) = env("SOXNOISE__LOG_FILE") {
        settings.log_file = Some(PathBuf::from(v));
    }

    Ok(())
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
