//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use noise_model::{NoiseColor, ParamError, ParameterState, PlayDuration};

use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "soxnoise", version)]
#[command(about = "Play pink, brown or white noise on the terminal with SoX", long_about = None)]
pub struct Args {
    /// Noise color to play: pink, brown or white
    #[arg(short, long, value_name = "COLOR", default_value = "pink")]
    pub color: NoiseColor,

    /// Stop after this long, given as seconds or hh:mm:ss
    #[arg(short, long, value_name = "DURATION")]
    pub duration: Option<PlayDuration>,

    /// Initial output volume. Stay within 0-10 to avoid distortion
    #[arg(short, long, value_name = "VOLUME", default_value_t = 1.0, value_parser = parse_volume)]
    pub volume: f64,

    /// Run the synthesizer in the foreground without the interactive view
    #[arg(short = 't', long)]
    pub disabletui: bool,

    /// Synthesizer executable (overrides settings and SOXNOISE_PLAYER)
    #[arg(long, value_name = "PATH")]
    pub player: Option<String>,

    /// Settings file to load instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parameter_state(&self) -> Result<ParameterState, ParamError> {
        ParameterState::new(
            self.color,
            self.volume,
            self.duration.clone(),
            !self.disabletui,
        )
    }

    /// Flags take precedence over file and environment settings.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(player) = &self.player {
            settings.player = player.clone();
        }
    }
}

fn parse_volume(raw: &str) -> Result<f64, String> {
    let volume: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !volume.is_finite() || volume < 0.0 {
        return Err(ParamError::InvalidVolume(volume).to_string());
    }
    Ok(volume)
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
