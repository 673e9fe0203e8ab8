//! Mutable noise configuration for one run.
//!
//! Every mutator clamps to its legal range and returns whether the value
//! actually changed. Calling a mutator repeatedly at a limit is a no-op.

use crate::{
    domain::{NoiseColor, PlayDuration, SynthConstants},
    error::ParamError,
};

pub const VOLUME_STEP: f64 = 0.25;
/// Upper bound for [`ParameterState::increase_volume`]. Anything past ~10 distorts.
pub const MAX_VOLUME: f64 = 30.0;
pub const UNMUTE_VOLUME: f64 = 1.0;
pub const DEFAULT_VOLUME: f64 = 1.0;

pub const MIN_CENTER_HZ: u32 = 100;
pub const MAX_CENTER_HZ: u32 = 4000;
pub const CENTER_STEP_HZ: u32 = 100;
pub const DEFAULT_CENTER_HZ: u32 = 1786;

pub const MIN_REVERB: u32 = 10;
pub const MAX_REVERB: u32 = 90;
pub const REVERB_STEP: u32 = 10;
pub const DEFAULT_REVERB: u32 = 19;

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterState {
    color: NoiseColor,
    volume: f64,
    center_frequency_hz: u32,
    reverb_depth: u32,
    duration: Option<PlayDuration>,
    ui_enabled: bool,
    constants: SynthConstants,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            color: NoiseColor::default(),
            volume: DEFAULT_VOLUME,
            center_frequency_hz: DEFAULT_CENTER_HZ,
            reverb_depth: DEFAULT_REVERB,
            duration: None,
            ui_enabled: true,
            constants: SynthConstants::STANDARD,
        }
    }
}

impl ParameterState {
    pub fn new(
        color: NoiseColor,
        volume: f64,
        duration: Option<PlayDuration>,
        ui_enabled: bool,
    ) -> Result<Self, ParamError> {
        if !volume.is_finite() || volume < 0.0 {
            return Err(ParamError::InvalidVolume(volume));
        }

        Ok(Self {
            color,
            volume,
            duration,
            ui_enabled,
            ..Self::default()
        })
    }

    pub fn color(&self) -> NoiseColor {
        self.color
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn center_frequency_hz(&self) -> u32 {
        self.center_frequency_hz
    }

    pub fn reverb_depth(&self) -> u32 {
        self.reverb_depth
    }

    pub fn duration(&self) -> Option<&PlayDuration> {
        self.duration.as_ref()
    }

    pub fn ui_enabled(&self) -> bool {
        self.ui_enabled
    }

    pub fn constants(&self) -> &SynthConstants {
        &self.constants
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    pub fn increase_volume(&mut self) -> bool {
        if self.volume >= MAX_VOLUME {
            return false;
        }
        self.volume = (self.volume + VOLUME_STEP).min(MAX_VOLUME);
        true
    }

    /// Steps down by [`VOLUME_STEP`]; anything at or below one step lands on 0.
    pub fn decrease_volume(&mut self) -> bool {
        if self.volume == 0.0 {
            return false;
        }
        if self.volume > VOLUME_STEP {
            self.volume -= VOLUME_STEP;
        } else {
            self.volume = 0.0;
        }
        true
    }

    /// Unmuting always restores [`UNMUTE_VOLUME`], not the level before muting.
    pub fn toggle_mute(&mut self) -> bool {
        self.volume = if self.volume > 0.0 { 0.0 } else { UNMUTE_VOLUME };
        true
    }

    pub fn raise_frequency(&mut self) -> bool {
        step_up(&mut self.center_frequency_hz, CENTER_STEP_HZ, MAX_CENTER_HZ)
    }

    pub fn lower_frequency(&mut self) -> bool {
        step_down(&mut self.center_frequency_hz, CENTER_STEP_HZ, MIN_CENTER_HZ)
    }

    pub fn raise_reverb(&mut self) -> bool {
        step_up(&mut self.reverb_depth, REVERB_STEP, MAX_REVERB)
    }

    pub fn lower_reverb(&mut self) -> bool {
        step_down(&mut self.reverb_depth, REVERB_STEP, MIN_REVERB)
    }

    pub fn set_color(&mut self, color: NoiseColor) -> bool {
        let changed = self.color != color;
        self.color = color;
        changed
    }
}

fn step_up(value: &mut u32, step: u32, max: u32) -> bool {
    if *value >= max {
        return false;
    }
    *value = (*value + step).min(max);
    true
}

fn step_down(value: &mut u32, step: u32, min: u32) -> bool {
    if *value <= min {
        return false;
    }
    *value = value.saturating_sub(step).max(min);
    true
}

#[cfg(test)]
#[path = "tests/params_tests.rs"]
mod tests;
