use std::{fmt, str::FromStr};

use crate::error::ParamError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NoiseColor {
    #[default]
    Pink,
    Brown,
    White,
}

impl NoiseColor {
    pub const ALL: [NoiseColor; 3] = [NoiseColor::Pink, NoiseColor::Brown, NoiseColor::White];

    pub fn as_str(self) -> &'static str {
        match self {
            NoiseColor::Pink => "pink",
            NoiseColor::Brown => "brown",
            NoiseColor::White => "white",
        }
    }

    /// Name of the matching `synth` generator, e.g. `pinknoise`.
    pub fn synth_type(self) -> String {
        format!("{}noise", self.as_str())
    }
}

impl fmt::Display for NoiseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseColor {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        NoiseColor::ALL
            .into_iter()
            .find(|color| color.as_str() == lower)
            .ok_or_else(|| ParamError::UnknownColor(s.to_string()))
    }
}

/// Playback length handed to `synth` verbatim.
///
/// Accepts whole seconds (`90`) or colon-separated `[[hh:]mm:]ss`. Minute and
/// second fields that follow a larger unit must be below 60.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayDuration {
    raw: String,
    total_seconds: u64,
}

impl PlayDuration {
    pub fn parse(raw: &str) -> Result<Self, ParamError> {
        let raw = raw.trim();
        let invalid = || ParamError::InvalidDuration(raw.to_string());

        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }

        let mut total_seconds: u64 = 0;
        for (idx, part) in parts.iter().enumerate() {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let value: u64 = part.parse().map_err(|_| invalid())?;
            if idx > 0 && value >= 60 {
                return Err(invalid());
            }
            total_seconds = total_seconds
                .checked_mul(60)
                .and_then(|acc| acc.checked_add(value))
                .ok_or_else(invalid)?;
        }

        Ok(Self {
            raw: raw.to_string(),
            total_seconds,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }
}

impl fmt::Display for PlayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for PlayDuration {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Synthesis settings that no key adjusts. Passed through on every launch.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConstants {
    pub bit_depth: u32,
    pub channels: u32,
    pub band_width_hz: u32,
    pub tremolo_speed: &'static str,
    pub tremolo_depth: u32,
    pub bass_db: i32,
    pub treble_db: i32,
}

impl SynthConstants {
    pub const STANDARD: SynthConstants = SynthConstants {
        bit_depth: 16,
        channels: 2,
        band_width_hz: 499,
        tremolo_speed: "0.00",
        tremolo_depth: 43,
        bass_db: -11,
        treble_db: -1,
    };
}

impl Default for SynthConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
