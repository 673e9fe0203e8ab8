//! Argument list for the external `play` synthesizer.

use crate::params::ParameterState;

pub const DEFAULT_PLAYER: &str = "play";

/// How the synthesizer shares the terminal with us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// The live view owns the terminal. The child runs quiet with its
    /// output discarded.
    Interactive,
    /// No view. The child inherits the terminal and prints its own meter.
    Foreground,
}

impl InvocationMode {
    pub fn for_ui(ui_enabled: bool) -> Self {
        if ui_enabled {
            InvocationMode::Interactive
        } else {
            InvocationMode::Foreground
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthCommand {
    pub program: String,
    pub args: Vec<String>,
    pub mode: InvocationMode,
}

impl SynthCommand {
    pub fn for_state(program: impl Into<String>, state: &ParameterState) -> Self {
        Self {
            program: program.into(),
            args: build_args(state),
            mode: InvocationMode::for_ui(state.ui_enabled()),
        }
    }

    /// Shell-style rendering for logs.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn build_args(state: &ParameterState) -> Vec<String> {
    let constants = state.constants();
    let mut args = Vec::with_capacity(28);

    if InvocationMode::for_ui(state.ui_enabled()) == InvocationMode::Interactive {
        args.push("-q".to_string());
    }

    args.extend([
        "-b".to_string(),
        constants.bit_depth.to_string(),
        "-c".to_string(),
        constants.channels.to_string(),
        "--null".to_string(),
        "synth".to_string(),
    ]);

    if let Some(duration) = state.duration() {
        args.push(duration.as_str().to_string());
    }

    args.extend([
        state.color().synth_type(),
        "band".to_string(),
        "-n".to_string(),
        state.center_frequency_hz().to_string(),
        constants.band_width_hz.to_string(),
        "tremolo".to_string(),
        constants.tremolo_speed.to_string(),
        constants.tremolo_depth.to_string(),
        "reverb".to_string(),
        state.reverb_depth().to_string(),
        "bass".to_string(),
        constants.bass_db.to_string(),
        "treble".to_string(),
        constants.treble_db.to_string(),
        "vol".to_string(),
        state.volume().to_string(),
    ]);

    args
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
