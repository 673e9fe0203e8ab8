//! The interactive state machine: key events in, parameter changes and
//! synthesizer restarts out.

use std::time::Duration;

use noise_model::ParameterState;
use playback::{PlaybackController, PlaybackError, PlaybackStatus, ProcessLauncher};
use tracing::{debug, info};

use crate::controller::events::{InputEvent, KeyAction};
use crate::tui::render::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    HelpOverlay,
    Terminating,
    Exited,
}

/// What the event loop has to do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Idle,
    Redraw,
    Exit,
}

pub struct App<L: ProcessLauncher> {
    params: ParameterState,
    playback: PlaybackController<L>,
    mode: Mode,
    input_timeout: Duration,
    status: PlaybackStatus,
}

impl<L: ProcessLauncher> App<L> {
    pub fn new(
        params: ParameterState,
        playback: PlaybackController<L>,
        input_timeout: Duration,
    ) -> Self {
        Self {
            params,
            playback,
            mode: Mode::Running,
            input_timeout,
            status: PlaybackStatus::Stopped,
        }
    }

    pub fn params(&self) -> &ParameterState {
        &self.params
    }

    pub fn playback(&self) -> &PlaybackController<L> {
        &self.playback
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// How long the loop may block on input. `None` waits indefinitely.
    pub fn input_timeout(&self) -> Option<Duration> {
        match self.mode {
            Mode::HelpOverlay => None,
            _ => Some(self.input_timeout),
        }
    }

    /// Launches the first synthesizer. Returns false if the view was already
    /// started, in which case nothing is launched.
    pub fn start(&mut self) -> Result<bool, PlaybackError> {
        if !self.playback.mark_ui_started() {
            return Ok(false);
        }
        self.restart()?;
        Ok(true)
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<Effect, PlaybackError> {
        if event == InputEvent::Interrupt {
            info!("interrupt received");
            return Ok(self.stop_and_exit());
        }

        match self.mode {
            Mode::Terminating | Mode::Exited => Ok(Effect::Exit),
            Mode::HelpOverlay => Ok(self.handle_help(event)),
            Mode::Running => self.handle_running(event),
        }
    }

    /// Stops playback and moves to [`Mode::Exited`]. Stop failures are
    /// logged by the playback controller and never surface here.
    pub fn stop_and_exit(&mut self) -> Effect {
        self.mode = Mode::Terminating;
        self.playback.stop();
        self.status = PlaybackStatus::Stopped;
        self.mode = Mode::Exited;
        Effect::Exit
    }

    pub fn view(&self) -> View<'_> {
        View {
            params: &self.params,
            status: self.status,
            help: self.mode == Mode::HelpOverlay,
        }
    }

    fn handle_help(&mut self, event: InputEvent) -> Effect {
        match event {
            InputEvent::Key('h') => {
                self.mode = Mode::Running;
                Effect::Redraw
            }
            InputEvent::Resize => Effect::Redraw,
            _ => Effect::Idle,
        }
    }

    fn handle_running(&mut self, event: InputEvent) -> Result<Effect, PlaybackError> {
        match event {
            InputEvent::Key(key) => match KeyAction::from_key(key) {
                Some(action) => self.apply(action),
                None => Ok(Effect::Idle),
            },
            InputEvent::Resize => Ok(Effect::Redraw),
            InputEvent::Tick => Ok(self.refresh_status()),
            InputEvent::Interrupt => Ok(self.stop_and_exit()),
        }
    }

    fn apply(&mut self, action: KeyAction) -> Result<Effect, PlaybackError> {
        let changed = match action {
            KeyAction::Quit => return Ok(self.stop_and_exit()),
            KeyAction::ToggleHelp => {
                self.mode = Mode::HelpOverlay;
                return Ok(Effect::Redraw);
            }
            KeyAction::VolumeUp => self.params.increase_volume(),
            KeyAction::VolumeDown => self.params.decrease_volume(),
            KeyAction::ToggleMute => self.params.toggle_mute(),
            KeyAction::FrequencyUp => self.params.raise_frequency(),
            KeyAction::FrequencyDown => self.params.lower_frequency(),
            KeyAction::ReverbUp => self.params.raise_reverb(),
            KeyAction::ReverbDown => self.params.lower_reverb(),
            KeyAction::SetColor(color) => self.params.set_color(color),
        };

        if !changed {
            debug!(?action, "parameter already at limit");
            return Ok(Effect::Idle);
        }

        self.restart()?;
        Ok(Effect::Redraw)
    }

    fn restart(&mut self) -> Result<(), PlaybackError> {
        let pid = self.playback.restart(&self.params)?;
        self.status = PlaybackStatus::Playing { pid };
        Ok(())
    }

    fn refresh_status(&mut self) -> Effect {
        let status = self.playback.poll_status();
        if status == self.status {
            return Effect::Idle;
        }
        self.status = status;
        Effect::Redraw
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
