use std::{
    io, thread,
    time::{Duration, Instant},
};

use noise_model::{ParameterState, SynthCommand};
use tracing::{debug, info, warn};

pub mod error;
pub mod process;

pub use error::PlaybackError;
pub use process::{SystemLauncher, SystemProcess};

pub const DEFAULT_KILL_GRACE_MS: u64 = 500;
pub const DEFAULT_KILL_GRACE: Duration = Duration::from_millis(DEFAULT_KILL_GRACE_MS);
const REAP_POLL_INTERVAL: Duration = Duration::from_millis(10);
const FOREGROUND_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub code: Option<i32>,
    pub success: bool,
}

/// A running synthesizer. Implementations must not block in `try_exit` or `kill`.
pub trait ProcessHandle {
    fn id(&self) -> u32;
    fn try_exit(&mut self) -> io::Result<Option<ExitOutcome>>;
    fn kill(&mut self) -> io::Result<()>;
    fn wait(&mut self) -> io::Result<ExitOutcome>;
}

pub trait ProcessLauncher {
    type Handle: ProcessHandle;

    fn launch(&mut self, command: &SynthCommand) -> io::Result<Self::Handle>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing { pid: u32 },
    Finished(ExitOutcome),
}

/// Owns the single synthesizer process and replaces it on every restart.
///
/// The old child is always terminated before the new one is spawned, so two
/// synthesizers never compete for the audio device.
pub struct PlaybackController<L: ProcessLauncher> {
    launcher: L,
    program: String,
    kill_grace: Duration,
    current: Option<L::Handle>,
    last_exit: Option<ExitOutcome>,
    ui_started: bool,
    launches: u64,
}

impl<L: ProcessLauncher> PlaybackController<L> {
    pub fn new(launcher: L, program: impl Into<String>, kill_grace: Duration) -> Self {
        Self {
            launcher,
            program: program.into(),
            kill_grace,
            current: None,
            last_exit: None,
            ui_started: false,
            launches: 0,
        }
    }

    pub fn launches(&self) -> u64 {
        self.launches
    }

    pub fn has_live_process(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_pid(&self) -> Option<u32> {
        self.current.as_ref().map(ProcessHandle::id)
    }

    pub fn ui_started(&self) -> bool {
        self.ui_started
    }

    /// Latches the "view is up" flag. Returns true only on the first call.
    pub fn mark_ui_started(&mut self) -> bool {
        !std::mem::replace(&mut self.ui_started, true)
    }

    pub fn command_for(&self, state: &ParameterState) -> SynthCommand {
        SynthCommand::for_state(self.program.clone(), state)
    }

    /// Stops the current synthesizer, if any, then launches one for `state`.
    ///
    /// A failed stop is logged and does not prevent the launch. A failed
    /// launch leaves the controller with no live process.
    pub fn restart(&mut self, state: &ParameterState) -> Result<u32, PlaybackError> {
        self.stop();
        let handle = self.spawn(state)?;
        let pid = handle.id();
        self.current = Some(handle);
        Ok(pid)
    }

    /// Terminates the current synthesizer. Errors are logged, never returned.
    pub fn stop(&mut self) {
        self.last_exit = None;
        let Some(mut handle) = self.current.take() else {
            return;
        };
        let pid = handle.id();
        match terminate(&mut handle, self.kill_grace) {
            Ok(outcome) => debug!(pid, code = ?outcome.code, "synthesizer stopped"),
            Err(err) => warn!(pid, error = %err, "synthesizer did not stop cleanly"),
        }
    }

    /// Non-blocking check on the current child. A child that exited on its
    /// own (e.g. a `--duration` run) is reaped and reported as finished.
    pub fn poll_status(&mut self) -> PlaybackStatus {
        let Some(handle) = self.current.as_mut() else {
            return match self.last_exit {
                Some(outcome) => PlaybackStatus::Finished(outcome),
                None => PlaybackStatus::Stopped,
            };
        };

        let pid = handle.id();
        match handle.try_exit() {
            Ok(None) => PlaybackStatus::Playing { pid },
            Ok(Some(outcome)) => {
                info!(pid, code = ?outcome.code, "synthesizer exited");
                self.current = None;
                self.last_exit = Some(outcome);
                PlaybackStatus::Finished(outcome)
            }
            Err(err) => {
                warn!(pid, error = %err, "failed to poll synthesizer");
                PlaybackStatus::Playing { pid }
            }
        }
    }

    /// Runs one synthesizer to completion with the terminal handed over to it.
    ///
    /// `interrupted` is checked between polls. Once it returns true the child
    /// is terminated the same way `stop` does it and its outcome returned.
    pub fn run_foreground(
        &mut self,
        state: &ParameterState,
        mut interrupted: impl FnMut() -> bool,
    ) -> Result<ExitOutcome, PlaybackError> {
        self.stop();
        let mut handle = self.spawn(state)?;
        let pid = handle.id();

        let outcome = loop {
            if let Some(outcome) = handle
                .try_exit()
                .map_err(|source| PlaybackError::Wait { pid, source })?
            {
                info!(pid, code = ?outcome.code, "foreground synthesizer exited");
                break outcome;
            }
            if interrupted() {
                info!(pid, "interrupted, stopping foreground synthesizer");
                break terminate(&mut handle, self.kill_grace)?;
            }
            thread::sleep(FOREGROUND_POLL_INTERVAL);
        };

        self.last_exit = Some(outcome);
        Ok(outcome)
    }

    fn spawn(&mut self, state: &ParameterState) -> Result<L::Handle, PlaybackError> {
        let command = self.command_for(state);
        let handle = self
            .launcher
            .launch(&command)
            .map_err(|source| PlaybackError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        self.launches += 1;
        self.last_exit = None;
        info!(
            pid = handle.id(),
            launch = self.launches,
            command = %command.display_line(),
            "synthesizer started"
        );
        Ok(handle)
    }
}

impl<L: ProcessLauncher> Drop for PlaybackController<L> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Kills `handle` and polls until it is reaped or `grace` runs out.
fn terminate<H: ProcessHandle>(handle: &mut H, grace: Duration) -> Result<ExitOutcome, PlaybackError> {
    let pid = handle.id();

    if let Some(outcome) = handle
        .try_exit()
        .map_err(|source| PlaybackError::Terminate { pid, source })?
    {
        return Ok(outcome);
    }

    handle
        .kill()
        .map_err(|source| PlaybackError::Terminate { pid, source })?;

    let deadline = Instant::now() + grace;
    loop {
        match handle.try_exit() {
            Ok(Some(outcome)) => return Ok(outcome),
            Ok(None) if Instant::now() < deadline => thread::sleep(REAP_POLL_INTERVAL),
            Ok(None) => {
                return Err(PlaybackError::TerminateTimeout {
                    pid,
                    grace_ms: grace.as_millis(),
                })
            }
            Err(source) => return Err(PlaybackError::Terminate { pid, source }),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
