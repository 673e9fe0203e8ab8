//! `std::process` backed launcher.

use std::{
    io,
    process::{Child, Command, Stdio},
};

use noise_model::{InvocationMode, SynthCommand};

use crate::{ExitOutcome, ProcessHandle, ProcessLauncher};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    type Handle = SystemProcess;

    fn launch(&mut self, command: &SynthCommand) -> io::Result<SystemProcess> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);

        match command.mode {
            InvocationMode::Interactive => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
            InvocationMode::Foreground => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
        }

        let child = cmd.spawn()?;
        Ok(SystemProcess { child })
    }
}

#[derive(Debug)]
pub struct SystemProcess {
    child: Child,
}

impl ProcessHandle for SystemProcess {
    fn id(&self) -> u32 {
        self.child.id()
    }

    fn try_exit(&mut self) -> io::Result<Option<ExitOutcome>> {
        Ok(self.child.try_wait()?.map(ExitOutcome::from))
    }

    fn kill(&mut self) -> io::Result<()> {
        self.child.kill()
    }

    fn wait(&mut self) -> io::Result<ExitOutcome> {
        self.child.wait().map(ExitOutcome::from)
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

#[cfg(all(test, unix))]
#[path = "tests/process_tests.rs"]
mod tests;
