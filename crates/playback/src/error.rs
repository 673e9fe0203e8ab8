use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to start synthesizer '{program}': {source}")]
    Spawn { program: String, source: io::Error },
    #[error("failed to stop synthesizer pid {pid}: {source}")]
    Terminate { pid: u32, source: io::Error },
    #[error("synthesizer pid {pid} still running {grace_ms}ms after kill")]
    TerminateTimeout { pid: u32, grace_ms: u128 },
    #[error("failed waiting on synthesizer pid {pid}: {source}")]
    Wait { pid: u32, source: io::Error },
}

impl PlaybackError {
    /// True when the executable itself could not be found.
    pub fn is_missing_program(&self) -> bool {
        matches!(
            self,
            PlaybackError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
