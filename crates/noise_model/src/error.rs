use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("volume must be a finite, non-negative number, got {0}")]
    InvalidVolume(f64),
    #[error("invalid duration '{0}': expected whole seconds or [[hh:]mm:]ss")]
    InvalidDuration(String),
    #[error("unknown noise color '{0}': expected one of pink, brown, white")]
    UnknownColor(String),
}
