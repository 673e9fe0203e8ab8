//! Noise parameters and the synthesizer invocation built from them.

pub mod domain;
pub mod error;
pub mod params;
pub mod protocol;

pub use domain::{NoiseColor, PlayDuration, SynthConstants};
pub use error::ParamError;
pub use params::ParameterState;
pub use protocol::{build_args, InvocationMode, SynthCommand, DEFAULT_PLAYER};
