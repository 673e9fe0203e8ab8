//! Controller layer: input events, the interactive state machine and its effects.

pub mod events;
pub mod reducer;

pub use events::{translate, InputEvent};
pub use reducer::{App, Effect};
