//! Terminal front-end: raw-mode handling, drawing and the input loop.

mod event_loop;
pub mod render;
pub mod terminal;

pub use event_loop::run;
