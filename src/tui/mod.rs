//! Interactive terminal UI for `ew play`.

pub mod play;

pub use play::{Flow, PlayApp, run_play};
