//! everyday_winners - Everyday Winners credit path
//!
//! Lesson progression engine for a gamified credit-education path, with the
//! seed catalog, screen navigation, document extraction and the `ew`
//! terminal client built around it.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod documents;
pub mod error;
pub mod navigation;
pub mod seed;
pub mod test_utils;
pub mod tui;
pub mod utils;

pub use error::{EwError, Result};
