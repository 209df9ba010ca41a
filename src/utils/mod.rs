//! Utility functions and helpers.

pub mod format;

pub use format::*;
