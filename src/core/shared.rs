//! Thread-safe handle around the progression engine.
//!
//! Completion events may arrive from more than one place (the terminal UI
//! event loop, scripted steps). Each `complete_step` runs under one lock so
//! the "one star, at most one unlock per call" guarantee holds; readers only
//! ever see owned snapshots.

use std::sync::Arc;

use parking_lot::Mutex;

use super::catalog::Catalog;
use super::progression::{Progress, ProgressionEngine, StepOutcome};

#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<ProgressionEngine>>,
}

impl SharedEngine {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ProgressionEngine::new(catalog))),
        }
    }

    pub fn complete_step(&self, lesson_id: &str) -> StepOutcome {
        self.inner.lock().complete_step(lesson_id)
    }

    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.inner.lock().snapshot()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.inner.lock().progress()
    }
}
