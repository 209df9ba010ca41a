//! Core lesson types and progression logic

pub mod catalog;
pub mod lesson;
pub mod progression;
pub mod shared;

pub use catalog::Catalog;
pub use lesson::{DEFAULT_HINT, Lesson, LessonKind, LessonState};
pub use progression::{Progress, ProgressionEngine, StepOutcome, compute_progress, group_by_section, section_progress};
pub use shared::SharedEngine;
