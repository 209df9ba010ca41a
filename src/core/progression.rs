//! Lesson progression: star completion, unlock propagation and the progress
//! aggregate shown on the path header.
//!
//! The engine exclusively owns the [`Catalog`]. Callers get owned snapshots
//! back from every operation and never mutate lessons directly.

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::Catalog;
use super::lesson::Lesson;

/// Result of one `complete_step` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// The lesson after the call, `None` when the id was not found.
    pub lesson: Option<Lesson>,
    /// Id of the lesson this call unlocked, if any.
    pub newly_unlocked: Option<String>,
    /// Catalog snapshot after the call.
    pub catalog: Catalog,
}

impl StepOutcome {
    /// Whether the call changed anything.
    #[must_use]
    pub fn changed(&self, before: &Catalog) -> bool {
        self.catalog != *before
    }
}

/// Aggregate progress over a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub earned: u64,
    pub max: u64,
    pub percent: u32,
}

impl Progress {
    /// `earned/max (pct%)`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{} ({}%)", self.earned, self.max, self.percent)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    catalog: Catalog,
}

impl ProgressionEngine {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        compute_progress(&self.catalog)
    }

    /// Awards one star to the first lesson with `lesson_id`.
    ///
    /// Unknown ids and locked lessons are skipped without error. Stars are
    /// clamped at `total`; the call that finishes a lesson unlocks the next
    /// lesson in sequence order if it is still locked.
    pub fn complete_step(&mut self, lesson_id: &str) -> StepOutcome {
        let Some(idx) = self.catalog.position(lesson_id) else {
            debug!(lesson_id, "complete_step: lesson not found, skipping");
            return self.outcome(None, None);
        };

        let lessons = self.catalog.lessons_mut();
        if !lessons[idx].unlocked {
            debug!(lesson_id, "complete_step: lesson is locked, skipping");
            return self.outcome(Some(idx), None);
        }

        if lessons[idx].add_star() {
            debug!(
                lesson_id,
                stars = lessons[idx].stars,
                total = lessons[idx].total,
                "star awarded"
            );
        }

        let mut newly_unlocked = None;
        if lessons[idx].stars == lessons[idx].total {
            if let Some(next) = lessons.get_mut(idx + 1) {
                if !next.unlocked {
                    next.unlocked = true;
                    info!(finished = lesson_id, unlocked = %next.id, "lesson unlocked");
                    newly_unlocked = Some(next.id.clone());
                }
            }
        }

        self.outcome(Some(idx), newly_unlocked)
    }

    fn outcome(&self, idx: Option<usize>, newly_unlocked: Option<String>) -> StepOutcome {
        StepOutcome {
            lesson: idx.map(|idx| self.catalog.lessons()[idx].clone()),
            newly_unlocked,
            catalog: self.snapshot(),
        }
    }
}

/// Stars earned against stars available, rounded half up to a whole percent.
/// An empty catalog (or one with no stars available) reports 0%.
#[must_use]
pub fn compute_progress(catalog: &Catalog) -> Progress {
    progress_of(catalog.iter())
}

/// Progress restricted to one section.
#[must_use]
pub fn section_progress(catalog: &Catalog, section: u32) -> Progress {
    progress_of(group_by_section(catalog, section).into_iter())
}

fn progress_of<'a>(lessons: impl Iterator<Item = &'a Lesson>) -> Progress {
    let (earned, max) = lessons.fold((0u64, 0u64), |(earned, max), lesson| {
        (earned + u64::from(lesson.stars), max + u64::from(lesson.total))
    });
    let percent = if max == 0 {
        0
    } else {
        // round(earned / max * 100) without going through floats
        u32::try_from((earned * 200 + max) / (max * 2)).unwrap_or(u32::MAX)
    };
    Progress {
        earned,
        max,
        percent,
    }
}

/// Lessons whose `section` equals `section`, in catalog order.
#[must_use]
pub fn group_by_section(catalog: &Catalog, section: u32) -> Vec<&Lesson> {
    catalog
        .iter()
        .filter(|lesson| lesson.section == section)
        .collect()
}
