//! Lesson records and their per-lesson progression state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hint shown on every seeded lesson screen.
pub const DEFAULT_HINT: &str = "Teach credit with micro-challenges: 60-90s cards, tap-to-reveal terms, \
quick quizzes, and \"apply it to your life\" prompts.";

/// Lesson flavour. Only affects presentation, never progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    #[default]
    Core,
    Reading,
    Listening,
    Video,
}

impl LessonKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Reading => "reading",
            Self::Listening => "listening",
            Self::Video => "video",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Core => "⭐",
            Self::Reading => "📖",
            Self::Listening => "🎧",
            Self::Video => "🎥",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of instructional content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub kind: LessonKind,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub stars: u32,
    pub total: u32,
    pub section: u32,
    #[serde(default = "default_hint")]
    pub hint: String,
}

fn default_hint() -> String {
    DEFAULT_HINT.to_string()
}

/// Where a lesson sits in its `(unlocked, stars)` lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum LessonState {
    Locked,
    InProgress { stars: u32 },
    Finished,
}

impl Lesson {
    /// A locked lesson with no stars and the default hint.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: LessonKind,
        total: u32,
        section: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            unlocked: false,
            stars: 0,
            total,
            section,
            hint: default_hint(),
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.unlocked && self.stars >= self.total
    }

    #[must_use]
    pub const fn state(&self) -> LessonState {
        if !self.unlocked {
            LessonState::Locked
        } else if self.stars >= self.total {
            LessonState::Finished
        } else {
            LessonState::InProgress { stars: self.stars }
        }
    }

    /// Adds one star, clamped to `total`. Returns whether the count changed.
    pub(crate) fn add_star(&mut self) -> bool {
        let next = self.stars.saturating_add(1).min(self.total);
        let changed = next != self.stars;
        self.stars = next;
        changed
    }

    /// `★★☆` style glyph row.
    #[must_use]
    pub fn star_glyphs(&self) -> String {
        (0..self.total)
            .map(|i| if i < self.stars { '★' } else { '☆' })
            .collect()
    }
}
