//! Screen navigation.
//!
//! Exactly one screen is active at a time. Opening a screen pushes the
//! current one on a back stack; `back` pops it, `close` returns to the path.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Lesson;

/// Bottom navigation tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Home,
    Backpack,
    Videos,
    Leaderboard,
    Shop,
    Messages,
}

impl Tab {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Backpack,
        Self::Videos,
        Self::Leaderboard,
        Self::Shop,
        Self::Messages,
    ];

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Backpack => "🎒",
            Self::Videos => "🎥",
            Self::Leaderboard => "🏆",
            Self::Shop => "🐟",
            Self::Messages => "💬",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Backpack => "Backpack",
            Self::Videos => "Videos",
            Self::Leaderboard => "Leaderboard",
            Self::Shop => "Shop",
            Self::Messages => "Messages",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "screen")]
pub enum Screen {
    Path,
    Lesson { lesson_id: String },
    Leaderboard,
    Stats,
    Tab { tab: Tab },
}

impl Screen {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Path => "Credit Path",
            Self::Lesson { .. } => "Lesson",
            Self::Leaderboard => "Leaderboard",
            Self::Stats => "Stats",
            Self::Tab { tab } => tab.label(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
    history: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Screen::Path,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn current(&self) -> &Screen {
        &self.current
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Id of the open lesson, if the lesson screen is active.
    #[must_use]
    pub fn open_lesson_id(&self) -> Option<&str> {
        match &self.current {
            Screen::Lesson { lesson_id } => Some(lesson_id.as_str()),
            _ => None,
        }
    }

    /// Opens a lesson. Locked lessons cannot be opened; returns whether the
    /// screen changed.
    pub fn open_lesson(&mut self, lesson: &Lesson) -> bool {
        if !lesson.unlocked {
            debug!(lesson_id = %lesson.id, "ignoring tap on locked lesson");
            return false;
        }
        self.push(Screen::Lesson {
            lesson_id: lesson.id.clone(),
        });
        true
    }

    pub fn open_leaderboard(&mut self) {
        self.push(Screen::Leaderboard);
    }

    pub fn open_stats(&mut self) {
        self.push(Screen::Stats);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        match tab {
            Tab::Home => self.close(),
            Tab::Leaderboard => self.open_leaderboard(),
            other => self.push(Screen::Tab { tab: other }),
        }
    }

    /// Returns to the previous screen; the path is the bottom of the stack.
    pub fn back(&mut self) {
        self.current = self.history.pop().unwrap_or(Screen::Path);
    }

    /// Drops all history and shows the path.
    pub fn close(&mut self) {
        self.history.clear();
        self.current = Screen::Path;
    }

    fn push(&mut self, screen: Screen) {
        if self.current == screen {
            return;
        }
        debug!(from = ?self.current, to = ?screen, "navigate");
        let previous = std::mem::replace(&mut self.current, screen);
        self.history.push(previous);
    }
}
