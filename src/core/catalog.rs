//! The ordered lesson catalog.

use std::collections::HashSet;

use serde::Serialize;

use super::lesson::Lesson;

/// Ordered sequence of lessons. Order drives unlock propagation; `section`
/// is only a display grouping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    lessons: Vec<Lesson>,
}

impl Catalog {
    /// Builds a catalog in its initial state: the first lesson unlocked, every
    /// other lesson locked, all stars at zero.
    #[must_use]
    pub fn new(lessons: Vec<Lesson>) -> Self {
        let lessons = lessons
            .into_iter()
            .enumerate()
            .map(|(idx, mut lesson)| {
                lesson.unlocked = idx == 0;
                lesson.stars = 0;
                lesson
            })
            .collect();
        Self { lessons }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lesson> {
        self.lessons.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// First lesson with this id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// Sequence index of the first lesson with this id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id == id)
    }

    /// Distinct section keys in order of first appearance.
    #[must_use]
    pub fn sections(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.lessons
            .iter()
            .filter(|lesson| seen.insert(lesson.section))
            .map(|lesson| lesson.section)
            .collect()
    }

    /// Ids that occur more than once, each reported once, in sequence order.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut out = Vec::new();
        for lesson in &self.lessons {
            if !seen.insert(lesson.id.as_str()) && reported.insert(lesson.id.as_str()) {
                out.push(lesson.id.clone());
            }
        }
        out
    }

    pub(crate) fn lessons_mut(&mut self) -> &mut [Lesson] {
        &mut self.lessons
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Lesson;
    type IntoIter = std::slice::Iter<'a, Lesson>;

    fn into_iter(self) -> Self::IntoIter {
        self.lessons.iter()
    }
}
