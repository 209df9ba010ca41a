//! Structured log capture for tests.
//!
//! Capture is scoped to a closure and the current thread, so tests running
//! in parallel never see each other's events.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// A captured log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    #[must_use]
    pub fn new(level: Level, target: &str, message: &str) -> Self {
        Self {
            level,
            target: target.to_string(),
            message: message.to_string(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Entries captured during one [`capture_logs`] call.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    entries: Vec<LogEntry>,
}

impl CapturedLogs {
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(message))
    }

    #[must_use]
    pub fn contains(&self, level: Level, message: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.level == level && e.message.contains(message))
    }

    #[must_use]
    pub fn filter_by_level(&self, level: Level) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|e| e.level == Level::WARN)
    }

    /// One line per entry, for assertion failure output.
    #[must_use]
    pub fn display(&self) -> String {
        if self.entries.is_empty() {
            return String::from("No logs captured");
        }
        self.entries
            .iter()
            .map(|entry| {
                let fields = entry
                    .fields
                    .iter()
                    .map(|(key, value)| format!(" {key}={value}"))
                    .collect::<String>();
                format!("[{}] {}: {}{fields}", entry.level, entry.target, entry.message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct CaptureLayer {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl<S> tracing_subscriber::Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        struct Visitor<'a> {
            message: &'a mut String,
            fields: &'a mut Vec<(String, String)>,
        }

        impl tracing::field::Visit for Visitor<'_> {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    *self.message = value.to_string();
                } else {
                    self.fields.push((field.name().to_string(), value.to_string()));
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                let value = format!("{value:?}");
                if field.name() == "message" {
                    *self.message = value;
                } else {
                    self.fields.push((field.name().to_string(), value));
                }
            }
        }

        let metadata = event.metadata();
        let mut entry = LogEntry::new(*metadata.level(), metadata.target(), "");
        event.record(&mut Visitor {
            message: &mut entry.message,
            fields: &mut entry.fields,
        });
        self.entries.lock().push(entry);
    }
}

/// Run `f` with a capturing subscriber installed on this thread.
pub fn capture_logs<R>(filter: &str, f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(CaptureLayer {
            entries: Arc::clone(&entries),
        });
    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = CapturedLogs {
        entries: std::mem::take(&mut *entries.lock()),
    };
    (result, captured)
}

/// Assert that captured logs hold an entry with the given level and message.
#[macro_export]
macro_rules! assert_log_contains {
    ($logs:expr, $level:expr, $message:expr) => {{
        let logs = &$logs;
        assert!(
            logs.contains($level, $message),
            "Expected log with level {} containing '{}'\nCaptured logs:\n{}",
            $level,
            $message,
            logs.display()
        );
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, Lesson, LessonKind, ProgressionEngine};

    #[test]
    fn test_capture_unlock_event() {
        let catalog = Catalog::new(vec![
            Lesson::new("A", "Alpha", LessonKind::Core, 1, 1),
            Lesson::new("B", "Beta", LessonKind::Core, 1, 1),
        ]);
        let mut engine = ProgressionEngine::new(catalog);

        let (outcome, logs) = capture_logs("everyday_winners=debug", || engine.complete_step("A"));

        assert_eq!(outcome.newly_unlocked.as_deref(), Some("B"));
        crate::assert_log_contains!(logs, Level::INFO, "lesson unlocked");
        let unlock = logs.filter_by_level(Level::INFO)[0];
        assert_eq!(unlock.field("unlocked"), Some("B"));
        assert!(!logs.has_warnings());
    }

    #[test]
    fn test_unknown_lesson_logged_at_debug() {
        let mut engine = ProgressionEngine::new(Catalog::default());
        let (_, logs) = capture_logs("everyday_winners=debug", || engine.complete_step("ZZ"));
        crate::assert_log_contains!(logs, Level::DEBUG, "not found");
    }

    #[test]
    fn test_filter_hides_lower_levels() {
        let mut engine = ProgressionEngine::new(Catalog::default());
        let (_, logs) = capture_logs("everyday_winners=info", || engine.complete_step("ZZ"));
        assert!(logs.entries().is_empty());
        assert_eq!(logs.display(), "No logs captured");
    }

    #[test]
    fn test_log_entry_fields() {
        let entry = LogEntry::new(Level::WARN, "loader", "duplicate ids").with_field("ids", "S1");
        assert_eq!(entry.field("ids"), Some("S1"));
        assert_eq!(entry.field("missing"), None);
    }
}
