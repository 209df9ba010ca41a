//! Plain-terminal rendering of the lesson path.

use colored::{ColoredString, Colorize};

use crate::core::{Catalog, Lesson, LessonKind, Progress, group_by_section};
use crate::seed::{SeedCatalog, Wallet};
use crate::utils::truncate_string;

/// Brand colors per lesson kind (first stop of each tile gradient).
const fn kind_rgb(kind: LessonKind) -> (u8, u8, u8) {
    match kind {
        LessonKind::Core => (0x15, 0xc2, 0xb8),
        LessonKind::Reading => (0x8a, 0x5c, 0xf6),
        LessonKind::Listening => (0xf9, 0x73, 0x16),
        LessonKind::Video => (0xf4, 0x3f, 0x5e),
    }
}

fn paint(text: &str, kind: LessonKind, color: bool) -> ColoredString {
    if color {
        let (r, g, b) = kind_rgb(kind);
        text.truecolor(r, g, b).bold()
    } else {
        text.normal()
    }
}

/// One path tile on a single line. Tiles zig-zag: even positions sit on the
/// left, odd positions are indented.
#[must_use]
pub fn render_tile(lesson: &Lesson, position: usize, width: usize, color: bool) -> String {
    let indent = if position % 2 == 0 { 2 } else { 8 };
    let glyph = if lesson.unlocked {
        lesson.kind.glyph()
    } else {
        "🔒"
    };
    let kind = lesson.kind.as_str().to_uppercase();
    let title = truncate_string(&lesson.title, width);
    let label = paint(&format!("{kind:<9}"), lesson.kind, color && lesson.unlocked);
    let line = format!(
        "{:indent$}{glyph} {label} {title}  {}",
        "",
        lesson.star_glyphs()
    );
    if color && !lesson.unlocked {
        line.dimmed().to_string()
    } else {
        line
    }
}

#[must_use]
pub fn render_wallet(wallet: &Wallet) -> String {
    wallet
        .chips()
        .iter()
        .map(|(label, value)| format!("{label} {value}"))
        .collect::<Vec<_>>()
        .join("  ")
}

#[must_use]
pub fn progress_line(progress: &Progress) -> String {
    format!("Progress: {}", progress.summary())
}

/// The whole path, or one section of it, grouped under section titles.
/// Tile positions continue across sections like a single scrolling path.
#[must_use]
pub fn render_path(
    seed: &SeedCatalog,
    catalog: &Catalog,
    only_section: Option<u32>,
    width: usize,
    color: bool,
) -> String {
    let mut lines = Vec::new();
    let mut position = 0usize;
    for key in catalog.sections() {
        let lessons = group_by_section(catalog, key);
        if only_section.is_some_and(|only| only != key) {
            position += lessons.len();
            continue;
        }
        let title = seed.section_label(key);
        lines.push(if color {
            title.bold().to_string()
        } else {
            title
        });
        for lesson in lessons {
            lines.push(render_tile(lesson, position, width, color));
            position += 1;
        }
        lines.push(String::new());
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProgressionEngine;
    use crate::seed::{SectionInfo, builtin_catalog};

    #[test]
    fn test_locked_tile_shows_padlock() {
        let seed = builtin_catalog();
        let tile = render_tile(&seed.catalog.lessons()[1], 1, 40, false);
        assert_eq!(
            tile,
            "        🔒 READING   FCRA 101 Part 2 – Purpose and Scope  ☆☆☆"
        );
    }

    #[test]
    fn test_unlocked_tile_shows_kind_glyph() {
        let seed = builtin_catalog();
        let tile = render_tile(&seed.catalog.lessons()[0], 0, 40, false);
        assert_eq!(
            tile,
            "  📖 READING   FCRA 101 Part 1 – Name the Parties  ☆☆☆"
        );
    }

    #[test]
    fn test_render_single_section() {
        let lesson_a = Lesson::new("A", "Alpha", LessonKind::Core, 2, 1);
        let lesson_b = Lesson::new("B", "Beta", LessonKind::Video, 1, 2);
        let seed = SeedCatalog {
            sections: vec![SectionInfo::new(2, "Videos")],
            catalog: Catalog::new(vec![lesson_a, lesson_b]),
        };
        let mut engine = ProgressionEngine::new(seed.catalog.clone());
        engine.complete_step("A");
        engine.complete_step("A");

        let out = render_path(&seed, engine.catalog(), Some(2), 40, false);
        insta::assert_snapshot!(out, @r"
        Videos
                🎥 VIDEO     Beta  ☆
        ");
    }

    #[test]
    fn test_progress_line() {
        let progress = Progress {
            earned: 4,
            max: 9,
            percent: 44,
        };
        assert_eq!(progress_line(&progress), "Progress: 4/9 (44%)");
    }

    #[test]
    fn test_wallet_chips() {
        assert_eq!(render_wallet(&Wallet::default()), "🪙 10  🔥 0  💎 189  ⚡ 25");
    }
}
