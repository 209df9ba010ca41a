use everyday_winners::cli::render::{progress_line, render_path};
use everyday_winners::core::{Catalog, Lesson, LessonKind, ProgressionEngine};
use everyday_winners::seed::{SeedCatalog, SectionInfo, builtin_catalog};

#[test]
fn snapshot_builtin_section_two_locked() {
    let seed = builtin_catalog();
    let out = render_path(&seed, &seed.catalog, Some(2), 44, false);
    insta::assert_snapshot!(out, @r"
    Section 2 – FDCPA Basics
      🔒 READING   FDCPA 101 Part 1 – Overview  ☆☆☆
            🔒 READING   FDCPA 101 Part 2 – Communication Rules  ☆☆☆
      🔒 CORE      FDCPA 101 Quiz  ☆☆☆
            🔒 CORE      FDCPA 101 Workbook  ☆☆☆
    ");
}

#[test]
fn snapshot_path_after_finishing_first_lesson() {
    let seed = SeedCatalog {
        sections: vec![SectionInfo::new(1, "Warm-up"), SectionInfo::new(2, "Media")],
        catalog: Catalog::new(vec![
            Lesson::new("A", "Read the notice", LessonKind::Reading, 2, 1),
            Lesson::new("B", "Listen to the call", LessonKind::Listening, 2, 1),
            Lesson::new("C", "Watch the walkthrough", LessonKind::Video, 1, 2),
        ]),
    };
    let mut engine = ProgressionEngine::new(seed.catalog.clone());
    engine.complete_step("A");
    engine.complete_step("A");
    engine.complete_step("B");

    let out = format!(
        "{}\n\n{}",
        progress_line(&engine.progress()),
        render_path(&seed, engine.catalog(), None, 44, false)
    );
    insta::assert_snapshot!(out, @r"
    Progress: 3/5 (60%)

    Warm-up
      📖 READING   Read the notice  ★★
            🎧 LISTENING Listen to the call  ★☆

    Media
      🔒 VIDEO     Watch the walkthrough  ☆
    ");
}

#[test]
fn snapshot_long_titles_are_truncated() {
    let seed = SeedCatalog {
        sections: Vec::new(),
        catalog: Catalog::new(vec![Lesson::new(
            "L",
            "A very long lesson title that keeps going",
            LessonKind::Core,
            1,
            7,
        )]),
    };
    let out = render_path(&seed, &seed.catalog, None, 16, false);
    insta::assert_snapshot!(out, @r"
    Section 7
      ⭐ CORE      A very long l...  ☆
    ");
}
