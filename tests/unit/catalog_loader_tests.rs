use std::path::PathBuf;

use everyday_winners::EwError;
use everyday_winners::config::CatalogConfig;
use everyday_winners::core::{DEFAULT_HINT, LessonKind, ProgressionEngine};
use everyday_winners::seed::load_catalog;

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn catalog_config(relative: &str, allow_duplicate_ids: bool) -> CatalogConfig {
    CatalogConfig {
        path: Some(fixture_path(relative)),
        allow_duplicate_ids,
    }
}

#[test]
fn short_course_loads_in_initial_state() {
    let seed = load_catalog(&catalog_config(
        "tests/fixtures/catalogs/short_course.toml",
        false,
    ))
    .expect("load catalog");

    let lessons = seed.catalog.lessons();
    assert_eq!(lessons.len(), 3);
    assert!(lessons[0].unlocked);
    assert!(!lessons[2].unlocked, "file values for unlocked are ignored");
    assert_eq!(lessons[2].stars, 0, "file values for stars are ignored");
    assert_eq!(lessons[2].kind, LessonKind::Video);
    assert_eq!(lessons[0].hint, DEFAULT_HINT);
    assert_eq!(lessons[1].hint, "Look for accounts you never opened.");
    assert_eq!(seed.section_label(2), "Debt Collection");
}

#[test]
fn duplicate_ids_rejected_by_default() {
    let err = load_catalog(&catalog_config(
        "tests/fixtures/catalogs/duplicates.json",
        false,
    ))
    .unwrap_err();
    assert!(matches!(err, EwError::Catalog(ref msg) if msg.contains("R1")));
}

#[test]
fn duplicate_ids_allowed_complete_first_match() {
    let seed = load_catalog(&catalog_config(
        "tests/fixtures/catalogs/duplicates.json",
        true,
    ))
    .expect("load catalog");
    let mut engine = ProgressionEngine::new(seed.catalog);

    let outcome = engine.complete_step("R1");

    assert_eq!(outcome.newly_unlocked.as_deref(), Some("R2"));
    let lessons = engine.catalog().lessons();
    assert_eq!(lessons[0].stars, 1);
    assert_eq!(lessons[2].stars, 0);
    assert!(!lessons[2].unlocked);
}

#[test]
fn missing_catalog_file_is_catalog_error() {
    let err = load_catalog(&catalog_config("tests/fixtures/catalogs/nope.toml", false))
        .unwrap_err();
    assert_eq!(err.code(), "invalid_catalog");
}
