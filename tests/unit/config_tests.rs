use std::fs;
use std::path::PathBuf;

use everyday_winners::config::Config;
use everyday_winners::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn parse_fixture(relative: &str) -> Config {
    let content = fs::read_to_string(fixture_path(relative)).expect("read fixture");
    toml::from_str(&content).expect("parse config")
}

#[test]
fn config_economy_and_display_from_fixtures() -> Result<(), String> {
    let cases = vec![
        TestCase::new(
            "default",
            "tests/fixtures/configs/default.toml",
            (10u32, 0u32, 189u32, 25u32, 44u32, true),
        ),
        TestCase::new(
            "classroom",
            "tests/fixtures/configs/classroom.toml",
            (100, 0, 189, 50, 30, false),
        ),
    ];

    run_table_tests(cases, |relative_path| {
        let config = parse_fixture(relative_path);
        (
            config.economy.coins,
            config.economy.flames,
            config.economy.gems,
            config.economy.energy,
            config.display.tile_width,
            config.display.color,
        )
    })
}

#[test]
fn config_robot_section_from_fixtures() -> Result<(), String> {
    let cases = vec![
        TestCase::new(
            "default",
            "tests/fixtures/configs/default.toml",
            ("json".to_string(), true),
        ),
        TestCase::new(
            "classroom",
            "tests/fixtures/configs/classroom.toml",
            ("jsonl".to_string(), false),
        ),
    ];

    run_table_tests(cases, |relative_path| {
        let config = parse_fixture(relative_path);
        (config.robot.format, config.robot.include_metadata)
    })
}

#[test]
fn config_default_fixture_matches_builtin_defaults() {
    let parsed = parse_fixture("tests/fixtures/configs/default.toml");
    let defaults = Config::default();
    assert_eq!(
        toml::to_string(&parsed).expect("serialize parsed"),
        toml::to_string(&defaults).expect("serialize defaults")
    );
}

#[test]
fn config_missing_sections_fall_back_to_defaults() {
    let config: Config = toml::from_str("").expect("parse empty");
    assert_eq!(config.documents.max_paragraphs, 200);
    assert!(config.catalog.path.is_none());
}

#[test]
fn config_catalog_path_resolves_beside_config_file() {
    let path = fixture_path("tests/fixtures/configs/classroom.toml");
    let root = path.parent().expect("fixture dir");
    let config = Config::load(Some(&path), root).expect("load config");
    let catalog = config.catalog.path.expect("catalog path");
    assert_eq!(catalog, root.join("../catalogs/short_course.toml"));
    assert!(catalog.is_file());
}
