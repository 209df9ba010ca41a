use super::fixture::TestFixture;

const COURSE: &str = r#"
[[sections]]
key = 1
title = "Budgeting"

[[lessons]]
id = "B1"
title = "Track spending"
kind = "reading"
total = 2
section = 1

[[lessons]]
id = "B2"
title = "Build a buffer"
kind = "core"
total = 1
section = 1
"#;

#[test]
fn test_custom_catalog_round_trip_through_config() {
    let fixture = TestFixture::new("test_custom_catalog_round_trip_through_config");
    let catalog = fixture.write_file("course.toml", COURSE);
    fixture.write_config(&format!(
        "[catalog]\npath = {:?}\n",
        catalog.display().to_string()
    ));

    let check = fixture.run_ew(&["--robot", "catalog", "--check"]);
    assert!(check.success);
    let json = check.json();
    assert_eq!(json["data"]["valid"], true);
    assert_eq!(json["data"]["lessons"], 2);
    assert_eq!(json["data"]["sections"], 1);

    let run = fixture.run_ew(&["complete", "B1", "B1", "B2"]);
    assert!(run.success);
    assert!(run.stdout.contains("unlocked B2"));
    assert!(run.stdout.contains("Progress: 3/3 (100%)"));
}

#[test]
fn test_catalog_dump_is_loadable() {
    let fixture = TestFixture::new("test_catalog_dump_is_loadable");
    let dump = fixture.run_ew(&["catalog"]);
    assert!(dump.success);
    let path = fixture.write_file("dumped.toml", &dump.stdout);

    let check = fixture.run_ew(&["catalog", "--check", path.to_str().expect("utf-8 path")]);
    assert!(check.success);
    assert!(check.stdout.contains("Catalog is valid"));
    assert!(check.stdout.contains("20"));
}

#[test]
fn test_invalid_catalog_reports_problems() {
    let fixture = TestFixture::new("test_invalid_catalog_reports_problems");
    let path = fixture.write_file(
        "broken.toml",
        "[[lessons]]\nid = \"\"\ntitle = \"No id\"\nkind = \"core\"\ntotal = 0\nsection = 1\n",
    );

    let output = fixture.run_ew(&["catalog", "--check", path.to_str().expect("utf-8 path")]);
    assert!(output.success);
    assert!(output.stdout.contains("Catalog is invalid"));
    assert!(output.stdout.contains("1 lesson in 1 section"));
    assert!(output.stdout.contains("empty id"));
    assert!(output.stdout.contains("total = 0"));

    let load = fixture.run_ew(&["catalog", path.to_str().expect("utf-8 path")]);
    assert!(!load.success);
    assert!(load.stderr.contains("empty id"));
}
