use super::fixture::TestFixture;

/// Every lesson id of the built-in path, in order.
fn builtin_ids(fixture: &TestFixture) -> Vec<String> {
    let output = fixture.run_ew(&["--robot", "catalog"]);
    assert!(output.success);
    output.json()["data"]["lessons"]
        .as_array()
        .expect("lessons array")
        .iter()
        .map(|lesson| lesson["id"].as_str().expect("id").to_string())
        .collect()
}

#[test]
fn test_finishing_the_whole_path() {
    let fixture = TestFixture::new("test_finishing_the_whole_path");
    let ids = builtin_ids(&fixture);
    assert_eq!(ids.len(), 20);

    let mut args = vec!["--robot", "complete", "--times", "3"];
    args.extend(ids.iter().map(String::as_str));
    let output = fixture.run_ew(&args);
    assert!(output.success);

    let json = output.json();
    let progress = &json["data"]["progress"];
    assert_eq!(progress["earned"], 60);
    assert_eq!(progress["percent"], 100);
    let unlocks = json["data"]["steps"]
        .as_array()
        .expect("steps")
        .iter()
        .filter(|step| !step["newly_unlocked"].is_null())
        .count();
    assert_eq!(unlocks, 19, "every lesson but the first gets unlocked once");
}

#[test]
fn test_out_of_order_steps_do_nothing() {
    let fixture = TestFixture::new("test_out_of_order_steps_do_nothing");
    let output = fixture.run_ew(&["--robot", "progress", "--steps", "S1Quiz,S3Workbook,S9"]);
    assert!(output.success);
    let json = output.json();
    assert_eq!(json["data"]["earned"], 0);
    assert_eq!(json["data"]["steps_applied"], 3);
}

#[test]
fn test_each_run_is_a_fresh_session() {
    let fixture = TestFixture::new("test_each_run_is_a_fresh_session");
    let first = fixture.run_ew(&["complete", "S1P1"]);
    assert!(first.success);
    assert!(first.stdout.contains("Progress: 1/60 (2%)"));

    let second = fixture.run_ew(&["path", "--section", "1"]);
    assert!(second.success);
    assert!(second.stdout.contains("Progress: 0/60 (0%)"));
}

#[test]
fn test_project_config_changes_wallet() {
    let fixture = TestFixture::new("test_project_config_changes_wallet");
    fixture.write_config("[economy]\ncoins = 500\nenergy = 5\n");

    let output = fixture.run_ew(&["path"]);
    assert!(output.success);
    assert!(output.stdout.contains("🪙 500  🔥 0  💎 189  ⚡ 5"));
}
