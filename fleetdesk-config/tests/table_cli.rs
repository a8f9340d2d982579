use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

const MANAGED: &[&str] = &[
    "FLEETDESK_PAGE_SIZE",
    "FLEETDESK_PAGE_WINDOW",
    "FLEETDESK_RECORDS_DIR",
    "FLEETDESK_CONFIG_PATH",
];

fn workspace_with_shifts() -> TempDir {
    let dir = tempdir().unwrap();
    let exports = dir.path().join("exports");
    fs::create_dir_all(&exports).unwrap();

    let shifts: Vec<Value> = (1..=25)
        .map(|i| {
            json!({
                "id": i,
                "shift_name": format!("Shift {i:02}"),
                "start_time": format!("{:02}:00", i % 24),
                "end_time": "23:59",
                "is_night_shift": i % 2 == 0,
            })
        })
        .collect();
    fs::write(
        exports.join("shifts.json"),
        serde_json::to_vec(&shifts).unwrap(),
    )
    .unwrap();
    fs::write(exports.join("diesel.json"), "{ not json").unwrap();
    dir
}

fn command(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fleetdesk-table");
    cmd.current_dir(dir.path()).env("RUST_LOG", "off");
    for key in MANAGED {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn screens_lists_every_slug() {
    let dir = tempdir().unwrap();
    let out = command(&dir)
        .arg("screens")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    for slug in ["projects", "employees", "equipment", "shifts", "expenses"] {
        assert!(text.contains(slug), "missing {slug}");
    }
    assert!(text.contains("time_of_day"), "time columns not labelled");
}

#[test]
fn view_pages_through_sorted_rows() {
    let dir = workspace_with_shifts();
    let out = command(&dir)
        .args([
            "view",
            "shifts",
            "--sort",
            "shift_name",
            "--direction",
            "desc",
            "--page",
            "3",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let view: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(view["total_items"], 25);
    assert_eq!(view["total_pages"], 3);
    assert_eq!(view["current_page"], 3);
    assert_eq!(view["range_label"], "21-25 of 25");
    assert_eq!(view["rows"][0]["shift_name"], "Shift 05");
}

#[test]
fn view_search_narrows_and_clamps_page() {
    let dir = workspace_with_shifts();
    let out = command(&dir)
        .args(["view", "shifts", "-s", "shift 1", "-p", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    assert!(text.contains("Shift 10"));
    assert!(!text.contains("Shift 20"));
    assert!(text.contains("page 1/1"), "{text}");
    assert!(text.contains("filtered from 25"));
}

#[test]
fn env_file_sets_page_size() {
    let dir = workspace_with_shifts();
    fs::write(dir.path().join(".env"), "FLEETDESK_PAGE_SIZE=20\n").unwrap();

    let out = command(&dir)
        .args(["view", "shifts", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let view: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(view["rows"].as_array().unwrap().len(), 20);
    assert_eq!(view["page_window"], json!([1, 2]));
}

#[test]
fn rejects_unknown_screen_and_page_size() {
    let dir = workspace_with_shifts();
    command(&dir).args(["view", "timesheets"]).assert().failure();
    command(&dir)
        .args(["view", "shifts", "--page-size", "15"])
        .assert()
        .failure();
}

#[test]
fn check_flags_malformed_exports() {
    let dir = workspace_with_shifts();
    let output = command(&dir).arg("check").assert().failure();
    let text = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(text.contains("[ok] Shifts: 25 records"), "{text}");
    assert!(text.contains("[skip] Projects"), "{text}");
    assert!(text.contains("Diesel"), "{text}");
}
