use predicates::str::contains;

mod common;
use common::{HEADER, abq, read_rows, setup_out_dir, today_file};

#[test]
fn test_add_creates_daily_file_with_header() {
    let dir = setup_out_dir("cli_add_creates");
    let dir_str = dir.to_string_lossy().to_string();

    abq()
        .args([
            "--test",
            "--dir",
            &dir_str,
            "add",
            "--date",
            "1/15",
            "--time",
            "8:00",
            "--technician",
            "Alice",
            "--humidity",
            "12.5",
            "--temperature",
            "22",
            "--light",
            "10",
            "--plants",
            "3",
            "--blossoms",
            "50",
            "--fruit",
            "2",
            "--max-height",
            "30.5",
            "--min-height",
            "5",
            "--median-height",
            "15.2",
            "--notes",
            "ok, fine",
        ])
        .assert()
        .success()
        .stdout(contains("Record saved"));

    let rows = read_rows(&today_file(&dir));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], HEADER.to_vec());
    assert_eq!(
        rows[1],
        vec![
            "1/15", "8:00", "Alice", "12.5", "22.0", "10", "false", "3", "50", "2", "30.5",
            "5.0", "15.2", "ok, fine"
        ]
    );
}

#[test]
fn test_add_twice_appends_rows() {
    let dir = setup_out_dir("cli_add_twice");
    let dir_str = dir.to_string_lossy().to_string();

    for _ in 0..2 {
        abq()
            .args(["--test", "--dir", &dir_str, "add", "--technician", "Bob", "--fault"])
            .assert()
            .success();
    }

    let rows = read_rows(&today_file(&dir));
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], rows[2]);
    assert_eq!(rows[1][2], "Bob");
    assert_eq!(rows[1][6], "true");
}

#[test]
fn test_add_truncates_long_date_with_warning() {
    let dir = setup_out_dir("cli_add_date");
    let dir_str = dir.to_string_lossy().to_string();

    abq()
        .args(["--test", "--dir", &dir_str, "add", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("keystroke(s) rejected"));

    let rows = read_rows(&today_file(&dir));
    assert_eq!(rows[1][0], "2024-");
}

#[test]
fn test_add_bad_number_saves_empty_cell() {
    let dir = setup_out_dir("cli_add_bad_number");
    let dir_str = dir.to_string_lossy().to_string();

    abq()
        .args(["--test", "--dir", &dir_str, "add", "--light", "bright"])
        .assert()
        .success()
        .stdout(contains("saved empty"));

    let rows = read_rows(&today_file(&dir));
    assert_eq!(rows[1][5], "");
}

#[test]
fn test_add_rejects_unknown_time() {
    let dir = setup_out_dir("cli_add_time");
    let dir_str = dir.to_string_lossy().to_string();

    abq()
        .args(["--test", "--dir", &dir_str, "add", "--time", "9:00"])
        .assert()
        .failure();

    assert!(!today_file(&dir).exists());
}

#[test]
fn test_add_into_missing_dir_creates_it() {
    let dir = setup_out_dir("cli_add_nested").join("records");
    let dir_str = dir.to_string_lossy().to_string();

    abq()
        .args(["--test", "--dir", &dir_str, "add"])
        .assert()
        .success();

    assert!(today_file(&dir).exists());
}

#[test]
fn test_fields_lists_every_column() {
    let mut assert = abq().args(["--test", "fields"]).assert().success();
    for name in HEADER {
        assert = assert.stdout(contains(name));
    }
    assert
        .stdout(contains("Record Information"))
        .stdout(contains("max 5 chars"));
}

#[test]
fn test_init_in_test_mode_creates_output_dir() {
    let dir = setup_out_dir("cli_init").join("out");
    let dir_str = dir.to_string_lossy().to_string();

    abq()
        .args(["--test", "--dir", &dir_str, "init"])
        .assert()
        .success()
        .stdout(contains("Initialization completed"));

    assert!(dir.is_dir());
}

#[test]
fn test_config_print_shows_output_dir() {
    abq()
        .args(["--test", "--dir", "/tmp/abq_records", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("output_dir: /tmp/abq_records"))
        .stdout(contains("file_prefix: abq_data_record"));
}
