#![allow(dead_code)]
use abq_data_entry::store::{DEFAULT_PREFIX, daily_file_name};
use abq_data_entry::utils::date::today;
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn abq() -> Command {
    cargo_bin_cmd!("abq-data-entry")
}

/// Create an empty, unique output directory inside the system temp dir
pub fn setup_out_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_abq_data_entry", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path of today's record file inside `dir`
pub fn today_file(dir: &Path) -> PathBuf {
    dir.join(daily_file_name(DEFAULT_PREFIX, today()))
}

/// Parse a record file into rows of cells (header included)
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open record file");
    rdr.records()
        .map(|r| r.expect("csv row").iter().map(str::to_string).collect())
        .collect()
}

pub const HEADER: [&str; 14] = [
    "Date",
    "Time",
    "Technician",
    "Humidity",
    "Temperature",
    "Light",
    "Equipment Fault",
    "Plants",
    "Blossoms",
    "Fruit",
    "Max. Height",
    "Min. Height",
    "Median Height",
    "Notes",
];
