#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rp() -> Command {
    let mut cmd = cargo_bin_cmd!("rpunch");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunch.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Manual 09:00 / 13:00 / 14:00 / 18:00 day (8 hours worked).
pub fn add_full_day(db_path: &str, date: &str) {
    for (kind, time) in [
        ("in", "09:00"),
        ("lunch-out", "13:00"),
        ("lunch-in", "14:00"),
        ("out", "18:00"),
    ] {
        rp().args(["--db", db_path, "add", date, kind, time])
            .assert()
            .success();
    }
}

/// Fresh DB with two full days in the week of Monday 2025-10-13.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_full_day(db_path, "2025-10-13");
    add_full_day(db_path, "2025-10-14");
}
