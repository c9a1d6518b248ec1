use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_full_day, init_db, init_db_with_data, rp, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());

    rp().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total punches:").and(contains("Integrity check passed")))
        .stdout(contains("up to date"));
}

#[test]
fn test_live_punch_cycle() {
    let db_path = setup_test_db("cli_live_cycle");
    init_db(&db_path);

    rp().args(["--db", &db_path, "punch", "in"])
        .assert()
        .success()
        .stdout(contains("Clock-In registered"));

    rp().args(["--db", &db_path, "punch", "in"])
        .assert()
        .failure()
        .stderr(contains("a Clock-In is already registered"));

    rp().args(["--db", &db_path, "punch", "back"])
        .assert()
        .failure()
        .stderr(contains("no Lunch-Out registered yet"));

    rp().args(["--db", &db_path, "punch", "lunch"])
        .assert()
        .success()
        .stdout(contains("Lunch-Out registered"));

    rp().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Next punch: lunch-in"));

    rp().args(["--db", &db_path, "punch", "out"])
        .assert()
        .failure()
        .stderr(contains("lunch break is still open"));

    rp().args(["--db", &db_path, "punch", "lunch-in"])
        .assert()
        .success();

    rp().args(["--db", &db_path, "punch", "clock-out"])
        .assert()
        .success()
        .stdout(contains("Clock-Out registered"));

    rp().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("day closed"));
}

#[test]
fn test_unknown_punch_type() {
    let db_path = setup_test_db("cli_unknown_type");
    init_db(&db_path);

    rp().args(["--db", &db_path, "punch", "coffee"])
        .assert()
        .failure()
        .stderr(contains("unknown punch type"));
}

#[test]
fn test_status_on_empty_day() {
    let db_path = setup_test_db("cli_status_empty");
    init_db(&db_path);

    rp().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No punches yet.").and(contains("Worked today:")))
        .stdout(contains("00:00:00"))
        .stdout(contains("Next punch: in"));
}

#[test]
fn test_manual_add_and_list() {
    let db_path = setup_test_db("cli_manual_list");
    init_db(&db_path);
    add_full_day(&db_path, "2025-10-13");

    rp().args(["--db", &db_path, "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("2025-10-13 Mon"))
        .stdout(contains("09:00").and(contains("18:00")))
        .stdout(contains("08h 00m"));
}

#[test]
fn test_manual_rules() {
    let db_path = setup_test_db("cli_manual_rules");
    init_db(&db_path);

    rp().args(["--db", &db_path, "add", "2025-10-13", "lunch-out", "13:00"])
        .assert()
        .failure()
        .stderr(contains("no Clock-In registered yet"));

    rp().args(["--db", &db_path, "add", "2025-10-13", "in", "9:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rp().args(["--db", &db_path, "add", "13-10-2025", "in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rp().args(["--db", &db_path, "add", "2025-10-13", "in", "09:00"])
        .assert()
        .success()
        .stdout(contains("Clock-In added on 2025-10-13 at 09:00"));

    rp().args(["--db", &db_path, "add", "2025-10-13", "in", "08:30"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rp().args(["--db", &db_path, "add", "2025-10-13", "in", "08:30", "--replace"])
        .assert()
        .success()
        .stdout(contains("moved to 08:30"));

    rp().args(["--db", &db_path, "list", "--period", "2025-10-13"])
        .assert()
        .success()
        .stdout(contains("08:30").and(contains("09:00").not()));
}

#[test]
fn test_delete_punches() {
    let db_path = setup_test_db("cli_delete");
    init_db(&db_path);
    add_full_day(&db_path, "2025-10-13");

    rp().args(["--db", &db_path, "del", "2025-10-13", "out"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."));

    rp().args(["--db", &db_path, "del", "2025-10-13", "out", "--yes"])
        .assert()
        .success()
        .stdout(contains("Clock-Out punch of 2025-10-13 deleted."));

    rp().args(["--db", &db_path, "del", "2025-10-13", "out", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No Clock-Out punch found for date 2025-10-13"));

    rp().args(["--db", &db_path, "del", "2025-10-13"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("3 punch(es) of 2025-10-13 deleted."));

    rp().args(["--db", &db_path, "del", "2025-10-13", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No punches found for date 2025-10-13"));
}

#[test]
fn test_week_summary() {
    let db_path = setup_test_db("cli_week");
    init_db_with_data(&db_path);

    rp().args(["--db", &db_path, "week", "2025-10-15"])
        .assert()
        .success()
        .stdout(contains("Week of 2025-10-13"))
        .stdout(contains("Worked: 16.00 h / goal 37.50 h (43%)"))
        .stdout(contains("21.50 hours remaining until goal."))
        .stdout(contains("Worked Hours | Total: 16.00 h (43%)"))
        .stdout(contains("Daily goal (7.50 h)"));

    rp().args(["--db", &db_path, "week", "2025-10-22", "--no-chart"])
        .assert()
        .success()
        .stdout(contains("Must reach 37.50 hours this week."))
        .stdout(contains("Worked Hours").not());
}

#[test]
fn test_log_print() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    add_full_day(&db_path, "2025-10-13");

    rp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("(2025-10-13 in)"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path);

    let out = temp_out("cli_backup", "sqlite");
    rp().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&out).exists());

    // Existing file, declined
    rp().args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled."));

    rp().args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip = out.replace(".sqlite", ".zip");
    assert!(std::path::Path::new(&zip).exists());
    assert!(!std::path::Path::new(&out).exists());
    std::fs::remove_file(&zip).ok();

    // The snapshot is a usable database
    let out = temp_out("cli_backup_snapshot", "sqlite");
    rp().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();
    rp().args(["--db", &out, "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("2025-10-14"));
}
