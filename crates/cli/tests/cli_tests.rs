use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trash-cleaner").unwrap();
    cmd.env("TRASH_CLEANER_DB_PATH", dir.path().join("cleaner.db")).env_remove("DATABASE_URL");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("trash-cleaner").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Empties the trash bin in small scheduled batches"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("trash-cleaner").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_status_of_fresh_store() {
    let dir = TempDir::new().unwrap();
    cli(&dir).arg("install").assert().success();
    cli(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"enabled\": false"))
        .stdout(predicate::str::contains("\"last_run\": \"Never\""));
}

#[test]
fn test_run_is_skipped_while_disabled() {
    let dir = TempDir::new().unwrap();
    cli(&dir).args(["seed", "--count", "5"]).assert().success();
    cli(&dir).arg("run").assert().success().stdout(predicate::str::contains("\"skipped\""));
}

#[test]
fn test_enabled_campaign_drains_in_batches() {
    let dir = TempDir::new().unwrap();
    cli(&dir).args(["seed", "--count", "30"]).assert().success().stdout("trashed 30 items\n");
    cli(&dir).arg("enable").assert().success();
    cli(&dir).arg("status").assert().success().stdout(predicate::str::contains("\"state\": \"running\""));

    cli(&dir)
        .env("TRASH_CLEANER_BATCH_SIZE", "20")
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleted\": 20"))
        .stdout(predicate::str::contains("\"follow_up\""));
    cli(&dir)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remaining\": 10"))
        .stdout(predicate::str::contains("\"percent\": 67"));

    cli(&dir)
        .env("TRASH_CLEANER_BATCH_SIZE", "20")
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"finished\""));
    cli(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"enabled\": false"))
        .stdout(predicate::str::contains("\"state\": \"idle\""));
}
