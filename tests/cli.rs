//! End-to-end tests of the `vibe-finance` binary against a temporary data
//! directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vibe(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vibe-finance").unwrap();
    cmd.env("VIBE_FINANCE_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn dashboard_on_first_run_shows_seed() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overview"))
        .stdout(predicate::str::contains("Savings goal:    $5000.00"))
        .stdout(predicate::str::contains("Transportation"))
        .stdout(predicate::str::contains("No expenses recorded."));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn add_expense_updates_budget() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .args(["transaction", "add", "expense", "50", "Food", "Groceries"])
        .args(["--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"))
        .stdout(predicate::str::contains("-$50.00"));

    vibe(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"))
        .stdout(predicate::str::contains("$450.00"));

    vibe(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("2024-01-15"));

    assert!(dir.path().join("data").join("finance.json").exists());
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .args(["transaction", "add", "expense", "-5", "Food", "Refund?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));

    assert!(!dir.path().join("data").join("finance.json").exists());
}

#[test]
fn missing_description_is_rejected() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .args(["transaction", "add", "income", "100", "Salary", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in"));
}

#[test]
fn unknown_budget_is_a_notice() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .args(["budget", "set", "Travel", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget named 'Travel'"));

    assert!(!dir.path().join("data").join("finance.json").exists());
}

#[test]
fn delete_unknown_transaction_is_a_notice() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .args(["transaction", "delete", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));
}

#[test]
fn savings_goal_round_trip_and_audit() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .args(["savings", "set", "8000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5000.00 -> $8000.00"));

    vibe(&dir)
        .args(["savings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings goal:    $8000.00"));

    vibe(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE SavingsGoal savings_goal"));
}

#[test]
fn corrupted_data_file_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("finance.json"), "{ not json").unwrap();

    vibe(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$1150.00"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    vibe(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("finance.json"))
        .stdout(predicate::str::contains("Salary, Freelance"));
}
