use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance_tracker_cli").unwrap();
    cmd.env("FINANCE_TRACKER_CLI_SCRIPT", "1")
        .env("FINANCE_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let input = "add income 3000 Salary 2024-01-15\nadd expense 1200 Rent 2024-01-16\nbalance\nexit\n";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Current Balance: $1800.00"));

    let csv = fs::read_to_string(home.path().join("transactions.csv")).unwrap();
    assert!(csv.starts_with("date,kind,category,amount"));
    assert!(csv.contains("2024-01-16,Expense,Rent,1200.00"));
}

#[test]
fn transactions_survive_restart() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("add expense 20 Food 2024-02-01\nadd expense 30 Food 2024-02-02\n")
        .assert()
        .success();

    script_command(&home)
        .write_stdin("list\nchart\nexit\n")
        .assert()
        .success()
        .stdout(contains("-$20.00"))
        .stdout(contains("Food"))
        .stdout(contains("100.0%"));
}

#[test]
fn invalid_input_reports_and_continues() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("add expense 0 Food 2024-01-01\nadd expense 5 \"\" 2024-01-01\nblance\nbalance\n")
        .assert()
        .success()
        .stdout(contains("Amount must be positive"))
        .stdout(contains("All fields are required: missing category"))
        .stdout(contains("Suggestion: `balance`?"))
        .stdout(contains("Current Balance: $0.00"));

    assert!(!home.path().join("transactions.csv").exists());
}

#[test]
fn empty_ledger_has_nothing_to_chart() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("chart\n")
        .assert()
        .success()
        .stdout(contains("No expenses to chart."));
}

#[test]
fn corrupt_file_aborts_startup() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("transactions.csv"),
        "date,kind,category,amount\n2024-01-01,expense,Food,abc\n",
    )
    .unwrap();

    script_command(&home)
        .write_stdin("balance\n")
        .assert()
        .failure()
        .stderr(contains("Malformed record 1"));
}

#[test]
fn help_names_the_data_file() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("transactions.csv");

    script_command(&home)
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(contains(format!(
            "Transactions are stored in {}",
            expected.display()
        )))
        .stdout(contains("config set data-file ./transactions.csv"));
}

#[test]
fn currency_setting_survives_restart() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("config set currency €\nadd income 10 Salary 2024-01-01\n")
        .assert()
        .success()
        .stdout(contains("Current Balance: €10.00"));

    script_command(&home)
        .write_stdin("balance\n")
        .assert()
        .success()
        .stdout(contains("Current Balance: €10.00"));

    let stored = fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(stored.contains("\"currency_symbol\": \"€\""));
}
