//! CLI command tests
//!
//! This module contains all tests for the CLI commands, run against real
//! documents in scratch directories.

use std::io::Cursor;
use std::path::PathBuf;

use rust_decimal::Decimal;
use tally_core::RecordStore;

use crate::cli::Login;
use crate::commands::{self, shell::run_shell, truncate};

struct Scratch {
    _dir: tempfile::TempDir,
    finances: PathBuf,
    users: PathBuf,
}

fn setup() -> (Scratch, Login) {
    let dir = tempfile::tempdir().unwrap();
    let scratch = Scratch {
        finances: dir.path().join("finances.json"),
        users: dir.path().join("users.json"),
        _dir: dir,
    };
    let login = Login {
        username: "alice".to_string(),
        password: "hunter2".to_string(),
    };
    commands::cmd_register(&scratch.users, &login).unwrap();
    (scratch, login)
}

fn add(scratch: &Scratch, login: &Login, description: &str, amount: i64, category: &str, date: &str) {
    commands::cmd_add(
        &scratch.finances,
        &scratch.users,
        login,
        description,
        Decimal::from(amount),
        category,
        date,
    )
    .unwrap();
}

// ========== Auth Gate Tests ==========

#[test]
fn test_record_commands_require_valid_credentials() {
    let (scratch, _login) = setup();
    let wrong = Login {
        username: "alice".to_string(),
        password: "nope".to_string(),
    };

    let result = commands::cmd_list(&scratch.finances, &scratch.users, &wrong);
    assert!(result.is_err());
}

#[test]
fn test_register_twice_is_reported_not_fatal() {
    let (scratch, login) = setup();
    // Second registration prints a conflict and succeeds as a command
    let result = commands::cmd_register(&scratch.users, &login);
    assert!(result.is_ok());
}

// ========== Record Command Tests ==========

#[test]
fn test_cmd_add_and_list() {
    let (scratch, login) = setup();
    add(&scratch, &login, "rent", -1200, "Housing", "2024-01-01");
    add(&scratch, &login, "salary", 2500, "Income", "2024-01-05");

    let result = commands::cmd_list(&scratch.finances, &scratch.users, &login);
    assert!(result.is_ok());

    let records = RecordStore::new(&scratch.finances).load("alice").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description, "rent");
}

#[test]
fn test_cmd_add_rejects_bad_date() {
    let (scratch, login) = setup();
    let result = commands::cmd_add(
        &scratch.finances,
        &scratch.users,
        &login,
        "rent",
        Decimal::from(-1200),
        "Housing",
        "01/01/2024",
    );
    assert!(result.is_err());

    // Nothing was persisted
    let records = RecordStore::new(&scratch.finances).load("alice").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_cmd_update_and_delete() {
    let (scratch, login) = setup();
    add(&scratch, &login, "a", 1, "X", "2024-01-01");
    add(&scratch, &login, "b", 2, "X", "2024-01-02");

    commands::cmd_update(
        &scratch.finances,
        &scratch.users,
        &login,
        0,
        "a2",
        Decimal::from(10),
        "Y",
        "2024-01-03",
    )
    .unwrap();
    commands::cmd_delete(&scratch.finances, &scratch.users, &login, 1).unwrap();

    let records = RecordStore::new(&scratch.finances).load("alice").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "a2");
    assert_eq!(records[0].category, "Y");
}

#[test]
fn test_out_of_range_index_is_rejected_not_fatal() {
    let (scratch, login) = setup();
    add(&scratch, &login, "only", 1, "X", "2024-01-01");

    // Both report the rejection and exit cleanly
    let result = commands::cmd_delete(&scratch.finances, &scratch.users, &login, 7);
    assert!(result.is_ok());
    let result = commands::cmd_update(
        &scratch.finances,
        &scratch.users,
        &login,
        1,
        "x",
        Decimal::ONE,
        "X",
        "2024-01-01",
    );
    assert!(result.is_ok());

    let records = RecordStore::new(&scratch.finances).load("alice").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "only");
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_report_runs_on_empty_and_populated_ledgers() {
    let (scratch, login) = setup();
    assert!(commands::cmd_report(&scratch.finances, &scratch.users, &login).is_ok());

    add(&scratch, &login, "offset a", 50, "A", "2024-01-01");
    add(&scratch, &login, "offset b", -50, "B", "2024-01-02");
    // Zero-sum percentages must not crash the report
    assert!(commands::cmd_report(&scratch.finances, &scratch.users, &login).is_ok());
}

// ========== Shell Tests ==========

#[test]
fn test_shell_scripted_session() {
    let (scratch, _login) = setup();

    // Register a fresh user, add two records, delete one, report, exit
    let script = "\
bob
secret
1
lunch
-12.50
Food
2024-01-15
1
salary
2500
Income
2024-01-20
2
0
4
5
";
    run_shell(&scratch.finances, &scratch.users, Cursor::new(script)).unwrap();

    let records = RecordStore::new(&scratch.finances).load("bob").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "salary");
}

#[test]
fn test_shell_existing_user_falls_through_to_login() {
    let (scratch, _login) = setup();

    // alice is already registered: the conflict is reported and the
    // session continues into a normal login with the stored password
    let script = "\
alice
hunter2
1
tea
-3
Food
2024-01-10
5
";
    run_shell(&scratch.finances, &scratch.users, Cursor::new(script)).unwrap();

    let records = RecordStore::new(&scratch.finances).load("alice").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "tea");
}

#[test]
fn test_shell_bad_login_exits_cleanly() {
    let (scratch, _login) = setup();

    // alice exists with a different password; register fails, login fails
    let script = "alice\nwrong\n";
    let result = run_shell(&scratch.finances, &scratch.users, Cursor::new(script));
    assert!(result.is_ok());
}

#[test]
fn test_shell_invalid_menu_input_keeps_looping() {
    let (scratch, _login) = setup();

    let script = "\
carol
pw
9
2
not-a-number
5
";
    run_shell(&scratch.finances, &scratch.users, Cursor::new(script)).unwrap();
    assert!(RecordStore::new(&scratch.finances).load("carol").unwrap().is_empty());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a somewhat longer string", 10), "a somew...");
}

#[test]
fn test_truncate_multibyte_text() {
    // Free-form text can be multibyte; truncation must land on char
    // boundaries instead of byte offsets
    assert_eq!(truncate("日本語のとても長い説明テキスト", 10), "日本語のとても...");
    assert_eq!(truncate("日本語", 10), "日本語");
    assert_eq!(truncate("crème brûlée du café", 10), "crème b...");
}
