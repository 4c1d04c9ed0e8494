//! End-to-end menu sessions against the `biblio` binary.
//!
//! With stdin piped the menu reads plain lines, so a whole session can be
//! scripted: one line per menu choice or field value. Assertions cover both
//! the terminal output and the persisted JSON document.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_biblio"))
}

fn run_session(data_path: &Path, script: &str) -> Output {
    let mut child = Command::new(bin())
        .arg("--data")
        .arg(data_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn biblio");
    // Ignore write errors: a session that aborts early (e.g. corrupt data
    // file) closes the pipe before the whole script is consumed.
    let _ = child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(script.as_bytes());
    child.wait_with_output().expect("wait for biblio")
}

fn read_data(data_path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(data_path).expect("read data file");
    serde_json::from_str(&contents).expect("parse data file")
}

const ADD_BOOK_B101: &str = "1\nB101\nA Brief History of Time\nStephen Hawking\nScience\n";
const ADD_MEMBER_M001: &str = "2\nM001\nAsha Rao\n34\n9876543210\n";

#[test]
fn test_full_session_add_borrow_search_report() {
    let dir = TempDir::new().expect("tempdir");
    let data_path = dir.path().join("library.json");

    let script = format!(
        "{}{}3\nM001\nB101\n5\ntime\n\n7\n8\n9\n",
        ADD_BOOK_B101, ADD_MEMBER_M001
    );
    let output = run_session(&data_path, &script);
    assert!(
        output.status.success(),
        "session failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Book added successfully."));
    assert!(stdout.contains("Member added successfully."));
    assert!(stdout.contains("Book issued successfully."));
    // Search hit, rendered with its issued status.
    assert!(stdout.contains("A Brief History of Time"));
    assert!(stdout.contains("Issued"));
    // Borrower report and genre report.
    assert!(stdout.contains("Asha Rao"));
    assert!(stdout.contains("Most popular genre: Science"));
    assert!(stdout.contains("Catalog saved. Goodbye!"));

    let data = read_data(&data_path);
    assert_eq!(data["books"][0]["book_id"], "B101");
    assert_eq!(data["books"][0]["available"], false);
    assert_eq!(data["members"][0]["member_id"], "M001");
    assert_eq!(data["members"][0]["borrowed_books"][0]["book_id"], "B101");
    assert_eq!(data["borrow_history"][0]["member_id"], "M001");
    assert!(data["borrow_history"][0]["returned_on"].is_null());
}

#[test]
fn test_return_closes_record_and_restores_availability() {
    let dir = TempDir::new().expect("tempdir");
    let data_path = dir.path().join("library.json");

    let script = format!(
        "{}{}3\nM001\nB101\n4\nM001\nB101\n9\n",
        ADD_BOOK_B101, ADD_MEMBER_M001
    );
    let output = run_session(&data_path, &script);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Book returned successfully."));

    let data = read_data(&data_path);
    assert_eq!(data["books"][0]["available"], true);
    assert_eq!(
        data["members"][0]["borrowed_books"]
            .as_array()
            .expect("borrowed_books array")
            .len(),
        0
    );
    assert!(data["borrow_history"][0]["returned_on"].is_string());
}

#[test]
fn test_duplicate_book_id_is_reported_and_not_persisted() {
    let dir = TempDir::new().expect("tempdir");
    let data_path = dir.path().join("library.json");

    let script = format!("{}{}9\n", ADD_BOOK_B101, ADD_BOOK_B101);
    let output = run_session(&data_path, &script);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Book ID already exists"));

    let data = read_data(&data_path);
    assert_eq!(data["books"].as_array().expect("books array").len(), 1);
}

#[test]
fn test_borrowing_issued_book_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let data_path = dir.path().join("library.json");

    let script = format!(
        "{}{}2\nM002\nRavi Kumar\n27\n8765432109\n3\nM001\nB101\n3\nM002\nB101\n9\n",
        ADD_BOOK_B101, ADD_MEMBER_M001
    );
    let output = run_session(&data_path, &script);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Book is already borrowed"));

    let data = read_data(&data_path);
    // Only the first borrow made it into the ledger.
    assert_eq!(
        data["borrow_history"]
            .as_array()
            .expect("history array")
            .len(),
        1
    );
}

#[test]
fn test_state_survives_across_sessions() {
    let dir = TempDir::new().expect("tempdir");
    let data_path = dir.path().join("library.json");

    let first = run_session(&data_path, &format!("{}9\n", ADD_BOOK_B101));
    assert!(first.status.success());

    // Second session sees the book added by the first.
    let second = run_session(&data_path, "5\n\n\n9\n");
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("A Brief History of Time"));
    assert!(stdout.contains("Available"));
}

#[test]
fn test_corrupt_data_file_aborts_with_diagnostic() {
    let dir = TempDir::new().expect("tempdir");
    let data_path = dir.path().join("library.json");
    std::fs::write(&data_path, "{ not json").expect("write corrupt file");

    let output = run_session(&data_path, "9\n");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load catalog"));
}
