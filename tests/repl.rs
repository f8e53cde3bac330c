//! End-to-end tests driving the phonebook binary through scripted sessions

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn phonebook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("PHONEBOOK_DATA_DIR", dir.path());
    cmd
}

#[test]
fn greets_and_says_goodbye() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("Good bye"));
}

#[test]
fn adds_contact_and_lists_phone() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("add Alice 0123456789\nphone Alice\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains(
            "Alice's phone number is: 0123456789",
        ));
}

#[test]
fn duplicate_phone_is_reported_and_ignored() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("add Alice 0123456789\nadd Alice 0123456789\nphone Alice\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone number already exists: 0123456789",
        ))
        // Still exactly one number on the contact
        .stdout(predicate::str::contains(
            "Alice's phone number is: 0123456789\n",
        ));
}

#[test]
fn change_on_missing_contact_reports_no_match() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("change Bob 1111111111 2222222222\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No matches found. Contact not updated.",
        ));
}

#[test]
fn change_replaces_phone() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("add Bob 1111111111\nchange Bob 1111111111 2222222222\nphone Bob\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact has been updated."))
        .stdout(predicate::str::contains("Bob's phone number is: 2222222222"));
}

#[test]
fn birthday_round_trip() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin(
            "add Alice 0123456789\nadd-birthday Alice 01.01.1990\nshow-birthday Alice\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Birthday for Alice added as 01.01.1990.",
        ))
        .stdout(predicate::str::contains(
            "Alice's birthday is on 01.01.1990.",
        ));
}

#[test]
fn invalid_and_incomplete_commands_do_not_crash() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("frobnicate\nadd Alice\nhello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command"))
        .stdout(predicate::str::contains("Insufficient arguments provided."))
        .stdout(predicate::str::contains("How can I help you?"));
}

#[test]
fn bad_date_is_a_message_not_a_crash() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("add Alice 0123456789\nadd-birthday Alice 1990-01-01\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid date format. Use DD.MM.YYYY"));
}

#[test]
fn contacts_persist_across_sessions() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("add Alice 0123456789\nadd-birthday Alice 01.01.1990\nexit\n")
        .assert()
        .success();

    phonebook(&dir)
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("0123456789"))
        .stdout(predicate::str::contains("01.01.1990"));
}

#[test]
fn end_of_input_persists_like_exit() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .write_stdin("add Carol 5551234567\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good bye"));

    phonebook(&dir)
        .write_stdin("phone Carol\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol's phone number is: 5551234567"));
}

#[test]
fn config_command_shows_paths() {
    let dir = TempDir::new().unwrap();

    phonebook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("addressbook.json"))
        .stdout(predicate::str::contains("Upcoming horizon: 7 days"));
}
