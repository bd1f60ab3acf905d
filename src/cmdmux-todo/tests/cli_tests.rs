//! End-to-end tests for the todo binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn todo() -> Command {
    let mut cmd = Command::cargo_bin("cmdmux-todo").expect("binary should build");
    cmd.env_remove("RUST_LOG").env_remove("CMDMUX_LOG_JSON");
    cmd
}

#[test]
fn test_new_prints_created() {
    todo()
        .args(["new", "quinoa"])
        .assert()
        .success()
        .stdout("created: quinoa\n");
}

#[test]
fn test_list_prints_seed_items() {
    todo()
        .arg("list")
        .assert()
        .success()
        .stdout("milk\neggs\nmotor boat\n");
}

#[test]
fn test_done_removes_item() {
    todo()
        .args(["done", "2"])
        .assert()
        .success()
        .stdout("done: eggs\n");
}

#[test]
fn test_done_with_bad_number_fails() {
    todo()
        .args(["done", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid item number"));
}

#[test]
fn test_no_command() {
    todo()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no command given"))
        .stderr(predicate::str::contains("commands: new, list, done"));
}

#[test]
fn test_unknown_command() {
    todo()
        .arg("frob")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command: frob"));
}

#[test]
fn test_help_topic() {
    todo()
        .args(["help", "new"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usage: cmdmux-todo new <item...>"));
}

#[test]
fn test_help_for_command_without_topic() {
    todo()
        .args(["help", "done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown help topic: done"));
}

#[test]
fn test_bare_help_lists_topics() {
    todo()
        .arg("help")
        .assert()
        .failure()
        .stderr(predicate::str::contains("help topics\n\tnew\n\tlist"));
}

#[test]
fn test_list_help_topic() {
    todo()
        .args(["help", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("usage: cmdmux-todo list\n"));
}
