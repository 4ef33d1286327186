use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_arguments_print_usage() {
    Command::cargo_bin("psnow")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn token_alone_is_not_enough() {
    Command::cargo_bin("psnow")
        .unwrap()
        .arg("token123")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ACCOUNTS"));
}

#[test]
fn decoration_only_account_list_is_rejected() {
    Command::cargo_bin("psnow")
        .unwrap()
        .args(["token123", r#"[""]"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no account identifiers"));
}

#[test]
fn help_documents_the_list_grammar() {
    Command::cargo_bin("psnow")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("comma-separated"));
}
