//! End-to-end CLI tests driving the compiled binary against small fixture
//! files, covering the usage/exit-code contract and a couple of the
//! S1-style scheduling scenarios visible end to end in the trace.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

fn runner_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lastbreach-runner"))
}

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).expect("create fixture");
    f.write_all(contents.as_bytes()).expect("write fixture");
    path
}

const MINIMAL_CHARACTER: &str = r#"
character "Bob" {
    plan {
        rule "idle" priority 1 {
            yield_tick;
        }
    }
}
"#;

#[test]
fn no_arguments_is_a_usage_error() {
    runner_bin().assert().failure().code(2);
}

#[test]
fn help_flag_shows_usage() {
    runner_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn missing_character_file_exits_one() {
    let dir = TempDir::new().expect("tempdir");
    let a = dir.path().join("does-not-exist.lbp");
    let b = write_fixture(&dir, "bob.lbp", MINIMAL_CHARACTER);

    runner_bin()
        .arg(&a)
        .arg(&b)
        .arg("--days")
        .arg("1")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn two_idle_characters_run_to_completion() {
    let dir = TempDir::new().expect("tempdir");
    let a = write_fixture(&dir, "alice.lbp", MINIMAL_CHARACTER.replace("Bob", "Alice").as_str());
    let b = write_fixture(&dir, "bob.lbp", MINIMAL_CHARACTER);

    runner_bin()
        .arg(&a)
        .arg(&b)
        .arg("--days")
        .arg("1")
        .arg("--seed")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Day 0 ==="));
}

#[test]
fn threshold_fires_over_fallback_plan_in_the_trace() {
    let dir = TempDir::new().expect("tempdir");
    let alice = r#"
        character "Alice" {
            thresholds {
                when char.hunger < 80 do task "Eating" for 1t priority 90;
            }
            plan {
                block lounge 0..24 {
                    task "Reading" for 1t priority 5;
                }
            }
        }
    "#;
    let a = write_fixture(&dir, "alice.lbp", alice);
    let b = write_fixture(&dir, "bob.lbp", MINIMAL_CHARACTER);

    runner_bin()
        .arg(&a)
        .arg(&b)
        .arg("--days")
        .arg("1")
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eating"));
}

#[test]
fn verbose_flag_emits_operational_log_to_stderr() {
    let dir = TempDir::new().expect("tempdir");
    let a = write_fixture(&dir, "alice.lbp", &MINIMAL_CHARACTER.replace("Bob", "Alice"));
    let b = write_fixture(&dir, "bob.lbp", MINIMAL_CHARACTER);

    runner_bin()
        .arg(&a)
        .arg(&b)
        .arg("--days")
        .arg("1")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("starting run"));
}
