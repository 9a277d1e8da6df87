use assert_cmd::Command;
use predicates::prelude::*;

fn arbscope() -> Command {
    let mut cmd = Command::cargo_bin("arbscope").unwrap();
    // Point config resolution at a path that never exists so a developer's
    // local config cannot leak into assertions.
    cmd.env("ARBSCOPE_CONFIG", "/nonexistent/arbscope/config.toml");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_commands() {
    arbscope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("overview"))
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("opportunities"))
        .stdout(predicate::str::contains("risk"))
        .stdout(predicate::str::contains("routes"))
        .stdout(predicate::str::contains("strategies"));
}

#[test]
fn test_tokens_help_shows_sort_values() {
    arbscope()
        .args(["tokens", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("market-cap"));
}

#[test]
fn test_invalid_sort_value_is_rejected() {
    arbscope()
        .args(["tokens", "--sort", "sentiment"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    arbscope().arg("positions").assert().failure();
}

#[test]
fn test_unreachable_backend_is_a_visible_failure_not_a_crash() {
    // Nothing listens on this port; the command must still exit cleanly
    // with the failure surfaced as a load state.
    arbscope()
        .args(["--base-url", "http://127.0.0.1:9", "tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("load failed"));
}

#[test]
fn test_json_failure_state_is_machine_readable() {
    arbscope()
        .args(["--base-url", "http://127.0.0.1:9", "--json", "risk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"failed\""))
        .stdout(predicate::str::contains("\"rows\": []"));
}
