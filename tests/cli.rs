mod common;

use assert_cmd::Command;
use axum::routing::get;
use axum::Router;
use common::{repo_page, serve};

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("github-repo-summary").expect("Binary not built");
    cmd.env_remove("GITHUB_USERNAME").env("NO_COLOR", "1");
    cmd
}

#[test]
fn interactive_mode_exits_cleanly_on_sentinel() {
    let assert = bin().write_stdin("exit\n").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Welcome to GitHub Repo Summary Extractor"));
}

#[test]
fn interactive_sentinel_is_case_insensitive() {
    bin().write_stdin("  EXIT  \n").assert().success();
}

#[test]
fn interactive_failures_do_not_stop_the_loop() {
    // Nothing listens on this port; every fetch fails but the session
    // still ends with a zero exit code.
    let assert = bin()
        .env("GITHUB_API_URL", "http://127.0.0.1:9")
        .write_stdin("someone\nexit\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Error fetching data."));
}

#[test]
fn cli_mode_fetch_failure_exits_nonzero() {
    bin()
        .env("GITHUB_API_URL", "http://127.0.0.1:9")
        .args(["--username", "someone"])
        .assert()
        .failure()
        .code(1);
}

#[tokio::test]
async fn cli_mode_writes_output_file() {
    let app = Router::new().route("/users/:user/repos", get(|| async { repo_page(2, 0) }));
    let base_url = serve(app).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("repos.json");

    let out = output.clone();
    tokio::task::spawn_blocking(move || {
        bin()
            .env("GITHUB_API_URL", &base_url)
            .arg("--username")
            .arg("someone")
            .arg("--output")
            .arg(&out)
            .assert()
            .success();
    })
    .await
    .expect("Command task failed");

    let contents = std::fs::read_to_string(&output).expect("Output file missing");
    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&contents).expect("Output was not valid JSON");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["name"], "repo-0");
    assert_eq!(parsed[0]["stars"], 0);
    assert_eq!(parsed[0]["language"], "Rust");
}

#[tokio::test]
async fn cli_mode_empty_account_exits_nonzero_and_writes_nothing() {
    let app = Router::new().route("/users/:user/repos", get(|| async { repo_page(0, 0) }));
    let base_url = serve(app).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("repos.json");

    let out = output.clone();
    tokio::task::spawn_blocking(move || {
        let assert = bin()
            .env("GITHUB_API_URL", &base_url)
            .arg("--username")
            .arg("ghost")
            .arg("--output")
            .arg(&out)
            .assert()
            .failure()
            .code(1);

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        assert!(stdout.contains("No repos or invalid account"));
    })
    .await
    .expect("Command task failed");

    assert!(!output.exists());
}
