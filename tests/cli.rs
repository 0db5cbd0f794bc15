use mockito::{Matcher, Server};
use serde_json::json;
use std::{
    fs,
    path::Path,
    process::{Command, Output},
};
use tempdir::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_create-release");
const RELEASES_PATH: &str = "/repos/caarlosandree/dash-demo/releases";

fn run(dir: &Path, api_url: &str, token_arg: Option<&str>, token_env: Option<&str>) -> Output {
    let mut command = Command::new(BIN);
    command
        .current_dir(dir)
        .env("GITHUB_API_URL", api_url)
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");

    if let Some(token) = token_arg {
        command.arg(token);
    }
    if let Some(token) = token_env {
        command.env("GITHUB_TOKEN", token);
    }

    command.output().expect("failed to run create-release")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn should_exit_with_usage_when_token_is_missing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("cli")?;
    fs::write(dir.path().join("RELEASE_BODY.md"), "hello")?;

    let mut server = Server::new();
    let m = server.mock("POST", Matcher::Any).expect(0).create();

    let output = run(dir.path(), &server.url(), None, None);

    m.assert();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("GITHUB_TOKEN"));
    assert!(stdout(&output).contains("https://github.com/settings/tokens"));

    Ok(())
}

#[test]
fn should_exit_when_body_file_is_missing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("cli")?;

    let mut server = Server::new();
    let m = server.mock("POST", Matcher::Any).expect(0).create();

    let output = run(dir.path(), &server.url(), Some("secret"), None);

    m.assert();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("RELEASE_BODY.md"));

    Ok(())
}

#[test]
fn should_print_status_and_body_on_api_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("cli")?;
    fs::write(dir.path().join("RELEASE_BODY.md"), "hello")?;

    let mut server = Server::new();
    let m = server
        .mock("POST", RELEASES_PATH)
        .with_status(422)
        .with_body(r#"{"message":"already_exists"}"#)
        .create();

    let output = run(dir.path(), &server.url(), Some("secret"), None);

    m.assert();
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("422"));
    assert!(out.contains(r#"{"message":"already_exists"}"#));

    Ok(())
}

#[test]
fn should_print_release_url_on_success() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("cli")?;
    fs::write(dir.path().join("RELEASE_BODY.md"), "hello")?;

    let mut server = Server::new();
    let m = server
        .mock("POST", RELEASES_PATH)
        .match_header("authorization", "token from-env")
        .match_header("accept", "application/vnd.github.v3+json")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "tag_name": "v1.0.0",
            "body": "hello",
            "draft": false,
            "prerelease": false,
        })))
        .with_status(201)
        .with_body(r#"{"html_url":"https://github.com/x/y/releases/tag/v1.0.0"}"#)
        .create();

    let output = run(dir.path(), &server.url(), None, Some("from-env"));

    m.assert();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("https://github.com/x/y/releases/tag/v1.0.0"));

    Ok(())
}

#[test]
fn should_prefer_token_argument_over_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("cli")?;
    fs::write(dir.path().join("RELEASE_BODY.md"), "hello")?;

    let mut server = Server::new();
    let m = server
        .mock("POST", RELEASES_PATH)
        .match_header("authorization", "token from-arg")
        .with_status(201)
        .with_body("{}")
        .create();

    let output = run(dir.path(), &server.url(), Some("from-arg"), Some("from-env"));

    m.assert();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("N/A"));

    Ok(())
}
