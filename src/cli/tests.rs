//! Tests for CLI module

use super::*;
use crate::types::{LogLevel, PaginationMode};
use clap::Parser;
use pretty_assertions::assert_eq;
use std::io::Write;

const STATE_JSON: &str = r#"{"current_page": 2, "current_separator": 1, "last_page": 2, "last_separator": 1, "rows": [{"page": 1, "separator": 1, "increment_label": "1-10"}, {"page": 2, "separator": 1, "increment_label": "11-20"}]}"#;

fn run(args: &[&str]) -> crate::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    Runner::new(cli).execute()
}

// ============================================================================
// Argument Parsing Tests
// ============================================================================

#[test]
fn test_parse_render_command() {
    let cli = Cli::try_parse_from([
        "pagination-strip",
        "render",
        "--path",
        "/list",
        "--mode",
        "increment",
        "--param",
        "sort=name",
        "--param",
        "q=",
        "-s",
        "state.yaml",
    ])
    .unwrap();

    assert_eq!(cli.state.unwrap().to_string_lossy(), "state.yaml");
    match cli.command {
        Commands::Render {
            path, mode, params, ..
        } => {
            assert_eq!(path, "/list");
            assert_eq!(mode, Some(PaginationMode::Increment));
            assert_eq!(
                params,
                vec![
                    ("sort".to_string(), "name".to_string()),
                    ("q".to_string(), String::new())
                ]
            );
        }
        other => panic!("Expected Render, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_param_without_equals() {
    let result = Cli::try_parse_from(["pagination-strip", "render", "--param", "sort"]);
    assert!(result.is_err());
}

#[test]
fn test_effective_log_level() {
    let cli = Cli::try_parse_from(["pagination-strip", "defaults"]).unwrap();
    assert_eq!(cli.effective_log_level(), LogLevel::Info);

    let cli = Cli::try_parse_from(["pagination-strip", "-v", "defaults"]).unwrap();
    assert_eq!(cli.effective_log_level(), LogLevel::Debug);

    let cli = Cli::try_parse_from(["pagination-strip", "--log-level", "warn", "defaults"]).unwrap();
    assert_eq!(cli.effective_log_level(), LogLevel::Warn);
}

// ============================================================================
// Runner Tests
// ============================================================================

#[test]
fn test_render_inline_state() {
    let output = run(&[
        "pagination-strip",
        "render",
        "--path",
        "/list?old=1",
        "--state-json",
        STATE_JSON,
    ])
    .unwrap();

    assert_eq!(
        output,
        r#"<a href="/list?page=1&amp;sep=1">1</a> <span>2</span>"#
    );
}

#[test]
fn test_render_with_overrides() {
    let output = run(&[
        "pagination-strip",
        "render",
        "--mode",
        "3",
        "--fragment",
        "#top",
        "--param",
        "sort=name",
        "--state-json",
        STATE_JSON,
    ])
    .unwrap();

    assert_eq!(
        output,
        r#"<a href="/?sort=name&amp;page=1&amp;sep=1#top">1-10</a> <span>11-20</span>"#
    );
}

#[test]
fn test_render_with_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "css:\n  normal: link\n  active: current").unwrap();
    let config_path = config.path().to_string_lossy().to_string();

    let output = run(&[
        "pagination-strip",
        "render",
        "-C",
        &config_path,
        "--state-json",
        STATE_JSON,
    ])
    .unwrap();

    assert_eq!(
        output,
        r#"<a class="link" href="/?page=1&amp;sep=1">1</a> <span class="current">2</span>"#
    );
}

#[test]
fn test_render_json_output() {
    let output = run(&[
        "pagination-strip",
        "render",
        "--format",
        "json",
        "--state-json",
        STATE_JSON,
    ])
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["current_page"], 2);
    assert_eq!(value["path"], "/");
    assert!(value["html"].as_str().unwrap().contains("<span>2</span>"));
}

#[test]
fn test_render_without_state() {
    let err = run(&["pagination-strip", "render"]).unwrap_err();
    assert!(err.to_string().contains("State not specified"));
}

#[test]
fn test_defaults_command() {
    let output = run(&["pagination-strip", "defaults"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("first_page"));
    assert!(lines[0].contains("«««"));
    assert!(lines[5].contains("На последнюю страницу"));

    let output = run(&["pagination-strip", "-f", "json", "defaults"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[3]["slot"], "next_page");
    assert_eq!(value[3]["text"], "»");
}

#[test]
fn test_validate_command() {
    let output = run(&["pagination-strip", "validate", "--state-json", STATE_JSON]).unwrap();
    assert_eq!(output, "OK: page 2 of 2 (in window), 2 visible rows");

    let err = run(&[
        "pagination-strip",
        "validate",
        "--state-json",
        r#"{"page_param": ""}"#,
    ])
    .unwrap_err();
    assert!(err.is_state_error());
}
