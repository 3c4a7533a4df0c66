use kgrv::extensions::chrono::parse_record_stamp;
use kgrv::profile::DEFAULT_SKILLS;
use serde_json::Value;
use std::fs;

use crate::common::{make_temp_dir, normalized_lines, run_cli, stderr_of, stdout_of};

fn json_stdout(args: &[&str]) -> (String, Value) {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "command failed: {}",
        stderr_of(&output)
    );
    let raw = stdout_of(&output);
    let value: Value = serde_json::from_str(&raw).expect("stdout should be JSON");
    (raw, value)
}

#[test]
fn json_command_with_name_override() {
    let before = chrono::Local::now().naive_local();
    let (raw, value) = json_stdout(&["--name", "TestUser", "json"]);

    assert_eq!(value["name"], "TestUser");
    assert_eq!(value["github"], "https://github.com/TestUser");
    let skills: Vec<&str> = value["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(skills, DEFAULT_SKILLS.to_vec());
    assert_eq!(value["projects"].as_array().unwrap().len(), 3);

    let stamp = parse_record_stamp(value["created_at"].as_str().unwrap()).unwrap();
    assert!((stamp - before).num_seconds().abs() <= 2);

    let keys = ["\"name\"", "\"github\"", "\"skills\"", "\"projects\"", "\"created_at\""];
    let positions: Vec<usize> = keys.iter().map(|k| raw.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(raw.starts_with("{\n  \"name\""));
}

#[test]
fn json_command_ignores_output_selector() {
    let (_, value) = json_stdout(&["--output", "text", "json"]);
    assert_eq!(value["name"], "kogriv");
}

#[test]
fn no_command_prints_help_and_succeeds() {
    let output = run_cli(&[]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("usage: kgrv"));
    assert!(stdout.contains("positional arguments:"));
    assert!(!stdout.contains("\"github\""));
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn help_flag_prints_help() {
    for flag in ["-h", "--help"] {
        let output = run_cli(&[flag]);
        assert!(output.status.success());
        assert!(stdout_of(&output).contains("Available commands"));
    }
}

#[test]
fn version_flag_short_circuits() {
    let output = run_cli(&["--version", "info"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        format!("kgrv {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn unknown_command_reports_error_and_fails() {
    let output = run_cli(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|line| line == "❌ Unknown command: frobnicate"),
        "stderr did not name the command. stderr was: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).starts_with("usage: kgrv"));
}

#[test]
fn info_text_shows_full_record() {
    let output = run_cli(&["--name", "John", "info"]);
    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert_eq!(lines[0], "👨‍💻 Developer: John");
    assert_eq!(lines[1], "🔗 GitHub: https://github.com/John");
    assert!(lines[2].starts_with("📅 Created: "));
    assert!(lines.iter().any(|l| l == "🛠️ Skills:"));
    assert!(lines.iter().any(|l| l == "📂 Projects:"));
    assert_eq!(lines.iter().filter(|l| l.starts_with('•')).count(), 9);
}

#[test]
fn info_applies_repeated_additions() {
    let (_, value) = json_stdout(&[
        "--output",
        "json",
        "info",
        "--add-skill",
        "Rust",
        "--add-skill",
        "Rust",
        "--add-skill",
        "",
        "--add-project=kgrv-rs",
    ]);
    let skills = value["skills"].as_array().unwrap();
    assert_eq!(skills.len(), 8);
    assert_eq!(skills[6], "Rust");
    assert_eq!(skills[7], "");
    let projects = value["projects"].as_array().unwrap();
    assert_eq!(projects.last().unwrap(), "kgrv-rs");
}

#[test]
fn skills_and_projects_follow_output_selector() {
    let output = run_cli(&["skills"]);
    let lines = normalized_lines(&output.stdout);
    assert_eq!(lines[0], "🛠️ Skills of kogriv:");
    assert_eq!(lines[1], "• Python");

    let (_, value) = json_stdout(&["--output=json", "projects"]);
    assert_eq!(value.as_object().unwrap().len(), 1);
    assert!(value["projects"][0].as_str().unwrap().contains("kgrv"));
}

#[test]
fn non_ascii_name_is_emitted_literally() {
    let (raw, value) = json_stdout(&["--name", "Иван", "json"]);
    assert_eq!(value["github"], "https://github.com/Иван");
    assert!(raw.contains("\"name\": \"Иван\""));
}

#[test]
fn malformed_arguments_exit_with_usage() {
    for args in [
        vec!["--output", "xml", "info"],
        vec!["--name"],
        vec!["--bogus"],
        vec!["skills", "--add-skill", "Rust"],
    ] {
        let output = run_cli(&args);
        assert_eq!(output.status.code(), Some(2), "args: {args:?}");
        let stderr = stderr_of(&output);
        assert!(stderr.starts_with("usage: kgrv"), "stderr was: {stderr}");
        assert!(stderr.contains("kgrv: error: "));
        assert!(stdout_of(&output).is_empty());
    }
}

#[test]
fn command_help_prints_its_usage() {
    let output = run_cli(&["info", "--add-skill", "Rust", "--help"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("usage: kgrv info [-h] [--add-skill ADD_SKILL]"));
    assert!(!stdout.contains("Developer:"));
}

#[test]
fn logs_option_records_the_session() {
    let dir = make_temp_dir("kgrv-cli-logs");
    let logs = dir.join("logs");
    let logs_arg = logs.to_string_lossy().to_string();
    let output = run_cli(&[
        "--logs", &logs_arg, "info", "--add-skill", "Rust", "--add-skill", "Python",
    ]);
    assert!(output.status.success());

    let entry = fs::read_dir(&logs)
        .expect("log dir should exist")
        .find_map(|e| e.ok())
        .expect("a session log should be written");
    let contents = fs::read_to_string(entry.path()).unwrap();
    assert!(contents.contains("Command run: kgrv --logs"));
    assert!(contents.contains("INFO  Added skill 'Rust'."));
    assert!(contents.contains("WARN  Skipped duplicate skill 'Python'."));
}

#[test]
fn unusable_log_dir_is_a_startup_failure() {
    let dir = make_temp_dir("kgrv-cli-blocker");
    let blocker = dir.join("file");
    fs::write(&blocker, "x").unwrap();
    let logs_arg = blocker.join("logs").to_string_lossy().to_string();

    let output = run_cli(&["--logs", &logs_arg, "json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("❌ Startup error:"));
    assert!(stdout_of(&output).is_empty());
}
