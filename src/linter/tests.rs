#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::spec::FlagSpec;

fn flag(long: &str, value_type: &str, help: &str) -> FlagSpec {
    FlagSpec {
        long: long.to_string(),
        value_type: value_type.to_string(),
        help: help.to_string(),
    }
}

fn node(name: &str, flags: Vec<FlagSpec>, children: Vec<CommandNode>) -> CommandNode {
    CommandNode {
        name: name.to_string(),
        usage: String::new(),
        short: String::new(),
        flags,
        children,
    }
}

#[test]
fn test_clean_tree_has_no_issues() {
    let root = node(
        "docker",
        vec![flag("debug", "bool", "Enable debug mode")],
        vec![node(
            "build",
            vec![flag("tag", "list", "Name and optionally a tag")],
            vec![],
        )],
    );
    assert!(lint_tree(&root).is_empty());
}

#[test]
fn test_duplicate_flag_is_error() {
    let root = node(
        "docker",
        vec![],
        vec![node(
            "build",
            vec![
                flag("tag", "list", "Tag"),
                flag("tag", "string", "Tag again"),
            ],
            vec![],
        )],
    );
    let issues = lint_tree(&root);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, LintSeverity::Error);
    assert_eq!(issues[0].kind, "duplicate_flag");
    assert_eq!(issues[0].location, "docker build");
    assert!(issues[0].message.contains("--tag"));
}

#[test]
fn test_duplicate_child_is_error() {
    let root = node(
        "docker",
        vec![],
        vec![node("ps", vec![], vec![]), node("ps", vec![], vec![])],
    );
    let issues = lint_tree(&root);
    assert!(issues
        .iter()
        .any(|i| i.kind == "duplicate_command" && i.severity == LintSeverity::Error));
}

#[test]
fn test_unknown_value_type_is_warning() {
    let root = node(
        "docker",
        vec![flag("timeout", "duration", "Max wait time")],
        vec![],
    );
    let issues = lint_tree(&root);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, LintSeverity::Warning);
    assert_eq!(issues[0].kind, "unknown_value_type");
    assert!(issues[0].suggestion.is_some());
}

#[test]
fn test_empty_names_are_errors() {
    let root = node("docker", vec![flag("", "bool", "")], vec![node("", vec![], vec![])]);
    let issues = lint_tree(&root);
    assert!(issues.iter().any(|i| i.kind == "empty_flag_name"));
    assert!(issues.iter().any(|i| i.kind == "empty_command_name"));
}

#[test]
fn test_missing_help_is_info() {
    let root = node("docker", vec![flag("quiet", "bool", "")], vec![]);
    let issues = lint_tree(&root);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, LintSeverity::Info);
    assert_eq!(issues[0].kind, "missing_help");
}

#[test]
fn test_lint_spec_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meta.yaml");
    std::fs::write(
        &path,
        "name: docker\nflags:\n  - long: debug\n    type: bool\n    help: Enable debug mode\n  - long: debug\n    type: bool\n    help: Enable debug mode\n",
    )
    .unwrap();
    let issues = lint_spec(&path).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "duplicate_flag");
}
