//! # Metadata Linter Module
//!
//! Structural checks for command metadata files, run before generation.
//!
//! The generator itself never fails on malformed flag metadata: an
//! unrecognized value-type tag degrades to opaque text, and it never drops
//! fields silently. The linter is the explicit pre-flight that surfaces the
//! defects generation would otherwise paper over:
//!
//! 1. **Duplicate flag names** - two flags with the same long name on one
//!    node would generate a struct with duplicate fields
//! 2. **Duplicate child names** - two subcommands with the same name would
//!    generate colliding identifiers
//! 3. **Empty names** - a nameless command or flag cannot be rendered
//! 4. **Unrecognized value-type tags** - legal, but worth knowing they will
//!    render as opaque strings
//! 5. **Missing help text** - generated fields without doc comments
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dockwrap::linter::{lint_spec, LintSeverity};
//!
//! let issues = lint_spec(Path::new("specs/docker.yaml"))?;
//! for issue in &issues {
//!     eprintln!("[{}] {}: {}", issue.kind, issue.location, issue.message);
//! }
//! ```

use crate::generator::is_recognized_tag;
use crate::spec::{build_commands, load_spec, CommandMeta, CommandNode};
use std::collections::HashSet;
use std::path::Path;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - the generated module would be defective
    Error,
    /// Warning - generation degrades (e.g. opaque-string fallback)
    Warning,
    /// Info - best practice suggestion
    Info,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a command metadata file
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (the node's full path, e.g.
    /// `docker container run`)
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g. `duplicate_flag`, `unknown_value_type`)
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a command metadata file
///
/// # Arguments
///
/// * `spec_path` - Path to the metadata file (YAML or JSON)
///
/// # Returns
///
/// A vector of lint issues found in the metadata
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn lint_spec(spec_path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let root = load_spec(spec_path)?;
    Ok(lint_tree(&root))
}

/// Lint an already loaded command tree.
pub fn lint_tree(root: &CommandNode) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for command in build_commands(root) {
        lint_command(&command, &mut issues);
    }
    lint_child_names(root, &[], &mut issues);
    issues
}

fn lint_command(command: &CommandMeta, issues: &mut Vec<LintIssue>) {
    let location = command.display_path();

    if command.path.last().map(|n| n.is_empty()).unwrap_or(true) {
        issues.push(LintIssue::new(
            location.clone(),
            LintSeverity::Error,
            "empty_command_name",
            "command has an empty name",
        ));
    }

    let mut seen = HashSet::new();
    for flag in &command.flags {
        if flag.long.is_empty() {
            issues.push(LintIssue::new(
                location.clone(),
                LintSeverity::Error,
                "empty_flag_name",
                "flag has an empty long name",
            ));
            continue;
        }
        if !seen.insert(flag.long.clone()) {
            issues.push(
                LintIssue::new(
                    location.clone(),
                    LintSeverity::Error,
                    "duplicate_flag",
                    format!("flag '--{}' is declared more than once", flag.long),
                )
                .with_suggestion("remove or rename the duplicate declaration"),
            );
        }
        if !is_recognized_tag(&flag.value_type) {
            issues.push(
                LintIssue::new(
                    location.clone(),
                    LintSeverity::Warning,
                    "unknown_value_type",
                    format!(
                        "flag '--{}' has unrecognized value type '{}'",
                        flag.long, flag.value_type
                    ),
                )
                .with_suggestion("the field will render as an opaque Option<String>"),
            );
        }
        if flag.help.is_empty() {
            issues.push(LintIssue::new(
                location.clone(),
                LintSeverity::Info,
                "missing_help",
                format!("flag '--{}' has no help text", flag.long),
            ));
        }
    }
}

fn lint_child_names(node: &CommandNode, parents: &[String], issues: &mut Vec<LintIssue>) {
    let mut path = parents.to_vec();
    path.push(node.name.clone());

    let mut seen = HashSet::new();
    for child in &node.children {
        if !seen.insert(child.name.clone()) {
            issues.push(LintIssue::new(
                path.join(" "),
                LintSeverity::Error,
                "duplicate_command",
                format!("subcommand '{}' is declared more than once", child.name),
            ));
        }
        lint_child_names(child, &path, issues);
    }
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();
    let infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Info)
        .collect();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    if !errors.is_empty() {
        println!("❌ Errors (must fix):");
        for issue in &errors {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }

    if !warnings.is_empty() {
        println!("⚠️  Warnings:");
        for issue in &warnings {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }

    if !infos.is_empty() {
        println!("ℹ️  Info:");
        for issue in &infos {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
        }
        println!();
    }
}

/// Exit with a non-zero status if any error-severity issues are present
pub fn fail_if_errors(issues: &[LintIssue]) {
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    if !errors.is_empty() {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
