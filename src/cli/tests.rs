//! Unit tests for CLI commands

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from([
        "dockwrap-gen",
        "generate",
        "--spec",
        "specs/docker.yaml",
        "--output",
        "src/docker.rs",
        "--force",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            spec,
            output,
            force,
            dry_run,
        } => {
            assert_eq!(spec.to_string_lossy(), "specs/docker.yaml");
            assert_eq!(output.to_string_lossy(), "src/docker.rs");
            assert!(force);
            assert!(!dry_run);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "dockwrap-gen",
        "lint",
        "--spec",
        "meta.yaml",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(spec.to_string_lossy(), "meta.yaml");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_inspect_command_parses() {
    let cli = Cli::try_parse_from(["dockwrap-gen", "inspect", "--spec", "meta.yaml"]).unwrap();
    match cli.command {
        Commands::Inspect { spec } => {
            assert_eq!(spec.to_string_lossy(), "meta.yaml");
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn test_generate_requires_output() {
    let result = Cli::try_parse_from(["dockwrap-gen", "generate", "--spec", "meta.yaml"]);
    assert!(result.is_err());
}
