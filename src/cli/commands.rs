use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::spec::{build_commands, load_spec};

/// Command-line interface for dockwrap
///
/// Provides commands for generating the wrapper module from command
/// metadata and for checking a metadata file before generation.
#[derive(Parser)]
#[command(name = "dockwrap-gen")]
#[command(about = "dockwrap code generator CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for dockwrap
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the wrapper module from a command metadata file
    Generate {
        /// Path to the command metadata file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output path for the generated module (e.g. src/docker.rs)
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite an existing output file
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Render and report without writing the output file
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Lint a command metadata file
    ///
    /// Checks the metadata for defects the generator would otherwise paper
    /// over: duplicate flag or subcommand names, empty names, unrecognized
    /// value-type tags, missing help text.
    Lint {
        /// Path to the command metadata file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Exit with an error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// Print the flattened command table of a metadata file
    Inspect {
        /// Path to the command metadata file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The metadata file cannot be loaded or parsed
/// - Code generation fails
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            spec,
            output,
            force,
            dry_run,
        } => {
            crate::generator::generate_module_from_spec(spec, output, *force, *dry_run)?;
            Ok(())
        }
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
        } => {
            let issues = crate::linter::lint_spec(spec)?;

            if *errors_only {
                let errors: Vec<_> = issues
                    .iter()
                    .filter(|i| i.severity == crate::linter::LintSeverity::Error)
                    .cloned()
                    .collect();
                crate::linter::print_lint_issues(&errors);
                if *fail_on_error {
                    crate::linter::fail_if_errors(&errors);
                }
            } else {
                crate::linter::print_lint_issues(&issues);
                if *fail_on_error {
                    crate::linter::fail_if_errors(&issues);
                }
            }

            Ok(())
        }
        Commands::Inspect { spec } => {
            let root = load_spec(spec)?;
            let commands = build_commands(&root);
            println!("📋 {} commands in {:?}:\n", commands.len(), spec);
            for command in &commands {
                println!(
                    "   {:<40} {:>2} flag(s)  {}",
                    command.display_path(),
                    command.flags.len(),
                    command.usage.lines().next().unwrap_or_default()
                );
            }
            Ok(())
        }
    }
}
