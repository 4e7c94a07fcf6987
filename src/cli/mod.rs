//! # CLI Module
//!
//! Command-line interface for the dockwrap code generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the wrapper module from a command metadata file:
//!
//! ```bash
//! dockwrap-gen generate --spec specs/docker.yaml --output src/docker.rs --force
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Path to the command metadata file (required)
//! - `--output <FILE>` - Output path for the generated module (required)
//! - `--force` - Overwrite an existing output file
//! - `--dry-run` - Render and report without writing
//!
//! ### `lint`
//!
//! Check a metadata file for structural defects:
//!
//! ```bash
//! dockwrap-gen lint --spec specs/docker.yaml --fail-on-error
//! ```
//!
//! ### `inspect`
//!
//! Print the flattened command table:
//!
//! ```bash
//! dockwrap-gen inspect --spec specs/docker.yaml
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
