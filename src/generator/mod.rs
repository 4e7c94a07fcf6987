//! # Generator Module
//!
//! Code generation for dockwrap: turns a command metadata tree into the
//! wrapper module (`src/docker.rs`), one options struct and one builder
//! function per subcommand.
//!
//! ## Architecture
//!
//! The generator uses Askama templates to produce Rust code:
//!
//! ```text
//! Command metadata → Flatten (pre-order) → Field inference → Template rendering → Generated module
//! ```
//!
//! 1. **Flatten** - [`crate::spec::build_commands`] walks the tree root
//!    first, each child subtree before the next sibling, carrying the full
//!    name path
//! 2. **Naming** - the path derives the struct name (`DockerContainerRunOption`)
//!    and builder name (`docker_container_run_cmd`)
//! 3. **Field inference** - each flag's value-type tag maps to a field type
//!    and a rendering shape (scalar / repeated list / repeated map)
//! 4. **Rendering** - Askama templates emit the struct, its per-field doc
//!    comments, and the builder body; blocks concatenate in traversal order
//!
//! Generation is single-threaded and pure: no shared state across nodes,
//! no I/O until the final write.
//!
//! ## Usage
//!
//! ### CLI
//!
//! ```bash
//! cargo run --bin dockwrap-gen -- generate \
//!     --spec specs/docker.yaml \
//!     --output src/docker.rs \
//!     --force
//! ```
//!
//! ### Programmatic
//!
//! ```rust,ignore
//! use dockwrap::generator::generate_module_from_spec;
//! use std::path::Path;
//!
//! generate_module_from_spec(
//!     Path::new("specs/docker.yaml"),
//!     Path::new("src/docker.rs"),
//!     true,  // force overwrite
//!     false, // not a dry run
//! )?;
//! ```
//!
//! ## Templates
//!
//! Templates live in the `templates/` directory:
//!
//! - `module_header.rs.txt` - module banner and imports
//! - `command.rs.txt` - one subcommand's struct + builder
//!
//! Modify these to change the shape of the emitted code.

mod fields;
mod naming;
mod project;
mod templates;
#[cfg(test)]
mod tests;

pub use fields::*;
pub use naming::*;
pub use project::*;
pub use templates::*;
