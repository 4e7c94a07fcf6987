//! # dockwrap
//!
//! **dockwrap** is a typed Rust wrapper library for the `docker` CLI, plus the
//! code generator that derives those wrappers from the CLI's flag metadata.
//!
//! ## Overview
//!
//! Calling `docker` from Rust usually means assembling string vectors by hand
//! and hoping the flag spellings are right. dockwrap instead generates, for
//! every docker subcommand, an options struct with one optional field per
//! flag and a builder function that turns the struct plus positional
//! arguments into a ready-to-run [`std::process::Command`]:
//!
//! ```rust,no_run
//! use dockwrap::docker::{docker_build_cmd, DockerBuildOption};
//!
//! let cmd = docker_build_cmd(
//!     DockerBuildOption {
//!         no_cache: Some(true),
//!         tag: Some(vec!["name1:tag1".to_string(), "name2:tag2".to_string()]),
//!         ..Default::default()
//!     },
//!     &["."],
//! );
//! // cmd is `docker build --no-cache=true --tag name1:tag1 --tag name2:tag2 .`
//! ```
//!
//! Unset fields contribute nothing to the argument vector, so "flag not
//! given" and "flag given with a zero/false/empty value" stay distinct.
//! Builders only construct the `Command`; running it (`.output()`,
//! `.status()`) and handling its failures is the caller's business.
//!
//! ## Architecture
//!
//! The library is organized into a few key modules:
//!
//! - **[`spec`]** - command metadata model: the subcommand tree with per-node
//!   flag declarations, loaded from YAML/JSON and flattened pre-order
//! - **[`generator`]** - naming rules, flag-to-field type inference, and the
//!   Askama templates that render one struct + builder per subcommand
//! - **[`linter`]** - structural checks on a metadata file (duplicate flags,
//!   unrecognized value types) run before generation
//! - **[`cli`]** - the `dockwrap-gen` command-line interface
//! - **[`docker`]** - the generated wrappers themselves
//!
//! ### Code Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(dockwrap-gen)
//!     participant Spec as spec::load_spec
//!     participant Build as spec::build_commands
//!     participant Fields as generator::fields
//!     participant Templates as generator::templates
//!     participant FS as File System
//!
//!     User->>CLI: cargo run --bin dockwrap-gen<br/>generate --spec specs/docker.yaml
//!     CLI->>Spec: load_spec("specs/docker.yaml")
//!     Spec->>Spec: Parse YAML/JSON
//!     Spec-->>CLI: CommandNode tree
//!     CLI->>Build: build_commands(&root)
//!     Build->>Build: Pre-order walk,<br/>carry name paths
//!     Build-->>CLI: Vec<CommandMeta>
//!
//!     loop per command
//!         CLI->>Fields: flag_to_field(flag)
//!         Fields->>Fields: Tag → field type +<br/>rendering shape
//!         CLI->>Templates: render_command_block(command)
//!         Templates-->>CLI: struct + builder source
//!     end
//!
//!     CLI->>FS: Write src/docker.rs
//!     CLI-->>User: ✅ Generated module
//! ```
//!
//! ### Key Properties
//!
//! 1. **Metadata-driven**: every wrapper is derived from the flag metadata in
//!    `specs/docker.yaml`; nothing is hand-maintained
//! 2. **Deterministic**: generation is a pure transform; identical metadata
//!    yields byte-identical output, in pre-order traversal order
//! 3. **Total**: builders have no failure modes; unrecognized flag types
//!    degrade to opaque strings instead of failing generation
//! 4. **Construction only**: no process is started, waited on, or supervised
//!    anywhere in this crate
//!
//! ## Regenerating the Wrappers
//!
//! `src/docker.rs` is generated output, committed for convenience:
//!
//! ```bash
//! cargo run --bin dockwrap-gen -- generate \
//!     --spec specs/docker.yaml \
//!     --output src/docker.rs \
//!     --force
//! ```
//!
//! **Important**: do not edit `src/docker.rs` directly! It is overwritten on
//! regeneration. Change `specs/docker.yaml` or the templates in `templates/`
//! instead.

pub mod cli;
pub mod docker;
pub mod generator;
pub mod linter;
pub mod spec;

pub use spec::{build_commands, load_spec, CommandMeta, CommandNode, FlagSpec};
