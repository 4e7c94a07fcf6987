//! # Command Metadata Module
//!
//! Loading and flattening of the wrapped CLI's flag metadata.
//!
//! The metadata file (YAML or JSON) describes the CLI's subcommand tree: per
//! node a name, usage synopsis, short description, an ordered flag list, and
//! child nodes. [`load_spec`] parses it into a [`CommandNode`] tree and
//! [`build_commands`] flattens that tree pre-order into [`CommandMeta`] rows,
//! each carrying its full root-to-node name path. The generator consumes only
//! the flattened rows.
//!
//! The tree is read-only input: nothing here mutates it, validates flag
//! semantics, or talks to the wrapped CLI.

mod build;
mod load;
mod types;

pub use build::*;
pub use load::*;
pub use types::*;
