use std::path::{Path, PathBuf};

use anyhow::Context;

use super::templates::{render_module, write_module};
use crate::spec::{build_commands, load_spec};

/// Generate the wrapper module for a command metadata file.
///
/// Loads the tree, flattens it pre-order, renders one block per command and
/// writes the result to `output` as a single `.rs` file. Generation is a
/// pure transform of the metadata: running it twice over the same input
/// yields byte-identical output.
///
/// `force` overwrites an existing output file; `dry_run` renders and reports
/// but writes nothing.
///
/// # Errors
///
/// Returns an error if the metadata cannot be loaded or the output cannot
/// be written.
pub fn generate_module_from_spec(
    spec_path: &Path,
    output: &Path,
    force: bool,
    dry_run: bool,
) -> anyhow::Result<PathBuf> {
    let root = load_spec(spec_path)
        .with_context(|| format!("failed to load command metadata from {spec_path:?}"))?;
    let commands = build_commands(&root);
    tracing::debug!(
        program = %root.name,
        commands = commands.len(),
        "flattened command tree"
    );

    let rendered = render_module(
        &spec_path.display().to_string(),
        &output.display().to_string(),
        &commands,
    )?;

    if dry_run {
        println!(
            "ℹ️  Dry run: would write {} commands ({} bytes) → {:?}",
            commands.len(),
            rendered.len(),
            output
        );
        return Ok(output.to_path_buf());
    }

    write_module(output, &rendered, force)?;
    Ok(output.to_path_buf())
}
