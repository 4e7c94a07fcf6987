use askama::Template;
use std::fs;
use std::path::Path;

use super::fields::{flag_to_field, FieldDef, RenderShape};
use super::naming::{builder_ident, pascal_ident};
use crate::spec::CommandMeta;

/// Template data for the generated module's banner and imports.
#[derive(Template)]
#[template(path = "module_header.rs.txt", escape = "none")]
pub struct ModuleHeaderTemplate {
    /// Program name (root node name, e.g. `docker`).
    pub program: String,
    /// Metadata file path as shown in the regeneration hint.
    pub spec_display: String,
    /// Output file path as shown in the regeneration hint.
    pub out_display: String,
    /// Whether any flag in the module is map-shaped (controls the
    /// `HashMap` import).
    pub has_map: bool,
}

/// One field row as consumed by the command-block template.
pub struct TemplateField {
    pub name: String,
    pub long: String,
    pub ty: String,
    pub doc_lines: Vec<String>,
    pub is_list: bool,
    pub is_map: bool,
}

impl From<FieldDef> for TemplateField {
    fn from(field: FieldDef) -> Self {
        TemplateField {
            is_list: field.shape == RenderShape::List,
            is_map: field.shape == RenderShape::Map,
            name: field.name,
            long: field.long,
            ty: field.ty,
            doc_lines: field.doc_lines,
        }
    }
}

/// Template data for one subcommand: the options struct (if the node has
/// flags) plus the builder function.
#[derive(Template)]
#[template(path = "command.rs.txt", escape = "none")]
pub struct CommandBlockTemplate {
    pub program: String,
    /// Full path joined with spaces, e.g. `docker container run`.
    pub display_path: String,
    pub struct_name: String,
    pub fn_name: String,
    /// Usage synopsis and short description, one doc line each. Multi-line
    /// synopses (e.g. `docker cp`) contribute one entry per line.
    pub synopsis_lines: Vec<String>,
    pub has_synopsis: bool,
    pub has_options: bool,
    /// Root builders have no fixed subcommand prefix.
    pub is_root: bool,
    /// Literal subcommand tokens (`path[1..]`).
    pub prefix: Vec<String>,
    pub fields: Vec<TemplateField>,
}

/// Render the block for one command: doc comment, options struct (when the
/// node declares flags), builder function.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_command_block(command: &CommandMeta) -> anyhow::Result<String> {
    let fields: Vec<TemplateField> = command
        .flags
        .iter()
        .map(|flag| flag_to_field(flag).into())
        .collect();
    let synopsis_lines: Vec<String> = command
        .usage
        .lines()
        .chain(command.short.lines())
        .map(str::to_string)
        .collect();
    let context = CommandBlockTemplate {
        program: command.path[0].clone(),
        display_path: command.display_path(),
        struct_name: format!("{}Option", pascal_ident(&command.path)),
        fn_name: builder_ident(&command.path),
        has_synopsis: !synopsis_lines.is_empty(),
        synopsis_lines,
        has_options: !fields.is_empty(),
        is_root: command.path.len() == 1,
        prefix: command.subcommand_prefix().to_vec(),
        fields,
    };
    Ok(context.render()?)
}

/// Render the complete module: banner, imports, then every command block in
/// traversal order, separated by blank lines.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_module(
    spec_display: &str,
    out_display: &str,
    commands: &[CommandMeta],
) -> anyhow::Result<String> {
    let program = commands
        .first()
        .map(|c| c.path[0].clone())
        .unwrap_or_default();
    let has_map = commands.iter().any(|c| {
        c.flags
            .iter()
            .any(|f| super::fields::classify_value_type(&f.value_type).1 == RenderShape::Map)
    });
    let header = ModuleHeaderTemplate {
        program,
        spec_display: spec_display.to_string(),
        out_display: out_display.to_string(),
        has_map,
    }
    .render()?;

    let mut module = header;
    for command in commands {
        module.push('\n');
        module.push_str(&render_command_block(command)?);
    }
    Ok(module)
}

/// Write the rendered module to disk.
///
/// Refuses to overwrite an existing file unless `force` is set.
///
/// # Errors
///
/// Returns an error if file writing fails.
pub fn write_module(path: &Path, rendered: &str, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing module file: {path:?} (use --force to overwrite)");
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    println!("✅ Generated module: {path:?}");
    Ok(())
}
