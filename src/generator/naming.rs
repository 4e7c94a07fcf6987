/// Derive the PascalCase base identifier for a name path.
///
/// Every path element is split on `-`, each segment gets its first letter
/// upper-cased, and the segments are concatenated without separators.
/// Single-character segments become their single upper-cased letter.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(pascal_ident(&["docker", "container", "run"]), "DockerContainerRun");
/// assert_eq!(pascal_ident(&["docker", "image-tool"]), "DockerImageTool");
/// ```
pub fn pascal_ident<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .flat_map(|element| element.as_ref().split('-'))
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Derive the snake_case builder function name for a name path: path
/// elements joined with `_`, hyphens folded to `_`, suffixed `_cmd`.
///
/// `["docker", "container", "run"]` → `docker_container_run_cmd`.
pub fn builder_ident<S: AsRef<str>>(path: &[S]) -> String {
    let base = path
        .iter()
        .map(|element| element.as_ref().replace('-', "_"))
        .collect::<Vec<_>>()
        .join("_");
    format!("{base}_cmd")
}

/// Derive the struct field identifier for a flag long name.
///
/// Hyphens fold to underscores; a leading digit gets an underscore prefix;
/// Rust keywords get the raw-identifier prefix.
pub fn field_ident(long: &str) -> String {
    let mut name: String = long
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() {
        name = "_".to_string();
    }
    if name
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
    {
        name.insert(0, '_');
    }
    sanitize_rust_identifier(&name)
}

fn sanitize_rust_identifier(name: &str) -> String {
    const KEYWORDS: &[&str] = &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while", "async", "await", "dyn",
    ];
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}
