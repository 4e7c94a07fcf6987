use super::types::CommandNode;
use anyhow::Context;
use std::path::Path;

/// Load a command metadata file into a [`CommandNode`] tree.
///
/// The format is chosen by extension: `.yaml`/`.yml` parse as YAML,
/// anything else as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a
/// command tree.
pub fn load_spec(path: &Path) -> anyhow::Result<CommandNode> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read command metadata {path:?}"))?;
    let root: CommandNode = if path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
    {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML command metadata {path:?}"))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON command metadata {path:?}"))?
    };
    tracing::debug!(root = %root.name, children = root.children.len(), "loaded command metadata");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_spec_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "name: docker\nusage: docker [OPTIONS] COMMAND\nflags:\n  - long: debug\n    type: bool\n    help: Enable debug mode\nchildren:\n  - name: version\n"
        )
        .unwrap();
        let root = load_spec(file.path()).unwrap();
        assert_eq!(root.name, "docker");
        assert_eq!(root.flags.len(), 1);
        assert_eq!(root.flags[0].long, "debug");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "version");
        assert!(root.children[0].flags.is_empty());
    }

    #[test]
    fn test_load_spec_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"name": "docker", "children": [{{"name": "ps", "flags": [{{"long": "all", "type": "bool"}}]}}]}}"#
        )
        .unwrap();
        let root = load_spec(file.path()).unwrap();
        assert_eq!(root.children[0].flags[0].long, "all");
    }

    #[test]
    fn test_load_spec_missing_file() {
        let err = load_spec(Path::new("/nonexistent/metadata.yaml")).unwrap_err();
        assert!(err.to_string().contains("metadata"));
    }
}
