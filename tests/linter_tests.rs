use dockwrap::linter::{lint_spec, LintSeverity};
use std::path::Path;

#[test]
fn test_docker_metadata_is_clean() {
    let issues = lint_spec(Path::new("specs/docker.yaml")).unwrap();
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    assert!(errors.is_empty(), "unexpected lint errors: {errors:?}");
}

#[test]
fn test_duplicate_flag_reported_with_node_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(
        &path,
        concat!(
            "name: docker\n",
            "children:\n",
            "  - name: build\n",
            "    flags:\n",
            "      - long: tag\n",
            "        type: list\n",
            "        help: Tag the image\n",
            "      - long: tag\n",
            "        type: list\n",
            "        help: Tag the image\n",
        ),
    )
    .unwrap();
    let issues = lint_spec(&path).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, LintSeverity::Error);
    assert_eq!(issues[0].kind, "duplicate_flag");
    assert_eq!(issues[0].location, "docker build");
}

#[test]
fn test_unknown_tag_warns_but_does_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("odd.yaml");
    std::fs::write(
        &path,
        concat!(
            "name: docker\n",
            "flags:\n",
            "  - long: timeout\n",
            "    type: duration\n",
            "    help: Max time before giving up\n",
        ),
    )
    .unwrap();
    let issues = lint_spec(&path).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, LintSeverity::Warning);
    assert_eq!(issues[0].kind, "unknown_value_type");
}

#[test]
fn test_unparseable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.yaml");
    std::fs::write(&path, ": not yaml : [").unwrap();
    assert!(lint_spec(&path).is_err());
}
