use dockwrap::generator::{
    builder_ident, classify_value_type, generate_module_from_spec, pascal_ident, render_module,
    RenderShape,
};
use dockwrap::spec::{build_commands, load_spec};
use std::path::Path;

#[test]
fn test_identifier_derivation() {
    assert_eq!(pascal_ident(&["docker", "build"]), "DockerBuild");
    assert_eq!(
        pascal_ident(&["docker", "image", "ls"]),
        "DockerImageLs"
    );
    assert_eq!(builder_ident(&["docker", "image", "ls"]), "docker_image_ls_cmd");
}

#[test]
fn test_classification() {
    assert_eq!(classify_value_type("list"), ("Vec<String>", RenderShape::List));
    assert_eq!(
        classify_value_type("map"),
        ("HashMap<String, String>", RenderShape::Map)
    );
    assert_eq!(classify_value_type("int"), ("i64", RenderShape::Scalar));
    assert_eq!(
        classify_value_type("not-a-real-tag"),
        ("String", RenderShape::Scalar)
    );
}

#[test]
fn test_regenerating_docker_module_is_byte_identical() {
    // The committed module is exactly what the generator emits for the
    // committed metadata. If this fails, run dockwrap-gen with --force.
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    let commands = build_commands(&root);
    let rendered = render_module("specs/docker.yaml", "src/docker.rs", &commands).unwrap();
    let committed = include_str!("../src/docker.rs");
    assert_eq!(rendered, committed);
}

#[test]
fn test_generation_is_deterministic() {
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    let commands = build_commands(&root);
    let first = render_module("specs/docker.yaml", "src/docker.rs", &commands).unwrap();
    let second = render_module("specs/docker.yaml", "src/docker.rs", &commands).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_into_scratch_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("docker.rs");
    generate_module_from_spec(Path::new("specs/docker.yaml"), &output, false, false).unwrap();
    let generated = std::fs::read_to_string(&output).unwrap();
    assert!(generated.contains("pub struct DockerBuildOption {"));
    assert!(generated.contains("pub fn docker_container_run_cmd("));
    // Flag-less subcommands get a positionals-only builder and no struct.
    assert!(generated.contains("pub fn docker_pause_cmd(args: &[&str]) -> Command {"));
    assert!(!generated.contains("pub struct DockerPauseOption"));
}

#[test]
fn test_every_command_appears_exactly_once() {
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    let commands = build_commands(&root);
    let rendered = render_module("specs/docker.yaml", "src/docker.rs", &commands).unwrap();
    for command in &commands {
        let needle = format!("pub fn {}(", builder_ident(&command.path));
        assert_eq!(
            rendered.matches(&needle).count(),
            1,
            "expected exactly one builder for {}",
            command.display_path()
        );
    }
}
