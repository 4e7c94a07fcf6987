#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::spec::{CommandMeta, FlagSpec};

fn flag(long: &str, value_type: &str, help: &str) -> FlagSpec {
    FlagSpec {
        long: long.to_string(),
        value_type: value_type.to_string(),
        help: help.to_string(),
    }
}

fn meta(path: &[&str], flags: Vec<FlagSpec>) -> CommandMeta {
    CommandMeta {
        path: path.iter().map(|s| s.to_string()).collect(),
        usage: String::new(),
        short: String::new(),
        flags,
    }
}

#[test]
fn test_pascal_ident() {
    assert_eq!(pascal_ident(&["docker"]), "Docker");
    assert_eq!(
        pascal_ident(&["docker", "container", "run"]),
        "DockerContainerRun"
    );
    assert_eq!(pascal_ident(&["docker", "image-tool"]), "DockerImageTool");
    assert_eq!(pascal_ident(&["a", "b-c"]), "ABC");
}

#[test]
fn test_builder_ident() {
    assert_eq!(builder_ident(&["docker"]), "docker_cmd");
    assert_eq!(
        builder_ident(&["docker", "container", "run"]),
        "docker_container_run_cmd"
    );
    assert_eq!(
        builder_ident(&["docker", "image-tool"]),
        "docker_image_tool_cmd"
    );
}

#[test]
fn test_naming_is_deterministic() {
    let path = ["docker", "system-df"];
    assert_eq!(pascal_ident(&path), pascal_ident(&path));
    assert_eq!(builder_ident(&path), builder_ident(&path));
}

#[test]
fn test_field_ident() {
    assert_eq!(field_ident("no-cache"), "no_cache");
    assert_eq!(field_ident("tag"), "tag");
    assert_eq!(field_ident("cap-add"), "cap_add");
}

#[test]
fn test_field_ident_keyword() {
    assert_eq!(field_ident("type"), "r#type");
    assert_eq!(field_ident("loop"), "r#loop");
}

#[test]
fn test_field_ident_leading_digit() {
    assert_eq!(field_ident("2fa-token"), "_2fa_token");
}

#[test]
fn test_classify_value_type_collections() {
    assert_eq!(classify_value_type("list"), ("Vec<String>", RenderShape::List));
    assert_eq!(
        classify_value_type("map"),
        ("HashMap<String, String>", RenderShape::Map)
    );
}

#[test]
fn test_classify_value_type_scalars() {
    assert_eq!(classify_value_type("bool"), ("bool", RenderShape::Scalar));
    assert_eq!(classify_value_type("string"), ("String", RenderShape::Scalar));
    assert_eq!(classify_value_type("int"), ("i64", RenderShape::Scalar));
    assert_eq!(classify_value_type("int64"), ("i64", RenderShape::Scalar));
    assert_eq!(classify_value_type("uint16"), ("u16", RenderShape::Scalar));
    assert_eq!(classify_value_type("float64"), ("f64", RenderShape::Scalar));
    assert_eq!(classify_value_type("byte"), ("u8", RenderShape::Scalar));
    assert_eq!(classify_value_type("rune"), ("char", RenderShape::Scalar));
}

#[test]
fn test_classify_value_type_unknown_falls_back_to_string() {
    // Unrenderable metadata never fails generation; it degrades to opaque text.
    assert_eq!(classify_value_type("duration"), ("String", RenderShape::Scalar));
    assert_eq!(classify_value_type("filter"), ("String", RenderShape::Scalar));
    assert_eq!(classify_value_type(""), ("String", RenderShape::Scalar));
}

#[test]
fn test_is_recognized_tag() {
    assert!(is_recognized_tag("bool"));
    assert!(is_recognized_tag("list"));
    assert!(is_recognized_tag("uint32"));
    assert!(!is_recognized_tag("duration"));
    assert!(!is_recognized_tag(""));
}

#[test]
fn test_flag_to_field_doc_lines() {
    let field = flag_to_field(&flag("no-cache", "bool", "Do not use cache"));
    assert_eq!(field.name, "no_cache");
    assert_eq!(field.long, "no-cache");
    assert_eq!(field.ty, "bool");
    assert_eq!(field.doc_lines, vec!["Do not use cache".to_string()]);

    let multi = flag_to_field(&flag("label", "list", "Set meta data\non an image"));
    assert_eq!(multi.doc_lines.len(), 2);

    let bare = flag_to_field(&flag("quiet", "bool", ""));
    assert!(bare.doc_lines.is_empty());
}

#[test]
fn test_render_command_block_scalar_and_list() {
    let command = CommandMeta {
        path: vec!["docker".to_string(), "build".to_string()],
        usage: "docker build [OPTIONS] PATH | URL | -".to_string(),
        short: "Build an image from a Dockerfile".to_string(),
        flags: vec![
            flag("no-cache", "bool", "Do not use cache when building the image"),
            flag(
                "tag",
                "list",
                "Name and optionally a tag in the 'name:tag' format",
            ),
        ],
    };
    let block = render_command_block(&command).unwrap();
    assert_eq!(
        block,
        r#"/// Options for `docker build`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerBuildOption {
    /// Do not use cache when building the image
    pub no_cache: Option<bool>,
    /// Name and optionally a tag in the 'name:tag' format
    pub tag: Option<Vec<String>>,
}

/// Wrapper for `docker build`.
///
/// ```text
/// docker build [OPTIONS] PATH | URL | -
/// Build an image from a Dockerfile
/// ```
pub fn docker_build_cmd(opt: DockerBuildOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["build".to_string()];
    if let Some(value) = opt.no_cache {
        cargs.push(format!("--no-cache={value}"));
    }
    if let Some(values) = opt.tag {
        for value in values {
            cargs.push("--tag".to_string());
            cargs.push(value);
        }
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}
"#
    );
}

#[test]
fn test_render_command_block_map() {
    let command = meta(
        &["docker", "build"],
        vec![flag("build-arg", "map", "Set build-time variables")],
    );
    let block = render_command_block(&command).unwrap();
    assert!(block.contains("pub build_arg: Option<HashMap<String, String>>,"));
    assert!(block.contains("for (key, value) in entries {"));
    assert!(block.contains("cargs.push(\"--build-arg\".to_string());"));
    assert!(block.contains("cargs.push(format!(\"{key}={value}\"));"));
}

#[test]
fn test_render_command_block_no_flags() {
    let command = meta(&["docker", "pause"], vec![]);
    let block = render_command_block(&command).unwrap();
    assert!(!block.contains("pub struct"));
    assert!(block.contains("pub fn docker_pause_cmd(args: &[&str]) -> Command {"));
    assert!(block.contains("let mut cargs: Vec<String> = vec![\"pause\".to_string()];"));
}

#[test]
fn test_render_command_block_root_has_empty_prefix() {
    let command = meta(&["docker"], vec![flag("debug", "bool", "Enable debug mode")]);
    let block = render_command_block(&command).unwrap();
    assert!(block.contains("pub fn docker_cmd(opt: DockerOption, args: &[&str]) -> Command {"));
    assert!(block.contains("let mut cargs: Vec<String> = Vec::new();"));
}

#[test]
fn test_render_command_block_nested_prefix() {
    let command = meta(&["docker", "container", "stop"], vec![]);
    let block = render_command_block(&command).unwrap();
    assert!(block.contains(
        "let mut cargs: Vec<String> = vec![\"container\".to_string(), \"stop\".to_string()];"
    ));
}

#[test]
fn test_render_module_hashmap_import_only_when_needed() {
    let with_map = vec![meta(
        &["docker"],
        vec![flag("label", "map", "Set meta data")],
    )];
    let rendered = render_module("specs/docker.yaml", "src/docker.rs", &with_map).unwrap();
    assert!(rendered.contains("use std::collections::HashMap;"));

    let without_map = vec![meta(&["docker"], vec![flag("debug", "bool", "")])];
    let rendered = render_module("specs/docker.yaml", "src/docker.rs", &without_map).unwrap();
    assert!(!rendered.contains("use std::collections::HashMap;"));
    assert!(rendered.contains("use std::process::Command;"));
}

#[test]
fn test_render_module_is_deterministic() {
    let commands = vec![
        meta(&["docker"], vec![flag("debug", "bool", "Enable debug mode")]),
        meta(&["docker", "ps"], vec![flag("all", "bool", "Show all containers")]),
    ];
    let first = render_module("specs/docker.yaml", "src/docker.rs", &commands).unwrap();
    let second = render_module("specs/docker.yaml", "src/docker.rs", &commands).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_module_from_spec_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let spec = dir.path().join("tiny.yaml");
    std::fs::write(
        &spec,
        "name: docker\nchildren:\n  - name: version\n    flags:\n      - long: format\n        type: string\n        help: Format the output\n",
    )
    .unwrap();
    let output = dir.path().join("docker.rs");

    let written = generate_module_from_spec(&spec, &output, false, false).unwrap();
    assert_eq!(written, output);
    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("pub struct DockerVersionOption {"));
    assert!(contents.contains("pub fn docker_version_cmd("));
}

#[test]
fn test_generate_module_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let spec = dir.path().join("tiny.yaml");
    std::fs::write(&spec, "name: docker\n").unwrap();
    let output = dir.path().join("docker.rs");
    std::fs::write(&output, "// sentinel").unwrap();

    generate_module_from_spec(&spec, &output, false, false).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "// sentinel");

    generate_module_from_spec(&spec, &output, true, false).unwrap();
    assert!(std::fs::read_to_string(&output)
        .unwrap()
        .contains("pub fn docker_cmd("));
}

#[test]
fn test_generate_module_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let spec = dir.path().join("tiny.yaml");
    std::fs::write(&spec, "name: docker\n").unwrap();
    let output = dir.path().join("docker.rs");

    generate_module_from_spec(&spec, &output, false, true).unwrap();
    assert!(!output.exists());
}
