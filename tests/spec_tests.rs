use dockwrap::spec::{build_commands, load_spec};
use std::path::Path;

#[test]
fn test_load_docker_metadata() {
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    assert_eq!(root.name, "docker");
    assert_eq!(root.usage, "docker [OPTIONS] COMMAND [ARG...]");
    assert_eq!(root.short, "A self-sufficient runtime for containers");
    assert!(!root.flags.is_empty());
    assert!(!root.children.is_empty());
}

#[test]
fn test_flatten_is_preorder() {
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    let commands = build_commands(&root);

    // Root comes first; every child's subtree precedes the next sibling.
    assert_eq!(commands[0].display_path(), "docker");
    let container = commands
        .iter()
        .position(|c| c.display_path() == "docker container")
        .unwrap();
    let container_run = commands
        .iter()
        .position(|c| c.display_path() == "docker container run")
        .unwrap();
    let context = commands
        .iter()
        .position(|c| c.display_path() == "docker context")
        .unwrap();
    assert!(container < container_run);
    assert!(container_run < context);
}

#[test]
fn test_every_path_starts_with_program_name() {
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    for command in build_commands(&root) {
        assert_eq!(command.path[0], "docker");
        assert_eq!(
            command.subcommand_prefix().len(),
            command.path.len() - 1,
            "prefix drops exactly the program name for {}",
            command.display_path()
        );
    }
}

#[test]
fn test_flag_declaration_order_is_preserved() {
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    let commands = build_commands(&root);
    let build = commands
        .iter()
        .find(|c| c.display_path() == "docker build")
        .unwrap();
    let longs: Vec<&str> = build.flags.iter().map(|f| f.long.as_str()).collect();
    let no_cache = longs.iter().position(|l| *l == "no-cache").unwrap();
    let tag = longs.iter().position(|l| *l == "tag").unwrap();
    // docker declares its flags alphabetically; the metadata keeps that order.
    assert!(no_cache < tag);
}

#[test]
fn test_flag_value_types() {
    let root = load_spec(Path::new("specs/docker.yaml")).unwrap();
    let commands = build_commands(&root);
    let run = commands
        .iter()
        .find(|c| c.display_path() == "docker run")
        .unwrap();
    let by_long = |long: &str| run.flags.iter().find(|f| f.long == long).unwrap();
    assert_eq!(by_long("detach").value_type, "bool");
    assert_eq!(by_long("env").value_type, "list");
    assert_eq!(by_long("sysctl").value_type, "map");
    assert_eq!(by_long("name").value_type, "string");
}
