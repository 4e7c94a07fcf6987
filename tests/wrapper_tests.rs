//! Behavior of the generated docker wrappers: argument-vector assembly only.
//! Nothing in here runs docker; builders return unstarted `Command` values.

use dockwrap::docker::{
    docker_build_cmd, docker_cmd, docker_container_stop_cmd, docker_pause_cmd, docker_run_cmd,
    DockerBuildOption, DockerContainerStopOption, DockerOption, DockerRunOption,
};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::process::Command;

fn argv(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_build_with_flags_and_positionals() {
    let cmd = docker_build_cmd(
        DockerBuildOption {
            no_cache: Some(true),
            tag: Some(vec!["a:1".to_string(), "b:2".to_string()]),
            ..Default::default()
        },
        &["."],
    );
    assert_eq!(cmd.get_program(), OsStr::new("docker"));
    assert_eq!(
        argv(&cmd),
        vec!["build", "--no-cache=true", "--tag", "a:1", "--tag", "b:2", "."]
    );
}

#[test]
fn test_build_all_unset_yields_prefix_and_positionals_only() {
    let cmd = docker_build_cmd(DockerBuildOption::default(), &["."]);
    assert_eq!(argv(&cmd), vec!["build", "."]);
}

#[test]
fn test_container_stop_integer_flag() {
    let cmd = docker_container_stop_cmd(
        DockerContainerStopOption {
            time: Some(10),
            ..Default::default()
        },
        &["c1", "c2"],
    );
    assert_eq!(
        argv(&cmd),
        vec!["container", "stop", "--time=10", "c1", "c2"]
    );
}

#[test]
fn test_root_builder_has_no_prefix() {
    let cmd = docker_cmd(
        DockerOption {
            debug: Some(true),
            ..Default::default()
        },
        &["info"],
    );
    assert_eq!(cmd.get_program(), OsStr::new("docker"));
    assert_eq!(argv(&cmd), vec!["--debug=true", "info"]);
}

#[test]
fn test_falsy_values_still_render() {
    // An explicitly set zero/false/empty value is not the same as unset.
    let cmd = docker_build_cmd(
        DockerBuildOption {
            no_cache: Some(false),
            network: Some(String::new()),
            ..Default::default()
        },
        &[],
    );
    // network declares before no-cache in docker's (alphabetical) flag order
    assert_eq!(argv(&cmd), vec!["build", "--network=", "--no-cache=false"]);
}

#[test]
fn test_empty_list_renders_nothing() {
    // Present-but-empty collections contribute no entries, matching the
    // repeated-flag fan-out rule (2n entries for n elements).
    let cmd = docker_build_cmd(
        DockerBuildOption {
            tag: Some(vec![]),
            ..Default::default()
        },
        &[],
    );
    assert_eq!(argv(&cmd), vec!["build"]);
}

#[test]
fn test_list_fan_out_preserves_input_order() {
    let cmd = docker_run_cmd(
        DockerRunOption {
            env: Some(vec![
                "A=1".to_string(),
                "B=2".to_string(),
                "C=3".to_string(),
            ]),
            ..Default::default()
        },
        &["alpine"],
    );
    assert_eq!(
        argv(&cmd),
        vec!["run", "--env", "A=1", "--env", "B=2", "--env", "C=3", "alpine"]
    );
}

#[test]
fn test_map_fan_out_is_order_independent() {
    let mut sysctl = HashMap::new();
    sysctl.insert("net.core.somaxconn".to_string(), "1024".to_string());
    sysctl.insert("kernel.msgmax".to_string(), "65536".to_string());
    let cmd = docker_run_cmd(
        DockerRunOption {
            sysctl: Some(sysctl),
            ..Default::default()
        },
        &["alpine"],
    );
    let args = argv(&cmd);
    // 2 entries per map entry, flag token alternating with key=value, but no
    // guaranteed order across entries.
    assert_eq!(args[0], "run");
    assert_eq!(args.len(), 6);
    assert_eq!(args[5], "alpine");
    let pairs: Vec<(&str, &str)> = vec![
        (args[1].as_str(), args[2].as_str()),
        (args[3].as_str(), args[4].as_str()),
    ];
    for (flag, _) in &pairs {
        assert_eq!(*flag, "--sysctl");
    }
    let mut payloads: Vec<&str> = pairs.iter().map(|(_, v)| *v).collect();
    payloads.sort_unstable();
    assert_eq!(
        payloads,
        vec!["kernel.msgmax=65536", "net.core.somaxconn=1024"]
    );
}

#[test]
fn test_positionals_append_after_all_flags() {
    let cmd = docker_run_cmd(
        DockerRunOption {
            detach: Some(true),
            env: Some(vec!["A=1".to_string()]),
            ..Default::default()
        },
        &["alpine", "echo", "hello"],
    );
    let args = argv(&cmd);
    assert_eq!(&args[args.len() - 3..], ["alpine", "echo", "hello"]);
    assert!(args.contains(&"--detach=true".to_string()));
}

#[test]
fn test_flagless_builder_takes_only_positionals() {
    let cmd = docker_pause_cmd(&["c1"]);
    assert_eq!(cmd.get_program(), OsStr::new("docker"));
    assert_eq!(argv(&cmd), vec!["pause", "c1"]);
}

#[test]
fn test_no_positionals() {
    let cmd = docker_pause_cmd(&[]);
    assert_eq!(argv(&cmd), vec!["pause"]);
}
