//! Generated wrappers for the `docker` CLI.
//!
//! One options struct and one builder function per subcommand. Builders
//! assemble the argument vector for their subcommand path and return an
//! unstarted [`std::process::Command`]; callers run it with `.output()` or
//! `.status()`.
//!
//! Generated by `dockwrap-gen` from `specs/docker.yaml`. Do not edit by
//! hand; regenerate with:
//!
//! `cargo run --bin dockwrap-gen -- generate --spec specs/docker.yaml --output src/docker.rs --force`

#![allow(clippy::must_use_candidate)]

use std::collections::HashMap;
use std::process::Command;

/// Options for `docker`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerOption {
    /// Location of client config files
    pub config: Option<String>,
    /// Name of the context to use to connect to the daemon (overrides DOCKER_HOST env var and default context set with "docker context use")
    pub context: Option<String>,
    /// Enable debug mode
    pub debug: Option<bool>,
    /// Daemon socket(s) to connect to
    pub host: Option<Vec<String>>,
    /// Set the logging level ("debug"|"info"|"warn"|"error"|"fatal")
    pub log_level: Option<String>,
    /// Use TLS; implied by --tlsverify
    pub tls: Option<bool>,
    /// Trust certs signed only by this CA
    pub tlscacert: Option<String>,
    /// Path to TLS certificate file
    pub tlscert: Option<String>,
    /// Path to TLS key file
    pub tlskey: Option<String>,
    /// Use TLS and verify the remote
    pub tlsverify: Option<bool>,
    /// Print version information and quit
    pub version: Option<bool>,
}

/// Wrapper for `docker`.
///
/// ```text
/// docker [OPTIONS] COMMAND [ARG...]
/// A self-sufficient runtime for containers
/// ```
pub fn docker_cmd(opt: DockerOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = Vec::new();
    if let Some(value) = opt.config {
        cargs.push(format!("--config={value}"));
    }
    if let Some(value) = opt.context {
        cargs.push(format!("--context={value}"));
    }
    if let Some(value) = opt.debug {
        cargs.push(format!("--debug={value}"));
    }
    if let Some(values) = opt.host {
        for value in values {
            cargs.push("--host".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.log_level {
        cargs.push(format!("--log-level={value}"));
    }
    if let Some(value) = opt.tls {
        cargs.push(format!("--tls={value}"));
    }
    if let Some(value) = opt.tlscacert {
        cargs.push(format!("--tlscacert={value}"));
    }
    if let Some(value) = opt.tlscert {
        cargs.push(format!("--tlscert={value}"));
    }
    if let Some(value) = opt.tlskey {
        cargs.push(format!("--tlskey={value}"));
    }
    if let Some(value) = opt.tlsverify {
        cargs.push(format!("--tlsverify={value}"));
    }
    if let Some(value) = opt.version {
        cargs.push(format!("--version={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker attach`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerAttachOption {
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Do not attach STDIN
    pub no_stdin: Option<bool>,
    /// Proxy all received signals to the process
    pub sig_proxy: Option<bool>,
}

/// Wrapper for `docker attach`.
///
/// ```text
/// attach [OPTIONS] CONTAINER
/// Attach local standard input, output, and error streams to a running container
/// ```
pub fn docker_attach_cmd(opt: DockerAttachOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["attach".to_string()];
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(value) = opt.no_stdin {
        cargs.push(format!("--no-stdin={value}"));
    }
    if let Some(value) = opt.sig_proxy {
        cargs.push(format!("--sig-proxy={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker build`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerBuildOption {
    /// Add a custom host-to-IP mapping (host:ip)
    pub add_host: Option<Vec<String>>,
    /// Set build-time variables
    pub build_arg: Option<Vec<String>>,
    /// Images to consider as cache sources
    pub cache_from: Option<String>,
    /// Optional parent cgroup for the container
    pub cgroup_parent: Option<String>,
    /// Compress the build context using gzip
    pub compress: Option<bool>,
    /// Limit the CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit the CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Name of the Dockerfile (Default is 'PATH/Dockerfile')
    pub file: Option<String>,
    /// Always remove intermediate containers
    pub force_rm: Option<bool>,
    /// Write the image ID to the file
    pub iidfile: Option<String>,
    /// Container isolation technology
    pub isolation: Option<String>,
    /// Set metadata for an image
    pub label: Option<Vec<String>>,
    /// Memory limit
    pub memory: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Set the networking mode for the RUN instructions during build
    pub network: Option<String>,
    /// Do not use cache when building the image
    pub no_cache: Option<bool>,
    /// Output destination (format: type=local,dest=path)
    pub output: Option<String>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Set type of progress output (auto, plain, tty). Use plain to show container output
    pub progress: Option<String>,
    /// Always attempt to pull a newer version of the image
    pub pull: Option<bool>,
    /// Suppress the build output and print image ID on success
    pub quiet: Option<bool>,
    /// Remove intermediate containers after a successful build
    pub rm: Option<bool>,
    /// Secret file to expose to the build (only if BuildKit enabled): id=mysecret,src=/local/secret
    pub secret: Option<String>,
    /// Security options
    pub security_opt: Option<String>,
    /// Size of /dev/shm
    pub shm_size: Option<String>,
    /// Squash newly built layers into a single new layer
    pub squash: Option<bool>,
    /// SSH agent socket or keys to expose to the build (only if BuildKit enabled) (format: default|<id>[=<socket>|<key>[,<key>]])
    pub ssh: Option<String>,
    /// Stream attaches to server to negotiate build context
    pub stream: Option<bool>,
    /// Name and optionally a tag in the 'name:tag' format
    pub tag: Option<Vec<String>>,
    /// Set the target build stage to build.
    pub target: Option<String>,
    /// Ulimit options
    pub ulimit: Option<String>,
}

/// Wrapper for `docker build`.
///
/// ```text
/// build [OPTIONS] PATH | URL | -
/// Build an image from a Dockerfile
/// ```
pub fn docker_build_cmd(opt: DockerBuildOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["build".to_string()];
    if let Some(values) = opt.add_host {
        for value in values {
            cargs.push("--add-host".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.build_arg {
        for value in values {
            cargs.push("--build-arg".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.cache_from {
        cargs.push(format!("--cache-from={value}"));
    }
    if let Some(value) = opt.cgroup_parent {
        cargs.push(format!("--cgroup-parent={value}"));
    }
    if let Some(value) = opt.compress {
        cargs.push(format!("--compress={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.file {
        cargs.push(format!("--file={value}"));
    }
    if let Some(value) = opt.force_rm {
        cargs.push(format!("--force-rm={value}"));
    }
    if let Some(value) = opt.iidfile {
        cargs.push(format!("--iidfile={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(value) = opt.no_cache {
        cargs.push(format!("--no-cache={value}"));
    }
    if let Some(value) = opt.output {
        cargs.push(format!("--output={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.progress {
        cargs.push(format!("--progress={value}"));
    }
    if let Some(value) = opt.pull {
        cargs.push(format!("--pull={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.rm {
        cargs.push(format!("--rm={value}"));
    }
    if let Some(value) = opt.secret {
        cargs.push(format!("--secret={value}"));
    }
    if let Some(value) = opt.security_opt {
        cargs.push(format!("--security-opt={value}"));
    }
    if let Some(value) = opt.shm_size {
        cargs.push(format!("--shm-size={value}"));
    }
    if let Some(value) = opt.squash {
        cargs.push(format!("--squash={value}"));
    }
    if let Some(value) = opt.ssh {
        cargs.push(format!("--ssh={value}"));
    }
    if let Some(value) = opt.stream {
        cargs.push(format!("--stream={value}"));
    }
    if let Some(values) = opt.tag {
        for value in values {
            cargs.push("--tag".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.target {
        cargs.push(format!("--target={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker builder`.
///
/// ```text
/// builder
/// Manage builds
/// ```
pub fn docker_builder_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["builder".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker builder build`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerBuilderBuildOption {
    /// Add a custom host-to-IP mapping (host:ip)
    pub add_host: Option<Vec<String>>,
    /// Set build-time variables
    pub build_arg: Option<Vec<String>>,
    /// Images to consider as cache sources
    pub cache_from: Option<String>,
    /// Optional parent cgroup for the container
    pub cgroup_parent: Option<String>,
    /// Compress the build context using gzip
    pub compress: Option<bool>,
    /// Limit the CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit the CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Name of the Dockerfile (Default is 'PATH/Dockerfile')
    pub file: Option<String>,
    /// Always remove intermediate containers
    pub force_rm: Option<bool>,
    /// Write the image ID to the file
    pub iidfile: Option<String>,
    /// Container isolation technology
    pub isolation: Option<String>,
    /// Set metadata for an image
    pub label: Option<Vec<String>>,
    /// Memory limit
    pub memory: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Set the networking mode for the RUN instructions during build
    pub network: Option<String>,
    /// Do not use cache when building the image
    pub no_cache: Option<bool>,
    /// Output destination (format: type=local,dest=path)
    pub output: Option<String>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Set type of progress output (auto, plain, tty). Use plain to show container output
    pub progress: Option<String>,
    /// Always attempt to pull a newer version of the image
    pub pull: Option<bool>,
    /// Suppress the build output and print image ID on success
    pub quiet: Option<bool>,
    /// Remove intermediate containers after a successful build
    pub rm: Option<bool>,
    /// Secret file to expose to the build (only if BuildKit enabled): id=mysecret,src=/local/secret
    pub secret: Option<String>,
    /// Security options
    pub security_opt: Option<String>,
    /// Size of /dev/shm
    pub shm_size: Option<String>,
    /// Squash newly built layers into a single new layer
    pub squash: Option<bool>,
    /// SSH agent socket or keys to expose to the build (only if BuildKit enabled) (format: default|<id>[=<socket>|<key>[,<key>]])
    pub ssh: Option<String>,
    /// Stream attaches to server to negotiate build context
    pub stream: Option<bool>,
    /// Name and optionally a tag in the 'name:tag' format
    pub tag: Option<Vec<String>>,
    /// Set the target build stage to build.
    pub target: Option<String>,
    /// Ulimit options
    pub ulimit: Option<String>,
}

/// Wrapper for `docker builder build`.
///
/// ```text
/// build [OPTIONS] PATH | URL | -
/// Build an image from a Dockerfile
/// ```
pub fn docker_builder_build_cmd(opt: DockerBuilderBuildOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["builder".to_string(), "build".to_string()];
    if let Some(values) = opt.add_host {
        for value in values {
            cargs.push("--add-host".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.build_arg {
        for value in values {
            cargs.push("--build-arg".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.cache_from {
        cargs.push(format!("--cache-from={value}"));
    }
    if let Some(value) = opt.cgroup_parent {
        cargs.push(format!("--cgroup-parent={value}"));
    }
    if let Some(value) = opt.compress {
        cargs.push(format!("--compress={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.file {
        cargs.push(format!("--file={value}"));
    }
    if let Some(value) = opt.force_rm {
        cargs.push(format!("--force-rm={value}"));
    }
    if let Some(value) = opt.iidfile {
        cargs.push(format!("--iidfile={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(value) = opt.no_cache {
        cargs.push(format!("--no-cache={value}"));
    }
    if let Some(value) = opt.output {
        cargs.push(format!("--output={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.progress {
        cargs.push(format!("--progress={value}"));
    }
    if let Some(value) = opt.pull {
        cargs.push(format!("--pull={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.rm {
        cargs.push(format!("--rm={value}"));
    }
    if let Some(value) = opt.secret {
        cargs.push(format!("--secret={value}"));
    }
    if let Some(value) = opt.security_opt {
        cargs.push(format!("--security-opt={value}"));
    }
    if let Some(value) = opt.shm_size {
        cargs.push(format!("--shm-size={value}"));
    }
    if let Some(value) = opt.squash {
        cargs.push(format!("--squash={value}"));
    }
    if let Some(value) = opt.ssh {
        cargs.push(format!("--ssh={value}"));
    }
    if let Some(value) = opt.stream {
        cargs.push(format!("--stream={value}"));
    }
    if let Some(values) = opt.tag {
        for value in values {
            cargs.push("--tag".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.target {
        cargs.push(format!("--target={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker builder prune`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerBuilderPruneOption {
    /// Remove all unused build cache, not just dangling ones
    pub all: Option<bool>,
    /// Provide filter values (e.g. 'until=24h')
    pub filter: Option<String>,
    /// Do not prompt for confirmation
    pub force: Option<bool>,
    /// Amount of disk space to keep for cache
    pub keep_storage: Option<String>,
}

/// Wrapper for `docker builder prune`.
///
/// ```text
/// prune
/// Remove build cache
/// ```
pub fn docker_builder_prune_cmd(opt: DockerBuilderPruneOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["builder".to_string(), "prune".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    if let Some(value) = opt.keep_storage {
        cargs.push(format!("--keep-storage={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker checkpoint`.
///
/// ```text
/// checkpoint
/// Manage checkpoints
/// ```
pub fn docker_checkpoint_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["checkpoint".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker checkpoint create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerCheckpointCreateOption {
    /// Use a custom checkpoint storage directory
    pub checkpoint_dir: Option<String>,
    /// Leave the container running after checkpoint
    pub leave_running: Option<bool>,
}

/// Wrapper for `docker checkpoint create`.
///
/// ```text
/// create [OPTIONS] CONTAINER CHECKPOINT
/// Create a checkpoint from a running container
/// ```
pub fn docker_checkpoint_create_cmd(opt: DockerCheckpointCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["checkpoint".to_string(), "create".to_string()];
    if let Some(value) = opt.checkpoint_dir {
        cargs.push(format!("--checkpoint-dir={value}"));
    }
    if let Some(value) = opt.leave_running {
        cargs.push(format!("--leave-running={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker checkpoint ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerCheckpointLsOption {
    /// Use a custom checkpoint storage directory
    pub checkpoint_dir: Option<String>,
}

/// Wrapper for `docker checkpoint ls`.
///
/// ```text
/// ls [OPTIONS] CONTAINER
/// List checkpoints for a container
/// ```
pub fn docker_checkpoint_ls_cmd(opt: DockerCheckpointLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["checkpoint".to_string(), "ls".to_string()];
    if let Some(value) = opt.checkpoint_dir {
        cargs.push(format!("--checkpoint-dir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker checkpoint rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerCheckpointRmOption {
    /// Use a custom checkpoint storage directory
    pub checkpoint_dir: Option<String>,
}

/// Wrapper for `docker checkpoint rm`.
///
/// ```text
/// rm [OPTIONS] CONTAINER CHECKPOINT
/// Remove a checkpoint
/// ```
pub fn docker_checkpoint_rm_cmd(opt: DockerCheckpointRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["checkpoint".to_string(), "rm".to_string()];
    if let Some(value) = opt.checkpoint_dir {
        cargs.push(format!("--checkpoint-dir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker commit`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerCommitOption {
    /// Author (e.g., "John Hannibal Smith <hannibal@a-team.com>")
    pub author: Option<String>,
    /// Apply Dockerfile instruction to the created image
    pub change: Option<Vec<String>>,
    /// Commit message
    pub message: Option<String>,
    /// Pause container during commit
    pub pause: Option<bool>,
}

/// Wrapper for `docker commit`.
///
/// ```text
/// commit [OPTIONS] CONTAINER [REPOSITORY[:TAG]]
/// Create a new image from a container's changes
/// ```
pub fn docker_commit_cmd(opt: DockerCommitOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["commit".to_string()];
    if let Some(value) = opt.author {
        cargs.push(format!("--author={value}"));
    }
    if let Some(values) = opt.change {
        for value in values {
            cargs.push("--change".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.message {
        cargs.push(format!("--message={value}"));
    }
    if let Some(value) = opt.pause {
        cargs.push(format!("--pause={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker config`.
///
/// ```text
/// config
/// Manage Docker configs
/// ```
pub fn docker_config_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["config".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker config create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerConfigCreateOption {
    /// Config labels
    pub label: Option<Vec<String>>,
    /// Template driver
    pub template_driver: Option<String>,
}

/// Wrapper for `docker config create`.
///
/// ```text
/// create [OPTIONS] CONFIG file|-
/// Create a config from a file or STDIN
/// ```
pub fn docker_config_create_cmd(opt: DockerConfigCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["config".to_string(), "create".to_string()];
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.template_driver {
        cargs.push(format!("--template-driver={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker config inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerConfigInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Print the information in a human friendly format
    pub pretty: Option<bool>,
}

/// Wrapper for `docker config inspect`.
///
/// ```text
/// inspect [OPTIONS] CONFIG [CONFIG...]
/// Display detailed information on one or more configs
/// ```
pub fn docker_config_inspect_cmd(opt: DockerConfigInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["config".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.pretty {
        cargs.push(format!("--pretty={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker config ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerConfigLsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print configs using a Go template
    pub format: Option<String>,
    /// Only display IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker config ls`.
///
/// ```text
/// ls [OPTIONS]
/// List configs
/// ```
pub fn docker_config_ls_cmd(opt: DockerConfigLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["config".to_string(), "ls".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker config rm`.
///
/// ```text
/// rm CONFIG [CONFIG...]
/// Remove one or more configs
/// ```
pub fn docker_config_rm_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["config".to_string(), "rm".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container`.
///
/// ```text
/// container
/// Manage containers
/// ```
pub fn docker_container_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container attach`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerAttachOption {
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Do not attach STDIN
    pub no_stdin: Option<bool>,
    /// Proxy all received signals to the process
    pub sig_proxy: Option<bool>,
}

/// Wrapper for `docker container attach`.
///
/// ```text
/// attach [OPTIONS] CONTAINER
/// Attach local standard input, output, and error streams to a running container
/// ```
pub fn docker_container_attach_cmd(opt: DockerContainerAttachOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "attach".to_string()];
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(value) = opt.no_stdin {
        cargs.push(format!("--no-stdin={value}"));
    }
    if let Some(value) = opt.sig_proxy {
        cargs.push(format!("--sig-proxy={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container commit`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerCommitOption {
    /// Author (e.g., "John Hannibal Smith <hannibal@a-team.com>")
    pub author: Option<String>,
    /// Apply Dockerfile instruction to the created image
    pub change: Option<Vec<String>>,
    /// Commit message
    pub message: Option<String>,
    /// Pause container during commit
    pub pause: Option<bool>,
}

/// Wrapper for `docker container commit`.
///
/// ```text
/// commit [OPTIONS] CONTAINER [REPOSITORY[:TAG]]
/// Create a new image from a container's changes
/// ```
pub fn docker_container_commit_cmd(opt: DockerContainerCommitOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "commit".to_string()];
    if let Some(value) = opt.author {
        cargs.push(format!("--author={value}"));
    }
    if let Some(values) = opt.change {
        for value in values {
            cargs.push("--change".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.message {
        cargs.push(format!("--message={value}"));
    }
    if let Some(value) = opt.pause {
        cargs.push(format!("--pause={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container cp`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerCpOption {
    /// Archive mode (copy all uid/gid information)
    pub archive: Option<bool>,
    /// Always follow symbol link in SRC_PATH
    pub follow_link: Option<bool>,
}

/// Wrapper for `docker container cp`.
///
/// ```text
/// cp [OPTIONS] CONTAINER:SRC_PATH DEST_PATH|-
/// 
/// 	docker cp [OPTIONS] SRC_PATH|- CONTAINER:DEST_PATH
/// Copy files/folders between a container and the local filesystem
/// ```
pub fn docker_container_cp_cmd(opt: DockerContainerCpOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "cp".to_string()];
    if let Some(value) = opt.archive {
        cargs.push(format!("--archive={value}"));
    }
    if let Some(value) = opt.follow_link {
        cargs.push(format!("--follow-link={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerCreateOption {
    /// Add a custom host-to-IP mapping (host:ip)
    pub add_host: Option<Vec<String>>,
    /// Attach to STDIN, STDOUT or STDERR
    pub attach: Option<Vec<String>>,
    /// Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)
    pub blkio_weight: Option<u16>,
    /// Block IO weight (relative device weight)
    pub blkio_weight_device: Option<Vec<String>>,
    /// Add Linux capabilities
    pub cap_add: Option<Vec<String>>,
    /// Drop Linux capabilities
    pub cap_drop: Option<Vec<String>>,
    /// Optional parent cgroup for the container
    pub cgroup_parent: Option<String>,
    /// Cgroup namespace to use (host|private)
    /// 'host':    Run the container in the Docker host's cgroup namespace
    /// 'private': Run the container in its own private cgroup namespace
    /// '':        Use the cgroup namespace as configured by the
    ///            default-cgroupns-mode option on the daemon (default)
    pub cgroupns: Option<String>,
    /// Write the container ID to the file
    pub cidfile: Option<String>,
    /// CPU count (Windows only)
    pub cpu_count: Option<i64>,
    /// CPU percent (Windows only)
    pub cpu_percent: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// Limit CPU real-time period in microseconds
    pub cpu_rt_period: Option<i64>,
    /// Limit CPU real-time runtime in microseconds
    pub cpu_rt_runtime: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// Number of CPUs
    pub cpus: Option<String>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Add a host device to the container
    pub device: Option<Vec<String>>,
    /// Add a rule to the cgroup allowed devices list
    pub device_cgroup_rule: Option<Vec<String>>,
    /// Limit read rate (bytes per second) from a device
    pub device_read_bps: Option<Vec<String>>,
    /// Limit read rate (IO per second) from a device
    pub device_read_iops: Option<Vec<String>>,
    /// Limit write rate (bytes per second) to a device
    pub device_write_bps: Option<Vec<String>>,
    /// Limit write rate (IO per second) to a device
    pub device_write_iops: Option<Vec<String>>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Set custom DNS servers
    pub dns: Option<Vec<String>>,
    /// Set DNS options
    pub dns_opt: Option<Vec<String>>,
    /// Set DNS options
    pub dns_option: Option<Vec<String>>,
    /// Set custom DNS search domains
    pub dns_search: Option<Vec<String>>,
    /// Container NIS domain name
    pub domainname: Option<String>,
    /// Overwrite the default ENTRYPOINT of the image
    pub entrypoint: Option<String>,
    /// Set environment variables
    pub env: Option<Vec<String>>,
    /// Read in a file of environment variables
    pub env_file: Option<Vec<String>>,
    /// Expose a port or a range of ports
    pub expose: Option<Vec<String>>,
    /// GPU devices to add to the container ('all' to pass all GPUs)
    pub gpus: Option<String>,
    /// Add additional groups to join
    pub group_add: Option<Vec<String>>,
    /// Command to run to check health
    pub health_cmd: Option<String>,
    /// Time between running the check (ms|s|m|h) (default 0s)
    pub health_interval: Option<String>,
    /// Consecutive failures needed to report unhealthy
    pub health_retries: Option<i64>,
    /// Start period for the container to initialize before starting health-retries countdown (ms|s|m|h) (default 0s)
    pub health_start_period: Option<String>,
    /// Maximum time to allow one check to run (ms|s|m|h) (default 0s)
    pub health_timeout: Option<String>,
    /// Print usage
    pub help: Option<bool>,
    /// Container host name
    pub hostname: Option<String>,
    /// Run an init inside the container that forwards signals and reaps processes
    pub init: Option<bool>,
    /// Keep STDIN open even if not attached
    pub interactive: Option<bool>,
    /// Maximum IO bandwidth limit for the system drive (Windows only)
    pub io_maxbandwidth: Option<String>,
    /// Maximum IOps limit for the system drive (Windows only)
    pub io_maxiops: Option<u64>,
    /// IPv4 address (e.g., 172.30.100.104)
    pub ip: Option<String>,
    /// IPv6 address (e.g., 2001:db8::33)
    pub ip6: Option<String>,
    /// IPC mode to use
    pub ipc: Option<String>,
    /// Container isolation technology
    pub isolation: Option<String>,
    /// Kernel memory limit
    pub kernel_memory: Option<String>,
    /// Set meta data on a container
    pub label: Option<Vec<String>>,
    /// Read in a line delimited file of labels
    pub label_file: Option<Vec<String>>,
    /// Add link to another container
    pub link: Option<Vec<String>>,
    /// Container IPv4/IPv6 link-local addresses
    pub link_local_ip: Option<Vec<String>>,
    /// Logging driver for the container
    pub log_driver: Option<String>,
    /// Log driver options
    pub log_opt: Option<Vec<String>>,
    /// Container MAC address (e.g., 92:d0:c6:0a:29:33)
    pub mac_address: Option<String>,
    /// Memory limit
    pub memory: Option<String>,
    /// Memory soft limit
    pub memory_reservation: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Tune container memory swappiness (0 to 100)
    pub memory_swappiness: Option<i64>,
    /// Attach a filesystem mount to the container
    pub mount: Option<String>,
    /// Assign a name to the container
    pub name: Option<String>,
    /// Connect a container to a network
    pub net: Option<String>,
    /// Add network-scoped alias for the container
    pub net_alias: Option<Vec<String>>,
    /// Connect a container to a network
    pub network: Option<String>,
    /// Add network-scoped alias for the container
    pub network_alias: Option<Vec<String>>,
    /// Disable any container-specified HEALTHCHECK
    pub no_healthcheck: Option<bool>,
    /// Disable OOM Killer
    pub oom_kill_disable: Option<bool>,
    /// Tune host's OOM preferences (-1000 to 1000)
    pub oom_score_adj: Option<i64>,
    /// PID namespace to use
    pub pid: Option<String>,
    /// Tune container pids limit (set -1 for unlimited)
    pub pids_limit: Option<i64>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Give extended privileges to this container
    pub privileged: Option<bool>,
    /// Publish a container's port(s) to the host
    pub publish: Option<Vec<String>>,
    /// Publish all exposed ports to random ports
    pub publish_all: Option<bool>,
    /// Pull image before creating ("always"|"missing"|"never")
    pub pull: Option<String>,
    /// Mount the container's root filesystem as read only
    pub read_only: Option<bool>,
    /// Restart policy to apply when a container exits
    pub restart: Option<String>,
    /// Automatically remove the container when it exits
    pub rm: Option<bool>,
    /// Runtime to use for this container
    pub runtime: Option<String>,
    /// Security Options
    pub security_opt: Option<Vec<String>>,
    /// Size of /dev/shm
    pub shm_size: Option<String>,
    /// Signal to stop a container
    pub stop_signal: Option<String>,
    /// Timeout (in seconds) to stop a container
    pub stop_timeout: Option<i64>,
    /// Storage driver options for the container
    pub storage_opt: Option<Vec<String>>,
    /// Sysctl options
    pub sysctl: Option<HashMap<String, String>>,
    /// Mount a tmpfs directory
    pub tmpfs: Option<Vec<String>>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Ulimit options
    pub ulimit: Option<String>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// User namespace to use
    pub userns: Option<String>,
    /// UTS namespace to use
    pub uts: Option<String>,
    /// Bind mount a volume
    pub volume: Option<Vec<String>>,
    /// Optional volume driver for the container
    pub volume_driver: Option<String>,
    /// Mount volumes from the specified container(s)
    pub volumes_from: Option<Vec<String>>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker container create`.
///
/// ```text
/// create [OPTIONS] IMAGE [COMMAND] [ARG...]
/// Create a new container
/// ```
pub fn docker_container_create_cmd(opt: DockerContainerCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "create".to_string()];
    if let Some(values) = opt.add_host {
        for value in values {
            cargs.push("--add-host".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.attach {
        for value in values {
            cargs.push("--attach".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.blkio_weight {
        cargs.push(format!("--blkio-weight={value}"));
    }
    if let Some(values) = opt.blkio_weight_device {
        for value in values {
            cargs.push("--blkio-weight-device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_add {
        for value in values {
            cargs.push("--cap-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_drop {
        for value in values {
            cargs.push("--cap-drop".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.cgroup_parent {
        cargs.push(format!("--cgroup-parent={value}"));
    }
    if let Some(value) = opt.cgroupns {
        cargs.push(format!("--cgroupns={value}"));
    }
    if let Some(value) = opt.cidfile {
        cargs.push(format!("--cidfile={value}"));
    }
    if let Some(value) = opt.cpu_count {
        cargs.push(format!("--cpu-count={value}"));
    }
    if let Some(value) = opt.cpu_percent {
        cargs.push(format!("--cpu-percent={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_rt_period {
        cargs.push(format!("--cpu-rt-period={value}"));
    }
    if let Some(value) = opt.cpu_rt_runtime {
        cargs.push(format!("--cpu-rt-runtime={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpus {
        cargs.push(format!("--cpus={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(values) = opt.device {
        for value in values {
            cargs.push("--device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_cgroup_rule {
        for value in values {
            cargs.push("--device-cgroup-rule".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_bps {
        for value in values {
            cargs.push("--device-read-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_iops {
        for value in values {
            cargs.push("--device-read-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_bps {
        for value in values {
            cargs.push("--device-write-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_iops {
        for value in values {
            cargs.push("--device-write-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(values) = opt.dns {
        for value in values {
            cargs.push("--dns".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_opt {
        for value in values {
            cargs.push("--dns-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_option {
        for value in values {
            cargs.push("--dns-option".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_search {
        for value in values {
            cargs.push("--dns-search".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.domainname {
        cargs.push(format!("--domainname={value}"));
    }
    if let Some(value) = opt.entrypoint {
        cargs.push(format!("--entrypoint={value}"));
    }
    if let Some(values) = opt.env {
        for value in values {
            cargs.push("--env".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_file {
        for value in values {
            cargs.push("--env-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.expose {
        for value in values {
            cargs.push("--expose".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.gpus {
        cargs.push(format!("--gpus={value}"));
    }
    if let Some(values) = opt.group_add {
        for value in values {
            cargs.push("--group-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.health_cmd {
        cargs.push(format!("--health-cmd={value}"));
    }
    if let Some(value) = opt.health_interval {
        cargs.push(format!("--health-interval={value}"));
    }
    if let Some(value) = opt.health_retries {
        cargs.push(format!("--health-retries={value}"));
    }
    if let Some(value) = opt.health_start_period {
        cargs.push(format!("--health-start-period={value}"));
    }
    if let Some(value) = opt.health_timeout {
        cargs.push(format!("--health-timeout={value}"));
    }
    if let Some(value) = opt.help {
        cargs.push(format!("--help={value}"));
    }
    if let Some(value) = opt.hostname {
        cargs.push(format!("--hostname={value}"));
    }
    if let Some(value) = opt.init {
        cargs.push(format!("--init={value}"));
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    if let Some(value) = opt.io_maxbandwidth {
        cargs.push(format!("--io-maxbandwidth={value}"));
    }
    if let Some(value) = opt.io_maxiops {
        cargs.push(format!("--io-maxiops={value}"));
    }
    if let Some(value) = opt.ip {
        cargs.push(format!("--ip={value}"));
    }
    if let Some(value) = opt.ip6 {
        cargs.push(format!("--ip6={value}"));
    }
    if let Some(value) = opt.ipc {
        cargs.push(format!("--ipc={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(value) = opt.kernel_memory {
        cargs.push(format!("--kernel-memory={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.label_file {
        for value in values {
            cargs.push("--label-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link {
        for value in values {
            cargs.push("--link".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link_local_ip {
        for value in values {
            cargs.push("--link-local-ip".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.log_driver {
        cargs.push(format!("--log-driver={value}"));
    }
    if let Some(values) = opt.log_opt {
        for value in values {
            cargs.push("--log-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.mac_address {
        cargs.push(format!("--mac-address={value}"));
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_reservation {
        cargs.push(format!("--memory-reservation={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.memory_swappiness {
        cargs.push(format!("--memory-swappiness={value}"));
    }
    if let Some(value) = opt.mount {
        cargs.push(format!("--mount={value}"));
    }
    if let Some(value) = opt.name {
        cargs.push(format!("--name={value}"));
    }
    if let Some(value) = opt.net {
        cargs.push(format!("--net={value}"));
    }
    if let Some(values) = opt.net_alias {
        for value in values {
            cargs.push("--net-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(values) = opt.network_alias {
        for value in values {
            cargs.push("--network-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.no_healthcheck {
        cargs.push(format!("--no-healthcheck={value}"));
    }
    if let Some(value) = opt.oom_kill_disable {
        cargs.push(format!("--oom-kill-disable={value}"));
    }
    if let Some(value) = opt.oom_score_adj {
        cargs.push(format!("--oom-score-adj={value}"));
    }
    if let Some(value) = opt.pid {
        cargs.push(format!("--pid={value}"));
    }
    if let Some(value) = opt.pids_limit {
        cargs.push(format!("--pids-limit={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.privileged {
        cargs.push(format!("--privileged={value}"));
    }
    if let Some(values) = opt.publish {
        for value in values {
            cargs.push("--publish".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.publish_all {
        cargs.push(format!("--publish-all={value}"));
    }
    if let Some(value) = opt.pull {
        cargs.push(format!("--pull={value}"));
    }
    if let Some(value) = opt.read_only {
        cargs.push(format!("--read-only={value}"));
    }
    if let Some(value) = opt.restart {
        cargs.push(format!("--restart={value}"));
    }
    if let Some(value) = opt.rm {
        cargs.push(format!("--rm={value}"));
    }
    if let Some(value) = opt.runtime {
        cargs.push(format!("--runtime={value}"));
    }
    if let Some(values) = opt.security_opt {
        for value in values {
            cargs.push("--security-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.shm_size {
        cargs.push(format!("--shm-size={value}"));
    }
    if let Some(value) = opt.stop_signal {
        cargs.push(format!("--stop-signal={value}"));
    }
    if let Some(value) = opt.stop_timeout {
        cargs.push(format!("--stop-timeout={value}"));
    }
    if let Some(values) = opt.storage_opt {
        for value in values {
            cargs.push("--storage-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(entries) = opt.sysctl {
        for (key, value) in entries {
            cargs.push("--sysctl".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    if let Some(values) = opt.tmpfs {
        for value in values {
            cargs.push("--tmpfs".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.userns {
        cargs.push(format!("--userns={value}"));
    }
    if let Some(value) = opt.uts {
        cargs.push(format!("--uts={value}"));
    }
    if let Some(values) = opt.volume {
        for value in values {
            cargs.push("--volume".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.volume_driver {
        cargs.push(format!("--volume-driver={value}"));
    }
    if let Some(values) = opt.volumes_from {
        for value in values {
            cargs.push("--volumes-from".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container diff`.
///
/// ```text
/// diff CONTAINER
/// Inspect changes to files or directories on a container's filesystem
/// ```
pub fn docker_container_diff_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "diff".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container exec`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerExecOption {
    /// Detached mode: run command in the background
    pub detach: Option<bool>,
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Set environment variables
    pub env: Option<Vec<String>>,
    /// Read in a file of environment variables
    pub env_file: Option<Vec<String>>,
    /// Keep STDIN open even if not attached
    pub interactive: Option<bool>,
    /// Give extended privileges to the command
    pub privileged: Option<bool>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker container exec`.
///
/// ```text
/// exec [OPTIONS] CONTAINER COMMAND [ARG...]
/// Run a command in a running container
/// ```
pub fn docker_container_exec_cmd(opt: DockerContainerExecOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "exec".to_string()];
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(values) = opt.env {
        for value in values {
            cargs.push("--env".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_file {
        for value in values {
            cargs.push("--env-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    if let Some(value) = opt.privileged {
        cargs.push(format!("--privileged={value}"));
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container export`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerExportOption {
    /// Write to a file, instead of STDOUT
    pub output: Option<String>,
}

/// Wrapper for `docker container export`.
///
/// ```text
/// export [OPTIONS] CONTAINER
/// Export a container's filesystem as a tar archive
/// ```
pub fn docker_container_export_cmd(opt: DockerContainerExportOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "export".to_string()];
    if let Some(value) = opt.output {
        cargs.push(format!("--output={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Display total file sizes
    pub size: Option<bool>,
}

/// Wrapper for `docker container inspect`.
///
/// ```text
/// inspect [OPTIONS] CONTAINER [CONTAINER...]
/// Display detailed information on one or more containers
/// ```
pub fn docker_container_inspect_cmd(opt: DockerContainerInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.size {
        cargs.push(format!("--size={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container kill`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerKillOption {
    /// Signal to send to the container
    pub signal: Option<String>,
}

/// Wrapper for `docker container kill`.
///
/// ```text
/// kill [OPTIONS] CONTAINER [CONTAINER...]
/// Kill one or more running containers
/// ```
pub fn docker_container_kill_cmd(opt: DockerContainerKillOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "kill".to_string()];
    if let Some(value) = opt.signal {
        cargs.push(format!("--signal={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container logs`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerLogsOption {
    /// Show extra details provided to logs
    pub details: Option<bool>,
    /// Follow log output
    pub follow: Option<bool>,
    /// Show logs since timestamp (e.g. 2013-01-02T13:23:37Z) or relative (e.g. 42m for 42 minutes)
    pub since: Option<String>,
    /// Number of lines to show from the end of the logs
    pub tail: Option<String>,
    /// Show timestamps
    pub timestamps: Option<bool>,
    /// Show logs before a timestamp (e.g. 2013-01-02T13:23:37Z) or relative (e.g. 42m for 42 minutes)
    pub until: Option<String>,
}

/// Wrapper for `docker container logs`.
///
/// ```text
/// logs [OPTIONS] CONTAINER
/// Fetch the logs of a container
/// ```
pub fn docker_container_logs_cmd(opt: DockerContainerLogsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "logs".to_string()];
    if let Some(value) = opt.details {
        cargs.push(format!("--details={value}"));
    }
    if let Some(value) = opt.follow {
        cargs.push(format!("--follow={value}"));
    }
    if let Some(value) = opt.since {
        cargs.push(format!("--since={value}"));
    }
    if let Some(value) = opt.tail {
        cargs.push(format!("--tail={value}"));
    }
    if let Some(value) = opt.timestamps {
        cargs.push(format!("--timestamps={value}"));
    }
    if let Some(value) = opt.until {
        cargs.push(format!("--until={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerLsOption {
    /// Show all containers (default shows just running)
    pub all: Option<bool>,
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print containers using a Go template
    pub format: Option<String>,
    /// Show n last created containers (includes all states)
    pub last: Option<i64>,
    /// Show the latest created container (includes all states)
    pub latest: Option<bool>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
    /// Only display container IDs
    pub quiet: Option<bool>,
    /// Display total file sizes
    pub size: Option<bool>,
}

/// Wrapper for `docker container ls`.
///
/// ```text
/// ls [OPTIONS]
/// List containers
/// ```
pub fn docker_container_ls_cmd(opt: DockerContainerLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "ls".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.last {
        cargs.push(format!("--last={value}"));
    }
    if let Some(value) = opt.latest {
        cargs.push(format!("--latest={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.size {
        cargs.push(format!("--size={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container pause`.
///
/// ```text
/// pause CONTAINER [CONTAINER...]
/// Pause all processes within one or more containers
/// ```
pub fn docker_container_pause_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "pause".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container port`.
///
/// ```text
/// port CONTAINER [PRIVATE_PORT[/PROTO]]
/// List port mappings or a specific mapping for the container
/// ```
pub fn docker_container_port_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "port".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container prune`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerPruneOption {
    /// Provide filter values (e.g. 'until=<timestamp>')
    pub filter: Option<String>,
    /// Do not prompt for confirmation
    pub force: Option<bool>,
}

/// Wrapper for `docker container prune`.
///
/// ```text
/// prune [OPTIONS]
/// Remove all stopped containers
/// ```
pub fn docker_container_prune_cmd(opt: DockerContainerPruneOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "prune".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container rename`.
///
/// ```text
/// rename CONTAINER NEW_NAME
/// Rename a container
/// ```
pub fn docker_container_rename_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "rename".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container restart`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerRestartOption {
    /// Seconds to wait for stop before killing the container
    pub time: Option<i64>,
}

/// Wrapper for `docker container restart`.
///
/// ```text
/// restart [OPTIONS] CONTAINER [CONTAINER...]
/// Restart one or more containers
/// ```
pub fn docker_container_restart_cmd(opt: DockerContainerRestartOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "restart".to_string()];
    if let Some(value) = opt.time {
        cargs.push(format!("--time={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerRmOption {
    /// Force the removal of a running container (uses SIGKILL)
    pub force: Option<bool>,
    /// Remove the specified link
    pub link: Option<bool>,
    /// Remove anonymous volumes associated with the container
    pub volumes: Option<bool>,
}

/// Wrapper for `docker container rm`.
///
/// ```text
/// rm [OPTIONS] CONTAINER [CONTAINER...]
/// Remove one or more containers
/// ```
pub fn docker_container_rm_cmd(opt: DockerContainerRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "rm".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    if let Some(value) = opt.link {
        cargs.push(format!("--link={value}"));
    }
    if let Some(value) = opt.volumes {
        cargs.push(format!("--volumes={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container run`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerRunOption {
    /// Add a custom host-to-IP mapping (host:ip)
    pub add_host: Option<Vec<String>>,
    /// Attach to STDIN, STDOUT or STDERR
    pub attach: Option<Vec<String>>,
    /// Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)
    pub blkio_weight: Option<u16>,
    /// Block IO weight (relative device weight)
    pub blkio_weight_device: Option<Vec<String>>,
    /// Add Linux capabilities
    pub cap_add: Option<Vec<String>>,
    /// Drop Linux capabilities
    pub cap_drop: Option<Vec<String>>,
    /// Optional parent cgroup for the container
    pub cgroup_parent: Option<String>,
    /// Cgroup namespace to use (host|private)
    /// 'host':    Run the container in the Docker host's cgroup namespace
    /// 'private': Run the container in its own private cgroup namespace
    /// '':        Use the cgroup namespace as configured by the
    ///            default-cgroupns-mode option on the daemon (default)
    pub cgroupns: Option<String>,
    /// Write the container ID to the file
    pub cidfile: Option<String>,
    /// CPU count (Windows only)
    pub cpu_count: Option<i64>,
    /// CPU percent (Windows only)
    pub cpu_percent: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// Limit CPU real-time period in microseconds
    pub cpu_rt_period: Option<i64>,
    /// Limit CPU real-time runtime in microseconds
    pub cpu_rt_runtime: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// Number of CPUs
    pub cpus: Option<String>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Run container in background and print container ID
    pub detach: Option<bool>,
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Add a host device to the container
    pub device: Option<Vec<String>>,
    /// Add a rule to the cgroup allowed devices list
    pub device_cgroup_rule: Option<Vec<String>>,
    /// Limit read rate (bytes per second) from a device
    pub device_read_bps: Option<Vec<String>>,
    /// Limit read rate (IO per second) from a device
    pub device_read_iops: Option<Vec<String>>,
    /// Limit write rate (bytes per second) to a device
    pub device_write_bps: Option<Vec<String>>,
    /// Limit write rate (IO per second) to a device
    pub device_write_iops: Option<Vec<String>>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Set custom DNS servers
    pub dns: Option<Vec<String>>,
    /// Set DNS options
    pub dns_opt: Option<Vec<String>>,
    /// Set DNS options
    pub dns_option: Option<Vec<String>>,
    /// Set custom DNS search domains
    pub dns_search: Option<Vec<String>>,
    /// Container NIS domain name
    pub domainname: Option<String>,
    /// Overwrite the default ENTRYPOINT of the image
    pub entrypoint: Option<String>,
    /// Set environment variables
    pub env: Option<Vec<String>>,
    /// Read in a file of environment variables
    pub env_file: Option<Vec<String>>,
    /// Expose a port or a range of ports
    pub expose: Option<Vec<String>>,
    /// GPU devices to add to the container ('all' to pass all GPUs)
    pub gpus: Option<String>,
    /// Add additional groups to join
    pub group_add: Option<Vec<String>>,
    /// Command to run to check health
    pub health_cmd: Option<String>,
    /// Time between running the check (ms|s|m|h) (default 0s)
    pub health_interval: Option<String>,
    /// Consecutive failures needed to report unhealthy
    pub health_retries: Option<i64>,
    /// Start period for the container to initialize before starting health-retries countdown (ms|s|m|h) (default 0s)
    pub health_start_period: Option<String>,
    /// Maximum time to allow one check to run (ms|s|m|h) (default 0s)
    pub health_timeout: Option<String>,
    /// Print usage
    pub help: Option<bool>,
    /// Container host name
    pub hostname: Option<String>,
    /// Run an init inside the container that forwards signals and reaps processes
    pub init: Option<bool>,
    /// Keep STDIN open even if not attached
    pub interactive: Option<bool>,
    /// Maximum IO bandwidth limit for the system drive (Windows only)
    pub io_maxbandwidth: Option<String>,
    /// Maximum IOps limit for the system drive (Windows only)
    pub io_maxiops: Option<u64>,
    /// IPv4 address (e.g., 172.30.100.104)
    pub ip: Option<String>,
    /// IPv6 address (e.g., 2001:db8::33)
    pub ip6: Option<String>,
    /// IPC mode to use
    pub ipc: Option<String>,
    /// Container isolation technology
    pub isolation: Option<String>,
    /// Kernel memory limit
    pub kernel_memory: Option<String>,
    /// Set meta data on a container
    pub label: Option<Vec<String>>,
    /// Read in a line delimited file of labels
    pub label_file: Option<Vec<String>>,
    /// Add link to another container
    pub link: Option<Vec<String>>,
    /// Container IPv4/IPv6 link-local addresses
    pub link_local_ip: Option<Vec<String>>,
    /// Logging driver for the container
    pub log_driver: Option<String>,
    /// Log driver options
    pub log_opt: Option<Vec<String>>,
    /// Container MAC address (e.g., 92:d0:c6:0a:29:33)
    pub mac_address: Option<String>,
    /// Memory limit
    pub memory: Option<String>,
    /// Memory soft limit
    pub memory_reservation: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Tune container memory swappiness (0 to 100)
    pub memory_swappiness: Option<i64>,
    /// Attach a filesystem mount to the container
    pub mount: Option<String>,
    /// Assign a name to the container
    pub name: Option<String>,
    /// Connect a container to a network
    pub net: Option<String>,
    /// Add network-scoped alias for the container
    pub net_alias: Option<Vec<String>>,
    /// Connect a container to a network
    pub network: Option<String>,
    /// Add network-scoped alias for the container
    pub network_alias: Option<Vec<String>>,
    /// Disable any container-specified HEALTHCHECK
    pub no_healthcheck: Option<bool>,
    /// Disable OOM Killer
    pub oom_kill_disable: Option<bool>,
    /// Tune host's OOM preferences (-1000 to 1000)
    pub oom_score_adj: Option<i64>,
    /// PID namespace to use
    pub pid: Option<String>,
    /// Tune container pids limit (set -1 for unlimited)
    pub pids_limit: Option<i64>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Give extended privileges to this container
    pub privileged: Option<bool>,
    /// Publish a container's port(s) to the host
    pub publish: Option<Vec<String>>,
    /// Publish all exposed ports to random ports
    pub publish_all: Option<bool>,
    /// Pull image before running ("always"|"missing"|"never")
    pub pull: Option<String>,
    /// Mount the container's root filesystem as read only
    pub read_only: Option<bool>,
    /// Restart policy to apply when a container exits
    pub restart: Option<String>,
    /// Automatically remove the container when it exits
    pub rm: Option<bool>,
    /// Runtime to use for this container
    pub runtime: Option<String>,
    /// Security Options
    pub security_opt: Option<Vec<String>>,
    /// Size of /dev/shm
    pub shm_size: Option<String>,
    /// Proxy received signals to the process
    pub sig_proxy: Option<bool>,
    /// Signal to stop a container
    pub stop_signal: Option<String>,
    /// Timeout (in seconds) to stop a container
    pub stop_timeout: Option<i64>,
    /// Storage driver options for the container
    pub storage_opt: Option<Vec<String>>,
    /// Sysctl options
    pub sysctl: Option<HashMap<String, String>>,
    /// Mount a tmpfs directory
    pub tmpfs: Option<Vec<String>>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Ulimit options
    pub ulimit: Option<String>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// User namespace to use
    pub userns: Option<String>,
    /// UTS namespace to use
    pub uts: Option<String>,
    /// Bind mount a volume
    pub volume: Option<Vec<String>>,
    /// Optional volume driver for the container
    pub volume_driver: Option<String>,
    /// Mount volumes from the specified container(s)
    pub volumes_from: Option<Vec<String>>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker container run`.
///
/// ```text
/// run [OPTIONS] IMAGE [COMMAND] [ARG...]
/// Run a command in a new container
/// ```
pub fn docker_container_run_cmd(opt: DockerContainerRunOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "run".to_string()];
    if let Some(values) = opt.add_host {
        for value in values {
            cargs.push("--add-host".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.attach {
        for value in values {
            cargs.push("--attach".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.blkio_weight {
        cargs.push(format!("--blkio-weight={value}"));
    }
    if let Some(values) = opt.blkio_weight_device {
        for value in values {
            cargs.push("--blkio-weight-device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_add {
        for value in values {
            cargs.push("--cap-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_drop {
        for value in values {
            cargs.push("--cap-drop".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.cgroup_parent {
        cargs.push(format!("--cgroup-parent={value}"));
    }
    if let Some(value) = opt.cgroupns {
        cargs.push(format!("--cgroupns={value}"));
    }
    if let Some(value) = opt.cidfile {
        cargs.push(format!("--cidfile={value}"));
    }
    if let Some(value) = opt.cpu_count {
        cargs.push(format!("--cpu-count={value}"));
    }
    if let Some(value) = opt.cpu_percent {
        cargs.push(format!("--cpu-percent={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_rt_period {
        cargs.push(format!("--cpu-rt-period={value}"));
    }
    if let Some(value) = opt.cpu_rt_runtime {
        cargs.push(format!("--cpu-rt-runtime={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpus {
        cargs.push(format!("--cpus={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(values) = opt.device {
        for value in values {
            cargs.push("--device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_cgroup_rule {
        for value in values {
            cargs.push("--device-cgroup-rule".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_bps {
        for value in values {
            cargs.push("--device-read-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_iops {
        for value in values {
            cargs.push("--device-read-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_bps {
        for value in values {
            cargs.push("--device-write-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_iops {
        for value in values {
            cargs.push("--device-write-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(values) = opt.dns {
        for value in values {
            cargs.push("--dns".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_opt {
        for value in values {
            cargs.push("--dns-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_option {
        for value in values {
            cargs.push("--dns-option".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_search {
        for value in values {
            cargs.push("--dns-search".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.domainname {
        cargs.push(format!("--domainname={value}"));
    }
    if let Some(value) = opt.entrypoint {
        cargs.push(format!("--entrypoint={value}"));
    }
    if let Some(values) = opt.env {
        for value in values {
            cargs.push("--env".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_file {
        for value in values {
            cargs.push("--env-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.expose {
        for value in values {
            cargs.push("--expose".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.gpus {
        cargs.push(format!("--gpus={value}"));
    }
    if let Some(values) = opt.group_add {
        for value in values {
            cargs.push("--group-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.health_cmd {
        cargs.push(format!("--health-cmd={value}"));
    }
    if let Some(value) = opt.health_interval {
        cargs.push(format!("--health-interval={value}"));
    }
    if let Some(value) = opt.health_retries {
        cargs.push(format!("--health-retries={value}"));
    }
    if let Some(value) = opt.health_start_period {
        cargs.push(format!("--health-start-period={value}"));
    }
    if let Some(value) = opt.health_timeout {
        cargs.push(format!("--health-timeout={value}"));
    }
    if let Some(value) = opt.help {
        cargs.push(format!("--help={value}"));
    }
    if let Some(value) = opt.hostname {
        cargs.push(format!("--hostname={value}"));
    }
    if let Some(value) = opt.init {
        cargs.push(format!("--init={value}"));
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    if let Some(value) = opt.io_maxbandwidth {
        cargs.push(format!("--io-maxbandwidth={value}"));
    }
    if let Some(value) = opt.io_maxiops {
        cargs.push(format!("--io-maxiops={value}"));
    }
    if let Some(value) = opt.ip {
        cargs.push(format!("--ip={value}"));
    }
    if let Some(value) = opt.ip6 {
        cargs.push(format!("--ip6={value}"));
    }
    if let Some(value) = opt.ipc {
        cargs.push(format!("--ipc={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(value) = opt.kernel_memory {
        cargs.push(format!("--kernel-memory={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.label_file {
        for value in values {
            cargs.push("--label-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link {
        for value in values {
            cargs.push("--link".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link_local_ip {
        for value in values {
            cargs.push("--link-local-ip".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.log_driver {
        cargs.push(format!("--log-driver={value}"));
    }
    if let Some(values) = opt.log_opt {
        for value in values {
            cargs.push("--log-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.mac_address {
        cargs.push(format!("--mac-address={value}"));
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_reservation {
        cargs.push(format!("--memory-reservation={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.memory_swappiness {
        cargs.push(format!("--memory-swappiness={value}"));
    }
    if let Some(value) = opt.mount {
        cargs.push(format!("--mount={value}"));
    }
    if let Some(value) = opt.name {
        cargs.push(format!("--name={value}"));
    }
    if let Some(value) = opt.net {
        cargs.push(format!("--net={value}"));
    }
    if let Some(values) = opt.net_alias {
        for value in values {
            cargs.push("--net-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(values) = opt.network_alias {
        for value in values {
            cargs.push("--network-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.no_healthcheck {
        cargs.push(format!("--no-healthcheck={value}"));
    }
    if let Some(value) = opt.oom_kill_disable {
        cargs.push(format!("--oom-kill-disable={value}"));
    }
    if let Some(value) = opt.oom_score_adj {
        cargs.push(format!("--oom-score-adj={value}"));
    }
    if let Some(value) = opt.pid {
        cargs.push(format!("--pid={value}"));
    }
    if let Some(value) = opt.pids_limit {
        cargs.push(format!("--pids-limit={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.privileged {
        cargs.push(format!("--privileged={value}"));
    }
    if let Some(values) = opt.publish {
        for value in values {
            cargs.push("--publish".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.publish_all {
        cargs.push(format!("--publish-all={value}"));
    }
    if let Some(value) = opt.pull {
        cargs.push(format!("--pull={value}"));
    }
    if let Some(value) = opt.read_only {
        cargs.push(format!("--read-only={value}"));
    }
    if let Some(value) = opt.restart {
        cargs.push(format!("--restart={value}"));
    }
    if let Some(value) = opt.rm {
        cargs.push(format!("--rm={value}"));
    }
    if let Some(value) = opt.runtime {
        cargs.push(format!("--runtime={value}"));
    }
    if let Some(values) = opt.security_opt {
        for value in values {
            cargs.push("--security-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.shm_size {
        cargs.push(format!("--shm-size={value}"));
    }
    if let Some(value) = opt.sig_proxy {
        cargs.push(format!("--sig-proxy={value}"));
    }
    if let Some(value) = opt.stop_signal {
        cargs.push(format!("--stop-signal={value}"));
    }
    if let Some(value) = opt.stop_timeout {
        cargs.push(format!("--stop-timeout={value}"));
    }
    if let Some(values) = opt.storage_opt {
        for value in values {
            cargs.push("--storage-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(entries) = opt.sysctl {
        for (key, value) in entries {
            cargs.push("--sysctl".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    if let Some(values) = opt.tmpfs {
        for value in values {
            cargs.push("--tmpfs".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.userns {
        cargs.push(format!("--userns={value}"));
    }
    if let Some(value) = opt.uts {
        cargs.push(format!("--uts={value}"));
    }
    if let Some(values) = opt.volume {
        for value in values {
            cargs.push("--volume".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.volume_driver {
        cargs.push(format!("--volume-driver={value}"));
    }
    if let Some(values) = opt.volumes_from {
        for value in values {
            cargs.push("--volumes-from".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container start`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerStartOption {
    /// Attach STDOUT/STDERR and forward signals
    pub attach: Option<bool>,
    /// Restore from this checkpoint
    pub checkpoint: Option<String>,
    /// Use a custom checkpoint storage directory
    pub checkpoint_dir: Option<String>,
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Attach container's STDIN
    pub interactive: Option<bool>,
}

/// Wrapper for `docker container start`.
///
/// ```text
/// start [OPTIONS] CONTAINER [CONTAINER...]
/// Start one or more stopped containers
/// ```
pub fn docker_container_start_cmd(opt: DockerContainerStartOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "start".to_string()];
    if let Some(value) = opt.attach {
        cargs.push(format!("--attach={value}"));
    }
    if let Some(value) = opt.checkpoint {
        cargs.push(format!("--checkpoint={value}"));
    }
    if let Some(value) = opt.checkpoint_dir {
        cargs.push(format!("--checkpoint-dir={value}"));
    }
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container stats`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerStatsOption {
    /// Show all containers (default shows just running)
    pub all: Option<bool>,
    /// Pretty-print images using a Go template
    pub format: Option<String>,
    /// Disable streaming stats and only pull the first result
    pub no_stream: Option<bool>,
    /// Do not truncate output
    pub no_trunc: Option<bool>,
}

/// Wrapper for `docker container stats`.
///
/// ```text
/// stats [OPTIONS] [CONTAINER...]
/// Display a live stream of container(s) resource usage statistics
/// ```
pub fn docker_container_stats_cmd(opt: DockerContainerStatsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "stats".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_stream {
        cargs.push(format!("--no-stream={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container stop`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerStopOption {
    /// Seconds to wait for stop before killing it
    pub time: Option<i64>,
}

/// Wrapper for `docker container stop`.
///
/// ```text
/// stop [OPTIONS] CONTAINER [CONTAINER...]
/// Stop one or more running containers
/// ```
pub fn docker_container_stop_cmd(opt: DockerContainerStopOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "stop".to_string()];
    if let Some(value) = opt.time {
        cargs.push(format!("--time={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container top`.
///
/// ```text
/// top CONTAINER [ps OPTIONS]
/// Display the running processes of a container
/// ```
pub fn docker_container_top_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "top".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container unpause`.
///
/// ```text
/// unpause CONTAINER [CONTAINER...]
/// Unpause all processes within one or more containers
/// ```
pub fn docker_container_unpause_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "unpause".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker container update`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContainerUpdateOption {
    /// Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)
    pub blkio_weight: Option<u16>,
    /// Limit CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// Limit the CPU real-time period in microseconds
    pub cpu_rt_period: Option<i64>,
    /// Limit the CPU real-time runtime in microseconds
    pub cpu_rt_runtime: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// Number of CPUs
    pub cpus: Option<String>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Kernel memory limit
    pub kernel_memory: Option<String>,
    /// Memory limit
    pub memory: Option<String>,
    /// Memory soft limit
    pub memory_reservation: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Tune container pids limit (set -1 for unlimited)
    pub pids_limit: Option<i64>,
    /// Restart policy to apply when a container exits
    pub restart: Option<String>,
}

/// Wrapper for `docker container update`.
///
/// ```text
/// update [OPTIONS] CONTAINER [CONTAINER...]
/// Update configuration of one or more containers
/// ```
pub fn docker_container_update_cmd(opt: DockerContainerUpdateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "update".to_string()];
    if let Some(value) = opt.blkio_weight {
        cargs.push(format!("--blkio-weight={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_rt_period {
        cargs.push(format!("--cpu-rt-period={value}"));
    }
    if let Some(value) = opt.cpu_rt_runtime {
        cargs.push(format!("--cpu-rt-runtime={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpus {
        cargs.push(format!("--cpus={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(value) = opt.kernel_memory {
        cargs.push(format!("--kernel-memory={value}"));
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_reservation {
        cargs.push(format!("--memory-reservation={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.pids_limit {
        cargs.push(format!("--pids-limit={value}"));
    }
    if let Some(value) = opt.restart {
        cargs.push(format!("--restart={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker container wait`.
///
/// ```text
/// wait CONTAINER [CONTAINER...]
/// Block until one or more containers stop, then print their exit codes
/// ```
pub fn docker_container_wait_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["container".to_string(), "wait".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker context`.
///
/// ```text
/// context
/// Manage contexts
/// ```
pub fn docker_context_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker context create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContextCreateOption {
    /// Default orchestrator for stack operations to use with this context (swarm|kubernetes|all)
    pub default_stack_orchestrator: Option<String>,
    /// Description of the context
    pub description: Option<String>,
    /// set the docker endpoint
    pub docker: Option<String>,
    /// create context from a named context
    pub from: Option<String>,
    /// set the kubernetes endpoint
    pub kubernetes: Option<String>,
}

/// Wrapper for `docker context create`.
///
/// ```text
/// create [OPTIONS] CONTEXT
/// Create a context
/// ```
pub fn docker_context_create_cmd(opt: DockerContextCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "create".to_string()];
    if let Some(value) = opt.default_stack_orchestrator {
        cargs.push(format!("--default-stack-orchestrator={value}"));
    }
    if let Some(value) = opt.description {
        cargs.push(format!("--description={value}"));
    }
    if let Some(value) = opt.docker {
        cargs.push(format!("--docker={value}"));
    }
    if let Some(value) = opt.from {
        cargs.push(format!("--from={value}"));
    }
    if let Some(value) = opt.kubernetes {
        cargs.push(format!("--kubernetes={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker context export`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContextExportOption {
    /// Export as a kubeconfig file
    pub kubeconfig: Option<bool>,
}

/// Wrapper for `docker context export`.
///
/// ```text
/// export [OPTIONS] CONTEXT [FILE|-]
/// Export a context to a tar or kubeconfig file
/// ```
pub fn docker_context_export_cmd(opt: DockerContextExportOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "export".to_string()];
    if let Some(value) = opt.kubeconfig {
        cargs.push(format!("--kubeconfig={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker context import`.
///
/// ```text
/// import CONTEXT FILE|-
/// Import a context from a tar or zip file
/// ```
pub fn docker_context_import_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "import".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker context inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContextInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
}

/// Wrapper for `docker context inspect`.
///
/// ```text
/// inspect [OPTIONS] [CONTEXT] [CONTEXT...]
/// Display detailed information on one or more contexts
/// ```
pub fn docker_context_inspect_cmd(opt: DockerContextInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker context ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContextLsOption {
    /// Pretty-print contexts using a Go template
    pub format: Option<String>,
    /// Only show context names
    pub quiet: Option<bool>,
}

/// Wrapper for `docker context ls`.
///
/// ```text
/// ls [OPTIONS]
/// List contexts
/// ```
pub fn docker_context_ls_cmd(opt: DockerContextLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "ls".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker context rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContextRmOption {
    /// Force the removal of a context in use
    pub force: Option<bool>,
}

/// Wrapper for `docker context rm`.
///
/// ```text
/// rm CONTEXT [CONTEXT...]
/// Remove one or more contexts
/// ```
pub fn docker_context_rm_cmd(opt: DockerContextRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "rm".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker context update`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerContextUpdateOption {
    /// Default orchestrator for stack operations to use with this context (swarm|kubernetes|all)
    pub default_stack_orchestrator: Option<String>,
    /// Description of the context
    pub description: Option<String>,
    /// set the docker endpoint
    pub docker: Option<String>,
    /// set the kubernetes endpoint
    pub kubernetes: Option<String>,
}

/// Wrapper for `docker context update`.
///
/// ```text
/// update [OPTIONS] CONTEXT
/// Update a context
/// ```
pub fn docker_context_update_cmd(opt: DockerContextUpdateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "update".to_string()];
    if let Some(value) = opt.default_stack_orchestrator {
        cargs.push(format!("--default-stack-orchestrator={value}"));
    }
    if let Some(value) = opt.description {
        cargs.push(format!("--description={value}"));
    }
    if let Some(value) = opt.docker {
        cargs.push(format!("--docker={value}"));
    }
    if let Some(value) = opt.kubernetes {
        cargs.push(format!("--kubernetes={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker context use`.
///
/// ```text
/// use CONTEXT
/// Set the current docker context
/// ```
pub fn docker_context_use_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["context".to_string(), "use".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker cp`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerCpOption {
    /// Archive mode (copy all uid/gid information)
    pub archive: Option<bool>,
    /// Always follow symbol link in SRC_PATH
    pub follow_link: Option<bool>,
}

/// Wrapper for `docker cp`.
///
/// ```text
/// cp [OPTIONS] CONTAINER:SRC_PATH DEST_PATH|-
/// 
/// 	docker cp [OPTIONS] SRC_PATH|- CONTAINER:DEST_PATH
/// Copy files/folders between a container and the local filesystem
/// ```
pub fn docker_cp_cmd(opt: DockerCpOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["cp".to_string()];
    if let Some(value) = opt.archive {
        cargs.push(format!("--archive={value}"));
    }
    if let Some(value) = opt.follow_link {
        cargs.push(format!("--follow-link={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerCreateOption {
    /// Add a custom host-to-IP mapping (host:ip)
    pub add_host: Option<Vec<String>>,
    /// Attach to STDIN, STDOUT or STDERR
    pub attach: Option<Vec<String>>,
    /// Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)
    pub blkio_weight: Option<u16>,
    /// Block IO weight (relative device weight)
    pub blkio_weight_device: Option<Vec<String>>,
    /// Add Linux capabilities
    pub cap_add: Option<Vec<String>>,
    /// Drop Linux capabilities
    pub cap_drop: Option<Vec<String>>,
    /// Optional parent cgroup for the container
    pub cgroup_parent: Option<String>,
    /// Cgroup namespace to use (host|private)
    /// 'host':    Run the container in the Docker host's cgroup namespace
    /// 'private': Run the container in its own private cgroup namespace
    /// '':        Use the cgroup namespace as configured by the
    ///            default-cgroupns-mode option on the daemon (default)
    pub cgroupns: Option<String>,
    /// Write the container ID to the file
    pub cidfile: Option<String>,
    /// CPU count (Windows only)
    pub cpu_count: Option<i64>,
    /// CPU percent (Windows only)
    pub cpu_percent: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// Limit CPU real-time period in microseconds
    pub cpu_rt_period: Option<i64>,
    /// Limit CPU real-time runtime in microseconds
    pub cpu_rt_runtime: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// Number of CPUs
    pub cpus: Option<String>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Add a host device to the container
    pub device: Option<Vec<String>>,
    /// Add a rule to the cgroup allowed devices list
    pub device_cgroup_rule: Option<Vec<String>>,
    /// Limit read rate (bytes per second) from a device
    pub device_read_bps: Option<Vec<String>>,
    /// Limit read rate (IO per second) from a device
    pub device_read_iops: Option<Vec<String>>,
    /// Limit write rate (bytes per second) to a device
    pub device_write_bps: Option<Vec<String>>,
    /// Limit write rate (IO per second) to a device
    pub device_write_iops: Option<Vec<String>>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Set custom DNS servers
    pub dns: Option<Vec<String>>,
    /// Set DNS options
    pub dns_opt: Option<Vec<String>>,
    /// Set DNS options
    pub dns_option: Option<Vec<String>>,
    /// Set custom DNS search domains
    pub dns_search: Option<Vec<String>>,
    /// Container NIS domain name
    pub domainname: Option<String>,
    /// Overwrite the default ENTRYPOINT of the image
    pub entrypoint: Option<String>,
    /// Set environment variables
    pub env: Option<Vec<String>>,
    /// Read in a file of environment variables
    pub env_file: Option<Vec<String>>,
    /// Expose a port or a range of ports
    pub expose: Option<Vec<String>>,
    /// GPU devices to add to the container ('all' to pass all GPUs)
    pub gpus: Option<String>,
    /// Add additional groups to join
    pub group_add: Option<Vec<String>>,
    /// Command to run to check health
    pub health_cmd: Option<String>,
    /// Time between running the check (ms|s|m|h) (default 0s)
    pub health_interval: Option<String>,
    /// Consecutive failures needed to report unhealthy
    pub health_retries: Option<i64>,
    /// Start period for the container to initialize before starting health-retries countdown (ms|s|m|h) (default 0s)
    pub health_start_period: Option<String>,
    /// Maximum time to allow one check to run (ms|s|m|h) (default 0s)
    pub health_timeout: Option<String>,
    /// Print usage
    pub help: Option<bool>,
    /// Container host name
    pub hostname: Option<String>,
    /// Run an init inside the container that forwards signals and reaps processes
    pub init: Option<bool>,
    /// Keep STDIN open even if not attached
    pub interactive: Option<bool>,
    /// Maximum IO bandwidth limit for the system drive (Windows only)
    pub io_maxbandwidth: Option<String>,
    /// Maximum IOps limit for the system drive (Windows only)
    pub io_maxiops: Option<u64>,
    /// IPv4 address (e.g., 172.30.100.104)
    pub ip: Option<String>,
    /// IPv6 address (e.g., 2001:db8::33)
    pub ip6: Option<String>,
    /// IPC mode to use
    pub ipc: Option<String>,
    /// Container isolation technology
    pub isolation: Option<String>,
    /// Kernel memory limit
    pub kernel_memory: Option<String>,
    /// Set meta data on a container
    pub label: Option<Vec<String>>,
    /// Read in a line delimited file of labels
    pub label_file: Option<Vec<String>>,
    /// Add link to another container
    pub link: Option<Vec<String>>,
    /// Container IPv4/IPv6 link-local addresses
    pub link_local_ip: Option<Vec<String>>,
    /// Logging driver for the container
    pub log_driver: Option<String>,
    /// Log driver options
    pub log_opt: Option<Vec<String>>,
    /// Container MAC address (e.g., 92:d0:c6:0a:29:33)
    pub mac_address: Option<String>,
    /// Memory limit
    pub memory: Option<String>,
    /// Memory soft limit
    pub memory_reservation: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Tune container memory swappiness (0 to 100)
    pub memory_swappiness: Option<i64>,
    /// Attach a filesystem mount to the container
    pub mount: Option<String>,
    /// Assign a name to the container
    pub name: Option<String>,
    /// Connect a container to a network
    pub net: Option<String>,
    /// Add network-scoped alias for the container
    pub net_alias: Option<Vec<String>>,
    /// Connect a container to a network
    pub network: Option<String>,
    /// Add network-scoped alias for the container
    pub network_alias: Option<Vec<String>>,
    /// Disable any container-specified HEALTHCHECK
    pub no_healthcheck: Option<bool>,
    /// Disable OOM Killer
    pub oom_kill_disable: Option<bool>,
    /// Tune host's OOM preferences (-1000 to 1000)
    pub oom_score_adj: Option<i64>,
    /// PID namespace to use
    pub pid: Option<String>,
    /// Tune container pids limit (set -1 for unlimited)
    pub pids_limit: Option<i64>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Give extended privileges to this container
    pub privileged: Option<bool>,
    /// Publish a container's port(s) to the host
    pub publish: Option<Vec<String>>,
    /// Publish all exposed ports to random ports
    pub publish_all: Option<bool>,
    /// Pull image before creating ("always"|"missing"|"never")
    pub pull: Option<String>,
    /// Mount the container's root filesystem as read only
    pub read_only: Option<bool>,
    /// Restart policy to apply when a container exits
    pub restart: Option<String>,
    /// Automatically remove the container when it exits
    pub rm: Option<bool>,
    /// Runtime to use for this container
    pub runtime: Option<String>,
    /// Security Options
    pub security_opt: Option<Vec<String>>,
    /// Size of /dev/shm
    pub shm_size: Option<String>,
    /// Signal to stop a container
    pub stop_signal: Option<String>,
    /// Timeout (in seconds) to stop a container
    pub stop_timeout: Option<i64>,
    /// Storage driver options for the container
    pub storage_opt: Option<Vec<String>>,
    /// Sysctl options
    pub sysctl: Option<HashMap<String, String>>,
    /// Mount a tmpfs directory
    pub tmpfs: Option<Vec<String>>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Ulimit options
    pub ulimit: Option<String>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// User namespace to use
    pub userns: Option<String>,
    /// UTS namespace to use
    pub uts: Option<String>,
    /// Bind mount a volume
    pub volume: Option<Vec<String>>,
    /// Optional volume driver for the container
    pub volume_driver: Option<String>,
    /// Mount volumes from the specified container(s)
    pub volumes_from: Option<Vec<String>>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker create`.
///
/// ```text
/// create [OPTIONS] IMAGE [COMMAND] [ARG...]
/// Create a new container
/// ```
pub fn docker_create_cmd(opt: DockerCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["create".to_string()];
    if let Some(values) = opt.add_host {
        for value in values {
            cargs.push("--add-host".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.attach {
        for value in values {
            cargs.push("--attach".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.blkio_weight {
        cargs.push(format!("--blkio-weight={value}"));
    }
    if let Some(values) = opt.blkio_weight_device {
        for value in values {
            cargs.push("--blkio-weight-device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_add {
        for value in values {
            cargs.push("--cap-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_drop {
        for value in values {
            cargs.push("--cap-drop".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.cgroup_parent {
        cargs.push(format!("--cgroup-parent={value}"));
    }
    if let Some(value) = opt.cgroupns {
        cargs.push(format!("--cgroupns={value}"));
    }
    if let Some(value) = opt.cidfile {
        cargs.push(format!("--cidfile={value}"));
    }
    if let Some(value) = opt.cpu_count {
        cargs.push(format!("--cpu-count={value}"));
    }
    if let Some(value) = opt.cpu_percent {
        cargs.push(format!("--cpu-percent={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_rt_period {
        cargs.push(format!("--cpu-rt-period={value}"));
    }
    if let Some(value) = opt.cpu_rt_runtime {
        cargs.push(format!("--cpu-rt-runtime={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpus {
        cargs.push(format!("--cpus={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(values) = opt.device {
        for value in values {
            cargs.push("--device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_cgroup_rule {
        for value in values {
            cargs.push("--device-cgroup-rule".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_bps {
        for value in values {
            cargs.push("--device-read-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_iops {
        for value in values {
            cargs.push("--device-read-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_bps {
        for value in values {
            cargs.push("--device-write-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_iops {
        for value in values {
            cargs.push("--device-write-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(values) = opt.dns {
        for value in values {
            cargs.push("--dns".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_opt {
        for value in values {
            cargs.push("--dns-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_option {
        for value in values {
            cargs.push("--dns-option".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_search {
        for value in values {
            cargs.push("--dns-search".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.domainname {
        cargs.push(format!("--domainname={value}"));
    }
    if let Some(value) = opt.entrypoint {
        cargs.push(format!("--entrypoint={value}"));
    }
    if let Some(values) = opt.env {
        for value in values {
            cargs.push("--env".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_file {
        for value in values {
            cargs.push("--env-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.expose {
        for value in values {
            cargs.push("--expose".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.gpus {
        cargs.push(format!("--gpus={value}"));
    }
    if let Some(values) = opt.group_add {
        for value in values {
            cargs.push("--group-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.health_cmd {
        cargs.push(format!("--health-cmd={value}"));
    }
    if let Some(value) = opt.health_interval {
        cargs.push(format!("--health-interval={value}"));
    }
    if let Some(value) = opt.health_retries {
        cargs.push(format!("--health-retries={value}"));
    }
    if let Some(value) = opt.health_start_period {
        cargs.push(format!("--health-start-period={value}"));
    }
    if let Some(value) = opt.health_timeout {
        cargs.push(format!("--health-timeout={value}"));
    }
    if let Some(value) = opt.help {
        cargs.push(format!("--help={value}"));
    }
    if let Some(value) = opt.hostname {
        cargs.push(format!("--hostname={value}"));
    }
    if let Some(value) = opt.init {
        cargs.push(format!("--init={value}"));
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    if let Some(value) = opt.io_maxbandwidth {
        cargs.push(format!("--io-maxbandwidth={value}"));
    }
    if let Some(value) = opt.io_maxiops {
        cargs.push(format!("--io-maxiops={value}"));
    }
    if let Some(value) = opt.ip {
        cargs.push(format!("--ip={value}"));
    }
    if let Some(value) = opt.ip6 {
        cargs.push(format!("--ip6={value}"));
    }
    if let Some(value) = opt.ipc {
        cargs.push(format!("--ipc={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(value) = opt.kernel_memory {
        cargs.push(format!("--kernel-memory={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.label_file {
        for value in values {
            cargs.push("--label-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link {
        for value in values {
            cargs.push("--link".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link_local_ip {
        for value in values {
            cargs.push("--link-local-ip".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.log_driver {
        cargs.push(format!("--log-driver={value}"));
    }
    if let Some(values) = opt.log_opt {
        for value in values {
            cargs.push("--log-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.mac_address {
        cargs.push(format!("--mac-address={value}"));
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_reservation {
        cargs.push(format!("--memory-reservation={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.memory_swappiness {
        cargs.push(format!("--memory-swappiness={value}"));
    }
    if let Some(value) = opt.mount {
        cargs.push(format!("--mount={value}"));
    }
    if let Some(value) = opt.name {
        cargs.push(format!("--name={value}"));
    }
    if let Some(value) = opt.net {
        cargs.push(format!("--net={value}"));
    }
    if let Some(values) = opt.net_alias {
        for value in values {
            cargs.push("--net-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(values) = opt.network_alias {
        for value in values {
            cargs.push("--network-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.no_healthcheck {
        cargs.push(format!("--no-healthcheck={value}"));
    }
    if let Some(value) = opt.oom_kill_disable {
        cargs.push(format!("--oom-kill-disable={value}"));
    }
    if let Some(value) = opt.oom_score_adj {
        cargs.push(format!("--oom-score-adj={value}"));
    }
    if let Some(value) = opt.pid {
        cargs.push(format!("--pid={value}"));
    }
    if let Some(value) = opt.pids_limit {
        cargs.push(format!("--pids-limit={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.privileged {
        cargs.push(format!("--privileged={value}"));
    }
    if let Some(values) = opt.publish {
        for value in values {
            cargs.push("--publish".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.publish_all {
        cargs.push(format!("--publish-all={value}"));
    }
    if let Some(value) = opt.pull {
        cargs.push(format!("--pull={value}"));
    }
    if let Some(value) = opt.read_only {
        cargs.push(format!("--read-only={value}"));
    }
    if let Some(value) = opt.restart {
        cargs.push(format!("--restart={value}"));
    }
    if let Some(value) = opt.rm {
        cargs.push(format!("--rm={value}"));
    }
    if let Some(value) = opt.runtime {
        cargs.push(format!("--runtime={value}"));
    }
    if let Some(values) = opt.security_opt {
        for value in values {
            cargs.push("--security-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.shm_size {
        cargs.push(format!("--shm-size={value}"));
    }
    if let Some(value) = opt.stop_signal {
        cargs.push(format!("--stop-signal={value}"));
    }
    if let Some(value) = opt.stop_timeout {
        cargs.push(format!("--stop-timeout={value}"));
    }
    if let Some(values) = opt.storage_opt {
        for value in values {
            cargs.push("--storage-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(entries) = opt.sysctl {
        for (key, value) in entries {
            cargs.push("--sysctl".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    if let Some(values) = opt.tmpfs {
        for value in values {
            cargs.push("--tmpfs".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.userns {
        cargs.push(format!("--userns={value}"));
    }
    if let Some(value) = opt.uts {
        cargs.push(format!("--uts={value}"));
    }
    if let Some(values) = opt.volume {
        for value in values {
            cargs.push("--volume".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.volume_driver {
        cargs.push(format!("--volume-driver={value}"));
    }
    if let Some(values) = opt.volumes_from {
        for value in values {
            cargs.push("--volumes-from".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker diff`.
///
/// ```text
/// diff CONTAINER
/// Inspect changes to files or directories on a container's filesystem
/// ```
pub fn docker_diff_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["diff".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker events`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerEventsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Show all events created since timestamp
    pub since: Option<String>,
    /// Stream events until this timestamp
    pub until: Option<String>,
}

/// Wrapper for `docker events`.
///
/// ```text
/// events [OPTIONS]
/// Get real time events from the server
/// ```
pub fn docker_events_cmd(opt: DockerEventsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["events".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.since {
        cargs.push(format!("--since={value}"));
    }
    if let Some(value) = opt.until {
        cargs.push(format!("--until={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker exec`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerExecOption {
    /// Detached mode: run command in the background
    pub detach: Option<bool>,
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Set environment variables
    pub env: Option<Vec<String>>,
    /// Read in a file of environment variables
    pub env_file: Option<Vec<String>>,
    /// Keep STDIN open even if not attached
    pub interactive: Option<bool>,
    /// Give extended privileges to the command
    pub privileged: Option<bool>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker exec`.
///
/// ```text
/// exec [OPTIONS] CONTAINER COMMAND [ARG...]
/// Run a command in a running container
/// ```
pub fn docker_exec_cmd(opt: DockerExecOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["exec".to_string()];
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(values) = opt.env {
        for value in values {
            cargs.push("--env".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_file {
        for value in values {
            cargs.push("--env-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    if let Some(value) = opt.privileged {
        cargs.push(format!("--privileged={value}"));
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker export`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerExportOption {
    /// Write to a file, instead of STDOUT
    pub output: Option<String>,
}

/// Wrapper for `docker export`.
///
/// ```text
/// export [OPTIONS] CONTAINER
/// Export a container's filesystem as a tar archive
/// ```
pub fn docker_export_cmd(opt: DockerExportOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["export".to_string()];
    if let Some(value) = opt.output {
        cargs.push(format!("--output={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker history`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerHistoryOption {
    /// Pretty-print images using a Go template
    pub format: Option<String>,
    /// Print sizes and dates in human readable format
    pub human: Option<bool>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
    /// Only show image IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker history`.
///
/// ```text
/// history [OPTIONS] IMAGE
/// Show the history of an image
/// ```
pub fn docker_history_cmd(opt: DockerHistoryOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["history".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.human {
        cargs.push(format!("--human={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker image`.
///
/// ```text
/// image
/// Manage images
/// ```
pub fn docker_image_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image build`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageBuildOption {
    /// Add a custom host-to-IP mapping (host:ip)
    pub add_host: Option<Vec<String>>,
    /// Set build-time variables
    pub build_arg: Option<Vec<String>>,
    /// Images to consider as cache sources
    pub cache_from: Option<String>,
    /// Optional parent cgroup for the container
    pub cgroup_parent: Option<String>,
    /// Compress the build context using gzip
    pub compress: Option<bool>,
    /// Limit the CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit the CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Name of the Dockerfile (Default is 'PATH/Dockerfile')
    pub file: Option<String>,
    /// Always remove intermediate containers
    pub force_rm: Option<bool>,
    /// Write the image ID to the file
    pub iidfile: Option<String>,
    /// Container isolation technology
    pub isolation: Option<String>,
    /// Set metadata for an image
    pub label: Option<Vec<String>>,
    /// Memory limit
    pub memory: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Set the networking mode for the RUN instructions during build
    pub network: Option<String>,
    /// Do not use cache when building the image
    pub no_cache: Option<bool>,
    /// Output destination (format: type=local,dest=path)
    pub output: Option<String>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Set type of progress output (auto, plain, tty). Use plain to show container output
    pub progress: Option<String>,
    /// Always attempt to pull a newer version of the image
    pub pull: Option<bool>,
    /// Suppress the build output and print image ID on success
    pub quiet: Option<bool>,
    /// Remove intermediate containers after a successful build
    pub rm: Option<bool>,
    /// Secret file to expose to the build (only if BuildKit enabled): id=mysecret,src=/local/secret
    pub secret: Option<String>,
    /// Security options
    pub security_opt: Option<String>,
    /// Size of /dev/shm
    pub shm_size: Option<String>,
    /// Squash newly built layers into a single new layer
    pub squash: Option<bool>,
    /// SSH agent socket or keys to expose to the build (only if BuildKit enabled) (format: default|<id>[=<socket>|<key>[,<key>]])
    pub ssh: Option<String>,
    /// Stream attaches to server to negotiate build context
    pub stream: Option<bool>,
    /// Name and optionally a tag in the 'name:tag' format
    pub tag: Option<Vec<String>>,
    /// Set the target build stage to build.
    pub target: Option<String>,
    /// Ulimit options
    pub ulimit: Option<String>,
}

/// Wrapper for `docker image build`.
///
/// ```text
/// build [OPTIONS] PATH | URL | -
/// Build an image from a Dockerfile
/// ```
pub fn docker_image_build_cmd(opt: DockerImageBuildOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "build".to_string()];
    if let Some(values) = opt.add_host {
        for value in values {
            cargs.push("--add-host".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.build_arg {
        for value in values {
            cargs.push("--build-arg".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.cache_from {
        cargs.push(format!("--cache-from={value}"));
    }
    if let Some(value) = opt.cgroup_parent {
        cargs.push(format!("--cgroup-parent={value}"));
    }
    if let Some(value) = opt.compress {
        cargs.push(format!("--compress={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.file {
        cargs.push(format!("--file={value}"));
    }
    if let Some(value) = opt.force_rm {
        cargs.push(format!("--force-rm={value}"));
    }
    if let Some(value) = opt.iidfile {
        cargs.push(format!("--iidfile={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(value) = opt.no_cache {
        cargs.push(format!("--no-cache={value}"));
    }
    if let Some(value) = opt.output {
        cargs.push(format!("--output={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.progress {
        cargs.push(format!("--progress={value}"));
    }
    if let Some(value) = opt.pull {
        cargs.push(format!("--pull={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.rm {
        cargs.push(format!("--rm={value}"));
    }
    if let Some(value) = opt.secret {
        cargs.push(format!("--secret={value}"));
    }
    if let Some(value) = opt.security_opt {
        cargs.push(format!("--security-opt={value}"));
    }
    if let Some(value) = opt.shm_size {
        cargs.push(format!("--shm-size={value}"));
    }
    if let Some(value) = opt.squash {
        cargs.push(format!("--squash={value}"));
    }
    if let Some(value) = opt.ssh {
        cargs.push(format!("--ssh={value}"));
    }
    if let Some(value) = opt.stream {
        cargs.push(format!("--stream={value}"));
    }
    if let Some(values) = opt.tag {
        for value in values {
            cargs.push("--tag".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.target {
        cargs.push(format!("--target={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image history`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageHistoryOption {
    /// Pretty-print images using a Go template
    pub format: Option<String>,
    /// Print sizes and dates in human readable format
    pub human: Option<bool>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
    /// Only show image IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker image history`.
///
/// ```text
/// history [OPTIONS] IMAGE
/// Show the history of an image
/// ```
pub fn docker_image_history_cmd(opt: DockerImageHistoryOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "history".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.human {
        cargs.push(format!("--human={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image import`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageImportOption {
    /// Apply Dockerfile instruction to the created image
    pub change: Option<Vec<String>>,
    /// Set commit message for imported image
    pub message: Option<String>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
}

/// Wrapper for `docker image import`.
///
/// ```text
/// import [OPTIONS] file|URL|- [REPOSITORY[:TAG]]
/// Import the contents from a tarball to create a filesystem image
/// ```
pub fn docker_image_import_cmd(opt: DockerImageImportOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "import".to_string()];
    if let Some(values) = opt.change {
        for value in values {
            cargs.push("--change".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.message {
        cargs.push(format!("--message={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
}

/// Wrapper for `docker image inspect`.
///
/// ```text
/// inspect [OPTIONS] IMAGE [IMAGE...]
/// Display detailed information on one or more images
/// ```
pub fn docker_image_inspect_cmd(opt: DockerImageInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image load`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageLoadOption {
    /// Read from tar archive file, instead of STDIN
    pub input: Option<String>,
    /// Suppress the load output
    pub quiet: Option<bool>,
}

/// Wrapper for `docker image load`.
///
/// ```text
/// load [OPTIONS]
/// Load an image from a tar archive or STDIN
/// ```
pub fn docker_image_load_cmd(opt: DockerImageLoadOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "load".to_string()];
    if let Some(value) = opt.input {
        cargs.push(format!("--input={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageLsOption {
    /// Show all images (default hides intermediate images)
    pub all: Option<bool>,
    /// Show digests
    pub digests: Option<bool>,
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print images using a Go template
    pub format: Option<String>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
    /// Only show image IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker image ls`.
///
/// ```text
/// ls [OPTIONS] [REPOSITORY[:TAG]]
/// List images
/// ```
pub fn docker_image_ls_cmd(opt: DockerImageLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "ls".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.digests {
        cargs.push(format!("--digests={value}"));
    }
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image prune`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImagePruneOption {
    /// Remove all unused images, not just dangling ones
    pub all: Option<bool>,
    /// Provide filter values (e.g. 'until=<timestamp>')
    pub filter: Option<String>,
    /// Do not prompt for confirmation
    pub force: Option<bool>,
}

/// Wrapper for `docker image prune`.
///
/// ```text
/// prune [OPTIONS]
/// Remove unused images
/// ```
pub fn docker_image_prune_cmd(opt: DockerImagePruneOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "prune".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image pull`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImagePullOption {
    /// Download all tagged images in the repository
    pub all_tags: Option<bool>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Suppress verbose output
    pub quiet: Option<bool>,
}

/// Wrapper for `docker image pull`.
///
/// ```text
/// pull [OPTIONS] NAME[:TAG|@DIGEST]
/// Pull an image or a repository from a registry
/// ```
pub fn docker_image_pull_cmd(opt: DockerImagePullOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "pull".to_string()];
    if let Some(value) = opt.all_tags {
        cargs.push(format!("--all-tags={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image push`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImagePushOption {
    /// Push all tagged images in the repository
    pub all_tags: Option<bool>,
    /// Skip image signing
    pub disable_content_trust: Option<bool>,
    /// Suppress verbose output
    pub quiet: Option<bool>,
}

/// Wrapper for `docker image push`.
///
/// ```text
/// push [OPTIONS] NAME[:TAG]
/// Push an image or a repository to a registry
/// ```
pub fn docker_image_push_cmd(opt: DockerImagePushOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "push".to_string()];
    if let Some(value) = opt.all_tags {
        cargs.push(format!("--all-tags={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageRmOption {
    /// Force removal of the image
    pub force: Option<bool>,
    /// Do not delete untagged parents
    pub no_prune: Option<bool>,
}

/// Wrapper for `docker image rm`.
///
/// ```text
/// rm [OPTIONS] IMAGE [IMAGE...]
/// Remove one or more images
/// ```
pub fn docker_image_rm_cmd(opt: DockerImageRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "rm".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    if let Some(value) = opt.no_prune {
        cargs.push(format!("--no-prune={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker image save`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImageSaveOption {
    /// Write to a file, instead of STDOUT
    pub output: Option<String>,
}

/// Wrapper for `docker image save`.
///
/// ```text
/// save [OPTIONS] IMAGE [IMAGE...]
/// Save one or more images to a tar archive (streamed to STDOUT by default)
/// ```
pub fn docker_image_save_cmd(opt: DockerImageSaveOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "save".to_string()];
    if let Some(value) = opt.output {
        cargs.push(format!("--output={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker image tag`.
///
/// ```text
/// tag SOURCE_IMAGE[:TAG] TARGET_IMAGE[:TAG]
/// Create a tag TARGET_IMAGE that refers to SOURCE_IMAGE
/// ```
pub fn docker_image_tag_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["image".to_string(), "tag".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker images`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImagesOption {
    /// Show all images (default hides intermediate images)
    pub all: Option<bool>,
    /// Show digests
    pub digests: Option<bool>,
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print images using a Go template
    pub format: Option<String>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
    /// Only show image IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker images`.
///
/// ```text
/// images [OPTIONS] [REPOSITORY[:TAG]]
/// List images
/// ```
pub fn docker_images_cmd(opt: DockerImagesOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["images".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.digests {
        cargs.push(format!("--digests={value}"));
    }
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker import`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerImportOption {
    /// Apply Dockerfile instruction to the created image
    pub change: Option<Vec<String>>,
    /// Set commit message for imported image
    pub message: Option<String>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
}

/// Wrapper for `docker import`.
///
/// ```text
/// import [OPTIONS] file|URL|- [REPOSITORY[:TAG]]
/// Import the contents from a tarball to create a filesystem image
/// ```
pub fn docker_import_cmd(opt: DockerImportOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["import".to_string()];
    if let Some(values) = opt.change {
        for value in values {
            cargs.push("--change".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.message {
        cargs.push(format!("--message={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker info`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerInfoOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
}

/// Wrapper for `docker info`.
///
/// ```text
/// info [OPTIONS]
/// Display system-wide information
/// ```
pub fn docker_info_cmd(opt: DockerInfoOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["info".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Display total file sizes if the type is container
    pub size: Option<bool>,
    /// Return JSON for specified type
    pub r#type: Option<String>,
}

/// Wrapper for `docker inspect`.
///
/// ```text
/// inspect [OPTIONS] NAME|ID [NAME|ID...]
/// Return low-level information on Docker objects
/// ```
pub fn docker_inspect_cmd(opt: DockerInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.size {
        cargs.push(format!("--size={value}"));
    }
    if let Some(value) = opt.r#type {
        cargs.push(format!("--type={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker kill`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerKillOption {
    /// Signal to send to the container
    pub signal: Option<String>,
}

/// Wrapper for `docker kill`.
///
/// ```text
/// kill [OPTIONS] CONTAINER [CONTAINER...]
/// Kill one or more running containers
/// ```
pub fn docker_kill_cmd(opt: DockerKillOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["kill".to_string()];
    if let Some(value) = opt.signal {
        cargs.push(format!("--signal={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker load`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerLoadOption {
    /// Read from tar archive file, instead of STDIN
    pub input: Option<String>,
    /// Suppress the load output
    pub quiet: Option<bool>,
}

/// Wrapper for `docker load`.
///
/// ```text
/// load [OPTIONS]
/// Load an image from a tar archive or STDIN
/// ```
pub fn docker_load_cmd(opt: DockerLoadOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["load".to_string()];
    if let Some(value) = opt.input {
        cargs.push(format!("--input={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker login`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerLoginOption {
    /// Password
    pub password: Option<String>,
    /// Take the password from stdin
    pub password_stdin: Option<bool>,
    /// Username
    pub username: Option<String>,
}

/// Wrapper for `docker login`.
///
/// ```text
/// login [OPTIONS] [SERVER]
/// Log in to a Docker registry
/// ```
pub fn docker_login_cmd(opt: DockerLoginOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["login".to_string()];
    if let Some(value) = opt.password {
        cargs.push(format!("--password={value}"));
    }
    if let Some(value) = opt.password_stdin {
        cargs.push(format!("--password-stdin={value}"));
    }
    if let Some(value) = opt.username {
        cargs.push(format!("--username={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker logout`.
///
/// ```text
/// logout [SERVER]
/// Log out from a Docker registry
/// ```
pub fn docker_logout_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["logout".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker logs`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerLogsOption {
    /// Show extra details provided to logs
    pub details: Option<bool>,
    /// Follow log output
    pub follow: Option<bool>,
    /// Show logs since timestamp (e.g. 2013-01-02T13:23:37Z) or relative (e.g. 42m for 42 minutes)
    pub since: Option<String>,
    /// Number of lines to show from the end of the logs
    pub tail: Option<String>,
    /// Show timestamps
    pub timestamps: Option<bool>,
    /// Show logs before a timestamp (e.g. 2013-01-02T13:23:37Z) or relative (e.g. 42m for 42 minutes)
    pub until: Option<String>,
}

/// Wrapper for `docker logs`.
///
/// ```text
/// logs [OPTIONS] CONTAINER
/// Fetch the logs of a container
/// ```
pub fn docker_logs_cmd(opt: DockerLogsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["logs".to_string()];
    if let Some(value) = opt.details {
        cargs.push(format!("--details={value}"));
    }
    if let Some(value) = opt.follow {
        cargs.push(format!("--follow={value}"));
    }
    if let Some(value) = opt.since {
        cargs.push(format!("--since={value}"));
    }
    if let Some(value) = opt.tail {
        cargs.push(format!("--tail={value}"));
    }
    if let Some(value) = opt.timestamps {
        cargs.push(format!("--timestamps={value}"));
    }
    if let Some(value) = opt.until {
        cargs.push(format!("--until={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker manifest`.
///
/// ```text
/// manifest COMMAND
/// Manage Docker image manifests and manifest lists
/// ```
pub fn docker_manifest_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["manifest".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker manifest annotate`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerManifestAnnotateOption {
    /// Set architecture
    pub arch: Option<String>,
    /// Set operating system
    pub os: Option<String>,
    /// Set operating system feature
    pub os_features: Option<String>,
    /// Set operating system version
    pub os_version: Option<String>,
    /// Set architecture variant
    pub variant: Option<String>,
}

/// Wrapper for `docker manifest annotate`.
///
/// ```text
/// annotate [OPTIONS] MANIFEST_LIST MANIFEST
/// Add additional information to a local image manifest
/// ```
pub fn docker_manifest_annotate_cmd(opt: DockerManifestAnnotateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["manifest".to_string(), "annotate".to_string()];
    if let Some(value) = opt.arch {
        cargs.push(format!("--arch={value}"));
    }
    if let Some(value) = opt.os {
        cargs.push(format!("--os={value}"));
    }
    if let Some(value) = opt.os_features {
        cargs.push(format!("--os-features={value}"));
    }
    if let Some(value) = opt.os_version {
        cargs.push(format!("--os-version={value}"));
    }
    if let Some(value) = opt.variant {
        cargs.push(format!("--variant={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker manifest create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerManifestCreateOption {
    /// Amend an existing manifest list
    pub amend: Option<bool>,
    /// Allow communication with an insecure registry
    pub insecure: Option<bool>,
}

/// Wrapper for `docker manifest create`.
///
/// ```text
/// create MANIFEST_LIST MANIFEST [MANIFEST...]
/// Create a local manifest list for annotating and pushing to a registry
/// ```
pub fn docker_manifest_create_cmd(opt: DockerManifestCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["manifest".to_string(), "create".to_string()];
    if let Some(value) = opt.amend {
        cargs.push(format!("--amend={value}"));
    }
    if let Some(value) = opt.insecure {
        cargs.push(format!("--insecure={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker manifest inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerManifestInspectOption {
    /// Allow communication with an insecure registry
    pub insecure: Option<bool>,
    /// Output additional info including layers and platform
    pub verbose: Option<bool>,
}

/// Wrapper for `docker manifest inspect`.
///
/// ```text
/// inspect [OPTIONS] [MANIFEST_LIST] MANIFEST
/// Display an image manifest, or manifest list
/// ```
pub fn docker_manifest_inspect_cmd(opt: DockerManifestInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["manifest".to_string(), "inspect".to_string()];
    if let Some(value) = opt.insecure {
        cargs.push(format!("--insecure={value}"));
    }
    if let Some(value) = opt.verbose {
        cargs.push(format!("--verbose={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker manifest push`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerManifestPushOption {
    /// Allow push to an insecure registry
    pub insecure: Option<bool>,
    /// Remove the local manifest list after push
    pub purge: Option<bool>,
}

/// Wrapper for `docker manifest push`.
///
/// ```text
/// push [OPTIONS] MANIFEST_LIST
/// Push a manifest list to a repository
/// ```
pub fn docker_manifest_push_cmd(opt: DockerManifestPushOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["manifest".to_string(), "push".to_string()];
    if let Some(value) = opt.insecure {
        cargs.push(format!("--insecure={value}"));
    }
    if let Some(value) = opt.purge {
        cargs.push(format!("--purge={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker manifest rm`.
///
/// ```text
/// rm MANIFEST_LIST [MANIFEST_LIST...]
/// Delete one or more manifest lists from local storage
/// ```
pub fn docker_manifest_rm_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["manifest".to_string(), "rm".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker network`.
///
/// ```text
/// network
/// Manage networks
/// ```
pub fn docker_network_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker network connect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNetworkConnectOption {
    /// Add network-scoped alias for the container
    pub alias: Option<String>,
    /// driver options for the network
    pub driver_opt: Option<String>,
    /// IPv4 address (e.g., 172.30.100.104)
    pub ip: Option<String>,
    /// IPv6 address (e.g., 2001:db8::33)
    pub ip6: Option<String>,
    /// Add link to another container
    pub link: Option<Vec<String>>,
    /// Add a link-local address for the container
    pub link_local_ip: Option<String>,
}

/// Wrapper for `docker network connect`.
///
/// ```text
/// connect [OPTIONS] NETWORK CONTAINER
/// Connect a container to a network
/// ```
pub fn docker_network_connect_cmd(opt: DockerNetworkConnectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string(), "connect".to_string()];
    if let Some(value) = opt.alias {
        cargs.push(format!("--alias={value}"));
    }
    if let Some(value) = opt.driver_opt {
        cargs.push(format!("--driver-opt={value}"));
    }
    if let Some(value) = opt.ip {
        cargs.push(format!("--ip={value}"));
    }
    if let Some(value) = opt.ip6 {
        cargs.push(format!("--ip6={value}"));
    }
    if let Some(values) = opt.link {
        for value in values {
            cargs.push("--link".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.link_local_ip {
        cargs.push(format!("--link-local-ip={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker network create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNetworkCreateOption {
    /// Enable manual container attachment
    pub attachable: Option<bool>,
    /// Auxiliary IPv4 or IPv6 addresses used by Network driver
    pub aux_address: Option<HashMap<String, String>>,
    /// The network from which to copy the configuration
    pub config_from: Option<String>,
    /// Create a configuration only network
    pub config_only: Option<bool>,
    /// Driver to manage the Network
    pub driver: Option<String>,
    /// IPv4 or IPv6 Gateway for the master subnet
    pub gateway: Option<String>,
    /// Create swarm routing-mesh network
    pub ingress: Option<bool>,
    /// Restrict external access to the network
    pub internal: Option<bool>,
    /// Allocate container ip from a sub-range
    pub ip_range: Option<String>,
    /// IP Address Management Driver
    pub ipam_driver: Option<String>,
    /// Set IPAM driver specific options
    pub ipam_opt: Option<HashMap<String, String>>,
    /// Enable IPv6 networking
    pub ipv6: Option<bool>,
    /// Set metadata on a network
    pub label: Option<Vec<String>>,
    /// Set driver specific options
    pub opt: Option<HashMap<String, String>>,
    /// Control the network's scope
    pub scope: Option<String>,
    /// Subnet in CIDR format that represents a network segment
    pub subnet: Option<String>,
}

/// Wrapper for `docker network create`.
///
/// ```text
/// create [OPTIONS] NETWORK
/// Create a network
/// ```
pub fn docker_network_create_cmd(opt: DockerNetworkCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string(), "create".to_string()];
    if let Some(value) = opt.attachable {
        cargs.push(format!("--attachable={value}"));
    }
    if let Some(entries) = opt.aux_address {
        for (key, value) in entries {
            cargs.push("--aux-address".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    if let Some(value) = opt.config_from {
        cargs.push(format!("--config-from={value}"));
    }
    if let Some(value) = opt.config_only {
        cargs.push(format!("--config-only={value}"));
    }
    if let Some(value) = opt.driver {
        cargs.push(format!("--driver={value}"));
    }
    if let Some(value) = opt.gateway {
        cargs.push(format!("--gateway={value}"));
    }
    if let Some(value) = opt.ingress {
        cargs.push(format!("--ingress={value}"));
    }
    if let Some(value) = opt.internal {
        cargs.push(format!("--internal={value}"));
    }
    if let Some(value) = opt.ip_range {
        cargs.push(format!("--ip-range={value}"));
    }
    if let Some(value) = opt.ipam_driver {
        cargs.push(format!("--ipam-driver={value}"));
    }
    if let Some(entries) = opt.ipam_opt {
        for (key, value) in entries {
            cargs.push("--ipam-opt".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    if let Some(value) = opt.ipv6 {
        cargs.push(format!("--ipv6={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(entries) = opt.opt {
        for (key, value) in entries {
            cargs.push("--opt".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    if let Some(value) = opt.scope {
        cargs.push(format!("--scope={value}"));
    }
    if let Some(value) = opt.subnet {
        cargs.push(format!("--subnet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker network disconnect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNetworkDisconnectOption {
    /// Force the container to disconnect from a network
    pub force: Option<bool>,
}

/// Wrapper for `docker network disconnect`.
///
/// ```text
/// disconnect [OPTIONS] NETWORK CONTAINER
/// Disconnect a container from a network
/// ```
pub fn docker_network_disconnect_cmd(opt: DockerNetworkDisconnectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string(), "disconnect".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker network inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNetworkInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Verbose output for diagnostics
    pub verbose: Option<bool>,
}

/// Wrapper for `docker network inspect`.
///
/// ```text
/// inspect [OPTIONS] NETWORK [NETWORK...]
/// Display detailed information on one or more networks
/// ```
pub fn docker_network_inspect_cmd(opt: DockerNetworkInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.verbose {
        cargs.push(format!("--verbose={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker network ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNetworkLsOption {
    /// Provide filter values (e.g. 'driver=bridge')
    pub filter: Option<String>,
    /// Pretty-print networks using a Go template
    pub format: Option<String>,
    /// Do not truncate the output
    pub no_trunc: Option<bool>,
    /// Only display network IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker network ls`.
///
/// ```text
/// ls [OPTIONS]
/// List networks
/// ```
pub fn docker_network_ls_cmd(opt: DockerNetworkLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string(), "ls".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker network prune`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNetworkPruneOption {
    /// Provide filter values (e.g. 'until=<timestamp>')
    pub filter: Option<String>,
    /// Do not prompt for confirmation
    pub force: Option<bool>,
}

/// Wrapper for `docker network prune`.
///
/// ```text
/// prune [OPTIONS]
/// Remove all unused networks
/// ```
pub fn docker_network_prune_cmd(opt: DockerNetworkPruneOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string(), "prune".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker network rm`.
///
/// ```text
/// rm NETWORK [NETWORK...]
/// Remove one or more networks
/// ```
pub fn docker_network_rm_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["network".to_string(), "rm".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker node`.
///
/// ```text
/// node
/// Manage Swarm nodes
/// ```
pub fn docker_node_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker node demote`.
///
/// ```text
/// demote NODE [NODE...]
/// Demote one or more nodes from manager in the swarm
/// ```
pub fn docker_node_demote_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string(), "demote".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker node inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNodeInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Print the information in a human friendly format
    pub pretty: Option<bool>,
}

/// Wrapper for `docker node inspect`.
///
/// ```text
/// inspect [OPTIONS] self|NODE [NODE...]
/// Display detailed information on one or more nodes
/// ```
pub fn docker_node_inspect_cmd(opt: DockerNodeInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.pretty {
        cargs.push(format!("--pretty={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker node ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNodeLsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print nodes using a Go template
    pub format: Option<String>,
    /// Only display IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker node ls`.
///
/// ```text
/// ls [OPTIONS]
/// List nodes in the swarm
/// ```
pub fn docker_node_ls_cmd(opt: DockerNodeLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string(), "ls".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker node promote`.
///
/// ```text
/// promote NODE [NODE...]
/// Promote one or more nodes to manager in the swarm
/// ```
pub fn docker_node_promote_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string(), "promote".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker node ps`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNodePsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print tasks using a Go template
    pub format: Option<String>,
    /// Do not map IDs to Names
    pub no_resolve: Option<bool>,
    /// Do not truncate output
    pub no_trunc: Option<bool>,
    /// Only display task IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker node ps`.
///
/// ```text
/// ps [OPTIONS] [NODE...]
/// List tasks running on one or more nodes, defaults to current node
/// ```
pub fn docker_node_ps_cmd(opt: DockerNodePsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string(), "ps".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_resolve {
        cargs.push(format!("--no-resolve={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker node rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNodeRmOption {
    /// Force remove a node from the swarm
    pub force: Option<bool>,
}

/// Wrapper for `docker node rm`.
///
/// ```text
/// rm [OPTIONS] NODE [NODE...]
/// Remove one or more nodes from the swarm
/// ```
pub fn docker_node_rm_cmd(opt: DockerNodeRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string(), "rm".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker node update`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerNodeUpdateOption {
    /// Availability of the node ("active"|"pause"|"drain")
    pub availability: Option<String>,
    /// Add or update a node label (key=value)
    pub label_add: Option<Vec<String>>,
    /// Remove a node label if exists
    pub label_rm: Option<Vec<String>>,
    /// Role of the node ("worker"|"manager")
    pub role: Option<String>,
}

/// Wrapper for `docker node update`.
///
/// ```text
/// update [OPTIONS] NODE
/// Update a node
/// ```
pub fn docker_node_update_cmd(opt: DockerNodeUpdateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["node".to_string(), "update".to_string()];
    if let Some(value) = opt.availability {
        cargs.push(format!("--availability={value}"));
    }
    if let Some(values) = opt.label_add {
        for value in values {
            cargs.push("--label-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.label_rm {
        for value in values {
            cargs.push("--label-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.role {
        cargs.push(format!("--role={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker pause`.
///
/// ```text
/// pause CONTAINER [CONTAINER...]
/// Pause all processes within one or more containers
/// ```
pub fn docker_pause_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["pause".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker plugin`.
///
/// ```text
/// plugin
/// Manage plugins
/// ```
pub fn docker_plugin_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginCreateOption {
    /// Compress the context using gzip
    pub compress: Option<bool>,
}

/// Wrapper for `docker plugin create`.
///
/// ```text
/// create [OPTIONS] PLUGIN PLUGIN-DATA-DIR
/// Create a plugin from a rootfs and configuration. Plugin data directory must contain config.json and rootfs directory.
/// ```
pub fn docker_plugin_create_cmd(opt: DockerPluginCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "create".to_string()];
    if let Some(value) = opt.compress {
        cargs.push(format!("--compress={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin disable`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginDisableOption {
    /// Force the disable of an active plugin
    pub force: Option<bool>,
}

/// Wrapper for `docker plugin disable`.
///
/// ```text
/// disable [OPTIONS] PLUGIN
/// Disable a plugin
/// ```
pub fn docker_plugin_disable_cmd(opt: DockerPluginDisableOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "disable".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin enable`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginEnableOption {
    /// HTTP client timeout (in seconds)
    pub timeout: Option<i64>,
}

/// Wrapper for `docker plugin enable`.
///
/// ```text
/// enable [OPTIONS] PLUGIN
/// Enable a plugin
/// ```
pub fn docker_plugin_enable_cmd(opt: DockerPluginEnableOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "enable".to_string()];
    if let Some(value) = opt.timeout {
        cargs.push(format!("--timeout={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
}

/// Wrapper for `docker plugin inspect`.
///
/// ```text
/// inspect [OPTIONS] PLUGIN [PLUGIN...]
/// Display detailed information on one or more plugins
/// ```
pub fn docker_plugin_inspect_cmd(opt: DockerPluginInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin install`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginInstallOption {
    /// Local name for plugin
    pub alias: Option<String>,
    /// Do not enable the plugin on install
    pub disable: Option<bool>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Grant all permissions necessary to run the plugin
    pub grant_all_permissions: Option<bool>,
}

/// Wrapper for `docker plugin install`.
///
/// ```text
/// install [OPTIONS] PLUGIN [KEY=VALUE...]
/// Install a plugin
/// ```
pub fn docker_plugin_install_cmd(opt: DockerPluginInstallOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "install".to_string()];
    if let Some(value) = opt.alias {
        cargs.push(format!("--alias={value}"));
    }
    if let Some(value) = opt.disable {
        cargs.push(format!("--disable={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.grant_all_permissions {
        cargs.push(format!("--grant-all-permissions={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginLsOption {
    /// Provide filter values (e.g. 'enabled=true')
    pub filter: Option<String>,
    /// Pretty-print plugins using a Go template
    pub format: Option<String>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
    /// Only display plugin IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker plugin ls`.
///
/// ```text
/// ls [OPTIONS]
/// List plugins
/// ```
pub fn docker_plugin_ls_cmd(opt: DockerPluginLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "ls".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin push`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginPushOption {
    /// Skip image signing
    pub disable_content_trust: Option<bool>,
}

/// Wrapper for `docker plugin push`.
///
/// ```text
/// push [OPTIONS] PLUGIN[:TAG]
/// Push a plugin to a registry
/// ```
pub fn docker_plugin_push_cmd(opt: DockerPluginPushOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "push".to_string()];
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginRmOption {
    /// Force the removal of an active plugin
    pub force: Option<bool>,
}

/// Wrapper for `docker plugin rm`.
///
/// ```text
/// rm [OPTIONS] PLUGIN [PLUGIN...]
/// Remove one or more plugins
/// ```
pub fn docker_plugin_rm_cmd(opt: DockerPluginRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "rm".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker plugin set`.
///
/// ```text
/// set PLUGIN KEY=VALUE [KEY=VALUE...]
/// Change settings for a plugin
/// ```
pub fn docker_plugin_set_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "set".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker plugin upgrade`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPluginUpgradeOption {
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Grant all permissions necessary to run the plugin
    pub grant_all_permissions: Option<bool>,
    /// Do not check if specified remote plugin matches existing plugin image
    pub skip_remote_check: Option<bool>,
}

/// Wrapper for `docker plugin upgrade`.
///
/// ```text
/// upgrade [OPTIONS] PLUGIN [REMOTE]
/// Upgrade an existing plugin
/// ```
pub fn docker_plugin_upgrade_cmd(opt: DockerPluginUpgradeOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["plugin".to_string(), "upgrade".to_string()];
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.grant_all_permissions {
        cargs.push(format!("--grant-all-permissions={value}"));
    }
    if let Some(value) = opt.skip_remote_check {
        cargs.push(format!("--skip-remote-check={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker port`.
///
/// ```text
/// port CONTAINER [PRIVATE_PORT[/PROTO]]
/// List port mappings or a specific mapping for the container
/// ```
pub fn docker_port_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["port".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker ps`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPsOption {
    /// Show all containers (default shows just running)
    pub all: Option<bool>,
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print containers using a Go template
    pub format: Option<String>,
    /// Show n last created containers (includes all states)
    pub last: Option<i64>,
    /// Show the latest created container (includes all states)
    pub latest: Option<bool>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
    /// Only display container IDs
    pub quiet: Option<bool>,
    /// Display total file sizes
    pub size: Option<bool>,
}

/// Wrapper for `docker ps`.
///
/// ```text
/// ps [OPTIONS]
/// List containers
/// ```
pub fn docker_ps_cmd(opt: DockerPsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["ps".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.last {
        cargs.push(format!("--last={value}"));
    }
    if let Some(value) = opt.latest {
        cargs.push(format!("--latest={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.size {
        cargs.push(format!("--size={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker pull`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPullOption {
    /// Download all tagged images in the repository
    pub all_tags: Option<bool>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Suppress verbose output
    pub quiet: Option<bool>,
}

/// Wrapper for `docker pull`.
///
/// ```text
/// pull [OPTIONS] NAME[:TAG|@DIGEST]
/// Pull an image or a repository from a registry
/// ```
pub fn docker_pull_cmd(opt: DockerPullOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["pull".to_string()];
    if let Some(value) = opt.all_tags {
        cargs.push(format!("--all-tags={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker push`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerPushOption {
    /// Push all tagged images in the repository
    pub all_tags: Option<bool>,
    /// Skip image signing
    pub disable_content_trust: Option<bool>,
    /// Suppress verbose output
    pub quiet: Option<bool>,
}

/// Wrapper for `docker push`.
///
/// ```text
/// push [OPTIONS] NAME[:TAG]
/// Push an image or a repository to a registry
/// ```
pub fn docker_push_cmd(opt: DockerPushOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["push".to_string()];
    if let Some(value) = opt.all_tags {
        cargs.push(format!("--all-tags={value}"));
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker rename`.
///
/// ```text
/// rename CONTAINER NEW_NAME
/// Rename a container
/// ```
pub fn docker_rename_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["rename".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker restart`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerRestartOption {
    /// Seconds to wait for stop before killing the container
    pub time: Option<i64>,
}

/// Wrapper for `docker restart`.
///
/// ```text
/// restart [OPTIONS] CONTAINER [CONTAINER...]
/// Restart one or more containers
/// ```
pub fn docker_restart_cmd(opt: DockerRestartOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["restart".to_string()];
    if let Some(value) = opt.time {
        cargs.push(format!("--time={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerRmOption {
    /// Force the removal of a running container (uses SIGKILL)
    pub force: Option<bool>,
    /// Remove the specified link
    pub link: Option<bool>,
    /// Remove anonymous volumes associated with the container
    pub volumes: Option<bool>,
}

/// Wrapper for `docker rm`.
///
/// ```text
/// rm [OPTIONS] CONTAINER [CONTAINER...]
/// Remove one or more containers
/// ```
pub fn docker_rm_cmd(opt: DockerRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["rm".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    if let Some(value) = opt.link {
        cargs.push(format!("--link={value}"));
    }
    if let Some(value) = opt.volumes {
        cargs.push(format!("--volumes={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker rmi`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerRmiOption {
    /// Force removal of the image
    pub force: Option<bool>,
    /// Do not delete untagged parents
    pub no_prune: Option<bool>,
}

/// Wrapper for `docker rmi`.
///
/// ```text
/// rmi [OPTIONS] IMAGE [IMAGE...]
/// Remove one or more images
/// ```
pub fn docker_rmi_cmd(opt: DockerRmiOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["rmi".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    if let Some(value) = opt.no_prune {
        cargs.push(format!("--no-prune={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker run`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerRunOption {
    /// Add a custom host-to-IP mapping (host:ip)
    pub add_host: Option<Vec<String>>,
    /// Attach to STDIN, STDOUT or STDERR
    pub attach: Option<Vec<String>>,
    /// Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)
    pub blkio_weight: Option<u16>,
    /// Block IO weight (relative device weight)
    pub blkio_weight_device: Option<Vec<String>>,
    /// Add Linux capabilities
    pub cap_add: Option<Vec<String>>,
    /// Drop Linux capabilities
    pub cap_drop: Option<Vec<String>>,
    /// Optional parent cgroup for the container
    pub cgroup_parent: Option<String>,
    /// Cgroup namespace to use (host|private)
    /// 'host':    Run the container in the Docker host's cgroup namespace
    /// 'private': Run the container in its own private cgroup namespace
    /// '':        Use the cgroup namespace as configured by the
    ///            default-cgroupns-mode option on the daemon (default)
    pub cgroupns: Option<String>,
    /// Write the container ID to the file
    pub cidfile: Option<String>,
    /// CPU count (Windows only)
    pub cpu_count: Option<i64>,
    /// CPU percent (Windows only)
    pub cpu_percent: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// Limit CPU real-time period in microseconds
    pub cpu_rt_period: Option<i64>,
    /// Limit CPU real-time runtime in microseconds
    pub cpu_rt_runtime: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// Number of CPUs
    pub cpus: Option<String>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Run container in background and print container ID
    pub detach: Option<bool>,
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Add a host device to the container
    pub device: Option<Vec<String>>,
    /// Add a rule to the cgroup allowed devices list
    pub device_cgroup_rule: Option<Vec<String>>,
    /// Limit read rate (bytes per second) from a device
    pub device_read_bps: Option<Vec<String>>,
    /// Limit read rate (IO per second) from a device
    pub device_read_iops: Option<Vec<String>>,
    /// Limit write rate (bytes per second) to a device
    pub device_write_bps: Option<Vec<String>>,
    /// Limit write rate (IO per second) to a device
    pub device_write_iops: Option<Vec<String>>,
    /// Skip image verification
    pub disable_content_trust: Option<bool>,
    /// Set custom DNS servers
    pub dns: Option<Vec<String>>,
    /// Set DNS options
    pub dns_opt: Option<Vec<String>>,
    /// Set DNS options
    pub dns_option: Option<Vec<String>>,
    /// Set custom DNS search domains
    pub dns_search: Option<Vec<String>>,
    /// Container NIS domain name
    pub domainname: Option<String>,
    /// Overwrite the default ENTRYPOINT of the image
    pub entrypoint: Option<String>,
    /// Set environment variables
    pub env: Option<Vec<String>>,
    /// Read in a file of environment variables
    pub env_file: Option<Vec<String>>,
    /// Expose a port or a range of ports
    pub expose: Option<Vec<String>>,
    /// GPU devices to add to the container ('all' to pass all GPUs)
    pub gpus: Option<String>,
    /// Add additional groups to join
    pub group_add: Option<Vec<String>>,
    /// Command to run to check health
    pub health_cmd: Option<String>,
    /// Time between running the check (ms|s|m|h) (default 0s)
    pub health_interval: Option<String>,
    /// Consecutive failures needed to report unhealthy
    pub health_retries: Option<i64>,
    /// Start period for the container to initialize before starting health-retries countdown (ms|s|m|h) (default 0s)
    pub health_start_period: Option<String>,
    /// Maximum time to allow one check to run (ms|s|m|h) (default 0s)
    pub health_timeout: Option<String>,
    /// Print usage
    pub help: Option<bool>,
    /// Container host name
    pub hostname: Option<String>,
    /// Run an init inside the container that forwards signals and reaps processes
    pub init: Option<bool>,
    /// Keep STDIN open even if not attached
    pub interactive: Option<bool>,
    /// Maximum IO bandwidth limit for the system drive (Windows only)
    pub io_maxbandwidth: Option<String>,
    /// Maximum IOps limit for the system drive (Windows only)
    pub io_maxiops: Option<u64>,
    /// IPv4 address (e.g., 172.30.100.104)
    pub ip: Option<String>,
    /// IPv6 address (e.g., 2001:db8::33)
    pub ip6: Option<String>,
    /// IPC mode to use
    pub ipc: Option<String>,
    /// Container isolation technology
    pub isolation: Option<String>,
    /// Kernel memory limit
    pub kernel_memory: Option<String>,
    /// Set meta data on a container
    pub label: Option<Vec<String>>,
    /// Read in a line delimited file of labels
    pub label_file: Option<Vec<String>>,
    /// Add link to another container
    pub link: Option<Vec<String>>,
    /// Container IPv4/IPv6 link-local addresses
    pub link_local_ip: Option<Vec<String>>,
    /// Logging driver for the container
    pub log_driver: Option<String>,
    /// Log driver options
    pub log_opt: Option<Vec<String>>,
    /// Container MAC address (e.g., 92:d0:c6:0a:29:33)
    pub mac_address: Option<String>,
    /// Memory limit
    pub memory: Option<String>,
    /// Memory soft limit
    pub memory_reservation: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Tune container memory swappiness (0 to 100)
    pub memory_swappiness: Option<i64>,
    /// Attach a filesystem mount to the container
    pub mount: Option<String>,
    /// Assign a name to the container
    pub name: Option<String>,
    /// Connect a container to a network
    pub net: Option<String>,
    /// Add network-scoped alias for the container
    pub net_alias: Option<Vec<String>>,
    /// Connect a container to a network
    pub network: Option<String>,
    /// Add network-scoped alias for the container
    pub network_alias: Option<Vec<String>>,
    /// Disable any container-specified HEALTHCHECK
    pub no_healthcheck: Option<bool>,
    /// Disable OOM Killer
    pub oom_kill_disable: Option<bool>,
    /// Tune host's OOM preferences (-1000 to 1000)
    pub oom_score_adj: Option<i64>,
    /// PID namespace to use
    pub pid: Option<String>,
    /// Tune container pids limit (set -1 for unlimited)
    pub pids_limit: Option<i64>,
    /// Set platform if server is multi-platform capable
    pub platform: Option<String>,
    /// Give extended privileges to this container
    pub privileged: Option<bool>,
    /// Publish a container's port(s) to the host
    pub publish: Option<Vec<String>>,
    /// Publish all exposed ports to random ports
    pub publish_all: Option<bool>,
    /// Pull image before running ("always"|"missing"|"never")
    pub pull: Option<String>,
    /// Mount the container's root filesystem as read only
    pub read_only: Option<bool>,
    /// Restart policy to apply when a container exits
    pub restart: Option<String>,
    /// Automatically remove the container when it exits
    pub rm: Option<bool>,
    /// Runtime to use for this container
    pub runtime: Option<String>,
    /// Security Options
    pub security_opt: Option<Vec<String>>,
    /// Size of /dev/shm
    pub shm_size: Option<String>,
    /// Proxy received signals to the process
    pub sig_proxy: Option<bool>,
    /// Signal to stop a container
    pub stop_signal: Option<String>,
    /// Timeout (in seconds) to stop a container
    pub stop_timeout: Option<i64>,
    /// Storage driver options for the container
    pub storage_opt: Option<Vec<String>>,
    /// Sysctl options
    pub sysctl: Option<HashMap<String, String>>,
    /// Mount a tmpfs directory
    pub tmpfs: Option<Vec<String>>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Ulimit options
    pub ulimit: Option<String>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// User namespace to use
    pub userns: Option<String>,
    /// UTS namespace to use
    pub uts: Option<String>,
    /// Bind mount a volume
    pub volume: Option<Vec<String>>,
    /// Optional volume driver for the container
    pub volume_driver: Option<String>,
    /// Mount volumes from the specified container(s)
    pub volumes_from: Option<Vec<String>>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker run`.
///
/// ```text
/// run [OPTIONS] IMAGE [COMMAND] [ARG...]
/// Run a command in a new container
/// ```
pub fn docker_run_cmd(opt: DockerRunOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["run".to_string()];
    if let Some(values) = opt.add_host {
        for value in values {
            cargs.push("--add-host".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.attach {
        for value in values {
            cargs.push("--attach".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.blkio_weight {
        cargs.push(format!("--blkio-weight={value}"));
    }
    if let Some(values) = opt.blkio_weight_device {
        for value in values {
            cargs.push("--blkio-weight-device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_add {
        for value in values {
            cargs.push("--cap-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_drop {
        for value in values {
            cargs.push("--cap-drop".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.cgroup_parent {
        cargs.push(format!("--cgroup-parent={value}"));
    }
    if let Some(value) = opt.cgroupns {
        cargs.push(format!("--cgroupns={value}"));
    }
    if let Some(value) = opt.cidfile {
        cargs.push(format!("--cidfile={value}"));
    }
    if let Some(value) = opt.cpu_count {
        cargs.push(format!("--cpu-count={value}"));
    }
    if let Some(value) = opt.cpu_percent {
        cargs.push(format!("--cpu-percent={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_rt_period {
        cargs.push(format!("--cpu-rt-period={value}"));
    }
    if let Some(value) = opt.cpu_rt_runtime {
        cargs.push(format!("--cpu-rt-runtime={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpus {
        cargs.push(format!("--cpus={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(values) = opt.device {
        for value in values {
            cargs.push("--device".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_cgroup_rule {
        for value in values {
            cargs.push("--device-cgroup-rule".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_bps {
        for value in values {
            cargs.push("--device-read-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_read_iops {
        for value in values {
            cargs.push("--device-read-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_bps {
        for value in values {
            cargs.push("--device-write-bps".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.device_write_iops {
        for value in values {
            cargs.push("--device-write-iops".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.disable_content_trust {
        cargs.push(format!("--disable-content-trust={value}"));
    }
    if let Some(values) = opt.dns {
        for value in values {
            cargs.push("--dns".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_opt {
        for value in values {
            cargs.push("--dns-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_option {
        for value in values {
            cargs.push("--dns-option".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_search {
        for value in values {
            cargs.push("--dns-search".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.domainname {
        cargs.push(format!("--domainname={value}"));
    }
    if let Some(value) = opt.entrypoint {
        cargs.push(format!("--entrypoint={value}"));
    }
    if let Some(values) = opt.env {
        for value in values {
            cargs.push("--env".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_file {
        for value in values {
            cargs.push("--env-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.expose {
        for value in values {
            cargs.push("--expose".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.gpus {
        cargs.push(format!("--gpus={value}"));
    }
    if let Some(values) = opt.group_add {
        for value in values {
            cargs.push("--group-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.health_cmd {
        cargs.push(format!("--health-cmd={value}"));
    }
    if let Some(value) = opt.health_interval {
        cargs.push(format!("--health-interval={value}"));
    }
    if let Some(value) = opt.health_retries {
        cargs.push(format!("--health-retries={value}"));
    }
    if let Some(value) = opt.health_start_period {
        cargs.push(format!("--health-start-period={value}"));
    }
    if let Some(value) = opt.health_timeout {
        cargs.push(format!("--health-timeout={value}"));
    }
    if let Some(value) = opt.help {
        cargs.push(format!("--help={value}"));
    }
    if let Some(value) = opt.hostname {
        cargs.push(format!("--hostname={value}"));
    }
    if let Some(value) = opt.init {
        cargs.push(format!("--init={value}"));
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    if let Some(value) = opt.io_maxbandwidth {
        cargs.push(format!("--io-maxbandwidth={value}"));
    }
    if let Some(value) = opt.io_maxiops {
        cargs.push(format!("--io-maxiops={value}"));
    }
    if let Some(value) = opt.ip {
        cargs.push(format!("--ip={value}"));
    }
    if let Some(value) = opt.ip6 {
        cargs.push(format!("--ip6={value}"));
    }
    if let Some(value) = opt.ipc {
        cargs.push(format!("--ipc={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(value) = opt.kernel_memory {
        cargs.push(format!("--kernel-memory={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.label_file {
        for value in values {
            cargs.push("--label-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link {
        for value in values {
            cargs.push("--link".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.link_local_ip {
        for value in values {
            cargs.push("--link-local-ip".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.log_driver {
        cargs.push(format!("--log-driver={value}"));
    }
    if let Some(values) = opt.log_opt {
        for value in values {
            cargs.push("--log-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.mac_address {
        cargs.push(format!("--mac-address={value}"));
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_reservation {
        cargs.push(format!("--memory-reservation={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.memory_swappiness {
        cargs.push(format!("--memory-swappiness={value}"));
    }
    if let Some(value) = opt.mount {
        cargs.push(format!("--mount={value}"));
    }
    if let Some(value) = opt.name {
        cargs.push(format!("--name={value}"));
    }
    if let Some(value) = opt.net {
        cargs.push(format!("--net={value}"));
    }
    if let Some(values) = opt.net_alias {
        for value in values {
            cargs.push("--net-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(values) = opt.network_alias {
        for value in values {
            cargs.push("--network-alias".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.no_healthcheck {
        cargs.push(format!("--no-healthcheck={value}"));
    }
    if let Some(value) = opt.oom_kill_disable {
        cargs.push(format!("--oom-kill-disable={value}"));
    }
    if let Some(value) = opt.oom_score_adj {
        cargs.push(format!("--oom-score-adj={value}"));
    }
    if let Some(value) = opt.pid {
        cargs.push(format!("--pid={value}"));
    }
    if let Some(value) = opt.pids_limit {
        cargs.push(format!("--pids-limit={value}"));
    }
    if let Some(value) = opt.platform {
        cargs.push(format!("--platform={value}"));
    }
    if let Some(value) = opt.privileged {
        cargs.push(format!("--privileged={value}"));
    }
    if let Some(values) = opt.publish {
        for value in values {
            cargs.push("--publish".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.publish_all {
        cargs.push(format!("--publish-all={value}"));
    }
    if let Some(value) = opt.pull {
        cargs.push(format!("--pull={value}"));
    }
    if let Some(value) = opt.read_only {
        cargs.push(format!("--read-only={value}"));
    }
    if let Some(value) = opt.restart {
        cargs.push(format!("--restart={value}"));
    }
    if let Some(value) = opt.rm {
        cargs.push(format!("--rm={value}"));
    }
    if let Some(value) = opt.runtime {
        cargs.push(format!("--runtime={value}"));
    }
    if let Some(values) = opt.security_opt {
        for value in values {
            cargs.push("--security-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.shm_size {
        cargs.push(format!("--shm-size={value}"));
    }
    if let Some(value) = opt.sig_proxy {
        cargs.push(format!("--sig-proxy={value}"));
    }
    if let Some(value) = opt.stop_signal {
        cargs.push(format!("--stop-signal={value}"));
    }
    if let Some(value) = opt.stop_timeout {
        cargs.push(format!("--stop-timeout={value}"));
    }
    if let Some(values) = opt.storage_opt {
        for value in values {
            cargs.push("--storage-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(entries) = opt.sysctl {
        for (key, value) in entries {
            cargs.push("--sysctl".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    if let Some(values) = opt.tmpfs {
        for value in values {
            cargs.push("--tmpfs".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.userns {
        cargs.push(format!("--userns={value}"));
    }
    if let Some(value) = opt.uts {
        cargs.push(format!("--uts={value}"));
    }
    if let Some(values) = opt.volume {
        for value in values {
            cargs.push("--volume".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.volume_driver {
        cargs.push(format!("--volume-driver={value}"));
    }
    if let Some(values) = opt.volumes_from {
        for value in values {
            cargs.push("--volumes-from".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker save`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSaveOption {
    /// Write to a file, instead of STDOUT
    pub output: Option<String>,
}

/// Wrapper for `docker save`.
///
/// ```text
/// save [OPTIONS] IMAGE [IMAGE...]
/// Save one or more images to a tar archive (streamed to STDOUT by default)
/// ```
pub fn docker_save_cmd(opt: DockerSaveOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["save".to_string()];
    if let Some(value) = opt.output {
        cargs.push(format!("--output={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker search`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSearchOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print search using a Go template
    pub format: Option<String>,
    /// Max number of search results
    pub limit: Option<i64>,
    /// Don't truncate output
    pub no_trunc: Option<bool>,
}

/// Wrapper for `docker search`.
///
/// ```text
/// search [OPTIONS] TERM
/// Search the Docker Hub for images
/// ```
pub fn docker_search_cmd(opt: DockerSearchOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["search".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.limit {
        cargs.push(format!("--limit={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker secret`.
///
/// ```text
/// secret
/// Manage Docker secrets
/// ```
pub fn docker_secret_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["secret".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker secret create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSecretCreateOption {
    /// Secret driver
    pub driver: Option<String>,
    /// Secret labels
    pub label: Option<Vec<String>>,
    /// Template driver
    pub template_driver: Option<String>,
}

/// Wrapper for `docker secret create`.
///
/// ```text
/// create [OPTIONS] SECRET [file|-]
/// Create a secret from a file or STDIN as content
/// ```
pub fn docker_secret_create_cmd(opt: DockerSecretCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["secret".to_string(), "create".to_string()];
    if let Some(value) = opt.driver {
        cargs.push(format!("--driver={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.template_driver {
        cargs.push(format!("--template-driver={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker secret inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSecretInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Print the information in a human friendly format
    pub pretty: Option<bool>,
}

/// Wrapper for `docker secret inspect`.
///
/// ```text
/// inspect [OPTIONS] SECRET [SECRET...]
/// Display detailed information on one or more secrets
/// ```
pub fn docker_secret_inspect_cmd(opt: DockerSecretInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["secret".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.pretty {
        cargs.push(format!("--pretty={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker secret ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSecretLsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print secrets using a Go template
    pub format: Option<String>,
    /// Only display IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker secret ls`.
///
/// ```text
/// ls [OPTIONS]
/// List secrets
/// ```
pub fn docker_secret_ls_cmd(opt: DockerSecretLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["secret".to_string(), "ls".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker secret rm`.
///
/// ```text
/// rm SECRET [SECRET...]
/// Remove one or more secrets
/// ```
pub fn docker_secret_rm_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["secret".to_string(), "rm".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker service`.
///
/// ```text
/// service
/// Manage services
/// ```
pub fn docker_service_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServiceCreateOption {
    /// Add Linux capabilities
    pub cap_add: Option<Vec<String>>,
    /// Drop Linux capabilities
    pub cap_drop: Option<Vec<String>>,
    /// Specify configurations to expose to the service
    pub config: Option<String>,
    /// Placement constraints
    pub constraint: Option<Vec<String>>,
    /// Container labels
    pub container_label: Option<Vec<String>>,
    /// Credential spec for managed service account (Windows only)
    pub credential_spec: Option<String>,
    /// Exit immediately instead of waiting for the service to converge
    pub detach: Option<bool>,
    /// Set custom DNS servers
    pub dns: Option<Vec<String>>,
    /// Set DNS options
    pub dns_option: Option<Vec<String>>,
    /// Set custom DNS search domains
    pub dns_search: Option<Vec<String>>,
    /// Endpoint mode (vip or dnsrr)
    pub endpoint_mode: Option<String>,
    /// Overwrite the default ENTRYPOINT of the image
    pub entrypoint: Option<String>,
    /// Set environment variables
    pub env: Option<Vec<String>>,
    /// Read in a file of environment variables
    pub env_file: Option<Vec<String>>,
    /// User defined resources
    pub generic_resource: Option<Vec<String>>,
    /// Set one or more supplementary user groups for the container
    pub group: Option<Vec<String>>,
    /// Command to run to check health
    pub health_cmd: Option<String>,
    /// Time between running the check (ms|s|m|h)
    pub health_interval: Option<String>,
    /// Consecutive failures needed to report unhealthy
    pub health_retries: Option<i64>,
    /// Start period for the container to initialize before counting retries towards unstable (ms|s|m|h)
    pub health_start_period: Option<String>,
    /// Maximum time to allow one check to run (ms|s|m|h)
    pub health_timeout: Option<String>,
    /// Set one or more custom host-to-IP mappings (host:ip)
    pub host: Option<Vec<String>>,
    /// Container hostname
    pub hostname: Option<String>,
    /// Use an init inside each service container to forward signals and reap processes
    pub init: Option<bool>,
    /// Service container isolation mode
    pub isolation: Option<String>,
    /// Service labels
    pub label: Option<Vec<String>>,
    /// Limit CPUs
    pub limit_cpu: Option<String>,
    /// Limit Memory
    pub limit_memory: Option<String>,
    /// Limit maximum number of processes (default 0 = unlimited)
    pub limit_pids: Option<i64>,
    /// Logging driver for service
    pub log_driver: Option<String>,
    /// Logging driver options
    pub log_opt: Option<Vec<String>>,
    /// Number of job tasks to run concurrently (default equal to --replicas)
    pub max_concurrent: Option<u64>,
    /// Service mode (replicated, global, replicated-job, or global-job)
    pub mode: Option<String>,
    /// Attach a filesystem mount to the service
    pub mount: Option<String>,
    /// Service name
    pub name: Option<String>,
    /// Network attachments
    pub network: Option<String>,
    /// Disable any container-specified HEALTHCHECK
    pub no_healthcheck: Option<bool>,
    /// Do not query the registry to resolve image digest and supported platforms
    pub no_resolve_image: Option<bool>,
    /// Add a placement preference
    pub placement_pref: Option<String>,
    /// Publish a port as a node port
    pub publish: Option<String>,
    /// Suppress progress output
    pub quiet: Option<bool>,
    /// Mount the container's root filesystem as read only
    pub read_only: Option<bool>,
    /// Number of tasks
    pub replicas: Option<u64>,
    /// Maximum number of tasks per node (default 0 = unlimited)
    pub replicas_max_per_node: Option<u64>,
    /// Reserve CPUs
    pub reserve_cpu: Option<String>,
    /// Reserve Memory
    pub reserve_memory: Option<String>,
    /// Restart when condition is met ("none"|"on-failure"|"any") (default "any")
    pub restart_condition: Option<String>,
    /// Delay between restart attempts (ns|us|ms|s|m|h) (default 5s)
    pub restart_delay: Option<String>,
    /// Maximum number of restarts before giving up
    pub restart_max_attempts: Option<u64>,
    /// Window used to evaluate the restart policy (ns|us|ms|s|m|h)
    pub restart_window: Option<String>,
    /// Delay between task rollbacks (ns|us|ms|s|m|h) (default 0s)
    pub rollback_delay: Option<String>,
    /// Action on rollback failure ("pause"|"continue") (default "pause")
    pub rollback_failure_action: Option<String>,
    /// Failure rate to tolerate during a rollback (default 0)
    pub rollback_max_failure_ratio: Option<String>,
    /// Duration after each task rollback to monitor for failure (ns|us|ms|s|m|h) (default 5s)
    pub rollback_monitor: Option<String>,
    /// Rollback order ("start-first"|"stop-first") (default "stop-first")
    pub rollback_order: Option<String>,
    /// Maximum number of tasks rolled back simultaneously (0 to roll back all at once)
    pub rollback_parallelism: Option<u64>,
    /// Specify secrets to expose to the service
    pub secret: Option<String>,
    /// Time to wait before force killing a container (ns|us|ms|s|m|h) (default 10s)
    pub stop_grace_period: Option<String>,
    /// Signal to stop the container
    pub stop_signal: Option<String>,
    /// Sysctl options
    pub sysctl: Option<Vec<String>>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Ulimit options
    pub ulimit: Option<String>,
    /// Delay between updates (ns|us|ms|s|m|h) (default 0s)
    pub update_delay: Option<String>,
    /// Action on update failure ("pause"|"continue"|"rollback") (default "pause")
    pub update_failure_action: Option<String>,
    /// Failure rate to tolerate during an update (default 0)
    pub update_max_failure_ratio: Option<String>,
    /// Duration after each task update to monitor for failure (ns|us|ms|s|m|h) (default 5s)
    pub update_monitor: Option<String>,
    /// Update order ("start-first"|"stop-first") (default "stop-first")
    pub update_order: Option<String>,
    /// Maximum number of tasks updated simultaneously (0 to update all at once)
    pub update_parallelism: Option<u64>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// Send registry authentication details to swarm agents
    pub with_registry_auth: Option<bool>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker service create`.
///
/// ```text
/// create [OPTIONS] IMAGE [COMMAND] [ARG...]
/// Create a new service
/// ```
pub fn docker_service_create_cmd(opt: DockerServiceCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "create".to_string()];
    if let Some(values) = opt.cap_add {
        for value in values {
            cargs.push("--cap-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_drop {
        for value in values {
            cargs.push("--cap-drop".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.config {
        cargs.push(format!("--config={value}"));
    }
    if let Some(values) = opt.constraint {
        for value in values {
            cargs.push("--constraint".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.container_label {
        for value in values {
            cargs.push("--container-label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.credential_spec {
        cargs.push(format!("--credential-spec={value}"));
    }
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(values) = opt.dns {
        for value in values {
            cargs.push("--dns".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_option {
        for value in values {
            cargs.push("--dns-option".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_search {
        for value in values {
            cargs.push("--dns-search".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.endpoint_mode {
        cargs.push(format!("--endpoint-mode={value}"));
    }
    if let Some(value) = opt.entrypoint {
        cargs.push(format!("--entrypoint={value}"));
    }
    if let Some(values) = opt.env {
        for value in values {
            cargs.push("--env".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_file {
        for value in values {
            cargs.push("--env-file".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.generic_resource {
        for value in values {
            cargs.push("--generic-resource".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.group {
        for value in values {
            cargs.push("--group".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.health_cmd {
        cargs.push(format!("--health-cmd={value}"));
    }
    if let Some(value) = opt.health_interval {
        cargs.push(format!("--health-interval={value}"));
    }
    if let Some(value) = opt.health_retries {
        cargs.push(format!("--health-retries={value}"));
    }
    if let Some(value) = opt.health_start_period {
        cargs.push(format!("--health-start-period={value}"));
    }
    if let Some(value) = opt.health_timeout {
        cargs.push(format!("--health-timeout={value}"));
    }
    if let Some(values) = opt.host {
        for value in values {
            cargs.push("--host".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.hostname {
        cargs.push(format!("--hostname={value}"));
    }
    if let Some(value) = opt.init {
        cargs.push(format!("--init={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.limit_cpu {
        cargs.push(format!("--limit-cpu={value}"));
    }
    if let Some(value) = opt.limit_memory {
        cargs.push(format!("--limit-memory={value}"));
    }
    if let Some(value) = opt.limit_pids {
        cargs.push(format!("--limit-pids={value}"));
    }
    if let Some(value) = opt.log_driver {
        cargs.push(format!("--log-driver={value}"));
    }
    if let Some(values) = opt.log_opt {
        for value in values {
            cargs.push("--log-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.max_concurrent {
        cargs.push(format!("--max-concurrent={value}"));
    }
    if let Some(value) = opt.mode {
        cargs.push(format!("--mode={value}"));
    }
    if let Some(value) = opt.mount {
        cargs.push(format!("--mount={value}"));
    }
    if let Some(value) = opt.name {
        cargs.push(format!("--name={value}"));
    }
    if let Some(value) = opt.network {
        cargs.push(format!("--network={value}"));
    }
    if let Some(value) = opt.no_healthcheck {
        cargs.push(format!("--no-healthcheck={value}"));
    }
    if let Some(value) = opt.no_resolve_image {
        cargs.push(format!("--no-resolve-image={value}"));
    }
    if let Some(value) = opt.placement_pref {
        cargs.push(format!("--placement-pref={value}"));
    }
    if let Some(value) = opt.publish {
        cargs.push(format!("--publish={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.read_only {
        cargs.push(format!("--read-only={value}"));
    }
    if let Some(value) = opt.replicas {
        cargs.push(format!("--replicas={value}"));
    }
    if let Some(value) = opt.replicas_max_per_node {
        cargs.push(format!("--replicas-max-per-node={value}"));
    }
    if let Some(value) = opt.reserve_cpu {
        cargs.push(format!("--reserve-cpu={value}"));
    }
    if let Some(value) = opt.reserve_memory {
        cargs.push(format!("--reserve-memory={value}"));
    }
    if let Some(value) = opt.restart_condition {
        cargs.push(format!("--restart-condition={value}"));
    }
    if let Some(value) = opt.restart_delay {
        cargs.push(format!("--restart-delay={value}"));
    }
    if let Some(value) = opt.restart_max_attempts {
        cargs.push(format!("--restart-max-attempts={value}"));
    }
    if let Some(value) = opt.restart_window {
        cargs.push(format!("--restart-window={value}"));
    }
    if let Some(value) = opt.rollback_delay {
        cargs.push(format!("--rollback-delay={value}"));
    }
    if let Some(value) = opt.rollback_failure_action {
        cargs.push(format!("--rollback-failure-action={value}"));
    }
    if let Some(value) = opt.rollback_max_failure_ratio {
        cargs.push(format!("--rollback-max-failure-ratio={value}"));
    }
    if let Some(value) = opt.rollback_monitor {
        cargs.push(format!("--rollback-monitor={value}"));
    }
    if let Some(value) = opt.rollback_order {
        cargs.push(format!("--rollback-order={value}"));
    }
    if let Some(value) = opt.rollback_parallelism {
        cargs.push(format!("--rollback-parallelism={value}"));
    }
    if let Some(value) = opt.secret {
        cargs.push(format!("--secret={value}"));
    }
    if let Some(value) = opt.stop_grace_period {
        cargs.push(format!("--stop-grace-period={value}"));
    }
    if let Some(value) = opt.stop_signal {
        cargs.push(format!("--stop-signal={value}"));
    }
    if let Some(values) = opt.sysctl {
        for value in values {
            cargs.push("--sysctl".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.ulimit {
        cargs.push(format!("--ulimit={value}"));
    }
    if let Some(value) = opt.update_delay {
        cargs.push(format!("--update-delay={value}"));
    }
    if let Some(value) = opt.update_failure_action {
        cargs.push(format!("--update-failure-action={value}"));
    }
    if let Some(value) = opt.update_max_failure_ratio {
        cargs.push(format!("--update-max-failure-ratio={value}"));
    }
    if let Some(value) = opt.update_monitor {
        cargs.push(format!("--update-monitor={value}"));
    }
    if let Some(value) = opt.update_order {
        cargs.push(format!("--update-order={value}"));
    }
    if let Some(value) = opt.update_parallelism {
        cargs.push(format!("--update-parallelism={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.with_registry_auth {
        cargs.push(format!("--with-registry-auth={value}"));
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServiceInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Print the information in a human friendly format
    pub pretty: Option<bool>,
}

/// Wrapper for `docker service inspect`.
///
/// ```text
/// inspect [OPTIONS] SERVICE [SERVICE...]
/// Display detailed information on one or more services
/// ```
pub fn docker_service_inspect_cmd(opt: DockerServiceInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.pretty {
        cargs.push(format!("--pretty={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service logs`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServiceLogsOption {
    /// Show extra details provided to logs
    pub details: Option<bool>,
    /// Follow log output
    pub follow: Option<bool>,
    /// Do not map IDs to Names in output
    pub no_resolve: Option<bool>,
    /// Do not include task IDs in output
    pub no_task_ids: Option<bool>,
    /// Do not truncate output
    pub no_trunc: Option<bool>,
    /// Do not neatly format logs
    pub raw: Option<bool>,
    /// Show logs since timestamp (e.g. 2013-01-02T13:23:37Z) or relative (e.g. 42m for 42 minutes)
    pub since: Option<String>,
    /// Number of lines to show from the end of the logs
    pub tail: Option<String>,
    /// Show timestamps
    pub timestamps: Option<bool>,
}

/// Wrapper for `docker service logs`.
///
/// ```text
/// logs [OPTIONS] SERVICE|TASK
/// Fetch the logs of a service or task
/// ```
pub fn docker_service_logs_cmd(opt: DockerServiceLogsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "logs".to_string()];
    if let Some(value) = opt.details {
        cargs.push(format!("--details={value}"));
    }
    if let Some(value) = opt.follow {
        cargs.push(format!("--follow={value}"));
    }
    if let Some(value) = opt.no_resolve {
        cargs.push(format!("--no-resolve={value}"));
    }
    if let Some(value) = opt.no_task_ids {
        cargs.push(format!("--no-task-ids={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.raw {
        cargs.push(format!("--raw={value}"));
    }
    if let Some(value) = opt.since {
        cargs.push(format!("--since={value}"));
    }
    if let Some(value) = opt.tail {
        cargs.push(format!("--tail={value}"));
    }
    if let Some(value) = opt.timestamps {
        cargs.push(format!("--timestamps={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServiceLsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print services using a Go template
    pub format: Option<String>,
    /// Only display IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker service ls`.
///
/// ```text
/// ls [OPTIONS]
/// List services
/// ```
pub fn docker_service_ls_cmd(opt: DockerServiceLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "ls".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service ps`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServicePsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print tasks using a Go template
    pub format: Option<String>,
    /// Do not map IDs to Names
    pub no_resolve: Option<bool>,
    /// Do not truncate output
    pub no_trunc: Option<bool>,
    /// Only display task IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker service ps`.
///
/// ```text
/// ps [OPTIONS] SERVICE [SERVICE...]
/// List the tasks of one or more services
/// ```
pub fn docker_service_ps_cmd(opt: DockerServicePsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "ps".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_resolve {
        cargs.push(format!("--no-resolve={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker service rm`.
///
/// ```text
/// rm SERVICE [SERVICE...]
/// Remove one or more services
/// ```
pub fn docker_service_rm_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "rm".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service rollback`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServiceRollbackOption {
    /// Exit immediately instead of waiting for the service to converge
    pub detach: Option<bool>,
    /// Suppress progress output
    pub quiet: Option<bool>,
}

/// Wrapper for `docker service rollback`.
///
/// ```text
/// rollback [OPTIONS] SERVICE
/// Revert changes to a service's configuration
/// ```
pub fn docker_service_rollback_cmd(opt: DockerServiceRollbackOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "rollback".to_string()];
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service scale`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServiceScaleOption {
    /// Exit immediately instead of waiting for the service to converge
    pub detach: Option<bool>,
}

/// Wrapper for `docker service scale`.
///
/// ```text
/// scale SERVICE=REPLICAS [SERVICE=REPLICAS...]
/// Scale one or multiple replicated services
/// ```
pub fn docker_service_scale_cmd(opt: DockerServiceScaleOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "scale".to_string()];
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker service update`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerServiceUpdateOption {
    /// Service command args
    pub args: Option<String>,
    /// Add Linux capabilities
    pub cap_add: Option<Vec<String>>,
    /// Drop Linux capabilities
    pub cap_drop: Option<Vec<String>>,
    /// Add or update a config file on a service
    pub config_add: Option<String>,
    /// Remove a configuration file
    pub config_rm: Option<Vec<String>>,
    /// Add or update a placement constraint
    pub constraint_add: Option<Vec<String>>,
    /// Remove a constraint
    pub constraint_rm: Option<Vec<String>>,
    /// Add or update a container label
    pub container_label_add: Option<Vec<String>>,
    /// Remove a container label by its key
    pub container_label_rm: Option<Vec<String>>,
    /// Credential spec for managed service account (Windows only)
    pub credential_spec: Option<String>,
    /// Exit immediately instead of waiting for the service to converge
    pub detach: Option<bool>,
    /// Add or update a custom DNS server
    pub dns_add: Option<Vec<String>>,
    /// Add or update a DNS option
    pub dns_option_add: Option<Vec<String>>,
    /// Remove a DNS option
    pub dns_option_rm: Option<Vec<String>>,
    /// Remove a custom DNS server
    pub dns_rm: Option<Vec<String>>,
    /// Add or update a custom DNS search domain
    pub dns_search_add: Option<Vec<String>>,
    /// Remove a DNS search domain
    pub dns_search_rm: Option<Vec<String>>,
    /// Endpoint mode (vip or dnsrr)
    pub endpoint_mode: Option<String>,
    /// Overwrite the default ENTRYPOINT of the image
    pub entrypoint: Option<String>,
    /// Add or update an environment variable
    pub env_add: Option<Vec<String>>,
    /// Remove an environment variable
    pub env_rm: Option<Vec<String>>,
    /// Force update even if no changes require it
    pub force: Option<bool>,
    /// Add a Generic resource
    pub generic_resource_add: Option<Vec<String>>,
    /// Remove a Generic resource
    pub generic_resource_rm: Option<Vec<String>>,
    /// Add an additional supplementary user group to the container
    pub group_add: Option<Vec<String>>,
    /// Remove a previously added supplementary user group from the container
    pub group_rm: Option<Vec<String>>,
    /// Command to run to check health
    pub health_cmd: Option<String>,
    /// Time between running the check (ms|s|m|h)
    pub health_interval: Option<String>,
    /// Consecutive failures needed to report unhealthy
    pub health_retries: Option<i64>,
    /// Start period for the container to initialize before counting retries towards unstable (ms|s|m|h)
    pub health_start_period: Option<String>,
    /// Maximum time to allow one check to run (ms|s|m|h)
    pub health_timeout: Option<String>,
    /// Add a custom host-to-IP mapping (host:ip)
    pub host_add: Option<Vec<String>>,
    /// Remove a custom host-to-IP mapping (host:ip)
    pub host_rm: Option<Vec<String>>,
    /// Container hostname
    pub hostname: Option<String>,
    /// Service image tag
    pub image: Option<String>,
    /// Use an init inside each service container to forward signals and reap processes
    pub init: Option<bool>,
    /// Service container isolation mode
    pub isolation: Option<String>,
    /// Add or update a service label
    pub label_add: Option<Vec<String>>,
    /// Remove a label by its key
    pub label_rm: Option<Vec<String>>,
    /// Limit CPUs
    pub limit_cpu: Option<String>,
    /// Limit Memory
    pub limit_memory: Option<String>,
    /// Limit maximum number of processes (default 0 = unlimited)
    pub limit_pids: Option<i64>,
    /// Logging driver for service
    pub log_driver: Option<String>,
    /// Logging driver options
    pub log_opt: Option<Vec<String>>,
    /// Number of job tasks to run concurrently (default equal to --replicas)
    pub max_concurrent: Option<u64>,
    /// Add or update a mount on a service
    pub mount_add: Option<String>,
    /// Remove a mount by its target path
    pub mount_rm: Option<Vec<String>>,
    /// Add a network
    pub network_add: Option<String>,
    /// Remove a network
    pub network_rm: Option<Vec<String>>,
    /// Disable any container-specified HEALTHCHECK
    pub no_healthcheck: Option<bool>,
    /// Do not query the registry to resolve image digest and supported platforms
    pub no_resolve_image: Option<bool>,
    /// Add a placement preference
    pub placement_pref_add: Option<String>,
    /// Remove a placement preference
    pub placement_pref_rm: Option<String>,
    /// Add or update a published port
    pub publish_add: Option<String>,
    /// Remove a published port by its target port
    pub publish_rm: Option<String>,
    /// Suppress progress output
    pub quiet: Option<bool>,
    /// Mount the container's root filesystem as read only
    pub read_only: Option<bool>,
    /// Number of tasks
    pub replicas: Option<u64>,
    /// Maximum number of tasks per node (default 0 = unlimited)
    pub replicas_max_per_node: Option<u64>,
    /// Reserve CPUs
    pub reserve_cpu: Option<String>,
    /// Reserve Memory
    pub reserve_memory: Option<String>,
    /// Restart when condition is met ("none"|"on-failure"|"any")
    pub restart_condition: Option<String>,
    /// Delay between restart attempts (ns|us|ms|s|m|h)
    pub restart_delay: Option<String>,
    /// Maximum number of restarts before giving up
    pub restart_max_attempts: Option<u64>,
    /// Window used to evaluate the restart policy (ns|us|ms|s|m|h)
    pub restart_window: Option<String>,
    /// Rollback to previous specification
    pub rollback: Option<bool>,
    /// Delay between task rollbacks (ns|us|ms|s|m|h)
    pub rollback_delay: Option<String>,
    /// Action on rollback failure ("pause"|"continue")
    pub rollback_failure_action: Option<String>,
    /// Failure rate to tolerate during a rollback
    pub rollback_max_failure_ratio: Option<String>,
    /// Duration after each task rollback to monitor for failure (ns|us|ms|s|m|h)
    pub rollback_monitor: Option<String>,
    /// Rollback order ("start-first"|"stop-first")
    pub rollback_order: Option<String>,
    /// Maximum number of tasks rolled back simultaneously (0 to roll back all at once)
    pub rollback_parallelism: Option<u64>,
    /// Add or update a secret on a service
    pub secret_add: Option<String>,
    /// Remove a secret
    pub secret_rm: Option<Vec<String>>,
    /// Time to wait before force killing a container (ns|us|ms|s|m|h)
    pub stop_grace_period: Option<String>,
    /// Signal to stop the container
    pub stop_signal: Option<String>,
    /// Add or update a Sysctl option
    pub sysctl_add: Option<Vec<String>>,
    /// Remove a Sysctl option
    pub sysctl_rm: Option<Vec<String>>,
    /// Allocate a pseudo-TTY
    pub tty: Option<bool>,
    /// Add or update a ulimit option
    pub ulimit_add: Option<String>,
    /// Remove a ulimit option
    pub ulimit_rm: Option<Vec<String>>,
    /// Delay between updates (ns|us|ms|s|m|h)
    pub update_delay: Option<String>,
    /// Action on update failure ("pause"|"continue"|"rollback")
    pub update_failure_action: Option<String>,
    /// Failure rate to tolerate during an update
    pub update_max_failure_ratio: Option<String>,
    /// Duration after each task update to monitor for failure (ns|us|ms|s|m|h)
    pub update_monitor: Option<String>,
    /// Update order ("start-first"|"stop-first")
    pub update_order: Option<String>,
    /// Maximum number of tasks updated simultaneously (0 to update all at once)
    pub update_parallelism: Option<u64>,
    /// Username or UID (format: <name|uid>[:<group|gid>])
    pub user: Option<String>,
    /// Send registry authentication details to swarm agents
    pub with_registry_auth: Option<bool>,
    /// Working directory inside the container
    pub workdir: Option<String>,
}

/// Wrapper for `docker service update`.
///
/// ```text
/// update [OPTIONS] SERVICE
/// Update a service
/// ```
pub fn docker_service_update_cmd(opt: DockerServiceUpdateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["service".to_string(), "update".to_string()];
    if let Some(value) = opt.args {
        cargs.push(format!("--args={value}"));
    }
    if let Some(values) = opt.cap_add {
        for value in values {
            cargs.push("--cap-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.cap_drop {
        for value in values {
            cargs.push("--cap-drop".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.config_add {
        cargs.push(format!("--config-add={value}"));
    }
    if let Some(values) = opt.config_rm {
        for value in values {
            cargs.push("--config-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.constraint_add {
        for value in values {
            cargs.push("--constraint-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.constraint_rm {
        for value in values {
            cargs.push("--constraint-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.container_label_add {
        for value in values {
            cargs.push("--container-label-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.container_label_rm {
        for value in values {
            cargs.push("--container-label-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.credential_spec {
        cargs.push(format!("--credential-spec={value}"));
    }
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(values) = opt.dns_add {
        for value in values {
            cargs.push("--dns-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_option_add {
        for value in values {
            cargs.push("--dns-option-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_option_rm {
        for value in values {
            cargs.push("--dns-option-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_rm {
        for value in values {
            cargs.push("--dns-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_search_add {
        for value in values {
            cargs.push("--dns-search-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.dns_search_rm {
        for value in values {
            cargs.push("--dns-search-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.endpoint_mode {
        cargs.push(format!("--endpoint-mode={value}"));
    }
    if let Some(value) = opt.entrypoint {
        cargs.push(format!("--entrypoint={value}"));
    }
    if let Some(values) = opt.env_add {
        for value in values {
            cargs.push("--env-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.env_rm {
        for value in values {
            cargs.push("--env-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    if let Some(values) = opt.generic_resource_add {
        for value in values {
            cargs.push("--generic-resource-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.generic_resource_rm {
        for value in values {
            cargs.push("--generic-resource-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.group_add {
        for value in values {
            cargs.push("--group-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.group_rm {
        for value in values {
            cargs.push("--group-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.health_cmd {
        cargs.push(format!("--health-cmd={value}"));
    }
    if let Some(value) = opt.health_interval {
        cargs.push(format!("--health-interval={value}"));
    }
    if let Some(value) = opt.health_retries {
        cargs.push(format!("--health-retries={value}"));
    }
    if let Some(value) = opt.health_start_period {
        cargs.push(format!("--health-start-period={value}"));
    }
    if let Some(value) = opt.health_timeout {
        cargs.push(format!("--health-timeout={value}"));
    }
    if let Some(values) = opt.host_add {
        for value in values {
            cargs.push("--host-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.host_rm {
        for value in values {
            cargs.push("--host-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.hostname {
        cargs.push(format!("--hostname={value}"));
    }
    if let Some(value) = opt.image {
        cargs.push(format!("--image={value}"));
    }
    if let Some(value) = opt.init {
        cargs.push(format!("--init={value}"));
    }
    if let Some(value) = opt.isolation {
        cargs.push(format!("--isolation={value}"));
    }
    if let Some(values) = opt.label_add {
        for value in values {
            cargs.push("--label-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.label_rm {
        for value in values {
            cargs.push("--label-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.limit_cpu {
        cargs.push(format!("--limit-cpu={value}"));
    }
    if let Some(value) = opt.limit_memory {
        cargs.push(format!("--limit-memory={value}"));
    }
    if let Some(value) = opt.limit_pids {
        cargs.push(format!("--limit-pids={value}"));
    }
    if let Some(value) = opt.log_driver {
        cargs.push(format!("--log-driver={value}"));
    }
    if let Some(values) = opt.log_opt {
        for value in values {
            cargs.push("--log-opt".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.max_concurrent {
        cargs.push(format!("--max-concurrent={value}"));
    }
    if let Some(value) = opt.mount_add {
        cargs.push(format!("--mount-add={value}"));
    }
    if let Some(values) = opt.mount_rm {
        for value in values {
            cargs.push("--mount-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.network_add {
        cargs.push(format!("--network-add={value}"));
    }
    if let Some(values) = opt.network_rm {
        for value in values {
            cargs.push("--network-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.no_healthcheck {
        cargs.push(format!("--no-healthcheck={value}"));
    }
    if let Some(value) = opt.no_resolve_image {
        cargs.push(format!("--no-resolve-image={value}"));
    }
    if let Some(value) = opt.placement_pref_add {
        cargs.push(format!("--placement-pref-add={value}"));
    }
    if let Some(value) = opt.placement_pref_rm {
        cargs.push(format!("--placement-pref-rm={value}"));
    }
    if let Some(value) = opt.publish_add {
        cargs.push(format!("--publish-add={value}"));
    }
    if let Some(value) = opt.publish_rm {
        cargs.push(format!("--publish-rm={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.read_only {
        cargs.push(format!("--read-only={value}"));
    }
    if let Some(value) = opt.replicas {
        cargs.push(format!("--replicas={value}"));
    }
    if let Some(value) = opt.replicas_max_per_node {
        cargs.push(format!("--replicas-max-per-node={value}"));
    }
    if let Some(value) = opt.reserve_cpu {
        cargs.push(format!("--reserve-cpu={value}"));
    }
    if let Some(value) = opt.reserve_memory {
        cargs.push(format!("--reserve-memory={value}"));
    }
    if let Some(value) = opt.restart_condition {
        cargs.push(format!("--restart-condition={value}"));
    }
    if let Some(value) = opt.restart_delay {
        cargs.push(format!("--restart-delay={value}"));
    }
    if let Some(value) = opt.restart_max_attempts {
        cargs.push(format!("--restart-max-attempts={value}"));
    }
    if let Some(value) = opt.restart_window {
        cargs.push(format!("--restart-window={value}"));
    }
    if let Some(value) = opt.rollback {
        cargs.push(format!("--rollback={value}"));
    }
    if let Some(value) = opt.rollback_delay {
        cargs.push(format!("--rollback-delay={value}"));
    }
    if let Some(value) = opt.rollback_failure_action {
        cargs.push(format!("--rollback-failure-action={value}"));
    }
    if let Some(value) = opt.rollback_max_failure_ratio {
        cargs.push(format!("--rollback-max-failure-ratio={value}"));
    }
    if let Some(value) = opt.rollback_monitor {
        cargs.push(format!("--rollback-monitor={value}"));
    }
    if let Some(value) = opt.rollback_order {
        cargs.push(format!("--rollback-order={value}"));
    }
    if let Some(value) = opt.rollback_parallelism {
        cargs.push(format!("--rollback-parallelism={value}"));
    }
    if let Some(value) = opt.secret_add {
        cargs.push(format!("--secret-add={value}"));
    }
    if let Some(values) = opt.secret_rm {
        for value in values {
            cargs.push("--secret-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.stop_grace_period {
        cargs.push(format!("--stop-grace-period={value}"));
    }
    if let Some(value) = opt.stop_signal {
        cargs.push(format!("--stop-signal={value}"));
    }
    if let Some(values) = opt.sysctl_add {
        for value in values {
            cargs.push("--sysctl-add".to_string());
            cargs.push(value);
        }
    }
    if let Some(values) = opt.sysctl_rm {
        for value in values {
            cargs.push("--sysctl-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.tty {
        cargs.push(format!("--tty={value}"));
    }
    if let Some(value) = opt.ulimit_add {
        cargs.push(format!("--ulimit-add={value}"));
    }
    if let Some(values) = opt.ulimit_rm {
        for value in values {
            cargs.push("--ulimit-rm".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.update_delay {
        cargs.push(format!("--update-delay={value}"));
    }
    if let Some(value) = opt.update_failure_action {
        cargs.push(format!("--update-failure-action={value}"));
    }
    if let Some(value) = opt.update_max_failure_ratio {
        cargs.push(format!("--update-max-failure-ratio={value}"));
    }
    if let Some(value) = opt.update_monitor {
        cargs.push(format!("--update-monitor={value}"));
    }
    if let Some(value) = opt.update_order {
        cargs.push(format!("--update-order={value}"));
    }
    if let Some(value) = opt.update_parallelism {
        cargs.push(format!("--update-parallelism={value}"));
    }
    if let Some(value) = opt.user {
        cargs.push(format!("--user={value}"));
    }
    if let Some(value) = opt.with_registry_auth {
        cargs.push(format!("--with-registry-auth={value}"));
    }
    if let Some(value) = opt.workdir {
        cargs.push(format!("--workdir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker stack`.
///
/// ```text
/// stack [OPTIONS]
/// Manage Docker stacks
/// ```
pub fn docker_stack_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stack".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker stack deploy`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStackDeployOption {
    /// Path to a Compose file, or "-" to read from stdin
    pub compose_file: Option<String>,
    /// Kubernetes namespace to use
    pub namespace: Option<String>,
    /// Prune services that are no longer referenced
    pub prune: Option<bool>,
    /// Query the registry to resolve image digest and supported platforms ("always"|"changed"|"never")
    pub resolve_image: Option<String>,
    /// Send registry authentication details to Swarm agents
    pub with_registry_auth: Option<bool>,
}

/// Wrapper for `docker stack deploy`.
///
/// ```text
/// deploy [OPTIONS] STACK
/// Deploy a new stack or update an existing stack
/// ```
pub fn docker_stack_deploy_cmd(opt: DockerStackDeployOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stack".to_string(), "deploy".to_string()];
    if let Some(value) = opt.compose_file {
        cargs.push(format!("--compose-file={value}"));
    }
    if let Some(value) = opt.namespace {
        cargs.push(format!("--namespace={value}"));
    }
    if let Some(value) = opt.prune {
        cargs.push(format!("--prune={value}"));
    }
    if let Some(value) = opt.resolve_image {
        cargs.push(format!("--resolve-image={value}"));
    }
    if let Some(value) = opt.with_registry_auth {
        cargs.push(format!("--with-registry-auth={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker stack ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStackLsOption {
    /// List stacks from all Kubernetes namespaces
    pub all_namespaces: Option<bool>,
    /// Pretty-print stacks using a Go template
    pub format: Option<String>,
    /// Kubernetes namespaces to use
    pub namespace: Option<String>,
}

/// Wrapper for `docker stack ls`.
///
/// ```text
/// ls [OPTIONS]
/// List stacks
/// ```
pub fn docker_stack_ls_cmd(opt: DockerStackLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stack".to_string(), "ls".to_string()];
    if let Some(value) = opt.all_namespaces {
        cargs.push(format!("--all-namespaces={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.namespace {
        cargs.push(format!("--namespace={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker stack ps`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStackPsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print tasks using a Go template
    pub format: Option<String>,
    /// Kubernetes namespace to use
    pub namespace: Option<String>,
    /// Do not map IDs to Names
    pub no_resolve: Option<bool>,
    /// Do not truncate output
    pub no_trunc: Option<bool>,
    /// Only display task IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker stack ps`.
///
/// ```text
/// ps [OPTIONS] STACK
/// List the tasks in the stack
/// ```
pub fn docker_stack_ps_cmd(opt: DockerStackPsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stack".to_string(), "ps".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.namespace {
        cargs.push(format!("--namespace={value}"));
    }
    if let Some(value) = opt.no_resolve {
        cargs.push(format!("--no-resolve={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker stack rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStackRmOption {
    /// Kubernetes namespace to use
    pub namespace: Option<String>,
}

/// Wrapper for `docker stack rm`.
///
/// ```text
/// rm [OPTIONS] STACK [STACK...]
/// Remove one or more stacks
/// ```
pub fn docker_stack_rm_cmd(opt: DockerStackRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stack".to_string(), "rm".to_string()];
    if let Some(value) = opt.namespace {
        cargs.push(format!("--namespace={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker stack services`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStackServicesOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Pretty-print services using a Go template
    pub format: Option<String>,
    /// Kubernetes namespace to use
    pub namespace: Option<String>,
    /// Only display IDs
    pub quiet: Option<bool>,
}

/// Wrapper for `docker stack services`.
///
/// ```text
/// services [OPTIONS] STACK
/// List the services in the stack
/// ```
pub fn docker_stack_services_cmd(opt: DockerStackServicesOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stack".to_string(), "services".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.namespace {
        cargs.push(format!("--namespace={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker start`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStartOption {
    /// Attach STDOUT/STDERR and forward signals
    pub attach: Option<bool>,
    /// Restore from this checkpoint
    pub checkpoint: Option<String>,
    /// Use a custom checkpoint storage directory
    pub checkpoint_dir: Option<String>,
    /// Override the key sequence for detaching a container
    pub detach_keys: Option<String>,
    /// Attach container's STDIN
    pub interactive: Option<bool>,
}

/// Wrapper for `docker start`.
///
/// ```text
/// start [OPTIONS] CONTAINER [CONTAINER...]
/// Start one or more stopped containers
/// ```
pub fn docker_start_cmd(opt: DockerStartOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["start".to_string()];
    if let Some(value) = opt.attach {
        cargs.push(format!("--attach={value}"));
    }
    if let Some(value) = opt.checkpoint {
        cargs.push(format!("--checkpoint={value}"));
    }
    if let Some(value) = opt.checkpoint_dir {
        cargs.push(format!("--checkpoint-dir={value}"));
    }
    if let Some(value) = opt.detach_keys {
        cargs.push(format!("--detach-keys={value}"));
    }
    if let Some(value) = opt.interactive {
        cargs.push(format!("--interactive={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker stats`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStatsOption {
    /// Show all containers (default shows just running)
    pub all: Option<bool>,
    /// Pretty-print images using a Go template
    pub format: Option<String>,
    /// Disable streaming stats and only pull the first result
    pub no_stream: Option<bool>,
    /// Do not truncate output
    pub no_trunc: Option<bool>,
}

/// Wrapper for `docker stats`.
///
/// ```text
/// stats [OPTIONS] [CONTAINER...]
/// Display a live stream of container(s) resource usage statistics
/// ```
pub fn docker_stats_cmd(opt: DockerStatsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stats".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.no_stream {
        cargs.push(format!("--no-stream={value}"));
    }
    if let Some(value) = opt.no_trunc {
        cargs.push(format!("--no-trunc={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker stop`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerStopOption {
    /// Seconds to wait for stop before killing it
    pub time: Option<i64>,
}

/// Wrapper for `docker stop`.
///
/// ```text
/// stop [OPTIONS] CONTAINER [CONTAINER...]
/// Stop one or more running containers
/// ```
pub fn docker_stop_cmd(opt: DockerStopOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["stop".to_string()];
    if let Some(value) = opt.time {
        cargs.push(format!("--time={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker swarm`.
///
/// ```text
/// swarm
/// Manage Swarm
/// ```
pub fn docker_swarm_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker swarm ca`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSwarmCaOption {
    /// Path to the PEM-formatted root CA certificate to use for the new cluster
    pub ca_cert: Option<String>,
    /// Path to the PEM-formatted root CA key to use for the new cluster
    pub ca_key: Option<String>,
    /// Validity period for node certificates (ns|us|ms|s|m|h)
    pub cert_expiry: Option<String>,
    /// Exit immediately instead of waiting for the root rotation to converge
    pub detach: Option<bool>,
    /// Specifications of one or more certificate signing endpoints
    pub external_ca: Option<String>,
    /// Suppress progress output
    pub quiet: Option<bool>,
    /// Rotate the swarm CA - if no certificate or key are provided, new ones will be generated
    pub rotate: Option<bool>,
}

/// Wrapper for `docker swarm ca`.
///
/// ```text
/// ca [OPTIONS]
/// Display and rotate the root CA
/// ```
pub fn docker_swarm_ca_cmd(opt: DockerSwarmCaOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "ca".to_string()];
    if let Some(value) = opt.ca_cert {
        cargs.push(format!("--ca-cert={value}"));
    }
    if let Some(value) = opt.ca_key {
        cargs.push(format!("--ca-key={value}"));
    }
    if let Some(value) = opt.cert_expiry {
        cargs.push(format!("--cert-expiry={value}"));
    }
    if let Some(value) = opt.detach {
        cargs.push(format!("--detach={value}"));
    }
    if let Some(value) = opt.external_ca {
        cargs.push(format!("--external-ca={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.rotate {
        cargs.push(format!("--rotate={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker swarm init`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSwarmInitOption {
    /// Advertised address (format: <ip|interface>[:port])
    pub advertise_addr: Option<String>,
    /// Enable manager autolocking (requiring an unlock key to start a stopped manager)
    pub autolock: Option<bool>,
    /// Availability of the node ("active"|"pause"|"drain")
    pub availability: Option<String>,
    /// Validity period for node certificates (ns|us|ms|s|m|h)
    pub cert_expiry: Option<String>,
    /// Address or interface to use for data path traffic (format: <ip|interface>)
    pub data_path_addr: Option<String>,
    /// Port number to use for data path traffic (1024 - 49151). If no value is set or is set to 0, the default port (4789) is used.
    pub data_path_port: Option<u32>,
    /// default address pool in CIDR format
    pub default_addr_pool: Option<String>,
    /// default address pool subnet mask length
    pub default_addr_pool_mask_length: Option<u32>,
    /// Dispatcher heartbeat period (ns|us|ms|s|m|h)
    pub dispatcher_heartbeat: Option<String>,
    /// Specifications of one or more certificate signing endpoints
    pub external_ca: Option<String>,
    /// Force create a new cluster from current state
    pub force_new_cluster: Option<bool>,
    /// Listen address (format: <ip|interface>[:port])
    pub listen_addr: Option<String>,
    /// Number of additional Raft snapshots to retain
    pub max_snapshots: Option<u64>,
    /// Number of log entries between Raft snapshots
    pub snapshot_interval: Option<u64>,
    /// Task history retention limit
    pub task_history_limit: Option<i64>,
}

/// Wrapper for `docker swarm init`.
///
/// ```text
/// init [OPTIONS]
/// Initialize a swarm
/// ```
pub fn docker_swarm_init_cmd(opt: DockerSwarmInitOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "init".to_string()];
    if let Some(value) = opt.advertise_addr {
        cargs.push(format!("--advertise-addr={value}"));
    }
    if let Some(value) = opt.autolock {
        cargs.push(format!("--autolock={value}"));
    }
    if let Some(value) = opt.availability {
        cargs.push(format!("--availability={value}"));
    }
    if let Some(value) = opt.cert_expiry {
        cargs.push(format!("--cert-expiry={value}"));
    }
    if let Some(value) = opt.data_path_addr {
        cargs.push(format!("--data-path-addr={value}"));
    }
    if let Some(value) = opt.data_path_port {
        cargs.push(format!("--data-path-port={value}"));
    }
    if let Some(value) = opt.default_addr_pool {
        cargs.push(format!("--default-addr-pool={value}"));
    }
    if let Some(value) = opt.default_addr_pool_mask_length {
        cargs.push(format!("--default-addr-pool-mask-length={value}"));
    }
    if let Some(value) = opt.dispatcher_heartbeat {
        cargs.push(format!("--dispatcher-heartbeat={value}"));
    }
    if let Some(value) = opt.external_ca {
        cargs.push(format!("--external-ca={value}"));
    }
    if let Some(value) = opt.force_new_cluster {
        cargs.push(format!("--force-new-cluster={value}"));
    }
    if let Some(value) = opt.listen_addr {
        cargs.push(format!("--listen-addr={value}"));
    }
    if let Some(value) = opt.max_snapshots {
        cargs.push(format!("--max-snapshots={value}"));
    }
    if let Some(value) = opt.snapshot_interval {
        cargs.push(format!("--snapshot-interval={value}"));
    }
    if let Some(value) = opt.task_history_limit {
        cargs.push(format!("--task-history-limit={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker swarm join`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSwarmJoinOption {
    /// Advertised address (format: <ip|interface>[:port])
    pub advertise_addr: Option<String>,
    /// Availability of the node ("active"|"pause"|"drain")
    pub availability: Option<String>,
    /// Address or interface to use for data path traffic (format: <ip|interface>)
    pub data_path_addr: Option<String>,
    /// Listen address (format: <ip|interface>[:port])
    pub listen_addr: Option<String>,
    /// Token for entry into the swarm
    pub token: Option<String>,
}

/// Wrapper for `docker swarm join`.
///
/// ```text
/// join [OPTIONS] HOST:PORT
/// Join a swarm as a node and/or manager
/// ```
pub fn docker_swarm_join_cmd(opt: DockerSwarmJoinOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "join".to_string()];
    if let Some(value) = opt.advertise_addr {
        cargs.push(format!("--advertise-addr={value}"));
    }
    if let Some(value) = opt.availability {
        cargs.push(format!("--availability={value}"));
    }
    if let Some(value) = opt.data_path_addr {
        cargs.push(format!("--data-path-addr={value}"));
    }
    if let Some(value) = opt.listen_addr {
        cargs.push(format!("--listen-addr={value}"));
    }
    if let Some(value) = opt.token {
        cargs.push(format!("--token={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker swarm join-token`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSwarmJoinTokenOption {
    /// Only display token
    pub quiet: Option<bool>,
    /// Rotate join token
    pub rotate: Option<bool>,
}

/// Wrapper for `docker swarm join-token`.
///
/// ```text
/// join-token [OPTIONS] (worker|manager)
/// Manage join tokens
/// ```
pub fn docker_swarm_join_token_cmd(opt: DockerSwarmJoinTokenOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "join-token".to_string()];
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.rotate {
        cargs.push(format!("--rotate={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker swarm leave`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSwarmLeaveOption {
    /// Force this node to leave the swarm, ignoring warnings
    pub force: Option<bool>,
}

/// Wrapper for `docker swarm leave`.
///
/// ```text
/// leave [OPTIONS]
/// Leave the swarm
/// ```
pub fn docker_swarm_leave_cmd(opt: DockerSwarmLeaveOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "leave".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker swarm unlock`.
///
/// ```text
/// unlock
/// Unlock swarm
/// ```
pub fn docker_swarm_unlock_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "unlock".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker swarm unlock-key`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSwarmUnlockKeyOption {
    /// Only display token
    pub quiet: Option<bool>,
    /// Rotate unlock key
    pub rotate: Option<bool>,
}

/// Wrapper for `docker swarm unlock-key`.
///
/// ```text
/// unlock-key [OPTIONS]
/// Manage the unlock key
/// ```
pub fn docker_swarm_unlock_key_cmd(opt: DockerSwarmUnlockKeyOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "unlock-key".to_string()];
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    if let Some(value) = opt.rotate {
        cargs.push(format!("--rotate={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker swarm update`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSwarmUpdateOption {
    /// Change manager autolocking setting (true|false)
    pub autolock: Option<bool>,
    /// Validity period for node certificates (ns|us|ms|s|m|h)
    pub cert_expiry: Option<String>,
    /// Dispatcher heartbeat period (ns|us|ms|s|m|h)
    pub dispatcher_heartbeat: Option<String>,
    /// Specifications of one or more certificate signing endpoints
    pub external_ca: Option<String>,
    /// Number of additional Raft snapshots to retain
    pub max_snapshots: Option<u64>,
    /// Number of log entries between Raft snapshots
    pub snapshot_interval: Option<u64>,
    /// Task history retention limit
    pub task_history_limit: Option<i64>,
}

/// Wrapper for `docker swarm update`.
///
/// ```text
/// update [OPTIONS]
/// Update the swarm
/// ```
pub fn docker_swarm_update_cmd(opt: DockerSwarmUpdateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["swarm".to_string(), "update".to_string()];
    if let Some(value) = opt.autolock {
        cargs.push(format!("--autolock={value}"));
    }
    if let Some(value) = opt.cert_expiry {
        cargs.push(format!("--cert-expiry={value}"));
    }
    if let Some(value) = opt.dispatcher_heartbeat {
        cargs.push(format!("--dispatcher-heartbeat={value}"));
    }
    if let Some(value) = opt.external_ca {
        cargs.push(format!("--external-ca={value}"));
    }
    if let Some(value) = opt.max_snapshots {
        cargs.push(format!("--max-snapshots={value}"));
    }
    if let Some(value) = opt.snapshot_interval {
        cargs.push(format!("--snapshot-interval={value}"));
    }
    if let Some(value) = opt.task_history_limit {
        cargs.push(format!("--task-history-limit={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker system`.
///
/// ```text
/// system
/// Manage Docker
/// ```
pub fn docker_system_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["system".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker system df`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSystemDfOption {
    /// Pretty-print images using a Go template
    pub format: Option<String>,
    /// Show detailed information on space usage
    pub verbose: Option<bool>,
}

/// Wrapper for `docker system df`.
///
/// ```text
/// df [OPTIONS]
/// Show docker disk usage
/// ```
pub fn docker_system_df_cmd(opt: DockerSystemDfOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["system".to_string(), "df".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.verbose {
        cargs.push(format!("--verbose={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker system dial-stdio`.
///
/// ```text
/// dial-stdio
/// Proxy the stdio stream to the daemon connection. Should not be invoked manually.
/// ```
pub fn docker_system_dial_stdio_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["system".to_string(), "dial-stdio".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker system events`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSystemEventsOption {
    /// Filter output based on conditions provided
    pub filter: Option<String>,
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Show all events created since timestamp
    pub since: Option<String>,
    /// Stream events until this timestamp
    pub until: Option<String>,
}

/// Wrapper for `docker system events`.
///
/// ```text
/// events [OPTIONS]
/// Get real time events from the server
/// ```
pub fn docker_system_events_cmd(opt: DockerSystemEventsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["system".to_string(), "events".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.since {
        cargs.push(format!("--since={value}"));
    }
    if let Some(value) = opt.until {
        cargs.push(format!("--until={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker system info`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSystemInfoOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
}

/// Wrapper for `docker system info`.
///
/// ```text
/// info [OPTIONS]
/// Display system-wide information
/// ```
pub fn docker_system_info_cmd(opt: DockerSystemInfoOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["system".to_string(), "info".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker system prune`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerSystemPruneOption {
    /// Remove all unused images not just dangling ones
    pub all: Option<bool>,
    /// Provide filter values (e.g. 'label=<key>=<value>')
    pub filter: Option<String>,
    /// Do not prompt for confirmation
    pub force: Option<bool>,
    /// Prune volumes
    pub volumes: Option<bool>,
}

/// Wrapper for `docker system prune`.
///
/// ```text
/// prune [OPTIONS]
/// Remove unused data
/// ```
pub fn docker_system_prune_cmd(opt: DockerSystemPruneOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["system".to_string(), "prune".to_string()];
    if let Some(value) = opt.all {
        cargs.push(format!("--all={value}"));
    }
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    if let Some(value) = opt.volumes {
        cargs.push(format!("--volumes={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker tag`.
///
/// ```text
/// tag SOURCE_IMAGE[:TAG] TARGET_IMAGE[:TAG]
/// Create a tag TARGET_IMAGE that refers to SOURCE_IMAGE
/// ```
pub fn docker_tag_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["tag".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker top`.
///
/// ```text
/// top CONTAINER [ps OPTIONS]
/// Display the running processes of a container
/// ```
pub fn docker_top_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["top".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker trust`.
///
/// ```text
/// trust
/// Manage trust on Docker images
/// ```
pub fn docker_trust_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker trust inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerTrustInspectOption {
    /// Print the information in a human friendly format
    pub pretty: Option<bool>,
}

/// Wrapper for `docker trust inspect`.
///
/// ```text
/// inspect IMAGE[:TAG] [IMAGE[:TAG]...]
/// Return low-level information about keys and signatures
/// ```
pub fn docker_trust_inspect_cmd(opt: DockerTrustInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "inspect".to_string()];
    if let Some(value) = opt.pretty {
        cargs.push(format!("--pretty={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker trust key`.
///
/// ```text
/// key
/// Manage keys for signing Docker images
/// ```
pub fn docker_trust_key_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "key".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker trust key generate`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerTrustKeyGenerateOption {
    /// Directory to generate key in, defaults to current directory
    pub dir: Option<String>,
}

/// Wrapper for `docker trust key generate`.
///
/// ```text
/// generate NAME
/// Generate and load a signing key-pair
/// ```
pub fn docker_trust_key_generate_cmd(opt: DockerTrustKeyGenerateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "key".to_string(), "generate".to_string()];
    if let Some(value) = opt.dir {
        cargs.push(format!("--dir={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker trust key load`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerTrustKeyLoadOption {
    /// Name for the loaded key
    pub name: Option<String>,
}

/// Wrapper for `docker trust key load`.
///
/// ```text
/// load [OPTIONS] KEYFILE
/// Load a private key file for signing
/// ```
pub fn docker_trust_key_load_cmd(opt: DockerTrustKeyLoadOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "key".to_string(), "load".to_string()];
    if let Some(value) = opt.name {
        cargs.push(format!("--name={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker trust revoke`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerTrustRevokeOption {
    /// Do not prompt for confirmation
    pub yes: Option<bool>,
}

/// Wrapper for `docker trust revoke`.
///
/// ```text
/// revoke [OPTIONS] IMAGE[:TAG]
/// Remove trust for an image
/// ```
pub fn docker_trust_revoke_cmd(opt: DockerTrustRevokeOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "revoke".to_string()];
    if let Some(value) = opt.yes {
        cargs.push(format!("--yes={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker trust sign`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerTrustSignOption {
    /// Sign a locally tagged image
    pub local: Option<bool>,
}

/// Wrapper for `docker trust sign`.
///
/// ```text
/// sign IMAGE:TAG
/// Sign an image
/// ```
pub fn docker_trust_sign_cmd(opt: DockerTrustSignOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "sign".to_string()];
    if let Some(value) = opt.local {
        cargs.push(format!("--local={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker trust signer`.
///
/// ```text
/// signer
/// Manage entities who can sign Docker images
/// ```
pub fn docker_trust_signer_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "signer".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker trust signer add`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerTrustSignerAddOption {
    /// Path to the signer's public key file
    pub key: Option<Vec<String>>,
}

/// Wrapper for `docker trust signer add`.
///
/// ```text
/// add OPTIONS NAME REPOSITORY [REPOSITORY...]
/// Add a signer
/// ```
pub fn docker_trust_signer_add_cmd(opt: DockerTrustSignerAddOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "signer".to_string(), "add".to_string()];
    if let Some(values) = opt.key {
        for value in values {
            cargs.push("--key".to_string());
            cargs.push(value);
        }
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker trust signer remove`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerTrustSignerRemoveOption {
    /// Do not prompt for confirmation before removing the most recent signer
    pub force: Option<bool>,
}

/// Wrapper for `docker trust signer remove`.
///
/// ```text
/// remove [OPTIONS] NAME REPOSITORY [REPOSITORY...]
/// Remove a signer
/// ```
pub fn docker_trust_signer_remove_cmd(opt: DockerTrustSignerRemoveOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["trust".to_string(), "signer".to_string(), "remove".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker unpause`.
///
/// ```text
/// unpause CONTAINER [CONTAINER...]
/// Unpause all processes within one or more containers
/// ```
pub fn docker_unpause_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["unpause".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker update`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerUpdateOption {
    /// Block IO (relative weight), between 10 and 1000, or 0 to disable (default 0)
    pub blkio_weight: Option<u16>,
    /// Limit CPU CFS (Completely Fair Scheduler) period
    pub cpu_period: Option<i64>,
    /// Limit CPU CFS (Completely Fair Scheduler) quota
    pub cpu_quota: Option<i64>,
    /// Limit the CPU real-time period in microseconds
    pub cpu_rt_period: Option<i64>,
    /// Limit the CPU real-time runtime in microseconds
    pub cpu_rt_runtime: Option<i64>,
    /// CPU shares (relative weight)
    pub cpu_shares: Option<i64>,
    /// Number of CPUs
    pub cpus: Option<String>,
    /// CPUs in which to allow execution (0-3, 0,1)
    pub cpuset_cpus: Option<String>,
    /// MEMs in which to allow execution (0-3, 0,1)
    pub cpuset_mems: Option<String>,
    /// Kernel memory limit
    pub kernel_memory: Option<String>,
    /// Memory limit
    pub memory: Option<String>,
    /// Memory soft limit
    pub memory_reservation: Option<String>,
    /// Swap limit equal to memory plus swap: '-1' to enable unlimited swap
    pub memory_swap: Option<String>,
    /// Tune container pids limit (set -1 for unlimited)
    pub pids_limit: Option<i64>,
    /// Restart policy to apply when a container exits
    pub restart: Option<String>,
}

/// Wrapper for `docker update`.
///
/// ```text
/// update [OPTIONS] CONTAINER [CONTAINER...]
/// Update configuration of one or more containers
/// ```
pub fn docker_update_cmd(opt: DockerUpdateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["update".to_string()];
    if let Some(value) = opt.blkio_weight {
        cargs.push(format!("--blkio-weight={value}"));
    }
    if let Some(value) = opt.cpu_period {
        cargs.push(format!("--cpu-period={value}"));
    }
    if let Some(value) = opt.cpu_quota {
        cargs.push(format!("--cpu-quota={value}"));
    }
    if let Some(value) = opt.cpu_rt_period {
        cargs.push(format!("--cpu-rt-period={value}"));
    }
    if let Some(value) = opt.cpu_rt_runtime {
        cargs.push(format!("--cpu-rt-runtime={value}"));
    }
    if let Some(value) = opt.cpu_shares {
        cargs.push(format!("--cpu-shares={value}"));
    }
    if let Some(value) = opt.cpus {
        cargs.push(format!("--cpus={value}"));
    }
    if let Some(value) = opt.cpuset_cpus {
        cargs.push(format!("--cpuset-cpus={value}"));
    }
    if let Some(value) = opt.cpuset_mems {
        cargs.push(format!("--cpuset-mems={value}"));
    }
    if let Some(value) = opt.kernel_memory {
        cargs.push(format!("--kernel-memory={value}"));
    }
    if let Some(value) = opt.memory {
        cargs.push(format!("--memory={value}"));
    }
    if let Some(value) = opt.memory_reservation {
        cargs.push(format!("--memory-reservation={value}"));
    }
    if let Some(value) = opt.memory_swap {
        cargs.push(format!("--memory-swap={value}"));
    }
    if let Some(value) = opt.pids_limit {
        cargs.push(format!("--pids-limit={value}"));
    }
    if let Some(value) = opt.restart {
        cargs.push(format!("--restart={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker version`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerVersionOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
    /// Kubernetes config file
    pub kubeconfig: Option<String>,
}

/// Wrapper for `docker version`.
///
/// ```text
/// version [OPTIONS]
/// Show the Docker version information
/// ```
pub fn docker_version_cmd(opt: DockerVersionOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["version".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.kubeconfig {
        cargs.push(format!("--kubeconfig={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker volume`.
///
/// ```text
/// volume COMMAND
/// Manage volumes
/// ```
pub fn docker_volume_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["volume".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker volume create`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerVolumeCreateOption {
    /// Specify volume driver name
    pub driver: Option<String>,
    /// Set metadata for a volume
    pub label: Option<Vec<String>>,
    /// Specify volume name
    pub name: Option<String>,
    /// Set driver specific options
    pub opt: Option<HashMap<String, String>>,
}

/// Wrapper for `docker volume create`.
///
/// ```text
/// create [OPTIONS] [VOLUME]
/// Create a volume
/// ```
pub fn docker_volume_create_cmd(opt: DockerVolumeCreateOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["volume".to_string(), "create".to_string()];
    if let Some(value) = opt.driver {
        cargs.push(format!("--driver={value}"));
    }
    if let Some(values) = opt.label {
        for value in values {
            cargs.push("--label".to_string());
            cargs.push(value);
        }
    }
    if let Some(value) = opt.name {
        cargs.push(format!("--name={value}"));
    }
    if let Some(entries) = opt.opt {
        for (key, value) in entries {
            cargs.push("--opt".to_string());
            cargs.push(format!("{key}={value}"));
        }
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker volume inspect`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerVolumeInspectOption {
    /// Format the output using the given Go template
    pub format: Option<String>,
}

/// Wrapper for `docker volume inspect`.
///
/// ```text
/// inspect [OPTIONS] VOLUME [VOLUME...]
/// Display detailed information on one or more volumes
/// ```
pub fn docker_volume_inspect_cmd(opt: DockerVolumeInspectOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["volume".to_string(), "inspect".to_string()];
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker volume ls`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerVolumeLsOption {
    /// Provide filter values (e.g. 'dangling=true')
    pub filter: Option<String>,
    /// Pretty-print volumes using a Go template
    pub format: Option<String>,
    /// Only display volume names
    pub quiet: Option<bool>,
}

/// Wrapper for `docker volume ls`.
///
/// ```text
/// ls [OPTIONS]
/// List volumes
/// ```
pub fn docker_volume_ls_cmd(opt: DockerVolumeLsOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["volume".to_string(), "ls".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.format {
        cargs.push(format!("--format={value}"));
    }
    if let Some(value) = opt.quiet {
        cargs.push(format!("--quiet={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker volume prune`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerVolumePruneOption {
    /// Provide filter values (e.g. 'label=<label>')
    pub filter: Option<String>,
    /// Do not prompt for confirmation
    pub force: Option<bool>,
}

/// Wrapper for `docker volume prune`.
///
/// ```text
/// prune [OPTIONS]
/// Remove all unused local volumes
/// ```
pub fn docker_volume_prune_cmd(opt: DockerVolumePruneOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["volume".to_string(), "prune".to_string()];
    if let Some(value) = opt.filter {
        cargs.push(format!("--filter={value}"));
    }
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Options for `docker volume rm`.
///
/// Unset fields contribute nothing to the argument vector.
#[derive(Debug, Clone, Default)]
pub struct DockerVolumeRmOption {
    /// Force the removal of one or more volumes
    pub force: Option<bool>,
}

/// Wrapper for `docker volume rm`.
///
/// ```text
/// rm [OPTIONS] VOLUME [VOLUME...]
/// Remove one or more volumes
/// ```
pub fn docker_volume_rm_cmd(opt: DockerVolumeRmOption, args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["volume".to_string(), "rm".to_string()];
    if let Some(value) = opt.force {
        cargs.push(format!("--force={value}"));
    }
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}

/// Wrapper for `docker wait`.
///
/// ```text
/// wait CONTAINER [CONTAINER...]
/// Block until one or more containers stop, then print their exit codes
/// ```
pub fn docker_wait_cmd(args: &[&str]) -> Command {
    let mut cargs: Vec<String> = vec!["wait".to_string()];
    cargs.extend(args.iter().map(|s| s.to_string()));
    let mut cmd = Command::new("docker");
    cmd.args(cargs);
    cmd
}
