//! Docker command construction and runtime detection.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use which::which;

use crate::config::{BuildConfig, Task};

/// In-container test command, run under `--entrypoint /bin/bash -c`.
const TEST_COMMAND: &str = "cd /home/androidusr/docker-android/cli && nosetests -v";

pub fn container_runtime_path() -> io::Result<PathBuf> {
    if let Ok(p) = which("docker") {
        return Ok(p);
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Docker is required but was not found in PATH.",
    ))
}

/// Argument vector for the given task, excluding the program name.
///
/// Build and push ordering is byte-for-byte the legacy ordering; CI scripts
/// compare against it.
pub fn docker_args(task: Task, cfg: &BuildConfig, interactive_tty: bool) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    match task {
        Task::Build => {
            args.push("build".into());
            args.push("-t".into());
            args.push(cfg.image_tag.clone());
            for build_arg in &cfg.build_args {
                args.push("--build-arg".into());
                args.push(build_arg.clone());
            }
            args.push("-f".into());
            args.push(cfg.dockerfile.clone());
            args.push(".".into());
        }
        Task::Test => {
            args.push("run".into());
            let tty_flag = if interactive_tty { "-it" } else { "-i" };
            args.push(tty_flag.into());
            args.push("--rm".into());
            args.push("--name".into());
            args.push("test".into());
            args.push("--entrypoint".into());
            args.push("/bin/bash".into());
            args.push(cfg.image_tag.clone());
            args.push("-c".into());
            args.push(TEST_COMMAND.into());
        }
        Task::Push => {
            args.push("push".into());
            args.push(cfg.image_tag.clone());
        }
    }
    args
}

/// Shell-style preview of the full command line, for printing before
/// execution. Arguments containing spaces or quotes are double-quoted with
/// embedded quotes and backslashes escaped.
pub fn preview_string(args: &[String]) -> String {
    let mut preview = String::from("docker");
    for a in args {
        preview.push(' ');
        if a.contains(' ') || a.contains('"') || a.contains('\\') {
            preview.push('"');
            preview.push_str(&a.replace('\\', "\\\\").replace('"', "\\\""));
            preview.push('"');
        } else {
            preview.push_str(a);
        }
    }
    preview
}

/// Build the docker command for the given task, and return a preview string.
pub fn compose_docker_cmd(task: Task, cfg: &BuildConfig) -> io::Result<(Command, String)> {
    let runtime = container_runtime_path()?;

    let interactive_tty = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);
    let args = docker_args(task, cfg, interactive_tty);

    let mut cmd = Command::new(&runtime);
    cmd.args(&args);
    let preview = preview_string(&args);

    Ok((cmd, preview))
}
