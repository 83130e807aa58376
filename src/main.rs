use std::io;
use std::process::{Command, ExitCode};

use clap::Parser;
use docker_android_builder::config::{ParameterSet, Task};
use docker_android_builder::{banner, color, config, docker, errors, exec, prompt, Cli};

fn collect_parameters(cli: &Cli) -> io::Result<ParameterSet> {
    let task = match cli.task {
        Some(t) => t,
        None => prompt::prompt_value_enum("Task")?,
    };
    let project = match cli.project {
        Some(p) => p,
        None => prompt::prompt_value_enum("Project")?,
    };
    let release_version = match cli.release_version.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => prompt::prompt_nonempty("Release Version", "v2.0-p0|v2.0-p1|etc")?,
    };
    // Android version only applies to emulator projects; a supplied value is
    // ignored otherwise.
    let android_version = if project.uses_android() {
        Some(match cli.android_version {
            Some(v) => v,
            None => prompt::prompt_value_enum("Android Version")?,
        })
    } else {
        None
    };
    Ok(ParameterSet {
        task,
        project,
        release_version,
        android_version,
    })
}

fn run_task(task: Task, cmd: Command) -> anyhow::Result<i32> {
    match task {
        // Tests run interactively inside the container; stream stdio through.
        Task::Test => {
            let status = exec::run_streamed(cmd)?;
            Ok(status.code().unwrap_or(1))
        }
        Task::Build | Task::Push => {
            let out = exec::run_captured(cmd)?;
            if !out.status.success() {
                let combined = format!("{}{}", out.stdout, out.stderr);
                let tail = exec::output_tail(&combined, 40);
                if !tail.is_empty() {
                    eprintln!("{tail}");
                }
            }
            Ok(out.status.code().unwrap_or(1))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    banner::print_startup_banner();

    let params = match collect_parameters(&cli) {
        Ok(p) => p,
        Err(e) => {
            color::log_error_stderr(color::color_enabled_stderr(), &e.to_string());
            return ExitCode::from(errors::exit_code_for_io_error(&e));
        }
    };

    let cfg = config::derive_config(
        params.project,
        &params.release_version,
        params.android_version,
    );
    eprintln!("docker-android-builder: image: {}", cfg.image_tag);

    let (cmd, preview) = match docker::compose_docker_cmd(params.task, &cfg) {
        Ok(v) => v,
        Err(e) => {
            color::log_error_stderr(color::color_enabled_stderr(), &e.to_string());
            return ExitCode::from(errors::exit_code_for_io_error(&e));
        }
    };

    // The composed command line is printed before execution for auditability.
    eprintln!("docker-android-builder: docker: {preview}");

    if cli.dry_run {
        eprintln!("docker-android-builder: dry-run requested; not executing Docker.");
        return ExitCode::from(0);
    }

    match run_task(params.task, cmd) {
        Ok(0) => {
            banner::print_success_banner();
            ExitCode::from(0)
        }
        Ok(code) => {
            banner::print_failure_banner(code);
            ExitCode::from(code as u8)
        }
        Err(e) => {
            color::log_error_stderr(color::color_enabled_stderr(), &format!("{e:#}"));
            ExitCode::from(1)
        }
    }
}
