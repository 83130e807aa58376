use clap::Parser;

use crate::config::{AndroidVersion, Project, Task};

/// Build, test and push rcswain/docker-android images via the Docker CLI.
///
/// Omitted positionals are prompted interactively. Invalid enumeration
/// values fail before any docker process is started.
#[derive(Parser, Debug)]
#[command(
    name = "docker-android-builder",
    version,
    about = "Build, test and push rcswain/docker-android images via the Docker CLI."
)]
pub struct Cli {
    /// Task to perform
    #[arg(value_enum)]
    pub task: Option<Task>,

    /// Project variant to operate on
    #[arg(value_enum)]
    pub project: Option<Project>,

    /// Release version, used verbatim in the image tag (e.g. v2.0-p6)
    pub release_version: Option<String>,

    /// Android version (emulator projects only)
    #[arg(value_enum)]
    pub android_version: Option<AndroidVersion>,

    /// Print the composed docker command without executing it
    #[arg(long)]
    pub dry_run: bool,
}
