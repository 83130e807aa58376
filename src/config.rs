//! Fixed enumerations and derived build configuration.
//!
//! Everything here is a closed set: tasks, projects and Android versions are
//! sum types so the project/version combinations are checked exhaustively at
//! compile time, and the API-level table is a total match rather than a map.

use clap::ValueEnum;

/// Docker Hub repository all image variants are published under.
pub const IMAGE_REPOSITORY: &str = "rcswain/docker-android";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum Task {
    Test,
    Build,
    Push,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Test => "test",
            Task::Build => "build",
            Task::Push => "push",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum Project {
    Base,
    Emulator,
    Genymotion,
    #[value(name = "pro-emulator")]
    ProEmulator,
    #[value(name = "pro-emulator_headless")]
    ProEmulatorHeadless,
}

impl Project {
    pub fn as_str(&self) -> &'static str {
        match self {
            Project::Base => "base",
            Project::Emulator => "emulator",
            Project::Genymotion => "genymotion",
            Project::ProEmulator => "pro-emulator",
            Project::ProEmulatorHeadless => "pro-emulator_headless",
        }
    }

    /// Emulator variants carry an Android version segment in the tag and the
    /// emulator build args; base and genymotion do not.
    pub fn uses_android(&self) -> bool {
        matches!(
            self,
            Project::Emulator | Project::ProEmulator | Project::ProEmulatorHeadless
        )
    }

    /// Dockerfile path passed to `docker build -f`.
    pub fn dockerfile_path(&self) -> String {
        format!("docker/{}", self.as_str())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum AndroidVersion {
    #[value(name = "9.0")]
    V9_0,
    #[value(name = "10.0")]
    V10_0,
    #[value(name = "11.0")]
    V11_0,
    #[value(name = "12.0")]
    V12_0,
    #[value(name = "13.0")]
    V13_0,
    #[value(name = "14.0")]
    V14_0,
    #[value(name = "15.0")]
    V15_0,
    #[value(name = "16.0")]
    V16_0,
}

impl AndroidVersion {
    pub const ALL: [AndroidVersion; 8] = [
        AndroidVersion::V9_0,
        AndroidVersion::V10_0,
        AndroidVersion::V11_0,
        AndroidVersion::V12_0,
        AndroidVersion::V13_0,
        AndroidVersion::V14_0,
        AndroidVersion::V15_0,
        AndroidVersion::V16_0,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AndroidVersion::V9_0 => "9.0",
            AndroidVersion::V10_0 => "10.0",
            AndroidVersion::V11_0 => "11.0",
            AndroidVersion::V12_0 => "12.0",
            AndroidVersion::V13_0 => "13.0",
            AndroidVersion::V14_0 => "14.0",
            AndroidVersion::V15_0 => "15.0",
            AndroidVersion::V16_0 => "16.0",
        }
    }

    /// Android SDK API level for this platform version. Fixed table, no
    /// computation; note 12.0 maps to 32 (12L), not 31.
    pub fn api_level(&self) -> u32 {
        match self {
            AndroidVersion::V9_0 => 28,
            AndroidVersion::V10_0 => 29,
            AndroidVersion::V11_0 => 30,
            AndroidVersion::V12_0 => 32,
            AndroidVersion::V13_0 => 33,
            AndroidVersion::V14_0 => 34,
            AndroidVersion::V15_0 => 35,
            AndroidVersion::V16_0 => 36,
        }
    }
}

/// Validated input set, after CLI parsing and interactive prompting.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    pub task: Task,
    pub project: Project,
    pub release_version: String,
    pub android_version: Option<AndroidVersion>,
}

/// Everything derived from a [`ParameterSet`]: the image tag, the Dockerfile
/// path and the `--build-arg` entries. Computed per run, never persisted.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub image_tag: String,
    pub dockerfile: String,
    /// `KEY=VALUE` entries, each passed as a separate `--build-arg`.
    pub build_args: Vec<String>,
}

/// Compute the image tag and build arguments for one invocation.
///
/// Tag template: `rcswain/docker-android:<project>[_<android>][_<release>]`.
/// The android segment applies only to emulator projects; the release segment
/// is omitted when the release version is empty. The `--build-arg` ordering
/// is a CI contract and must not change.
pub fn derive_config(
    project: Project,
    release_version: &str,
    android_version: Option<AndroidVersion>,
) -> BuildConfig {
    let android = if project.uses_android() {
        android_version
    } else {
        None
    };

    let mut tag = project.as_str().to_string();
    if let Some(v) = android {
        tag.push('_');
        tag.push_str(v.as_str());
    }
    if !release_version.is_empty() {
        tag.push('_');
        tag.push_str(release_version);
    }

    let mut build_args = vec![format!("DOCKER_ANDROID_VERSION={release_version}")];
    if let Some(v) = android {
        build_args.push(format!("EMULATOR_ANDROID_VERSION={}", v.as_str()));
        build_args.push(format!("EMULATOR_API_LEVEL={}", v.api_level()));
    }

    BuildConfig {
        image_tag: format!("{IMAGE_REPOSITORY}:{tag}"),
        dockerfile: project.dockerfile_path(),
        build_args,
    }
}
