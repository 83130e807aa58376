//! Library surface for the docker-android-builder CLI.
//!
//! The binary is a thin dispatcher; everything it composes (enumerations,
//! tag derivation, docker argument vectors, prompting, exit-code mapping)
//! lives here so integration tests can exercise it without a docker daemon.

pub mod banner;
pub mod cli;
pub mod color;
pub mod config;
pub mod docker;
pub mod errors;
pub mod exec;
pub mod prompt;

pub use cli::Cli;
pub use config::{
    derive_config, AndroidVersion, BuildConfig, ParameterSet, Project, Task, IMAGE_REPOSITORY,
};
pub use docker::{compose_docker_cmd, container_runtime_path, docker_args, preview_string};
pub use errors::{exit_code_for_io_error, EXIT_INPUT, EXIT_VALIDATION};
pub use exec::{output_tail, run_captured, run_streamed, ExecOutput};
