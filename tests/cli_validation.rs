use clap::error::ErrorKind;
use clap::Parser;
use docker_android_builder::{AndroidVersion, Cli, Project, Task, EXIT_VALIDATION};

#[test]
fn test_full_positional_invocation_parses() {
    let cli = Cli::try_parse_from(["docker-android-builder", "build", "emulator", "v2.0-p6", "11.0"])
        .expect("valid invocation should parse");
    assert_eq!(cli.task, Some(Task::Build));
    assert_eq!(cli.project, Some(Project::Emulator));
    assert_eq!(cli.release_version.as_deref(), Some("v2.0-p6"));
    assert_eq!(cli.android_version, Some(AndroidVersion::V11_0));
    assert!(!cli.dry_run);
}

#[test]
fn test_no_arguments_parse_to_all_missing() {
    let cli = Cli::try_parse_from(["docker-android-builder"]).expect("bare invocation should parse");
    assert!(cli.task.is_none());
    assert!(cli.project.is_none());
    assert!(cli.release_version.is_none());
    assert!(cli.android_version.is_none());
}

#[test]
fn test_invalid_task_is_rejected_with_accepted_values() {
    let err = Cli::try_parse_from(["docker-android-builder", "deploy"])
        .expect_err("unknown task must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.exit_code(), i32::from(EXIT_VALIDATION));
    let rendered = err.to_string();
    for accepted in ["test", "build", "push"] {
        assert!(rendered.contains(accepted), "missing {accepted} in: {rendered}");
    }
}

#[test]
fn test_invalid_project_is_rejected() {
    let err = Cli::try_parse_from(["docker-android-builder", "build", "foo"])
        .expect_err("unknown project must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert!(err.to_string().contains("pro-emulator_headless"));
}

#[test]
fn test_invalid_android_version_is_rejected() {
    let err = Cli::try_parse_from(["docker-android-builder", "build", "emulator", "v2.0-p6", "8.0"])
        .expect_err("unsupported android version must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert!(err.to_string().contains("16.0"));
}

#[test]
fn test_enum_matching_is_case_sensitive() {
    let err = Cli::try_parse_from(["docker-android-builder", "Build"])
        .expect_err("capitalized task must be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_help_never_reaches_execution() {
    let err = Cli::try_parse_from(["docker-android-builder", "--help"])
        .expect_err("--help short-circuits parsing");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    // clap exits 0 for DisplayHelp
    assert_eq!(err.exit_code(), 0);
}
