use docker_android_builder::{derive_config, docker_args, preview_string, AndroidVersion, Project, Task};

#[test]
fn test_run_command_uses_fixed_entrypoint_and_test_command() {
    let cfg = derive_config(Project::ProEmulator, "v2.0-p6", Some(AndroidVersion::V14_0));
    let args = docker_args(Task::Test, &cfg, true);
    assert_eq!(
        args,
        vec![
            "run",
            "-it",
            "--rm",
            "--name",
            "test",
            "--entrypoint",
            "/bin/bash",
            "rcswain/docker-android:pro-emulator_14.0_v2.0-p6",
            "-c",
            "cd /home/androidusr/docker-android/cli && nosetests -v",
        ]
    );
}

#[test]
fn test_preview_quotes_the_in_container_command() {
    let cfg = derive_config(Project::Emulator, "v2.0-p6", Some(AndroidVersion::V11_0));
    let args = docker_args(Task::Test, &cfg, false);
    let preview = preview_string(&args);
    assert!(preview.starts_with("docker run -i --rm --name test"));
    assert!(preview.ends_with("-c \"cd /home/androidusr/docker-android/cli && nosetests -v\""));
}
