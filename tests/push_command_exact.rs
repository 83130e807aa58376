use docker_android_builder::{derive_config, docker_args, preview_string, AndroidVersion, Project, Task};

#[test]
fn test_push_command_matches_legacy_ordering() {
    let cfg = derive_config(Project::Emulator, "v2.0-p6", Some(AndroidVersion::V11_0));
    let args = docker_args(Task::Push, &cfg, false);
    assert_eq!(
        preview_string(&args),
        "docker push rcswain/docker-android:emulator_11.0_v2.0-p6"
    );
}
