//! Startup and result banners (stderr, so stdout stays clean for pipelines).

use crate::color;

pub fn print_startup_banner() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!();
    eprintln!("──────────────────────────────────────────────────────────────────");
    eprintln!("  Docker Android Builder v{version}");
    eprintln!("──────────────────────────────────────────────────────────────────");

    let docker_disp = crate::docker::container_runtime_path()
        .ok()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    eprintln!(
        "  host: {} / {}  |  docker: {}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        docker_disp
    );
    eprintln!();
}

pub fn print_success_banner() {
    let use_color = color::color_enabled_stderr();
    eprintln!();
    eprintln!("──────────────────────────────────────────────────────────────────");
    color::log_info_stderr(use_color, "✅ Task completed successfully!");
}

pub fn print_failure_banner(code: i32) {
    let use_color = color::color_enabled_stderr();
    eprintln!();
    eprintln!("──────────────────────────────────────────────────────────────────");
    color::log_error_stderr(use_color, &format!("❌ Task failed (exit code {code})!"));
}
