//! Exit-code mapping:
//! - 2 for argument validation failures (clap's usage-error code).
//! - 3 for an exhausted interactive input stream.
//! - 127 for io::ErrorKind::NotFound (docker missing from PATH).
//! - 1 for all other internal errors.
//! - Subprocess failures mirror the child's exit code and never pass through
//!   this mapping.

use std::io;

/// Exit code for enumeration-validation failures (clap uses 2 for usage errors).
pub const EXIT_VALIDATION: u8 = 2;

/// Exit code when a prompt hits end-of-input.
pub const EXIT_INPUT: u8 = 3;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 3 for UnexpectedEof (prompt stream exhausted)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    match e.kind() {
        io::ErrorKind::NotFound => 127,
        io::ErrorKind::UnexpectedEof => EXIT_INPUT,
        _ => 1,
    }
}
