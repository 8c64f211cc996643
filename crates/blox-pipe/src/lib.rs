//! Running the wrapped command.
//!
//! [`run_captured`] spawns a program directly (no shell), captures stdout
//! and stderr, and enforces a timeout. [`CommandRunner`] is the seam the
//! application runs commands through; [`MockRunner`] replays canned output
//! in tests.

pub mod runner;
pub mod shell;

pub use runner::{CommandRunner, MockFailure, MockRunner, SystemRunner, DEFAULT_TIMEOUT};
pub use shell::{run_captured, Captured, ShellError, EXIT_NOT_FOUND, EXIT_TIMEOUT};
