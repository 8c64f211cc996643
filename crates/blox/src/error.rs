use std::io;

use thiserror::Error;

use blox_pipe::ShellError;
use blox_seeker::SeekerError;

use crate::output::SerializeError;

/// Exit code for usage errors and malformed operations.
pub const EXIT_USAGE: i32 = 2;

/// Failures that stop one `blx` invocation.
#[derive(Debug, Error)]
pub enum BloxError {
    /// Bad flags, or `--help`/`--version`, which clap reports as errors.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("{0}")]
    Usage(String),

    #[error("invalid operation: {0}")]
    Operation(#[from] SeekerError),

    #[error(transparent)]
    Command(#[from] ShellError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BloxError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            BloxError::Cli(err) => err.exit_code(),
            BloxError::Usage(_) | BloxError::Operation(_) => EXIT_USAGE,
            BloxError::Command(err) => err.exit_code(),
            BloxError::Serialize(_) | BloxError::Io(_) => 1,
        }
    }

    /// Returns `true` for `--help` and `--version`, whose text goes to
    /// stdout and which exit successfully.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            BloxError::Cli(err) if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn exit_codes() {
        assert_eq!(BloxError::Usage("no command".into()).exit_code(), 2);
        assert_eq!(
            BloxError::Command(ShellError::NotFound("nope".into())).exit_code(),
            127
        );
        assert_eq!(
            BloxError::Command(ShellError::Timeout("sleep".into(), Duration::from_secs(1)))
                .exit_code(),
            124
        );
        assert_eq!(BloxError::Io(io::Error::other("broken")).exit_code(), 1);
    }

    #[test]
    fn operation_errors_are_usage_errors() {
        let err: BloxError = "Age>old"
            .parse::<blox_seeker::Condition>()
            .unwrap_err()
            .into();
        assert_eq!(err.exit_code(), EXIT_USAGE);
        assert!(err.to_string().starts_with("invalid operation: "));
    }
}
