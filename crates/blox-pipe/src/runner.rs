use std::time::Duration;

use crate::shell::{run_captured, Captured, ShellError};

/// Default time a wrapped command may run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Something that can run a command line and capture its output.
pub trait CommandRunner {
    /// Runs `argv`, killing it after `timeout` when one is given.
    fn run(&self, argv: &[String], timeout: Option<Duration>) -> Result<Captured, ShellError>;
}

/// Runs commands as child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String], timeout: Option<Duration>) -> Result<Captured, ShellError> {
        run_captured(argv, timeout)
    }
}

/// Runner that replays fixed output, for tests.
#[derive(Debug, Clone)]
pub struct MockRunner {
    output: Result<Captured, MockFailure>,
}

/// Failure a [`MockRunner`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    NotFound,
    Timeout,
}

impl MockRunner {
    /// Replays `stdout` with exit code 0.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self::captured(Captured {
            stdout: stdout.into(),
            stderr: String::new(),
            code: 0,
        })
    }

    pub fn captured(captured: Captured) -> Self {
        Self {
            output: Ok(captured),
        }
    }

    pub fn failing(failure: MockFailure) -> Self {
        Self {
            output: Err(failure),
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, argv: &[String], timeout: Option<Duration>) -> Result<Captured, ShellError> {
        let program = argv.first().cloned().ok_or(ShellError::EmptyCommand)?;
        match &self.output {
            Ok(captured) => Ok(captured.clone()),
            Err(MockFailure::NotFound) => Err(ShellError::NotFound(program)),
            Err(MockFailure::Timeout) => Err(ShellError::Timeout(
                argv.join(" "),
                timeout.unwrap_or(DEFAULT_TIMEOUT),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_mock_replays_output() {
        let runner = MockRunner::stdout("a b\n1 2\n");
        let captured = runner.run(&argv(&["anything"]), None).unwrap();
        assert_eq!(captured.stdout, "a b\n1 2\n");
        assert!(captured.success());
    }

    #[test]
    fn test_mock_failures() {
        let runner = MockRunner::failing(MockFailure::NotFound);
        let err = runner.run(&argv(&["nope"]), None).unwrap_err();
        assert!(matches!(err, ShellError::NotFound(ref p) if p == "nope"));

        let runner = MockRunner::failing(MockFailure::Timeout);
        let err = runner
            .run(&argv(&["sleep", "9"]), Some(Duration::from_secs(1)))
            .unwrap_err();
        assert_eq!(err.to_string(), "command `sleep 9` timed out after 1s");
    }

    #[test]
    fn test_mock_needs_a_command() {
        let runner = MockRunner::stdout("");
        assert!(matches!(
            runner.run(&[], None),
            Err(ShellError::EmptyCommand)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_runs() {
        let captured = SystemRunner
            .run(&argv(&["printf", "a b\\n1 2\\n"]), Some(DEFAULT_TIMEOUT))
            .unwrap();
        assert_eq!(captured.stdout, "a b\n1 2\n");
    }
}
