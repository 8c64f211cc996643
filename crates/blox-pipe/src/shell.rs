use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use wait_timeout::ChildExt;

/// Exit code reported when the command runs past its timeout.
pub const EXIT_TIMEOUT: i32 = 124;
/// Exit code reported when the program cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no command given")]
    EmptyCommand,
    #[error("command not found: {0}")]
    NotFound(String),
    #[error("command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Exit code to report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::NotFound(_) => EXIT_NOT_FOUND,
            ShellError::Timeout(..) => EXIT_TIMEOUT,
            ShellError::EmptyCommand | ShellError::Io(_) => 1,
        }
    }
}

/// Output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
    /// Exit code. On Unix a process killed by a signal reports
    /// `128 + signal`, the way shells do.
    pub code: i32,
}

impl Captured {
    /// Returns stdout, or stderr when stdout is empty.
    ///
    /// Some tools print their listing on stderr; this lets them be shown
    /// the same way.
    pub fn primary_output(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Execute a command directly (no shell) and capture both output streams.
///
/// The first element of `argv` is the program, the rest its arguments.
/// stdin is inherited. Output is decoded as UTF-8, replacing invalid
/// sequences.
///
/// # Arguments
///
/// * `argv` - Program and arguments
/// * `timeout` - Optional timeout; if exceeded, the process is killed
///
/// # Notes
///
/// Both streams are buffered in memory, read on their own threads so a
/// chatty stderr cannot block the child while stdout is pending.
pub fn run_captured<S: AsRef<str>>(
    argv: &[S],
    timeout: Option<Duration>,
) -> Result<Captured, ShellError> {
    let argv: Vec<&str> = argv.iter().map(|arg| arg.as_ref()).collect();
    let (program, args) = argv.split_first().ok_or(ShellError::EmptyCommand)?;
    let command_line = argv.join(" ");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(command = %command_line, ?timeout, "spawning command");
    let mut child = cmd.spawn().map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ShellError::NotFound(program.to_string()),
        _ => ShellError::Io(err),
    })?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match timeout {
        Some(duration) => match child.wait_timeout(duration)? {
            Some(status) => status,
            None => {
                child.kill()?;
                child.wait()?;
                tracing::warn!(command = %command_line, ?duration, "command timed out");
                return Err(ShellError::Timeout(command_line, duration));
            }
        },
        None => child.wait()?,
    };

    let captured = Captured {
        stdout: collect(stdout)?,
        stderr: collect(stderr)?,
        code: exit_code(status),
    };
    tracing::debug!(
        command = %command_line,
        code = captured.code,
        stdout_bytes = captured.stdout.len(),
        stderr_bytes = captured.stderr.len(),
        "command finished"
    );
    Ok(captured)
}

fn drain<R: Read + Send + 'static>(source: Option<R>) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Some(mut source) = source {
            source.read_to_end(&mut buffer)?;
        }
        Ok(buffer)
    })
}

fn collect(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<String, ShellError> {
    let bytes = handle
        .join()
        .map_err(|_| io::Error::other("output reader panicked"))??;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
