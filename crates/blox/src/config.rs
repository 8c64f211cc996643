//! Layered settings: command-line flag, then environment, then default.

use std::io::IsTerminal;
use std::time::Duration;

use blox_pipe::DEFAULT_TIMEOUT;
use blox_render::{terminal_width, BorderStyle, Palette, FALLBACK_WIDTH, MIN_WIDTH};

use crate::cli::Cli;
use crate::env::EnvReader;
use crate::output::OutputMode;

pub const ENV_WIDTH: &str = "BLOX_WIDTH";
pub const ENV_COLUMNS: &str = "COLUMNS";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_BORDER: &str = "BLOX_BORDER";
pub const ENV_OUTPUT: &str = "BLOX_OUTPUT";
pub const ENV_TIMEOUT: &str = "BLOX_TIMEOUT";
pub const ENV_LOG: &str = "BLOX_LOG";

/// What is known about the terminal stdout is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terminal {
    pub stdout_is_tty: bool,
    pub width: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Terminal {
            stdout_is_tty: std::io::stdout().is_terminal(),
            width: terminal_width(),
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Display width, at least [`MIN_WIDTH`].
    pub width: usize,
    pub color: bool,
    pub border: BorderStyle,
    /// Output mode with Auto already resolved.
    pub output: OutputMode,
    /// `None` lets the command run without a time limit.
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn resolve(cli: &Cli, env: &dyn EnvReader, terminal: Terminal) -> Self {
        let width = cli
            .width
            .or_else(|| env_parsed(env, ENV_WIDTH, parse_width))
            .or_else(|| env_parsed(env, ENV_COLUMNS, parse_width))
            .or(terminal.width)
            .unwrap_or(FALLBACK_WIDTH)
            .max(MIN_WIDTH);

        let output = cli
            .output
            .or_else(|| env_parsed(env, ENV_OUTPUT, OutputMode::parse))
            .unwrap_or_default()
            .resolve_auto(terminal.stdout_is_tty);

        let border = cli
            .border
            .or_else(|| env_parsed(env, ENV_BORDER, |v| v.parse().ok()))
            .unwrap_or_default();

        let color = output == OutputMode::Term && !cli.no_color && env.var(ENV_NO_COLOR).is_none();

        let timeout_secs = cli
            .timeout
            .or_else(|| env_parsed(env, ENV_TIMEOUT, |v| v.trim().parse().ok()))
            .unwrap_or(DEFAULT_TIMEOUT.as_secs());
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let settings = Settings {
            width,
            color,
            border,
            output,
            timeout,
        };
        tracing::debug!(?settings, "settings resolved");
        settings
    }

    pub fn palette(&self) -> Palette {
        Palette::for_color(self.color)
    }
}

fn parse_width(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// Reads and parses one variable, ignoring values that do not parse.
fn env_parsed<T>(env: &dyn EnvReader, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = env.var(name)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        tracing::debug!(variable = name, value = %raw, "ignoring invalid environment value");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;

    const TTY: Terminal = Terminal {
        stdout_is_tty: true,
        width: Some(120),
    };
    const PIPE: Terminal = Terminal {
        stdout_is_tty: false,
        width: None,
    };

    fn resolve(cli: &Cli, env: &MockEnv, terminal: Terminal) -> Settings {
        Settings::resolve(cli, env, terminal)
    }

    #[test]
    fn defaults_on_a_terminal() {
        let settings = resolve(&Cli::default(), &MockEnv::new(), TTY);
        assert_eq!(settings.width, 120);
        assert!(settings.color);
        assert_eq!(settings.border, BorderStyle::Rounded);
        assert_eq!(settings.output, OutputMode::Term);
        assert_eq!(settings.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn defaults_in_a_pipe() {
        let settings = resolve(&Cli::default(), &MockEnv::new(), PIPE);
        assert_eq!(settings.width, FALLBACK_WIDTH);
        assert!(!settings.color);
        assert_eq!(settings.output, OutputMode::Text);
    }

    #[test]
    fn width_precedence() {
        let env = MockEnv::new()
            .with_var(ENV_WIDTH, "90")
            .with_var(ENV_COLUMNS, "70");
        let cli = Cli {
            width: Some(100),
            ..Cli::default()
        };
        assert_eq!(resolve(&cli, &env, TTY).width, 100);
        assert_eq!(resolve(&Cli::default(), &env, TTY).width, 90);

        let env = MockEnv::new().with_var(ENV_COLUMNS, "70");
        assert_eq!(resolve(&Cli::default(), &env, TTY).width, 70);
    }

    #[test]
    fn width_is_clamped() {
        let cli = Cli {
            width: Some(5),
            ..Cli::default()
        };
        assert_eq!(resolve(&cli, &MockEnv::new(), TTY).width, MIN_WIDTH);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = MockEnv::new()
            .with_var(ENV_WIDTH, "wide")
            .with_var(ENV_BORDER, "wavy")
            .with_var(ENV_OUTPUT, "yaml")
            .with_var(ENV_TIMEOUT, "soon");
        let settings = resolve(&Cli::default(), &env, PIPE);
        assert_eq!(settings.width, FALLBACK_WIDTH);
        assert_eq!(settings.border, BorderStyle::Rounded);
        assert_eq!(settings.output, OutputMode::Text);
        assert_eq!(settings.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn no_color_sources() {
        let cli = Cli {
            no_color: true,
            ..Cli::default()
        };
        assert!(!resolve(&cli, &MockEnv::new(), TTY).color);

        let env = MockEnv::new().with_var(ENV_NO_COLOR, "");
        assert!(!resolve(&Cli::default(), &env, TTY).color);
    }

    #[test]
    fn explicit_output_wins_over_detection() {
        let cli = Cli {
            output: Some(OutputMode::Term),
            ..Cli::default()
        };
        let settings = resolve(&cli, &MockEnv::new(), PIPE);
        assert_eq!(settings.output, OutputMode::Term);
        assert!(settings.color);

        let env = MockEnv::new().with_var(ENV_OUTPUT, "JSON");
        let settings = resolve(&Cli::default(), &env, TTY);
        assert_eq!(settings.output, OutputMode::Json);
        assert!(!settings.color);
    }

    #[test]
    fn border_from_env() {
        let env = MockEnv::new().with_var(ENV_BORDER, "heavy");
        assert_eq!(resolve(&Cli::default(), &env, TTY).border, BorderStyle::Heavy);
    }

    #[test]
    fn zero_timeout_disables_limit() {
        let cli = Cli {
            timeout: Some(0),
            ..Cli::default()
        };
        assert_eq!(resolve(&cli, &MockEnv::new(), TTY).timeout, None);

        let env = MockEnv::new().with_var(ENV_TIMEOUT, "5");
        assert_eq!(
            resolve(&Cli::default(), &env, TTY).timeout,
            Some(Duration::from_secs(5))
        );
    }
}
