//! One `blx` invocation from arguments to exit code.
//!
//! [`App::prepare`] splits and parses the arguments and resolves settings
//! without side effects. [`App::execute`] captures the text, parses it,
//! runs the operations and writes the result. The environment, stdin and
//! command runner are injected so the whole flow runs in tests.

use std::io::{self, Write};

use blox_pipe::{CommandRunner, SystemRunner};
use blox_render::{render_stats, TableRenderer};
use blox_seeker::{Operations, Report};
use blox_table::{parse_text, Parsed};

use crate::cli::{split_args, Cli, SplitArgs};
use crate::config::{Settings, Terminal};
use crate::env::{EnvReader, RealEnv, RealStdin, StdinReader};
use crate::error::BloxError;
use crate::output::{to_csv, to_json, OutputMode, SerializeError};

/// Everything decided before the command runs.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Command and its arguments; empty when reading stdin.
    pub command: Vec<String>,
    pub operations: Operations,
    pub settings: Settings,
}

pub struct App {
    env: Box<dyn EnvReader>,
    stdin: Box<dyn StdinReader>,
    runner: Box<dyn CommandRunner>,
    terminal: Terminal,
}

impl App {
    pub fn new(
        env: impl EnvReader + 'static,
        stdin: impl StdinReader + 'static,
        runner: impl CommandRunner + 'static,
        terminal: Terminal,
    ) -> Self {
        App {
            env: Box::new(env),
            stdin: Box::new(stdin),
            runner: Box::new(runner),
            terminal,
        }
    }

    /// An app wired to the real process environment.
    pub fn system() -> Self {
        App::new(RealEnv, RealStdin, SystemRunner, Terminal::detect())
    }

    /// Splits and parses `args` (without the program name).
    pub fn prepare(&self, args: &[String]) -> Result<Invocation, BloxError> {
        let SplitArgs { flags, command } = split_args(args.iter().cloned());
        let cli = Cli::parse_flags(&flags)?;
        let operations = cli.operations()?;
        let settings = Settings::resolve(&cli, self.env.as_ref(), self.terminal);

        Ok(Invocation {
            command,
            operations,
            settings,
        })
    }

    /// Runs a prepared invocation and returns the exit code to report,
    /// which is the wrapped command's own.
    pub fn execute(
        &self,
        invocation: &Invocation,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<i32, BloxError> {
        let (text, code) = self.capture(invocation, err)?;

        let table = match parse_text(&text) {
            Parsed::Table(table, _) => table,
            Parsed::Text(text) => {
                if !invocation.operations.is_empty() {
                    tracing::debug!("output is not a table, operations skipped");
                }
                out.write_all(text.as_bytes())?;
                return Ok(code);
            }
        };

        let report = invocation.operations.run(&table);
        tracing::debug!(
            rows_in = table.row_count(),
            rows_out = report.table.row_count(),
            "operations applied"
        );

        let palette = invocation.settings.palette();
        for diagnostic in &report.diagnostics {
            writeln!(
                err,
                "{}",
                palette.warning.apply_to(format!("warning: {diagnostic}"))
            )?;
        }

        out.write_all(render_report(&report, &invocation.settings)?.as_bytes())?;
        Ok(code)
    }

    /// Prepares and executes, reporting any failure on `err`.
    pub fn run(
        &self,
        args: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<i32> {
        let result = match self.prepare(args) {
            Ok(invocation) => self.execute(&invocation, out, err),
            Err(error) => Err(error),
        };
        match result {
            Ok(code) => Ok(code),
            Err(error) => report_error(&error, out, err),
        }
    }

    fn capture(
        &self,
        invocation: &Invocation,
        err: &mut dyn Write,
    ) -> Result<(String, i32), BloxError> {
        if !invocation.command.is_empty() {
            let captured = self
                .runner
                .run(&invocation.command, invocation.settings.timeout)?;
            if !captured.success() {
                tracing::info!(code = captured.code, "command exited with a failure status");
            }

            // stdout carries the table, so stderr is passed through as-is
            if !captured.stdout.is_empty() && !captured.stderr.is_empty() {
                err.write_all(captured.stderr.as_bytes())?;
            }
            return Ok((captured.primary_output().to_string(), captured.code));
        }

        if self.stdin.is_terminal() {
            return Err(BloxError::Usage(
                "no command given; run `blx <command>` or pipe text into blx (see --help)"
                    .to_string(),
            ));
        }
        Ok((self.stdin.read_to_string()?, 0))
    }
}

/// Writes a failure and returns the exit code for it.
///
/// `--help` and `--version` go to `out` and exit 0. A closed stdout (as in
/// `blx ls | head`) ends the run quietly.
pub fn report_error(
    error: &BloxError,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    match error {
        error if error.is_informational() => {
            write!(out, "{error}")?;
            return Ok(0);
        }
        BloxError::Io(io_err) if io_err.kind() == io::ErrorKind::BrokenPipe => return Ok(0),
        BloxError::Cli(clap_err) => write!(err, "{clap_err}")?,
        other => writeln!(err, "blx: {other}")?,
    }
    Ok(error.exit_code())
}

/// Formats a pipeline result for the resolved output mode.
pub fn render_report(report: &Report, settings: &Settings) -> Result<String, SerializeError> {
    match settings.output {
        OutputMode::Json => {
            let mut json = to_json(&report.table, report.stats.as_ref())?;
            json.push('\n');
            Ok(json)
        }
        OutputMode::Csv => {
            if report.stats.is_some() {
                tracing::debug!("statistics are not part of CSV output");
            }
            to_csv(&report.table)
        }
        OutputMode::Auto | OutputMode::Term | OutputMode::Text => {
            let palette = settings.palette();
            let mut text = TableRenderer::new(palette.clone(), settings.border, settings.width)
                .render(&report.table);
            if !text.is_empty() {
                text.push('\n');
            }
            if let Some(stats) = &report.stats {
                text.push('\n');
                text.push_str(&render_stats(stats, &palette));
                text.push('\n');
            }
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MockEnv, MockStdin};
    use blox_pipe::{Captured, MockFailure, MockRunner};

    const PEOPLE: &str = "Name\tAge\tCity\nAlice\t30\tNYC\nBob\t25\tLA\nCharlie\t35\tSF\n";

    const PIPE: Terminal = Terminal {
        stdout_is_tty: false,
        width: None,
    };

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn app(stdin: MockStdin, runner: MockRunner) -> App {
        App::new(MockEnv::new(), stdin, runner, PIPE)
    }

    fn run(app: &App, words: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = app.run(&args(words), &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn prepare_splits_command_and_operations() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(""));
        let invocation = app
            .prepare(&args(&["ps", "aux", "--sort", "PID", "-n", "3"]))
            .unwrap();
        assert_eq!(invocation.command, args(&["ps", "aux", "-n", "3"]));
        assert_eq!(invocation.operations.query().limit_value(), None);
        assert_eq!(invocation.settings.output, OutputMode::Text);
    }

    #[test]
    fn short_flags_before_command_are_operations() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(""));
        let invocation = app.prepare(&args(&["-n", "3", "ps"])).unwrap();
        assert_eq!(invocation.command, args(&["ps"]));
        assert_eq!(invocation.operations.query().limit_value(), Some(3));
    }

    #[test]
    fn command_output_is_rendered() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));
        let (code, out, err) = run(&app, &["people", "--sort", "Age", "--reverse"]);

        assert_eq!(code, 0);
        assert!(err.is_empty());
        let charlie = out.find("Charlie").unwrap();
        let alice = out.find("Alice").unwrap();
        let bob = out.find("Bob").unwrap();
        assert!(charlie < alice && alice < bob);
        assert!(out.ends_with("╯\n"));
    }

    #[test]
    fn piped_stdin_is_used_without_command() {
        let app = app(MockStdin::piped(PEOPLE), MockRunner::stdout("unused"));
        let (code, out, _) = run(&app, &["--where", "Age>27", "--select", "Name,Age"]);

        assert_eq!(code, 0);
        assert!(out.contains("Alice") && out.contains("Charlie"));
        assert!(!out.contains("Bob"));
        assert!(!out.contains("NYC"));
    }

    #[test]
    fn no_command_on_a_terminal_is_a_usage_error() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(""));
        let (code, out, err) = run(&app, &[]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.starts_with("blx: no command given"));
    }

    #[test]
    fn prose_passes_through_verbatim() {
        let text = "Everything up-to-date\n";
        let app = app(MockStdin::terminal(), MockRunner::stdout(text));
        let (code, out, _) = run(&app, &["git", "push", "--sort", "x"]);
        assert_eq!(code, 0);
        assert_eq!(out, text);
    }

    #[test]
    fn command_exit_code_is_propagated() {
        let runner = MockRunner::captured(Captured {
            stdout: PEOPLE.to_string(),
            stderr: "partial failure\n".to_string(),
            code: 3,
        });
        let app = app(MockStdin::terminal(), runner);
        let (code, out, err) = run(&app, &["people"]);
        assert_eq!(code, 3);
        assert!(out.contains("Alice"));
        assert_eq!(err, "partial failure\n");
    }

    #[test]
    fn stderr_only_output_is_parsed() {
        let runner = MockRunner::captured(Captured {
            stdout: String::new(),
            stderr: PEOPLE.to_string(),
            code: 0,
        });
        let app = app(MockStdin::terminal(), runner);
        let (_, out, err) = run(&app, &["people"]);
        assert!(out.contains("Charlie"));
        assert!(err.is_empty());
    }

    #[test]
    fn missing_command_and_timeout_exit_codes() {
        let not_found = app(MockStdin::terminal(), MockRunner::failing(MockFailure::NotFound));
        let (code, _, err) = run(&not_found, &["nope"]);
        assert_eq!(code, 127);
        assert_eq!(err, "blx: command not found: nope\n");

        let timed_out = app(MockStdin::terminal(), MockRunner::failing(MockFailure::Timeout));
        let (code, _, err) = run(&timed_out, &["--timeout", "2", "sleep", "9"]);
        assert_eq!(code, 124);
        assert!(err.contains("timed out after 2s"));
    }

    #[test]
    fn negative_indices_count_from_the_last_column() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));

        let (code, out, err) = run(&app, &["people", "--select", "-1", "--output", "csv"]);
        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert_eq!(out, "City\nNYC\nLA\nSF\n");

        let (code, out, _) = run(&app, &["people", "--sort", "-1", "--reverse", "--output=csv"]);
        assert_eq!(code, 0);
        assert_eq!(
            out,
            "Name,Age,City\nCharlie,35,SF\nAlice,30,NYC\nBob,25,LA\n"
        );

        let (code, out, _) = run(&app, &["-s", "-2", "people", "--output=csv"]);
        assert_eq!(code, 0);
        assert_eq!(out, "Age\n30\n25\n35\n");
    }

    #[test]
    fn malformed_condition_aborts() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));
        let (code, out, err) = run(&app, &["people", "--where", "Age>old"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.starts_with("blx: invalid operation: invalid condition 'Age>old'"));
    }

    #[test]
    fn unknown_column_warns_and_still_renders() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));
        let (code, out, err) = run(&app, &["people", "--sort", "Height"]);
        assert_eq!(code, 0);
        assert!(out.contains("Alice"));
        assert_eq!(err, "warning: sort: column 'Height' not found\n");
    }

    #[test]
    fn help_goes_to_stdout() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(""));
        let (code, out, err) = run(&app, &["--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("--select"));
        assert!(out.contains("blx ps aux --select USER,PID,COMMAND"));
        assert!(err.is_empty());
    }

    #[test]
    fn bad_flag_value_is_a_usage_error() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));
        let (code, out, err) = run(&app, &["people", "--limit", "many"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("--limit"));
    }

    #[test]
    fn json_output() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));
        let (_, out, _) = run(&app, &["people", "--output", "json", "--stats", "Age", "--limit", "2"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
        assert_eq!(value["stats"]["count"], 2);
        assert_eq!(value["stats"]["sum"], 55.0);
    }

    #[test]
    fn csv_output() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));
        let (_, out, _) = run(&app, &["people", "--output=csv", "--select", "Name,Age"]);
        assert_eq!(out, "Name,Age\nAlice,30\nBob,25\nCharlie,35\n");
    }

    #[test]
    fn stats_block_follows_table() {
        let app = app(MockStdin::terminal(), MockRunner::stdout(PEOPLE));
        let (_, out, _) = run(&app, &["people", "--stats", "Age"]);
        assert!(out.contains("╯\n\nStatistics for column 'Age':\n"));
        assert!(out.ends_with("   Avg: 30.00\n"));
    }

    #[test]
    fn broken_stdout_is_quiet() {
        let error = BloxError::Io(io::Error::from(io::ErrorKind::BrokenPipe));
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(report_error(&error, &mut out, &mut err).unwrap(), 0);
        assert!(err.is_empty());
    }
}
