//! Command-line surface of `blx`.
//!
//! The wrapped command and blox's own flags share one argument list.
//! [`split_args`] pulls blox flags out of it; what remains is the command.
//! The flags are then parsed by clap into [`Cli`], which turns the
//! operation flags into directives.

use std::iter;

use clap::{ArgAction, Parser};

use blox_render::BorderStyle;
use blox_seeker::{Operations, SeekerError};

use crate::output::OutputMode;

const EXAMPLES: &str = "\
Examples:
  blx ls -la
  blx ps aux --select USER,PID,COMMAND
  blx ps aux --where USER=root --sort PID
  blx df -h --where \"Use%>80\" --sort Use% --reverse
  blx docker ps --limit 10
  blx du -sh * --stats Size
  cat data.tsv | blx --sort 2
  blx -- grep --select pattern file.txt";

/// Long flags that take a value. These are recognised anywhere before `--`.
const LONG_WITH_VALUE: &[&str] = &[
    "--select",
    "--where",
    "--sort",
    "--stats",
    "--limit",
    "--width",
    "--border",
    "--output",
    "--timeout",
];

/// Long switches recognised anywhere before `--`.
const LONG_SWITCHES: &[&str] = &["--reverse", "--no-color"];

/// Flags that belong to blx only while no command word has been seen.
const LEADING_SWITCHES: &[&str] = &["--help", "--version", "-h", "-V", "-r"];

const SHORT_WITH_VALUE: &[&str] = &["-s", "-w", "-n"];

/// Run a command and show its tabular output as a queryable table.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "blx",
    version,
    override_usage = "blx [OPTIONS] <COMMAND> [ARGS]...\n       <producer> | blx [OPTIONS]",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Columns to keep, by name or index (comma-separated)
    #[arg(
        short = 's',
        long,
        value_name = "COLUMNS",
        allow_hyphen_values = true,
        help_heading = "Operations"
    )]
    pub select: Option<String>,

    /// Keep rows matching a condition: COL=V, COL!=V, COL>N, COL>=N, COL<N, COL<=N, COL~REGEX
    #[arg(
        short = 'w',
        long = "where",
        value_name = "CONDITION",
        allow_hyphen_values = true,
        help_heading = "Operations"
    )]
    pub filter: Option<String>,

    /// Sort rows by a column
    #[arg(
        long,
        value_name = "COLUMN",
        allow_negative_numbers = true,
        help_heading = "Operations"
    )]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(short, long, help_heading = "Operations")]
    pub reverse: bool,

    /// Show count, sum, min, max and average of a numeric column
    #[arg(
        long,
        value_name = "COLUMN",
        allow_negative_numbers = true,
        help_heading = "Operations"
    )]
    pub stats: Option<String>,

    /// Keep at most N rows
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help_heading = "Operations"
    )]
    pub limit: Option<i64>,

    /// Display width in columns [env: BLOX_WIDTH, COLUMNS]
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    /// Border style: rounded, light, heavy, double, ascii [env: BLOX_BORDER]
    #[arg(long, value_name = "STYLE")]
    pub border: Option<BorderStyle>,

    /// Disable colors [env: NO_COLOR]
    #[arg(long)]
    pub no_color: bool,

    /// Output mode [env: BLOX_OUTPUT]
    #[arg(long, value_enum, value_name = "MODE")]
    pub output: Option<OutputMode>,

    /// Seconds before the command is killed, 0 for no limit [env: BLOX_TIMEOUT]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace) [env: BLOX_LOG]
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses flags already separated by [`split_args`].
    pub fn parse_flags(flags: &[String]) -> Result<Self, clap::Error> {
        Cli::try_parse_from(iter::once("blx").chain(flags.iter().map(String::as_str)))
    }

    /// The operation flags as directive strings, in pipeline order.
    pub fn directives(&self) -> Vec<String> {
        let mut directives = Vec::new();
        if let Some(columns) = &self.select {
            directives.push(format!("select={columns}"));
        }
        if let Some(condition) = &self.filter {
            directives.push(format!("where={condition}"));
        }
        if let Some(column) = &self.sort {
            if self.reverse {
                directives.push(format!("sort={column},reverse"));
            } else {
                directives.push(format!("sort={column}"));
            }
        }
        if let Some(n) = self.limit {
            directives.push(format!("limit={n}"));
        }
        if let Some(column) = &self.stats {
            directives.push(format!("stats={column}"));
        }
        directives
    }

    /// Builds the operation set. Malformed conditions are errors.
    pub fn operations(&self) -> Result<Operations, SeekerError> {
        Operations::from_directives(self.directives())
    }
}

/// Arguments separated into blox flags and the wrapped command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitArgs {
    pub flags: Vec<String>,
    pub command: Vec<String>,
}

enum FlagKind {
    /// Flag whose value is the next argument.
    TakesValue,
    /// Switch, or a flag with its value attached.
    Standalone,
}

/// Splits raw arguments (without the program name) into blox flags and the
/// command to run.
///
/// Long operation and settings flags are taken from anywhere before a
/// literal `--`. Short flags, `--help` and `--version` are only taken before
/// the first command word, so `blx ls -la` keeps `-la` for `ls`. Everything
/// after `--` belongs to the command.
pub fn split_args<I, S>(args: I) -> SplitArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut split = SplitArgs::default();
    let mut args = args.into_iter().map(Into::<String>::into).peekable();

    while let Some(arg) = args.next() {
        if arg == "--" {
            split.command.extend(args.by_ref());
            break;
        }

        match flag_kind(&arg, split.command.is_empty()) {
            Some(FlagKind::TakesValue) => {
                split.flags.push(arg);
                if let Some(value) = args.next_if(|value| value != "--") {
                    split.flags.push(value);
                }
            }
            Some(FlagKind::Standalone) => split.flags.push(arg),
            None => split.command.push(arg),
        }
    }

    tracing::trace!(flags = ?split.flags, command = ?split.command, "arguments split");
    split
}

fn flag_kind(arg: &str, leading: bool) -> Option<FlagKind> {
    if arg.starts_with("--") {
        let (name, inline_value) = match arg.split_once('=') {
            Some((name, _)) => (name, true),
            None => (arg, false),
        };
        if LONG_WITH_VALUE.contains(&name) {
            return Some(if inline_value {
                FlagKind::Standalone
            } else {
                FlagKind::TakesValue
            });
        }
        if LONG_SWITCHES.contains(&name) || (leading && LEADING_SWITCHES.contains(&arg)) {
            return Some(FlagKind::Standalone);
        }
        return None;
    }

    if !leading || !arg.starts_with('-') {
        return None;
    }
    if SHORT_WITH_VALUE.contains(&arg) {
        return Some(FlagKind::TakesValue);
    }
    if SHORT_WITH_VALUE.iter().any(|short| arg.starts_with(short))
        || LEADING_SWITCHES.contains(&arg)
        || is_verbosity(arg)
    {
        return Some(FlagKind::Standalone);
    }
    None
}

fn is_verbosity(arg: &str) -> bool {
    arg.len() > 1 && arg[1..].bytes().all(|b| b == b'v')
}
