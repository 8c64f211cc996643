//! # blox
//!
//! `blx` runs a command, detects whether its output is a table, and shows
//! it as a box-drawn table that can be filtered, sorted, trimmed and
//! summarized from the command line:
//!
//! ```text
//! blx ps aux --where "%CPU>1.0" --sort %CPU --reverse --limit 10
//! blx df -h --select Filesystem,Use% --stats Use%
//! kubectl get pods | blx --where STATUS!=Running
//! ```
//!
//! Output that is not a table passes through untouched.
//!
//! ## Crates
//!
//! - [`blox_table`]: detection, parsing and type inference
//! - [`blox_seeker`]: select, where, sort, limit and stats
//! - [`blox_render`]: the box-drawn renderer
//! - [`blox_pipe`]: running the wrapped command
//!
//! This crate holds the command line, settings, logging, output modes and
//! the [`App`] that ties them together.

pub mod app;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod output;

pub use app::{render_report, report_error, App, Invocation};
pub use cli::{split_args, Cli, SplitArgs};
pub use config::{Settings, Terminal};
pub use env::{EnvReader, MockEnv, MockStdin, RealEnv, RealStdin, StdinReader};
pub use error::{BloxError, EXIT_USAGE};
pub use logging::{init_logging, LogConfig, LogError};
pub use output::{to_csv, to_json, OutputMode, SerializeError};
