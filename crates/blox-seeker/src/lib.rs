//! Seeker - the operation engine for parsed command-output tables.
//!
//! Seeker takes a [`Table`](blox_table::Table) and applies up to five
//! operations:
//!
//! - **select**: keep and reorder columns
//! - **where**: keep rows matching one condition
//! - **sort**: order rows by one column, optionally reversed
//! - **limit**: keep the first N rows
//! - **stats**: summarize one numeric column
//!
//! # Quick Start
//!
//! ```rust
//! use blox_seeker::Operations;
//! use blox_table::parse_text;
//!
//! let output = "Name\tValue\nA\t10\nB\t20\nC\t30\n";
//! let table = parse_text(output).table().cloned().unwrap();
//!
//! let report = Operations::from_directives(["where=Value>=20", "stats=Value"])
//!     .unwrap()
//!     .run(&table);
//!
//! assert_eq!(report.table.row_count(), 2);
//! let stats = report.stats.unwrap();
//! assert_eq!(stats.sum, 50.0);
//! assert_eq!(stats.avg, 25.0);
//! ```
//!
//! # Operation Order
//!
//! Operations always run in the same order, whatever order they were given
//! in:
//!
//! ```text
//! select → where → sort → limit → stats
//! ```
//!
//! so `where` and `sort` can only see the selected columns, and statistics
//! cover the rows that survive the limit.
//!
//! # Columns
//!
//! A [`ColumnRef`] is either a position (any integer, negative from the
//! right) or a name. Names match headers case-insensitively, exact match
//! first, then the first header starting with the name.
//!
//! # Conditions
//!
//! | Operator | Meaning |
//! |----------|---------|
//! | `=` `!=` | numeric on numeric columns when both sides parse, exact text otherwise |
//! | `>` `>=` `<` `<=` | numeric; cells that do not parse never match |
//! | `~` | regular expression search on the raw cell text |
//!
//! # Errors
//!
//! Parsing fails with [`SeekerError`] on malformed conditions and
//! directives. Running never fails: unknown columns become
//! [`Diagnostic`]s.

mod clause;
mod column;
mod diagnostic;
mod directive;
mod error;
mod op;
mod ordering;
mod query;
mod stats;
mod value;

// Re-export public API
pub use clause::{Condition, Operand};
pub use column::{parse_list, ColumnRef};
pub use diagnostic::{Diagnostic, Stage};
pub use directive::{Directive, Operations, Report};
pub use error::{Result, SeekerError};
pub use op::Op;
pub use ordering::{compare_values, Dir, SortBy};
pub use query::{filter, limit, select, sort, Outcome, Query};
pub use stats::{stats, ColumnStats};
pub use value::Value;
