//! Table model and heuristics for turning raw command output into rows.
//!
//! The crate covers the first three stages of the blox engine:
//!
//! - [`detect`] decides whether a block of lines is tabular and which
//!   [`SplitStrategy`] carves it into cells
//! - [`parse`] builds a [`Table`] from the header line and the data lines
//! - [`infer`] classifies each column as one of the [`ColumnType`]s
//!
//! # Example
//!
//! ```rust
//! use blox_table::{parse_text, ColumnType, Parsed};
//!
//! let output = "Name\tAge\tCity\nAlice\t30\tNYC\nBob\t25\tLA";
//! let Parsed::Table(table, _) = parse_text(output) else {
//!     panic!("expected a table");
//! };
//!
//! assert_eq!(table.headers(), ["Name", "Age", "City"]);
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.column_types()[1], ColumnType::Integer);
//! ```
//!
//! Detection is a best-effort guess. Output that no strategy can split
//! consistently comes back as [`Parsed::Text`] and is meant to be shown
//! verbatim.

pub mod detect;
pub mod infer;
pub mod parse;
mod table;

pub use detect::{content_lines, detect, Detection, SplitStrategy};
pub use infer::{classify, infer, infer_column, parse_number};
pub use parse::{parse, parse_text, Parsed};
pub use table::{ColumnType, Table};
