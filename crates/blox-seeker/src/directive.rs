//! Textual operation directives and the full operation set.
//!
//! A directive is `<kind>=<argument>`, for instance `select=Name,Age`,
//! `where=Age>27`, `sort=Size,reverse`, `limit=5` or `stats=Size`. The
//! command line maps each flag to one directive.

use std::str::FromStr;

use blox_table::Table;

use crate::clause::Condition;
use crate::column::{self, ColumnRef};
use crate::diagnostic::{Diagnostic, Stage};
use crate::error::{Result, SeekerError};
use crate::ordering::{Dir, SortBy};
use crate::query::Query;
use crate::stats::{stats, ColumnStats};

/// One requested operation.
#[derive(Debug, Clone)]
pub enum Directive {
    Select(Vec<ColumnRef>),
    Where(Condition),
    Sort(SortBy),
    Limit(i64),
    Stats(ColumnRef),
}

impl FromStr for Directive {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, argument) = s
            .split_once('=')
            .ok_or_else(|| SeekerError::directive(s, "expected <kind>=<argument>"))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(Directive::Select(column::parse_list(argument))),
            "where" => Ok(Directive::Where(Condition::parse(argument)?)),
            "sort" => parse_sort(argument)
                .map(Directive::Sort)
                .ok_or_else(|| SeekerError::directive(s, "missing sort column")),
            "limit" => argument
                .trim()
                .parse()
                .map(Directive::Limit)
                .map_err(|_| SeekerError::directive(s, "limit must be an integer")),
            "stats" => {
                let argument = argument.trim();
                if argument.is_empty() {
                    Err(SeekerError::directive(s, "missing stats column"))
                } else {
                    Ok(Directive::Stats(ColumnRef::from(argument)))
                }
            }
            _ => Err(SeekerError::directive(s, "unknown operation")),
        }
    }
}

/// Parses `Column` or `Column,reverse`.
fn parse_sort(argument: &str) -> Option<SortBy> {
    let (column, dir) = match argument.rsplit_once(',') {
        Some((column, flag)) if flag.trim().eq_ignore_ascii_case("reverse") => (column, Dir::Desc),
        _ => (argument, Dir::Asc),
    };
    let column = column.trim();
    (!column.is_empty()).then(|| SortBy::new(column, dir))
}

/// The complete set of operations for one invocation: a [`Query`] plus an
/// optional statistics column.
#[derive(Debug, Clone, Default)]
pub struct Operations {
    query: Query,
    stats: Option<ColumnRef>,
}

/// Result of running [`Operations`] over a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub table: Table,
    pub stats: Option<ColumnStats>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Operations {
    pub fn new() -> Self {
        Operations::default()
    }

    /// Parses and applies directives in order.
    ///
    /// A later directive of the same kind replaces an earlier one.
    pub fn from_directives<I, S>(directives: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        directives
            .into_iter()
            .try_fold(Operations::new(), |ops, text| {
                Ok(ops.apply(text.as_ref().parse()?))
            })
    }

    /// Adds one directive.
    pub fn apply(self, directive: Directive) -> Self {
        let Operations { query, stats } = self;
        match directive {
            Directive::Select(columns) => Operations {
                query: query.select(columns),
                stats,
            },
            Directive::Where(condition) => Operations {
                query: query.filter(condition),
                stats,
            },
            Directive::Sort(sort_by) => Operations {
                query: query.sort_by(sort_by),
                stats,
            },
            Directive::Limit(n) => Operations {
                query: query.limit(n),
                stats,
            },
            Directive::Stats(column) => Operations {
                query,
                stats: Some(column),
            },
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_stats(mut self, column: impl Into<ColumnRef>) -> Self {
        self.stats = Some(column.into());
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn stats_column(&self) -> Option<&ColumnRef> {
        self.stats.as_ref()
    }

    /// Returns `true` if nothing would change the table or add statistics.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.stats.is_none()
    }

    /// Runs the query, then computes statistics on the resulting table.
    pub fn run(&self, table: &Table) -> Report {
        let outcome = self.query.run(table);
        let mut diagnostics = outcome.diagnostics;

        let stats = self.stats.as_ref().and_then(|column| {
            let computed = stats(&outcome.table, column);
            if computed.is_none() {
                diagnostics.push(Diagnostic::unknown_column(Stage::Stats, column));
            }
            computed
        });

        Report {
            table: outcome.table,
            stats,
            diagnostics,
        }
    }
}
