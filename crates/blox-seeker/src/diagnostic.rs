//! Non-fatal problems found while running operations.

use crate::column::ColumnRef;

/// The operation that reported a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Where,
    Sort,
    Stats,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Where => "where",
            Stage::Sort => "sort",
            Stage::Stats => "stats",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A problem that does not stop the pipeline.
///
/// Unknown columns in `where`, `sort` and `stats` are reported this way;
/// the table is still rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No header matches the referenced column.
    UnknownColumn { stage: Stage, column: ColumnRef },
}

impl Diagnostic {
    pub(crate) fn unknown_column(stage: Stage, column: &ColumnRef) -> Self {
        tracing::debug!(%stage, %column, "column not found");
        Diagnostic::UnknownColumn {
            stage,
            column: column.clone(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownColumn { stage, column } => {
                write!(f, "{}: column '{}' not found", stage, column)
            }
        }
    }
}
