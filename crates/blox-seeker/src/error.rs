//! Error types for the seeker crate.

use thiserror::Error;

/// Errors raised while parsing operations.
///
/// Evaluation itself never fails: cells that do not coerce are skipped and
/// unknown columns become [`Diagnostic`](crate::Diagnostic)s.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// Invalid regular expression pattern in a `~` condition.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A `where` condition that cannot be parsed.
    #[error("invalid condition '{condition}': {reason}")]
    InvalidCondition {
        condition: String,
        reason: &'static str,
    },

    /// An operation directive that cannot be parsed.
    #[error("invalid directive '{directive}': {reason}")]
    InvalidDirective {
        directive: String,
        reason: &'static str,
    },
}

impl SeekerError {
    pub(crate) fn condition(condition: &str, reason: &'static str) -> Self {
        SeekerError::InvalidCondition {
            condition: condition.to_string(),
            reason,
        }
    }

    pub(crate) fn directive(directive: &str, reason: &'static str) -> Self {
        SeekerError::InvalidDirective {
            directive: directive.to_string(),
            reason,
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
