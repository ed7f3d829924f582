use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Client id `{0}` is already registered")]
    DuplicateClient(String),
    #[error("Client id `{0}` is reserved")]
    ReservedClientId(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// What is wrong with a submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldProblem {
    Missing,
    NotANumber(String),
    Negative(String),
    /// Above the largest amount a single record may carry.
    TooLarge(String),
}

/// A single rejected field of an add request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field),
            FieldProblem::NotANumber(raw) => {
                write!(f, "{} must be a number (got `{}`)", self.field, raw)
            }
            FieldProblem::Negative(raw) => {
                write!(f, "{} must not be negative (got `{}`)", self.field, raw)
            }
            FieldProblem::TooLarge(raw) => {
                write!(f, "{} is too large (got `{}`)", self.field, raw)
            }
        }
    }
}

/// Raised when an add request is missing required fields or carries a bad amount.
///
/// Every offending field is listed; nothing is recorded when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Names of the fields that were left empty.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|issue| issue.problem == FieldProblem::Missing)
            .map(|issue| issue.field.as_str())
            .collect()
    }

    /// Names of every rejected field, in submission order.
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation failed: ")?;
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}
