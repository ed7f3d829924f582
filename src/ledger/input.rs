//! Raw submissions as they arrive from a form, before validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{ClientRef, FlowKind};
use crate::errors::{FieldIssue, FieldProblem, ValidationError};
use crate::utils::parse_decimal;

/// Largest amount accepted from a form, in currency units.
pub const MAX_AMOUNT: u64 = 1_000_000_000_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashFlowInput {
    pub kind: FlowKind,
    pub amount: String,
    pub description: String,
    pub category: String,
    /// `None` records the entry as firm-wide.
    #[serde(default)]
    pub client: Option<ClientRef>,
    /// `None` uses the store clock's today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    #[serde(default)]
    pub client: Option<ClientRef>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub recurring: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub tax_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub monthly_fee: String,
}

/// Collects field issues so every problem is reported at once.
#[derive(Debug, Default)]
pub(crate) struct FieldChecker {
    issues: Vec<FieldIssue>,
}

impl FieldChecker {
    pub(crate) fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, FieldProblem::Missing);
        }
    }

    /// Validates a non-negative amount, returning it when valid.
    pub(crate) fn amount(&mut self, field: &str, raw: &str) -> Option<Decimal> {
        if raw.trim().is_empty() {
            self.push(field, FieldProblem::Missing);
            return None;
        }
        match parse_decimal(raw) {
            Some(value) if value.is_sign_negative() && !value.is_zero() => {
                self.push(field, FieldProblem::Negative(raw.trim().to_string()));
                None
            }
            Some(value) if value > Decimal::from(MAX_AMOUNT) => {
                self.push(field, FieldProblem::TooLarge(raw.trim().to_string()));
                None
            }
            Some(value) => Some(value),
            None => {
                self.push(field, FieldProblem::NotANumber(raw.trim().to_string()));
                None
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }

    /// Finishes validation, handing back the parsed value on success.
    pub(crate) fn finish_with<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        self.finish()?;
        value.ok_or_else(|| ValidationError { issues: Vec::new() })
    }

    fn push(&mut self, field: &str, problem: FieldProblem) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            problem,
        });
    }
}
