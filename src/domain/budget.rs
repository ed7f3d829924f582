use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spending guardrail for an expense category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBudget {
    pub name: String,
    pub limit: Decimal,
}

impl CategoryBudget {
    pub fn new(name: impl Into<String>, limit: Decimal) -> Self {
        Self {
            name: name.into(),
            limit,
        }
    }
}

/// Traffic-light classification of budget consumption.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BudgetTier {
    Success,
    Warning,
    Danger,
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BudgetTier::Success => "Within budget",
            BudgetTier::Warning => "Near limit",
            BudgetTier::Danger => "Over limit",
        })
    }
}
