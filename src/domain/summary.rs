use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::budget::BudgetTier;
use crate::domain::common::ClientId;

/// Result of a division whose denominator may be zero.
///
/// `Undefined` stands for a zero denominator or a quotient too large to
/// represent; it never aborts an aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Ratio {
    Defined(Decimal),
    Undefined,
}

impl Ratio {
    pub fn of(numerator: Decimal, denominator: Decimal) -> Self {
        // `checked_div` also covers a zero denominator.
        match numerator.checked_div(denominator) {
            Some(value) => Ratio::Defined(value),
            None => Ratio::Undefined,
        }
    }

    /// `numerator / denominator × 100`.
    pub fn percent(numerator: Decimal, denominator: Decimal) -> Self {
        match Self::of(numerator, denominator) {
            Ratio::Defined(value) => match value.checked_mul(Decimal::ONE_HUNDRED) {
                Some(percent) => Ratio::Defined(percent),
                None => Ratio::Undefined,
            },
            Ratio::Undefined => Ratio::Undefined,
        }
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Ratio::Defined(value) => Some(*value),
            Ratio::Undefined => None,
        }
    }

    pub fn value_or_zero(&self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Ratio::Defined(_))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Defined(value) => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, value),
                None => write!(f, "{}", value),
            },
            Ratio::Undefined => f.write_str("N/A"),
        }
    }
}

/// Inflow, outflow and their difference for a set of cash-flow entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CashFlowTotals {
    pub inflow: Decimal,
    pub outflow: Decimal,
    pub net: Decimal,
}

impl CashFlowTotals {
    pub fn from_parts(inflow: Decimal, outflow: Decimal) -> Self {
        Self {
            inflow,
            outflow,
            net: inflow.saturating_sub(outflow),
        }
    }
}

/// Spending against one configured category budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryUtilization {
    pub category: String,
    pub spent: Decimal,
    pub limit: Decimal,
    /// Display value, clamped to `[0, 100]`.
    pub percent: Decimal,
    /// Unclamped consumption; drives `tier`.
    pub raw_percent: Decimal,
    pub tier: BudgetTier,
}

impl CategoryUtilization {
    pub fn remaining(&self) -> Decimal {
        self.limit.saturating_sub(self.spent)
    }

    pub fn is_exceeded(&self) -> bool {
        self.spent > self.limit
    }
}

/// One active client's slice of the firm's monthly revenue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueShare {
    pub client_id: ClientId,
    pub name: String,
    pub amount: Decimal,
    pub percent: Ratio,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutiveSummary {
    pub active_client_count: usize,
    pub average_revenue_per_active_client: Ratio,
    /// `net / inflow × 100`.
    pub profit_margin: Ratio,
}

/// Head counts and revenue across the client roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRoster {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
    pub active_share: Ratio,
    pub active_monthly_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExpenseOverview {
    pub total: Decimal,
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPerformance {
    pub month: YearMonth,
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
    pub margin: Ratio,
}
