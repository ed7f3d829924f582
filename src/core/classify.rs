//! Pure mappings from amounts and dates to status enums.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::{BudgetTier, Expense, PaymentStatus, Urgency};

/// Days ahead of today that still count as "due soon".
pub const DEFAULT_URGENCY_WINDOW_DAYS: u32 = 3;

const DANGER_ABOVE_PERCENT: u32 = 90;
const WARNING_ABOVE_PERCENT: u32 = 70;

/// `High` when due today, `Medium` when due before `today + 3 days`, `Low` otherwise.
///
/// Past-due dates fall in the `Medium` bucket.
pub fn urgency_of(due: NaiveDate, today: NaiveDate) -> Urgency {
    urgency_within(due, today, DEFAULT_URGENCY_WINDOW_DAYS)
}

/// [`urgency_of`] with a configurable "due soon" window.
pub fn urgency_within(due: NaiveDate, today: NaiveDate, window_days: u32) -> Urgency {
    if same_day(&due, &today) {
        return Urgency::High;
    }
    let horizon = today
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    if due < horizon {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Tier for an unclamped consumption percentage. Boundaries are exclusive.
pub fn budget_tier_of(raw_percent: Decimal) -> BudgetTier {
    if raw_percent > Decimal::from(DANGER_ABOVE_PERCENT) {
        BudgetTier::Danger
    } else if raw_percent > Decimal::from(WARNING_ABOVE_PERCENT) {
        BudgetTier::Warning
    } else {
        BudgetTier::Success
    }
}

/// Current settlement state of an expense as of `today`.
///
/// Only a recorded `Paid` is trusted; `Pending` and `Overdue` are re-derived
/// from the due date.
pub fn payment_status_of(expense: &Expense, today: NaiveDate) -> PaymentStatus {
    if expense.status == PaymentStatus::Paid {
        return PaymentStatus::Paid;
    }
    match expense.due_date {
        Some(due) if due < today => PaymentStatus::Overdue,
        _ => PaymentStatus::Pending,
    }
}

/// Calendar-day equality, ignoring any time-of-day component.
pub fn same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}
