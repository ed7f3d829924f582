//! Compares categorized spending with configured category budgets.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::classify::budget_tier_of;
use crate::domain::{CategoryBudget, CategoryUtilization, Expense, Ratio};

/// Stateless budgeting utilities that operate over scoped expenses.
pub struct BudgetService;

impl BudgetService {
    /// One utilization row per configured category, in configuration order.
    ///
    /// `percent` is clamped to `[0, 100]` for display while the tier is taken
    /// from the unclamped ratio. Expenses in unconfigured categories are ignored.
    pub fn budget_utilization<'a, I>(
        expenses: I,
        budgets: &[CategoryBudget],
    ) -> Vec<CategoryUtilization>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let spent_by_category = Self::spent_by_category(expenses);
        budgets
            .iter()
            .map(|budget| {
                let spent = spent_by_category
                    .get(budget.name.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                Self::utilization(budget, spent)
            })
            .collect()
    }

    /// Total spent per category name.
    pub fn spent_by_category<'a, I>(expenses: I) -> HashMap<&'a str, Decimal>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut totals: HashMap<&'a str, Decimal> = HashMap::new();
        for expense in expenses {
            let spent = totals.entry(expense.category.as_str()).or_default();
            *spent = spent.saturating_add(expense.amount);
        }
        totals
    }

    fn utilization(budget: &CategoryBudget, spent: Decimal) -> CategoryUtilization {
        // Non-positive limits are rejected by config validation; treat them as unused here.
        // Spending too large to express as a percentage saturates.
        let raw_percent = if budget.limit > Decimal::ZERO {
            Ratio::percent(spent, budget.limit)
                .value()
                .unwrap_or(Decimal::MAX)
        } else {
            Decimal::ZERO
        };
        let percent = raw_percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        CategoryUtilization {
            category: budget.name.clone(),
            spent,
            limit: budget.limit,
            percent,
            raw_percent,
            tier: budget_tier_of(raw_percent),
        }
    }
}
