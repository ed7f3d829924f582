//! Everything the dashboard shows for one client selector on one day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::core::classify::payment_status_of;
use crate::core::services::{
    BudgetService, ClientService, ScheduleService, SummaryService, TaxProfile,
};
use crate::domain::{
    CashFlowStatus, CashFlowTotals, CategoryUtilization, ClientRoster, ClientScope,
    ExecutiveSummary, ExpenseOverview, FlowKind, MonthlyPerformance, Obligation, PaymentStatus,
    RevenueShare,
};
use crate::ledger::RecordStore;

/// A cash-flow entry with its owner resolved to a display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowLine {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub client_name: String,
    pub kind: FlowKind,
    pub amount: Decimal,
    pub status: CashFlowStatus,
}

/// An expense with its owner resolved and its payment status derived for the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseLine {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub client_name: String,
    pub amount: Decimal,
    pub due_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub recurring: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub scope: ClientScope,
    pub date: NaiveDate,
    pub totals: CashFlowTotals,
    pub cash_flow: Vec<CashFlowLine>,
    pub expenses: Vec<ExpenseLine>,
    pub expense_overview: ExpenseOverview,
    pub budgets: Vec<CategoryUtilization>,
    pub executive_summary: ExecutiveSummary,
    pub revenue_share: Vec<RevenueShare>,
    pub roster: ClientRoster,
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub tax_profiles: Vec<TaxProfile>,
    pub upcoming_obligations: Vec<Obligation>,
    pub due_today: Vec<Obligation>,
    pub obligations_total: Decimal,
}

impl DashboardReport {
    /// Record sections honor `scope`; client-level figures (roster, revenue
    /// share, active head count) always cover the whole firm.
    pub fn build(
        store: &RecordStore,
        config: &Config,
        scope: &ClientScope,
        today: NaiveDate,
    ) -> Self {
        let label = config.firm_label.as_str();

        let cash_flow = store
            .cash_flow_for(scope)
            .map(|entry| CashFlowLine {
                date: entry.date,
                description: entry.description.clone(),
                category: entry.category.clone(),
                client_name: ClientService::display_name(store.clients(), &entry.client, label),
                kind: entry.kind,
                amount: entry.amount,
                status: entry.status,
            })
            .collect();
        let expenses = store
            .expenses_for(scope)
            .map(|expense| ExpenseLine {
                date: expense.date,
                description: expense.description.clone(),
                category: expense.category.clone(),
                client_name: ClientService::display_name(store.clients(), &expense.client, label),
                amount: expense.amount,
                due_date: expense.due_date,
                status: payment_status_of(expense, today),
                recurring: expense.recurring,
            })
            .collect();

        let upcoming_obligations: Vec<Obligation> = ScheduleService::upcoming_within(
            store.clients_for(scope),
            store.expenses_for(scope),
            today,
            config.urgency_window_days,
        )
        .collect();
        let due_today = ScheduleService::obligations_on(&upcoming_obligations, &today)
            .into_iter()
            .cloned()
            .collect();

        let obligations_total = SummaryService::total_amount(&upcoming_obligations);
        let report = Self {
            scope: scope.clone(),
            date: today,
            totals: SummaryService::totals(store.cash_flow_for(scope)),
            cash_flow,
            expenses,
            expense_overview: SummaryService::expense_overview(store.expenses_for(scope), today),
            budgets: BudgetService::budget_utilization(
                store.expenses_for(scope),
                &config.category_budgets,
            ),
            executive_summary: SummaryService::executive_summary(
                store.clients(),
                store.cash_flow_for(scope),
            ),
            revenue_share: SummaryService::client_revenue_share(store.clients()),
            roster: SummaryService::client_roster(store.clients()),
            monthly_performance: SummaryService::monthly_performance(store.cash_flow_for(scope)),
            tax_profiles: ClientService::tax_profiles(store.clients_for(scope)),
            upcoming_obligations,
            due_today,
            obligations_total,
        };
        debug!(
            scope = %report.scope,
            date = %report.date,
            obligations = report.upcoming_obligations.len(),
            "dashboard report built"
        );
        report
    }
}
