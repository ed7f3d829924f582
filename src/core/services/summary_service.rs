use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::classify::payment_status_of;
use crate::domain::{
    Amounted, CashFlowEntry, CashFlowTotals, Client, ClientRoster, ClientStatus, ExecutiveSummary,
    Expense, ExpenseOverview, FlowKind, MonthlyPerformance, PaymentStatus, Ratio, RevenueShare, YearMonth,
};

/// Totals and headline figures for the dashboard cards.
pub struct SummaryService;

impl SummaryService {
    /// Sum of the records' amounts. Saturates at `Decimal::MAX` instead of overflowing.
    pub fn total_amount<I>(records: I) -> Decimal
    where
        I: IntoIterator,
        I::Item: Amounted,
    {
        records
            .into_iter()
            .fold(Decimal::ZERO, |total, record| total.saturating_add(record.amount()))
    }

    /// Sums inflows and outflows regardless of confirmation status.
    pub fn totals<'a, I>(entries: I) -> CashFlowTotals
    where
        I: IntoIterator<Item = &'a CashFlowEntry>,
    {
        let mut inflow = Decimal::ZERO;
        let mut outflow = Decimal::ZERO;
        for entry in entries {
            match entry.kind {
                FlowKind::Inflow => inflow = inflow.saturating_add(entry.amount),
                FlowKind::Outflow => outflow = outflow.saturating_add(entry.amount),
            }
        }
        CashFlowTotals::from_parts(inflow, outflow)
    }

    /// Monthly fee of each active client and its share of the active total.
    ///
    /// Sorted by amount, largest first; equal amounts keep input order.
    pub fn client_revenue_share<'a, I>(clients: I) -> Vec<RevenueShare>
    where
        I: IntoIterator<Item = &'a Client>,
    {
        let active: Vec<&Client> = clients.into_iter().filter(|c| c.is_active()).collect();
        let total = active
            .iter()
            .fold(Decimal::ZERO, |total, c| total.saturating_add(c.monthly_fee));
        let mut shares: Vec<RevenueShare> = active
            .into_iter()
            .map(|client| RevenueShare {
                client_id: client.id.clone(),
                name: client.name.clone(),
                amount: client.monthly_fee,
                percent: Ratio::percent(client.monthly_fee, total),
            })
            .collect();
        shares.sort_by(|a, b| b.amount.cmp(&a.amount));
        shares
    }

    /// Active head count, average fee per active client and profit margin.
    pub fn executive_summary<'a, C, E>(clients: C, entries: E) -> ExecutiveSummary
    where
        C: IntoIterator<Item = &'a Client>,
        E: IntoIterator<Item = &'a CashFlowEntry>,
    {
        let (active_client_count, active_fees) = clients
            .into_iter()
            .filter(|client| client.is_active())
            .fold((0usize, Decimal::ZERO), |(count, fees), client| {
                (count + 1, fees.saturating_add(client.monthly_fee))
            });
        let totals = Self::totals(entries);

        let average_revenue_per_active_client =
            Ratio::of(active_fees, Decimal::from(active_client_count));
        let profit_margin = Ratio::percent(totals.net, totals.inflow);
        if !average_revenue_per_active_client.is_defined() {
            debug!("no active clients; average revenue is undefined");
        }
        if !profit_margin.is_defined() {
            debug!("no inflow; profit margin is undefined");
        }

        ExecutiveSummary {
            active_client_count,
            average_revenue_per_active_client,
            profit_margin,
        }
    }

    /// Head counts by status plus the active clients' monthly revenue.
    pub fn client_roster<'a, I>(clients: I) -> ClientRoster
    where
        I: IntoIterator<Item = &'a Client>,
    {
        let mut roster = ClientRoster {
            total: 0,
            active: 0,
            pending: 0,
            inactive: 0,
            active_share: Ratio::Undefined,
            active_monthly_revenue: Decimal::ZERO,
        };
        for client in clients {
            roster.total += 1;
            match client.status {
                ClientStatus::Active => {
                    roster.active += 1;
                    roster.active_monthly_revenue =
                        roster.active_monthly_revenue.saturating_add(client.monthly_fee);
                }
                ClientStatus::Pending => roster.pending += 1,
                ClientStatus::Inactive => roster.inactive += 1,
            }
        }
        roster.active_share =
            Ratio::percent(Decimal::from(roster.active), Decimal::from(roster.total));
        roster
    }

    /// Total spent and counts per derived payment status as of `today`.
    pub fn expense_overview<'a, I>(expenses: I, today: NaiveDate) -> ExpenseOverview
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let expenses: Vec<&Expense> = expenses.into_iter().collect();
        let mut overview = ExpenseOverview {
            total: Self::total_amount(&expenses),
            ..ExpenseOverview::default()
        };
        for expense in expenses {
            match payment_status_of(expense, today) {
                PaymentStatus::Paid => overview.paid += 1,
                PaymentStatus::Pending => overview.pending += 1,
                PaymentStatus::Overdue => overview.overdue += 1,
            }
        }
        overview
    }

    /// Revenue, expenses and margin per calendar month, newest month first.
    pub fn monthly_performance<'a, I>(entries: I) -> Vec<MonthlyPerformance>
    where
        I: IntoIterator<Item = &'a CashFlowEntry>,
    {
        let mut by_month: BTreeMap<YearMonth, Vec<&CashFlowEntry>> = BTreeMap::new();
        for entry in entries {
            by_month.entry(YearMonth::of(entry.date)).or_default().push(entry);
        }
        by_month
            .into_iter()
            .rev()
            .map(|(month, entries)| {
                let totals = Self::totals(entries);
                MonthlyPerformance {
                    month,
                    revenue: totals.inflow,
                    expenses: totals.outflow,
                    profit: totals.net,
                    margin: Ratio::percent(totals.net, totals.inflow),
                }
            })
            .collect()
    }
}
