pub mod budget;
pub mod cash_flow;
pub mod client;
pub mod common;
pub mod expense;
pub mod obligation;
pub mod summary;

pub use budget::{BudgetTier, CategoryBudget};
pub use cash_flow::{CashFlowEntry, CashFlowStatus, FlowKind};
pub use client::{Classification, Client, ClientStatus};
pub use common::{Amounted, ClientId, ClientRef, ClientScope, ClientScoped, FIRM_WIDE};
pub use expense::{Expense, PaymentStatus};
pub use obligation::{Obligation, ObligationSource, Urgency};
pub use summary::{
    CashFlowTotals, CategoryUtilization, ClientRoster, ExecutiveSummary, ExpenseOverview,
    MonthlyPerformance, Ratio, RevenueShare, YearMonth,
};
