use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, ClientRef, ClientScoped};

/// Direction of money relative to the firm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FlowKind {
    #[default]
    Inflow,
    Outflow,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CashFlowStatus {
    Confirmed,
    Pending,
}

impl fmt::Display for CashFlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CashFlowStatus::Confirmed => "Confirmed",
            CashFlowStatus::Pending => "Pending",
        })
    }
}

/// A single movement of money in or out of the firm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowEntry {
    pub id: Uuid,
    pub kind: FlowKind,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub client: ClientRef,
    pub date: NaiveDate,
    pub status: CashFlowStatus,
}

impl CashFlowEntry {
    /// Builds a confirmed entry. Amount sign is dropped; direction lives in `kind`.
    pub fn new(
        kind: FlowKind,
        amount: Decimal,
        description: impl Into<String>,
        category: impl Into<String>,
        client: ClientRef,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount: amount.abs(),
            description: description.into(),
            category: category.into(),
            client,
            date,
            status: CashFlowStatus::Confirmed,
        }
    }

    pub fn with_status(mut self, status: CashFlowStatus) -> Self {
        self.status = status;
        self
    }

}

impl ClientScoped for CashFlowEntry {
    fn client_ref(&self) -> &ClientRef {
        &self.client
    }
}

impl Amounted for CashFlowEntry {
    fn amount(&self) -> Decimal {
        self.amount
    }
}
