use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, ClientRef, ClientScoped};

/// Settlement state of an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
        })
    }
}

/// A categorized cost incurred by the firm or on behalf of a client.
///
/// `status` is the value recorded when the expense was entered. Readers that
/// need the current state derive it with
/// [`payment_status_of`](crate::core::classify::payment_status_of).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub client: ClientRef,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub recurring: bool,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        client: ClientRef,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount: amount.abs(),
            category: category.into(),
            client,
            date,
            due_date: None,
            status: PaymentStatus::Pending,
            recurring: false,
        }
    }

    pub fn due_on(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }
}

impl ClientScoped for Expense {
    fn client_ref(&self) -> &ClientRef {
        &self.client
    }
}

impl Amounted for Expense {
    fn amount(&self) -> Decimal {
        self.amount
    }
}
