use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, ClientId, ClientRef, ClientScoped};

/// How soon an obligation needs attention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        })
    }
}

/// Record an obligation was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ObligationSource {
    Expense(Uuid),
    TaxPayment(ClientId),
}

/// A payment that falls due on a given day. Derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Obligation {
    pub client: ClientRef,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub priority: Urgency,
    pub source: ObligationSource,
}

impl ClientScoped for Obligation {
    fn client_ref(&self) -> &ClientRef {
        &self.client
    }
}

impl Amounted for Obligation {
    fn amount(&self) -> Decimal {
        self.amount
    }
}
