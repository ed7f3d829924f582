use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::ClientId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Pending => "Pending",
        })
    }
}

/// A value that is filled in once the firm has classified the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Classification<T> {
    #[default]
    Unclassified,
    Classified(T),
}

impl<T> Classification<T> {
    pub fn classified(&self) -> Option<&T> {
        match self {
            Classification::Unclassified => None,
            Classification::Classified(value) => Some(value),
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, Classification::Classified(_))
    }
}

impl<T: fmt::Display> fmt::Display for Classification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Unclassified => f.write_str("To be defined"),
            Classification::Classified(value) => value.fmt(f),
        }
    }
}

/// A company whose books the firm keeps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub tax_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub monthly_fee: Decimal,
    pub status: ClientStatus,
    pub start_date: NaiveDate,
    pub last_update: NaiveDate,
    #[serde(default)]
    pub pending_documents: u32,
    pub total_paid: Decimal,
    #[serde(default)]
    pub tax_regime: Classification<String>,
    #[serde(default)]
    pub activity: Classification<String>,
    #[serde(default)]
    pub next_tax_due: Classification<NaiveDate>,
    /// Tax name to monthly amount.
    #[serde(default)]
    pub monthly_taxes: BTreeMap<String, Decimal>,
}

impl Client {
    /// A freshly signed client awaiting classification.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        tax_id: impl Into<String>,
        email: impl Into<String>,
        monthly_fee: Decimal,
        today: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tax_id: tax_id.into(),
            email: email.into(),
            phone: String::new(),
            monthly_fee: monthly_fee.abs(),
            status: ClientStatus::Pending,
            start_date: today,
            last_update: today,
            pending_documents: 0,
            total_paid: Decimal::ZERO,
            tax_regime: Classification::Unclassified,
            activity: Classification::Unclassified,
            next_tax_due: Classification::Unclassified,
            monthly_taxes: BTreeMap::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }

    /// Sum of every monthly tax on file for the client, saturating at `Decimal::MAX`.
    pub fn monthly_tax_total(&self) -> Decimal {
        self.monthly_taxes
            .values()
            .fold(Decimal::ZERO, |total, tax| total.saturating_add(*tax))
    }
}
