use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Client, ClientId, ClientRef};

/// Tax situation of a single client as shown on the tax calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxProfile {
    pub client_id: ClientId,
    pub name: String,
    pub regime: Option<String>,
    pub activity: Option<String>,
    pub next_tax_due: Option<NaiveDate>,
    pub monthly_taxes: BTreeMap<String, Decimal>,
    pub total: Decimal,
}

/// Lookups over the client list.
pub struct ClientService;

impl ClientService {
    /// Clients whose name or email contains `query` (case-insensitive) or whose
    /// tax id contains it verbatim. A blank query matches everyone.
    pub fn search<'a, I>(clients: I, query: &str) -> Vec<&'a Client>
    where
        I: IntoIterator<Item = &'a Client>,
    {
        let query = query.trim();
        let needle = query.to_lowercase();
        clients
            .into_iter()
            .filter(|client| {
                query.is_empty()
                    || client.name.to_lowercase().contains(&needle)
                    || client.email.to_lowercase().contains(&needle)
                    || client.tax_id.contains(query)
            })
            .collect()
    }

    /// Name to show for a record owner. Firm records and unknown ids get `fallback`.
    pub fn display_name<'a, I>(clients: I, owner: &ClientRef, fallback: &str) -> String
    where
        I: IntoIterator<Item = &'a Client>,
    {
        let Some(id) = owner.client_id() else {
            return fallback.to_string();
        };
        match clients.into_iter().find(|client| &client.id == id) {
            Some(client) => client.name.clone(),
            None => {
                debug!(client_id = %id, "record refers to an unknown client");
                fallback.to_string()
            }
        }
    }

    pub fn tax_profiles<'a, I>(clients: I) -> Vec<TaxProfile>
    where
        I: IntoIterator<Item = &'a Client>,
    {
        clients
            .into_iter()
            .map(|client| TaxProfile {
                client_id: client.id.clone(),
                name: client.name.clone(),
                regime: client.tax_regime.classified().cloned(),
                activity: client.activity.classified().cloned(),
                next_tax_due: client.next_tax_due.classified().copied(),
                monthly_taxes: client.monthly_taxes.clone(),
                total: client.monthly_tax_total(),
            })
            .collect()
    }
}
