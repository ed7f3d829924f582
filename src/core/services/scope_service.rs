use crate::domain::{ClientScope, ClientScoped};

/// Applies a client selector to any collection of client-owned records.
pub struct ScopeService;

impl ScopeService {
    /// Keeps the records visible under `scope`, preserving input order.
    ///
    /// Firm-wide records survive every selector; another client's records never do.
    pub fn scope_for<I>(records: I, scope: &ClientScope) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: ClientScoped,
    {
        records
            .into_iter()
            .filter(|record| scope.includes(record.client_ref()))
            .collect()
    }
}
