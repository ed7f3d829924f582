use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Boundary spelling for firm-wide records and the "every client" selector.
pub const FIRM_WIDE: &str = "all";

/// Stable identifier of a client of the firm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Who a ledger record belongs to.
///
/// Serialized as `"all"` for firm-wide records and as the bare client id
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientRef {
    #[default]
    Firm,
    Client(ClientId),
}

impl ClientRef {
    pub fn client(id: impl Into<String>) -> Self {
        Self::Client(ClientId::new(id))
    }

    pub fn client_id(&self) -> Option<&ClientId> {
        match self {
            ClientRef::Firm => None,
            ClientRef::Client(id) => Some(id),
        }
    }

    pub fn is_firm_wide(&self) -> bool {
        matches!(self, ClientRef::Firm)
    }
}

impl From<String> for ClientRef {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == FIRM_WIDE {
            ClientRef::Firm
        } else {
            ClientRef::Client(ClientId::new(trimmed))
        }
    }
}

impl From<ClientRef> for String {
    fn from(value: ClientRef) -> Self {
        match value {
            ClientRef::Firm => FIRM_WIDE.to_string(),
            ClientRef::Client(id) => id.0,
        }
    }
}

impl From<ClientId> for ClientRef {
    fn from(value: ClientId) -> Self {
        ClientRef::Client(value)
    }
}

impl fmt::Display for ClientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientRef::Firm => f.write_str(FIRM_WIDE),
            ClientRef::Client(id) => f.write_str(id.as_str()),
        }
    }
}

/// Client selector applied to every dashboard section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientScope {
    #[default]
    Everyone,
    Client(ClientId),
}

impl ClientScope {
    pub fn client(id: impl Into<String>) -> Self {
        Self::Client(ClientId::new(id))
    }

    /// Whether a record owned by `owner` is visible under this selector.
    ///
    /// Firm-wide records are visible under every selector.
    pub fn includes(&self, owner: &ClientRef) -> bool {
        match (self, owner) {
            (ClientScope::Everyone, _) => true,
            (ClientScope::Client(_), ClientRef::Firm) => true,
            (ClientScope::Client(selected), ClientRef::Client(id)) => selected == id,
        }
    }

    /// Whether a client itself (not one of its records) is selected.
    pub fn selects_client(&self, id: &ClientId) -> bool {
        match self {
            ClientScope::Everyone => true,
            ClientScope::Client(selected) => selected == id,
        }
    }
}

impl FromStr for ClientScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClientScope::from(s.to_string()))
    }
}

impl From<String> for ClientScope {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == FIRM_WIDE {
            ClientScope::Everyone
        } else {
            ClientScope::Client(ClientId::new(trimmed))
        }
    }
}

impl From<ClientScope> for String {
    fn from(value: ClientScope) -> Self {
        match value {
            ClientScope::Everyone => FIRM_WIDE.to_string(),
            ClientScope::Client(id) => id.0,
        }
    }
}

impl fmt::Display for ClientScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientScope::Everyone => f.write_str(FIRM_WIDE),
            ClientScope::Client(id) => f.write_str(id.as_str()),
        }
    }
}

/// Records that belong to a client or to the whole firm.
pub trait ClientScoped {
    fn client_ref(&self) -> &ClientRef;
}

impl<T: ClientScoped + ?Sized> ClientScoped for &T {
    fn client_ref(&self) -> &ClientRef {
        (**self).client_ref()
    }
}

/// Records carrying a non-negative monetary amount.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

impl<T: Amounted + ?Sized> Amounted for &T {
    fn amount(&self) -> Decimal {
        (**self).amount()
    }
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
pub use serde;
