use std::collections::VecDeque;

use tracing::{info, warn};
use uuid::Uuid;

use crate::core::time::{Clock, SystemClock};
use crate::domain::{CashFlowEntry, Client, ClientId, ClientScope, Expense, FIRM_WIDE};
use crate::errors::{LedgerError, ValidationError};
use crate::ledger::input::{CashFlowInput, ClientInput, ExpenseInput, FieldChecker};
use crate::ledger::notifications::{Notification, NotificationSink};

/// Session-owned collections of cash-flow entries, expenses and clients.
///
/// Records are append-only and iterate newest first. Dropping the store is the
/// only way to discard them.
pub struct RecordStore {
    cash_flow: VecDeque<CashFlowEntry>,
    expenses: VecDeque<Expense>,
    clients: VecDeque<Client>,
    clock: Box<dyn Clock>,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            cash_flow: VecDeque::new(),
            expenses: VecDeque::new(),
            clients: VecDeque::new(),
            clock,
            sinks: Vec::new(),
        }
    }

    /// Registers an observer for add outcomes.
    pub fn subscribe(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Validates and records a cash-flow entry as `Confirmed`.
    pub fn add_cash_flow_entry(
        &mut self,
        input: CashFlowInput,
    ) -> Result<&CashFlowEntry, LedgerError> {
        let mut checker = FieldChecker::default();
        let amount = checker.amount("amount", &input.amount);
        checker.require("description", &input.description);
        checker.require("category", &input.category);
        let amount = match checker.finish_with(amount) {
            Ok(amount) => amount,
            Err(error) => return Err(self.reject("cash-flow entry", error)),
        };

        let date = input.date.unwrap_or_else(|| self.clock.today());
        let entry = CashFlowEntry::new(
            input.kind,
            amount,
            input.description.trim(),
            input.category.trim(),
            input.client.unwrap_or_default(),
            date,
        );
        info!(
            id = %entry.id,
            kind = ?entry.kind,
            amount = %entry.amount,
            "cash-flow entry added"
        );
        self.cash_flow.push_front(entry);
        self.emit(Notification::success("Cash-flow entry added."));
        Ok(&self.cash_flow[0])
    }

    /// Validates and records an expense as `Pending`.
    pub fn add_expense(&mut self, input: ExpenseInput) -> Result<&Expense, LedgerError> {
        let mut checker = FieldChecker::default();
        checker.require("description", &input.description);
        let amount = checker.amount("amount", &input.amount);
        checker.require("category", &input.category);
        let amount = match checker.finish_with(amount) {
            Ok(amount) => amount,
            Err(error) => return Err(self.reject("expense", error)),
        };

        let date = input.date.unwrap_or_else(|| self.clock.today());
        let mut expense = Expense::new(
            input.description.trim(),
            amount,
            input.category.trim(),
            input.client.unwrap_or_default(),
            date,
        )
        .recurring(input.recurring);
        expense.due_date = input.due_date;
        info!(
            id = %expense.id,
            amount = %expense.amount,
            category = %expense.category,
            "expense added"
        );
        self.expenses.push_front(expense);
        self.emit(Notification::success("Expense added."));
        Ok(&self.expenses[0])
    }

    /// Validates and records a client awaiting classification.
    pub fn add_client(&mut self, input: ClientInput) -> Result<&Client, LedgerError> {
        let mut checker = FieldChecker::default();
        checker.require("name", &input.name);
        checker.require("tax_id", &input.tax_id);
        checker.require("email", &input.email);
        let fee = checker.amount("monthly_fee", &input.monthly_fee);
        let fee = match checker.finish_with(fee) {
            Ok(fee) => fee,
            Err(error) => return Err(self.reject("client", error)),
        };

        let mut client = Client::new(
            ClientId::new(Uuid::new_v4().to_string()),
            input.name.trim(),
            input.tax_id.trim(),
            input.email.trim(),
            fee,
            self.clock.today(),
        );
        client.phone = input.phone.trim().to_string();
        info!(id = %client.id, name = %client.name, "client added");
        self.clients.push_front(client);
        self.emit(Notification::success("Client added."));
        Ok(&self.clients[0])
    }

    /// Records an already-built client, keeping ids unique.
    ///
    /// Used for seeding and imports; no notification is emitted.
    pub fn insert_client(&mut self, client: Client) -> Result<ClientId, LedgerError> {
        if client.id.as_str() == FIRM_WIDE {
            return Err(LedgerError::ReservedClientId(client.id.to_string()));
        }
        if self.client(&client.id).is_some() {
            return Err(LedgerError::DuplicateClient(client.id.to_string()));
        }
        let id = client.id.clone();
        self.clients.push_front(client);
        Ok(id)
    }

    /// Records an already-built cash-flow entry without validation or notification.
    pub fn insert_cash_flow_entry(&mut self, entry: CashFlowEntry) -> Uuid {
        let id = entry.id;
        self.cash_flow.push_front(entry);
        id
    }

    /// Records an already-built expense without validation or notification.
    pub fn insert_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push_front(expense);
        id
    }

    pub fn client(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| &client.id == id)
    }

    /// Every client, newest first.
    pub fn clients(&self) -> impl Iterator<Item = &Client> + '_ {
        self.clients.iter()
    }

    /// Every cash-flow entry, newest first.
    pub fn cash_flow(&self) -> impl Iterator<Item = &CashFlowEntry> + '_ {
        self.cash_flow.iter()
    }

    /// Every expense, newest first.
    pub fn expenses(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter()
    }

    /// Cash-flow entries visible under `scope`, newest first.
    pub fn cash_flow_for<'a>(
        &'a self,
        scope: &'a ClientScope,
    ) -> impl Iterator<Item = &'a CashFlowEntry> + 'a {
        self.cash_flow
            .iter()
            .filter(move |entry| scope.includes(&entry.client))
    }

    /// Expenses visible under `scope`, newest first.
    pub fn expenses_for<'a>(
        &'a self,
        scope: &'a ClientScope,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |expense| scope.includes(&expense.client))
    }

    /// Clients selected by `scope`, newest first.
    pub fn clients_for<'a>(
        &'a self,
        scope: &'a ClientScope,
    ) -> impl Iterator<Item = &'a Client> + 'a {
        self.clients
            .iter()
            .filter(move |client| scope.selects_client(&client.id))
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn cash_flow_count(&self) -> usize {
        self.cash_flow.len()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    fn reject(&mut self, record: &str, error: ValidationError) -> LedgerError {
        warn!(record, %error, "rejected add request");
        self.emit(Notification::error(error.to_string()));
        LedgerError::Validation(error)
    }

    fn emit(&mut self, notification: Notification) {
        for sink in self.sinks.iter_mut() {
            sink.notify(&notification);
        }
    }
}
