//! The firm's demonstration book: four clients plus January 2024 activity.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::time::Clock;
use crate::domain::{
    CashFlowEntry, CashFlowStatus, Classification, Client, ClientId, ClientRef, ClientStatus,
    Expense, FlowKind, PaymentStatus,
};
use crate::errors::LedgerError;
use crate::ledger::RecordStore;

/// Builds a store holding the demonstration records, newest first.
pub fn seeded_store(clock: Box<dyn Clock>) -> Result<RecordStore, LedgerError> {
    let mut store = RecordStore::with_clock(clock);
    // Listed newest first; inserted oldest first so iteration order matches.
    for client in demo_clients()?.into_iter().rev() {
        store.insert_client(client)?;
    }
    for entry in demo_cash_flow()?.into_iter().rev() {
        store.insert_cash_flow_entry(entry);
    }
    for expense in demo_expenses()?.into_iter().rev() {
        store.insert_expense(expense);
    }
    tracing::debug!(
        clients = store.client_count(),
        entries = store.cash_flow_count(),
        expenses = store.expense_count(),
        "seeded demonstration store"
    );
    Ok(store)
}

pub fn demo_clients() -> Result<Vec<Client>, LedgerError> {
    Ok(vec![
        client(ClientSeed {
            id: "empresa-a",
            name: "Empresa A Ltda",
            tax_id: "12.345.678/0001-90",
            email: "contato@empresaa.com.br",
            phone: "(11) 9 9999-9999",
            fee: money(550000),
            status: ClientStatus::Active,
            start: date(2023, 6, 15)?,
            last_update: date(2024, 1, 15)?,
            pending_documents: 0,
            total_paid: money(3850000),
            regime: "Simples Nacional",
            activity: "Consultoria em TI",
            next_tax_due: date(2024, 2, 20)?,
            taxes: &[("das", 245000), ("iss", 38000)],
        }),
        client(ClientSeed {
            id: "empresa-b",
            name: "Empresa B S.A.",
            tax_id: "98.765.432/0001-10",
            email: "financeiro@empresab.com.br",
            phone: "(11) 8 8888-8888",
            fee: money(320000),
            status: ClientStatus::Pending,
            start: date(2023, 8, 20)?,
            last_update: date(2024, 1, 10)?,
            pending_documents: 2,
            total_paid: money(1600000),
            regime: "Lucro Real",
            activity: "Comércio Varejista",
            next_tax_due: date(2024, 2, 25)?,
            taxes: &[
                ("pis", 89000),
                ("cofins", 412000),
                ("icms", 580000),
                ("irpj", 320000),
            ],
        }),
        client(ClientSeed {
            id: "empresa-c",
            name: "Empresa C ME",
            tax_id: "11.222.333/0001-44",
            email: "admin@empresac.com.br",
            phone: "(11) 7 7777-7777",
            fee: money(280000),
            status: ClientStatus::Active,
            start: date(2023, 3, 10)?,
            last_update: date(2024, 1, 12)?,
            pending_documents: 0,
            total_paid: money(2800000),
            regime: "Microempresa",
            activity: "Prestação de Serviços",
            next_tax_due: date(2024, 2, 18)?,
            taxes: &[("das", 120000), ("iss", 28000)],
        }),
        client(ClientSeed {
            id: "empresa-d",
            name: "Empresa D LTDA",
            tax_id: "55.666.777/0001-88",
            email: "contabil@empresad.com.br",
            phone: "(11) 6 6666-6666",
            fee: money(420000),
            status: ClientStatus::Inactive,
            start: date(2023, 1, 5)?,
            last_update: date(2023, 12, 15)?,
            pending_documents: 1,
            total_paid: money(5040000),
            regime: "Lucro Presumido",
            activity: "Indústria e Comércio",
            next_tax_due: date(2024, 2, 15)?,
            taxes: &[("irpj", 180000), ("csll", 72000), ("icms", 220000)],
        }),
    ])
}

pub fn demo_cash_flow() -> Result<Vec<CashFlowEntry>, LedgerError> {
    Ok(vec![
        CashFlowEntry::new(
            FlowKind::Inflow,
            money(550000),
            "Pagamento de honorários - Empresa A",
            "Honorários",
            ClientRef::client("empresa-a"),
            date(2024, 1, 15)?,
        ),
        CashFlowEntry::new(
            FlowKind::Outflow,
            money(120000),
            "Software de contabilidade",
            "Software",
            ClientRef::Firm,
            date(2024, 1, 14)?,
        ),
        CashFlowEntry::new(
            FlowKind::Inflow,
            money(320000),
            "Consultoria fiscal - Empresa B",
            "Consultoria",
            ClientRef::client("empresa-b"),
            date(2024, 1, 13)?,
        )
        .with_status(CashFlowStatus::Pending),
        CashFlowEntry::new(
            FlowKind::Outflow,
            money(80000),
            "Internet e telefone",
            "Utilities",
            ClientRef::Firm,
            date(2024, 1, 12)?,
        ),
    ])
}

pub fn demo_expenses() -> Result<Vec<Expense>, LedgerError> {
    Ok(vec![
        Expense::new(
            "Software de contabilidade - Licença mensal",
            money(29900),
            "Software",
            ClientRef::Firm,
            date(2024, 1, 15)?,
        )
        .with_status(PaymentStatus::Paid)
        .recurring(true),
        Expense::new(
            "Consultoria jurídica - Empresa A",
            money(150000),
            "Consultoria",
            ClientRef::client("empresa-a"),
            date(2024, 1, 14)?,
        )
        .due_on(date(2024, 1, 20)?),
        Expense::new(
            "Internet comercial",
            money(15000),
            "Utilities",
            ClientRef::Firm,
            date(2024, 1, 13)?,
        )
        .with_status(PaymentStatus::Paid)
        .recurring(true),
        Expense::new(
            "Material de escritório",
            money(8550),
            "Material",
            ClientRef::Firm,
            date(2024, 1, 12)?,
        )
        .with_status(PaymentStatus::Paid),
        Expense::new(
            "Impostos municipais - Empresa B",
            money(220000),
            "Impostos",
            ClientRef::client("empresa-b"),
            date(2024, 1, 10)?,
        )
        .with_status(PaymentStatus::Overdue)
        .due_on(date(2024, 1, 15)?),
    ])
}

struct ClientSeed<'a> {
    id: &'a str,
    name: &'a str,
    tax_id: &'a str,
    email: &'a str,
    phone: &'a str,
    fee: Decimal,
    status: ClientStatus,
    start: NaiveDate,
    last_update: NaiveDate,
    pending_documents: u32,
    total_paid: Decimal,
    regime: &'a str,
    activity: &'a str,
    next_tax_due: NaiveDate,
    taxes: &'a [(&'a str, i64)],
}

fn client(seed: ClientSeed<'_>) -> Client {
    let mut client = Client::new(
        ClientId::new(seed.id),
        seed.name,
        seed.tax_id,
        seed.email,
        seed.fee,
        seed.start,
    );
    client.phone = seed.phone.to_string();
    client.status = seed.status;
    client.last_update = seed.last_update;
    client.pending_documents = seed.pending_documents;
    client.total_paid = seed.total_paid;
    client.tax_regime = Classification::Classified(seed.regime.to_string());
    client.activity = Classification::Classified(seed.activity.to_string());
    client.next_tax_due = Classification::Classified(seed.next_tax_due);
    client.monthly_taxes = seed
        .taxes
        .iter()
        .map(|(name, cents)| (name.to_string(), money(*cents)))
        .collect::<BTreeMap<_, _>>();
    client
}

/// Amount from integer cents.
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, LedgerError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        LedgerError::InvalidConfig(format!("invalid seed date {year}-{month:02}-{day:02}"))
    })
}
