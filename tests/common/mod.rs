#![allow(dead_code)]

use bookkeeping_core::{
    core::FixedClock,
    domain::{Client, ClientId, ClientRef, ClientStatus, Expense},
    ledger::{seeded_store, RecordStore},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Empty store whose clock is pinned to `today`.
pub fn store_on(today: NaiveDate) -> RecordStore {
    RecordStore::with_clock(Box::new(FixedClock::on(today)))
}

/// The demonstration book as of `today`.
pub fn seeded_on(today: NaiveDate) -> RecordStore {
    bookkeeping_core::init();
    seeded_store(Box::new(FixedClock::on(today))).expect("seed data is valid")
}

pub fn client(id: &str, fee: Decimal, status: ClientStatus) -> Client {
    let mut client = Client::new(
        ClientId::new(id),
        id,
        "00.000.000/0001-00",
        format!("{id}@example.com"),
        fee,
        date(2024, 1, 1),
    );
    client.status = status;
    client
}

pub fn expense(owner: ClientRef, amount: Decimal, category: &str) -> Expense {
    Expense::new("expense", amount, category, owner, date(2024, 1, 10))
}
