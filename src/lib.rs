#![doc(test(attr(deny(warnings))))]

//! Bookkeeping Core holds the ledger and aggregation primitives behind an
//! accounting firm's dashboard: client billing, cash-flow entries, budgeted
//! expenses and tax-obligation due dates, summarized for display.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use errors::{LedgerError, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bookkeeping Core tracing initialized.");
    });
}
