mod common;

use bookkeeping_core::{
    core::services::{BudgetService, ScopeService, SummaryService},
    domain::{ClientRef, ClientScope, ClientScoped},
};
use common::{date, expense, seeded_on};
use rust_decimal_macros::dec;

#[test]
fn scoping_twice_changes_nothing() {
    let store = seeded_on(date(2024, 1, 18));
    let scope = ClientScope::client("empresa-b");
    let once = ScopeService::scope_for(store.expenses(), &scope);
    let twice = ScopeService::scope_for(once.clone(), &scope);
    assert_eq!(once, twice);
}

#[test]
fn everyone_keeps_every_record_in_order() {
    let store = seeded_on(date(2024, 1, 18));
    let all: Vec<_> = store.cash_flow().collect();
    let scoped = ScopeService::scope_for(store.cash_flow(), &ClientScope::Everyone);
    assert_eq!(all, scoped);
}

#[test]
fn firm_records_survive_any_selector() {
    let store = seeded_on(date(2024, 1, 18));
    for scope in [
        ClientScope::client("empresa-a"),
        ClientScope::client("empresa-d"),
        ClientScope::client("unknown"),
    ] {
        let firm_before = store
            .cash_flow()
            .filter(|entry| entry.client_ref().is_firm_wide())
            .count();
        let scoped = ScopeService::scope_for(store.cash_flow(), &scope);
        let firm_after = scoped
            .iter()
            .filter(|entry| entry.client_ref().is_firm_wide())
            .count();
        assert_eq!(firm_before, firm_after);
        assert!(scoped
            .iter()
            .all(|entry| scope.includes(entry.client_ref())));
    }
}

#[test]
fn store_scoped_iterators_agree_with_scope_service() {
    let store = seeded_on(date(2024, 1, 18));
    let scope: ClientScope = "empresa-a".parse().unwrap();
    let via_store: Vec<_> = store.expenses_for(&scope).collect();
    let via_service = ScopeService::scope_for(store.expenses(), &scope);
    assert_eq!(via_store, via_service);
}

#[test]
fn all_string_round_trips_to_everyone() {
    let scope: ClientScope = serde_json::from_str("\"all\"").unwrap();
    assert_eq!(scope, ClientScope::Everyone);
    let owner: ClientRef = serde_json::from_str("\"empresa-a\"").unwrap();
    assert_eq!(serde_json::to_string(&owner).unwrap(), "\"empresa-a\"");
    assert_eq!(
        serde_json::to_string(&ClientRef::Firm).unwrap(),
        "\"all\""
    );
}

#[test]
fn scoped_budgets_only_see_visible_expenses() {
    let budgets = bookkeeping_core::config::Config::default().category_budgets;
    let expenses = vec![
        expense(ClientRef::client("empresa-a"), dec!(300), "Marketing"),
        expense(ClientRef::client("empresa-b"), dec!(600), "Marketing"),
        expense(ClientRef::Firm, dec!(100), "Marketing"),
    ];
    let scoped = ScopeService::scope_for(&expenses, &ClientScope::client("empresa-a"));
    let rows = BudgetService::budget_utilization(scoped, &budgets);
    let marketing = rows.iter().find(|row| row.category == "Marketing").unwrap();
    assert_eq!(marketing.spent, dec!(400));
}

#[test]
fn empty_scope_yields_zero_totals() {
    let store = seeded_on(date(2024, 1, 18));
    let scope = ClientScope::client("empresa-d");
    let totals = SummaryService::totals(ScopeService::scope_for(
        store.cash_flow().filter(|entry| !entry.client_ref().is_firm_wide()),
        &scope,
    ));
    assert!(totals.inflow.is_zero());
    assert!(totals.net.is_zero());
}
