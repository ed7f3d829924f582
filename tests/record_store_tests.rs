mod common;

use bookkeeping_core::{
    core::{classify::payment_status_of, services::SummaryService},
    domain::{ClientRef, ClientStatus, Expense, FlowKind, PaymentStatus, Ratio},
    errors::FieldProblem,
    ledger::{CashFlowInput, ClientInput, ExpenseInput, NotificationKind, NotificationLog},
    LedgerError,
};
use common::{client, date, store_on};
use rust_decimal_macros::dec;

fn cash(kind: FlowKind, amount: &str) -> CashFlowInput {
    CashFlowInput {
        kind,
        amount: amount.into(),
        description: "entry".into(),
        category: "Outros".into(),
        ..CashFlowInput::default()
    }
}

#[test]
fn pending_entries_count_toward_totals() {
    let mut store = store_on(date(2024, 1, 20));
    store.add_cash_flow_entry(cash(FlowKind::Inflow, "5500")).unwrap();
    store.add_cash_flow_entry(cash(FlowKind::Outflow, "1200")).unwrap();
    store.add_cash_flow_entry(cash(FlowKind::Inflow, "3200")).unwrap();
    store.add_cash_flow_entry(cash(FlowKind::Outflow, "800")).unwrap();

    let totals = SummaryService::totals(store.cash_flow());
    assert_eq!(totals.inflow, dec!(8700.00));
    assert_eq!(totals.outflow, dec!(2000.00));
    assert_eq!(totals.net, dec!(6700.00));
}

#[test]
fn added_entries_default_to_today_firm_and_confirmed() {
    let today = date(2024, 3, 5);
    let mut store = store_on(today);
    let entry = store
        .add_cash_flow_entry(cash(FlowKind::Outflow, "1500,50"))
        .unwrap();
    assert_eq!(entry.date, today);
    assert_eq!(entry.client, ClientRef::Firm);
    assert_eq!(entry.amount, dec!(1500.50));
    assert_eq!(entry.status.to_string(), "Confirmed");
}

#[test]
fn newest_record_is_listed_first() {
    let mut store = store_on(date(2024, 1, 20));
    let first = store.add_cash_flow_entry(cash(FlowKind::Inflow, "1")).unwrap().id;
    let second = store.add_cash_flow_entry(cash(FlowKind::Inflow, "2")).unwrap().id;
    let ids: Vec<_> = store.cash_flow().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn client_with_empty_name_is_rejected_and_nothing_is_stored() {
    let mut store = store_on(date(2024, 1, 20));
    let log = NotificationLog::new();
    store.subscribe(Box::new(log.clone()));

    let err = store
        .add_client(ClientInput {
            name: "".into(),
            tax_id: "12.345.678/0001-90".into(),
            email: "a@b.com".into(),
            monthly_fee: "100".into(),
            ..ClientInput::default()
        })
        .unwrap_err();

    match err {
        LedgerError::Validation(validation) => {
            assert_eq!(validation.missing_fields(), vec!["name"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.client_count(), 0);
    let last = log.last().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(last.message, "Validation failed: name is required");
}

#[test]
fn new_client_starts_pending_and_unclassified() {
    let today = date(2024, 4, 1);
    let mut store = store_on(today);
    let log = NotificationLog::new();
    store.subscribe(Box::new(log.clone()));

    let client = store
        .add_client(ClientInput {
            name: "Empresa E".into(),
            tax_id: "11.222.333/0001-44".into(),
            email: "e@empresae.com.br".into(),
            phone: "(11) 5555-0000".into(),
            monthly_fee: "1800".into(),
        })
        .unwrap();
    assert_eq!(client.status, ClientStatus::Pending);
    assert_eq!(client.start_date, today);
    assert_eq!(client.total_paid, dec!(0));
    assert!(!client.tax_regime.is_classified());
    assert!(!client.next_tax_due.is_classified());
    assert_eq!(log.last().unwrap().kind, NotificationKind::Success);
}

#[test]
fn malformed_and_negative_amounts_are_reported_per_field() {
    let mut store = store_on(date(2024, 1, 20));
    let err = store
        .add_expense(ExpenseInput {
            description: "Licença".into(),
            amount: "abc".into(),
            category: "".into(),
            ..ExpenseInput::default()
        })
        .unwrap_err();
    let LedgerError::Validation(validation) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(validation.fields(), vec!["amount", "category"]);
    assert!(matches!(
        validation.issues[0].problem,
        FieldProblem::NotANumber(_)
    ));

    let err = store
        .add_cash_flow_entry(cash(FlowKind::Inflow, "-10"))
        .unwrap_err();
    let LedgerError::Validation(validation) = err else {
        panic!("expected a validation error");
    };
    assert!(matches!(validation.issues[0].problem, FieldProblem::Negative(_)));
    assert_eq!(store.cash_flow_count(), 0);
}

#[test]
fn reserved_and_duplicate_client_ids_are_refused() {
    let mut store = store_on(date(2024, 1, 20));
    store
        .insert_client(client("empresa-a", dec!(1), ClientStatus::Active))
        .unwrap();
    assert!(matches!(
        store.insert_client(client("empresa-a", dec!(2), ClientStatus::Active)),
        Err(LedgerError::DuplicateClient(_))
    ));
    assert!(matches!(
        store.insert_client(client("all", dec!(2), ClientStatus::Active)),
        Err(LedgerError::ReservedClientId(_))
    ));
}

#[test]
fn active_fee_average() {
    let clients = vec![
        client("a", dec!(5500), ClientStatus::Active),
        client("b", dec!(3200), ClientStatus::Active),
        client("c", dec!(4200), ClientStatus::Inactive),
    ];
    let summary = SummaryService::executive_summary(&clients, std::iter::empty());
    assert_eq!(summary.active_client_count, 2);
    assert_eq!(
        summary.average_revenue_per_active_client,
        Ratio::Defined(dec!(4350.00))
    );
}

#[test]
fn unpaid_expense_past_due_is_overdue() {
    let expense = Expense::new("x", dec!(10), "Outros", ClientRef::Firm, date(2024, 1, 1))
        .due_on(date(2024, 1, 15));
    assert_eq!(
        payment_status_of(&expense, date(2024, 1, 16)),
        PaymentStatus::Overdue
    );
    assert_eq!(
        payment_status_of(&expense, date(2024, 1, 15)),
        PaymentStatus::Pending
    );
}
