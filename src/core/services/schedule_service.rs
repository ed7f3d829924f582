//! Forward-looking list of payments the firm has to keep an eye on.

use chrono::{Datelike, NaiveDate};

use crate::core::classify::{
    payment_status_of, same_day, urgency_within, DEFAULT_URGENCY_WINDOW_DAYS,
};
use crate::domain::{
    Client, ClientRef, Expense, Obligation, ObligationSource, PaymentStatus,
};

/// Derives obligations from unpaid expenses and client tax calendars.
pub struct ScheduleService;

impl ScheduleService {
    /// Obligations ordered by due date, ties kept in input order.
    ///
    /// Unpaid expenses with a due date come first in the input, followed by one
    /// tax payment per client whose next due date is known. The sequence is
    /// rebuilt on every call.
    pub fn upcoming_obligations<'a, C, E>(
        clients: C,
        expenses: E,
        reference: NaiveDate,
    ) -> std::vec::IntoIter<Obligation>
    where
        C: IntoIterator<Item = &'a Client>,
        E: IntoIterator<Item = &'a Expense>,
    {
        Self::upcoming_within(clients, expenses, reference, DEFAULT_URGENCY_WINDOW_DAYS)
    }

    /// [`upcoming_obligations`](Self::upcoming_obligations) with a custom "due soon" window.
    pub fn upcoming_within<'a, C, E>(
        clients: C,
        expenses: E,
        reference: NaiveDate,
        window_days: u32,
    ) -> std::vec::IntoIter<Obligation>
    where
        C: IntoIterator<Item = &'a Client>,
        E: IntoIterator<Item = &'a Expense>,
    {
        let from_expenses = expenses.into_iter().filter_map(|expense| {
            let due_date = expense.due_date?;
            if payment_status_of(expense, reference) == PaymentStatus::Paid {
                return None;
            }
            Some(Obligation {
                client: expense.client.clone(),
                description: expense.description.clone(),
                amount: expense.amount,
                due_date,
                priority: urgency_within(due_date, reference, window_days),
                source: ObligationSource::Expense(expense.id),
            })
        });
        let from_taxes = clients.into_iter().filter_map(|client| {
            let due_date = *client.next_tax_due.classified()?;
            let description = match client.tax_regime.classified() {
                Some(regime) => format!("Monthly taxes - {regime}"),
                None => "Monthly taxes".to_string(),
            };
            Some(Obligation {
                client: ClientRef::Client(client.id.clone()),
                description,
                amount: client.monthly_tax_total(),
                due_date,
                priority: urgency_within(due_date, reference, window_days),
                source: ObligationSource::TaxPayment(client.id.clone()),
            })
        });

        let mut obligations: Vec<Obligation> = from_expenses.chain(from_taxes).collect();
        obligations.sort_by_key(|obligation| obligation.due_date);
        obligations.into_iter()
    }

    /// Obligations falling on the calendar day of `day`; time of day is ignored.
    pub fn obligations_on<'a, I, D>(obligations: I, day: &D) -> Vec<&'a Obligation>
    where
        I: IntoIterator<Item = &'a Obligation>,
        D: Datelike,
    {
        obligations
            .into_iter()
            .filter(|obligation| same_day(&obligation.due_date, day))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Classification, ClientId, Urgency};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn client_due(id: &str, due: NaiveDate) -> Client {
        let mut client = Client::new(ClientId::new(id), id, "tax", "mail", dec!(1), date(2023, 1, 1));
        client.next_tax_due = Classification::Classified(due);
        client.monthly_taxes.insert("das".into(), dec!(2450));
        client.monthly_taxes.insert("iss".into(), dec!(380));
        client
    }

    #[test]
    fn paid_and_undated_expenses_are_skipped() {
        let expenses = vec![
            Expense::new("paid", dec!(1), "Outros", ClientRef::Firm, date(2024, 1, 1))
                .due_on(date(2024, 1, 20))
                .with_status(PaymentStatus::Paid),
            Expense::new("undated", dec!(1), "Outros", ClientRef::Firm, date(2024, 1, 1)),
            Expense::new("open", dec!(7), "Outros", ClientRef::Firm, date(2024, 1, 1))
                .due_on(date(2024, 1, 20)),
        ];
        let obligations: Vec<_> =
            ScheduleService::upcoming_obligations(&Vec::<Client>::new(), &expenses, date(2024, 1, 18))
                .collect();
        assert_eq!(obligations.len(), 1);
        assert_eq!(obligations[0].description, "open");
        assert_eq!(obligations[0].priority, Urgency::Medium);
    }

    #[test]
    fn client_tax_obligation_sums_monthly_taxes() {
        let mut unclassified = client_due("b", date(2024, 2, 1));
        unclassified.next_tax_due = Classification::Unclassified;
        let clients = vec![client_due("a", date(2024, 2, 20)), unclassified];
        let obligations: Vec<_> =
            ScheduleService::upcoming_obligations(&clients, &Vec::<Expense>::new(), date(2024, 2, 20))
                .collect();
        assert_eq!(obligations.len(), 1);
        assert_eq!(obligations[0].amount, dec!(2830));
        assert_eq!(obligations[0].priority, Urgency::High);
        assert_eq!(
            obligations[0].source,
            ObligationSource::TaxPayment(ClientId::new("a"))
        );
    }

    #[test]
    fn sequence_is_restartable_and_sorted() {
        let clients = vec![
            client_due("late", date(2024, 3, 1)),
            client_due("early", date(2024, 2, 1)),
            client_due("tie", date(2024, 3, 1)),
        ];
        let first: Vec<_> =
            ScheduleService::upcoming_obligations(&clients, &Vec::<Expense>::new(), date(2024, 1, 1))
                .collect();
        let second: Vec<_> =
            ScheduleService::upcoming_obligations(&clients, &Vec::<Expense>::new(), date(2024, 1, 1))
                .collect();
        assert_eq!(first, second);
        let order: Vec<String> = first.iter().map(|o| o.client.to_string()).collect();
        assert_eq!(order, vec!["early", "late", "tie"]);
    }

    #[test]
    fn obligations_on_matches_calendar_day_only() {
        let clients = vec![client_due("a", date(2024, 2, 20))];
        let obligations: Vec<_> =
            ScheduleService::upcoming_obligations(&clients, &Vec::<Expense>::new(), date(2024, 2, 1))
                .collect();
        let evening = date(2024, 2, 20).and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(ScheduleService::obligations_on(&obligations, &evening).len(), 1);
        assert!(ScheduleService::obligations_on(&obligations, &date(2024, 2, 21)).is_empty());
    }
}
