//! Invoice and payment list filtering.

use crate::models::{Invoice, ListInvoicesFilter, ListPaymentsFilter, Payment};
use domain_core::query::{filter, Predicate, TextMatch};

pub fn filter_invoices<'a>(
    invoices: &'a [Invoice],
    criteria: &ListInvoicesFilter,
    policy: TextMatch,
) -> Vec<&'a Invoice> {
    let predicates: Vec<Predicate<'_, Invoice>> = vec![
        Predicate::search(criteria.search.as_deref().unwrap_or(""), policy),
        Predicate::equals(Invoice::status, criteria.status),
        Predicate::equals(Invoice::client_id, criteria.client_id),
        Predicate::in_range(Invoice::issue_date, criteria.issued),
    ];
    filter(invoices, &predicates)
}

pub fn filter_payments<'a>(
    payments: &'a [Payment],
    criteria: &ListPaymentsFilter,
    policy: TextMatch,
) -> Vec<&'a Payment> {
    let predicates: Vec<Predicate<'_, Payment>> = vec![
        Predicate::search(criteria.search.as_deref().unwrap_or(""), policy),
        Predicate::equals(Payment::method, criteria.method),
        Predicate::equals(Payment::invoice_id, criteria.invoice_id),
        Predicate::in_range(Payment::date, criteria.received),
    ];
    filter(payments, &predicates)
}
