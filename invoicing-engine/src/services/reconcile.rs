//! Invoice reconciliation against payments, and aging relative to `now`.

use crate::models::{Anomaly, Invoice, InvoiceStatus, Payment};
use chrono::{DateTime, Utc};
use domain_core::money::checked_add;
use domain_core::{DomainContext, DomainError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{instrument, warn};
use uuid::Uuid;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Payment timeliness of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AgingState {
    Paid,
    Draft,
    Cancelled,
    Current,
    /// Due within the configured due-soon horizon.
    DueSoon { days_until_due: i64 },
    DueToday,
    Overdue { days_overdue: i64 },
}

impl AgingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgingState::Paid => "paid",
            AgingState::Draft => "draft",
            AgingState::Cancelled => "cancelled",
            AgingState::Current => "current",
            AgingState::DueSoon { .. } => "due_soon",
            AgingState::DueToday => "due_today",
            AgingState::Overdue { .. } => "overdue",
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, AgingState::Overdue { .. })
    }
}

/// Money position and aging of one invoice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub invoice_id: Uuid,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub amount_paid: Decimal,
    /// Negative when the invoice is overpaid.
    pub balance_due: Decimal,
    pub aging: AgingState,
    pub anomalies: Vec<Anomaly>,
}

/// Aging of `invoice` given its reconciled balance.
///
/// The deadline is the end of the due date's local calendar day. A settled
/// balance wins over every date-based state; drafts and cancelled invoices
/// keep their stored status.
pub fn aging_state(
    invoice: &Invoice,
    balance_due: Decimal,
    now: DateTime<Utc>,
    ctx: &DomainContext,
) -> AgingState {
    if balance_due <= Decimal::ZERO {
        return AgingState::Paid;
    }
    match invoice.status() {
        InvoiceStatus::Draft => return AgingState::Draft,
        InvoiceStatus::Cancelled => return AgingState::Cancelled,
        _ => {}
    }

    let today = ctx.calendar.local_date(now);
    let due = invoice.due_date();
    if today == due {
        return AgingState::DueToday;
    }

    if today > due {
        let late = (now - ctx.calendar.end_of_day(due)).num_milliseconds();
        let days_overdue = (late + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY).max(1);
        return AgingState::Overdue { days_overdue };
    }

    let days_until_due = (due - today).num_days();
    if ctx.due_soon_days > 0 && days_until_due <= i64::from(ctx.due_soon_days) {
        AgingState::DueSoon { days_until_due }
    } else {
        AgingState::Current
    }
}

/// Reconcile `invoice` against `payments` as of `now`.
///
/// Payments that belong to another invoice are ignored and reported as
/// [`Anomaly::ForeignPayment`].
#[instrument(skip_all, fields(invoice = %invoice.invoice_number(), payments = payments.len()))]
pub fn reconcile(
    invoice: &Invoice,
    payments: &[Payment],
    now: DateTime<Utc>,
    ctx: &DomainContext,
) -> Result<Reconciliation> {
    let totals = invoice.totals();
    let mut anomalies = Vec::new();

    let mut amount_paid = Decimal::ZERO;
    for payment in payments {
        if payment.invoice_id() == invoice.id() {
            amount_paid = checked_add(amount_paid, payment.amount(), "amount paid")?;
        } else {
            anomalies.push(Anomaly::ForeignPayment {
                invoice_id: invoice.id(),
                payment_id: payment.id(),
            });
        }
    }

    let balance_due = totals.total.checked_sub(amount_paid).ok_or_else(|| {
        DomainError::invalid(format!("balance due on {} is out of range", invoice.invoice_number()))
    })?;
    let aging = aging_state(invoice, balance_due, now, ctx);

    if balance_due < Decimal::ZERO {
        anomalies.push(Anomaly::Overpayment {
            invoice_id: invoice.id(),
            excess: -balance_due,
        });
    }
    if invoice.due_date() < invoice.issue_date() {
        anomalies.push(Anomaly::DueBeforeIssue {
            invoice_id: invoice.id(),
            issue_date: invoice.issue_date(),
            due_date: invoice.due_date(),
        });
    }
    if let Some(stated) = invoice.stated_total() {
        if stated != totals.total {
            anomalies.push(Anomaly::StatedTotalMismatch {
                invoice_id: invoice.id(),
                stated,
                computed: totals.total,
            });
        }
    }
    if status_contradicts_balance(invoice.status(), balance_due, amount_paid) {
        anomalies.push(Anomaly::StatusMismatch {
            invoice_id: invoice.id(),
            status: invoice.status(),
            balance_due,
        });
    }

    for anomaly in &anomalies {
        warn!(
            invoice = %invoice.invoice_number(),
            anomaly = anomaly.as_str(),
            "Invoice reconciliation anomaly"
        );
    }

    Ok(Reconciliation {
        invoice_id: invoice.id(),
        subtotal: totals.subtotal,
        tax_amount: totals.tax_amount,
        total: totals.total,
        amount_paid,
        balance_due,
        aging,
        anomalies,
    })
}

/// `paid` with money still owed, or settled by payments while not marked paid.
fn status_contradicts_balance(status: InvoiceStatus, balance_due: Decimal, paid: Decimal) -> bool {
    match status {
        InvoiceStatus::Paid => balance_due > Decimal::ZERO,
        InvoiceStatus::Cancelled => false,
        _ => paid > Decimal::ZERO && balance_due <= Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateInvoice, InvoiceItem};
    use chrono::NaiveDate;
    use domain_core::MoneyRounding;

    fn invoice(status: InvoiceStatus, due: (i32, u32, u32)) -> Invoice {
        Invoice::try_new(
            CreateInvoice {
                client_id: Uuid::new_v4(),
                client_name: "Farmer Amira Hodžić".to_string(),
                invoice_number: "INV-2025-002".to_string(),
                issue_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
                status,
                items: vec![InvoiceItem::new("Seeding", Decimal::from(4), Decimal::from(250))],
                tax_rate: Decimal::ZERO,
                stated_total: None,
                notes: None,
            },
            MoneyRounding::default(),
        )
        .unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn overdue_counts_whole_days_past_the_due_day() {
        let ctx = DomainContext::default();
        let inv = invoice(InvoiceStatus::Sent, (2025, 4, 15));
        let owed = Decimal::from(1000);
        assert_eq!(
            aging_state(&inv, owed, utc("2025-04-16T00:00:00Z"), &ctx),
            AgingState::Overdue { days_overdue: 1 }
        );
        assert_eq!(
            aging_state(&inv, owed, utc("2025-04-16T23:59:59Z"), &ctx),
            AgingState::Overdue { days_overdue: 1 }
        );
        assert_eq!(
            aging_state(&inv, owed, utc("2025-04-20T12:00:00Z"), &ctx),
            AgingState::Overdue { days_overdue: 5 }
        );
    }

    #[test]
    fn due_soon_needs_a_horizon() {
        let inv = invoice(InvoiceStatus::Sent, (2025, 4, 15));
        let owed = Decimal::from(1000);
        let now = utc("2025-04-12T08:00:00Z");
        assert_eq!(aging_state(&inv, owed, now, &DomainContext::default()), AgingState::Current);

        let ctx = DomainContext {
            due_soon_days: 3,
            ..DomainContext::default()
        };
        assert_eq!(
            aging_state(&inv, owed, now, &ctx),
            AgingState::DueSoon { days_until_due: 3 }
        );
    }

    #[test]
    fn draft_and_cancelled_pass_through() {
        let ctx = DomainContext::default();
        let late = utc("2025-06-01T00:00:00Z");
        let owed = Decimal::from(1000);
        assert_eq!(
            aging_state(&invoice(InvoiceStatus::Draft, (2025, 4, 15)), owed, late, &ctx),
            AgingState::Draft
        );
        assert_eq!(
            aging_state(&invoice(InvoiceStatus::Cancelled, (2025, 4, 15)), owed, late, &ctx),
            AgingState::Cancelled
        );
    }

    #[test]
    fn stored_paid_with_balance_is_a_status_mismatch() {
        let inv = invoice(InvoiceStatus::Paid, (2025, 4, 15));
        let result = reconcile(&inv, &[], utc("2025-04-10T00:00:00Z"), &DomainContext::default()).unwrap();
        assert_eq!(result.aging, AgingState::Current);
        assert!(matches!(result.anomalies[0], Anomaly::StatusMismatch { .. }));
    }
}
