//! Per-category invoice counts for dashboard status cards.

use super::reconcile::{reconcile, AgingState};
use crate::models::{Invoice, Payment};
use chrono::{DateTime, Utc};
use domain_core::{DomainContext, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub paid: usize,
    pub draft: usize,
    pub cancelled: usize,
    pub current: usize,
    pub due_soon: usize,
    pub due_today: usize,
    pub overdue: usize,
}

impl StatusSummary {
    fn record(&mut self, aging: AgingState) {
        self.total += 1;
        let slot = match aging {
            AgingState::Paid => &mut self.paid,
            AgingState::Draft => &mut self.draft,
            AgingState::Cancelled => &mut self.cancelled,
            AgingState::Current => &mut self.current,
            AgingState::DueSoon { .. } => &mut self.due_soon,
            AgingState::DueToday => &mut self.due_today,
            AgingState::Overdue { .. } => &mut self.overdue,
        };
        *slot += 1;
    }
}

/// Count invoices by reconciled aging state.
#[instrument(skip_all, fields(invoices = invoices.len()))]
pub fn status_summary(
    invoices: &[Invoice],
    payments: &[Payment],
    now: DateTime<Utc>,
    ctx: &DomainContext,
) -> Result<StatusSummary> {
    let mut by_invoice: HashMap<Uuid, Vec<Payment>> = HashMap::new();
    for payment in payments {
        by_invoice
            .entry(payment.invoice_id())
            .or_default()
            .push(payment.clone());
    }

    let mut summary = StatusSummary::default();
    for invoice in invoices {
        let paid = by_invoice
            .get(&invoice.id())
            .map(Vec::as_slice)
            .unwrap_or_default();
        summary.record(reconcile(invoice, paid, now, ctx)?.aging);
    }
    Ok(summary)
}
