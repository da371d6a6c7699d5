//! Non-fatal findings reported alongside reconciliation results.

use super::InvoiceStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Structurally valid data that tells an unusual story.
///
/// Anomalies never abort a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// Payments exceed the invoice total by `excess`.
    Overpayment { invoice_id: Uuid, excess: Decimal },
    DueBeforeIssue {
        invoice_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    },
    /// A stored total disagrees with the total recomputed from line items.
    StatedTotalMismatch {
        invoice_id: Uuid,
        stated: Decimal,
        computed: Decimal,
    },
    /// The stored status contradicts the reconciled balance.
    StatusMismatch {
        invoice_id: Uuid,
        status: InvoiceStatus,
        balance_due: Decimal,
    },
    /// A payment for another invoice was passed in and ignored.
    ForeignPayment { invoice_id: Uuid, payment_id: Uuid },
}

impl Anomaly {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anomaly::Overpayment { .. } => "overpayment",
            Anomaly::DueBeforeIssue { .. } => "due_before_issue",
            Anomaly::StatedTotalMismatch { .. } => "stated_total_mismatch",
            Anomaly::StatusMismatch { .. } => "status_mismatch",
            Anomaly::ForeignPayment { .. } => "foreign_payment",
        }
    }

    pub fn invoice_id(&self) -> Uuid {
        match self {
            Anomaly::Overpayment { invoice_id, .. }
            | Anomaly::DueBeforeIssue { invoice_id, .. }
            | Anomaly::StatedTotalMismatch { invoice_id, .. }
            | Anomaly::StatusMismatch { invoice_id, .. }
            | Anomaly::ForeignPayment { invoice_id, .. } => *invoice_id,
        }
    }
}
