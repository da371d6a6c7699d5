//! Services module for invoicing-engine.

pub mod listing;
pub mod reconcile;
pub mod rollup;
pub mod summary;

pub use listing::{filter_invoices, filter_payments};
pub use reconcile::{aging_state, reconcile, AgingState, Reconciliation};
pub use rollup::{rollup, Bucket, BucketGranularity, FinancialRollup, ReportingInterval};
pub use summary::{status_summary, StatusSummary};
