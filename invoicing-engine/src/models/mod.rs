//! Domain models for invoicing-engine.

mod anomaly;
mod invoice;
mod line_item;
mod payment;

pub use anomaly::Anomaly;
pub use invoice::{CreateInvoice, Invoice, InvoiceStatus, InvoiceTotals, ListInvoicesFilter};
pub use line_item::InvoiceItem;
pub use payment::{CreatePayment, ListPaymentsFilter, Payment, PaymentMethod};
