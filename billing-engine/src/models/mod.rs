//! Domain models for billing-engine.

mod schedule;

pub use schedule::{BillingSchedule, CreateBillingSchedule, Frequency, ListSchedulesFilter};
