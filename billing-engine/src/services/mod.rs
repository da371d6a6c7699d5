//! Services module for billing-engine.

pub mod listing;
pub mod projector;
pub mod revenue;

pub use listing::filter_schedules;
pub use projector::{
    advance, days_until, next_occurrence, occurrences_within, occurs_within, upcoming_billings,
    Advance, UpcomingBillings,
};
pub use revenue::{recurring_revenue, RecurringRevenue};
