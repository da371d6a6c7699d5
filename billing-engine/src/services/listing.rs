//! Schedule list filtering.

use crate::models::{BillingSchedule, ListSchedulesFilter};
use domain_core::query::{filter, Predicate, TextMatch};

/// Schedules matching every set field of `criteria`, in input order.
pub fn filter_schedules<'a>(
    schedules: &'a [BillingSchedule],
    criteria: &ListSchedulesFilter,
    policy: TextMatch,
) -> Vec<&'a BillingSchedule> {
    let predicates: Vec<Predicate<'_, BillingSchedule>> = vec![
        Predicate::search(criteria.search.as_deref().unwrap_or(""), policy),
        Predicate::equals(|s: &BillingSchedule| s.frequency, criteria.frequency),
        Predicate::equals(|s: &BillingSchedule| s.active, criteria.active),
    ];
    filter(schedules, &predicates)
}
