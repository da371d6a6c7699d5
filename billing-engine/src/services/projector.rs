//! Projection of billing schedules onto the calendar.
//!
//! A schedule only records its next billing date. Everything here derives
//! further dates from that one value and never mutates the schedule.

use crate::models::{BillingSchedule, Frequency};
use chrono::{DateTime, Utc};
use domain_core::query::{sort, SortSpec};
use domain_core::{Calendar, Result, TimeWindow};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Result of advancing a schedule past a billing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum Advance {
    /// The schedule bills again at this instant.
    Next(DateTime<Utc>),
    /// A one-time schedule has fired; the caller should deactivate it.
    Terminal,
}

impl Advance {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Advance::Terminal)
    }

    pub fn next_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Advance::Next(date) => Some(*date),
            Advance::Terminal => None,
        }
    }
}

/// True iff the schedule is active and its next billing date is inside `window`.
pub fn occurs_within(schedule: &BillingSchedule, window: &TimeWindow) -> bool {
    schedule.active && window.contains(schedule.next_billing_date)
}

/// The occurrence following a billing event at `fired` for `frequency`.
///
/// Month-based steps keep the local day of month, clamped to the end of
/// shorter months.
pub fn next_occurrence(
    frequency: Frequency,
    fired: DateTime<Utc>,
    calendar: &Calendar,
) -> Result<Advance> {
    let next = match frequency {
        Frequency::OneTime => return Ok(Advance::Terminal),
        Frequency::Weekly => calendar.add_days(fired, 7)?,
        Frequency::BiWeekly => calendar.add_days(fired, 14)?,
        Frequency::Monthly => calendar.add_months(fired, 1)?,
        Frequency::Quarterly => calendar.add_months(fired, 3)?,
        Frequency::Yearly => calendar.add_months(fired, 12)?,
    };
    Ok(Advance::Next(next))
}

/// Next billing date after the schedule fired at `fired`.
pub fn advance(
    schedule: &BillingSchedule,
    fired: DateTime<Utc>,
    calendar: &Calendar,
) -> Result<Advance> {
    next_occurrence(schedule.frequency, fired, calendar)
}

/// Successive billing dates of `schedule` that fall inside `window`, at most `limit`.
///
/// Projection starts from the schedule's next billing date and repeatedly
/// advances. Dates before the window are stepped over.
pub fn occurrences_within(
    schedule: &BillingSchedule,
    window: &TimeWindow,
    limit: usize,
    calendar: &Calendar,
) -> Result<Vec<DateTime<Utc>>> {
    let mut dates = Vec::new();
    if !schedule.active || limit == 0 {
        return Ok(dates);
    }

    let mut current = schedule.next_billing_date;
    while current <= window.end() && dates.len() < limit {
        if window.contains(current) {
            dates.push(current);
        }
        match next_occurrence(schedule.frequency, current, calendar)? {
            Advance::Next(next) => current = next,
            Advance::Terminal => break,
        }
    }
    Ok(dates)
}

/// Whole days from `now` until `instant`, rounded up.
///
/// Zero means today, one tomorrow; negative values are in the past.
pub fn days_until(instant: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (instant - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Active schedules billing inside a lookahead window.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingBillings<'a> {
    /// Sorted by next billing date, earliest first.
    pub schedules: Vec<&'a BillingSchedule>,
    pub count: usize,
    pub total_amount: Decimal,
}

#[instrument(skip_all, fields(schedules = schedules.len()))]
pub fn upcoming_billings<'a>(
    schedules: &'a [BillingSchedule],
    window: &TimeWindow,
) -> UpcomingBillings<'a> {
    let inside: Vec<&BillingSchedule> = schedules
        .iter()
        .filter(|s| occurs_within(s, window))
        .collect();
    let sorted = sort(
        &inside,
        &SortSpec::date_asc(|s: &&BillingSchedule| s.next_billing_date),
    );
    let total_amount: Decimal = sorted.iter().map(|s| s.amount).sum();

    debug!(upcoming = sorted.len(), total = %total_amount, "Upcoming billings projected");

    UpcomingBillings {
        count: sorted.len(),
        schedules: sorted,
        total_amount,
    }
}
