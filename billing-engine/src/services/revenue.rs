//! Recurring revenue summary over billing schedules.

use crate::models::{BillingSchedule, Frequency};
use domain_core::MoneyRounding;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecurringRevenue {
    pub total_schedules: usize,
    pub active_schedules: usize,
    /// Sum of active schedules that bill monthly.
    pub monthly_revenue: Decimal,
    /// Every active recurring schedule normalised to a monthly amount.
    pub monthly_run_rate: Decimal,
}

#[instrument(skip_all, fields(schedules = schedules.len()))]
pub fn recurring_revenue(schedules: &[BillingSchedule], money: &MoneyRounding) -> RecurringRevenue {
    let active: Vec<&BillingSchedule> = schedules.iter().filter(|s| s.active).collect();

    let monthly_revenue = active
        .iter()
        .filter(|s| s.frequency == Frequency::Monthly)
        .map(|s| s.amount)
        .sum();

    let run_rate: Decimal = active
        .iter()
        .filter_map(|s| s.frequency.monthly_factor().map(|factor| s.amount * factor))
        .sum();

    let summary = RecurringRevenue {
        total_schedules: schedules.len(),
        active_schedules: active.len(),
        monthly_revenue: money.round(monthly_revenue),
        monthly_run_rate: money.round(run_rate),
    };
    debug!(
        active = summary.active_schedules,
        run_rate = %summary.monthly_run_rate,
        "Recurring revenue computed"
    );
    summary
}
