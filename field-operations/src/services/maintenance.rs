//! Drone maintenance schedule.

use crate::models::Drone;
use chrono::{DateTime, Utc};
use domain_core::query::{sort, SortSpec};
use domain_core::DomainContext;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Overdue,
    /// Due within the maintenance lookahead.
    Upcoming,
    Future,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Overdue => "overdue",
            MaintenanceStatus::Upcoming => "upcoming",
            MaintenanceStatus::Future => "future",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceEntry<'a> {
    pub drone: &'a Drone,
    /// Local calendar days until the next maintenance; negative when overdue.
    pub days_until: i64,
    pub status: MaintenanceStatus,
}

/// Every drone with its maintenance urgency, most urgent first.
#[instrument(skip_all, fields(drones = drones.len()))]
pub fn maintenance_schedule<'a>(
    drones: &'a [Drone],
    now: DateTime<Utc>,
    ctx: &DomainContext,
) -> Vec<MaintenanceEntry<'a>> {
    let lookahead = i64::from(ctx.maintenance_lookahead_days);
    let entries: Vec<MaintenanceEntry<'a>> = drones
        .iter()
        .map(|drone| {
            let days_until = ctx.calendar.days_between(now, drone.next_maintenance_date);
            let status = if days_until < 0 {
                MaintenanceStatus::Overdue
            } else if days_until <= lookahead {
                MaintenanceStatus::Upcoming
            } else {
                MaintenanceStatus::Future
            };
            if status == MaintenanceStatus::Overdue {
                warn!(drone = %drone.name, days_overdue = -days_until, "Drone maintenance overdue");
            }
            MaintenanceEntry {
                drone,
                days_until,
                status,
            }
        })
        .collect();

    sort(
        &entries,
        &SortSpec::amount_asc(|e: &MaintenanceEntry<'a>| Decimal::from(e.days_until)),
    )
}
