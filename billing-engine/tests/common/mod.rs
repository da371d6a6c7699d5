//! Test helper module for billing-engine integration tests.
//!
//! Provides schedule fixtures modelled on the dashboard's seed data.

#![allow(dead_code)]

use billing_engine::models::{BillingSchedule, CreateBillingSchedule, Frequency};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn utc(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 instant")
}

/// Build a validated schedule.
pub fn schedule(
    service: &str,
    client: &str,
    frequency: Frequency,
    amount: i64,
    next: &str,
    active: bool,
) -> BillingSchedule {
    BillingSchedule::try_new(CreateBillingSchedule {
        client_id: Uuid::new_v4(),
        client_name: client.to_string(),
        field_id: Uuid::new_v4(),
        field_name: format!("{} field", client),
        service_name: service.to_string(),
        frequency,
        amount: Decimal::from(amount),
        next_billing_date: utc(next),
        active,
    })
    .expect("valid schedule")
}

/// Five schedules spread over May and June 2025.
pub fn seed_schedules() -> Vec<BillingSchedule> {
    vec![
        schedule(
            "Weekly Disease Monitoring",
            "Farmer Emir Kovačević",
            Frequency::Weekly,
            500,
            "2025-05-01T00:00:00Z",
            true,
        ),
        schedule(
            "Monthly Fertilization",
            "Farmer Amira Hodžić",
            Frequency::Monthly,
            1200,
            "2025-05-15T00:00:00Z",
            true,
        ),
        schedule(
            "Quarterly Soil Analysis",
            "Farmer Senad Mehić",
            Frequency::Quarterly,
            3000,
            "2025-06-10T00:00:00Z",
            true,
        ),
        schedule(
            "Harvest Assessment",
            "Farmer Emir Kovačević",
            Frequency::OneTime,
            800,
            "2025-05-03T00:00:00Z",
            true,
        ),
        schedule(
            "Bi-weekly Pest Control",
            "Farmer Amira Hodžić",
            Frequency::BiWeekly,
            650,
            "2025-05-02T00:00:00Z",
            false,
        ),
    ]
}
