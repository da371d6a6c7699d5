//! Billing schedule model.

use chrono::{DateTime, NaiveDateTime, Utc};
use domain_core::query::{Searchable, SortFields};
use domain_core::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// How often a schedule bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Frequency::OneTime)
    }

    /// Multiplier converting one billing amount into a monthly equivalent.
    /// `None` for one-time schedules.
    pub fn monthly_factor(&self) -> Option<Decimal> {
        match self {
            Frequency::OneTime => None,
            Frequency::Weekly => Some(Decimal::from(52) / Decimal::from(12)),
            Frequency::BiWeekly => Some(Decimal::from(26) / Decimal::from(12)),
            Frequency::Monthly => Some(Decimal::ONE),
            Frequency::Quarterly => Some(Decimal::ONE / Decimal::from(3)),
            Frequency::Yearly => Some(Decimal::ONE / Decimal::from(12)),
        }
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one-time" => Ok(Frequency::OneTime),
            "weekly" => Ok(Frequency::Weekly),
            "bi-weekly" => Ok(Frequency::BiWeekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(DomainError::invalid(format!("unknown billing frequency '{}'", other))),
        }
    }
}

/// A recurring charge for a service on a client's field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSchedule {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_name: String,
    pub field_id: Uuid,
    pub field_name: String,
    pub service_name: String,
    pub frequency: Frequency,
    pub amount: Decimal,
    pub next_billing_date: DateTime<Utc>,
    pub active: bool,
}

/// Input for creating a billing schedule.
#[derive(Debug, Clone, Validate)]
pub struct CreateBillingSchedule {
    pub client_id: Uuid,
    #[validate(length(min = 1))]
    pub client_name: String,
    pub field_id: Uuid,
    pub field_name: String,
    #[validate(length(min = 1))]
    pub service_name: String,
    pub frequency: Frequency,
    pub amount: Decimal,
    pub next_billing_date: DateTime<Utc>,
    pub active: bool,
}

impl BillingSchedule {
    /// Validate `input` and assign a fresh id.
    pub fn try_new(input: CreateBillingSchedule) -> Result<Self> {
        input.validate()?;
        if input.amount <= Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "schedule amount must be positive, got {}",
                input.amount
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            client_id: input.client_id,
            client_name: input.client_name,
            field_id: input.field_id,
            field_name: input.field_name,
            service_name: input.service_name,
            frequency: input.frequency,
            amount: input.amount,
            next_billing_date: input.next_billing_date,
            active: input.active,
        })
    }
}

impl Searchable for BillingSchedule {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.field_name.as_str(),
            self.service_name.as_str(),
        ]
    }
}

impl SortFields for BillingSchedule {
    fn sort_date(&self) -> NaiveDateTime {
        self.next_billing_date.naive_utc()
    }

    fn sort_amount(&self) -> Decimal {
        self.amount
    }

    fn sort_name(&self) -> &str {
        &self.client_name
    }
}

/// Filter parameters for listing schedules. `None` means no filter.
#[derive(Debug, Clone, Default)]
pub struct ListSchedulesFilter {
    pub search: Option<String>,
    pub frequency: Option<Frequency>,
    pub active: Option<bool>,
}
