//! Financial rollups over a reporting interval.

use super::reconcile::reconcile;
use crate::models::{Anomaly, Invoice, InvoiceStatus, Payment};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use domain_core::money::checked_add;
use domain_core::{Calendar, DomainContext, DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Length of one rollup bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketGranularity {
    Day,
    Week,
    Month,
    Quarter,
}

impl BucketGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketGranularity::Day => "day",
            BucketGranularity::Week => "week",
            BucketGranularity::Month => "month",
            BucketGranularity::Quarter => "quarter",
        }
    }

    /// First day of the period of this granularity containing `date`.
    fn align(&self, date: NaiveDate) -> Result<NaiveDate> {
        let aligned = match self {
            BucketGranularity::Day => Some(date),
            BucketGranularity::Week => Some(Calendar::week_start(date)),
            BucketGranularity::Month => date.with_day(1),
            BucketGranularity::Quarter => {
                let month = (date.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), month, 1)
            }
        };
        aligned.ok_or_else(|| {
            DomainError::invalid(format!("cannot align {} to a {}", date, self.as_str()))
        })
    }

    fn step(&self, start: NaiveDate, n: u32) -> Option<NaiveDate> {
        match self {
            BucketGranularity::Day => start.checked_add_days(Days::new(u64::from(n))),
            BucketGranularity::Week => start.checked_add_days(Days::new(7 * u64::from(n))),
            BucketGranularity::Month => start.checked_add_months(Months::new(n)),
            BucketGranularity::Quarter => start.checked_add_months(Months::new(n.checked_mul(3)?)),
        }
    }
}

impl FromStr for BucketGranularity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(BucketGranularity::Day),
            "week" => Ok(BucketGranularity::Week),
            "month" => Ok(BucketGranularity::Month),
            "quarter" => Ok(BucketGranularity::Quarter),
            other => Err(DomainError::invalid(format!("unknown bucket granularity '{}'", other))),
        }
    }
}

/// Consecutive calendar periods of equal granularity.
///
/// The first period is the one containing the requested start date, so a
/// monthly interval starting on the 17th begins on the 1st.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingInterval {
    granularity: BucketGranularity,
    periods: Vec<(NaiveDate, NaiveDate)>,
}

impl ReportingInterval {
    pub fn new(start: NaiveDate, granularity: BucketGranularity, buckets: u32) -> Result<Self> {
        if buckets == 0 {
            return Err(DomainError::invalid("a reporting interval needs at least one bucket"));
        }

        let first = granularity.align(start)?;
        let mut periods = Vec::with_capacity(buckets as usize);
        for i in 0..buckets {
            let out_of_range =
                || DomainError::invalid(format!("bucket {} after {} is out of range", i, first));
            let period_start = granularity.step(first, i).ok_or_else(out_of_range)?;
            let period_end = granularity
                .step(first, i + 1)
                .and_then(|next| next.pred_opt())
                .ok_or_else(out_of_range)?;
            periods.push((period_start, period_end));
        }

        Ok(Self {
            granularity,
            periods,
        })
    }

    pub fn granularity(&self) -> BucketGranularity {
        self.granularity
    }

    pub fn periods(&self) -> &[(NaiveDate, NaiveDate)] {
        &self.periods
    }

    pub fn first_day(&self) -> NaiveDate {
        self.periods[0].0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.periods[self.periods.len() - 1].1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }

    /// Index of the period containing `date`.
    fn bucket_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        Some(self.periods.partition_point(|(start, _)| *start <= date) - 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub invoiced: Decimal,
    pub collected: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialRollup {
    /// Totals of invoices issued inside the interval.
    pub total_invoiced: Decimal,
    /// Payments received inside the interval.
    pub total_collected: Decimal,
    /// Balance due over all non-cancelled invoices, regardless of interval.
    pub outstanding: Decimal,
    /// `total_collected / total_invoiced`, zero when nothing was invoiced.
    pub collection_rate: Decimal,
    pub total_overdue: Decimal,
    pub overdue_count: usize,
    pub buckets: Vec<Bucket>,
    pub anomalies: Vec<Anomaly>,
}

#[instrument(
    skip_all,
    fields(
        invoices = invoices.len(),
        payments = payments.len(),
        granularity = interval.granularity().as_str()
    )
)]
pub fn rollup(
    invoices: &[Invoice],
    payments: &[Payment],
    interval: &ReportingInterval,
    now: DateTime<Utc>,
    ctx: &DomainContext,
) -> Result<FinancialRollup> {
    let mut buckets: Vec<Bucket> = interval
        .periods()
        .iter()
        .map(|(start, end)| Bucket {
            start: *start,
            end: *end,
            invoiced: Decimal::ZERO,
            collected: Decimal::ZERO,
        })
        .collect();

    let mut by_invoice: HashMap<Uuid, Vec<Payment>> = HashMap::new();
    let mut total_collected = Decimal::ZERO;
    for payment in payments {
        by_invoice
            .entry(payment.invoice_id())
            .or_default()
            .push(payment.clone());
        if let Some(i) = interval.bucket_of(payment.date()) {
            buckets[i].collected = checked_add(buckets[i].collected, payment.amount(), "collected amount")?;
            total_collected = checked_add(total_collected, payment.amount(), "total collected")?;
        }
    }

    let mut total_invoiced = Decimal::ZERO;
    let mut outstanding = Decimal::ZERO;
    let mut total_overdue = Decimal::ZERO;
    let mut overdue_count = 0;
    let mut anomalies = Vec::new();

    for invoice in invoices {
        let paid = by_invoice
            .get(&invoice.id())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let result = reconcile(invoice, paid, now, ctx)?;

        if let Some(i) = interval.bucket_of(invoice.issue_date()) {
            buckets[i].invoiced = checked_add(buckets[i].invoiced, result.total, "invoiced amount")?;
            total_invoiced = checked_add(total_invoiced, result.total, "total invoiced")?;
        }
        if invoice.status() != InvoiceStatus::Cancelled {
            outstanding = checked_add(outstanding, result.balance_due, "outstanding balance")?;
        }
        if result.aging.is_overdue() {
            total_overdue = checked_add(total_overdue, result.balance_due, "overdue balance")?;
            overdue_count += 1;
        }
        anomalies.extend(result.anomalies);
    }

    let collection_rate = if total_invoiced > Decimal::ZERO {
        total_collected
            .checked_div(total_invoiced)
            .ok_or_else(|| DomainError::invalid("collection rate is out of range"))?
    } else {
        Decimal::ZERO
    };

    debug!(
        invoiced = %total_invoiced,
        collected = %total_collected,
        outstanding = %outstanding,
        overdue_count,
        anomalies = anomalies.len(),
        "Financial rollup computed"
    );

    Ok(FinancialRollup {
        total_invoiced,
        total_collected,
        outstanding,
        collection_rate,
        total_overdue,
        overdue_count,
        buckets,
        anomalies,
    })
}
