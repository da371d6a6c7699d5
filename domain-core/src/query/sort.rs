//! Stable sorting over a fixed vocabulary of sort orders.

use super::text::compare_names;
use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort orders offered by list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    DateAsc,
    DateDesc,
    AmountAsc,
    AmountDesc,
    NameAsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateAsc => "date-asc",
            SortOrder::DateDesc => "date-desc",
            SortOrder::AmountAsc => "amount-asc",
            SortOrder::AmountDesc => "amount-desc",
            SortOrder::NameAsc => "name-asc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    /// Unrecognised keys are rejected; there is no fallback order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-asc" => Ok(SortOrder::DateAsc),
            "date-desc" => Ok(SortOrder::DateDesc),
            "amount-asc" => Ok(SortOrder::AmountAsc),
            "amount-desc" => Ok(SortOrder::AmountDesc),
            "name-asc" => Ok(SortOrder::NameAsc),
            other => Err(DomainError::invalid(format!("unknown sort order '{}'", other))),
        }
    }
}

/// Values usable as a date sort key.
pub trait AsSortDate {
    fn sort_date(&self) -> NaiveDateTime;
}

impl AsSortDate for NaiveDateTime {
    fn sort_date(&self) -> NaiveDateTime {
        *self
    }
}

impl AsSortDate for NaiveDate {
    fn sort_date(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

impl AsSortDate for DateTime<Utc> {
    fn sort_date(&self) -> NaiveDateTime {
        self.naive_utc()
    }
}

type Accessor<'a, T, K> = Box<dyn Fn(&T) -> K + 'a>;

/// A sort order together with the accessor that extracts its key.
pub enum SortSpec<'a, T> {
    DateAsc(Accessor<'a, T, NaiveDateTime>),
    DateDesc(Accessor<'a, T, NaiveDateTime>),
    AmountAsc(Accessor<'a, T, Decimal>),
    AmountDesc(Accessor<'a, T, Decimal>),
    NameAsc(Accessor<'a, T, String>),
}

impl<T> fmt::Debug for SortSpec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SortSpec({})", self.order())
    }
}

impl<'a, T> SortSpec<'a, T> {
    pub fn date_asc<D: AsSortDate>(accessor: impl Fn(&T) -> D + 'a) -> Self {
        SortSpec::DateAsc(Box::new(move |item| accessor(item).sort_date()))
    }

    pub fn date_desc<D: AsSortDate>(accessor: impl Fn(&T) -> D + 'a) -> Self {
        SortSpec::DateDesc(Box::new(move |item| accessor(item).sort_date()))
    }

    pub fn amount_asc(accessor: impl Fn(&T) -> Decimal + 'a) -> Self {
        SortSpec::AmountAsc(Box::new(accessor))
    }

    pub fn amount_desc(accessor: impl Fn(&T) -> Decimal + 'a) -> Self {
        SortSpec::AmountDesc(Box::new(accessor))
    }

    pub fn name_asc(accessor: impl Fn(&T) -> String + 'a) -> Self {
        SortSpec::NameAsc(Box::new(accessor))
    }

    pub fn order(&self) -> SortOrder {
        match self {
            SortSpec::DateAsc(_) => SortOrder::DateAsc,
            SortSpec::DateDesc(_) => SortOrder::DateDesc,
            SortSpec::AmountAsc(_) => SortOrder::AmountAsc,
            SortSpec::AmountDesc(_) => SortOrder::AmountDesc,
            SortSpec::NameAsc(_) => SortOrder::NameAsc,
        }
    }
}

/// Entities that carry a date, an amount and a display name for list views.
pub trait SortFields {
    fn sort_date(&self) -> NaiveDateTime;
    fn sort_amount(&self) -> Decimal;
    fn sort_name(&self) -> &str;
}

impl<T: SortFields> SortFields for &T {
    fn sort_date(&self) -> NaiveDateTime {
        (**self).sort_date()
    }

    fn sort_amount(&self) -> Decimal {
        (**self).sort_amount()
    }

    fn sort_name(&self) -> &str {
        (**self).sort_name()
    }
}

impl<'a, T: SortFields + 'a> SortSpec<'a, T> {
    /// Sort by `order` using the entity's own sort fields.
    pub fn for_order(order: SortOrder) -> Self {
        match order {
            SortOrder::DateAsc => SortSpec::DateAsc(Box::new(|item: &T| item.sort_date())),
            SortOrder::DateDesc => SortSpec::DateDesc(Box::new(|item: &T| item.sort_date())),
            SortOrder::AmountAsc => SortSpec::AmountAsc(Box::new(|item: &T| item.sort_amount())),
            SortOrder::AmountDesc => SortSpec::AmountDesc(Box::new(|item: &T| item.sort_amount())),
            SortOrder::NameAsc => {
                SortSpec::NameAsc(Box::new(|item: &T| item.sort_name().to_string()))
            }
        }
    }
}

fn sorted_by_key<T, K>(
    items: &[T],
    key: impl Fn(&T) -> K,
    compare: impl Fn(&K, &K) -> Ordering,
) -> Vec<T>
where
    T: Clone,
{
    let mut keyed: Vec<(K, &T)> = items.iter().map(|item| (key(item), item)).collect();
    // `sort_by` is stable: equal keys keep their input order.
    keyed.sort_by(|a, b| compare(&a.0, &b.0));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Stable sort returning a new collection; `items` is left untouched.
pub fn sort<T: Clone>(items: &[T], spec: &SortSpec<'_, T>) -> Vec<T> {
    match spec {
        SortSpec::DateAsc(key) => sorted_by_key(items, key, |a, b| a.cmp(b)),
        SortSpec::DateDesc(key) => sorted_by_key(items, key, |a, b| b.cmp(a)),
        SortSpec::AmountAsc(key) => sorted_by_key(items, key, |a, b| a.cmp(b)),
        SortSpec::AmountDesc(key) => sorted_by_key(items, key, |a, b| b.cmp(a)),
        SortSpec::NameAsc(key) => sorted_by_key(items, key, |a, b| compare_names(a, b)),
    }
}

/// Parse a list-view sort key and sort by the entity's own fields.
pub fn sort_by_key_str<T: SortFields + Clone>(items: &[T], key: &str) -> crate::Result<Vec<T>> {
    let order: SortOrder = key.parse()?;
    Ok(sort(items, &SortSpec::for_order(order)))
}
