//! Calendar arithmetic in an explicit time zone.
//!
//! Nothing in this module samples a clock. Every operation takes the instants
//! it works on as arguments, so results depend only on inputs.

mod window;

pub use window::{contains, TimeWindow, WindowKind};

use crate::error::{DomainError, Result};
use chrono::{
    DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc,
};
use chrono_tz::Tz;

/// Longest local-time gap a DST transition can produce.
const MAX_GAP_MINUTES: i64 = 3 * 60;

/// Maps instants to local calendar days of a single time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// Build a calendar from an IANA zone name such as `Europe/Sarajevo`.
    pub fn from_name(name: &str) -> Result<Self> {
        let tz = name.parse::<Tz>().map_err(|e| {
            DomainError::ConfigError(anyhow::anyhow!("unknown timezone '{}': {}", name, e))
        })?;
        Ok(Self { tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Local calendar date containing `instant`.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Local wall-clock time of `instant`.
    pub fn local_datetime(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }

    /// Resolve a local wall-clock time to an instant.
    ///
    /// Ambiguous times (clocks turned back) resolve to the earlier instant.
    /// Times inside a gap (clocks turned forward) resolve to the first valid
    /// minute after the gap.
    pub fn to_instant(&self, local: NaiveDateTime) -> DateTime<Utc> {
        if let Some(dt) = self.tz.from_local_datetime(&local).earliest() {
            return dt.with_timezone(&Utc);
        }

        let mut probe = local;
        for _ in 0..MAX_GAP_MINUTES {
            probe += Duration::minutes(1);
            if let Some(dt) = self.tz.from_local_datetime(&probe).earliest() {
                return dt.with_timezone(&Utc);
            }
        }

        local.and_utc()
    }

    /// First instant of the local day `date` (00:00:00.000).
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        self.to_instant(date.and_time(NaiveTime::MIN))
    }

    /// Last instant of the local day `date` (23:59:59.999).
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.to_instant(date.and_time(last))
    }

    pub fn same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.local_date(a) == self.local_date(b)
    }

    /// Signed number of local calendar days from `from` to `to`.
    pub fn days_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
        (self.local_date(to) - self.local_date(from)).num_days()
    }

    /// Move `instant` by whole local days, keeping its wall-clock time.
    pub fn add_days(&self, instant: DateTime<Utc>, days: u64) -> Result<DateTime<Utc>> {
        let local = self
            .local_datetime(instant)
            .checked_add_days(Days::new(days))
            .ok_or_else(|| DomainError::invalid(format!("{} + {} days is out of range", instant, days)))?;
        Ok(self.to_instant(local))
    }

    /// Move `instant` by calendar months, keeping its wall-clock time.
    ///
    /// The day of month is clamped to the last day of the target month, so
    /// Jan 31 + 1 month is Feb 28 (or 29) and Feb 29 + 12 months is Feb 28
    /// in a non-leap year.
    pub fn add_months(&self, instant: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
        let local = self
            .local_datetime(instant)
            .checked_add_months(Months::new(months))
            .ok_or_else(|| {
                DomainError::invalid(format!("{} + {} months is out of range", instant, months))
            })?;
        Ok(self.to_instant(local))
    }

    /// Monday of the ISO week containing `date`.
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        date - Days::new(u64::from(date.weekday().num_days_from_monday()))
    }

    /// First and last day of the month containing `date`.
    pub fn month_bounds(date: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let first = date
            .with_day(1)
            .ok_or_else(|| DomainError::invalid(format!("no first day for {}", date)))?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| DomainError::invalid(format!("no last day for {}", date)))?;
        Ok((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn unknown_timezone_is_config_error() {
        let err = Calendar::from_name("Mars/Olympus").unwrap_err();
        assert!(matches!(err, DomainError::ConfigError(_)));
    }

    #[test]
    fn local_date_follows_the_zone() {
        let cal = Calendar::from_name("Europe/Sarajevo").unwrap();
        // 23:30 UTC on 14 May is 01:30 on 15 May in CEST.
        let instant = utc("2025-05-14T23:30:00Z");
        assert_eq!(cal.local_date(instant), NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());
        assert_eq!(
            Calendar::utc().local_date(instant),
            NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
        );
    }

    #[test]
    fn end_of_day_is_last_millisecond() {
        let cal = Calendar::utc();
        let end = cal.end_of_day(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(end.hour(), 23);
        assert_eq!(end.minute(), 59);
        assert_eq!(end.second(), 59);
        assert_eq!(end.nanosecond(), 999_000_000);
    }

    #[test]
    fn gap_resolves_after_the_transition() {
        let cal = Calendar::from_name("Europe/Sarajevo").unwrap();
        // Clocks jump from 02:00 to 03:00 on 30 March 2025.
        let local = NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let instant = cal.to_instant(local);
        assert_eq!(cal.local_datetime(instant).hour(), 3);
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        let cal = Calendar::utc();
        let next = cal.add_months(utc("2025-01-31T09:00:00Z"), 1).unwrap();
        assert_eq!(next, utc("2025-02-28T09:00:00Z"));

        let leap = cal.add_months(utc("2024-01-31T09:00:00Z"), 1).unwrap();
        assert_eq!(leap, utc("2024-02-29T09:00:00Z"));
    }

    #[test]
    fn week_start_handles_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2025, 5, 18).unwrap();
        assert_eq!(
            Calendar::week_start(sunday),
            NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()
        );
    }

    #[test]
    fn month_bounds_cover_february() {
        let (first, last) =
            Calendar::month_bounds(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
