//! Bounded time windows (day, week, month, look-ahead).

use super::Calendar;
use crate::error::{DomainError, Result};
use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

/// Window definitions understood by [`Calendar::window_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "days")]
pub enum WindowKind {
    /// Local calendar day containing the anchor.
    Day,
    /// Monday through Sunday of the ISO week containing the anchor.
    Week,
    /// First through last day of the anchor's month.
    Month,
    /// Exact instants `[now, now + n days]`.
    NextDaysFromNow(i64),
    /// Whole days from the start of today through the end of day `today + n`.
    NextDaysFromStartOfToday(i64),
}

/// Closed interval of instants; both bounds are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WindowBounds")]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked wire form of [`TimeWindow`].
#[derive(Deserialize)]
struct WindowBounds {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<WindowBounds> for TimeWindow {
    type Error = DomainError;

    fn try_from(bounds: WindowBounds) -> Result<Self> {
        TimeWindow::new(bounds.start, bounds.end)
    }
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(DomainError::invalid(format!(
                "window end {} is before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// True iff `start <= instant <= end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn non_negative_days(n: i64) -> Result<u64> {
    u64::try_from(n)
        .map_err(|_| DomainError::invalid(format!("window size must not be negative (got {})", n)))
}

impl Calendar {
    /// Compute the window of `kind` around `anchor`.
    ///
    /// Day, week and month windows use `anchor`; look-ahead windows use `now`.
    pub fn window_for(
        &self,
        kind: WindowKind,
        anchor: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<TimeWindow> {
        match kind {
            WindowKind::Day => Ok(self.day_window(anchor)),
            WindowKind::Week => self.week_window(anchor),
            WindowKind::Month => self.month_window(anchor),
            WindowKind::NextDaysFromNow(n) => self.next_days_from_now(n, now),
            WindowKind::NextDaysFromStartOfToday(n) => self.next_days_from_start_of_today(n, now),
        }
    }

    pub fn day_window(&self, anchor: DateTime<Utc>) -> TimeWindow {
        let date = self.local_date(anchor);
        TimeWindow {
            start: self.start_of_day(date),
            end: self.end_of_day(date),
        }
    }

    pub fn week_window(&self, anchor: DateTime<Utc>) -> Result<TimeWindow> {
        let monday = Calendar::week_start(self.local_date(anchor));
        let sunday = monday
            .checked_add_days(Days::new(6))
            .ok_or_else(|| DomainError::invalid(format!("week of {} is out of range", monday)))?;
        TimeWindow::new(self.start_of_day(monday), self.end_of_day(sunday))
    }

    pub fn month_window(&self, anchor: DateTime<Utc>) -> Result<TimeWindow> {
        let (first, last) = Calendar::month_bounds(self.local_date(anchor))?;
        TimeWindow::new(self.start_of_day(first), self.end_of_day(last))
    }

    /// `[now, now + n days]`, keeping the wall-clock time of `now`.
    pub fn next_days_from_now(&self, n: i64, now: DateTime<Utc>) -> Result<TimeWindow> {
        let days = non_negative_days(n)?;
        let end = self.add_days(now, days)?;
        TimeWindow::new(now, end)
    }

    /// From 00:00:00.000 today through 23:59:59.999 of day `today + n`.
    pub fn next_days_from_start_of_today(&self, n: i64, now: DateTime<Utc>) -> Result<TimeWindow> {
        let days = non_negative_days(n)?;
        let today = self.local_date(now);
        let last = today
            .checked_add_days(Days::new(days))
            .ok_or_else(|| DomainError::invalid(format!("{} + {} days is out of range", today, days)))?;
        TimeWindow::new(self.start_of_day(today), self.end_of_day(last))
    }
}

/// Free-function form of [`TimeWindow::contains`].
pub fn contains(instant: DateTime<Utc>, window: &TimeWindow) -> bool {
    window.contains(instant)
}
