//! Task views for the calendar and dashboard.

use crate::models::Task;
use chrono::{DateTime, Utc};
use domain_core::query::{sort, SortSpec};
use domain_core::{DomainContext, DomainError, Result, WindowKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Calendar page view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Day,
    Week,
    Month,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Day => "day",
            CalendarView::Week => "week",
            CalendarView::Month => "month",
        }
    }

    fn window_kind(&self) -> WindowKind {
        match self {
            CalendarView::Day => WindowKind::Day,
            CalendarView::Week => WindowKind::Week,
            CalendarView::Month => WindowKind::Month,
        }
    }
}

impl FromStr for CalendarView {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(CalendarView::Day),
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            other => Err(DomainError::invalid(format!("unknown calendar view '{}'", other))),
        }
    }
}

fn by_schedule_asc<'a>(tasks: Vec<&'a Task>) -> Vec<&'a Task> {
    sort(&tasks, &SortSpec::date_asc(|t: &&Task| t.scheduled_date))
}

/// Tasks scheduled in the day, week or month containing `anchor`, earliest first.
pub fn tasks_in_view<'a>(
    tasks: &'a [Task],
    view: CalendarView,
    anchor: DateTime<Utc>,
    ctx: &DomainContext,
) -> Result<Vec<&'a Task>> {
    let window = ctx.calendar.window_for(view.window_kind(), anchor, anchor)?;
    let visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| window.contains(t.scheduled_date))
        .collect();
    debug!(view = view.as_str(), visible = visible.len(), "Calendar view resolved");
    Ok(by_schedule_asc(visible))
}

/// Planned and in-progress tasks from the start of today through `days` days ahead.
pub fn upcoming_tasks<'a>(
    tasks: &'a [Task],
    days: i64,
    now: DateTime<Utc>,
    ctx: &DomainContext,
) -> Result<Vec<&'a Task>> {
    let window = ctx.calendar.next_days_from_start_of_today(days, now)?;
    let upcoming = tasks
        .iter()
        .filter(|t| t.status.is_open() && window.contains(t.scheduled_date))
        .collect();
    Ok(by_schedule_asc(upcoming))
}

/// The `limit` most recently scheduled tasks, newest first.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let all: Vec<&Task> = tasks.iter().collect();
    let mut newest = sort(&all, &SortSpec::date_desc(|t: &&Task| t.scheduled_date));
    newest.truncate(limit);
    newest
}
