//! Task model.

use chrono::{DateTime, NaiveDateTime, Utc};
use domain_core::query::{Searchable, SortFields};
use domain_core::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Spraying,
    Seeding,
    Scouting,
    Border,
    Other,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Spraying => "spraying",
            TaskType::Seeding => "seeding",
            TaskType::Scouting => "scouting",
            TaskType::Border => "border",
            TaskType::Other => "other",
        }
    }
}

impl FromStr for TaskType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spraying" => Ok(TaskType::Spraying),
            "seeding" => Ok(TaskType::Seeding),
            "scouting" => Ok(TaskType::Scouting),
            "border" => Ok(TaskType::Border),
            "other" => Ok(TaskType::Other),
            other => Err(DomainError::invalid(format!("unknown task type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Planned,
    /// In progress.
    Progress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::Progress => "progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// Planned or in progress.
    pub fn is_open(&self) -> bool {
        matches!(self, TaskStatus::Planned | TaskStatus::Progress)
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "planned" => Ok(TaskStatus::Planned),
            "progress" => Ok(TaskStatus::Progress),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(DomainError::invalid(format!("unknown task status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(DomainError::invalid(format!("unknown priority '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }
}

impl FromStr for Recurrence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Recurrence::None),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            other => Err(DomainError::invalid(format!("unknown recurrence '{}'", other))),
        }
    }
}

/// A drone operation scheduled on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub task_type: TaskType,
    pub field_id: Uuid,
    pub field_name: String,
    pub drone_id: Uuid,
    pub drone_name: String,
    pub scheduled_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub recurrence: Recurrence,
    /// Set iff `status` is completed.
    pub completed_date: Option<DateTime<Utc>>,
    pub area_completed: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "Task title cannot be empty"))]
    pub title: String,
    pub task_type: TaskType,
    pub field_id: Uuid,
    pub field_name: String,
    pub drone_id: Uuid,
    pub drone_name: String,
    pub scheduled_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub recurrence: Recurrence,
    pub completed_date: Option<DateTime<Utc>>,
    pub area_completed: Option<Decimal>,
    pub notes: Option<String>,
}

impl Task {
    pub fn try_new(input: CreateTask) -> Result<Self> {
        input.validate()?;

        let completed = input.status == TaskStatus::Completed;
        if completed != input.completed_date.is_some() {
            return Err(DomainError::invalid(format!(
                "completed date must be set exactly when status is completed (status '{}')",
                input.status.as_str()
            )));
        }
        if input.area_completed.is_some_and(|a| a < Decimal::ZERO) {
            return Err(DomainError::invalid("completed area must not be negative"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            task_type: input.task_type,
            field_id: input.field_id,
            field_name: input.field_name,
            drone_id: input.drone_id,
            drone_name: input.drone_name,
            scheduled_date: input.scheduled_date,
            status: input.status,
            priority: input.priority,
            recurrence: input.recurrence,
            completed_date: input.completed_date,
            area_completed: input.area_completed,
            notes: input.notes,
        })
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.field_name.as_str()]
    }
}

impl SortFields for Task {
    fn sort_date(&self) -> NaiveDateTime {
        self.scheduled_date.naive_utc()
    }

    fn sort_amount(&self) -> Decimal {
        self.area_completed.unwrap_or_default()
    }

    fn sort_name(&self) -> &str {
        &self.title
    }
}

/// Filter parameters for listing tasks. `None` means no filter.
#[derive(Debug, Clone, Default)]
pub struct ListTasksFilter {
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub field_id: Option<Uuid>,
    pub drone_id: Option<Uuid>,
}
