//! Dashboard business summary.

use crate::models::{Drone, DroneStatus, Field, Task, TaskStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DroneStatusCounts {
    pub available: usize,
    pub in_use: usize,
    pub maintenance: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatusCounts {
    pub planned: usize,
    pub progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessSummary {
    pub field_count: usize,
    pub drone_count: usize,
    pub task_count: usize,
    pub drones: DroneStatusCounts,
    pub tasks: TaskStatusCounts,
    /// Sum of field areas, in hectares.
    pub total_area_hectares: Decimal,
    /// Sum of the pending-task counters stored on fields.
    pub pending_on_fields: u64,
}

#[instrument(skip_all)]
pub fn business_summary(fields: &[Field], drones: &[Drone], tasks: &[Task]) -> BusinessSummary {
    let mut drone_counts = DroneStatusCounts::default();
    for drone in drones {
        match drone.status {
            DroneStatus::Available => drone_counts.available += 1,
            DroneStatus::InUse => drone_counts.in_use += 1,
            DroneStatus::Maintenance => drone_counts.maintenance += 1,
        }
    }

    let mut task_counts = TaskStatusCounts::default();
    for task in tasks {
        match task.status {
            TaskStatus::Planned => task_counts.planned += 1,
            TaskStatus::Progress => task_counts.progress += 1,
            TaskStatus::Completed => task_counts.completed += 1,
            TaskStatus::Cancelled => task_counts.cancelled += 1,
        }
    }

    BusinessSummary {
        field_count: fields.len(),
        drone_count: drones.len(),
        task_count: tasks.len(),
        drones: drone_counts,
        tasks: task_counts,
        total_area_hectares: fields.iter().map(|f| f.area.to_hectares()).sum(),
        pending_on_fields: fields.iter().map(|f| u64::from(f.tasks_pending)).sum(),
    }
}
