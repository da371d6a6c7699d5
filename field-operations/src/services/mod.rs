//! Services module for field-operations.

pub mod calculator;
pub mod listing;
pub mod maintenance;
pub mod schedule;
pub mod summary;

pub use calculator::{application_requirement, ApplicationKind, ApplicationRate, Requirement};
pub use listing::{filter_clients, filter_drones, filter_fields, filter_inventory, filter_tasks};
pub use maintenance::{maintenance_schedule, MaintenanceEntry, MaintenanceStatus};
pub use schedule::{recent_tasks, tasks_in_view, upcoming_tasks, CalendarView};
pub use summary::{business_summary, BusinessSummary, DroneStatusCounts, TaskStatusCounts};
