//! Test helper module for field-operations integration tests.
//!
//! Fixtures follow the dashboard's seed fields, drones and tasks.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use field_operations::models::{
    AreaUnit, ClientRef, CreateDrone, CreateField, CreateTask, Drone, DroneStatus, Field,
    Priority, Recurrence, Task, TaskStatus, TaskType,
};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn utc(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 instant")
}

pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}

pub fn field(name: &str, crop: &str, dunums: &str, client: &str) -> Field {
    Field::try_new(CreateField {
        name: name.to_string(),
        area: dec(dunums),
        area_unit: AreaUnit::Dunum,
        crop_type: crop.to_string(),
        last_operation_date: None,
        tasks_pending: 1,
        client: ClientRef {
            name: client.to_string(),
            phone: Some("+387 61 123 456".to_string()),
        },
    })
    .expect("valid field")
}

pub fn seed_fields() -> Vec<Field> {
    vec![
        field("North Wheat Field", "Wheat", "45", "Farmer Emir Kovačević"),
        field("South Corn Field", "Corn", "30", "Farmer Amira Hodžić"),
        field("East Soybean Field", "Soybeans", "25", "Farmer Emir Kovačević"),
    ]
}

pub fn drone(name: &str, model: &str, status: DroneStatus, next_maintenance: &str) -> Drone {
    Drone::try_new(CreateDrone {
        name: name.to_string(),
        model: model.to_string(),
        status,
        battery: 85,
        last_maintenance_date: utc("2025-04-01T08:00:00Z"),
        next_maintenance_date: utc(next_maintenance),
        flight_hours: 120.5,
    })
    .expect("valid drone")
}

pub fn seed_drones() -> Vec<Drone> {
    vec![
        drone("AgriDrone X1", "DJI Agras T30", DroneStatus::Available, "2025-06-20T08:00:00Z"),
        drone("AgriDrone X2", "DJI Agras T40", DroneStatus::InUse, "2025-05-18T08:00:00Z"),
        drone("SeedMaster 3", "XAG P100", DroneStatus::Maintenance, "2025-05-10T08:00:00Z"),
    ]
}

pub struct TaskBuilder {
    input: CreateTask,
}

impl TaskBuilder {
    pub fn new(title: &str, scheduled: &str) -> Self {
        Self {
            input: CreateTask {
                title: title.to_string(),
                task_type: TaskType::Spraying,
                field_id: Uuid::new_v4(),
                field_name: "North Wheat Field".to_string(),
                drone_id: Uuid::new_v4(),
                drone_name: "AgriDrone X1".to_string(),
                scheduled_date: utc(scheduled),
                status: TaskStatus::Planned,
                priority: Priority::Medium,
                recurrence: Recurrence::None,
                completed_date: None,
                area_completed: None,
                notes: None,
            },
        }
    }

    pub fn field(mut self, id: Uuid, name: &str) -> Self {
        self.input.field_id = id;
        self.input.field_name = name.to_string();
        self
    }

    pub fn drone(mut self, id: Uuid) -> Self {
        self.input.drone_id = id;
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.input.status = status;
        self
    }

    pub fn completed(mut self, at: &str, area: &str) -> Self {
        self.input.status = TaskStatus::Completed;
        self.input.completed_date = Some(utc(at));
        self.input.area_completed = Some(dec(area));
        self
    }

    pub fn build(self) -> Task {
        Task::try_new(self.input).expect("valid task")
    }
}

pub fn task(title: &str, scheduled: &str) -> Task {
    TaskBuilder::new(title, scheduled).build()
}

pub fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title.clone()).collect()
}
