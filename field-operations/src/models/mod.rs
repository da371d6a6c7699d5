//! Domain models for field-operations.

mod client;
mod drone;
mod field;
mod inventory;
mod task;

pub use client::{Client, CreateClient};
pub use drone::{CreateDrone, Drone, DroneStatus, ListDronesFilter};
pub use field::{Area, AreaUnit, ClientRef, CreateField, Field, ListFieldsFilter};
pub use inventory::{InventoryItem, InventoryStatus, ListInventoryFilter};
pub use task::{
    CreateTask, ListTasksFilter, Priority, Recurrence, Task, TaskStatus, TaskType,
};
