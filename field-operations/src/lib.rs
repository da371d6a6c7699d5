//! field-operations: fields, drones, tasks and inventory for the operations pages.

pub mod models;
pub mod services;
