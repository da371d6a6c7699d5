//! billing-engine: recurring billing schedules and their projected occurrences.

pub mod models;
pub mod services;
