//! invoicing-engine: invoice reconciliation, aging and financial rollups.

pub mod models;
pub mod services;
