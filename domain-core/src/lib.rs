//! domain-core: shared infrastructure for the field-service dashboard engines.
//!
//! Every operation here is a pure function of its inputs. Time enters only as
//! an explicit `now` argument and calendar settings travel in a
//! [`DomainContext`].
pub mod calendar;
pub mod config;
pub mod context;
pub mod error;
pub mod money;
pub mod observability;
pub mod query;

pub use calendar::{Calendar, TimeWindow, WindowKind};
pub use context::DomainContext;
pub use error::{DomainError, Result};
pub use money::MoneyRounding;

pub use chrono;
pub use rust_decimal;
pub use tracing;
