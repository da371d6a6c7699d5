//! Common test utilities for workflow tests.

#![allow(dead_code)]

use rust_decimal::Decimal;
use workflow_tests::WorkflowTestContext;

/// Seeded dashboard evaluated at the fixed workflow instant.
pub fn setup() -> WorkflowTestContext {
    WorkflowTestContext::new().expect("Failed to seed workflow test context")
}

pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}
