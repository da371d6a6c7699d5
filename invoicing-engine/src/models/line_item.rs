//! Line item model for invoicing-engine.

use domain_core::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A billed service on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub task_id: Option<Uuid>,
    pub field_id: Option<Uuid>,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            task_id: None,
            field_id: None,
        }
    }

    /// Unrounded `quantity × unit_price`.
    pub fn line_total(&self) -> Result<Decimal> {
        self.quantity.checked_mul(self.unit_price).ok_or_else(|| {
            DomainError::invalid(format!(
                "line total of '{}' is out of range ({} x {})",
                self.description, self.quantity, self.unit_price
            ))
        })
    }

    pub(crate) fn check(&self, position: usize) -> Result<()> {
        if self.quantity <= Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "item {} quantity must be positive, got {}",
                position, self.quantity
            )));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "item {} unit price must not be negative, got {}",
                position, self.unit_price
            )));
        }
        Ok(())
    }
}
