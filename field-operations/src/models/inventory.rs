//! Inventory model.

use domain_core::query::Searchable;
use domain_core::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InventoryStatus {
    Available,
    InUse,
}

impl InventoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::Available => "available",
            InventoryStatus::InUse => "in-use",
        }
    }
}

impl FromStr for InventoryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "available" => Ok(InventoryStatus::Available),
            "in-use" => Ok(InventoryStatus::InUse),
            other => Err(DomainError::invalid(format!("unknown inventory status '{}'", other))),
        }
    }
}

/// Equipment or consumable held in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    /// Free-form category such as `batteries` or `chemicals`.
    pub category: String,
    pub quantity: Decimal,
    /// Unit for consumables (`L`, `kg`); `None` for countable equipment.
    pub unit: Option<String>,
    pub status: InventoryStatus,
}

impl InventoryItem {
    pub fn try_new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: Decimal,
        unit: Option<String>,
        status: InventoryStatus,
    ) -> Result<Self> {
        if quantity < Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "inventory quantity must not be negative, got {}",
                quantity
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit,
            status,
        })
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}

/// `None` category means all categories.
#[derive(Debug, Clone, Default)]
pub struct ListInventoryFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}
