//! Spraying and seeding requirement calculator.

use crate::models::{Area, AreaUnit};
use domain_core::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationKind {
    /// Litres of spray mix.
    Spraying,
    /// Kilograms of seed.
    Seeding,
}

impl ApplicationKind {
    pub fn unit(&self) -> &'static str {
        match self {
            ApplicationKind::Spraying => "L",
            ApplicationKind::Seeding => "kg",
        }
    }
}

/// Quantity applied per unit of area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplicationRate {
    kind: ApplicationKind,
    amount: Decimal,
    per: AreaUnit,
}

impl ApplicationRate {
    pub fn new(kind: ApplicationKind, amount: Decimal, per: AreaUnit) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "application rate must not be negative, got {}",
                amount
            )));
        }
        Ok(Self { kind, amount, per })
    }

    pub fn per_hectare(kind: ApplicationKind, amount: Decimal) -> Result<Self> {
        Self::new(kind, amount, AreaUnit::Hectare)
    }

    pub fn kind(&self) -> ApplicationKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn per(&self) -> AreaUnit {
        self.per
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub kind: ApplicationKind,
    pub quantity: Decimal,
    pub unit: &'static str,
}

/// Total product needed to treat `area` at `rate`.
///
/// The area is converted into the rate's unit first, so a per-hectare rate
/// applied to a dunum area gives the same result as the equivalent hectares.
pub fn application_requirement(area: &Area, rate: &ApplicationRate) -> Requirement {
    Requirement {
        kind: rate.kind,
        quantity: area.in_unit(rate.per) * rate.amount,
        unit: rate.kind.unit(),
    }
}
