//! Field model and area units.

use chrono::NaiveDate;
use domain_core::query::Searchable;
use domain_core::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

const DUNUMS_PER_HECTARE: Decimal = Decimal::TEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    Hectare,
    Dunum,
}

impl AreaUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::Hectare => "hectare",
            AreaUnit::Dunum => "dunum",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hectare" | "ha" => Ok(AreaUnit::Hectare),
            "dunum" => Ok(AreaUnit::Dunum),
            other => Err(DomainError::invalid(format!("unknown area unit '{}'", other))),
        }
    }
}

/// A non-negative area with its declared unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    value: Decimal,
    unit: AreaUnit,
}

impl Area {
    pub fn new(value: Decimal, unit: AreaUnit) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::invalid(format!("area must not be negative, got {}", value)));
        }
        Ok(Self { value, unit })
    }

    pub fn hectares(value: Decimal) -> Result<Self> {
        Self::new(value, AreaUnit::Hectare)
    }

    pub fn dunums(value: Decimal) -> Result<Self> {
        Self::new(value, AreaUnit::Dunum)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> AreaUnit {
        self.unit
    }

    /// The area in hectares, the canonical unit. 1 ha = 10 dunums.
    pub fn to_hectares(&self) -> Decimal {
        match self.unit {
            AreaUnit::Hectare => self.value,
            AreaUnit::Dunum => self.value / DUNUMS_PER_HECTARE,
        }
    }

    pub fn in_unit(&self, unit: AreaUnit) -> Decimal {
        match unit {
            AreaUnit::Hectare => self.to_hectares(),
            AreaUnit::Dunum => self.to_hectares() * DUNUMS_PER_HECTARE,
        }
    }
}

/// Owning client as shown on field cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: Uuid,
    pub name: String,
    pub area: Area,
    pub crop_type: String,
    pub last_operation_date: Option<NaiveDate>,
    pub tasks_pending: u32,
    pub client: ClientRef,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateField {
    #[validate(length(min = 1, message = "Field name cannot be empty"))]
    pub name: String,
    pub area: Decimal,
    pub area_unit: AreaUnit,
    pub crop_type: String,
    pub last_operation_date: Option<NaiveDate>,
    pub tasks_pending: u32,
    pub client: ClientRef,
}

impl Field {
    pub fn try_new(input: CreateField) -> Result<Self> {
        input.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            area: Area::new(input.area, input.area_unit)?,
            crop_type: input.crop_type,
            last_operation_date: input.last_operation_date,
            tasks_pending: input.tasks_pending,
            client: input.client,
        })
    }
}

impl Searchable for Field {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.crop_type.as_str(), self.client.name.as_str()];
        if let Some(phone) = &self.client.phone {
            fields.push(phone.as_str());
        }
        fields
    }
}

/// Filter parameters for listing fields. `None` means no filter.
#[derive(Debug, Clone, Default)]
pub struct ListFieldsFilter {
    pub search: Option<String>,
    pub crop_type: Option<String>,
}
