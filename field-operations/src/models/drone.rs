//! Drone model.

use chrono::{DateTime, Utc};
use domain_core::query::Searchable;
use domain_core::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DroneStatus {
    Available,
    InUse,
    Maintenance,
}

impl DroneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DroneStatus::Available => "available",
            DroneStatus::InUse => "in-use",
            DroneStatus::Maintenance => "maintenance",
        }
    }
}

impl FromStr for DroneStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "available" => Ok(DroneStatus::Available),
            "in-use" => Ok(DroneStatus::InUse),
            "maintenance" => Ok(DroneStatus::Maintenance),
            other => Err(DomainError::invalid(format!("unknown drone status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub id: Uuid,
    pub name: String,
    pub model: String,
    pub status: DroneStatus,
    /// Charge in percent, 0 to 100.
    pub battery: u8,
    pub last_maintenance_date: DateTime<Utc>,
    pub next_maintenance_date: DateTime<Utc>,
    pub flight_hours: f64,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateDrone {
    #[validate(length(min = 1, message = "Drone name cannot be empty"))]
    pub name: String,
    pub model: String,
    pub status: DroneStatus,
    #[validate(range(max = 100, message = "Battery must be between 0 and 100"))]
    pub battery: u8,
    pub last_maintenance_date: DateTime<Utc>,
    pub next_maintenance_date: DateTime<Utc>,
    #[validate(range(min = 0.0, message = "Flight hours cannot be negative"))]
    pub flight_hours: f64,
}

impl Drone {
    pub fn try_new(input: CreateDrone) -> Result<Self> {
        input.validate()?;
        if !input.flight_hours.is_finite() {
            return Err(DomainError::invalid("flight hours must be a finite number"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            model: input.model,
            status: input.status,
            battery: input.battery,
            last_maintenance_date: input.last_maintenance_date,
            next_maintenance_date: input.next_maintenance_date,
            flight_hours: input.flight_hours,
        })
    }
}

impl Searchable for Drone {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.model.as_str()]
    }
}

/// Filter parameters for listing drones. `None` means no filter.
#[derive(Debug, Clone, Default)]
pub struct ListDronesFilter {
    pub search: Option<String>,
    pub status: Option<DroneStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(battery: u8, flight_hours: f64) -> CreateDrone {
        CreateDrone {
            name: "AgriDrone X1".to_string(),
            model: "DJI Agras T40".to_string(),
            status: DroneStatus::Available,
            battery,
            last_maintenance_date: "2025-03-01T00:00:00Z".parse().unwrap(),
            next_maintenance_date: "2025-06-01T00:00:00Z".parse().unwrap(),
            flight_hours,
        }
    }

    #[test]
    fn battery_above_100_is_rejected() {
        assert!(Drone::try_new(input(101, 10.0)).unwrap_err().is_invalid_argument());
        assert!(Drone::try_new(input(100, 10.0)).is_ok());
        assert!(Drone::try_new(input(0, 0.0)).is_ok());
    }

    #[test]
    fn negative_flight_hours_are_rejected() {
        assert!(Drone::try_new(input(50, -0.5)).is_err());
        assert!(Drone::try_new(input(50, f64::NAN)).is_err());
    }

    #[test]
    fn status_uses_dashboard_strings() {
        assert_eq!("in-use".parse::<DroneStatus>().unwrap(), DroneStatus::InUse);
        assert_eq!(serde_json::to_string(&DroneStatus::InUse).unwrap(), "\"in-use\"");
    }
}
