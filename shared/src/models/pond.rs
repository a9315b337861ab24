//! Pond and feed intake models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::AreaUnit;

/// A registered grow-out pond
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pond {
    pub id: Uuid,
    pub pond_number: String,
    pub size: f64,
    pub unit: AreaUnit,
    pub feeding_type: String,
    pub status: PondStatus,
}

impl Pond {
    /// Surface area in hectares regardless of the recorded unit
    pub fn size_hectares(&self) -> f64 {
        self.unit.to_hectares(self.size)
    }
}

/// Operational status of a pond
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PondStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl PondStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PondStatus::Active => "active",
            PondStatus::Inactive => "inactive",
            PondStatus::Maintenance => "maintenance",
        }
    }

    /// Parse a stored status string
    pub fn parse_str(s: &str) -> Option<PondStatus> {
        match s {
            "active" => Some(PondStatus::Active),
            "inactive" => Some(PondStatus::Inactive),
            "maintenance" => Some(PondStatus::Maintenance),
            _ => None,
        }
    }
}

/// Share of offered feed actually consumed, as a percentage
pub fn consumption_rate_pct(offered_kg: f64, consumed_kg: f64) -> f64 {
    if offered_kg <= 0.0 {
        return 0.0;
    }
    (consumed_kg / offered_kg) * 100.0
}
