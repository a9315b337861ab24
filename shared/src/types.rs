//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// One acre expressed in hectares
pub const ACRE_IN_HECTARES: f64 = 0.404686;

/// Units a pond's surface area can be recorded in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    Hectares,
    Acres,
}

impl AreaUnit {
    /// Convert a size recorded in this unit to hectares
    pub fn to_hectares(&self, size: f64) -> f64 {
        match self {
            AreaUnit::Hectares => size,
            AreaUnit::Acres => size * ACRE_IN_HECTARES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::Hectares => "hectares",
            AreaUnit::Acres => "acres",
        }
    }

    /// Parse a stored unit string
    pub fn parse_str(s: &str) -> Option<AreaUnit> {
        match s {
            "hectares" => Some(AreaUnit::Hectares),
            "acres" => Some(AreaUnit::Acres),
            _ => None,
        }
    }
}
