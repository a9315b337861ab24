//! Pond performance prediction engine
//!
//! Deterministic rule engine that projects growth, survival, harvest timing
//! and feed conversion for a pond from current weather and feed consumption.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Pond, WeatherReading};

/// Expected growth trajectory under current conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GrowthRate {
    SeverelyReduced,
    Reduced,
    Normal,
    Accelerated,
}

impl GrowthRate {
    /// One step up the scale, saturating at `Accelerated`
    fn step_up(self) -> GrowthRate {
        match self {
            GrowthRate::SeverelyReduced => GrowthRate::Reduced,
            GrowthRate::Reduced => GrowthRate::Normal,
            GrowthRate::Normal | GrowthRate::Accelerated => GrowthRate::Accelerated,
        }
    }
}

impl std::fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthRate::SeverelyReduced => write!(f, "severely reduced"),
            GrowthRate::Reduced => write!(f, "reduced"),
            GrowthRate::Normal => write!(f, "normal"),
            GrowthRate::Accelerated => write!(f, "accelerated"),
        }
    }
}

/// Overall risk level for a pond
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Per-pond input snapshot for the prediction engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PondConditions {
    pub size_hectares: f64,
    pub consumption_rate_pct: f64,
}

/// Predicted pond performance under current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PondPrediction {
    pub growth_rate: GrowthRate,
    /// Expected survival to harvest, clamped to [50, 95]
    pub survival_rate_pct: f64,
    pub estimated_days_to_harvest: f64,
    /// Feed conversion ratio, clamped to [1.3, 3.0]
    pub feed_conversion_ratio: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Predict pond performance from current weather and pond conditions
///
/// Starts from a healthy baseline (normal growth, 90% survival, 120 days to
/// harvest, FCR 1.6, low risk) and applies adjustment stages in a fixed
/// order: temperature, rainfall, humidity, feed consumption, pond size.
/// Each stage appends at most one recommendation.
pub fn calculate_pond_prediction(
    weather: &WeatherReading,
    pond: &PondConditions,
) -> PondPrediction {
    let mut growth_rate = GrowthRate::Normal;
    let mut survival_rate: f64 = 90.0;
    let mut days_to_harvest = 120.0;
    let mut fcr: f64 = 1.6;
    let mut risk = RiskLevel::Low;
    let mut recommendations: Vec<String> = Vec::new();

    let temp = weather.temperature_c;
    let humidity = weather.humidity_pct;
    let rainfall = weather.rainfall_mm;

    // Temperature
    if temp > 35.0 {
        growth_rate = GrowthRate::SeverelyReduced;
        survival_rate -= 15.0;
        days_to_harvest += 20.0;
        fcr += 0.4;
        risk = RiskLevel::Critical;
        recommendations.push(
            "Extreme temperature is critically affecting prawn health. Increase aeration immediately."
                .to_string(),
        );
    } else if temp > 32.0 {
        growth_rate = GrowthRate::Reduced;
        survival_rate -= 8.0;
        days_to_harvest += 10.0;
        fcr += 0.2;
        risk = RiskLevel::High;
        recommendations.push(
            "High temperature is slowing growth. Consider additional aeration and feed during cooler periods."
                .to_string(),
        );
    } else if temp >= 28.0 && temp <= 30.0 {
        growth_rate = GrowthRate::Accelerated;
        survival_rate += 3.0;
        days_to_harvest -= 5.0;
        fcr -= 0.1;
        recommendations.push(
            "Temperature is in optimal range for growth. Maintain current conditions.".to_string(),
        );
    } else if temp < 24.0 {
        growth_rate = GrowthRate::Reduced;
        survival_rate -= 5.0;
        days_to_harvest += 15.0;
        fcr += 0.3;
        risk = RiskLevel::High;
        recommendations.push(
            "Low temperature is reducing metabolic rate. Reduce feeding amount to avoid waste."
                .to_string(),
        );
    }

    // Rainfall
    if rainfall > 60.0 {
        survival_rate -= 10.0;
        days_to_harvest += 15.0;
        fcr += 0.3;
        if risk != RiskLevel::Critical {
            risk = RiskLevel::High;
        }
        recommendations.push(
            "Heavy rainfall is affecting water quality. Monitor pH and adjust feed accordingly."
                .to_string(),
        );
    } else if rainfall > 30.0 {
        survival_rate -= 5.0;
        days_to_harvest += 5.0;
        fcr += 0.1;
        if risk == RiskLevel::Low {
            risk = RiskLevel::Medium;
        }
        recommendations.push(
            "Moderate rainfall may alter water parameters. Check water quality regularly."
                .to_string(),
        );
    }

    // Humidity
    if humidity > 90.0 && temp > 30.0 {
        survival_rate -= 7.0;
        days_to_harvest += 8.0;
        fcr += 0.2;
        if risk == RiskLevel::Low {
            risk = RiskLevel::Medium;
        }
        recommendations.push(
            "High humidity with high temperature may reduce oxygen levels. Consider additional aeration."
                .to_string(),
        );
    } else if humidity < 30.0 {
        survival_rate -= 3.0;
        recommendations.push(
            "Low humidity may increase water evaporation. Monitor water levels.".to_string(),
        );
    }

    // Feed consumption
    let consumption = pond.consumption_rate_pct;
    if consumption < 60.0 {
        days_to_harvest += 10.0;
        fcr += 0.4;
        if risk == RiskLevel::Low {
            risk = RiskLevel::Medium;
        }
        recommendations.push(
            "Low feed consumption indicates potential stress or health issues. Check water quality and prawn health."
                .to_string(),
        );
    } else if consumption > 95.0 {
        growth_rate = growth_rate.step_up();
        days_to_harvest -= 8.0;
        fcr -= 0.2;
        recommendations.push(
            "Excellent feed consumption. Consider incremental increase in feed amount.".to_string(),
        );
    }

    // Pond size
    if pond.size_hectares > 3.0 {
        risk = match risk {
            RiskLevel::Critical => RiskLevel::High,
            RiskLevel::High => RiskLevel::Medium,
            other => other,
        };
        recommendations.push(
            "Large pond size helps buffer environmental changes. Ensure adequate water circulation throughout."
                .to_string(),
        );
    } else if pond.size_hectares < 0.5 {
        risk = match risk {
            RiskLevel::Low => RiskLevel::Medium,
            RiskLevel::Medium => RiskLevel::High,
            other => other,
        };
        recommendations.push(
            "Small pond size may lead to rapid parameter changes. Monitor more frequently."
                .to_string(),
        );
    }

    PondPrediction {
        growth_rate,
        survival_rate_pct: survival_rate.clamp(50.0, 95.0),
        estimated_days_to_harvest: days_to_harvest,
        feed_conversion_ratio: round2(fcr.clamp(1.3, 3.0)),
        risk_level: risk,
        recommendations,
    }
}

/// Consumption rate assumed for ponds without recorded feed intake
///
/// Peaks at 80% at the 28 C optimum and falls off 2 points per degree of
/// deviation, bounded to [60, 95].
pub fn synthesize_consumption_rate(temperature_c: f64) -> f64 {
    let rate = 80.0 - (temperature_c - 28.0).abs() * 2.0;
    rate.clamp(60.0, 95.0)
}

/// Predict performance for each pond under the current weather
///
/// Uses a temperature-derived consumption rate for every pond; callers with
/// recorded feed intake should build [`PondConditions`] themselves and call
/// [`calculate_pond_prediction`] directly.
pub fn generate_pond_predictions(
    weather: &WeatherReading,
    ponds: &[Pond],
) -> HashMap<Uuid, PondPrediction> {
    let consumption_rate = synthesize_consumption_rate(weather.temperature_c);
    ponds
        .iter()
        .map(|pond| {
            let conditions = PondConditions {
                size_hectares: pond.size_hectares(),
                consumption_rate_pct: consumption_rate,
            };
            (pond.id, calculate_pond_prediction(weather, &conditions))
        })
        .collect()
}
