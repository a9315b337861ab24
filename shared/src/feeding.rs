//! Feeding schedule calculator
//!
//! Estimates standing biomass from prawn age, pond size and stocking
//! density, then derives a daily feeding plan from the growth stage.

use serde::{Deserialize, Serialize};

/// Growth stage by prawn age in days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    PostLarval,
    Juvenile,
    Growing,
    Finishing,
}

impl GrowthStage {
    pub fn from_age_days(age_days: i32) -> GrowthStage {
        if age_days <= 30 {
            GrowthStage::PostLarval
        } else if age_days <= 60 {
            GrowthStage::Juvenile
        } else if age_days <= 90 {
            GrowthStage::Growing
        } else {
            GrowthStage::Finishing
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthStage::PostLarval => write!(f, "post-larval"),
            GrowthStage::Juvenile => write!(f, "juvenile"),
            GrowthStage::Growing => write!(f, "growing"),
            GrowthStage::Finishing => write!(f, "finishing"),
        }
    }
}

/// Daily feeding plan for a pond
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedingSchedule {
    /// Total feed per day in kilograms, rounded to 2 decimal places
    pub daily_amount_kg: f64,
    /// Wall-clock feeding times as "HH:MM" labels
    pub feeding_times: Vec<String>,
    pub protein_content_pct: f64,
    pub feed_type: String,
    pub feed_size_mm: f64,
    pub application_method: String,
}

/// Per-stage feed parameters
struct StageProfile {
    feeding_rate: f64,
    protein_content_pct: f64,
    feed_size_mm: f64,
    feed_type: &'static str,
    feeding_times: &'static [&'static str],
    application_method: &'static str,
}

fn stage_profile(stage: GrowthStage) -> StageProfile {
    match stage {
        GrowthStage::PostLarval => StageProfile {
            feeding_rate: 0.08,
            protein_content_pct: 40.0,
            feed_size_mm: 0.5,
            feed_type: "Crumbled High-Protein Feed",
            feeding_times: &["06:00", "10:00", "14:00", "18:00", "22:00"],
            application_method: "Broadcast evenly",
        },
        GrowthStage::Juvenile => StageProfile {
            feeding_rate: 0.06,
            protein_content_pct: 35.0,
            feed_size_mm: 1.0,
            feed_type: "Pelleted Prawn Feed",
            feeding_times: &["06:00", "12:00", "18:00", "22:00"],
            application_method: "Feed tray + broadcast",
        },
        GrowthStage::Growing => StageProfile {
            feeding_rate: 0.04,
            protein_content_pct: 30.0,
            feed_size_mm: 2.0,
            feed_type: "Standard Growth Feed",
            feeding_times: &["06:00", "14:00", "22:00"],
            application_method: "Feed tray monitoring",
        },
        GrowthStage::Finishing => StageProfile {
            feeding_rate: 0.03,
            protein_content_pct: 25.0,
            feed_size_mm: 3.0,
            feed_type: "Finishing Feed",
            feeding_times: &["06:00", "18:00"],
            application_method: "Feed tray with careful monitoring",
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimated individual prawn weight in grams at a given age
///
/// Piecewise linear growth curve, continuous at the stage boundaries
/// (2 g at 30 days, 8 g at 60, 17 g at 90).
pub fn estimate_individual_weight_g(age_days: i32) -> f64 {
    let age = age_days as f64;
    if age_days < 30 {
        0.5 + age * 0.05
    } else if age_days < 60 {
        2.0 + (age - 30.0) * 0.2
    } else if age_days < 90 {
        8.0 + (age - 60.0) * 0.3
    } else {
        17.0 + (age - 90.0) * 0.2
    }
}

/// Fraction of the stocked population expected to still be alive at a given age
pub fn estimate_survival_fraction(age_days: i32) -> f64 {
    (1.0 - age_days as f64 * 0.002).max(0.5)
}

/// Estimated standing biomass in kilograms
pub fn estimate_biomass_kg(
    age_days: i32,
    pond_size_hectares: f64,
    stocking_density_per_acre: f64,
) -> f64 {
    let total_prawns = pond_size_hectares
        * 10_000.0
        * stocking_density_per_acre
        * estimate_survival_fraction(age_days);
    total_prawns * estimate_individual_weight_g(age_days) / 1000.0
}

/// Build the daily feeding plan for a pond
pub fn calculate_feeding_schedule(
    age_days: i32,
    pond_size_hectares: f64,
    stocking_density_per_acre: f64,
) -> FeedingSchedule {
    let biomass_kg = estimate_biomass_kg(age_days, pond_size_hectares, stocking_density_per_acre);
    let profile = stage_profile(GrowthStage::from_age_days(age_days));

    FeedingSchedule {
        daily_amount_kg: round2(biomass_kg * profile.feeding_rate),
        feeding_times: profile
            .feeding_times
            .iter()
            .map(|t| t.to_string())
            .collect(),
        protein_content_pct: profile.protein_content_pct,
        feed_type: profile.feed_type.to_string(),
        feed_size_mm: profile.feed_size_mm,
        application_method: profile.application_method.to_string(),
    }
}
