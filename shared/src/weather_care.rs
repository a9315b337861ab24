//! Weather care advisor
//!
//! Turns a weather reading into pond care recommendations, a headline
//! alert, feeding guidance and a harvest outlook.

use serde::{Deserialize, Serialize};

use crate::models::WeatherReading;

/// Weather factor a care recommendation addresses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherFactor {
    Temperature,
    Rainfall,
    Humidity,
}

/// Severity of a care recommendation or alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Care guidance for one weather factor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareRecommendation {
    pub factor: WeatherFactor,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
}

/// Headline alert for the current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertNotice {
    pub severity: Severity,
    pub message: String,
}

/// Feed quantity and frequency adjustment for the current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedAdjustment {
    pub reduction_pct: f64,
    pub frequency: String,
    pub reason: String,
}

/// Harvest outlook classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HarvestOutlook {
    Favorable,
    Neutral,
    Caution,
    Unfavorable,
}

/// Harvest guidance for the current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarvestRecommendation {
    pub outlook: HarvestOutlook,
    pub message: String,
}

fn recommendation(
    factor: WeatherFactor,
    severity: Severity,
    title: &str,
    description: &str,
    actions: &[&str],
) -> CareRecommendation {
    CareRecommendation {
        factor,
        severity,
        title: title.to_string(),
        description: description.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

/// Care recommendations for the current conditions
///
/// Temperature, rainfall and humidity are assessed independently and each
/// contributes at most one entry, so the result holds 0 to 3 entries in
/// that order.
pub fn care_recommendations(weather: &WeatherReading) -> Vec<CareRecommendation> {
    let mut recommendations = Vec::new();
    let temp = weather.temperature_c;
    let rainfall = weather.rainfall_mm;
    let humidity = weather.humidity_pct;

    // Temperature
    if temp > 35.0 {
        recommendations.push(recommendation(
            WeatherFactor::Temperature,
            Severity::High,
            "High Temperature Alert",
            "Prawns may experience stress due to high temperature.",
            &[
                "Increase aeration to maintain adequate dissolved oxygen levels.",
                "Consider adding additional aerators or using a paddle wheel aerator.",
                "Apply feed during cooler hours of the day (early morning, late evening).",
                "Reduce feeding quantity by 15-20%.",
                "Monitor oxygen levels closely, especially during early morning hours.",
            ],
        ));
    } else if temp < 22.0 {
        recommendations.push(recommendation(
            WeatherFactor::Temperature,
            Severity::Medium,
            "Low Temperature Alert",
            "Prawn metabolism slows down at lower temperatures.",
            &[
                "Reduce feeding by 30% as prawns consume less food.",
                "Monitor leftover feed carefully to avoid water quality issues.",
                "Check water quality parameters more frequently.",
                "Consider adding probiotics to maintain water quality.",
                "Adjust feed protein content if low temperature persists.",
            ],
        ));
    } else if temp >= 28.0 && temp <= 32.0 {
        recommendations.push(recommendation(
            WeatherFactor::Temperature,
            Severity::Low,
            "Optimal Temperature",
            "Current temperature is in the ideal range for prawn growth.",
            &[
                "Maintain regular feeding schedule.",
                "Monitor normal water quality parameters.",
                "Continue standard pond management practices.",
            ],
        ));
    }

    // Rainfall
    if rainfall > 50.0 {
        recommendations.push(recommendation(
            WeatherFactor::Rainfall,
            Severity::High,
            "Heavy Rainfall Alert",
            "Heavy rainfall may affect pond water quality and cause stress.",
            &[
                "Check and adjust pH levels if necessary.",
                "Monitor salinity levels which may decrease due to rainwater.",
                "Ensure proper drainage systems are functioning.",
                "Temporarily reduce or pause feeding if water is highly turbid.",
                "Add lime if pH drops significantly.",
                "Watch for sudden changes in water color or odor.",
            ],
        ));
    } else if rainfall > 20.0 {
        recommendations.push(recommendation(
            WeatherFactor::Rainfall,
            Severity::Medium,
            "Moderate Rainfall",
            "Moderate rainfall may cause some changes in water parameters.",
            &[
                "Monitor water pH and adjust if necessary.",
                "Check water color for any unusual changes.",
                "Ensure proper water inflow and outflow.",
                "Adjust feeding accordingly if water becomes turbid.",
            ],
        ));
    } else if rainfall <= 5.0 && temp > 30.0 {
        recommendations.push(recommendation(
            WeatherFactor::Rainfall,
            Severity::Medium,
            "Dry Conditions",
            "Low rainfall with high temperature may lead to water quality issues.",
            &[
                "Maintain adequate water levels in the pond.",
                "Increase water exchange if necessary.",
                "Monitor dissolved oxygen levels more frequently.",
                "Consider adding fresh water to compensate for evaporation.",
            ],
        ));
    }

    // Humidity
    if humidity > 90.0 && temp > 30.0 {
        recommendations.push(recommendation(
            WeatherFactor::Humidity,
            Severity::Medium,
            "High Humidity and Temperature",
            "Combined high humidity and temperature may reduce oxygen levels.",
            &[
                "Increase aeration, especially during night hours.",
                "Monitor oxygen levels closely in early morning.",
                "Reduce stocking density for future cycles if this condition persists seasonally.",
                "Consider emergency oxygen supplementation equipment.",
            ],
        ));
    } else if humidity < 30.0 {
        recommendations.push(recommendation(
            WeatherFactor::Humidity,
            Severity::Low,
            "Low Humidity Alert",
            "Low humidity may increase water evaporation rate.",
            &[
                "Monitor water levels more frequently.",
                "Be prepared to add fresh water to maintain optimal levels.",
                "Check salinity levels which may increase due to evaporation.",
            ],
        ));
    }

    recommendations
}

/// Single headline alert for the current conditions, if any
pub fn active_alert(weather: &WeatherReading) -> Option<AlertNotice> {
    let temp = weather.temperature_c;
    let rainfall = weather.rainfall_mm;
    let humidity = weather.humidity_pct;

    let (severity, message) = if temp > 35.0 {
        (
            Severity::High,
            "High temperature may cause stress to prawns. Consider additional aeration.",
        )
    } else if temp < 22.0 {
        (
            Severity::Medium,
            "Low temperature may slow growth. Monitor feeding carefully.",
        )
    } else if rainfall > 50.0 {
        (
            Severity::High,
            "Heavy rainfall may affect pond water quality. Check pH and salinity.",
        )
    } else if humidity < 30.0 {
        (
            Severity::Low,
            "Low humidity may increase water evaporation. Monitor water levels.",
        )
    } else if humidity > 90.0 {
        (
            Severity::Medium,
            "High humidity with high temperature may reduce oxygen levels. Increase aeration.",
        )
    } else {
        return None;
    };

    Some(AlertNotice {
        severity,
        message: message.to_string(),
    })
}

/// Weather-based feeding guidance
pub fn feeding_recommendation(weather: &WeatherReading) -> String {
    let temp = weather.temperature_c;
    let rainfall = weather.rainfall_mm;

    if temp > 35.0 {
        "Reduce feed by 20% and feed during cooler hours (early morning, evening).".to_string()
    } else if temp < 22.0 {
        "Reduce feed by 30% as metabolism slows down in cooler temperatures.".to_string()
    } else if rainfall > 50.0 {
        "Temporarily pause feeding if water quality is affected by heavy rainfall.".to_string()
    } else if temp >= 28.0 && temp <= 32.0 {
        "Optimal temperature range - maintain regular feeding schedule.".to_string()
    } else {
        "Normal feeding schedule recommended. Monitor consumption in feeding trays.".to_string()
    }
}

/// Feed quantity and frequency adjustment for the current conditions
pub fn feed_adjustment(weather: &WeatherReading) -> FeedAdjustment {
    let temp = weather.temperature_c;
    let rainfall = weather.rainfall_mm;

    let (reduction_pct, frequency, reason) = if temp > 35.0 {
        (
            20.0,
            "Feed during cooler hours (early morning, evening)",
            "High temperatures reduce appetite and increase stress",
        )
    } else if temp < 22.0 {
        (
            30.0,
            "Reduce to once or twice daily",
            "Slow metabolism in cooler temperatures",
        )
    } else if rainfall > 50.0 {
        (
            25.0,
            "Consider pausing feeding if water quality deteriorates",
            "Heavy rainfall affects water quality parameters",
        )
    } else if temp >= 28.0 && temp <= 30.0 {
        (
            0.0,
            "Regular schedule (3-4 times for juveniles, 2 times for adults)",
            "Optimal temperature range for growth",
        )
    } else {
        (
            10.0,
            "Standard schedule with monitoring",
            "Moderate conditions require regular monitoring",
        )
    };

    FeedAdjustment {
        reduction_pct,
        frequency: frequency.to_string(),
        reason: reason.to_string(),
    }
}

/// Harvest guidance for the current conditions
pub fn harvest_recommendation(weather: &WeatherReading) -> HarvestRecommendation {
    let temp = weather.temperature_c;
    let rainfall = weather.rainfall_mm;
    let humidity = weather.humidity_pct;

    let (outlook, message) = if temp >= 28.0
        && temp <= 32.0
        && rainfall < 30.0
        && humidity >= 40.0
        && humidity <= 80.0
    {
        (
            HarvestOutlook::Favorable,
            "Current weather conditions are favorable for harvesting if prawns have reached marketable size.",
        )
    } else if rainfall > 50.0 {
        (
            HarvestOutlook::Unfavorable,
            "Heavy rainfall may stress prawns. Consider delaying harvest until conditions improve.",
        )
    } else if temp > 35.0 {
        (
            HarvestOutlook::Caution,
            "High temperatures can stress prawns during harvest. Consider early morning or night harvesting.",
        )
    } else {
        (
            HarvestOutlook::Neutral,
            "Standard harvesting procedures recommended. Monitor water quality parameters.",
        )
    };

    HarvestRecommendation {
        outlook,
        message: message.to_string(),
    }
}
