//! Weather care advisor tests
//!
//! Tests for care recommendations, headline alerts, feeding guidance and
//! harvest outlooks including:
//! - One recommendation per weather factor, in factor order
//! - Alert precedence when several thresholds trip at once
//! - Feed adjustment reduction table
//! - Favorable harvest window boundaries

use proptest::prelude::*;

use shared::models::WeatherReading;
use shared::weather_care::{
    active_alert, care_recommendations, feed_adjustment, feeding_recommendation,
    harvest_recommendation, HarvestOutlook, Severity, WeatherFactor,
};

fn weather(temp: f64, humidity: f64, rainfall: f64) -> WeatherReading {
    WeatherReading::new(temp, humidity, rainfall)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test cold weather guidance
    #[test]
    fn test_cold_snap_recommendation() {
        let recommendations = care_recommendations(&weather(20.0, 60.0, 10.0));

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].factor, WeatherFactor::Temperature);
        assert_eq!(recommendations[0].severity, Severity::Medium);
        assert_eq!(recommendations[0].title, "Low Temperature Alert");
        assert_eq!(recommendations[0].actions.len(), 5);
    }

    /// Test heavy rain during otherwise optimal temperature
    #[test]
    fn test_heavy_rain_keeps_optimal_temperature_entry() {
        let recommendations = care_recommendations(&weather(29.0, 60.0, 70.0));

        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].title, "Optimal Temperature");
        assert_eq!(recommendations[1].title, "Heavy Rainfall Alert");
        assert_eq!(recommendations[1].severity, Severity::High);
        assert_eq!(recommendations[1].actions.len(), 6);
    }

    /// Test all three factors firing at once
    #[test]
    fn test_humid_stormy_heat_covers_all_factors() {
        let recommendations = care_recommendations(&weather(36.0, 95.0, 60.0));

        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[0].title, "High Temperature Alert");
        assert_eq!(recommendations[1].title, "Heavy Rainfall Alert");
        assert_eq!(recommendations[2].title, "High Humidity and Temperature");
        assert_eq!(recommendations[2].severity, Severity::Medium);
    }

    /// Test moderate rainfall guidance
    #[test]
    fn test_moderate_rainfall_recommendation() {
        let recommendations = care_recommendations(&weather(25.0, 60.0, 30.0));

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].title, "Moderate Rainfall");
        assert_eq!(recommendations[0].severity, Severity::Medium);
    }

    /// Test dry-air guidance
    #[test]
    fn test_low_humidity_recommendation() {
        let recommendations = care_recommendations(&weather(25.0, 20.0, 10.0));

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].factor, WeatherFactor::Humidity);
        assert_eq!(recommendations[0].severity, Severity::Low);
        assert_eq!(recommendations[0].title, "Low Humidity Alert");
    }

    /// Test cold alert outranks heavy rain
    #[test]
    fn test_alert_precedence_cold_over_rain() {
        let alert = active_alert(&weather(20.0, 60.0, 70.0)).unwrap();

        assert_eq!(alert.severity, Severity::Medium);
        assert!(alert.message.starts_with("Low temperature"));
    }

    /// Test rain alert outranks high humidity
    #[test]
    fn test_alert_precedence_rain_over_humidity() {
        let alert = active_alert(&weather(25.0, 95.0, 60.0)).unwrap();

        assert_eq!(alert.severity, Severity::High);
        assert!(alert.message.starts_with("Heavy rainfall"));
    }

    /// Test humidity-only alerts
    #[test]
    fn test_humidity_alerts() {
        let humid = active_alert(&weather(25.0, 95.0, 10.0)).unwrap();
        assert_eq!(humid.severity, Severity::Medium);
        assert!(humid.message.starts_with("High humidity"));

        let dry = active_alert(&weather(25.0, 20.0, 10.0)).unwrap();
        assert_eq!(dry.severity, Severity::Low);
        assert!(dry.message.starts_with("Low humidity"));
    }

    /// Test each feeding guidance branch
    #[test]
    fn test_feeding_recommendation_branches() {
        assert!(feeding_recommendation(&weather(36.0, 60.0, 0.0)).starts_with("Reduce feed by 20%"));
        assert!(feeding_recommendation(&weather(20.0, 60.0, 0.0)).starts_with("Reduce feed by 30%"));
        assert!(
            feeding_recommendation(&weather(25.0, 60.0, 60.0)).starts_with("Temporarily pause")
        );
        assert!(
            feeding_recommendation(&weather(30.0, 60.0, 0.0)).starts_with("Optimal temperature")
        );
        assert!(feeding_recommendation(&weather(25.0, 60.0, 0.0)).starts_with("Normal feeding"));
    }

    /// Test the feed adjustment reduction table
    #[test]
    fn test_feed_adjustment_reductions() {
        assert_eq!(feed_adjustment(&weather(36.0, 60.0, 0.0)).reduction_pct, 20.0);
        assert_eq!(feed_adjustment(&weather(20.0, 60.0, 0.0)).reduction_pct, 30.0);
        assert_eq!(feed_adjustment(&weather(25.0, 60.0, 60.0)).reduction_pct, 25.0);
        assert_eq!(feed_adjustment(&weather(29.0, 60.0, 0.0)).reduction_pct, 0.0);
        // 31 degrees sits outside the 28-30 optimal feeding band
        assert_eq!(feed_adjustment(&weather(31.0, 60.0, 0.0)).reduction_pct, 10.0);
        assert_eq!(feed_adjustment(&weather(25.0, 60.0, 0.0)).reduction_pct, 10.0);
    }

    /// Test favorable harvest window boundaries
    #[test]
    fn test_harvest_window_boundaries() {
        assert_eq!(
            harvest_recommendation(&weather(28.0, 40.0, 0.0)).outlook,
            HarvestOutlook::Favorable
        );
        assert_eq!(
            harvest_recommendation(&weather(32.0, 80.0, 29.0)).outlook,
            HarvestOutlook::Favorable
        );
        // Each bound pushed just outside the window drops to neutral
        assert_eq!(
            harvest_recommendation(&weather(33.0, 60.0, 10.0)).outlook,
            HarvestOutlook::Neutral
        );
        assert_eq!(
            harvest_recommendation(&weather(28.0, 39.0, 10.0)).outlook,
            HarvestOutlook::Neutral
        );
        assert_eq!(
            harvest_recommendation(&weather(28.0, 81.0, 10.0)).outlook,
            HarvestOutlook::Neutral
        );
        assert_eq!(
            harvest_recommendation(&weather(30.0, 60.0, 30.0)).outlook,
            HarvestOutlook::Neutral
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn factor_rank(factor: WeatherFactor) -> u8 {
        match factor {
            WeatherFactor::Temperature => 0,
            WeatherFactor::Rainfall => 1,
            WeatherFactor::Humidity => 2,
        }
    }

    fn temperature_strategy() -> impl Strategy<Value = f64> {
        15.0..45.0f64
    }

    fn percent_strategy() -> impl Strategy<Value = f64> {
        0.0..100.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: at most one recommendation per factor, listed in factor order
        #[test]
        fn prop_one_recommendation_per_factor(
            temp in temperature_strategy(),
            humidity in percent_strategy(),
            rainfall in percent_strategy()
        ) {
            let recommendations = care_recommendations(&weather(temp, humidity, rainfall));

            prop_assert!(recommendations.len() <= 3);
            for pair in recommendations.windows(2) {
                prop_assert!(factor_rank(pair[0].factor) < factor_rank(pair[1].factor));
            }
        }

        /// Property: an alert fires exactly when some alert threshold is crossed
        #[test]
        fn prop_alert_matches_thresholds(
            temp in temperature_strategy(),
            humidity in percent_strategy(),
            rainfall in percent_strategy()
        ) {
            let reading = weather(temp, humidity, rainfall);
            let threshold_crossed = temp > 35.0
                || temp < 22.0
                || rainfall > 50.0
                || humidity < 30.0
                || humidity > 90.0;

            prop_assert_eq!(active_alert(&reading).is_some(), threshold_crossed);
        }

        /// Property: high severity alerts come only from extreme heat or heavy rain
        #[test]
        fn prop_high_alerts_from_heat_or_rain(
            temp in temperature_strategy(),
            humidity in percent_strategy(),
            rainfall in percent_strategy()
        ) {
            let reading = weather(temp, humidity, rainfall);

            if let Some(alert) = active_alert(&reading) {
                if alert.severity == Severity::High {
                    prop_assert!(temp > 35.0 || rainfall > 50.0);
                }
            }
        }

        /// Property: feed reductions come from a fixed table
        #[test]
        fn prop_feed_reduction_from_table(
            temp in temperature_strategy(),
            humidity in percent_strategy(),
            rainfall in percent_strategy()
        ) {
            let adjustment = feed_adjustment(&weather(temp, humidity, rainfall));

            prop_assert!([0.0, 10.0, 20.0, 25.0, 30.0].contains(&adjustment.reduction_pct));
            prop_assert!(!adjustment.frequency.is_empty());
            prop_assert!(!adjustment.reason.is_empty());
        }

        /// Property: feeding guidance always says something
        #[test]
        fn prop_feeding_guidance_non_empty(
            temp in temperature_strategy(),
            humidity in percent_strategy(),
            rainfall in percent_strategy()
        ) {
            prop_assert!(!feeding_recommendation(&weather(temp, humidity, rainfall)).is_empty());
        }

        /// Property: the favorable outlook appears exactly inside the harvest window
        #[test]
        fn prop_favorable_exactly_in_window(
            temp in temperature_strategy(),
            humidity in percent_strategy(),
            rainfall in percent_strategy()
        ) {
            let outlook = harvest_recommendation(&weather(temp, humidity, rainfall)).outlook;
            let in_window = (28.0..=32.0).contains(&temp)
                && rainfall < 30.0
                && (40.0..=80.0).contains(&humidity);

            prop_assert_eq!(outlook == HarvestOutlook::Favorable, in_window);
        }
    }
}
