//! Pond prediction engine tests
//!
//! Tests for the performance prediction engine including:
//! - Reference scenarios (optimal, extreme heat, compound stress)
//! - Risk escalation and the pond-size adjustment
//! - Batch prediction and consumption rate synthesis

use proptest::prelude::*;
use uuid::Uuid;

use shared::models::{Pond, PondStatus, WeatherReading};
use shared::prediction::{
    calculate_pond_prediction, generate_pond_predictions, synthesize_consumption_rate,
    GrowthRate, PondConditions, RiskLevel,
};
use shared::types::AreaUnit;
use shared::validation::{validate_consumption_rate, validate_pond_size};

// Helper to build a weather reading
fn weather(temperature_c: f64, humidity_pct: f64, rainfall_mm: f64) -> WeatherReading {
    WeatherReading::new(temperature_c, humidity_pct, rainfall_mm)
}

// Helper to build pond conditions
fn pond(size_hectares: f64, consumption_rate_pct: f64) -> PondConditions {
    PondConditions {
        size_hectares,
        consumption_rate_pct,
    }
}

// Helper to build a registered pond
fn registered_pond(pond_number: &str, size_hectares: f64) -> Pond {
    Pond {
        id: Uuid::new_v4(),
        pond_number: pond_number.to_string(),
        size: size_hectares,
        unit: AreaUnit::Hectares,
        feeding_type: "Standard".to_string(),
        status: PondStatus::Active,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test that neutral conditions leave the healthy baseline untouched
    #[test]
    fn test_baseline_under_neutral_conditions() {
        let prediction = calculate_pond_prediction(&weather(26.0, 50.0, 0.0), &pond(1.0, 80.0));

        assert_eq!(prediction.growth_rate, GrowthRate::Normal);
        assert_eq!(prediction.survival_rate_pct, 90.0);
        assert_eq!(prediction.estimated_days_to_harvest, 120.0);
        assert_eq!(prediction.feed_conversion_ratio, 1.6);
        assert_eq!(prediction.risk_level, RiskLevel::Low);
        assert!(prediction.recommendations.is_empty());
    }

    /// Test the optimal reference scenario
    #[test]
    fn test_optimal_scenario() {
        let prediction = calculate_pond_prediction(&weather(29.0, 50.0, 0.0), &pond(1.0, 80.0));

        assert_eq!(prediction.growth_rate, GrowthRate::Accelerated);
        assert_eq!(prediction.survival_rate_pct, 93.0);
        assert_eq!(prediction.estimated_days_to_harvest, 115.0);
        assert_eq!(prediction.feed_conversion_ratio, 1.5);
        assert_eq!(prediction.risk_level, RiskLevel::Low);
        assert_eq!(prediction.recommendations.len(), 1);
    }

    /// Test extreme heat forces critical risk
    #[test]
    fn test_extreme_heat_scenario() {
        let prediction = calculate_pond_prediction(&weather(40.0, 50.0, 0.0), &pond(1.0, 80.0));

        assert_eq!(prediction.growth_rate, GrowthRate::SeverelyReduced);
        assert_eq!(prediction.risk_level, RiskLevel::Critical);
        assert!(prediction.survival_rate_pct >= 50.0);
        assert_eq!(prediction.estimated_days_to_harvest, 140.0);
    }

    /// Test heavy rain escalates an otherwise low risk
    #[test]
    fn test_heavy_rain_escalates_from_low() {
        let prediction = calculate_pond_prediction(&weather(28.0, 50.0, 70.0), &pond(1.0, 80.0));

        assert_eq!(prediction.risk_level, RiskLevel::High);
        assert_eq!(prediction.growth_rate, GrowthRate::Accelerated);
    }

    /// Test a cold snap slows growth and raises risk
    #[test]
    fn test_cold_snap() {
        let prediction = calculate_pond_prediction(&weather(20.0, 50.0, 0.0), &pond(1.0, 80.0));

        assert_eq!(prediction.growth_rate, GrowthRate::Reduced);
        assert_eq!(prediction.survival_rate_pct, 85.0);
        assert_eq!(prediction.estimated_days_to_harvest, 135.0);
        assert_eq!(prediction.feed_conversion_ratio, 1.9);
        assert_eq!(prediction.risk_level, RiskLevel::High);
    }

    /// Test compound stress accumulates across factors
    #[test]
    fn test_compound_stress_accumulates() {
        let prediction = calculate_pond_prediction(&weather(36.0, 95.0, 70.0), &pond(1.0, 80.0));

        assert_eq!(prediction.growth_rate, GrowthRate::SeverelyReduced);
        assert_eq!(prediction.survival_rate_pct, 58.0);
        assert_eq!(prediction.estimated_days_to_harvest, 163.0);
        assert_eq!(prediction.feed_conversion_ratio, 2.5);
        assert_eq!(prediction.risk_level, RiskLevel::Critical);
        assert_eq!(prediction.recommendations.len(), 3);
    }

    /// Test low feed consumption flags potential stress
    #[test]
    fn test_low_consumption_flags_stress() {
        let prediction = calculate_pond_prediction(&weather(26.0, 50.0, 0.0), &pond(1.0, 45.0));

        assert_eq!(prediction.risk_level, RiskLevel::Medium);
        assert_eq!(prediction.estimated_days_to_harvest, 130.0);
        assert_eq!(prediction.feed_conversion_ratio, 2.0);
        assert!(prediction.recommendations[0].starts_with("Low feed consumption"));
    }

    /// Test a small pond escalates risk by one step
    #[test]
    fn test_small_pond_escalates_risk() {
        let prediction = calculate_pond_prediction(&weather(26.0, 50.0, 0.0), &pond(0.3, 80.0));

        assert_eq!(prediction.risk_level, RiskLevel::Medium);
        assert!(prediction.recommendations[0].starts_with("Small pond size"));
    }

    /// Test a large pond softens critical risk to high, not further
    #[test]
    fn test_large_pond_softens_critical_once() {
        let prediction = calculate_pond_prediction(&weather(40.0, 50.0, 0.0), &pond(4.0, 80.0));

        assert_eq!(prediction.risk_level, RiskLevel::High);
    }

    /// Test recommendations are appended in factor evaluation order
    #[test]
    fn test_recommendation_order_follows_stages() {
        let prediction = calculate_pond_prediction(&weather(33.0, 95.0, 70.0), &pond(0.3, 45.0));

        assert_eq!(prediction.recommendations.len(), 5);
        assert!(prediction.recommendations[0].starts_with("High temperature"));
        assert!(prediction.recommendations[1].starts_with("Heavy rainfall"));
        assert!(prediction.recommendations[2].starts_with("High humidity"));
        assert!(prediction.recommendations[3].starts_with("Low feed consumption"));
        assert!(prediction.recommendations[4].starts_with("Small pond size"));
    }

    /// Test synthesized consumption rates at reference temperatures
    #[test]
    fn test_synthesized_rate_reference_points() {
        assert_eq!(synthesize_consumption_rate(28.0), 80.0);
        assert_eq!(synthesize_consumption_rate(30.0), 76.0);
        assert_eq!(synthesize_consumption_rate(40.0), 60.0);
        assert_eq!(synthesize_consumption_rate(16.0), 60.0);
    }

    /// Test batch predictions key by pond id
    #[test]
    fn test_batch_predictions_keyed_by_pond() {
        let ponds = vec![
            registered_pond("A-1", 2.5),
            registered_pond("A-2", 1.8),
            registered_pond("A-3", 3.2),
        ];
        let predictions = generate_pond_predictions(&weather(29.0, 50.0, 0.0), &ponds);

        assert_eq!(predictions.len(), 3);
        for p in &ponds {
            assert!(predictions.contains_key(&p.id));
        }
    }

    /// Test batch predictions convert pond sizes to hectares
    #[test]
    fn test_batch_predictions_convert_units() {
        let mut in_acres = registered_pond("B-1", 10.0);
        in_acres.unit = AreaUnit::Acres;
        let in_hectares = registered_pond("B-2", 10.0 * 0.404686);
        let ponds = vec![in_acres.clone(), in_hectares.clone()];

        let predictions = generate_pond_predictions(&weather(26.0, 50.0, 0.0), &ponds);

        assert_eq!(
            predictions[&in_acres.id].risk_level,
            predictions[&in_hectares.id].risk_level
        );
    }

    /// Test caller-side validation rejects bad engine inputs
    #[test]
    fn test_validation_guards() {
        assert!(validate_pond_size(0.0).is_err());
        assert!(validate_pond_size(f64::NAN).is_err());
        assert!(validate_pond_size(2.5).is_ok());

        assert!(validate_consumption_rate(-1.0).is_err());
        assert!(validate_consumption_rate(101.0).is_err());
        assert!(validate_consumption_rate(100.0).is_ok());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Numeric rank of a risk level, for step-distance assertions
    fn rank(risk: RiskLevel) -> i32 {
        match risk {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    fn temperature_strategy() -> impl Strategy<Value = f64> {
        15.0..45.0f64
    }

    fn humidity_strategy() -> impl Strategy<Value = f64> {
        0.0..100.0f64
    }

    fn rainfall_strategy() -> impl Strategy<Value = f64> {
        0.0..100.0f64
    }

    fn consumption_strategy() -> impl Strategy<Value = f64> {
        0.0..100.0f64
    }

    fn size_strategy() -> impl Strategy<Value = f64> {
        0.1..6.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: survival, FCR, and harvest time stay within their bounds
        #[test]
        fn prop_outputs_within_bounds(
            t in temperature_strategy(),
            h in humidity_strategy(),
            r in rainfall_strategy(),
            c in consumption_strategy(),
            size in size_strategy()
        ) {
            let prediction = calculate_pond_prediction(&weather(t, h, r), &pond(size, c));

            prop_assert!(prediction.survival_rate_pct >= 50.0);
            prop_assert!(prediction.survival_rate_pct <= 95.0);
            prop_assert!(prediction.feed_conversion_ratio >= 1.3);
            prop_assert!(prediction.feed_conversion_ratio <= 3.0);
            prop_assert!(prediction.estimated_days_to_harvest >= 100.0);
            prop_assert!(prediction.estimated_days_to_harvest <= 180.0);
            prop_assert!(prediction.recommendations.len() <= 5);
        }

        /// Property: the engine is deterministic for identical inputs
        #[test]
        fn prop_idempotent(
            t in temperature_strategy(),
            h in humidity_strategy(),
            r in rainfall_strategy(),
            c in consumption_strategy(),
            size in size_strategy()
        ) {
            let w = weather(t, h, r);
            let p = pond(size, c);

            prop_assert_eq!(
                calculate_pond_prediction(&w, &p),
                calculate_pond_prediction(&w, &p)
            );
        }

        /// Property: a large pond lowers high or critical risk by exactly one
        /// step and leaves low or medium risk alone
        #[test]
        fn prop_large_pond_softens_one_step(
            t in temperature_strategy(),
            h in humidity_strategy(),
            r in rainfall_strategy(),
            c in consumption_strategy()
        ) {
            let w = weather(t, h, r);
            let mid = calculate_pond_prediction(&w, &pond(1.0, c)).risk_level;
            let large = calculate_pond_prediction(&w, &pond(4.0, c)).risk_level;

            if rank(mid) >= rank(RiskLevel::High) {
                prop_assert_eq!(rank(large), rank(mid) - 1);
            } else {
                prop_assert_eq!(rank(large), rank(mid));
            }
        }

        /// Property: a small pond raises low or medium risk by exactly one
        /// step and leaves high or critical risk alone
        #[test]
        fn prop_small_pond_escalates_one_step(
            t in temperature_strategy(),
            h in humidity_strategy(),
            r in rainfall_strategy(),
            c in consumption_strategy()
        ) {
            let w = weather(t, h, r);
            let mid = calculate_pond_prediction(&w, &pond(1.0, c)).risk_level;
            let small = calculate_pond_prediction(&w, &pond(0.3, c)).risk_level;

            if rank(mid) <= rank(RiskLevel::Medium) {
                prop_assert_eq!(rank(small), rank(mid) + 1);
            } else {
                prop_assert_eq!(rank(small), rank(mid));
            }
        }

        /// Property: batch generation yields exactly one entry per pond with
        /// the synthesized rate bounded to [60, 95]
        #[test]
        fn prop_batch_covers_every_pond(
            t in temperature_strategy(),
            h in humidity_strategy(),
            r in rainfall_strategy(),
            count in 1usize..6
        ) {
            let ponds: Vec<Pond> = (0..count)
                .map(|i| registered_pond(&format!("P-{}", i), 1.0 + i as f64 * 0.5))
                .collect();

            let predictions = generate_pond_predictions(&weather(t, h, r), &ponds);

            prop_assert_eq!(predictions.len(), ponds.len());
            for p in &ponds {
                prop_assert!(predictions.contains_key(&p.id));
            }

            let rate = synthesize_consumption_rate(t);
            prop_assert!(rate >= 60.0);
            prop_assert!(rate <= 95.0);
        }

        /// Property: synthesized rate peaks at the 28 C optimum
        #[test]
        fn prop_synthesis_peaks_at_optimum(t in temperature_strategy()) {
            let rate = synthesize_consumption_rate(t);
            let at_optimum = synthesize_consumption_rate(28.0);

            prop_assert!(rate <= at_optimum);
            prop_assert!(rate >= 60.0);
        }
    }
}
