//! Pond prediction service combining weather, ponds, and intake history

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::pond::PondRow;
use shared::models::WeatherReading;
use shared::prediction::{
    calculate_pond_prediction, synthesize_consumption_rate, PondConditions, PondPrediction,
};

/// Prediction service for per-pond performance forecasts
#[derive(Clone)]
pub struct PredictionService {
    db: PgPool,
}

/// Prediction for a single pond
#[derive(Debug, Serialize)]
pub struct PondPredictionEntry {
    pub pond_id: Uuid,
    pub pond_number: String,
    pub consumption_rate_pct: f64,
    pub consumption_synthesized: bool,
    pub prediction: PondPrediction,
}

#[derive(sqlx::FromRow)]
struct LatestRateRow {
    pond_id: Uuid,
    consumption_rate_pct: Decimal,
}

impl PredictionService {
    /// Create a new PredictionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Run the prediction engine over every pond the user has registered.
    ///
    /// Each pond's consumption rate comes from its most recent feed intake
    /// record; ponds without intake history get a rate synthesized from the
    /// current temperature.
    pub async fn predictions_for_user(
        &self,
        user_id: Uuid,
        weather: &WeatherReading,
    ) -> AppResult<Vec<PondPredictionEntry>> {
        let ponds = sqlx::query_as::<_, PondRow>(
            r#"
            SELECT id, user_id, pond_number, size, unit, feeding_type, status,
                   created_at, updated_at
            FROM ponds
            WHERE user_id = $1
            ORDER BY pond_number ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let latest_rates = self.latest_consumption_rates(&ponds).await?;

        let entries = ponds
            .iter()
            .map(|pond| {
                let (rate, synthesized) = match latest_rates.get(&pond.id) {
                    Some(rate) => (*rate, false),
                    None => (synthesize_consumption_rate(weather.temperature_c), true),
                };

                let domain = pond.to_domain();
                let prediction = calculate_pond_prediction(
                    weather,
                    &PondConditions {
                        size_hectares: domain.size_hectares(),
                        consumption_rate_pct: rate,
                    },
                );

                PondPredictionEntry {
                    pond_id: pond.id,
                    pond_number: pond.pond_number.clone(),
                    consumption_rate_pct: rate,
                    consumption_synthesized: synthesized,
                    prediction,
                }
            })
            .collect();

        Ok(entries)
    }

    /// Most recent recorded consumption rate per pond
    async fn latest_consumption_rates(
        &self,
        ponds: &[PondRow],
    ) -> AppResult<HashMap<Uuid, f64>> {
        if ponds.is_empty() {
            return Ok(HashMap::new());
        }

        let pond_ids: Vec<Uuid> = ponds.iter().map(|p| p.id).collect();
        let rows = sqlx::query_as::<_, LatestRateRow>(
            r#"
            SELECT DISTINCT ON (pond_id) pond_id, consumption_rate_pct
            FROM feed_intake_records
            WHERE pond_id = ANY($1)
            ORDER BY pond_id, recorded_on DESC, created_at DESC
            "#,
        )
        .bind(&pond_ids)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| Some((row.pond_id, row.consumption_rate_pct.to_f64()?)))
            .collect())
    }
}
