//! Feeding journal service for daily feeding log entries

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::validation::validate_pond_size;

/// Feeding service for the daily feeding journal
#[derive(Clone)]
pub struct FeedingService {
    db: PgPool,
}

/// Feeding journal entry as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FeedingRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pond_name: String,
    pub pond_size_hectares: Decimal,
    pub feed_type: String,
    pub feed_amount_kg: Decimal,
    pub feeding_time: String,
    pub notes: Option<String>,
    pub record_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for a feeding journal entry
#[derive(Debug, Deserialize)]
pub struct CreateFeedingRecordInput {
    pub pond_name: String,
    pub pond_size_hectares: Decimal,
    pub feed_type: String,
    pub feed_amount_kg: Decimal,
    pub feeding_time: String,
    pub notes: Option<String>,
    pub record_date: Option<NaiveDate>,
}

impl FeedingService {
    /// Create a new FeedingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Add a feeding journal entry
    pub async fn create_record(
        &self,
        user_id: Uuid,
        input: CreateFeedingRecordInput,
    ) -> AppResult<FeedingRecordRow> {
        // Validate input
        if input.pond_name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "pond_name".to_string(),
                message: "Pond name cannot be empty".to_string(),
            });
        }

        let size = input.pond_size_hectares.to_f64().unwrap_or(f64::NAN);
        validate_pond_size(size).map_err(|message| AppError::Validation {
            field: "pond_size_hectares".to_string(),
            message: message.to_string(),
        })?;

        if input.feed_type.trim().is_empty() {
            return Err(AppError::Validation {
                field: "feed_type".to_string(),
                message: "Feed type cannot be empty".to_string(),
            });
        }

        if input.feed_amount_kg <= Decimal::ZERO {
            return Err(AppError::Validation {
                field: "feed_amount_kg".to_string(),
                message: "Feed amount must be greater than zero".to_string(),
            });
        }

        if input.feeding_time.trim().is_empty() {
            return Err(AppError::Validation {
                field: "feeding_time".to_string(),
                message: "Feeding time cannot be empty".to_string(),
            });
        }

        let record_date = input
            .record_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let record = sqlx::query_as::<_, FeedingRecordRow>(
            r#"
            INSERT INTO pond_feeding_records (user_id, pond_name, pond_size_hectares,
                                              feed_type, feed_amount_kg, feeding_time,
                                              notes, record_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, pond_name, pond_size_hectares, feed_type,
                      feed_amount_kg, feeding_time, notes, record_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(input.pond_name.trim())
        .bind(input.pond_size_hectares)
        .bind(input.feed_type.trim())
        .bind(input.feed_amount_kg)
        .bind(input.feeding_time.trim())
        .bind(&input.notes)
        .bind(record_date)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// Get all feeding journal entries for a user, newest first
    pub async fn get_records(&self, user_id: Uuid) -> AppResult<Vec<FeedingRecordRow>> {
        let records = sqlx::query_as::<_, FeedingRecordRow>(
            r#"
            SELECT id, user_id, pond_name, pond_size_hectares, feed_type,
                   feed_amount_kg, feeding_time, notes, record_date, created_at
            FROM pond_feeding_records
            WHERE user_id = $1
            ORDER BY record_date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Delete a feeding journal entry
    pub async fn delete_record(&self, user_id: Uuid, record_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM pond_feeding_records WHERE id = $1 AND user_id = $2",
        )
        .bind(record_id)
        .bind(user_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Feeding record".to_string()));
        }

        Ok(())
    }
}
