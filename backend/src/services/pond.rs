//! Pond registry service with per-pond feed intake tracking

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{consumption_rate_pct, Pond, PondStatus};
use shared::types::AreaUnit;
use shared::validation::{validate_feed_amounts, validate_pond_number, validate_pond_size};

/// Pond service for managing grow-out ponds and their intake history
#[derive(Clone)]
pub struct PondService {
    db: PgPool,
}

/// Pond information as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PondRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pond_number: String,
    pub size: Decimal,
    pub unit: String,
    pub feeding_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PondRow {
    /// View of this row as the shared domain model
    pub fn to_domain(&self) -> Pond {
        Pond {
            id: self.id,
            pond_number: self.pond_number.clone(),
            size: self.size.to_f64().unwrap_or(0.0),
            unit: AreaUnit::parse_str(&self.unit).unwrap_or_default(),
            feeding_type: self.feeding_type.clone(),
            status: PondStatus::parse_str(&self.status).unwrap_or_default(),
        }
    }
}

/// Feed intake record for a pond
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FeedIntakeRow {
    pub id: Uuid,
    pub pond_id: Uuid,
    pub offered_kg: Decimal,
    pub consumed_kg: Decimal,
    pub consumption_rate_pct: Decimal,
    pub notes: Option<String>,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a pond
#[derive(Debug, Deserialize)]
pub struct CreatePondInput {
    pub pond_number: String,
    pub size: Decimal,
    pub unit: Option<String>,
    pub feeding_type: String,
    pub status: Option<String>,
}

/// Input for updating a pond
#[derive(Debug, Deserialize)]
pub struct UpdatePondInput {
    pub pond_number: Option<String>,
    pub size: Option<Decimal>,
    pub unit: Option<String>,
    pub feeding_type: Option<String>,
    pub status: Option<String>,
}

/// Input for recording feed intake
#[derive(Debug, Deserialize)]
pub struct RecordFeedIntakeInput {
    pub offered_kg: Decimal,
    pub consumed_kg: Decimal,
    pub notes: Option<String>,
    pub recorded_on: Option<NaiveDate>,
}

impl PondService {
    /// Create a new PondService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all ponds for a user
    pub async fn get_ponds(&self, user_id: Uuid) -> AppResult<Vec<PondRow>> {
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

        Ok(ponds)
    }

    /// Get a pond by ID
    pub async fn get_pond(&self, user_id: Uuid, pond_id: Uuid) -> AppResult<PondRow> {
        let pond = sqlx::query_as::<_, PondRow>(
            r#"
            SELECT id, user_id, pond_number, size, unit, feeding_type, status,
                   created_at, updated_at
            FROM ponds
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(pond_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Pond".to_string()))?;

        Ok(pond)
    }

    /// Register a new pond
    pub async fn create_pond(&self, user_id: Uuid, input: CreatePondInput) -> AppResult<PondRow> {
        // Validate input
        validate_pond_number(&input.pond_number).map_err(|message| AppError::Validation {
            field: "pond_number".to_string(),
            message: message.to_string(),
        })?;

        let size = decimal_to_f64(input.size, "size")?;
        validate_pond_size(size).map_err(|message| AppError::Validation {
            field: "size".to_string(),
            message: message.to_string(),
        })?;

        let unit = parse_unit(input.unit.as_deref())?;
        let status = parse_status(input.status.as_deref())?;

        // Check for duplicate pond number
        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ponds WHERE user_id = $1 AND LOWER(pond_number) = LOWER($2)",
        )
        .bind(user_id)
        .bind(input.pond_number.trim())
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("pond_number".to_string()));
        }

        let pond = sqlx::query_as::<_, PondRow>(
            r#"
            INSERT INTO ponds (user_id, pond_number, size, unit, feeding_type, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, pond_number, size, unit, feeding_type, status,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(input.pond_number.trim())
        .bind(input.size)
        .bind(unit.as_str())
        .bind(input.feeding_type.trim())
        .bind(status.as_str())
        .fetch_one(&self.db)
        .await?;

        Ok(pond)
    }

    /// Update a pond
    pub async fn update_pond(
        &self,
        user_id: Uuid,
        pond_id: Uuid,
        input: UpdatePondInput,
    ) -> AppResult<PondRow> {
        let existing = self.get_pond(user_id, pond_id).await?;

        // Validate new pond number if provided
        if let Some(ref pond_number) = input.pond_number {
            validate_pond_number(pond_number).map_err(|message| AppError::Validation {
                field: "pond_number".to_string(),
                message: message.to_string(),
            })?;

            let duplicate = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM ponds WHERE user_id = $1 AND LOWER(pond_number) = LOWER($2) AND id != $3",
            )
            .bind(user_id)
            .bind(pond_number.trim())
            .bind(pond_id)
            .fetch_one(&self.db)
            .await?;

            if duplicate > 0 {
                return Err(AppError::DuplicateEntry("pond_number".to_string()));
            }
        }

        if let Some(size) = input.size {
            let size = decimal_to_f64(size, "size")?;
            validate_pond_size(size).map_err(|message| AppError::Validation {
                field: "size".to_string(),
                message: message.to_string(),
            })?;
        }

        let unit = match input.unit.as_deref() {
            Some(unit) => parse_unit(Some(unit))?.as_str().to_string(),
            None => existing.unit,
        };
        let status = match input.status.as_deref() {
            Some(status) => parse_status(Some(status))?.as_str().to_string(),
            None => existing.status,
        };
        let pond_number = input
            .pond_number
            .map(|n| n.trim().to_string())
            .unwrap_or(existing.pond_number);
        let size = input.size.unwrap_or(existing.size);
        let feeding_type = input
            .feeding_type
            .map(|f| f.trim().to_string())
            .unwrap_or(existing.feeding_type);

        let pond = sqlx::query_as::<_, PondRow>(
            r#"
            UPDATE ponds
            SET pond_number = $1, size = $2, unit = $3, feeding_type = $4, status = $5,
                updated_at = NOW()
            WHERE id = $6
            RETURNING id, user_id, pond_number, size, unit, feeding_type, status,
                      created_at, updated_at
            "#,
        )
        .bind(&pond_number)
        .bind(size)
        .bind(&unit)
        .bind(&feeding_type)
        .bind(&status)
        .bind(pond_id)
        .fetch_one(&self.db)
        .await?;

        Ok(pond)
    }

    /// Delete a pond and its intake history
    pub async fn delete_pond(&self, user_id: Uuid, pond_id: Uuid) -> AppResult<()> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ponds WHERE id = $1 AND user_id = $2",
        )
        .bind(pond_id)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        if exists == 0 {
            return Err(AppError::NotFound("Pond".to_string()));
        }

        // Cascade removes the pond's feed intake records
        sqlx::query("DELETE FROM ponds WHERE id = $1")
            .bind(pond_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Record a feed intake observation for a pond
    pub async fn record_feed_intake(
        &self,
        user_id: Uuid,
        pond_id: Uuid,
        input: RecordFeedIntakeInput,
    ) -> AppResult<FeedIntakeRow> {
        // Ensure the pond exists and belongs to this user
        self.get_pond(user_id, pond_id).await?;

        let offered = decimal_to_f64(input.offered_kg, "offered_kg")?;
        let consumed = decimal_to_f64(input.consumed_kg, "consumed_kg")?;
        validate_feed_amounts(offered, consumed).map_err(|message| AppError::Validation {
            field: "consumed_kg".to_string(),
            message: message.to_string(),
        })?;

        let rate = consumption_rate_pct(offered, consumed);
        let rate = Decimal::from_f64_retain(rate).ok_or_else(|| AppError::Validation {
            field: "consumed_kg".to_string(),
            message: "Consumption rate is out of range".to_string(),
        })?;
        let recorded_on = input
            .recorded_on
            .unwrap_or_else(|| Utc::now().date_naive());

        let record = sqlx::query_as::<_, FeedIntakeRow>(
            r#"
            INSERT INTO feed_intake_records (pond_id, offered_kg, consumed_kg,
                                             consumption_rate_pct, notes, recorded_on)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, pond_id, offered_kg, consumed_kg, consumption_rate_pct,
                      notes, recorded_on, created_at
            "#,
        )
        .bind(pond_id)
        .bind(input.offered_kg)
        .bind(input.consumed_kg)
        .bind(rate)
        .bind(&input.notes)
        .bind(recorded_on)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// Get the feed intake history for a pond, newest first
    pub async fn get_feed_intake(
        &self,
        user_id: Uuid,
        pond_id: Uuid,
    ) -> AppResult<Vec<FeedIntakeRow>> {
        self.get_pond(user_id, pond_id).await?;

        let records = sqlx::query_as::<_, FeedIntakeRow>(
            r#"
            SELECT id, pond_id, offered_kg, consumed_kg, consumption_rate_pct,
                   notes, recorded_on, created_at
            FROM feed_intake_records
            WHERE pond_id = $1
            ORDER BY recorded_on DESC, created_at DESC
            "#,
        )
        .bind(pond_id)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Delete a feed intake record
    pub async fn delete_feed_intake(
        &self,
        user_id: Uuid,
        pond_id: Uuid,
        record_id: Uuid,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM feed_intake_records
            WHERE id = $1
              AND pond_id = $2
              AND pond_id IN (SELECT id FROM ponds WHERE user_id = $3)
            "#,
        )
        .bind(record_id)
        .bind(pond_id)
        .bind(user_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Feed intake record".to_string()));
        }

        Ok(())
    }
}

fn decimal_to_f64(value: Decimal, field: &str) -> AppResult<f64> {
    value.to_f64().ok_or_else(|| AppError::Validation {
        field: field.to_string(),
        message: "Value is out of range".to_string(),
    })
}

fn parse_unit(unit: Option<&str>) -> AppResult<AreaUnit> {
    match unit {
        None => Ok(AreaUnit::default()),
        Some(unit) => AreaUnit::parse_str(unit).ok_or_else(|| AppError::Validation {
            field: "unit".to_string(),
            message: "Unit must be hectares or acres".to_string(),
        }),
    }
}

fn parse_status(status: Option<&str>) -> AppResult<PondStatus> {
    match status {
        None => Ok(PondStatus::default()),
        Some(status) => PondStatus::parse_str(status).ok_or_else(|| AppError::Validation {
            field: "status".to_string(),
            message: "Status must be active, inactive, or maintenance".to_string(),
        }),
    }
}
