//! Validation utilities for the Prawn Farm Management Platform
//!
//! The calculators in this crate trust their inputs; handlers and wasm
//! bindings run these guards first.

// ============================================================================
// Pond Validations
// ============================================================================

/// Validate pond size is a positive, finite number
pub fn validate_pond_size(size: f64) -> Result<(), &'static str> {
    if !size.is_finite() {
        return Err("Pond size must be a number");
    }
    if size <= 0.0 {
        return Err("Pond size must be greater than zero");
    }
    Ok(())
}

/// Validate pond number label (non-empty, at most 50 characters)
pub fn validate_pond_number(pond_number: &str) -> Result<(), &'static str> {
    if pond_number.trim().is_empty() {
        return Err("Pond number cannot be empty");
    }
    if pond_number.len() > 50 {
        return Err("Pond number must be at most 50 characters");
    }
    Ok(())
}

// ============================================================================
// Feeding Validations
// ============================================================================

/// Validate prawn age in days (culture cycles run up to ~150 days)
pub fn validate_prawn_age(age_days: i32) -> Result<(), &'static str> {
    if age_days < 1 {
        return Err("Prawn age must be at least 1 day");
    }
    if age_days > 150 {
        return Err("Prawn age must be at most 150 days");
    }
    Ok(())
}

/// Validate stocking density in prawns per acre
pub fn validate_stocking_density(density_per_acre: f64) -> Result<(), &'static str> {
    if !density_per_acre.is_finite() {
        return Err("Stocking density must be a number");
    }
    if density_per_acre < 1_000.0 {
        return Err("Stocking density must be at least 1,000 per acre");
    }
    if density_per_acre > 100_000.0 {
        return Err("Stocking density must be at most 100,000 per acre");
    }
    Ok(())
}

/// Validate feed consumption rate percentage
pub fn validate_consumption_rate(rate_pct: f64) -> Result<(), &'static str> {
    if !rate_pct.is_finite() {
        return Err("Consumption rate must be a number");
    }
    if rate_pct < 0.0 || rate_pct > 100.0 {
        return Err("Consumption rate must be between 0 and 100%");
    }
    Ok(())
}

/// Validate an offered/consumed feed amount pair (kilograms)
pub fn validate_feed_amounts(offered_kg: f64, consumed_kg: f64) -> Result<(), &'static str> {
    if !offered_kg.is_finite() || !consumed_kg.is_finite() {
        return Err("Feed amounts must be numbers");
    }
    if offered_kg <= 0.0 {
        return Err("Offered feed amount must be greater than zero");
    }
    if consumed_kg < 0.0 {
        return Err("Consumed feed amount cannot be negative");
    }
    if consumed_kg > offered_kg {
        return Err("Consumed feed amount cannot exceed the offered amount");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}
