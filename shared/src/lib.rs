//! Shared types and domain logic for the Prawn Farm Management Platform
//!
//! This crate contains the types and pure calculators shared between the
//! backend, frontend (via WASM), and other components of the system.

pub mod feeding;
pub mod models;
pub mod prediction;
pub mod types;
pub mod validation;
pub mod weather_care;

pub use feeding::*;
pub use models::*;
pub use prediction::*;
pub use types::*;
pub use validation::*;
pub use weather_care::*;
