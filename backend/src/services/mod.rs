//! Business logic services for the Prawn Farm Management Platform

pub mod auth;
pub mod feeding;
pub mod pond;
pub mod prediction;
pub mod weather;

pub use auth::AuthService;
pub use feeding::FeedingService;
pub use pond::PondService;
pub use prediction::PredictionService;
pub use weather::WeatherService;
