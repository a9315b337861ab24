//! HTTP request handlers for the Prawn Farm Management Platform

pub mod auth;
pub mod feeding;
pub mod health;
pub mod pond;
pub mod prediction;
pub mod weather;

pub use auth::*;
pub use feeding::*;
pub use health::*;
pub use pond::*;
pub use prediction::*;
pub use weather::*;
