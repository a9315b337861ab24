//! Domain models for the Prawn Farm Management Platform

mod pond;
mod user;
mod weather;

pub use pond::*;
pub use user::*;
pub use weather::*;
