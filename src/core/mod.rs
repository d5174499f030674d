//! Core infrastructure: configuration surface and the error taxonomy.

pub mod config;
pub mod error;

pub use config::SimConfig;
pub use error::SimError;
