pub mod config;
pub mod error;
pub mod mood;
pub mod telemetry;
