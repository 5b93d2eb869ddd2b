//! Windsock - wind conditions dashboard backend for Melville Waters
//!
//! This library ranks candidate weather data sources by their reliability
//! metrics and turns live wind data into a fixed-cadence forecast series.
//! The UI always receives a complete response; when the live path fails
//! the pipeline falls back to synthetic estimates.

pub mod catalog;
pub mod compass;
pub mod conditions;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fallback;
pub mod models;
pub mod selection;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use catalog::{SourceDescriptor, default_catalog};
pub use config::DashboardConfig;
pub use dashboard::WindDashboard;
pub use error::WindsockError;
pub use models::{CurrentConditions, DailySummary, ForecastPoint, SpeedUnit, WeatherResponse};
pub use selection::{RemoteRanker, SelectionResult, SourceRanker, WeightedRanker};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WindsockError>;
