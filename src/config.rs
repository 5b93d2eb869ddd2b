//! Dashboard configuration
//!
//! A plain value passed into the pipeline entry point. There is no file or
//! environment loading; the location is fixed and everything else has a
//! sensible default.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::models::SpeedUnit;

/// Configuration for one dashboard instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Latitude of the fixed dashboard location
    pub latitude: f64,
    /// Longitude of the fixed dashboard location
    pub longitude: f64,
    /// Forecast horizon in days
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Wind speed unit requested from upstream and shown on the dashboard
    #[serde(default = "default_unit")]
    pub unit: SpeedUnit,
    /// Base URL of the live forecast API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// Endpoint of an external ranking service; `None` uses the built-in
    /// weighted scorer
    #[serde(default)]
    pub ranker_endpoint: Option<String>,
    /// Fixed seed for the synthetic fallback generator; `None` derives a
    /// fresh seed per call
    #[serde(default)]
    pub fallback_seed: Option<u64>,
}

fn default_horizon_days() -> u32 {
    10
}

fn default_unit() -> SpeedUnit {
    SpeedUnit::Kmh
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            // Melville Waters, Swan River, Perth WA
            latitude: -32.0297,
            longitude: 115.8170,
            horizon_days: default_horizon_days(),
            unit: default_unit(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            ranker_endpoint: None,
            fallback_seed: None,
        }
    }
}

impl DashboardConfig {
    /// Number of points one full forecast series holds (2-hour cadence)
    #[must_use]
    pub fn forecast_points(&self) -> usize {
        self.horizon_days as usize * 12
    }

    /// Validate the configuration before use
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 || self.horizon_days > 16 {
            bail!(
                "horizon_days must be within 1..=16, got {}",
                self.horizon_days
            );
        }
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
            bail!(
                "invalid coordinates: lat={}, lon={}",
                self.latitude,
                self.longitude
            );
        }
        Ok(())
    }
}
