//! Synthetic fallback data
//!
//! When the live fetch fails, the dashboard still owes the UI a complete
//! response. This generator produces plausible estimates with the same
//! horizon and cadence as the live path. The seed is explicit so tests can
//! pin the output; callers derive a fresh seed per invocation when they
//! want variation.

use chrono::{DateTime, Days, Duration, Utc};
use rand::{RngExt, SeedableRng, rngs::StdRng};

use crate::{
    compass::ROSE,
    conditions,
    config::DashboardConfig,
    models::{CurrentConditions, DailySummary, ForecastPoint},
    weather::NormalizedForecast,
};

/// Fixed current-conditions default shown while live data is unavailable
const FALLBACK_CURRENT_SPEED: u32 = 15;
const FALLBACK_CURRENT_DIRECTION: &str = "S";

/// Generate a full synthetic forecast for the configured horizon.
#[must_use]
pub fn synthetic_forecast(
    config: &DashboardConfig,
    seed: u64,
    start: DateTime<Utc>,
) -> NormalizedForecast {
    let mut rng = StdRng::seed_from_u64(seed);

    let current = CurrentConditions {
        speed: FALLBACK_CURRENT_SPEED,
        unit: config.unit,
        direction: FALLBACK_CURRENT_DIRECTION.to_string(),
    };

    let forecast: Vec<ForecastPoint> = (0..config.forecast_points())
        .map(|i| ForecastPoint {
            timestamp: start + Duration::hours(2 * i as i64),
            speed: rng.random_range(10..20),
            unit: config.unit,
            direction: ROSE[rng.random_range(0..ROSE.len())].to_string(),
        })
        .collect();

    let daily: Vec<DailySummary> = (0..config.horizon_days)
        .map(|d| {
            let date = start.date_naive() + Days::new(u64::from(d));
            let temp_min = round_half_degree(rng.random_range(12.0..18.0));
            let temp_max = round_half_degree(temp_min + rng.random_range(4.0..9.0));
            let weather_code: u8 = rng.random_range(0..4);
            let condition = conditions::for_code(weather_code);

            DailySummary {
                date,
                temp_min,
                temp_max,
                weather_code,
                icon: condition.icon,
                description: condition.description.to_string(),
            }
        })
        .collect();

    NormalizedForecast {
        current,
        forecast,
        daily,
    }
}

fn round_half_degree(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}
