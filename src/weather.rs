//! Live forecast fetch and normalization
//!
//! One GET against the Open-Meteo forecast endpoint for the configured
//! location, then normalization of the hourly series into the dashboard's
//! 2-hour cadence. No retries and no pagination; a missing `current` or
//! `hourly` section is a hard failure rather than a partial result.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use tracing::debug;

use crate::{
    Result, WindsockError, compass, conditions,
    config::DashboardConfig,
    models::{CurrentConditions, DailySummary, ForecastPoint, clamp_display_speed},
};

/// Normalized result of one live fetch
#[derive(Debug, Clone)]
pub struct NormalizedForecast {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastPoint>,
    pub daily: Vec<DailySummary>,
}

/// Fetch the raw forecast payload for the configured location.
pub async fn fetch_forecast(
    http: &Client,
    config: &DashboardConfig,
) -> Result<open_meteo::ForecastResponse> {
    let url = format!(
        "{}/forecast?latitude={}&longitude={}&current=wind_speed_10m,wind_direction_10m&hourly=wind_speed_10m,wind_direction_10m&daily=temperature_2m_max,temperature_2m_min,weather_code&wind_speed_unit={}&timezone=auto&forecast_days={}",
        config.base_url,
        config.latitude,
        config.longitude,
        config.unit.api_value(),
        config.horizon_days
    );
    debug!(%url, "requesting live forecast");

    let response = http
        .get(&url)
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(WindsockError::fetch_failed(format!(
            "upstream returned status {status}"
        )));
    }

    response
        .json::<open_meteo::ForecastResponse>()
        .await
        .map_err(|e| WindsockError::malformed(format!("undecodable forecast body: {e}")))
}

/// Normalize a raw payload into the dashboard shapes.
///
/// The hourly series is decimated to every second point (fixed 2-hour
/// cadence, no averaging) up to the horizon contract. A source that
/// delivers fewer points yields a shorter series; padding on total failure
/// is the fallback generator's job, not this function's.
pub fn normalize(
    raw: &open_meteo::ForecastResponse,
    config: &DashboardConfig,
) -> Result<NormalizedForecast> {
    let current_data = raw
        .current
        .as_ref()
        .ok_or_else(|| WindsockError::malformed("missing current section"))?;
    let hourly = raw
        .hourly
        .as_ref()
        .ok_or_else(|| WindsockError::malformed("missing hourly section"))?;
    let speeds = hourly
        .wind_speed_10m
        .as_ref()
        .ok_or_else(|| WindsockError::malformed("missing hourly wind speeds"))?;
    let directions = hourly
        .wind_direction_10m
        .as_ref()
        .ok_or_else(|| WindsockError::malformed("missing hourly wind directions"))?;

    let current = CurrentConditions {
        speed: clamp_display_speed(current_data.wind_speed_10m),
        unit: config.unit,
        direction: compass::degrees_to_cardinal(f64::from(current_data.wind_direction_10m))
            .to_string(),
    };

    let mut forecast = Vec::new();
    for (i, time) in hourly
        .time
        .iter()
        .enumerate()
        .step_by(2)
        .take(config.forecast_points())
    {
        let timestamp = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
            .map_err(|e| WindsockError::malformed(format!("bad hourly timestamp '{time}': {e}")))?
            .and_utc();
        let speed = speeds
            .get(i)
            .ok_or_else(|| WindsockError::malformed("hourly arrays out of step"))?;
        let direction = directions
            .get(i)
            .ok_or_else(|| WindsockError::malformed("hourly arrays out of step"))?;

        forecast.push(ForecastPoint {
            timestamp,
            speed: clamp_display_speed(*speed),
            unit: config.unit,
            direction: compass::degrees_to_cardinal(f64::from(*direction)).to_string(),
        });
    }

    let daily = match &raw.daily {
        Some(daily) => normalize_daily(daily)?,
        None => Vec::new(),
    };

    Ok(NormalizedForecast {
        current,
        forecast,
        daily,
    })
}

fn normalize_daily(daily: &open_meteo::DailyData) -> Result<Vec<DailySummary>> {
    let temp_max = daily
        .temperature_2m_max
        .as_ref()
        .ok_or_else(|| WindsockError::malformed("missing daily maximum temperatures"))?;
    let temp_min = daily
        .temperature_2m_min
        .as_ref()
        .ok_or_else(|| WindsockError::malformed("missing daily minimum temperatures"))?;
    let codes = daily
        .weather_code
        .as_ref()
        .ok_or_else(|| WindsockError::malformed("missing daily weather codes"))?;

    let mut summaries = Vec::with_capacity(daily.time.len());
    for (i, day) in daily.time.iter().enumerate() {
        // Plain calendar string; parsing must not shift the day, so no
        // timezone is involved here.
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_err(|e| WindsockError::malformed(format!("bad daily date '{day}': {e}")))?;
        let min = *temp_min
            .get(i)
            .ok_or_else(|| WindsockError::malformed("daily arrays out of step"))?;
        let max = *temp_max
            .get(i)
            .ok_or_else(|| WindsockError::malformed("daily arrays out of step"))?;
        let code = *codes
            .get(i)
            .ok_or_else(|| WindsockError::malformed("daily arrays out of step"))?;

        // A row with flipped bounds is reordered rather than rejected
        let (temp_min, temp_max) = if min <= max { (min, max) } else { (max, min) };
        let condition = conditions::for_code(code);

        summaries.push(DailySummary {
            date,
            temp_min,
            temp_max,
            weather_code: code,
            icon: condition.icon,
            description: condition.description.to_string(),
        });
    }

    Ok(summaries)
}

/// Open-Meteo API response structures
pub mod open_meteo {
    use serde::Deserialize;

    /// Forecast response carrying the sections the dashboard requests
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub latitude: f64,
        pub longitude: f64,
        pub current: Option<CurrentData>,
        pub hourly: Option<HourlyData>,
        pub daily: Option<DailyData>,
    }

    /// Current wind block
    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        pub wind_speed_10m: f64,
        pub wind_direction_10m: u16,
    }

    /// Hourly wind series
    #[derive(Debug, Deserialize)]
    pub struct HourlyData {
        pub time: Vec<String>,
        pub wind_speed_10m: Option<Vec<f64>>,
        pub wind_direction_10m: Option<Vec<u16>>,
    }

    /// Daily temperature and weather-code series
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<String>,
        pub temperature_2m_max: Option<Vec<f64>>,
        pub temperature_2m_min: Option<Vec<f64>>,
        pub weather_code: Option<Vec<u8>>,
    }
}
