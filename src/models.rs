//! Response models handed to the dashboard UI

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::compass;
use crate::conditions::ConditionIcon;

/// Upper bound of the speed axis on the dashboard gauge and chart.
///
/// Every displayed speed is clamped into [0, SPEED_AXIS_MAX]; out-of-range
/// values are pulled in, never dropped.
pub const SPEED_AXIS_MAX: u32 = 40;

/// Clamp a raw speed value into the display range, rounding to the
/// nearest whole unit first.
#[must_use]
pub fn clamp_display_speed(raw: f64) -> u32 {
    let rounded = raw.round();
    if rounded <= 0.0 {
        0
    } else if rounded >= f64::from(SPEED_AXIS_MAX) {
        SPEED_AXIS_MAX
    } else {
        rounded as u32
    }
}

/// Wind speed unit used across the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "km/h")]
    Kmh,
    #[serde(rename = "kn")]
    Knots,
}

impl SpeedUnit {
    /// Display label, matching the serialized form
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::Kmh => "km/h",
            SpeedUnit::Knots => "kn",
        }
    }

    /// Value of the `wind_speed_unit` query parameter upstream expects
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            SpeedUnit::Kmh => "kmh",
            SpeedUnit::Knots => "kn",
        }
    }
}

impl std::fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One point of the 2-hourly forecast series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Timestamp of this point (strictly increasing across the series)
    pub timestamp: DateTime<Utc>,
    /// Wind speed, rounded and clamped into the display range
    pub speed: u32,
    pub unit: SpeedUnit,
    /// Compass label of the direction the wind blows from
    pub direction: String,
}

/// Snapshot of the current wind, same shape as a forecast point minus
/// the timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub speed: u32,
    pub unit: SpeedUnit,
    /// Compass label of the direction the wind blows from
    pub direction: String,
}

impl CurrentConditions {
    /// Compass label of the direction the wind travels toward, for the
    /// gauge needle.
    #[must_use]
    pub fn blowing_toward(&self) -> &str {
        compass::opposite_direction(&self.direction)
    }

    /// Needle bearing for the gauge, in degrees. Unknown labels fall back
    /// to north.
    #[must_use]
    pub fn needle_degrees(&self) -> f64 {
        compass::cardinal_to_degrees(self.blowing_toward()).unwrap_or(0.0)
    }
}

/// Per-day summary, present only when the upstream source supplies
/// daily data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar day, no time component
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    /// WMO weather code as reported upstream
    pub weather_code: u8,
    /// Icon tag derived from the weather code
    pub icon: ConditionIcon,
    /// Description derived from the weather code
    pub description: String,
}

/// The single artifact handed to the presentation layer.
///
/// Rebuilt fresh on every fetch; `selected_source` and `reasoning` carry
/// the provenance of the data (which source won the ranking, and whether
/// the live or the synthetic path produced the series).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastPoint>,
    pub daily_summary: Vec<DailySummary>,
    pub selected_source: String,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions;

    #[test]
    fn test_clamp_display_speed() {
        assert_eq!(clamp_display_speed(12.4), 12);
        assert_eq!(clamp_display_speed(12.5), 13);
        assert_eq!(clamp_display_speed(-3.0), 0);
        assert_eq!(clamp_display_speed(55.9), SPEED_AXIS_MAX);
        assert_eq!(clamp_display_speed(40.0), 40);
    }

    #[test]
    fn test_blowing_toward_is_opposite() {
        let current = CurrentConditions {
            speed: 15,
            unit: SpeedUnit::Kmh,
            direction: "SSW".to_string(),
        };
        assert_eq!(current.blowing_toward(), "NNE");
        assert_eq!(current.needle_degrees(), 22.5);
    }

    #[test]
    fn test_needle_defaults_to_north_on_unknown_label() {
        let current = CurrentConditions {
            speed: 0,
            unit: SpeedUnit::Kmh,
            direction: "N/A".to_string(),
        };
        assert_eq!(current.needle_degrees(), 0.0);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(SpeedUnit::Kmh.label(), "km/h");
        assert_eq!(SpeedUnit::Knots.label(), "kn");
        assert_eq!(SpeedUnit::Kmh.api_value(), "kmh");
    }

    #[test]
    fn test_empty_forecast_response_is_valid() {
        let response = WeatherResponse {
            current: CurrentConditions {
                speed: 0,
                unit: SpeedUnit::Kmh,
                direction: "N".to_string(),
            },
            forecast: Vec::new(),
            daily_summary: Vec::new(),
            selected_source: "OpenMeteoX".to_string(),
            reasoning: "test".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"forecast\":[]"));

        let parsed: WeatherResponse = serde_json::from_str(&json).unwrap();
        assert!(parsed.forecast.is_empty());
        assert_eq!(parsed.current.unit, SpeedUnit::Kmh);
    }

    #[test]
    fn test_daily_summary_serializes_icon_tag() {
        let condition = conditions::for_code(95);
        let summary = DailySummary {
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            temp_min: 14.0,
            temp_max: 22.5,
            weather_code: 95,
            icon: condition.icon,
            description: condition.description.to_string(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"date\":\"2024-07-20\""));
        assert!(json.contains("thunderstorm"));
    }
}
