//! WMO weather code to icon/description mapping

use serde::{Deserialize, Serialize};

/// Closed set of icon tags the dashboard knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionIcon {
    Sun,
    SunCloud,
    Cloud,
    Fog,
    Drizzle,
    Rain,
    FreezingRain,
    Snow,
    Showers,
    SnowShowers,
    Thunderstorm,
}

/// Icon tag plus human-readable description for one weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub icon: ConditionIcon,
    pub description: &'static str,
}

/// Map a WMO weather code to its icon/description pair.
///
/// Unknown codes fall back to a generic cloudy condition; this function
/// never fails.
#[must_use]
pub fn for_code(code: u8) -> Condition {
    let (icon, description) = match code {
        0 => (ConditionIcon::Sun, "Clear sky"),
        1 => (ConditionIcon::Sun, "Mainly clear"),
        2 => (ConditionIcon::SunCloud, "Partly cloudy"),
        3 => (ConditionIcon::Cloud, "Overcast"),
        45 => (ConditionIcon::Fog, "Fog"),
        48 => (ConditionIcon::Fog, "Depositing rime fog"),
        51 => (ConditionIcon::Drizzle, "Light drizzle"),
        53 => (ConditionIcon::Drizzle, "Moderate drizzle"),
        55 => (ConditionIcon::Drizzle, "Dense drizzle"),
        56 => (ConditionIcon::FreezingRain, "Light freezing drizzle"),
        57 => (ConditionIcon::FreezingRain, "Dense freezing drizzle"),
        61 => (ConditionIcon::Rain, "Slight rain"),
        63 => (ConditionIcon::Rain, "Moderate rain"),
        65 => (ConditionIcon::Rain, "Heavy rain"),
        66 => (ConditionIcon::FreezingRain, "Light freezing rain"),
        67 => (ConditionIcon::FreezingRain, "Heavy freezing rain"),
        71 => (ConditionIcon::Snow, "Slight snow fall"),
        73 => (ConditionIcon::Snow, "Moderate snow fall"),
        75 => (ConditionIcon::Snow, "Heavy snow fall"),
        77 => (ConditionIcon::Snow, "Snow grains"),
        80 => (ConditionIcon::Showers, "Slight rain showers"),
        81 => (ConditionIcon::Showers, "Moderate rain showers"),
        82 => (ConditionIcon::Showers, "Violent rain showers"),
        85 => (ConditionIcon::SnowShowers, "Slight snow showers"),
        86 => (ConditionIcon::SnowShowers, "Heavy snow showers"),
        95 => (ConditionIcon::Thunderstorm, "Thunderstorm"),
        96 => (ConditionIcon::Thunderstorm, "Thunderstorm with slight hail"),
        99 => (ConditionIcon::Thunderstorm, "Thunderstorm with heavy hail"),
        _ => (ConditionIcon::Cloud, "Cloudy"),
    };
    Condition { icon, description }
}
