//! Static catalog of candidate weather data sources

use serde::{Deserialize, Serialize};

/// A candidate data source with its reliability metadata.
///
/// Descriptors are immutable; the catalog is defined once at startup and
/// passed into the pipeline, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Unique, stable identifier
    pub name: String,
    pub description: String,
    /// Historical accuracy, 0..=1
    pub accuracy: f64,
    /// Hours since the data was refreshed; lower is fresher
    pub recency_hours: f64,
    /// Agreement with other sources, 0..=1
    pub consistency: f64,
}

impl SourceDescriptor {
    #[must_use]
    pub fn new(
        name: &str,
        description: &str,
        accuracy: f64,
        recency_hours: f64,
        consistency: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            accuracy,
            recency_hours,
            consistency,
        }
    }
}

/// The candidate sources considered for Melville Waters.
#[must_use]
pub fn default_catalog() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::new(
            "OpenMeteoX",
            "Advanced open-source API with high resolution.",
            0.92,
            0.5,
            0.95,
        ),
        SourceDescriptor::new(
            "WAWeatherGov",
            "Official Western Australia government data, updated frequently.",
            0.88,
            1.0,
            0.98,
        ),
        SourceDescriptor::new(
            "WindyPro",
            "Professional grade API, broad coverage.",
            0.90,
            2.0,
            0.90,
        ),
        SourceDescriptor::new(
            "LocalSensorNet",
            "Hyperlocal sensor network data, very recent but can be noisy.",
            0.75,
            0.25,
            0.70,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_metrics_in_range() {
        let catalog = default_catalog();
        assert!(!catalog.is_empty());

        for source in &catalog {
            assert!((0.0..=1.0).contains(&source.accuracy), "{}", source.name);
            assert!((0.0..=1.0).contains(&source.consistency), "{}", source.name);
            assert!(source.recency_hours > 0.0, "{}", source.name);
        }
    }

    #[test]
    fn test_default_catalog_names_unique() {
        let catalog = default_catalog();
        let mut names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }
}
