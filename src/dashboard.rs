//! Dashboard aggregation
//!
//! Combines source ranking, the live fetch and the synthetic fallback into
//! the single response the UI consumes. Every invocation builds a fresh
//! response and never fails: a ranking problem degrades to placeholder
//! provenance while a fetch problem degrades to synthetic data. The
//! `reasoning` text records which path produced what.
//!
//! The ranking outcome is advisory metadata only; the fetch always targets
//! the configured live endpoint regardless of which source won.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    catalog::SourceDescriptor,
    config::DashboardConfig,
    fallback,
    models::WeatherResponse,
    selection::{RemoteRanker, SelectionResult, SourceRanker, WeightedRanker},
    weather,
};

/// Provenance name used when the ranking step cannot run
const DEGRADED_SOURCE_NAME: &str = "Fallback Weather Service";

/// One dashboard instance for one fixed location
pub struct WindDashboard {
    config: DashboardConfig,
    catalog: Vec<SourceDescriptor>,
    ranker: Arc<dyn SourceRanker>,
    http: reqwest::Client,
}

impl WindDashboard {
    /// Create a dashboard with the ranking strategy implied by the config:
    /// the remote delegate when an endpoint is configured, the built-in
    /// weighted scorer otherwise.
    #[must_use]
    pub fn new(config: DashboardConfig, catalog: Vec<SourceDescriptor>) -> Self {
        let ranker: Arc<dyn SourceRanker> = match &config.ranker_endpoint {
            Some(endpoint) => Arc::new(RemoteRanker::new(endpoint.clone())),
            None => Arc::new(WeightedRanker::default()),
        };
        Self::with_ranker(config, catalog, ranker)
    }

    /// Create a dashboard with an explicit ranking strategy.
    #[must_use]
    pub fn with_ranker(
        config: DashboardConfig,
        catalog: Vec<SourceDescriptor>,
        ranker: Arc<dyn SourceRanker>,
    ) -> Self {
        Self {
            config,
            catalog,
            ranker,
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Build the full weather response.
    ///
    /// Infallible by contract: whichever steps fail, the returned response
    /// is structurally complete and the failures are explained in
    /// `reasoning`.
    pub async fn weather_response(&self) -> WeatherResponse {
        info!(
            sources = self.catalog.len(),
            horizon_days = self.config.horizon_days,
            "building weather response"
        );

        // A ranking failure is non-fatal; it never blocks the fetch.
        let selection = match self.ranker.select(&self.catalog).await {
            Ok(selection) => {
                info!(source = %selection.selected_source, "source ranking complete");
                selection
            }
            Err(e) => {
                warn!(error = %e, "source ranking unavailable, continuing degraded");
                SelectionResult {
                    selected_source: DEGRADED_SOURCE_NAME.to_string(),
                    reason: format!("Source ranking unavailable ({e})."),
                }
            }
        };

        let live = match weather::fetch_forecast(&self.http, &self.config).await {
            Ok(raw) => weather::normalize(&raw, &self.config),
            Err(e) => Err(e),
        };

        let (data, provenance) = match live {
            Ok(normalized) => {
                info!(points = normalized.forecast.len(), "live forecast normalized");
                (
                    normalized,
                    "Live data fetched from the forecast service.".to_string(),
                )
            }
            Err(e) => {
                warn!(error = %e, "live fetch failed, generating synthetic fallback");
                let seed = self
                    .config
                    .fallback_seed
                    .unwrap_or_else(|| Utc::now().timestamp_millis() as u64);
                let data = fallback::synthetic_forecast(&self.config, seed, Utc::now());
                (
                    data,
                    format!("Live fetch failed ({e}); showing synthetic estimates."),
                )
            }
        };

        WeatherResponse {
            current: data.current,
            forecast: data.forecast,
            daily_summary: data.daily,
            selected_source: selection.selected_source,
            reasoning: format!("{} {}", selection.reason, provenance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Result, WindsockError, catalog::default_catalog};
    use async_trait::async_trait;

    /// Config pointed at a dead endpoint so the live fetch always fails
    fn offline_config() -> DashboardConfig {
        DashboardConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 2,
            fallback_seed: Some(7),
            ..Default::default()
        }
    }

    struct FailingRanker;

    #[async_trait]
    impl SourceRanker for FailingRanker {
        async fn select(&self, _catalog: &[SourceDescriptor]) -> Result<SelectionResult> {
            Err(WindsockError::selection_unavailable("scoring judge offline"))
        }
    }

    #[tokio::test]
    async fn test_degraded_selection_does_not_block_the_response() {
        let dashboard = WindDashboard::with_ranker(
            offline_config(),
            default_catalog(),
            Arc::new(FailingRanker),
        );

        let response = dashboard.weather_response().await;
        assert_eq!(response.selected_source, DEGRADED_SOURCE_NAME);
        assert!(response.reasoning.contains("scoring judge offline"));
        assert_eq!(response.forecast.len(), 120);
    }

    #[tokio::test]
    async fn test_fallback_reasoning_concatenates_both_degradations() {
        let dashboard = WindDashboard::with_ranker(
            offline_config(),
            default_catalog(),
            Arc::new(FailingRanker),
        );

        let response = dashboard.weather_response().await;
        assert!(response.reasoning.contains("ranking unavailable"));
        assert!(response.reasoning.contains("synthetic estimates"));
    }

    #[tokio::test]
    async fn test_fixed_seed_pins_the_fallback_series() {
        let dashboard = WindDashboard::new(offline_config(), default_catalog());

        let first = dashboard.weather_response().await;
        let second = dashboard.weather_response().await;

        let first_speeds: Vec<u32> = first.forecast.iter().map(|p| p.speed).collect();
        let second_speeds: Vec<u32> = second.forecast.iter().map(|p| p.speed).collect();
        assert_eq!(first_speeds, second_speeds);
    }

    #[tokio::test]
    async fn test_selection_still_runs_when_fetch_fails() {
        let dashboard = WindDashboard::new(offline_config(), default_catalog());

        let response = dashboard.weather_response().await;
        // The weighted ranker is pure computation and works offline
        assert!(
            default_catalog()
                .iter()
                .any(|s| s.name == response.selected_source)
        );
        assert!(response.reasoning.contains("synthetic estimates"));
    }
}
