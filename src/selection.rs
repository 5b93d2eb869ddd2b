//! Source ranking strategies
//!
//! Ranking is a pluggable judgment behind [`SourceRanker`]: given the
//! catalog of candidate sources, pick one and justify the pick in terms of
//! the reliability metrics. The built-in [`WeightedRanker`] is a
//! deterministic rule-based scorer; [`RemoteRanker`] delegates the same
//! judgment to an external ranking service. Either way the result is
//! advisory provenance for the response - it does not dispatch the fetch.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, WindsockError, catalog::SourceDescriptor};

const RANKING_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of one ranking pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Name of the winning source; always one of the catalog entries
    pub selected_source: String,
    /// Human-readable justification, never empty
    pub reason: String,
}

/// A strategy that picks the most reliable source from a catalog.
///
/// Implementations must be deterministic for a fixed catalog and must only
/// return names present in the input. A strategy that cannot run reports
/// `SelectionUnavailable`; callers degrade and continue.
#[async_trait]
pub trait SourceRanker: Send + Sync {
    async fn select(&self, catalog: &[SourceDescriptor]) -> Result<SelectionResult>;
}

/// Rule-based scorer combining the three reliability metrics with fixed
/// weights.
///
/// Accuracy and consistency contribute as-is; recency is folded into a
/// freshness score of `1 / (1 + recency_hours)` so that fresher data ranks
/// higher. Ties keep catalog order.
#[derive(Debug, Clone)]
pub struct WeightedRanker {
    accuracy_weight: f64,
    consistency_weight: f64,
    freshness_weight: f64,
}

impl Default for WeightedRanker {
    fn default() -> Self {
        Self {
            accuracy_weight: 0.45,
            consistency_weight: 0.35,
            freshness_weight: 0.20,
        }
    }
}

impl WeightedRanker {
    fn score(&self, source: &SourceDescriptor) -> f64 {
        let freshness = 1.0 / (1.0 + source.recency_hours);
        source.accuracy * self.accuracy_weight
            + source.consistency * self.consistency_weight
            + freshness * self.freshness_weight
    }

    fn build_reason(&self, winner: &SourceDescriptor, catalog: &[SourceDescriptor]) -> String {
        let mut highlights = Vec::new();

        if catalog.iter().all(|s| s.accuracy <= winner.accuracy) {
            highlights.push(format!("the highest accuracy ({:.2})", winner.accuracy));
        }
        if catalog.iter().all(|s| s.consistency <= winner.consistency) {
            highlights.push(format!("the best consistency ({:.2})", winner.consistency));
        }
        if catalog.iter().all(|s| s.recency_hours >= winner.recency_hours) {
            highlights.push(format!(
                "the freshest data ({}h old)",
                winner.recency_hours
            ));
        }

        let joined = match highlights.len() {
            0 => "the best overall balance of accuracy, consistency and freshness".to_string(),
            1 => highlights[0].clone(),
            2 => format!("{} and {}", highlights[0], highlights[1]),
            _ => {
                let last = highlights.pop().unwrap_or_default();
                format!("{}, and {}", highlights.join(", "), last)
            }
        };

        format!(
            "{} offers {} (combined reliability score {:.2}).",
            winner.name,
            joined,
            self.score(winner)
        )
    }
}

#[async_trait]
impl SourceRanker for WeightedRanker {
    async fn select(&self, catalog: &[SourceDescriptor]) -> Result<SelectionResult> {
        let first = catalog
            .first()
            .ok_or_else(|| WindsockError::selection_unavailable("empty source catalog"))?;

        if catalog.len() == 1 {
            return Ok(SelectionResult {
                selected_source: first.name.clone(),
                reason: format!("{} is the only candidate in the catalog.", first.name),
            });
        }

        // Strictly-greater comparison keeps catalog order on ties, so the
        // outcome is deterministic for a fixed catalog.
        let mut winner = first;
        let mut best_score = self.score(first);
        for source in &catalog[1..] {
            let score = self.score(source);
            debug!(source = %source.name, score, "scored candidate source");
            if score > best_score {
                winner = source;
                best_score = score;
            }
        }

        Ok(SelectionResult {
            selected_source: winner.name.clone(),
            reason: self.build_reason(winner, catalog),
        })
    }
}

/// Delegates the ranking judgment to an external service.
///
/// The catalog is POSTed as JSON; the service answers with a
/// [`SelectionResult`]. Unreachable service, bad status, unparseable body
/// or a name outside the catalog all surface as `SelectionUnavailable`.
#[derive(Debug, Clone)]
pub struct RemoteRanker {
    endpoint: String,
    http: reqwest::Client,
}

impl RemoteRanker {
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SourceRanker for RemoteRanker {
    async fn select(&self, catalog: &[SourceDescriptor]) -> Result<SelectionResult> {
        if catalog.is_empty() {
            return Err(WindsockError::selection_unavailable("empty source catalog"));
        }

        let response = self
            .http
            .post(&self.endpoint)
            .timeout(RANKING_TIMEOUT)
            .json(&catalog)
            .send()
            .await
            .map_err(|e| {
                WindsockError::selection_unavailable(format!("ranking service unreachable: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WindsockError::selection_unavailable(format!(
                "ranking service returned status {status}"
            )));
        }

        let mut result: SelectionResult = response.json().await.map_err(|e| {
            WindsockError::selection_unavailable(format!("unparseable ranking response: {e}"))
        })?;

        if !catalog.iter().any(|s| s.name == result.selected_source) {
            return Err(WindsockError::selection_unavailable(format!(
                "ranking service chose unknown source '{}'",
                result.selected_source
            )));
        }

        if result.reason.trim().is_empty() {
            result.reason = format!("{} chosen by external ranking service.", result.selected_source);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn single_entry_catalog() -> Vec<SourceDescriptor> {
        vec![SourceDescriptor::new(
            "SoloSource",
            "The only one.",
            0.1,
            48.0,
            0.1,
        )]
    }

    #[tokio::test]
    async fn test_single_candidate_wins_regardless_of_metrics() {
        let ranker = WeightedRanker::default();
        let result = ranker.select(&single_entry_catalog()).await.unwrap();
        assert_eq!(result.selected_source, "SoloSource");
        assert!(result.reason.contains("only candidate"));
    }

    #[tokio::test]
    async fn test_selected_name_is_always_in_catalog() {
        let ranker = WeightedRanker::default();
        let mut catalog = default_catalog();

        // Exercise a few orderings; the winner must come from the input
        // either way.
        for _ in 0..catalog.len() {
            catalog.rotate_left(1);
            let result = ranker.select(&catalog).await.unwrap();
            assert!(catalog.iter().any(|s| s.name == result.selected_source));
            assert!(!result.reason.is_empty());
        }
    }

    #[tokio::test]
    async fn test_selection_is_deterministic() {
        let ranker = WeightedRanker::default();
        let catalog = default_catalog();

        let first = ranker.select(&catalog).await.unwrap();
        let second = ranker.select(&catalog).await.unwrap();
        assert_eq!(first.selected_source, second.selected_source);
        assert_eq!(first.reason, second.reason);
    }

    #[tokio::test]
    async fn test_reason_references_winning_metrics() {
        let ranker = WeightedRanker::default();
        let catalog = vec![
            SourceDescriptor::new("Sharp", "Very accurate.", 0.99, 3.0, 0.5),
            SourceDescriptor::new("Blunt", "Not so much.", 0.60, 3.0, 0.5),
        ];

        let result = ranker.select(&catalog).await.unwrap();
        assert_eq!(result.selected_source, "Sharp");
        assert!(result.reason.contains("accuracy"));
        assert!(result.reason.contains("0.99"));
    }

    #[tokio::test]
    async fn test_empty_catalog_is_selection_unavailable() {
        let ranker = WeightedRanker::default();
        let err = ranker.select(&[]).await.unwrap_err();
        assert!(matches!(err, WindsockError::SelectionUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_remote_ranker_unreachable_is_selection_unavailable() {
        // Nothing listens on the discard port; the connection fails fast.
        let ranker = RemoteRanker::new("http://127.0.0.1:9/rank".to_string());
        let err = ranker.select(&default_catalog()).await.unwrap_err();
        assert!(matches!(err, WindsockError::SelectionUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_ranker_works_behind_trait_object() {
        let ranker: Box<dyn SourceRanker> = Box::new(WeightedRanker::default());
        let result = ranker.select(&default_catalog()).await.unwrap();
        assert!(!result.selected_source.is_empty());
    }
}
