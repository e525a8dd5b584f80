//! Remote need/want classification
//!
//! The classifier is an external HTTP service; its output is treated
//! as ground truth. The backend trait keeps the transport pluggable:
//! `HttpClassifier` talks to the real service, `MockClassifier` uses a
//! keyword heuristic for tests and offline runs.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Classification, RawTransaction, Transaction};

/// Default confidence when the service omits one
const DEFAULT_CONFIDENCE: f64 = 50.0;

/// One classification result from the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    pub classification: Classification,
    /// 0-100, advisory only
    pub confidence: f64,
}

/// Backend interface for the classification collaborator
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    /// Classify a batch of raw transactions, one outcome per input in
    /// the same order.
    async fn classify(&self, batch: &[RawTransaction]) -> Result<Vec<ClassificationOutcome>>;

    /// Whether the service is reachable
    async fn health_check(&self) -> bool;
}

/// Classify a batch and attach the outcomes, producing full
/// transactions. A failed or short response falls back to
/// `uncategorized` for the affected rows rather than dropping them.
pub async fn classify_batch(
    backend: &dyn ClassifierBackend,
    batch: Vec<RawTransaction>,
) -> Vec<Transaction> {
    let outcomes = match backend.classify(&batch).await {
        Ok(outcomes) => outcomes,
        Err(e) => {
            warn!(error = %e, "Classification failed, importing as uncategorized");
            Vec::new()
        }
    };

    batch
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let outcome = outcomes.get(i).cloned().unwrap_or(ClassificationOutcome {
                classification: Classification::Uncategorized,
                confidence: DEFAULT_CONFIDENCE,
            });
            raw.into_transaction(outcome.classification, outcome.confidence)
        })
        .collect()
}

/// HTTP classifier posting JSON batches to `{host}/api/predict`
pub struct HttpClassifier {
    http_client: Client,
    base_url: String,
}

impl HttpClassifier {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from the `CLASSIFIER_HOST` environment variable
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("CLASSIFIER_HOST").ok()?;
        Some(Self::new(&host))
    }

    pub fn host(&self) -> &str {
        &self.base_url
    }

    /// Pull classification/confidence out of one response element,
    /// defaulting missing or unrecognized values.
    fn parse_outcome(value: &Value) -> ClassificationOutcome {
        let classification = value
            .get("classification")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Classification>().ok())
            .unwrap_or(Classification::Uncategorized);
        let confidence = value
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_CONFIDENCE);
        ClassificationOutcome {
            classification,
            confidence,
        }
    }
}

#[async_trait]
impl ClassifierBackend for HttpClassifier {
    async fn classify(&self, batch: &[RawTransaction]) -> Result<Vec<ClassificationOutcome>> {
        let url = format!("{}/api/predict", self.base_url);
        debug!(count = batch.len(), %url, "Classifying transaction batch");

        let response = self
            .http_client
            .post(&url)
            .json(batch)
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        let Value::Array(items) = body else {
            return Err(Error::Classification(
                "Expected a list of classification results".into(),
            ));
        };

        Ok(items.iter().map(Self::parse_outcome).collect())
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/api/status", self.base_url);
        match self.http_client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Keyword-heuristic classifier for tests and offline use, mirroring
/// the fallback indicators the real service ships with.
pub struct MockClassifier;

const NEED_INDICATORS: &[&str] = &[
    "grocery", "groceries", "bill", "utility", "utilities", "gas", "rent", "mortgage",
    "medical", "healthcare", "doctor", "pharmacy", "prescription", "insurance",
];

const WANT_INDICATORS: &[&str] = &[
    "restaurant", "coffee", "entertainment", "shopping", "travel", "dining", "movie",
    "theater", "vacation",
];

#[async_trait]
impl ClassifierBackend for MockClassifier {
    async fn classify(&self, batch: &[RawTransaction]) -> Result<Vec<ClassificationOutcome>> {
        Ok(batch
            .iter()
            .map(|raw| {
                let text = format!("{} {}", raw.name, raw.category).to_lowercase();
                let needs = NEED_INDICATORS.iter().filter(|k| text.contains(*k)).count();
                let wants = WANT_INDICATORS.iter().filter(|k| text.contains(*k)).count();
                let classification = if needs > wants {
                    Classification::Need
                } else if wants > needs {
                    Classification::Want
                } else {
                    Classification::Uncategorized
                };
                ClassificationOutcome {
                    classification,
                    confidence: if needs == wants { DEFAULT_CONFIDENCE } else { 75.0 },
                }
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
