//! HTTP client for a hosted NLI inference endpoint.
//!
//! Posts `{model, premise, hypothesis}` and expects
//! `{"entailment": <probability>}` back. Every failure mode — transport
//! error, timeout, bad status, malformed body — maps to an
//! [`EntailmentError`] the rescoring stage degrades on.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use chronicle_core::config::EntailmentConfig;
use chronicle_core::errors::{ChronicleResult, EntailmentError};

use crate::EntailmentOracle;

#[derive(Serialize)]
struct NliRequest<'a> {
    model: &'a str,
    premise: &'a str,
    hypothesis: &'a str,
}

#[derive(Deserialize)]
struct NliResponse {
    entailment: f64,
}

/// Entailment oracle backed by an HTTP inference service.
pub struct HttpNliOracle {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    timeout_secs: u64,
}

impl HttpNliOracle {
    /// Build a client for the configured endpoint and oracle model.
    pub fn new(config: &EntailmentConfig, model: impl Into<String>) -> ChronicleResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EntailmentError::Request {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: model.into(),
            timeout_secs: config.timeout_secs,
        })
    }
}

impl EntailmentOracle for HttpNliOracle {
    fn entail(&self, premise: &str, hypothesis: &str) -> ChronicleResult<f64> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&NliRequest {
                model: &self.model,
                premise,
                hypothesis,
            })
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    EntailmentError::Timeout {
                        seconds: self.timeout_secs,
                    }
                } else {
                    EntailmentError::Request {
                        reason: e.to_string(),
                    }
                }
            })?;

        if !response.status().is_success() {
            return Err(EntailmentError::Request {
                reason: format!("endpoint returned {}", response.status()),
            }
            .into());
        }

        let body: NliResponse = response.json().map_err(|e| EntailmentError::InvalidResponse {
            reason: e.to_string(),
        })?;
        if !(0.0..=1.0).contains(&body.entailment) {
            return Err(EntailmentError::InvalidResponse {
                reason: format!("entailment probability {} outside [0, 1]", body.entailment),
            }
            .into());
        }

        debug!(model = %self.model, score = body.entailment, "entailment query answered");
        Ok(body.entailment)
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        true
    }
}
