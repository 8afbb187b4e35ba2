//! Synthesis client.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::types::AudioOutput;
use crate::config::{SynthesisConfig, DEFAULT_TIMEOUT_SECS};
use crate::{Error, Result};

/// Request body the synthesis endpoint expects.
#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
}

/// Client for the hosted text-to-speech endpoint.
#[derive(Debug)]
pub struct SynthesisClient {
    http_client: reqwest::Client,
    endpoint_url: String,
}

impl SynthesisClient {
    pub fn builder() -> SynthesisClientBuilder {
        SynthesisClientBuilder::new()
    }

    pub fn from_config(config: &SynthesisConfig) -> Result<Self> {
        Self::builder()
            .endpoint_url(&config.api_url)
            .timeout(config.timeout())
            .build()
    }

    /// Issue one synthesis request for `text`.
    ///
    /// An OK status yields the response body verbatim as [`AudioOutput`].
    /// Every failure mode resolves to exactly one [`Error`] variant: non-OK
    /// status to [`Error::Http`] with the diagnostic body text, transport
    /// faults via the exhaustive classification in
    /// [`Error::from_request_error`].
    pub async fn synthesize(&self, text: &str) -> Result<AudioOutput> {
        debug!(endpoint = %self.endpoint_url, chars = text.chars().count(), "sending synthesis request");

        let response = self
            .http_client
            .post(&self.endpoint_url)
            .json(&SynthesisRequest { text })
            .send()
            .await
            .map_err(Error::from_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(Error::from_request_error)?;
        Ok(AudioOutput::new(bytes.to_vec()))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

pub struct SynthesisClientBuilder {
    endpoint_url: Option<String>,
    timeout: Duration,
}

impl SynthesisClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SynthesisClient> {
        let endpoint_url = self
            .endpoint_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::configuration("synthesis endpoint URL must be specified"))?;
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {}", e)))?;
        Ok(SynthesisClient {
            http_client,
            endpoint_url,
        })
    }
}

impl Default for SynthesisClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
