mod client;
pub(crate) mod types;

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::traits::TextGenerator;
use client::GeminiClient;
use types::*;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    pub(crate) model: String,
    base_url: Option<String>,
    timeout: Duration,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow!("GEMINI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Cap each generateContent round trip. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key, self.timeout);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// One prompt in, completion text out. Temperature 0 keeps the output
    /// as deterministic as the API allows.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest::new()
            .content(Content::user(prompt))
            .temperature(0.0)
            .max_output_tokens(1024);

        let response = self.client().generate(&self.model, &request).await?;

        if let Some(candidate) = response.candidates.first() {
            debug!(finish_reason = ?candidate.finish_reason, "Gemini candidate");
        }

        response
            .text()
            .ok_or_else(|| anyhow!("No text in Gemini response"))
    }
}

// =============================================================================
// TextGenerator Implementation
// =============================================================================

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}
