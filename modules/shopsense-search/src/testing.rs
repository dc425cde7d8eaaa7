// Test mock for the translation pipeline.
//
// MockGenerator implements TextGenerator with queued canned responses and
// recorded prompts. No network: `cargo test` in seconds.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use ai_client::TextGenerator;

/// Canned text-generation backend. Replies with queued responses in order
/// and records every prompt it was sent.
/// Builder pattern: `.on_generate()`.
#[derive(Default)]
pub struct MockGenerator {
    responses: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-response shorthand for the common one-call test.
    pub fn replying(response: &str) -> Self {
        Self::new().on_generate(response)
    }

    pub fn on_generate(self, response: &str) -> Self {
        self.responses.lock().unwrap().push(response.to_string());
        self
    }

    /// Prompts seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            bail!("MockGenerator has no response queued");
        }
        Ok(responses.remove(0))
    }
}
