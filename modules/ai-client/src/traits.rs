use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// TextGenerator Trait
// =============================================================================

/// A model backend that turns a single prompt into completion text.
///
/// Callers hold this trait instead of a concrete provider, so a canned
/// backend can stand in during tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
