use std::sync::Arc;

use tracing::{debug, warn};

use ai_client::TextGenerator;
use shopsense_core::{SearchFilters, ShopsenseError};

use crate::clean::{extract_json_object, strip_code_fences};

const TRANSLATION_PROMPT: &str = r#"Convert this search query into a JSON filter object.
Available filters are: category, maxPrice, minPrice, brand, color.
Example: "show me shoes under $80" becomes {"category": "shoes", "maxPrice": 80}
Example: "find black Nike products" becomes {"brand": "Nike", "color": "black"}
Respond only with the JSON object, no additional text."#;

/// Turns a natural-language search query into typed [`SearchFilters`].
///
/// The model backend is injected, so every route (and every test) goes
/// through this one translation path instead of rebuilding the prompt and
/// cleanup steps at each call site.
pub struct QueryTranslator {
    generator: Arc<dyn TextGenerator>,
}

impl QueryTranslator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// One model round trip: prompt, clean, parse. Malformed output is a
    /// terminal error for the request, never coerced to an empty filter.
    pub async fn translate(&self, query: &str) -> Result<SearchFilters, ShopsenseError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ShopsenseError::Validation("Query is required".to_string()));
        }

        let prompt = build_prompt(query);
        let raw = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| ShopsenseError::Translation(format!("model call failed: {e}")))?;

        debug!(raw = %raw, "model translation response");

        let cleaned = strip_code_fences(&raw);
        let sliced = extract_json_object(cleaned).ok_or_else(|| {
            ShopsenseError::Translation(format!("no JSON object in model response: {raw:?}"))
        })?;

        serde_json::from_str(sliced).map_err(|e| {
            warn!(error = %e, raw = %raw, "unparsable filter object from model");
            ShopsenseError::Translation(format!("invalid filter JSON ({e}): {sliced:?}"))
        })
    }
}

fn build_prompt(query: &str) -> String {
    format!("{TRANSLATION_PROMPT}\n\nQuery: {query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_query_and_keys() {
        let prompt = build_prompt("shoes under $80");
        assert!(prompt.ends_with("Query: shoes under $80"));
        for key in ["category", "maxPrice", "minPrice", "brand", "color"] {
            assert!(prompt.contains(key), "prompt must name {key}");
        }
    }
}
