use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::Product;

const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Parse a catalog document of the form `{"products": [...]}`.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>> {
    let file: CatalogFile = serde_json::from_str(json).context("invalid catalog JSON")?;
    Ok(file.products)
}

/// The demo catalog compiled into the binary.
pub fn builtin_catalog() -> Result<Vec<Product>> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Load a catalog from a JSON file on disk.
pub fn load_catalog(path: &str) -> Result<Vec<Product>> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading catalog {path}"))?;
    parse_catalog(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let products = builtin_catalog().unwrap();
        assert!(!products.is_empty());
        // Ids are unique; handlers and clients key on them.
        let mut ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"products": [{"id": "nope"}]}"#).is_err());
    }
}
