use serde::{Deserialize, Serialize};

// --- Catalog ---

/// A catalog entry. The catalog is loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub brand: String,
    pub color: String,
    pub category: String,
    pub image: String,
}

// --- Filters ---

/// Structured constraints derived from a natural-language query.
///
/// Present fields combine as a conjunction; `None` means no constraint on
/// that field. A price bound of zero is a real constraint: absence is
/// `None`, never a falsy value.
///
/// Deserialization doubles as the whitelist for model output: keys outside
/// the five below are dropped, and a wrong value type is a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl SearchFilters {
    /// True when no field constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.brand.is_none()
            && self.color.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_wire_keys_are_camel_case() {
        let filters = SearchFilters {
            category: Some("shoes".to_string()),
            max_price: Some(80.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json, serde_json::json!({"category": "shoes", "maxPrice": 80.0}));
    }

    #[test]
    fn test_filters_unknown_keys_are_dropped() {
        let filters: SearchFilters =
            serde_json::from_str(r#"{"brand": "Nike", "style": "retro"}"#).unwrap();
        assert_eq!(filters.brand.as_deref(), Some("Nike"));
        assert!(filters.category.is_none());
    }

    #[test]
    fn test_filters_wrong_type_is_an_error() {
        let result = serde_json::from_str::<SearchFilters>(r#"{"maxPrice": "cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_price_bound_is_present() {
        let filters: SearchFilters = serde_json::from_str(r#"{"maxPrice": 0}"#).unwrap();
        assert_eq!(filters.max_price, Some(0.0));
        assert!(!filters.is_unconstrained());
    }
}
