//! Filter contract tests.
//!
//! These pin the matching policy the search routes rely on:
//! - an empty filter is the identity
//! - contradictory price bounds yield nothing
//! - brand/color are case-insensitive, category is case-sensitive
//! - the catalog order survives filtering

use shopsense_core::{builtin_catalog, filter_products, Product, SearchFilters};

fn fixture() -> Vec<Product> {
    builtin_catalog().expect("builtin catalog")
}

#[test]
fn empty_filter_is_identity() {
    let products = fixture();
    let matched = filter_products(&products, &SearchFilters::default());
    assert_eq!(matched, products);
}

#[test]
fn contradictory_price_bounds_match_nothing() {
    let products = fixture();
    let filters = SearchFilters {
        min_price: Some(100.0),
        max_price: Some(50.0),
        ..Default::default()
    };
    assert!(filter_products(&products, &filters).is_empty());
}

#[test]
fn brand_matching_ignores_case() {
    let products = fixture();
    let lower = SearchFilters {
        brand: Some("nike".to_string()),
        ..Default::default()
    };
    let upper = SearchFilters {
        brand: Some("NIKE".to_string()),
        ..Default::default()
    };
    let lower_matched = filter_products(&products, &lower);
    assert!(!lower_matched.is_empty());
    assert_eq!(lower_matched, filter_products(&products, &upper));
}

#[test]
fn color_matching_ignores_case() {
    let products = fixture();
    let filters = SearchFilters {
        color: Some("Black".to_string()),
        ..Default::default()
    };
    let matched = filter_products(&products, &filters);
    assert!(!matched.is_empty());
    assert!(matched.iter().all(|p| p.color.eq_ignore_ascii_case("black")));
}

#[test]
fn category_matching_is_case_sensitive() {
    let products = fixture();
    let exact = SearchFilters {
        category: Some("shoes".to_string()),
        ..Default::default()
    };
    let wrong_case = SearchFilters {
        category: Some("Shoes".to_string()),
        ..Default::default()
    };
    assert!(!filter_products(&products, &exact).is_empty());
    assert!(filter_products(&products, &wrong_case).is_empty());
}

#[test]
fn shoes_under_eighty() {
    let products = fixture();
    let filters = SearchFilters {
        category: Some("shoes".to_string()),
        max_price: Some(80.0),
        ..Default::default()
    };
    let matched = filter_products(&products, &filters);
    assert!(!matched.is_empty());
    assert!(matched
        .iter()
        .all(|p| p.category == "shoes" && p.price <= 80.0));
}

#[test]
fn filtering_preserves_catalog_order() {
    let products = fixture();
    let filters = SearchFilters {
        max_price: Some(100.0),
        ..Default::default()
    };
    let matched = filter_products(&products, &filters);
    let ids: Vec<u32> = matched.iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "catalog ids are ascending, so output must be too");
}
