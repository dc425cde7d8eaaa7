use crate::types::{Product, SearchFilters};

/// Apply `filters` to `products`, preserving the catalog order.
///
/// Matching policy: `category` compares exactly (case-sensitive), `brand`
/// and `color` compare case-insensitively, and the price bounds are
/// inclusive. Pure filter, never a sort.
pub fn filter_products(products: &[Product], filters: &SearchFilters) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches(product, filters))
        .cloned()
        .collect()
}

fn matches(product: &Product, filters: &SearchFilters) -> bool {
    if let Some(category) = &filters.category {
        if product.category != *category {
            return false;
        }
    }
    if let Some(brand) = &filters.brand {
        if !product.brand.eq_ignore_ascii_case(brand) {
            return false;
        }
    }
    if let Some(color) = &filters.color {
        if !product.color.eq_ignore_ascii_case(color) {
            return false;
        }
    }
    if let Some(min_price) = filters.min_price {
        if product.price < min_price {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if product.price > max_price {
            return false;
        }
    }
    true
}
