use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use shopsense_core::{filter_products, ShopsenseError};

use crate::AppState;

// --- Request bodies ---

#[derive(Deserialize)]
pub struct SearchBody {
    query: Option<String>,
}

// --- Helpers ---

fn error_response(e: ShopsenseError) -> Response {
    match e {
        ShopsenseError::Validation(message) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "success": false, "message": message })),
        )
            .into_response(),
        e => {
            warn!(error = %e, "Smart search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "message": "Error processing smart search query",
                })),
            )
                .into_response()
        }
    }
}

// --- Handlers ---

pub async fn smart_search_test() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Smart search route is working" }))
}

/// Translate a natural-language query into filters and return them.
pub async fn smart_search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> impl IntoResponse {
    let query = body.query.unwrap_or_default();
    match state.translator.translate(&query).await {
        Ok(filters) => Json(serde_json::json!({
            "success": true,
            "filters": filters,
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// The full catalog, in its stable order.
pub async fn products(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({ "products": state.products }))
}

/// Translate and apply in one round trip, so clients carry no filter logic.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> impl IntoResponse {
    let query = body.query.unwrap_or_default();
    match state.translator.translate(&query).await {
        Ok(filters) => {
            let matched = filter_products(&state.products, &filters);
            Json(serde_json::json!({
                "success": true,
                "filters": filters,
                "products": matched,
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}
