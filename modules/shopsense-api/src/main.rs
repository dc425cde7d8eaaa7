use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::Gemini;
use shopsense_core::{builtin_catalog, load_catalog, Config, Product};
use shopsense_search::QueryTranslator;

mod rest;

pub struct AppState {
    pub products: Vec<Product>,
    pub translator: QueryTranslator,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Smart search
        .route("/smart-search/test", get(rest::smart_search_test))
        .route("/smart-search", post(rest::smart_search))
        // Catalog
        .route("/products", get(rest::products))
        .route("/search", post(rest::search))
        .with_state(state)
        // CORS: the catalog UI calls cross-origin
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only (no query bodies)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("shopsense=info".parse()?))
        .init();

    let config = Config::from_env();

    let products = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };
    info!(count = products.len(), "Catalog loaded");

    let gemini = Gemini::new(&config.gemini_api_key, &config.gemini_model)
        .with_timeout(Duration::from_secs(config.gemini_timeout_secs));
    info!(model = gemini.model(), "Gemini backend configured");

    let translator = QueryTranslator::new(Arc::new(gemini));

    let state = Arc::new(AppState {
        products,
        translator,
    });

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Shopsense API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
