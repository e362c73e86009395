use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared::{domain::BlockRecord, protocol::BLOCKS_PATH};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod catalog;
mod config;

use app_state::AppState;
use catalog::load_catalog;
use config::load_settings;

const NOT_FOUND_BODY: &str = "Not found!";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let catalog = load_catalog(settings.catalog_path.as_deref())?;
    info!(
        blocks = catalog.len(),
        source = %settings
            .catalog_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".into()),
        "block catalog loaded"
    );

    let state = AppState {
        catalog,
        index_path: settings.index_path.clone(),
        static_dir: settings.static_dir.clone(),
        request_logging: settings.request_logging(),
    };
    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr()))?;
    info!(
        addr = %listener.local_addr()?,
        environment = %settings.environment,
        "HTTP server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());
    let request_logging = state.request_logging;

    let router = Router::new()
        .route("/", get(index).fallback(not_found))
        .route(BLOCKS_PATH, get(blocks).fallback(not_found))
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .with_state(state);

    let router = if request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };
    router.layer(CompressionLayer::new())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.index_path).await {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            warn!(
                path = %state.index_path.display(),
                %error,
                "failed to read HTML shell"
            );
            not_found().await.into_response()
        }
    }
}

async fn blocks(State(state): State<Arc<AppState>>) -> Json<Vec<BlockRecord>> {
    Json(state.catalog.clone())
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
