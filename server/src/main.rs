use crate::config::ServerConfig;
use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env().context("reading server configuration")?;
    let addr = config.addr;
    tracing::info!(
        dist = %config.client_dist.display(),
        controller = %config.controller.base_url,
        "serving dashboard"
    );

    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("could not listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

fn router(config: ServerConfig) -> Router {
    // static assets from /assets only; everything else goes through the SPA fallback
    let assets_service = ServeDir::new(config.client_dist.join("assets"));
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/dashboard-config", get(dashboard_config))
        .nest_service("/assets", assets_service)
        .fallback(serve_static_or_index)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn dashboard_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config.controller.clone())
}

async fn serve_static_or_index(
    State(state): State<AppState>,
    req: axum::http::Request<axum::body::Body>,
) -> impl IntoResponse {
    use tower::ServiceExt;

    let dist = &state.config.client_dist;
    let path = req.uri().path();
    if path.ends_with(".js") || path.ends_with(".wasm") || path.ends_with(".css") {
        match ServeDir::new(dist).oneshot(req).await {
            Ok(response) if response.status() != StatusCode::NOT_FOUND => {
                return response.into_response();
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("static file error: {e}");
                return (StatusCode::NOT_FOUND, "Not found").into_response();
            }
        }
    }

    match tokio::fs::read_to_string(dist.join("index.html")).await {
        Ok(contents) => Html(contents).into_response(),
        Err(_) => (
            StatusCode::OK,
            Html("<html><body><h1>proxydash</h1><p>Client not built yet. Run trunk build.</p></body></html>".to_string()),
        )
            .into_response(),
    }
}
