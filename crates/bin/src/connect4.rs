//! Connect Four web host - serves the WASM client with embedded assets.
//!
//! The game server itself runs elsewhere; the client connects to it directly
//! using the endpoint table from the injected configuration.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

// Embedded static assets from client/web
#[derive(RustEmbed)]
#[folder = "../client/web"]
struct Assets;

/// Marker comment in index.html replaced with the client configuration.
const CONFIG_INJECT_POINT: &str = "// CONNECT4_CONFIG_INJECT_POINT";

#[derive(Clone)]
struct AppState {
    /// Client configuration, serialized once at startup.
    client_config: Arc<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Connect Four web host v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration");
    info!("  Port: {}", config.server.port);
    info!("  Players: {} / {}", config.client.players.player1, config.client.players.player2);
    for endpoint in &config.client.endpoints {
        info!("  Endpoint: {} -> {}", endpoint.host, endpoint.url);
    }

    if Assets::get("pkg/client.js").is_none() {
        warn!("WASM package missing - run `wasm-pack build --target web --out-dir ./web/pkg` in crates/client");
    }

    let state = AppState {
        client_config: Arc::new(serde_json::to_string(&config.client)?),
    };

    // Build the axum router
    let app = router(state);

    // Start server
    let ip: IpAddr = config.server.bind.parse()?;
    let addr = SocketAddr::new(ip, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Serving client on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .fallback(static_handler)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
        )
        .with_state(state)
}

/// Serve index.html with the client configuration injected.
async fn serve_index(State(state): State<AppState>) -> Response {
    let Some(content) = Assets::get("index.html") else {
        return not_found("index.html");
    };
    let page = String::from_utf8_lossy(&content.data);
    let body = inject_config(&page, &state.client_config);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(axum::body::Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Replace the inject marker with a `window.CONNECT4_CONFIG` assignment.
fn inject_config(page: &str, config_json: &str) -> String {
    // A literal "</" would end the surrounding <script> element.
    let config_json = config_json.replace("</", "<\\/");
    page.replace(
        CONFIG_INJECT_POINT,
        &format!("window.CONNECT4_CONFIG = {}; // Injected by connect4-web", config_json),
    )
}

/// Handle static file requests
async fn static_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/').to_string();

    if path.is_empty() {
        return serve_index(State(state)).await;
    }

    serve_static_file(&path)
}

/// Serve a static file from embedded assets
fn serve_static_file(path: &str) -> Response {
    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(axum::body::Body::from(content.data.into_owned()))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        None => not_found(path),
    }
}

fn not_found(path: &str) -> Response {
    warn!("Static file not found: {}", path);
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}
