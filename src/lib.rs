//! Recipe sharing site.
//!
//! Server-rendered pages over a MongoDB collection: a listing page with a
//! randomly featured recipe, a detail page per recipe slug, and a
//! multipart submission form for new recipes with a photo upload.
//!
//! # Configuration
//!
//! - `PORT` — listen port, defaults to 4000
//! - `MONGO_CONNECTION_STRING` — MongoDB URI, required
//! - `MONGO_DB_NAME` — database name, required
//! - `RUST_LOG` — log filter, standard `tracing` syntax
//!
//! # Layout
//!
//! - `views/` — page templates plus static assets, served at the root
//! - `uploads/` — stored recipe photos, also served at the root so a
//!   recipe's `image` filename resolves as-is

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod slug;
pub mod state;
pub mod upload;
pub mod views;

use routes::{create_handler, detail_handler, list_handler};
use state::AppState;
use upload::UPLOADS_DIR;
use views::VIEWS_DIR;

const UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let app = Router::new()
        .route("/", get(list_handler))
        .route("/recipe/{slug}", get(detail_handler))
        .route("/add-recipe", post(create_handler))
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES))
        .fallback_service(ServeDir::new(VIEWS_DIR).fallback(ServeDir::new(UPLOADS_DIR)))
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    state.close().await;
    info!("Database connection closed");

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
