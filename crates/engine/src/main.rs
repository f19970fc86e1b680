//! PTU Sheet Backend - HTTP server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ptu_engine::infrastructure::clock::SystemClock;
use ptu_engine::infrastructure::sqlite::SqliteDocumentStore;
use ptu_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ptu_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PTU Sheet Backend");

    // Load configuration. The store path is required; the server must
    // not come up without its document store.
    let db_path = std::env::var("SHEET_DB")
        .context("SHEET_DB must be set to the document store database path")?;
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    // Open the document store
    tracing::info!(path = %db_path, "Opening document store");
    let store = Arc::new(SqliteDocumentStore::new(&db_path).await?);

    // Create application
    let app = Arc::new(App::new(store, Arc::new(SystemClock)));

    let router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any));

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
