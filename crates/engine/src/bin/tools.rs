//! PTU Sheet Backend - stdio tool server entry point.
//!
//! Exposes the catalog reads to non-HTTP callers over stdin/stdout.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ptu_engine::infrastructure::clock::SystemClock;
use ptu_engine::infrastructure::sqlite::SqliteDocumentStore;
use ptu_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the tool protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ptu_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let db_path = std::env::var("SHEET_DB")
        .context("SHEET_DB must be set to the document store database path")?;
    let store = Arc::new(SqliteDocumentStore::new(&db_path).await?);
    let app = Arc::new(App::new(store, Arc::new(SystemClock)));

    api::tools::run(app).await
}
