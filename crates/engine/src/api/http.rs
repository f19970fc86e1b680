//! HTTP routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use ptu_domain::{Class, Edge, Feature};

use crate::app::App;
use crate::use_cases::{collections, BulkError, BulkSummary, CreatedTrainer, NewTrainer};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/edges", get(list_edges))
        .route("/features", get(list_features))
        .route("/classes", get(list_classes))
        .route("/edges/bulk", post(bulk_edges))
        .route("/features/bulk", post(bulk_features))
        .route("/classes/bulk", post(bulk_classes))
        .route("/trainers", post(create_trainer))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_edges(State(app): State<Arc<App>>) -> Result<Json<Vec<Value>>, ApiError> {
    let edges = app.use_cases.catalog.list(collections::EDGES).await?;
    Ok(Json(edges))
}

async fn list_features(State(app): State<Arc<App>>) -> Result<Json<Vec<Value>>, ApiError> {
    let features = app.use_cases.catalog.list(collections::FEATURES).await?;
    Ok(Json(features))
}

async fn list_classes(State(app): State<Arc<App>>) -> Result<Json<Vec<Value>>, ApiError> {
    let classes = app.use_cases.catalog.list(collections::CLASSES).await?;
    Ok(Json(classes))
}

async fn bulk_edges(
    State(app): State<Arc<App>>,
    Json(records): Json<Vec<Edge>>,
) -> Result<Json<BulkSummary>, ApiError> {
    let summary = app
        .use_cases
        .bulk
        .execute(collections::EDGES, &records)
        .await?;
    Ok(Json(summary))
}

async fn bulk_features(
    State(app): State<Arc<App>>,
    Json(records): Json<Vec<Feature>>,
) -> Result<Json<BulkSummary>, ApiError> {
    let summary = app
        .use_cases
        .bulk
        .execute(collections::FEATURES, &records)
        .await?;
    Ok(Json(summary))
}

async fn bulk_classes(
    State(app): State<Arc<App>>,
    Json(records): Json<Vec<Class>>,
) -> Result<Json<BulkSummary>, ApiError> {
    let summary = app
        .use_cases
        .bulk
        .execute(collections::CLASSES, &records)
        .await?;
    Ok(Json(summary))
}

async fn create_trainer(
    State(app): State<Arc<App>>,
    Json(request): Json<NewTrainer>,
) -> Result<Json<CreatedTrainer>, ApiError> {
    let created = app.use_cases.create_trainer.execute(request).await?;
    Ok(Json(created))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<BulkError> for ApiError {
    fn from(e: BulkError) -> Self {
        match e {
            BulkError::Empty => ApiError::BadRequest("Empty record list".to_string()),
            BulkError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<crate::infrastructure::ports::StoreError> for ApiError {
    fn from(e: crate::infrastructure::ports::StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
