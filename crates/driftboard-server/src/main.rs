//! Driftboard content API server
//!
//! Serves the canvas collections as JSON and accepts bulk position saves.
//!
//! ## Endpoints
//!
//! ```text
//! GET    /api/images
//! GET    /api/videos
//! GET    /api/text-blocks
//! POST   /api/text-blocks        { "content": "...", "position": { "x": 0, "y": 0 } }
//! DELETE /api/text-blocks/{id}
//! POST   /api/positions          { "images": [...], "videos": [...], "textBlocks": [...] }
//! GET    /health
//! ```

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use driftboard_core::{
    ContentStore, FileStore, SaveBatch, StoreError, TextBlock,
};
use kurbo::Point;
use serde::Deserialize;
use serde_json::json;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
struct AppState {
    store: Arc<dyn ContentStore>,
}

/// Body of a text block creation request
#[derive(Debug, Deserialize)]
struct CreateTextRequest {
    #[serde(default)]
    content: String,
    position: Position,
}

#[derive(Debug, Deserialize)]
struct Position {
    x: f64,
    y: f64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "driftboard_server=info,tower_http=info".into()),
        )
        .init();

    let data_dir = std::env::var("DRIFTBOARD_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));
    let store = FileStore::new(data_dir.clone()).unwrap();
    info!("Storing content under {}", data_dir.display());

    let state = AppState {
        store: Arc::new(store),
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3030));
    info!("Driftboard content API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/images", get(list_images))
        .route("/api/videos", get(list_videos))
        .route("/api/text-blocks", get(list_texts).post(create_text))
        .route("/api/text-blocks/{id}", delete(delete_text))
        .route("/api/positions", post(save_positions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Index page
async fn index() -> &'static str {
    "Driftboard content API - see /api/images, /api/videos, /api/text-blocks"
}

/// Health check
async fn health() -> &'static str {
    "ok"
}

/// Map store failures to HTTP responses.
fn store_error_response(e: StoreError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": e.to_string() })))
}

async fn list_images(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.fetch_images().await {
        Ok(items) => (StatusCode::OK, Json(json!(items))).into_response(),
        Err(e) => {
            warn!("Failed to fetch images: {}", e);
            store_error_response(e).into_response()
        }
    }
}

async fn list_videos(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.fetch_videos().await {
        Ok(items) => (StatusCode::OK, Json(json!(items))).into_response(),
        Err(e) => {
            warn!("Failed to fetch videos: {}", e);
            store_error_response(e).into_response()
        }
    }
}

async fn list_texts(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.fetch_texts().await {
        Ok(items) => (StatusCode::OK, Json(json!(items))).into_response(),
        Err(e) => {
            warn!("Failed to fetch text blocks: {}", e);
            store_error_response(e).into_response()
        }
    }
}

async fn create_text(
    State(state): State<AppState>,
    Json(body): Json<CreateTextRequest>,
) -> impl IntoResponse {
    let block = TextBlock::new(body.content, Point::new(body.position.x, body.position.y));
    let created = block.clone();
    match state.store.create_text(block).await {
        Ok(()) => {
            info!("Created text block {}", created.id);
            (StatusCode::CREATED, Json(json!(created))).into_response()
        }
        Err(e) => {
            warn!("Failed to create text block: {}", e);
            store_error_response(e).into_response()
        }
    }
}

async fn delete_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.delete_text(id).await {
        Ok(()) => {
            info!("Deleted text block {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            warn!("Failed to delete text block {}: {}", id, e);
            store_error_response(e).into_response()
        }
    }
}

/// Bulk position save. A failed row aborts the rest of the batch; rows
/// already written stay written, and the error names the failed row.
async fn save_positions(
    State(state): State<AppState>,
    Json(batch): Json<SaveBatch>,
) -> impl IntoResponse {
    let total = batch.len();
    match state.store.save_positions(batch).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(json!({ "message": "Positions saved successfully", "updated": updated })),
        )
            .into_response(),
        Err(e) => {
            warn!("Position save failed after partial progress ({} rows requested): {}", total, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
