use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{header, Method},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{analysis::AnalysisReport, error::AppError, grid::Grid, AppState};

pub fn routes(max_body_size: usize) -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/grids/analyze", post(analyze_grid))
        .route("/grids/export", post(export_grid))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(cors)
}

#[axum::debug_handler]
async fn analyze_grid(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Grid>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let start = std::time::Instant::now();
    let Json(grid) = payload.map_err(|e| AppError::InvalidGrid(e.body_text()))?;

    tracing::info!(
        "Received grid for analysis: {} rows, {} columns",
        grid.rows.len(),
        grid.width()
    );

    // The engine is pure and synchronous; keep it off the async runtime.
    let analyzer = state.analyzer.clone();
    let report = tokio::task::spawn_blocking(move || analyzer.analyze(&grid))
        .await
        .map_err(|e| AppError::Internal(format!("Analysis task failed: {}", e)))?;

    tracing::info!("Grid analysis request served in {:?}", start.elapsed());

    Ok(Json(report))
}

#[axum::debug_handler]
async fn export_grid(
    payload: Result<Json<Grid>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(grid) = payload.map_err(|e| AppError::InvalidGrid(e.body_text()))?;

    tracing::info!("Exporting grid with {} rows as CSV", grid.rows.len());

    Ok(([(header::CONTENT_TYPE, "text/csv")], grid.to_csv()))
}
