//! Axum route handlers for the Toolbar API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::geometry::{Canvas, PercentRect};
use crate::state::AppState;
use crate::toolbar::solver::{place_toolbar, ToolbarConfig, ToolbarPlacement, ToolbarSize};

#[derive(Debug, Deserialize)]
pub struct ToolbarRequest {
    /// Selected box in slide percent.
    pub target: PercentRect,
    pub canvas: Canvas,
    /// Overrides the configured toolbar size, e.g. for a collapsed toolbar.
    #[serde(default)]
    pub toolbar: Option<ToolbarSize>,
}

/// POST /api/v1/toolbar
pub async fn handle_toolbar(
    State(state): State<AppState>,
    Json(request): Json<ToolbarRequest>,
) -> Result<Json<ToolbarPlacement>, AppError> {
    request.canvas.validate()?;
    let config = ToolbarConfig {
        size: request.toolbar.unwrap_or(state.toolbar_config.size),
        ..state.toolbar_config
    };
    if config.size.width <= 0.0 || config.size.height <= 0.0 {
        return Err(AppError::Validation(
            "toolbar size must be positive".to_string(),
        ));
    }

    let target = request.target.to_pixels(&request.canvas);
    let placement = place_toolbar(&target, &request.canvas.bounds(), &config);
    if placement.fallback_used {
        warn!(?target, "Toolbar: no candidate fit, clamped fallback used");
    }
    Ok(Json(placement))
}
