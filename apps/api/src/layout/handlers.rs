//! Axum route handlers for the Layout API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::layout::engine::{layout_slide, SlideLayout};
use crate::models::{ContentDescription, Slide};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    /// Position of the slide in the deck; 0 is the title slide.
    pub slide_index: usize,
    pub content: ContentDescription,
    /// Existing slide to re-lay out. Its boxes are replaced wholesale.
    #[serde(default)]
    pub slide: Option<Slide>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    #[serde(flatten)]
    pub layout: SlideLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<Slide>,
}

/// POST /api/v1/layout
///
/// Lays out one slide from a content description. Streamed generation calls this
/// repeatedly with the accumulated description; each response replaces the last.
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, AppError> {
    let metrics = state.layout_metrics.clone();
    let slide_index = request.slide_index;

    // CPU-bound pass, keep it off the async executor.
    let response = tokio::task::spawn_blocking(move || {
        let layout = layout_slide(request.slide_index, &request.content, &metrics);
        let slide = request.slide.map(|mut slide| {
            layout.clone().apply_to(&mut slide);
            slide
        });
        LayoutResponse { layout, slide }
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout: {e}")))?;

    info!(
        slide = slide_index,
        boxes = response.layout.boxes.len(),
        "Layout generated"
    );

    Ok(Json(response))
}
