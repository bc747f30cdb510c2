//! Axum route handlers for the Editor API.
//!
//! The server holds no editor sessions: the client sends the slide and the last
//! returned state with every batch of events and keeps what comes back.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::editor::engine::{PaintEntry, SlideEditor};
use crate::editor::interaction::{EditorEvent, EditorState, Effect};
use crate::errors::AppError;
use crate::geometry::Canvas;
use crate::models::Slide;
use crate::state::AppState;
use crate::toolbar::{place_toolbar, ToolbarPlacement};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EditorEventsRequest {
    pub slide: Slide,
    #[serde(default)]
    pub state: EditorState,
    /// Rendered canvas size; converts pointer pixels to percent.
    pub canvas: Canvas,
    pub events: Vec<EditorEvent>,
}

#[derive(Debug, Serialize)]
pub struct EditorEventsResponse {
    pub slide: Slide,
    pub state: EditorState,
    pub effects: Vec<Effect>,
    pub paint_order: Vec<PaintEntry>,
    /// Present whenever a box is selected, dragged, resized or edited.
    pub toolbar: Option<ToolbarPlacement>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/editor/events
///
/// Replays a batch of events against the slide in order and returns the new slide,
/// the state to send back next time, and every effect produced along the way.
pub async fn handle_editor_events(
    State(state): State<AppState>,
    Json(request): Json<EditorEventsRequest>,
) -> Result<Json<EditorEventsResponse>, AppError> {
    request.canvas.validate()?;

    let canvas = request.canvas;
    let event_count = request.events.len();
    let mut editor = SlideEditor::with_state(
        request.slide,
        request.state,
        state.editor_config.clone(),
    );

    let mut effects = Vec::new();
    for event in request.events {
        effects.extend(editor.apply_event(event, &canvas));
    }

    let toolbar = editor.toolbar_target(&canvas).map(|target| {
        let placement = place_toolbar(&target, &canvas.bounds(), &state.toolbar_config);
        if placement.fallback_used {
            warn!(?target, "Toolbar: no candidate fit, clamped fallback used");
        }
        placement
    });
    let paint_order = editor.paint_order();
    let (slide, editor_state) = editor.into_parts();

    debug!(
        slide = %slide.id,
        events = event_count,
        effects = effects.len(),
        "Editor events applied"
    );

    Ok(Json(EditorEventsResponse {
        slide,
        state: editor_state,
        effects,
        paint_order,
        toolbar,
    }))
}
