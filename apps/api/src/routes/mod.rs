pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers::handle_editor_events;
use crate::layout::handlers::handle_layout;
use crate::state::AppState;
use crate::toolbar::handlers::handle_toolbar;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/layout", post(handle_layout))
        // Editor API
        .route("/api/v1/editor/events", post(handle_editor_events))
        .route("/api/v1/toolbar", post(handle_toolbar))
        .with_state(state)
}
