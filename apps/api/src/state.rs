use crate::config::Config;
use crate::editor::EditorConfig;
use crate::layout::LayoutMetrics;
use crate::toolbar::ToolbarConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; slides and editor state travel with each request.
#[derive(Debug, Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Layout constants (margins, gutters, block heights) in slide percent.
    pub layout_metrics: LayoutMetrics,
    pub editor_config: EditorConfig,
    pub toolbar_config: ToolbarConfig,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            editor_config: config.editor_config(),
            toolbar_config: config.toolbar_config(),
            layout_metrics: crate::layout::default_layout_metrics(),
            config,
        }
    }
}
