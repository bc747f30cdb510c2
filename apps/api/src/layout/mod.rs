// Automatic content layout: content description → positioned boxes.
// Pure and deterministic; the handler runs it on the blocking pool.

pub mod engine;
pub mod fill;
pub mod handlers;
pub mod metrics;
pub mod placement;

// Re-export the public API consumed by other modules (state, handlers).
pub use engine::{layout_slide, SlideLayout};
pub use metrics::{default_layout_metrics, LayoutMetrics};
