// Toolbar placement: a pure solver over pixel rectangles, plus its HTTP handler.

pub mod handlers;
pub mod solver;

pub use solver::{place_toolbar, ToolbarConfig, ToolbarPlacement, ToolbarSize};
