//! Heuristic layout constants for generated slides.
//!
//! Heights are minimums in percent of slide height, widths in percent of slide width.
//! Nothing is measured: the constants are tuned so realistic generated content fits
//! a 16:9 slide, and the column fill check in `fill.rs` catches the cases that don't.

use serde::{Deserialize, Serialize};

/// Tunable layout parameters. One value is built at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    // ── page frame ──
    /// Where the vertical cursor starts on a content slide.
    pub top_gutter: f64,
    /// Space kept free below the last block.
    pub bottom_margin: f64,
    /// Outer horizontal margin used next to side columns and around the top band.
    pub side_margin: f64,
    /// Symmetric inset of the text column when there is no side asset.
    pub text_inset: f64,
    /// Symmetric inset of the text column over a full-bleed background image.
    pub background_text_inset: f64,

    // ── visual asset ──
    pub visual_column_width: f64,
    pub visual_text_gap: f64,
    pub top_band_height: f64,

    // ── text blocks: (minimum height, spacing after) ──
    pub heading_height: f64,
    pub heading_spacing: f64,
    pub subheading_height: f64,
    pub subheading_spacing: f64,
    pub stat_value_height: f64,
    pub stat_label_height: f64,
    /// Horizontal gap between key-stat sub-columns.
    pub stat_gap: f64,
    pub stats_spacing: f64,
    pub body_min_height: f64,
    pub item_title_height: f64,
    pub item_description_min_height: f64,
    pub item_gap: f64,

    // ── title slide ──
    pub title_heading_height: f64,
    pub title_subheading_height: f64,
    pub title_gap: f64,
    pub title_width: f64,
}

/// The tuned default set for 16:9 slides.
///
/// Side mode text column: 100 − 48 (visual) − 4 (gap) − 6 (outer margin) = 42% wide.
pub fn default_layout_metrics() -> LayoutMetrics {
    LayoutMetrics {
        top_gutter: 8.0,
        bottom_margin: 6.0,
        side_margin: 6.0,
        text_inset: 8.0,
        background_text_inset: 12.0,

        visual_column_width: 48.0,
        visual_text_gap: 4.0,
        top_band_height: 30.0,

        heading_height: 12.0,
        heading_spacing: 3.0,
        subheading_height: 8.0,
        subheading_spacing: 3.0,
        stat_value_height: 10.0,
        stat_label_height: 6.0,
        stat_gap: 2.0,
        stats_spacing: 4.0,
        body_min_height: 20.0,
        item_title_height: 5.0,
        item_description_min_height: 6.0,
        item_gap: 2.0,

        title_heading_height: 20.0,
        title_subheading_height: 10.0,
        title_gap: 4.0,
        title_width: 80.0,
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        default_layout_metrics()
    }
}
