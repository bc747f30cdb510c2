//! Placement strategies: where the visual asset goes and what is left for text.
//!
//! Columns are disjoint by construction: the side column and the text column never
//! share an x-range, and the top band sits above the text cursor's start.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::PercentRect;
use crate::layout::metrics::LayoutMetrics;
use crate::models::content::VisualAsset;
use crate::models::{PlacementHint, TextAlign};

/// The strategy actually used after resolving the hint against the available asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    Left,
    Right,
    Top,
    /// Image consumed as the slide background; text inset and centered.
    Background,
    /// No visual column; text inset symmetrically.
    Centered,
}

/// Geometry of one slide's columns, computed before any text is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPlan {
    pub mode: PlacementMode,
    pub text_x: f64,
    pub text_width: f64,
    /// Initial value of the vertical text cursor.
    pub text_top: f64,
    pub heading_align: TextAlign,
    pub body_align: TextAlign,
    /// Rect for the asset box; `None` when there is no asset or it became the background.
    pub visual: Option<PercentRect>,
}

/// Resolves a placement hint into concrete columns.
///
/// - no asset → `Centered` whatever the hint says
/// - `full`/`background` with a chart → `Top` (a chart cannot be a background)
/// - `none` with an asset → `Top`, so the asset is still shown
pub fn plan_columns(
    hint: PlacementHint,
    asset: Option<VisualAsset<'_>>,
    m: &LayoutMetrics,
) -> ColumnPlan {
    let Some(asset) = asset else {
        return centered(m);
    };

    match hint {
        PlacementHint::Left | PlacementHint::Right => {
            let text_width = 100.0 - m.visual_column_width - m.visual_text_gap - m.side_margin;
            let (visual_x, text_x) = if hint == PlacementHint::Left {
                (0.0, m.visual_column_width + m.visual_text_gap)
            } else {
                (100.0 - m.visual_column_width, m.side_margin)
            };
            ColumnPlan {
                mode: if hint == PlacementHint::Left {
                    PlacementMode::Left
                } else {
                    PlacementMode::Right
                },
                text_x,
                text_width,
                text_top: m.top_gutter,
                heading_align: TextAlign::Left,
                body_align: TextAlign::Left,
                visual: Some(PercentRect::new(
                    visual_x,
                    0.0,
                    m.visual_column_width,
                    100.0,
                )),
            }
        }
        PlacementHint::Full | PlacementHint::Background => match asset {
            VisualAsset::Image(_) => {
                let inset = m.background_text_inset;
                ColumnPlan {
                    mode: PlacementMode::Background,
                    text_x: inset,
                    text_width: 100.0 - 2.0 * inset,
                    text_top: m.top_gutter,
                    heading_align: TextAlign::Center,
                    body_align: TextAlign::Center,
                    visual: None,
                }
            }
            VisualAsset::Chart(_) => top_band(m),
        },
        PlacementHint::Top => top_band(m),
        PlacementHint::None => {
            debug!("Layout: asset given without a placement hint, using top band");
            top_band(m)
        }
    }
}

fn top_band(m: &LayoutMetrics) -> ColumnPlan {
    let band_width = 100.0 - 2.0 * m.side_margin;
    ColumnPlan {
        mode: PlacementMode::Top,
        text_x: m.side_margin,
        text_width: band_width,
        text_top: m.top_gutter + m.top_band_height + m.visual_text_gap,
        heading_align: TextAlign::Center,
        body_align: TextAlign::Left,
        visual: Some(PercentRect::new(
            m.side_margin,
            m.top_gutter,
            band_width,
            m.top_band_height,
        )),
    }
}

fn centered(m: &LayoutMetrics) -> ColumnPlan {
    ColumnPlan {
        mode: PlacementMode::Centered,
        text_x: m.text_inset,
        text_width: 100.0 - 2.0 * m.text_inset,
        text_top: m.top_gutter,
        heading_align: TextAlign::Center,
        body_align: TextAlign::Left,
        visual: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::default_layout_metrics;
    use crate::models::content::ImageRef;
    use serde_json::json;

    fn image() -> ImageRef {
        ImageRef {
            src: "hero.png".to_string(),
            alt: None,
        }
    }

    fn overlaps_x(a: &PercentRect, x: f64, width: f64) -> bool {
        a.x < x + width && x < a.right()
    }

    #[test]
    fn test_side_columns_are_disjoint() {
        let m = default_layout_metrics();
        let img = image();
        for hint in [PlacementHint::Left, PlacementHint::Right] {
            let plan = plan_columns(hint, Some(VisualAsset::Image(&img)), &m);
            let visual = plan.visual.expect("side mode keeps a visual column");
            assert!(!overlaps_x(&visual, plan.text_x, plan.text_width), "{hint:?}");
            assert!(plan.text_x + plan.text_width <= 100.0);
            assert_eq!(plan.heading_align, TextAlign::Left);
        }
    }

    #[test]
    fn test_left_puts_visual_on_the_left() {
        let m = default_layout_metrics();
        let img = image();
        let plan = plan_columns(PlacementHint::Left, Some(VisualAsset::Image(&img)), &m);
        assert_eq!(plan.mode, PlacementMode::Left);
        assert_eq!(plan.visual.unwrap().x, 0.0);
        assert_eq!(plan.text_x, 52.0);
        assert_eq!(plan.text_width, 42.0);
    }

    #[test]
    fn test_background_consumes_image() {
        let m = default_layout_metrics();
        let img = image();
        let plan = plan_columns(
            PlacementHint::Background,
            Some(VisualAsset::Image(&img)),
            &m,
        );
        assert_eq!(plan.mode, PlacementMode::Background);
        assert!(plan.visual.is_none());
        assert_eq!(plan.text_x, 12.0);
        assert_eq!(plan.text_width, 76.0);
    }

    #[test]
    fn test_full_with_chart_becomes_top_band() {
        let m = default_layout_metrics();
        let chart = json!({"kind": "line"});
        let plan = plan_columns(PlacementHint::Full, Some(VisualAsset::Chart(&chart)), &m);
        assert_eq!(plan.mode, PlacementMode::Top);
        let band = plan.visual.unwrap();
        assert!(band.bottom() <= plan.text_top);
    }

    #[test]
    fn test_none_hint_with_asset_uses_top_band() {
        let m = default_layout_metrics();
        let img = image();
        let plan = plan_columns(PlacementHint::None, Some(VisualAsset::Image(&img)), &m);
        assert_eq!(plan.mode, PlacementMode::Top);
        assert!(plan.visual.is_some());
    }

    #[test]
    fn test_hint_without_asset_is_centered() {
        let m = default_layout_metrics();
        let plan = plan_columns(PlacementHint::Left, None, &m);
        assert_eq!(plan.mode, PlacementMode::Centered);
        assert_eq!(plan.text_x, 8.0);
        assert_eq!(plan.text_width, 84.0);
    }
}
