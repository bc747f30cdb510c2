//! Toolbar placement: puts a fixed-size floating toolbar next to the selected box.
//!
//! Candidates are tried in a fixed priority order and the first one that lies fully
//! inside the margined canvas wins. When nothing fits (the box is nearly as large as
//! the canvas), the centered-above candidate is clamped into the canvas instead: the
//! toolbar stays fully visible even if it ends up covering the box.
//!
//! Stateless; re-run whenever the box moves or resizes or the canvas resizes.

use serde::{Deserialize, Serialize};

use crate::geometry::{PixelPoint, PixelRect};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolbarSize {
    pub width: f64,
    pub height: f64,
}

/// Fixed solver parameters, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolbarConfig {
    pub size: ToolbarSize,
    /// Distance between the box edge and the toolbar.
    pub gap: f64,
    /// Distance the toolbar keeps from the canvas edge.
    pub margin: f64,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        ToolbarConfig {
            size: ToolbarSize {
                width: 400.0,
                height: 50.0,
            },
            gap: 8.0,
            margin: 8.0,
        }
    }
}

/// Candidate positions, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarAnchor {
    CenteredAbove,
    CenteredBelow,
    CenteredLeft,
    CenteredRight,
    AboveLeft,
    AboveRight,
    BelowLeft,
    BelowRight,
}

impl ToolbarAnchor {
    pub const PRIORITY: [ToolbarAnchor; 8] = [
        ToolbarAnchor::CenteredAbove,
        ToolbarAnchor::CenteredBelow,
        ToolbarAnchor::CenteredLeft,
        ToolbarAnchor::CenteredRight,
        ToolbarAnchor::AboveLeft,
        ToolbarAnchor::AboveRight,
        ToolbarAnchor::BelowLeft,
        ToolbarAnchor::BelowRight,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolbarPlacement {
    pub x: f64,
    pub y: f64,
    pub anchor: ToolbarAnchor,
    /// True when no candidate fit and the clamped centered-above position was used.
    pub fallback_used: bool,
}

impl ToolbarPlacement {
    pub fn rect(&self, size: ToolbarSize) -> PixelRect {
        PixelRect::new(self.x, self.y, size.width, size.height)
    }
}

/// Top-left corner of the toolbar for one candidate.
pub fn candidate_origin(
    anchor: ToolbarAnchor,
    target: &PixelRect,
    size: ToolbarSize,
    gap: f64,
) -> PixelPoint {
    let center = target.center();
    let above = target.y - gap - size.height;
    let below = target.bottom() + gap;
    let centered_x = center.x - size.width / 2.0;
    let centered_y = center.y - size.height / 2.0;

    match anchor {
        ToolbarAnchor::CenteredAbove => PixelPoint::new(centered_x, above),
        ToolbarAnchor::CenteredBelow => PixelPoint::new(centered_x, below),
        ToolbarAnchor::CenteredLeft => PixelPoint::new(target.x - gap - size.width, centered_y),
        ToolbarAnchor::CenteredRight => PixelPoint::new(target.right() + gap, centered_y),
        ToolbarAnchor::AboveLeft => PixelPoint::new(target.x, above),
        ToolbarAnchor::AboveRight => PixelPoint::new(target.right() - size.width, above),
        ToolbarAnchor::BelowLeft => PixelPoint::new(target.x, below),
        ToolbarAnchor::BelowRight => PixelPoint::new(target.right() - size.width, below),
    }
}

/// Chooses where to put the toolbar for `target` inside `canvas`.
pub fn place_toolbar(
    target: &PixelRect,
    canvas: &PixelRect,
    config: &ToolbarConfig,
) -> ToolbarPlacement {
    let bounds = canvas.inset(config.margin);

    for anchor in ToolbarAnchor::PRIORITY {
        let origin = candidate_origin(anchor, target, config.size, config.gap);
        let rect = PixelRect::new(origin.x, origin.y, config.size.width, config.size.height);
        if bounds.contains_rect(&rect) {
            return ToolbarPlacement {
                x: origin.x,
                y: origin.y,
                anchor,
                fallback_used: false,
            };
        }
    }

    let origin = candidate_origin(
        ToolbarAnchor::CenteredAbove,
        target,
        config.size,
        config.gap,
    );
    ToolbarPlacement {
        x: clamp_start(origin.x, bounds.x, bounds.right() - config.size.width),
        y: clamp_start(origin.y, bounds.y, bounds.bottom() - config.size.height),
        anchor: ToolbarAnchor::CenteredAbove,
        fallback_used: true,
    }
}

/// Clamps into `[min, max]`; a toolbar larger than the bounds pins to `min`.
fn clamp_start(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}
