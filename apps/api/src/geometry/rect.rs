//! Percent and pixel rectangles, and conversion between them through a [`Canvas`].

use serde::{Deserialize, Serialize};

use crate::geometry::percent::{round2, GeometryError};

// ────────────────────────────────────────────────────────────────────────────
// Canvas
// ────────────────────────────────────────────────────────────────────────────

/// The pixel surface a slide is currently displayed on.
///
/// Measured by the host at runtime and passed into every operation that needs
/// pixel ⇄ percent conversion; it changes whenever the window is resized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        let canvas = Canvas { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Canvases arriving over the wire bypass `new`, so handlers call this explicitly.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if ok {
            Ok(())
        } else {
            Err(GeometryError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Horizontal pixel delta → percent of canvas width.
    pub fn dx_to_percent(&self, dx_px: f64) -> f64 {
        dx_px / self.width * 100.0
    }

    /// Vertical pixel delta → percent of canvas height.
    pub fn dy_to_percent(&self, dy_px: f64) -> f64 {
        dy_px / self.height * 100.0
    }

    /// The whole canvas as a pixel rectangle anchored at the origin.
    pub fn bounds(&self) -> PixelRect {
        PixelRect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Points and rectangles
// ────────────────────────────────────────────────────────────────────────────

/// A pointer position in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        PixelPoint { x, y }
    }

    pub fn distance_to(&self, other: PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Box geometry in percent of the slide (0–100 on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PercentRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        PercentRect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn rounded(&self) -> Self {
        PercentRect {
            x: round2(self.x),
            y: round2(self.y),
            width: round2(self.width),
            height: round2(self.height),
        }
    }

    /// Pulls the rect fully inside the slide: size first (capped at 100), then position.
    pub fn clamped_to_slide(&self) -> Self {
        let width = self.width.clamp(0.0, 100.0);
        let height = self.height.clamp(0.0, 100.0);
        PercentRect {
            x: self.x.min(100.0 - width).max(0.0),
            y: self.y.min(100.0 - height).max(0.0),
            width,
            height,
        }
        .rounded()
    }

    pub fn to_pixels(&self, canvas: &Canvas) -> PixelRect {
        PixelRect {
            x: self.x / 100.0 * canvas.width,
            y: self.y / 100.0 * canvas.height,
            width: self.width / 100.0 * canvas.width,
            height: self.height / 100.0 * canvas.height,
        }
    }
}

/// A rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrinks the rect by `margin` on every side. Never produces a negative size.
    pub fn inset(&self, margin: f64) -> Self {
        PixelRect {
            x: self.x + margin,
            y: self.y + margin,
            width: (self.width - 2.0 * margin).max(0.0),
            height: (self.height - 2.0 * margin).max(0.0),
        }
    }

    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Converts back to percent space, rounded to 2 decimals.
    pub fn to_percent(&self, canvas: &Canvas) -> PercentRect {
        PercentRect {
            x: self.x / canvas.width * 100.0,
            y: self.y / canvas.height * 100.0,
            width: self.width / canvas.width * 100.0,
            height: self.height / canvas.height * 100.0,
        }
        .rounded()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_rejects_degenerate_sizes() {
        assert!(Canvas::new(1200.0, 675.0).is_ok());
        assert!(Canvas::new(0.0, 675.0).is_err());
        assert!(Canvas::new(1200.0, -1.0).is_err());
        assert!(Canvas::new(f64::NAN, 675.0).is_err());
        assert!(Canvas::new(f64::INFINITY, 675.0).is_err());
    }

    #[test]
    fn test_percent_pixel_round_trip() {
        let canvases = [
            Canvas::new(1200.0, 675.0).unwrap(),
            Canvas::new(1013.0, 577.0).unwrap(),
            Canvas::new(333.0, 187.5).unwrap(),
        ];
        let rects = [
            PercentRect::new(0.0, 0.0, 100.0, 100.0),
            PercentRect::new(12.34, 56.78, 20.5, 11.11),
            PercentRect::new(52.0, 8.0, 42.0, 84.0),
            PercentRect::new(99.99, 0.01, 0.01, 99.99),
        ];
        for canvas in &canvases {
            for rect in &rects {
                let back = rect.to_pixels(canvas).to_percent(canvas);
                assert!((back.x - rect.x).abs() <= 0.01, "{rect:?} -> {back:?}");
                assert!((back.y - rect.y).abs() <= 0.01, "{rect:?} -> {back:?}");
                assert!((back.width - rect.width).abs() <= 0.01, "{rect:?} -> {back:?}");
                assert!((back.height - rect.height).abs() <= 0.01, "{rect:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn test_pixel_deltas_scale_by_canvas_dimension() {
        let canvas = Canvas::new(1200.0, 600.0).unwrap();
        assert!((canvas.dx_to_percent(120.0) - 10.0).abs() < 1e-9);
        assert!((canvas.dy_to_percent(120.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_slide_keeps_size_moves_position() {
        let r = PercentRect::new(90.0, -5.0, 20.0, 10.0).clamped_to_slide();
        assert_eq!(r, PercentRect::new(80.0, 0.0, 20.0, 10.0));

        let huge = PercentRect::new(-10.0, -10.0, 150.0, 120.0).clamped_to_slide();
        assert_eq!(huge, PercentRect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_inset_and_contains() {
        let outer = PixelRect::new(0.0, 0.0, 100.0, 50.0).inset(10.0);
        assert_eq!(outer, PixelRect::new(10.0, 10.0, 80.0, 30.0));
        assert!(outer.contains_rect(&PixelRect::new(10.0, 10.0, 80.0, 30.0)));
        assert!(!outer.contains_rect(&PixelRect::new(9.0, 10.0, 10.0, 10.0)));

        let collapsed = PixelRect::new(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert_eq!(collapsed.width, 0.0);
    }
}
