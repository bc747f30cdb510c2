//! Drag and resize math in percent space.
//!
//! Both functions work from the geometry captured when the operation began plus the
//! total pointer delta since then, never from the previous tick, so a long drag
//! cannot accumulate error. Outputs are clamped to the slide and rounded to 2 decimals.

use crate::editor::interaction::ResizeDirection;
use crate::geometry::{round2, PercentRect, MIN_BOX_SIZE_PCT};

/// Moves `start` by `(dx, dy)` percent, keeping the whole box on the slide.
pub fn drag_rect(start: PercentRect, dx: f64, dy: f64) -> PercentRect {
    PercentRect {
        x: round2(clamp_position(start.x + dx, start.width)),
        y: round2(clamp_position(start.y + dy, start.height)),
        width: start.width,
        height: start.height,
    }
}

/// Resizes `start` by `(dx, dy)` percent along the edges named by `direction`.
///
/// Edges not named by the direction stay put. Shrinking past the minimum size stops
/// at the minimum with the opposite edge fixed. Growing past the slide boundary stops
/// at the boundary, reducing the size rather than moving the box.
pub fn resize_rect(start: PercentRect, direction: ResizeDirection, dx: f64, dy: f64) -> PercentRect {
    let (left, right) = resize_axis(
        start.x,
        start.right(),
        dx,
        direction.west(),
        direction.east(),
    );
    let (top, bottom) = resize_axis(
        start.y,
        start.bottom(),
        dy,
        direction.north(),
        direction.south(),
    );

    let (x, width) = finish_axis(left, right);
    let (y, height) = finish_axis(top, bottom);
    PercentRect {
        x,
        y,
        width,
        height,
    }
}

fn clamp_position(value: f64, size: f64) -> f64 {
    value.min(100.0 - size).max(0.0)
}

/// One axis of a resize. `near` is the left/top edge, `far` the right/bottom edge.
fn resize_axis(near: f64, far: f64, delta: f64, moves_near: bool, moves_far: bool) -> (f64, f64) {
    let (mut near, mut far) = (near, far);

    // Edges first, with the minimum size measured from the fixed edge.
    if moves_far {
        far = (far + delta).max(near + MIN_BOX_SIZE_PCT);
    }
    if moves_near {
        near = (near + delta).min(far - MIN_BOX_SIZE_PCT);
    }

    // Then the slide boundary: clip the moving edge, never shift the fixed one.
    near = near.max(0.0);
    far = far.min(100.0);

    // Only reachable when the box started out of bounds or undersized.
    if far - near < MIN_BOX_SIZE_PCT {
        if moves_near {
            near = (far - MIN_BOX_SIZE_PCT).max(0.0);
            far = near + MIN_BOX_SIZE_PCT;
        } else {
            far = (near + MIN_BOX_SIZE_PCT).min(100.0);
            near = far - MIN_BOX_SIZE_PCT;
        }
    }

    (near, far)
}

/// Rounds an axis to `(position, size)` without letting rounding break the bounds.
fn finish_axis(near: f64, far: f64) -> (f64, f64) {
    let size = round2(far - near).max(MIN_BOX_SIZE_PCT);
    let mut position = round2(near);
    if position + size > 100.0 {
        position = round2(100.0 - size);
    }
    (position, size)
}
