//! Column Fill Analysis: checks whether the text column fits the slide after flow layout.
//!
//! The flow constants are tuned so realistic content fits, but nothing guarantees it:
//! heading + subheading + stats + body minimum can run past the bottom margin. When it
//! does, the column is compressed vertically about its top edge so it ends exactly at
//! the bottom margin. Order and disjointness survive the scaling.

use serde::{Deserialize, Serialize};

use crate::geometry::round2;
use crate::models::SlideBox;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFillVerdict {
    /// The column ends at or above the bottom margin.
    Fits,
    /// The column runs past the bottom margin and must be compressed.
    Overflow,
}

/// Result of checking one text column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnFill {
    pub column_top: f64,
    pub column_bottom: f64,
    /// `100 − bottom_margin`.
    pub limit: f64,
    /// How far past the limit the column runs, 0 when it fits.
    pub overflow: f64,
    /// Vertical scale factor applied by `compress_column` (1.0 when it fits).
    pub scale: f64,
    pub verdict: ColumnFillVerdict,
}

/// Analyzes the vertical extent of a text column starting at `column_top`.
///
/// An empty column trivially fits.
pub fn analyze_column_fill(column: &[SlideBox], column_top: f64, bottom_margin: f64) -> ColumnFill {
    let limit = 100.0 - bottom_margin;
    let column_bottom = column
        .iter()
        .map(|b| b.y + b.height)
        .fold(column_top, f64::max);

    let overflow = (column_bottom - limit).max(0.0);
    let used = column_bottom - column_top;
    let (verdict, scale) = if overflow > 0.0 && used > 0.0 {
        let available = (limit - column_top).max(0.0);
        (ColumnFillVerdict::Overflow, available / used)
    } else {
        (ColumnFillVerdict::Fits, 1.0)
    };

    ColumnFill {
        column_top,
        column_bottom,
        limit,
        overflow,
        scale,
        verdict,
    }
}

/// Scales every box's vertical extent about `fill.column_top` by `fill.scale`.
///
/// Top and bottom edges are rounded independently so that rounding can never push a
/// box into its successor.
pub fn compress_column(column: &mut [SlideBox], fill: &ColumnFill) {
    if fill.verdict == ColumnFillVerdict::Fits {
        return;
    }
    let top = fill.column_top;
    for b in column.iter_mut() {
        let new_top = round2(top + (b.y - top) * fill.scale);
        let new_bottom = round2(top + (b.y + b.height - top) * fill.scale);
        b.y = new_top;
        b.height = round2(new_bottom - new_top);
    }
}
