// Coordinate model shared by the layout engine, the editor and the toolbar solver.
// Box geometry lives in percent space (0–100 of the slide); pixels only exist at the edges.

pub mod percent;
pub mod rect;

pub use percent::{de_percent, parse_percent, round2, GeometryError, MIN_BOX_SIZE_PCT};
pub use rect::{Canvas, PercentRect, PixelPoint, PixelRect};
