pub mod content;
pub mod slide;

pub use content::{ContentDescription, PlacementHint};
pub use slide::{Background, BoxKind, Slide, SlideBox, TextAlign, TextRole};
