// Interactive manipulation: selection, drag, resize and text-edit hand-off.
// The engine is synchronous and clock-free; callers pass `now_ms` with each click.

pub mod engine;
pub mod handlers;
pub mod interaction;
pub mod transform;

pub use engine::{EditorConfig, PaintEntry, SlideEditor};
pub use interaction::{EditorEvent, EditorState, Effect};
