//! State, input and output types of the manipulation state machine.

use serde::{Deserialize, Serialize};

use crate::geometry::{PercentRect, PixelPoint};
use crate::models::BoxKind;

/// One of the 8 resize handles around a selected box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::Ne,
        ResizeDirection::Nw,
        ResizeDirection::Se,
        ResizeDirection::Sw,
    ];

    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }
}

/// The single "active operation" token of a slide. At most one box is ever
/// referenced, which is what keeps two boxes from mutating at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Interaction {
    #[default]
    Idle,
    Selected {
        box_id: String,
    },
    /// Pointer is down on the selected box; the drag threshold is not crossed yet.
    Pressed {
        box_id: String,
        origin: PixelPoint,
    },
    Dragging {
        box_id: String,
        origin: PixelPoint,
        /// Geometry before the drag began; restored on cancel.
        start: PercentRect,
    },
    Resizing {
        box_id: String,
        direction: ResizeDirection,
        origin: PixelPoint,
        start: PercentRect,
    },
    /// Control is handed to the external text editor.
    Editing {
        box_id: String,
    },
}

impl Interaction {
    pub fn box_id(&self) -> Option<&str> {
        match self {
            Interaction::Idle => None,
            Interaction::Selected { box_id }
            | Interaction::Pressed { box_id, .. }
            | Interaction::Dragging { box_id, .. }
            | Interaction::Resizing { box_id, .. }
            | Interaction::Editing { box_id } => Some(box_id),
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        matches!(self, Interaction::Editing { box_id } if box_id == id)
    }
}

/// A single click waiting out the double-click window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingClick {
    pub box_id: String,
    pub at_ms: u64,
}

/// Everything the editor needs to carry between events besides the slide itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorState {
    #[serde(default)]
    pub interaction: Interaction,
    #[serde(default)]
    pub pending_click: Option<PendingClick>,
}

/// What the pointer went down on, as resolved by the host's hit testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum PointerTarget {
    Canvas,
    Box {
        box_id: String,
    },
    Handle {
        box_id: String,
        direction: ResizeDirection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaretPosition {
    Start,
    End,
}

/// Where the text editor should put focus when it takes over a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusTarget {
    pub box_id: String,
    pub caret: CaretPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    Locked,
    /// Geometry operations are disabled while the box is being edited.
    Editing,
    UnknownBox,
}

/// One editor operation as it arrives over the wire.
///
/// The high-level ops (`click`, `begin_drag`, ...) and the raw pointer/keyboard ops
/// (`pointer_down`, `key_down`, ...) can be mixed freely in one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorEvent {
    Select {
        box_id: String,
    },
    Deselect,
    Click {
        box_id: String,
        now_ms: u64,
    },
    Tick {
        now_ms: u64,
    },
    DoubleClick {
        box_id: String,
    },
    ExitEdit,
    BeginDrag {
        box_id: String,
        pointer: PixelPoint,
    },
    UpdateDrag {
        pointer: PixelPoint,
    },
    EndDrag,
    BeginResize {
        box_id: String,
        direction: ResizeDirection,
        pointer: PixelPoint,
    },
    UpdateResize {
        pointer: PixelPoint,
    },
    EndResize,
    Cancel,
    AddBox {
        kind: BoxKind,
        rect: PercentRect,
    },
    Delete {
        box_id: String,
    },
    PointerDown {
        target: PointerTarget,
        pointer: PixelPoint,
        now_ms: u64,
    },
    PointerMove {
        pointer: PixelPoint,
    },
    PointerUp {
        pointer: PixelPoint,
    },
    KeyDown {
        key: Key,
    },
}

/// Observable outcome of an editor operation, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Selected { box_id: String },
    Deselected { box_id: String },
    ClickScheduled { box_id: String, fires_at_ms: u64 },
    /// In-progress geometry during a drag or resize.
    BoxUpdated { box_id: String, rect: PercentRect },
    BoxCommitted { box_id: String, rect: PercentRect },
    BoxReverted { box_id: String, rect: PercentRect },
    BoxCreated { box_id: String },
    BoxDeleted { box_id: String },
    EditRequested { focus: FocusTarget },
    EditEnded { box_id: String },
    Rejected { box_id: String, reason: RejectReason },
}
