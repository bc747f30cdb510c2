//! Slide editor: the select / drag / resize / edit state machine.
//!
//! # Model
//! - One `Interaction` token per slide. Starting an operation on another box first
//!   settles whatever the current box was doing (commit geometry, end editing).
//! - Time is injected: `click` and `tick` take `now_ms`, so the 200 ms double-click
//!   window is deterministic and testable without timers.
//! - Every operation returns the `Effect`s it produced. An empty list is a no-op.
//! - Pixel input is converted to percent with the canvas supplied on that call; the
//!   editor never holds on to a canvas, since it changes with the window.
//!
//! Locked boxes can be selected and deleted but never dragged, resized or edited.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::editor::interaction::{
    CaretPosition, EditorEvent, EditorState, Effect, FocusTarget, Interaction, Key,
    PendingClick, PointerTarget, RejectReason, ResizeDirection,
};
use crate::editor::transform::{drag_rect, resize_rect};
use crate::geometry::{Canvas, PercentRect, PixelPoint, PixelRect};
use crate::models::{BoxKind, Slide};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Window in which a second click turns the pair into a double-click.
    pub click_debounce_ms: u64,
    /// Pointer travel (px) before a press on the selected box becomes a drag.
    pub drag_threshold_px: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            click_debounce_ms: 200,
            drag_threshold_px: 3.0,
        }
    }
}

/// Transient paint-order bump for the selected box, above every stored z-index.
const SELECTED_Z_BOOST: i32 = 1;
/// The box being edited paints above the selection.
const EDITING_Z_BOOST: i32 = 2;

/// One entry of the effective paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintEntry {
    pub box_id: String,
    pub z_index: i32,
}

// ────────────────────────────────────────────────────────────────────────────
// Editor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SlideEditor {
    pub slide: Slide,
    pub state: EditorState,
    config: EditorConfig,
}

impl SlideEditor {
    pub fn new(slide: Slide, config: EditorConfig) -> Self {
        Self::with_state(slide, EditorState::default(), config)
    }

    /// Resumes an editor from a previously returned state.
    ///
    /// References to boxes that no longer exist are dropped.
    pub fn with_state(slide: Slide, mut state: EditorState, config: EditorConfig) -> Self {
        let stale_interaction = state
            .interaction
            .box_id()
            .is_some_and(|id| slide.find(id).is_none());
        if stale_interaction {
            state.interaction = Interaction::Idle;
        }
        let stale_click = state
            .pending_click
            .as_ref()
            .is_some_and(|p| slide.find(&p.box_id).is_none());
        if stale_click {
            state.pending_click = None;
        }
        SlideEditor {
            slide,
            state,
            config,
        }
    }

    pub fn into_parts(self) -> (Slide, EditorState) {
        (self.slide, self.state)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.state.interaction
    }

    /// The box the toolbar should follow, in canvas pixels.
    pub fn toolbar_target(&self, canvas: &Canvas) -> Option<PixelRect> {
        let id = self.state.interaction.box_id()?;
        self.slide.find(id).map(|b| b.rect().to_pixels(canvas))
    }

    /// Boxes in paint order with transient overrides for the active box applied.
    /// Stored z-indices are never modified by selection.
    pub fn paint_order(&self) -> Vec<PaintEntry> {
        let top = self.slide.max_z_index();
        let (active, boost) = match &self.state.interaction {
            Interaction::Idle => (None, 0),
            Interaction::Editing { box_id } => (Some(box_id.as_str()), EDITING_Z_BOOST),
            other => (other.box_id(), SELECTED_Z_BOOST),
        };

        let mut entries: Vec<PaintEntry> = self
            .slide
            .boxes
            .iter()
            .map(|b| PaintEntry {
                box_id: b.id.clone(),
                z_index: if Some(b.id.as_str()) == active {
                    top + boost
                } else {
                    b.z_index
                },
            })
            .collect();
        // Stable sort keeps document order among equal z-indices.
        entries.sort_by_key(|e| e.z_index);
        entries
    }

    // ── selection ──────────────────────────────────────────────────────────

    pub fn select(&mut self, box_id: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.slide.find(box_id).is_none() {
            return vec![reject(box_id, RejectReason::UnknownBox)];
        }
        if self.state.interaction.box_id() == Some(box_id) {
            // Already the active box; a select settles an in-flight operation on it.
            if !matches!(self.state.interaction, Interaction::Selected { .. }) {
                self.settle(&mut effects);
            }
            return effects;
        }
        self.release(&mut effects);
        self.state.interaction = Interaction::Selected {
            box_id: box_id.to_string(),
        };
        effects.push(Effect::Selected {
            box_id: box_id.to_string(),
        });
        effects
    }

    /// Clears the selection (Escape on a selected box, click on empty canvas).
    pub fn deselect(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.state.pending_click = None;
        self.release(&mut effects);
        effects
    }

    /// Registers a single click. Selection is deferred by the debounce window; a
    /// second click on the same box inside the window becomes a double-click.
    pub fn click(&mut self, box_id: &str, now_ms: u64) -> Vec<Effect> {
        if self.slide.find(box_id).is_none() {
            return vec![reject(box_id, RejectReason::UnknownBox)];
        }
        // A click whose window already elapsed fires before the new one is considered.
        let mut effects = self.tick(now_ms);

        if let Some(pending) = self.state.pending_click.take() {
            if pending.box_id == box_id {
                effects.extend(self.double_click(box_id));
                return effects;
            }
            debug!(cancelled = %pending.box_id, "Editor: pending click superseded");
        }

        let fires_at_ms = now_ms.saturating_add(self.config.click_debounce_ms);
        self.state.pending_click = Some(PendingClick {
            box_id: box_id.to_string(),
            at_ms: now_ms,
        });
        effects.push(Effect::ClickScheduled {
            box_id: box_id.to_string(),
            fires_at_ms,
        });
        effects
    }

    /// Fires the pending click once its debounce window has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Effect> {
        let due = self
            .state
            .pending_click
            .as_ref()
            .is_some_and(|p| now_ms >= p.at_ms.saturating_add(self.config.click_debounce_ms));
        if !due {
            return Vec::new();
        }
        match self.state.pending_click.take() {
            Some(pending) => self.select(&pending.box_id),
            None => Vec::new(),
        }
    }

    /// Text and shape boxes enter editing; anything else is simply selected.
    pub fn double_click(&mut self, box_id: &str) -> Vec<Effect> {
        let (editable, locked) = match self.slide.find(box_id) {
            Some(b) => (b.kind.is_text_editable(), b.locked),
            None => return vec![reject(box_id, RejectReason::UnknownBox)],
        };
        self.state.pending_click = None;
        if self.state.interaction.is_editing(box_id) {
            return Vec::new();
        }

        let mut effects = self.select(box_id);
        if !editable {
            return effects;
        }
        if locked {
            effects.push(reject(box_id, RejectReason::Locked));
            return effects;
        }

        self.state.interaction = Interaction::Editing {
            box_id: box_id.to_string(),
        };
        effects.push(Effect::EditRequested {
            focus: FocusTarget {
                box_id: box_id.to_string(),
                caret: CaretPosition::End,
            },
        });
        effects
    }

    /// External "exit edit" signal from the text editor.
    pub fn exit_edit(&mut self) -> Vec<Effect> {
        let Interaction::Editing { box_id } = &self.state.interaction else {
            return Vec::new();
        };
        let box_id = box_id.clone();
        self.state.interaction = Interaction::Selected {
            box_id: box_id.clone(),
        };
        vec![Effect::EditEnded { box_id }]
    }

    // ── drag ───────────────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, box_id: &str, pointer: PixelPoint) -> Vec<Effect> {
        let effects = match self.prepare_geometry_op(box_id) {
            Ok(effects) => effects,
            Err(rejected) => return vec![rejected],
        };
        let Some(target) = self.slide.find(box_id) else {
            return effects;
        };
        self.state.interaction = Interaction::Dragging {
            box_id: box_id.to_string(),
            origin: pointer,
            start: target.rect(),
        };
        debug!(box_id, "Editor: drag started");
        effects
    }

    pub fn update_drag(&mut self, pointer: PixelPoint, canvas: &Canvas) -> Vec<Effect> {
        let Interaction::Dragging {
            box_id,
            origin,
            start,
        } = &self.state.interaction
        else {
            return Vec::new();
        };
        let dx = canvas.dx_to_percent(pointer.x - origin.x);
        let dy = canvas.dy_to_percent(pointer.y - origin.y);
        let rect = drag_rect(*start, dx, dy);
        let box_id = box_id.clone();
        self.apply_rect(box_id, rect)
    }

    pub fn end_drag(&mut self) -> Vec<Effect> {
        match &self.state.interaction {
            Interaction::Dragging { .. } => self.commit(),
            _ => Vec::new(),
        }
    }

    // ── resize ─────────────────────────────────────────────────────────────

    pub fn begin_resize(
        &mut self,
        box_id: &str,
        direction: ResizeDirection,
        pointer: PixelPoint,
    ) -> Vec<Effect> {
        let effects = match self.prepare_geometry_op(box_id) {
            Ok(effects) => effects,
            Err(rejected) => return vec![rejected],
        };
        let Some(target) = self.slide.find(box_id) else {
            return effects;
        };
        self.state.interaction = Interaction::Resizing {
            box_id: box_id.to_string(),
            direction,
            origin: pointer,
            start: target.rect(),
        };
        debug!(box_id, ?direction, "Editor: resize started");
        effects
    }

    pub fn update_resize(&mut self, pointer: PixelPoint, canvas: &Canvas) -> Vec<Effect> {
        let Interaction::Resizing {
            box_id,
            direction,
            origin,
            start,
        } = &self.state.interaction
        else {
            return Vec::new();
        };
        let dx = canvas.dx_to_percent(pointer.x - origin.x);
        let dy = canvas.dy_to_percent(pointer.y - origin.y);
        let rect = resize_rect(*start, *direction, dx, dy);
        let box_id = box_id.clone();
        self.apply_rect(box_id, rect)
    }

    pub fn end_resize(&mut self) -> Vec<Effect> {
        match &self.state.interaction {
            Interaction::Resizing { .. } => self.commit(),
            _ => Vec::new(),
        }
    }

    /// Escape: reverts an in-flight drag/resize to its pre-operation geometry, leaves
    /// editing, or clears a plain selection.
    pub fn cancel(&mut self) -> Vec<Effect> {
        match self.state.interaction.clone() {
            Interaction::Dragging { box_id, start, .. }
            | Interaction::Resizing { box_id, start, .. } => {
                if let Some(target) = self.slide.find_mut(&box_id) {
                    target.set_rect(start);
                }
                self.state.interaction = Interaction::Selected {
                    box_id: box_id.clone(),
                };
                vec![Effect::BoxReverted {
                    box_id,
                    rect: start,
                }]
            }
            Interaction::Editing { .. } => self.exit_edit(),
            Interaction::Pressed { box_id, .. } => {
                self.state.interaction = Interaction::Selected { box_id };
                Vec::new()
            }
            Interaction::Selected { .. } => self.deselect(),
            Interaction::Idle => {
                self.state.pending_click = None;
                Vec::new()
            }
        }
    }

    // ── create / delete ────────────────────────────────────────────────────

    /// "Add element": inserts a box with caller-supplied default geometry and selects it.
    pub fn add_box(&mut self, kind: BoxKind, rect: PercentRect) -> Vec<Effect> {
        let box_id = self.slide.add_box(kind, rect);
        let mut effects = vec![Effect::BoxCreated {
            box_id: box_id.clone(),
        }];
        effects.extend(self.select(&box_id));
        effects
    }

    pub fn delete(&mut self, box_id: &str) -> Vec<Effect> {
        if self.slide.remove(box_id).is_none() {
            return vec![reject(box_id, RejectReason::UnknownBox)];
        }
        if self.state.interaction.box_id() == Some(box_id) {
            self.state.interaction = Interaction::Idle;
        }
        if self
            .state
            .pending_click
            .as_ref()
            .is_some_and(|p| p.box_id == box_id)
        {
            self.state.pending_click = None;
        }
        vec![Effect::BoxDeleted {
            box_id: box_id.to_string(),
        }]
    }

    // ── pointer / keyboard front end ───────────────────────────────────────

    pub fn pointer_down(
        &mut self,
        target: &PointerTarget,
        pointer: PixelPoint,
        now_ms: u64,
    ) -> Vec<Effect> {
        match target {
            PointerTarget::Canvas => self.deselect(),
            PointerTarget::Handle { box_id, direction } => {
                self.state.pending_click = None;
                self.begin_resize(box_id, *direction, pointer)
            }
            PointerTarget::Box { box_id } => {
                if self.state.interaction.is_editing(box_id) {
                    // The text editor owns the pointer inside the box it is editing.
                    return Vec::new();
                }
                let already_selected = matches!(
                    &self.state.interaction,
                    Interaction::Selected { box_id: id } if id == box_id
                );
                let effects = self.click(box_id, now_ms);
                // A double-click may have moved us into editing; only arm a press
                // if the box is still plainly selected.
                if already_selected
                    && matches!(&self.state.interaction, Interaction::Selected { box_id: id } if id == box_id)
                {
                    self.state.interaction = Interaction::Pressed {
                        box_id: box_id.clone(),
                        origin: pointer,
                    };
                }
                effects
            }
        }
    }

    pub fn pointer_move(&mut self, pointer: PixelPoint, canvas: &Canvas) -> Vec<Effect> {
        match &self.state.interaction {
            Interaction::Pressed { box_id, origin } => {
                if origin.distance_to(pointer) <= self.config.drag_threshold_px {
                    return Vec::new();
                }
                let (box_id, origin) = (box_id.clone(), *origin);
                // Movement means this press was a drag, not a click.
                self.state.pending_click = None;
                let mut effects = self.begin_drag(&box_id, origin);
                effects.extend(self.update_drag(pointer, canvas));
                effects
            }
            Interaction::Dragging { .. } => self.update_drag(pointer, canvas),
            Interaction::Resizing { .. } => self.update_resize(pointer, canvas),
            _ => Vec::new(),
        }
    }

    pub fn pointer_up(&mut self, pointer: PixelPoint, canvas: &Canvas) -> Vec<Effect> {
        match self.state.interaction.clone() {
            Interaction::Dragging { .. } => {
                let mut effects = self.update_drag(pointer, canvas);
                effects.extend(self.end_drag());
                effects
            }
            Interaction::Resizing { .. } => {
                let mut effects = self.update_resize(pointer, canvas);
                effects.extend(self.end_resize());
                effects
            }
            Interaction::Pressed { box_id, .. } => {
                self.state.interaction = Interaction::Selected { box_id };
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn key_down(&mut self, key: Key) -> Vec<Effect> {
        match key {
            Key::Escape => self.cancel(),
            Key::Delete => match &self.state.interaction {
                Interaction::Selected { box_id }
                | Interaction::Pressed { box_id, .. }
                | Interaction::Editing { box_id } => {
                    let box_id = box_id.clone();
                    self.delete(&box_id)
                }
                _ => Vec::new(),
            },
        }
    }

    /// Routes one wire event to the matching operation.
    pub fn apply_event(&mut self, event: EditorEvent, canvas: &Canvas) -> Vec<Effect> {
        match event {
            EditorEvent::Select { box_id } => self.select(&box_id),
            EditorEvent::Deselect => self.deselect(),
            EditorEvent::Click { box_id, now_ms } => self.click(&box_id, now_ms),
            EditorEvent::Tick { now_ms } => self.tick(now_ms),
            EditorEvent::DoubleClick { box_id } => self.double_click(&box_id),
            EditorEvent::ExitEdit => self.exit_edit(),
            EditorEvent::BeginDrag { box_id, pointer } => self.begin_drag(&box_id, pointer),
            EditorEvent::UpdateDrag { pointer } => self.update_drag(pointer, canvas),
            EditorEvent::EndDrag => self.end_drag(),
            EditorEvent::BeginResize {
                box_id,
                direction,
                pointer,
            } => self.begin_resize(&box_id, direction, pointer),
            EditorEvent::UpdateResize { pointer } => self.update_resize(pointer, canvas),
            EditorEvent::EndResize => self.end_resize(),
            EditorEvent::Cancel => self.cancel(),
            EditorEvent::AddBox { kind, rect } => self.add_box(kind, rect),
            EditorEvent::Delete { box_id } => self.delete(&box_id),
            EditorEvent::PointerDown {
                target,
                pointer,
                now_ms,
            } => self.pointer_down(&target, pointer, now_ms),
            EditorEvent::PointerMove { pointer } => self.pointer_move(pointer, canvas),
            EditorEvent::PointerUp { pointer } => self.pointer_up(pointer, canvas),
            EditorEvent::KeyDown { key } => self.key_down(key),
        }
    }

    // ── internals ──────────────────────────────────────────────────────────

    /// Shared gate for drag and resize: the box must exist, be unlocked and not in
    /// editing. Selects it (settling any other active box) if it isn't already.
    fn prepare_geometry_op(&mut self, box_id: &str) -> Result<Vec<Effect>, Effect> {
        let locked = match self.slide.find(box_id) {
            Some(b) => b.locked,
            None => return Err(reject(box_id, RejectReason::UnknownBox)),
        };
        if self.state.interaction.is_editing(box_id) {
            return Err(reject(box_id, RejectReason::Editing));
        }
        if locked {
            return Err(reject(box_id, RejectReason::Locked));
        }
        // Settles an in-flight operation on this same box, or switches boxes.
        Ok(self.select(box_id))
    }

    fn apply_rect(&mut self, box_id: String, rect: PercentRect) -> Vec<Effect> {
        match self.slide.find_mut(&box_id) {
            Some(target) => {
                target.set_rect(rect);
                vec![Effect::BoxUpdated { box_id, rect }]
            }
            None => Vec::new(),
        }
    }

    fn commit(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.settle(&mut effects);
        effects
    }

    /// Brings the active box back to plain `Selected`, committing geometry or ending
    /// editing as needed.
    fn settle(&mut self, effects: &mut Vec<Effect>) {
        let current = std::mem::take(&mut self.state.interaction);
        self.state.interaction = match current {
            Interaction::Dragging { box_id, .. } | Interaction::Resizing { box_id, .. } => {
                if let Some(target) = self.slide.find(&box_id) {
                    effects.push(Effect::BoxCommitted {
                        box_id: box_id.clone(),
                        rect: target.rect(),
                    });
                }
                Interaction::Selected { box_id }
            }
            Interaction::Editing { box_id } => {
                effects.push(Effect::EditEnded {
                    box_id: box_id.clone(),
                });
                Interaction::Selected { box_id }
            }
            Interaction::Pressed { box_id, .. } => Interaction::Selected { box_id },
            other => other,
        };
    }

    /// Settles the active box and then deselects it, leaving the slide idle.
    fn release(&mut self, effects: &mut Vec<Effect>) {
        self.settle(effects);
        if let Interaction::Selected { box_id } = std::mem::take(&mut self.state.interaction) {
            effects.push(Effect::Deselected { box_id });
        }
    }
}

fn reject(box_id: &str, reason: RejectReason) -> Effect {
    Effect::Rejected {
        box_id: box_id.to_string(),
        reason,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
