use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{de_percent, PercentRect};

// ────────────────────────────────────────────────────────────────────────────
// Box payloads
// ────────────────────────────────────────────────────────────────────────────

/// What a generated text box represents. Lets hosts style generated content
/// without re-deriving it from position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Heading,
    Subheading,
    Paragraph,
    BulletList,
    ItemTitle,
    ItemDescription,
    StatValue,
    StatLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Kind-specific payload. Opaque to the geometry core; only `is_text_editable`
/// matters to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoxKind {
    Text {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        role: Option<TextRole>,
        #[serde(default)]
        align: TextAlign,
    },
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    Chart {
        spec: serde_json::Value,
    },
    Shape {
        shape: String,
        #[serde(default)]
        text: String,
    },
    Video {
        src: String,
    },
    Divider {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    Button {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
    Code {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

impl BoxKind {
    /// Only text and shape boxes hand off to the text-editing collaborator.
    pub fn is_text_editable(&self) -> bool {
        matches!(self, BoxKind::Text { .. } | BoxKind::Shape { .. })
    }

    pub fn text(content: impl Into<String>, role: TextRole, align: TextAlign) -> Self {
        BoxKind::Text {
            content: content.into(),
            role: Some(role),
            align,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Box
// ────────────────────────────────────────────────────────────────────────────

fn default_z_index() -> i32 {
    1
}

fn default_opacity() -> f64 {
    1.0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A positioned, typed content unit on a slide. Geometry is in percent of the slide.
///
/// Serialized flat: `{ id, type, x, y, width, height, zIndex, locked?, opacity, ...payload }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideBox {
    pub id: String,
    #[serde(flatten)]
    pub kind: BoxKind,
    #[serde(deserialize_with = "de_percent")]
    pub x: f64,
    #[serde(deserialize_with = "de_percent")]
    pub y: f64,
    #[serde(deserialize_with = "de_percent")]
    pub width: f64,
    #[serde(deserialize_with = "de_percent")]
    pub height: f64,
    #[serde(default = "default_z_index")]
    pub z_index: i32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl SlideBox {
    pub fn new(id: impl Into<String>, kind: BoxKind, rect: PercentRect) -> Self {
        SlideBox {
            id: id.into(),
            kind,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            z_index: default_z_index(),
            locked: false,
            opacity: default_opacity(),
        }
    }

    pub fn rect(&self) -> PercentRect {
        PercentRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_rect(&mut self, rect: PercentRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Slide
// ────────────────────────────────────────────────────────────────────────────

/// Slide background. Opaque to geometry; the layout engine may set it when an
/// image is placed in `full`/`background` mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    #[default]
    None,
    Color {
        value: String,
    },
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub boxes: Vec<SlideBox>,
}

impl Slide {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Slide {
            id: id.into(),
            title: title.into(),
            background: Background::None,
            boxes: Vec::new(),
        }
    }

    pub fn find(&self, box_id: &str) -> Option<&SlideBox> {
        self.boxes.iter().find(|b| b.id == box_id)
    }

    pub fn find_mut(&mut self, box_id: &str) -> Option<&mut SlideBox> {
        self.boxes.iter_mut().find(|b| b.id == box_id)
    }

    /// Removes and returns the box, preserving the order of the rest.
    pub fn remove(&mut self, box_id: &str) -> Option<SlideBox> {
        let idx = self.boxes.iter().position(|b| b.id == box_id)?;
        Some(self.boxes.remove(idx))
    }

    pub fn max_z_index(&self) -> i32 {
        self.boxes.iter().map(|b| b.z_index).max().unwrap_or(0)
    }

    /// Appends a user-created box on top of everything else. Returns its new id.
    ///
    /// The caller supplies the default geometry; it is clamped into the slide.
    pub fn add_box(&mut self, kind: BoxKind, rect: PercentRect) -> String {
        let id = Uuid::new_v4().to_string();
        let mut new_box = SlideBox::new(id.clone(), kind, rect.clamped_to_slide());
        new_box.z_index = self.max_z_index() + 1;
        self.boxes.push(new_box);
        id
    }

    /// Replaces every box with a freshly generated set (layout re-invocation).
    pub fn replace_boxes(&mut self, boxes: Vec<SlideBox>) {
        self.boxes = boxes;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
