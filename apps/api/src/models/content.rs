use serde::{Deserialize, Serialize};

/// Where the generator wants the visual asset relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementHint {
    Left,
    Right,
    Top,
    Full,
    Background,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A headline number with its caption, e.g. `{ value: "40%", label: "faster builds" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Unstructured generated content for one slide. Every field is optional.
///
/// The body is one of `body`, `bullets` or `items`; when several are present the
/// first non-empty one in that order wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentDescription {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub items: Vec<StructuredItem>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub chart: Option<serde_json::Value>,
    #[serde(default)]
    pub key_stats: Vec<KeyStat>,
    #[serde(default)]
    pub placement: PlacementHint,
}

/// The body variant actually laid out, after the first-non-empty rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyContent<'a> {
    Paragraph(&'a str),
    Bullets(&'a [String]),
    Items(&'a [StructuredItem]),
}

/// The visual asset actually laid out. Images win over charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualAsset<'a> {
    Image(&'a ImageRef),
    Chart(&'a serde_json::Value),
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ContentDescription {
    pub fn heading_text(&self) -> Option<&str> {
        non_blank(&self.heading)
    }

    pub fn subheading_text(&self) -> Option<&str> {
        non_blank(&self.subheading)
    }

    pub fn body_content(&self) -> Option<BodyContent<'_>> {
        if let Some(paragraph) = non_blank(&self.body) {
            return Some(BodyContent::Paragraph(paragraph));
        }
        if self.bullets.iter().any(|b| !b.trim().is_empty()) {
            return Some(BodyContent::Bullets(&self.bullets));
        }
        if !self.items.is_empty() {
            return Some(BodyContent::Items(&self.items));
        }
        None
    }

    pub fn visual_asset(&self) -> Option<VisualAsset<'_>> {
        if let Some(image) = self.image.as_ref().filter(|i| !i.src.trim().is_empty()) {
            return Some(VisualAsset::Image(image));
        }
        self.chart
            .as_ref()
            .filter(|c| !c.is_null())
            .map(VisualAsset::Chart)
    }
}
