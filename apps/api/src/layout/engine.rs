//! Automatic content layout: turns one `ContentDescription` into positioned boxes.
//!
//! # Algorithm
//! 1. Slide 0 is the title slide: heading and subheading, centered as a block.
//! 2. Otherwise the placement hint is resolved into columns (`placement.rs`).
//! 3. A vertical cursor walks heading → subheading → key stats → body, appending boxes
//!    at the text column with per-field minimum heights and spacing.
//! 4. The body block stretches to the bottom margin so every slide uses its full height.
//! 5. The text column is checked against the bottom margin and compressed on overflow.
//! 6. The visual asset, if not consumed as background, is emitted in its own column.
//!
//! The function is total and deterministic: box ids are derived from the slide index and
//! the box's role, so identical input produces byte-identical output. Streamed content is
//! handled by calling it again with the accumulated description.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geometry::{round2, PercentRect};
use crate::layout::fill::{analyze_column_fill, compress_column, ColumnFill, ColumnFillVerdict};
use crate::layout::metrics::LayoutMetrics;
use crate::layout::placement::{plan_columns, ColumnPlan, PlacementMode};
use crate::models::content::{BodyContent, KeyStat, StructuredItem, VisualAsset};
use crate::models::{
    Background, BoxKind, ContentDescription, Slide, SlideBox, TextAlign, TextRole,
};

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "placement", rename_all = "snake_case")]
pub enum SlideTemplate {
    Title,
    Content(PlacementMode),
}

/// Everything the layout engine produces for one slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    pub boxes: Vec<SlideBox>,
    /// Set only when an image was consumed as the slide background.
    pub background: Option<Background>,
    pub template: SlideTemplate,
    /// Fill analysis of the text column. Absent for title slides.
    pub fill: Option<ColumnFill>,
}

impl SlideLayout {
    /// Replaces the slide's boxes wholesale; there is no incremental patching.
    pub fn apply_to(self, slide: &mut Slide) {
        slide.replace_boxes(self.boxes);
        if let Some(background) = self.background {
            slide.background = background;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out one slide. `slide_index == 0` selects the title template.
pub fn layout_slide(
    slide_index: usize,
    content: &ContentDescription,
    m: &LayoutMetrics,
) -> SlideLayout {
    if slide_index == 0 {
        return layout_title_slide(content, m);
    }

    let asset = content.visual_asset();
    let plan = plan_columns(content.placement, asset, m);
    let mut flow = Flow::new(slide_index, &plan);

    if let Some(heading) = content.heading_text() {
        flow.push_text(
            "heading",
            heading,
            TextRole::Heading,
            plan.heading_align,
            m.heading_height,
            m.heading_spacing,
        );
    }
    if let Some(subheading) = content.subheading_text() {
        flow.push_text(
            "subheading",
            subheading,
            TextRole::Subheading,
            plan.heading_align,
            m.subheading_height,
            m.subheading_spacing,
        );
    }
    if !content.key_stats.is_empty() {
        flow.push_stats(&content.key_stats, m);
    }
    if let Some(body) = content.body_content() {
        flow.push_body(body, plan.body_align, m);
    }

    let mut boxes = flow.boxes;
    let fill = analyze_column_fill(&boxes, plan.text_top, m.bottom_margin);
    if fill.verdict == ColumnFillVerdict::Overflow {
        warn!(
            slide = slide_index,
            overflow = fill.overflow,
            scale = fill.scale,
            "Layout: text column overflows the slide, compressing"
        );
        compress_column(&mut boxes, &fill);
    }

    let mut background = None;
    match (asset, plan.visual) {
        (Some(VisualAsset::Image(image)), None) if plan.mode == PlacementMode::Background => {
            background = Some(Background::Image {
                src: image.src.clone(),
                alt: image.alt.clone(),
            });
        }
        (Some(asset), Some(rect)) => boxes.push(visual_box(slide_index, asset, rect)),
        _ => {}
    }

    debug!(
        slide = slide_index,
        mode = ?plan.mode,
        boxes = boxes.len(),
        "Layout: content slide generated"
    );

    SlideLayout {
        boxes,
        background,
        template: SlideTemplate::Content(plan.mode),
        fill: Some(fill),
    }
}

/// Splits `width` into `count` equal sub-columns separated by `gap`.
///
/// Returns `(x, width)` per column. When the gaps alone would not fit, they are dropped
/// and the width is split evenly. Edges are rounded rather than widths, so columns stay
/// ordered, never have negative width, and the last one ends exactly at `x + width`.
pub fn stat_columns(x: f64, width: f64, count: usize, gap: f64) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let width = width.max(0.0);
    let gaps = gap * (count - 1) as f64;
    let gap = if gaps < width { gap } else { 0.0 };
    let column_width = (width - gap * (count - 1) as f64) / count as f64;
    let right = round2(x + width);

    (0..count)
        .map(|i| {
            let left = x + i as f64 * (column_width + gap);
            let cx = round2(left);
            let cr = if i + 1 == count {
                right
            } else {
                round2(left + column_width)
            };
            (cx, round2(cr - cx))
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Title slide
// ────────────────────────────────────────────────────────────────────────────

fn layout_title_slide(content: &ContentDescription, m: &LayoutMetrics) -> SlideLayout {
    let heading = content.heading_text();
    let subheading = content.subheading_text();

    let mut block_height = 0.0;
    if heading.is_some() {
        block_height += m.title_heading_height;
    }
    if subheading.is_some() {
        block_height += m.title_subheading_height;
    }
    if heading.is_some() && subheading.is_some() {
        block_height += m.title_gap;
    }

    let x = (100.0 - m.title_width) / 2.0;
    let mut y = (100.0 - block_height) / 2.0;
    let mut boxes = Vec::new();

    if let Some(text) = heading {
        boxes.push(SlideBox::new(
            "s0-heading",
            BoxKind::text(text, TextRole::Heading, TextAlign::Center),
            PercentRect::new(x, y, m.title_width, m.title_heading_height).rounded(),
        ));
        y += m.title_heading_height + m.title_gap;
    }
    if let Some(text) = subheading {
        boxes.push(SlideBox::new(
            "s0-subheading",
            BoxKind::text(text, TextRole::Subheading, TextAlign::Center),
            PercentRect::new(x, y, m.title_width, m.title_subheading_height).rounded(),
        ));
    }

    SlideLayout {
        boxes,
        background: None,
        template: SlideTemplate::Title,
        fill: None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vertical flow
// ────────────────────────────────────────────────────────────────────────────

/// Running state of the text column: the cursor and the boxes emitted so far.
struct Flow {
    slide_index: usize,
    text_x: f64,
    text_width: f64,
    cursor: f64,
    boxes: Vec<SlideBox>,
}

impl Flow {
    fn new(slide_index: usize, plan: &ColumnPlan) -> Self {
        Flow {
            slide_index,
            text_x: plan.text_x,
            text_width: plan.text_width,
            cursor: plan.text_top,
            boxes: Vec::new(),
        }
    }

    fn id(&self, suffix: &str) -> String {
        format!("s{}-{}", self.slide_index, suffix)
    }

    fn emit(&mut self, suffix: &str, kind: BoxKind, rect: PercentRect) {
        let id = self.id(suffix);
        self.boxes.push(SlideBox::new(id, kind, rect.rounded()));
    }

    /// Space between the cursor and the bottom margin.
    fn remaining(&self, m: &LayoutMetrics) -> f64 {
        100.0 - self.cursor - m.bottom_margin
    }

    fn push_text(
        &mut self,
        suffix: &str,
        text: &str,
        role: TextRole,
        align: TextAlign,
        height: f64,
        spacing: f64,
    ) {
        let rect = PercentRect::new(self.text_x, self.cursor, self.text_width, height);
        self.emit(suffix, BoxKind::text(text, role, align), rect);
        self.cursor += height + spacing;
    }

    fn push_stats(&mut self, stats: &[KeyStat], m: &LayoutMetrics) {
        let columns = stat_columns(self.text_x, self.text_width, stats.len(), m.stat_gap);
        let value_y = self.cursor;
        let label_y = value_y + m.stat_value_height;

        for (i, (stat, (cx, cw))) in stats.iter().zip(columns).enumerate() {
            self.emit(
                &format!("stat-{i}-value"),
                BoxKind::text(stat.value.as_str(), TextRole::StatValue, TextAlign::Center),
                PercentRect::new(cx, value_y, cw, m.stat_value_height),
            );
            self.emit(
                &format!("stat-{i}-label"),
                BoxKind::text(stat.label.as_str(), TextRole::StatLabel, TextAlign::Center),
                PercentRect::new(cx, label_y, cw, m.stat_label_height),
            );
        }
        self.cursor += m.stat_value_height + m.stat_label_height + m.stats_spacing;
    }

    fn push_body(&mut self, body: BodyContent<'_>, align: TextAlign, m: &LayoutMetrics) {
        let height = m.body_min_height.max(self.remaining(m));
        match body {
            BodyContent::Paragraph(text) => {
                self.push_text("body", text, TextRole::Paragraph, align, height, 0.0);
            }
            BodyContent::Bullets(bullets) => {
                let joined = bullets
                    .iter()
                    .map(|b| b.trim())
                    .filter(|b| !b.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                self.push_text("bullets", &joined, TextRole::BulletList, align, height, 0.0);
            }
            BodyContent::Items(items) => self.push_items(items, height, align, m),
        }
    }

    /// Structured items split the body block evenly; each slot is a title over a description.
    fn push_items(
        &mut self,
        items: &[StructuredItem],
        block_height: f64,
        align: TextAlign,
        m: &LayoutMetrics,
    ) {
        let count = items.len() as f64;
        let min_slot = m.item_title_height + m.item_description_min_height;
        let slot = ((block_height - m.item_gap * (count - 1.0)) / count).max(min_slot);

        for (i, item) in items.iter().enumerate() {
            let top = self.cursor;
            self.emit(
                &format!("item-{i}-title"),
                BoxKind::text(item.title.as_str(), TextRole::ItemTitle, align),
                PercentRect::new(self.text_x, top, self.text_width, m.item_title_height),
            );
            if !item.description.trim().is_empty() {
                self.emit(
                    &format!("item-{i}-description"),
                    BoxKind::text(
                        item.description.as_str(),
                        TextRole::ItemDescription,
                        align,
                    ),
                    PercentRect::new(
                        self.text_x,
                        top + m.item_title_height,
                        self.text_width,
                        slot - m.item_title_height,
                    ),
                );
            }
            self.cursor = top + slot + m.item_gap;
        }
    }
}

fn visual_box(slide_index: usize, asset: VisualAsset<'_>, rect: PercentRect) -> SlideBox {
    let (suffix, kind) = match asset {
        VisualAsset::Image(image) => (
            "image",
            BoxKind::Image {
                src: image.src.clone(),
                alt: image.alt.clone(),
            },
        ),
        VisualAsset::Chart(spec) => ("chart", BoxKind::Chart { spec: spec.clone() }),
    };
    SlideBox::new(format!("s{slide_index}-{suffix}"), kind, rect.rounded())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::default_layout_metrics;
    use crate::models::content::ImageRef;
    use crate::models::PlacementHint;
    use serde_json::json;

    const EPS: f64 = 1e-9;

    fn rich_content(placement: PlacementHint) -> ContentDescription {
        ContentDescription {
            heading: Some("Quarterly results".to_string()),
            subheading: Some("Growth across every region".to_string()),
            bullets: vec![
                "Revenue up 40%".to_string(),
                "Churn down to 2%".to_string(),
                "  ".to_string(),
                "Three new markets".to_string(),
            ],
            image: Some(ImageRef {
                src: "https://cdn.example.com/chart.png".to_string(),
                alt: Some("chart".to_string()),
            }),
            key_stats: vec![
                KeyStat {
                    value: "40%".to_string(),
                    label: "revenue".to_string(),
                },
                KeyStat {
                    value: "2%".to_string(),
                    label: "churn".to_string(),
                },
            ],
            placement,
            ..Default::default()
        }
    }

    fn overlap(a: &SlideBox, b: &SlideBox) -> bool {
        a.x < b.x + b.width - EPS
            && b.x < a.x + a.width - EPS
            && a.y < b.y + b.height - EPS
            && b.y < a.y + a.height - EPS
    }

    fn assert_no_overlap(boxes: &[SlideBox]) {
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                assert!(!overlap(a, b), "{} overlaps {}: {a:?} / {b:?}", a.id, b.id);
            }
        }
    }

    fn assert_inside_slide(boxes: &[SlideBox]) {
        for b in boxes {
            assert!(b.x >= 0.0 && b.y >= 0.0, "{b:?}");
            assert!(b.x + b.width <= 100.0 + EPS, "{b:?}");
            assert!(b.y + b.height <= 100.0 + EPS, "{b:?}");
        }
    }

    // ── title slide ─────────────────────────────────────────────────────────

    #[test]
    fn test_title_slide_is_centered_block() {
        let m = default_layout_metrics();
        let layout = layout_slide(0, &rich_content(PlacementHint::Left), &m);
        assert_eq!(layout.template, SlideTemplate::Title);
        assert!(layout.fill.is_none());
        assert_eq!(layout.boxes.len(), 2, "title slide ignores everything but headings");

        let heading = &layout.boxes[0];
        let sub = &layout.boxes[1];
        // Block: 20 + 4 + 10 = 34, so it starts at 33.
        assert_eq!(heading.rect(), PercentRect::new(10.0, 33.0, 80.0, 20.0));
        assert_eq!(sub.rect(), PercentRect::new(10.0, 57.0, 80.0, 10.0));
        let top_space = heading.y;
        let bottom_space = 100.0 - (sub.y + sub.height);
        assert!((top_space - bottom_space).abs() < EPS);
    }

    #[test]
    fn test_title_slide_heading_only() {
        let m = default_layout_metrics();
        let content = ContentDescription {
            heading: Some("Welcome".to_string()),
            ..Default::default()
        };
        let layout = layout_slide(0, &content, &m);
        assert_eq!(layout.boxes.len(), 1);
        assert_eq!(layout.boxes[0].y, 40.0);
    }

    // ── content slides ──────────────────────────────────────────────────────

    #[test]
    fn test_no_overlap_in_every_placement_mode() {
        let m = default_layout_metrics();
        for hint in [
            PlacementHint::Left,
            PlacementHint::Right,
            PlacementHint::Top,
            PlacementHint::Full,
            PlacementHint::Background,
            PlacementHint::None,
        ] {
            let layout = layout_slide(3, &rich_content(hint), &m);
            assert_no_overlap(&layout.boxes);
            assert_inside_slide(&layout.boxes);
        }
    }

    #[test]
    fn test_same_column_blocks_are_sequential_in_emission_order() {
        let m = default_layout_metrics();
        let layout = layout_slide(1, &rich_content(PlacementHint::Right), &m);
        let column: Vec<&SlideBox> = layout
            .boxes
            .iter()
            .filter(|b| b.x == 6.0 && b.width == 42.0)
            .collect();
        assert!(column.len() >= 3, "heading, subheading and bullets share the column");
        for pair in column.windows(2) {
            assert!(pair[0].y + pair[0].height <= pair[1].y + EPS);
        }
    }

    #[test]
    fn test_right_placement_geometry() {
        let m = default_layout_metrics();
        let layout = layout_slide(2, &rich_content(PlacementHint::Right), &m);
        let image = layout.boxes.iter().find(|b| b.id == "s2-image").unwrap();
        assert_eq!(image.rect(), PercentRect::new(52.0, 0.0, 48.0, 100.0));

        let heading = layout.boxes.iter().find(|b| b.id == "s2-heading").unwrap();
        assert_eq!(heading.rect(), PercentRect::new(6.0, 8.0, 42.0, 12.0));
        assert!(matches!(
            heading.kind,
            BoxKind::Text {
                align: TextAlign::Left,
                ..
            }
        ));
        assert_eq!(
            layout.template,
            SlideTemplate::Content(PlacementMode::Right)
        );
    }

    #[test]
    fn test_body_stretches_to_bottom_margin() {
        let m = default_layout_metrics();
        let content = ContentDescription {
            heading: Some("Why now".to_string()),
            body: Some("Because the market moved.".to_string()),
            ..Default::default()
        };
        let layout = layout_slide(1, &content, &m);
        let body = layout.boxes.iter().find(|b| b.id == "s1-body").unwrap();
        // Heading 8..20, spacing 3 → body starts at 23 and ends at 94.
        assert_eq!(body.y, 23.0);
        assert!((body.y + body.height - 94.0).abs() < EPS);
        assert_eq!(layout.fill.unwrap().verdict, ColumnFillVerdict::Fits);
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let m = default_layout_metrics();
        let layout = layout_slide(4, &ContentDescription::default(), &m);
        assert!(layout.boxes.is_empty());
        assert!(layout.background.is_none());

        let sub_only = ContentDescription {
            subheading: Some("Only a subheading".to_string()),
            ..Default::default()
        };
        let layout = layout_slide(4, &sub_only, &m);
        assert_eq!(layout.boxes.len(), 1);
        assert_eq!(layout.boxes[0].y, m.top_gutter);
    }

    #[test]
    fn test_background_mode_consumes_image() {
        let m = default_layout_metrics();
        let layout = layout_slide(1, &rich_content(PlacementHint::Background), &m);
        assert!(matches!(layout.background, Some(Background::Image { .. })));
        assert!(layout
            .boxes
            .iter()
            .all(|b| !matches!(b.kind, BoxKind::Image { .. })));
        let heading = layout.boxes.iter().find(|b| b.id == "s1-heading").unwrap();
        assert_eq!(heading.x, 12.0);
        assert_eq!(heading.width, 76.0);
    }

    #[test]
    fn test_chart_asset_is_emitted_as_chart_box() {
        let m = default_layout_metrics();
        let content = ContentDescription {
            heading: Some("Pipeline".to_string()),
            chart: Some(json!({ "kind": "bar", "series": [1, 2, 3] })),
            placement: PlacementHint::Left,
            ..Default::default()
        };
        let layout = layout_slide(1, &content, &m);
        let chart = layout.boxes.iter().find(|b| b.id == "s1-chart").unwrap();
        assert!(matches!(chart.kind, BoxKind::Chart { .. }));
        assert_eq!(chart.x, 0.0);
    }

    #[test]
    fn test_structured_items_share_body_block() {
        let m = default_layout_metrics();
        let content = ContentDescription {
            heading: Some("Roadmap".to_string()),
            items: vec![
                StructuredItem {
                    title: "Q1".to_string(),
                    description: "Foundations".to_string(),
                },
                StructuredItem {
                    title: "Q2".to_string(),
                    description: "Scale out".to_string(),
                },
                StructuredItem {
                    title: "Q3".to_string(),
                    description: String::new(),
                },
            ],
            ..Default::default()
        };
        let layout = layout_slide(1, &content, &m);
        let titles: Vec<&SlideBox> = layout
            .boxes
            .iter()
            .filter(|b| b.id.ends_with("-title"))
            .collect();
        assert_eq!(titles.len(), 3);
        assert!(layout.boxes.iter().all(|b| b.id != "s1-item-2-description"));
        assert_no_overlap(&layout.boxes);

        // Block from 23 to 94 = 71, minus two gaps of 2 → slots of 22.33.
        let last_desc = layout
            .boxes
            .iter()
            .find(|b| b.id == "s1-item-1-description")
            .unwrap();
        assert!(last_desc.height > m.item_description_min_height);
    }

    #[test]
    fn test_overflowing_content_is_compressed_inside_slide() {
        let m = default_layout_metrics();
        let mut content = rich_content(PlacementHint::Top);
        content.key_stats.push(KeyStat {
            value: "3".to_string(),
            label: "markets".to_string(),
        });
        let layout = layout_slide(5, &content, &m);
        let fill = layout.fill.unwrap();
        assert_eq!(fill.verdict, ColumnFillVerdict::Overflow);
        assert_no_overlap(&layout.boxes);
        assert_inside_slide(&layout.boxes);
        let lowest = layout
            .boxes
            .iter()
            .map(|b| b.y + b.height)
            .fold(0.0, f64::max);
        assert!(lowest <= 100.0 - m.bottom_margin + EPS);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let m = default_layout_metrics();
        for hint in [PlacementHint::Left, PlacementHint::Top, PlacementHint::None] {
            let content = rich_content(hint);
            let a = serde_json::to_string(&layout_slide(7, &content, &m)).unwrap();
            let b = serde_json::to_string(&layout_slide(7, &content, &m)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_apply_replaces_boxes_wholesale() {
        let m = default_layout_metrics();
        let mut slide = Slide::new("deck-1", "Results");
        slide.add_box(
            BoxKind::Divider { color: None },
            PercentRect::new(0.0, 50.0, 100.0, 1.0),
        );

        let partial = ContentDescription {
            heading: Some("Results".to_string()),
            ..Default::default()
        };
        layout_slide(1, &partial, &m).apply_to(&mut slide);
        assert_eq!(slide.boxes.len(), 1);

        let full = rich_content(PlacementHint::Full);
        layout_slide(1, &full, &m).apply_to(&mut slide);
        assert!(slide.boxes.len() > 1);
        assert!(matches!(slide.background, Background::Image { .. }));
    }

    // ── key stats ───────────────────────────────────────────────────────────

    #[test]
    fn test_three_stat_columns_across_seventy() {
        let columns = stat_columns(15.0, 70.0, 3, 2.0);
        assert_eq!(columns.len(), 3);
        let w0 = columns[0].1;
        assert!(columns.iter().all(|(_, w)| (*w - w0).abs() < EPS));
        for pair in columns.windows(2) {
            assert!(pair[0].0 + pair[0].1 <= pair[1].0 + EPS, "columns overlap");
        }
        let total: f64 = columns.iter().map(|(_, w)| w).sum::<f64>() + 2.0 * 2.0;
        assert!((total - 70.0).abs() < EPS, "total = {total}");
        let (last_x, last_w) = columns[2];
        assert!((last_x + last_w - 85.0).abs() < EPS);
    }

    #[test]
    fn test_uneven_stat_columns_still_sum_exactly() {
        let columns = stat_columns(8.0, 84.0, 7, 2.0);
        let (last_x, last_w) = columns[6];
        assert!((last_x + last_w - 92.0).abs() < EPS);
        assert!(stat_columns(0.0, 50.0, 0, 2.0).is_empty());
    }

    #[test]
    fn test_stat_columns_drop_gaps_that_do_not_fit() {
        for count in [23, 30, 43, 200] {
            let columns = stat_columns(52.0, 42.0, count, 2.0);
            assert_eq!(columns.len(), count);
            assert!(columns.iter().all(|(_, w)| *w >= 0.0), "{count}: {columns:?}");
            for pair in columns.windows(2) {
                assert!(pair[0].0 + pair[0].1 <= pair[1].0 + EPS, "{count}: columns overlap");
            }
            let (last_x, last_w) = columns[count - 1];
            assert!((last_x + last_w - 94.0).abs() < EPS, "{count}");
        }
    }

    #[test]
    fn test_many_stats_stay_out_of_the_visual_column() {
        let m = default_layout_metrics();
        let mut content = rich_content(PlacementHint::Right);
        content.key_stats = (0..30)
            .map(|i| KeyStat {
                value: format!("{i}"),
                label: "metric".to_string(),
            })
            .collect();
        let layout = layout_slide(1, &content, &m);
        assert!(layout.boxes.iter().all(|b| b.width >= 0.0));
        assert_no_overlap(&layout.boxes);
        assert_inside_slide(&layout.boxes);
    }

    #[test]
    fn test_none_hint_keeps_the_asset_in_a_top_band() {
        let m = default_layout_metrics();
        let layout = layout_slide(2, &rich_content(PlacementHint::None), &m);
        assert_eq!(layout.template, SlideTemplate::Content(PlacementMode::Top));
        assert!(layout.boxes.iter().any(|b| b.id == "s2-image"));
        assert_no_overlap(&layout.boxes);
    }

    #[test]
    fn test_stat_value_stacked_above_label() {
        let m = default_layout_metrics();
        let layout = layout_slide(1, &rich_content(PlacementHint::None), &m);
        let value = layout.boxes.iter().find(|b| b.id == "s1-stat-1-value").unwrap();
        let label = layout.boxes.iter().find(|b| b.id == "s1-stat-1-label").unwrap();
        assert_eq!(value.x, label.x);
        assert_eq!(value.width, label.width);
        assert!((value.y + value.height - label.y).abs() < EPS);
        assert!(value.height > label.height);
    }
}
