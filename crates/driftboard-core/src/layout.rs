//! "Clean up" layout: greedy shortest-column packing of item bounding boxes.

use crate::items::{ImageItem, Item, TextBlock, VideoItem};
use crate::items::ItemId;
use kurbo::Point;

/// Column width of the packed grid.
pub const COLUMN_WIDTH: f64 = 300.0;
/// Gap between columns and between stacked items.
pub const COLUMN_GAP: f64 = 32.0;
/// Display width for collapsed images and videos.
pub const COLLAPSED_WIDTH: f64 = 300.0;
/// Display width for expanded images and videos.
pub const EXPANDED_WIDTH: f64 = 600.0;
/// Fixed display height for text blocks.
pub const TEXT_HEIGHT: f64 = 100.0;

/// Characters assumed to fit on one description line.
const DESCRIPTION_CHARS_PER_LINE: usize = 40;
/// Estimated height of one description line.
const DESCRIPTION_LINE_HEIGHT: f64 = 24.0;

/// Measured bounding box of an item, ready for packing.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem {
    pub id: ItemId,
    pub width: f64,
    pub height: f64,
}

/// Measure an item's display bounding box.
///
/// Images and videos scale their intrinsic aspect ratio to the display
/// width (expanded or collapsed) and add an estimated description block.
/// Text blocks have a fixed nominal size.
pub fn measure(item: &Item) -> LayoutItem {
    match item {
        Item::Image(img) => measure_image(img),
        Item::Video(vid) => measure_video(vid),
        Item::Text(txt) => measure_text(txt),
    }
}

pub fn measure_image(img: &ImageItem) -> LayoutItem {
    let (width, height) = media_display_size(img.aspect_ratio(), img.is_expanded);
    LayoutItem {
        id: img.id,
        width,
        height: height + description_height(img.description.as_deref()),
    }
}

pub fn measure_video(vid: &VideoItem) -> LayoutItem {
    let (width, height) = media_display_size(vid.aspect_ratio(), vid.is_expanded);
    LayoutItem {
        id: vid.id,
        width,
        height: height + description_height(vid.description.as_deref()),
    }
}

pub fn measure_text(txt: &TextBlock) -> LayoutItem {
    LayoutItem {
        id: txt.id,
        width: txt.width,
        height: TEXT_HEIGHT,
    }
}

/// Display size of an image/video scaled to its current display width.
///
/// A row with zero or garbage intrinsic dimensions yields a non-finite or
/// non-positive aspect ratio; it is treated as square so a single bad row
/// cannot poison the column heights of everything packed after it.
fn media_display_size(aspect_ratio: f64, is_expanded: bool) -> (f64, f64) {
    let width = if is_expanded { EXPANDED_WIDTH } else { COLLAPSED_WIDTH };
    let height = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        (width * aspect_ratio).round()
    } else {
        width
    };
    (width, height)
}

/// Estimated description block height: a characters-per-line heuristic,
/// not true text measurement.
fn description_height(description: Option<&str>) -> f64 {
    match description {
        Some(text) if !text.is_empty() => {
            let lines = text.chars().count().div_ceil(DESCRIPTION_CHARS_PER_LINE);
            lines as f64 * DESCRIPTION_LINE_HEIGHT
        }
        _ => 0.0,
    }
}

/// Compute a non-overlapping grid arrangement of the given bounding boxes.
///
/// Greedy shortest-column-first packing: columns are sized to the viewport
/// (at least one), each item goes to the currently-shortest column at that
/// column's running height, and the column advances by the item's height
/// plus the gap. Output order matches input order. Deterministic for
/// identical `(items, viewport_width)` inputs.
pub fn layout(items: &[LayoutItem], viewport_width: f64) -> Vec<Point> {
    let container_width = (viewport_width - COLUMN_GAP * 2.0).max(0.0);
    let column_count = ((container_width / (COLUMN_WIDTH + COLUMN_GAP)).floor() as usize).max(1);

    let mut columns = vec![COLUMN_GAP; column_count];
    let mut positions = Vec::with_capacity(items.len());

    // Center the column block inside the container.
    let total_width = column_count as f64 * COLUMN_WIDTH + (column_count - 1) as f64 * COLUMN_GAP;
    let start_x = (container_width - total_width) / 2.0 + COLUMN_GAP;

    for item in items {
        // First shortest column wins ties, keeping the packing deterministic.
        let mut shortest = 0;
        for (i, height) in columns.iter().enumerate() {
            if *height < columns[shortest] {
                shortest = i;
            }
        }

        let x = start_x + shortest as f64 * (COLUMN_WIDTH + COLUMN_GAP);
        let y = columns[shortest];
        positions.push(Point::new(x, y));

        columns[shortest] = y + item.height + COLUMN_GAP;
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn boxed(height: f64) -> LayoutItem {
        LayoutItem {
            id: Uuid::new_v4(),
            width: COLUMN_WIDTH,
            height,
        }
    }

    #[test]
    fn test_one_position_per_item_in_order() {
        let items = vec![boxed(100.0), boxed(200.0), boxed(50.0)];
        let positions = layout(&items, 1600.0);
        assert_eq!(positions.len(), items.len());
    }

    #[test]
    fn test_single_column_stacks_cumulatively() {
        // A viewport too narrow for two columns still gets one.
        let items = vec![boxed(400.0), boxed(300.0), boxed(500.0), boxed(TEXT_HEIGHT)];
        let positions = layout(&items, 400.0);

        assert_eq!(positions[0].y, COLUMN_GAP);
        assert_eq!(positions[1].y, COLUMN_GAP + 400.0 + COLUMN_GAP);
        assert_eq!(positions[2].y, COLUMN_GAP + 400.0 + COLUMN_GAP + 300.0 + COLUMN_GAP);
        assert_eq!(
            positions[3].y,
            COLUMN_GAP + 400.0 + COLUMN_GAP + 300.0 + COLUMN_GAP + 500.0 + COLUMN_GAP
        );
        // All in the same column.
        assert!(positions.iter().all(|p| p.x == positions[0].x));
    }

    #[test]
    fn test_minimum_one_column() {
        let items = vec![boxed(100.0)];
        let positions = layout(&items, 0.0);
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn test_no_vertical_overlap_within_columns() {
        let heights = [400.0, 120.0, 333.0, 80.0, 512.0, 64.0, 250.0];
        let items: Vec<LayoutItem> = heights.iter().map(|&h| boxed(h)).collect();
        let positions = layout(&items, 1100.0);

        for (i, a) in positions.iter().enumerate() {
            for (j, b) in positions.iter().enumerate() {
                if i == j || a.x != b.x {
                    continue;
                }
                let (top, top_h, bottom) = if a.y < b.y {
                    (a, items[i].height, b)
                } else {
                    (b, items[j].height, a)
                };
                assert!(top.y + top_h <= bottom.y, "items {i} and {j} overlap");
            }
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let items = vec![boxed(400.0), boxed(300.0), boxed(500.0)];
        let first = layout(&items, 1280.0);
        let second = layout(&items, 1280.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_shortest_column_receives_next_item() {
        // Two columns: after 400 and 100, the second column is shorter.
        let items = vec![boxed(400.0), boxed(100.0), boxed(50.0)];
        let positions = layout(&items, 2.0 * COLUMN_GAP + 2.0 * (COLUMN_WIDTH + COLUMN_GAP));
        assert_eq!(positions[2].x, positions[1].x);
        assert_eq!(positions[2].y, COLUMN_GAP + 100.0 + COLUMN_GAP);
    }

    #[test]
    fn test_measure_image_scales_aspect_ratio() {
        use crate::items::ImageItem;
        use kurbo::Point;

        let mut img = ImageItem::new("t.jpg", "o.jpg", "x", Point::ZERO, 400.0, 300.0);
        let collapsed = measure_image(&img);
        assert_eq!(collapsed.width, COLLAPSED_WIDTH);
        assert_eq!(collapsed.height, 225.0);

        img.is_expanded = true;
        let expanded = measure_image(&img);
        assert_eq!(expanded.width, EXPANDED_WIDTH);
        assert_eq!(expanded.height, 450.0);
    }

    #[test]
    fn test_measure_zero_width_media_stays_finite() {
        use crate::items::{ImageItem, VideoItem};
        use kurbo::Point;

        // width 0 gives an infinite aspect ratio; width 0 and height 0 give NaN.
        let img = ImageItem::new("t.jpg", "o.jpg", "x", Point::ZERO, 0.0, 400.0);
        let vid = VideoItem::new("v.mp4", Point::ZERO, 0.0, 0.0);

        let measured_img = measure_image(&img);
        let measured_vid = measure_video(&vid);
        assert_eq!(measured_img.height, COLLAPSED_WIDTH);
        assert_eq!(measured_vid.height, COLLAPSED_WIDTH);

        // Packing after a malformed item still produces finite positions.
        let items = vec![measured_img, boxed(200.0)];
        let positions = layout(&items, 400.0);
        assert!(positions.iter().all(|p| p.y.is_finite()));
        assert_eq!(positions[1].y, COLUMN_GAP + COLLAPSED_WIDTH + COLUMN_GAP);
    }

    #[test]
    fn test_measure_adds_description_height() {
        use crate::items::ImageItem;
        use kurbo::Point;

        let plain = ImageItem::new("t.jpg", "o.jpg", "x", Point::ZERO, 300.0, 300.0);
        let described = plain.clone().with_description("a".repeat(90));

        let without = measure_image(&plain);
        let with = measure_image(&described);
        // 90 chars at 40 per line is 3 estimated lines.
        assert_eq!(with.height - without.height, 3.0 * 24.0);
    }

    #[test]
    fn test_measure_text_is_fixed_size() {
        use crate::items::TextBlock;
        use kurbo::Point;

        let block = TextBlock::new("anything at all", Point::ZERO);
        let measured = measure_text(&block);
        assert_eq!(measured.width, TextBlock::NOMINAL_WIDTH);
        assert_eq!(measured.height, TEXT_HEIGHT);
    }
}
