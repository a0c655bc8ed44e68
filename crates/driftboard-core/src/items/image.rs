//! Image items backed by a thumbnail rendition and an original URL.

use super::ItemId;
use chrono::{DateTime, Utc};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A draggable image on the canvas.
///
/// `width` and `height` are the intrinsic pixel dimensions of the source
/// image; the display size is derived from them by the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageItem {
    pub id: ItemId,
    /// Thumbnail rendition URL (what the canvas normally shows).
    pub src: String,
    /// Full-resolution source URL.
    pub original_src: String,
    /// Alternative text.
    pub alt: String,
    pub current_position: Point,
    pub default_position: Point,
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_expanded: bool,
    pub created_at: DateTime<Utc>,
}

impl ImageItem {
    /// Create a new image item at its default position.
    pub fn new(
        src: impl Into<String>,
        original_src: impl Into<String>,
        alt: impl Into<String>,
        default_position: Point,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            src: src.into(),
            original_src: original_src.into(),
            alt: alt.into(),
            current_position: default_position,
            default_position,
            width,
            height,
            description: None,
            is_expanded: false,
            created_at: Utc::now(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Intrinsic height-over-width ratio, used to scale to a display width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_default_position() {
        let img = ImageItem::new("t.jpg", "o.jpg", "x", Point::new(800.0, 200.0), 300.0, 400.0);
        assert_eq!(img.current_position, img.default_position);
        assert!(!img.is_expanded);
        assert!(img.description.is_none());
    }

    #[test]
    fn test_aspect_ratio() {
        let img = ImageItem::new("t.jpg", "o.jpg", "x", Point::ZERO, 400.0, 300.0);
        assert!((img.aspect_ratio() - 0.75).abs() < f64::EPSILON);
    }
}
