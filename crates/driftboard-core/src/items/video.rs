//! Video items with fixed playback behavior.

use super::ItemId;
use chrono::{DateTime, Utc};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A draggable, auto-playing video on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: ItemId,
    pub src: String,
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
    #[serde(default = "default_true")]
    pub autoplay: bool,
    #[serde(default = "default_true")]
    pub looped: bool,
    #[serde(default = "default_true")]
    pub muted: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl VideoItem {
    /// Create a new video item at its default position.
    /// Playback flags default to autoplay/loop/muted.
    pub fn new(
        src: impl Into<String>,
        default_position: Point,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            src: src.into(),
            current_position: default_position,
            default_position,
            width,
            height,
            description: None,
            is_expanded: false,
            autoplay: true,
            looped: true,
            muted: true,
            created_at: Utc::now(),
        }
    }

    /// Intrinsic height-over-width ratio, used to scale to a display width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }
}
