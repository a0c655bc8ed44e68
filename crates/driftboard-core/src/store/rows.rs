//! Row representations matching the remote table schema.
//!
//! Default positions are stored as separate x/y columns while the current
//! position is an optional structured value, mirroring the remote tables.
//! Conversions between rows and items live here, including the position
//! fallback chain: current, then default, then origin for malformed rows.

use super::PositionUpdate;
use crate::items::{ImageItem, ItemId, TextBlock, VideoItem};
use chrono::{DateTime, Utc};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A row of the images table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRow {
    pub id: ItemId,
    pub src: String,
    #[serde(default)]
    pub original_src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub default_position_x: f64,
    #[serde(default)]
    pub default_position_y: f64,
    #[serde(default)]
    pub current_position: Option<Point>,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_expanded: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// A row of the text_blocks table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRow {
    pub id: ItemId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub default_position_x: f64,
    #[serde(default)]
    pub default_position_y: f64,
    #[serde(default)]
    pub current_position: Option<Point>,
    pub width: f64,
    pub created_at: DateTime<Utc>,
}

/// A row of the videos table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRow {
    pub id: ItemId,
    pub src: String,
    #[serde(default)]
    pub default_position_x: f64,
    #[serde(default)]
    pub default_position_y: f64,
    #[serde(default)]
    pub current_position: Option<Point>,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_expanded: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Resolve an item's live position from its row columns.
fn resolve_position(current: Option<Point>, default: Point) -> Point {
    current.unwrap_or(default)
}

impl ImageRow {
    pub fn from_item(item: &ImageItem) -> Self {
        Self {
            id: item.id,
            src: item.src.clone(),
            original_src: item.original_src.clone(),
            alt: item.alt.clone(),
            default_position_x: item.default_position.x,
            default_position_y: item.default_position.y,
            current_position: Some(item.current_position),
            width: item.width,
            height: item.height,
            description: item.description.clone(),
            is_expanded: Some(item.is_expanded),
            created_at: item.created_at,
        }
    }

    pub fn into_item(self) -> ImageItem {
        let default_position = Point::new(self.default_position_x, self.default_position_y);
        ImageItem {
            id: self.id,
            src: self.src,
            original_src: self.original_src,
            alt: self.alt,
            current_position: resolve_position(self.current_position, default_position),
            default_position,
            width: self.width,
            height: self.height,
            description: self.description,
            is_expanded: self.is_expanded.unwrap_or(false),
            created_at: self.created_at,
        }
    }

    /// Apply one row of a bulk save.
    pub fn apply_update(&mut self, update: &PositionUpdate) {
        self.current_position = Some(update.position);
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(is_expanded) = update.is_expanded {
            self.is_expanded = Some(is_expanded);
        }
    }
}

impl TextRow {
    pub fn from_item(item: &TextBlock) -> Self {
        Self {
            id: item.id,
            content: item.content.clone(),
            default_position_x: item.default_position.x,
            default_position_y: item.default_position.y,
            current_position: Some(item.current_position),
            width: item.width,
            created_at: item.created_at,
        }
    }

    pub fn into_item(self) -> TextBlock {
        let default_position = Point::new(self.default_position_x, self.default_position_y);
        TextBlock {
            id: self.id,
            content: self.content,
            current_position: resolve_position(self.current_position, default_position),
            default_position,
            width: self.width,
            created_at: self.created_at,
        }
    }

    pub fn apply_update(&mut self, update: &PositionUpdate) {
        self.current_position = Some(update.position);
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
    }
}

impl VideoRow {
    pub fn from_item(item: &VideoItem) -> Self {
        Self {
            id: item.id,
            src: item.src.clone(),
            default_position_x: item.default_position.x,
            default_position_y: item.default_position.y,
            current_position: Some(item.current_position),
            width: item.width,
            height: item.height,
            description: item.description.clone(),
            is_expanded: Some(item.is_expanded),
            created_at: item.created_at,
        }
    }

    pub fn into_item(self) -> VideoItem {
        let default_position = Point::new(self.default_position_x, self.default_position_y);
        VideoItem {
            id: self.id,
            src: self.src,
            current_position: resolve_position(self.current_position, default_position),
            default_position,
            width: self.width,
            height: self.height,
            description: self.description,
            is_expanded: self.is_expanded.unwrap_or(false),
            autoplay: true,
            looped: true,
            muted: true,
            created_at: self.created_at,
        }
    }

    pub fn apply_update(&mut self, update: &PositionUpdate) {
        self.current_position = Some(update.position);
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(is_expanded) = update.is_expanded {
            self.is_expanded = Some(is_expanded);
        }
    }
}
