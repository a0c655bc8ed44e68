//! Canvas item definitions.

mod image;
mod text;
mod video;

pub use image::ImageItem;
pub use text::TextBlock;
pub use video::VideoItem;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for canvas items.
pub type ItemId = Uuid;

/// The three kinds of canvas item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Image,
    Text,
    Video,
}

/// Enum wrapper over all item types (for uniform dispatch and serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Item {
    Image(ImageItem),
    Text(TextBlock),
    Video(VideoItem),
}

impl Item {
    pub fn id(&self) -> ItemId {
        match self {
            Item::Image(i) => i.id,
            Item::Text(t) => t.id,
            Item::Video(v) => v.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Image(_) => ItemKind::Image,
            Item::Text(_) => ItemKind::Text,
            Item::Video(_) => ItemKind::Video,
        }
    }

    pub fn current_position(&self) -> Point {
        match self {
            Item::Image(i) => i.current_position,
            Item::Text(t) => t.current_position,
            Item::Video(v) => v.current_position,
        }
    }

    pub fn default_position(&self) -> Point {
        match self {
            Item::Image(i) => i.default_position,
            Item::Text(t) => t.default_position,
            Item::Video(v) => v.default_position,
        }
    }

    pub fn set_current_position(&mut self, position: Point) {
        match self {
            Item::Image(i) => i.current_position = position,
            Item::Text(t) => t.current_position = position,
            Item::Video(v) => v.current_position = position,
        }
    }

    /// Description text, if this item kind carries one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Item::Image(i) => i.description.as_deref(),
            Item::Video(v) => v.description.as_deref(),
            Item::Text(_) => None,
        }
    }

    /// Whether the item is shown at its expanded display size.
    /// Text blocks have a single size and always report false.
    pub fn is_expanded(&self) -> bool {
        match self {
            Item::Image(i) => i.is_expanded,
            Item::Video(v) => v.is_expanded,
            Item::Text(_) => false,
        }
    }
}
