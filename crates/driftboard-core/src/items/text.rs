//! Free-form text blocks.

use super::ItemId;
use chrono::{DateTime, Utc};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A draggable block of free-form text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    pub id: ItemId,
    /// Arbitrary content, empty allowed.
    pub content: String,
    pub current_position: Point,
    pub default_position: Point,
    /// Nominal display width; text blocks do not resize.
    pub width: f64,
    pub created_at: DateTime<Utc>,
}

impl TextBlock {
    /// Nominal width of every text block.
    pub const NOMINAL_WIDTH: f64 = 300.0;

    /// Create a new text block at its default position.
    pub fn new(content: impl Into<String>, default_position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            current_position: default_position,
            default_position,
            width: Self::NOMINAL_WIDTH,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_text_block() {
        let block = TextBlock::new("", Point::new(100.0, 100.0));
        assert!(block.content.is_empty());
        assert_eq!(block.width, TextBlock::NOMINAL_WIDTH);
        assert_eq!(block.current_position, block.default_position);
    }
}
