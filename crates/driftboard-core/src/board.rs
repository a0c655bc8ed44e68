//! Board state: the in-memory collections behind the canvas.

use crate::items::{ImageItem, ItemId, ItemKind, TextBlock, VideoItem};
use crate::layout::{self, LayoutItem};
use crate::snap::snap_position;
use crate::store::{PositionUpdate, SaveBatch};
use kurbo::Point;

/// Owns the three item collections and all mutation on them.
///
/// Collections keep their load order (creation time ascending). Every
/// successful mutation marks the board-wide unsaved-changes flag; remote
/// persistence only happens when the caller snapshots a [`SaveBatch`].
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub images: Vec<ImageItem>,
    pub texts: Vec<TextBlock>,
    pub videos: Vec<VideoItem>,
    unsaved_changes: bool,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from already-fetched collections.
    pub fn from_collections(
        images: Vec<ImageItem>,
        texts: Vec<TextBlock>,
        videos: Vec<VideoItem>,
    ) -> Self {
        Self {
            images,
            texts,
            videos,
            unsaved_changes: false,
        }
    }

    /// Whether any mutation happened since the last save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Clear the unsaved-changes flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.unsaved_changes = false;
    }

    /// Current position of an item, if it exists.
    pub fn position_of(&self, kind: ItemKind, id: ItemId) -> Option<Point> {
        match kind {
            ItemKind::Image => self.images.iter().find(|i| i.id == id).map(|i| i.current_position),
            ItemKind::Text => self.texts.iter().find(|t| t.id == id).map(|t| t.current_position),
            ItemKind::Video => self.videos.iter().find(|v| v.id == id).map(|v| v.current_position),
        }
    }

    /// Move an item to a new position, snapped to the grid.
    ///
    /// Returns the snapped position, or `None` when the id is unknown
    /// (in which case the board is left untouched).
    pub fn set_position(&mut self, kind: ItemKind, id: ItemId, position: Point) -> Option<Point> {
        let snapped = snap_position(position);
        let found = match kind {
            ItemKind::Image => self
                .images
                .iter_mut()
                .find(|i| i.id == id)
                .map(|i| i.current_position = snapped)
                .is_some(),
            ItemKind::Text => self
                .texts
                .iter_mut()
                .find(|t| t.id == id)
                .map(|t| t.current_position = snapped)
                .is_some(),
            ItemKind::Video => self
                .videos
                .iter_mut()
                .find(|v| v.id == id)
                .map(|v| v.current_position = snapped)
                .is_some(),
        };
        if found {
            self.unsaved_changes = true;
            Some(snapped)
        } else {
            None
        }
    }

    /// Replace the description of an image or video. Arbitrary strings,
    /// including empty, are accepted.
    pub fn set_description(&mut self, id: ItemId, description: impl Into<String>) -> bool {
        let description = description.into();
        if let Some(img) = self.images.iter_mut().find(|i| i.id == id) {
            img.description = Some(description);
        } else if let Some(vid) = self.videos.iter_mut().find(|v| v.id == id) {
            vid.description = Some(description);
        } else {
            return false;
        }
        self.unsaved_changes = true;
        true
    }

    /// Replace the content of a text block. No validation is performed.
    pub fn set_content(&mut self, id: ItemId, content: impl Into<String>) -> bool {
        if let Some(block) = self.texts.iter_mut().find(|t| t.id == id) {
            block.content = content.into();
            self.unsaved_changes = true;
            true
        } else {
            false
        }
    }

    /// Toggle an image or video between its collapsed and expanded display
    /// size. Text blocks have a single size and are never toggled.
    pub fn toggle_expanded(&mut self, kind: ItemKind, id: ItemId) -> bool {
        let found = match kind {
            ItemKind::Image => self
                .images
                .iter_mut()
                .find(|i| i.id == id)
                .map(|i| i.is_expanded = !i.is_expanded)
                .is_some(),
            ItemKind::Video => self
                .videos
                .iter_mut()
                .find(|v| v.id == id)
                .map(|v| v.is_expanded = !v.is_expanded)
                .is_some(),
            ItemKind::Text => false,
        };
        if found {
            self.unsaved_changes = true;
        }
        found
    }

    /// Add a new text block. The only in-app creation path; images and
    /// videos arrive from the remote store.
    pub fn add_text(&mut self, block: TextBlock) {
        self.texts.push(block);
        self.unsaved_changes = true;
    }

    /// Remove a text block, returning it if present.
    pub fn remove_text(&mut self, id: ItemId) -> Option<TextBlock> {
        let index = self.texts.iter().position(|t| t.id == id)?;
        self.unsaved_changes = true;
        Some(self.texts.remove(index))
    }

    /// Recompute every item's position with the layout engine.
    ///
    /// Items are packed in collection order (images, videos, texts) and the
    /// engine's output is written back verbatim, so re-running with
    /// unchanged inputs is idempotent.
    pub fn clean_up(&mut self, viewport_width: f64) {
        let mut measured: Vec<LayoutItem> = Vec::with_capacity(self.len());
        measured.extend(self.images.iter().map(layout::measure_image));
        measured.extend(self.videos.iter().map(layout::measure_video));
        measured.extend(self.texts.iter().map(layout::measure_text));

        let positions = layout::layout(&measured, viewport_width);
        let mut positions = positions.into_iter();

        for img in &mut self.images {
            if let Some(p) = positions.next() {
                img.current_position = p;
            }
        }
        for vid in &mut self.videos {
            if let Some(p) = positions.next() {
                vid.current_position = p;
            }
        }
        for txt in &mut self.texts {
            if let Some(p) = positions.next() {
                txt.current_position = p;
            }
        }
        self.unsaved_changes = true;
    }

    /// Snapshot the current in-memory state as a bulk save payload.
    pub fn save_batch(&self) -> SaveBatch {
        SaveBatch {
            images: self
                .images
                .iter()
                .map(|i| PositionUpdate {
                    id: i.id,
                    position: i.current_position,
                    description: i.description.clone(),
                    is_expanded: Some(i.is_expanded),
                    content: None,
                })
                .collect(),
            videos: self
                .videos
                .iter()
                .map(|v| PositionUpdate {
                    id: v.id,
                    position: v.current_position,
                    description: v.description.clone(),
                    is_expanded: Some(v.is_expanded),
                    content: None,
                })
                .collect(),
            text_blocks: self
                .texts
                .iter()
                .map(|t| PositionUpdate {
                    id: t.id,
                    position: t.current_position,
                    description: None,
                    is_expanded: None,
                    content: Some(t.content.clone()),
                })
                .collect(),
        }
    }

    /// Total number of items on the board.
    pub fn len(&self) -> usize {
        self.images.len() + self.texts.len() + self.videos.len()
    }

    /// Check if the board has no items.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.texts.is_empty() && self.videos.is_empty()
    }
}
