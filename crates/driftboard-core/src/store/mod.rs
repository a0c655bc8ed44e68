//! Persistence gateway: maps board collections to and from remote rows.

mod file;
mod memory;
pub mod rows;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::board::Board;
use crate::items::{ImageItem, ItemId, TextBlock, VideoItem};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row not found: {0}")]
    NotFound(ItemId),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("store error: {0}")]
    Other(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed future for async store operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One row of a bulk position save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    pub id: ItemId,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A bulk save payload: current positions for every item kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBatch {
    #[serde(default)]
    pub images: Vec<PositionUpdate>,
    #[serde(default)]
    pub videos: Vec<PositionUpdate>,
    #[serde(default)]
    pub text_blocks: Vec<PositionUpdate>,
}

impl SaveBatch {
    /// Total number of row updates in the batch.
    pub fn len(&self) -> usize {
        self.images.len() + self.videos.len() + self.text_blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for content storage backends.
///
/// Fetches return items ordered by creation time ascending. Saves are
/// independent per-row upserts, not a transaction: the first failed row
/// aborts the remainder of the batch and is surfaced to the caller, while
/// rows already written stay written. No operation retries.
pub trait ContentStore: Send + Sync {
    /// Fetch all images.
    fn fetch_images(&self) -> BoxFuture<'_, StoreResult<Vec<ImageItem>>>;

    /// Fetch all text blocks.
    fn fetch_texts(&self) -> BoxFuture<'_, StoreResult<Vec<TextBlock>>>;

    /// Fetch all videos.
    fn fetch_videos(&self) -> BoxFuture<'_, StoreResult<Vec<VideoItem>>>;

    /// Apply a bulk position save. Returns the number of rows written
    /// before the first failure, as `Ok(total)` when every row applied.
    fn save_positions(&self, batch: SaveBatch) -> BoxFuture<'_, StoreResult<usize>>;

    /// Insert a new text block row.
    fn create_text(&self, block: TextBlock) -> BoxFuture<'_, StoreResult<()>>;

    /// Delete a text block row.
    fn delete_text(&self, id: ItemId) -> BoxFuture<'_, StoreResult<()>>;
}

/// Fetch all three collections into a fresh board.
///
/// A failed fetch is logged and its collection defaults to empty, so the
/// board still loads with zero items of that kind.
pub async fn load_board(store: &dyn ContentStore) -> Board {
    let images = match store.fetch_images().await {
        Ok(items) => items,
        Err(e) => {
            log::error!("failed to fetch images: {e}");
            Vec::new()
        }
    };
    let texts = match store.fetch_texts().await {
        Ok(items) => items,
        Err(e) => {
            log::error!("failed to fetch text blocks: {e}");
            Vec::new()
        }
    };
    let videos = match store.fetch_videos().await {
        Ok(items) => items,
        Err(e) => {
            log::error!("failed to fetch videos: {e}");
            Vec::new()
        }
    };
    Board::from_collections(images, texts, videos)
}


#[cfg(test)]
mod tests {
    use super::testing::block_on;
    use super::*;

    /// Store whose every fetch fails, for exercising load fallbacks.
    struct BrokenStore;

    impl ContentStore for BrokenStore {
        fn fetch_images(&self) -> BoxFuture<'_, StoreResult<Vec<ImageItem>>> {
            Box::pin(async { Err(StoreError::Other("images table unreachable".into())) })
        }

        fn fetch_texts(&self) -> BoxFuture<'_, StoreResult<Vec<TextBlock>>> {
            Box::pin(async { Err(StoreError::Other("text_blocks table unreachable".into())) })
        }

        fn fetch_videos(&self) -> BoxFuture<'_, StoreResult<Vec<VideoItem>>> {
            Box::pin(async { Err(StoreError::Other("videos table unreachable".into())) })
        }

        fn save_positions(&self, _batch: SaveBatch) -> BoxFuture<'_, StoreResult<usize>> {
            Box::pin(async { Err(StoreError::Other("unreachable".into())) })
        }

        fn create_text(&self, _block: TextBlock) -> BoxFuture<'_, StoreResult<()>> {
            Box::pin(async { Err(StoreError::Other("unreachable".into())) })
        }

        fn delete_text(&self, _id: ItemId) -> BoxFuture<'_, StoreResult<()>> {
            Box::pin(async { Err(StoreError::Other("unreachable".into())) })
        }
    }

    #[test]
    fn test_load_board_survives_failed_fetches() {
        // Every collection fetch fails; the board still loads, empty.
        let board = block_on(load_board(&BrokenStore));
        assert!(board.is_empty());
        assert!(!board.has_unsaved_changes());
    }
}
