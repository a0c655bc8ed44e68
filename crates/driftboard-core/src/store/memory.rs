//! In-memory store implementation.

use super::rows::{ImageRow, TextRow, VideoRow};
use super::{BoxFuture, ContentStore, SaveBatch, StoreError, StoreResult};
use crate::items::{ImageItem, ItemId, TextBlock, VideoItem};
use std::sync::RwLock;

/// In-memory row store for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStore {
    images: RwLock<Vec<ImageRow>>,
    texts: RwLock<Vec<TextRow>>,
    videos: RwLock<Vec<VideoRow>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an image row (images are produced out-of-band, not in-app).
    pub fn insert_image(&self, item: &ImageItem) -> StoreResult<()> {
        let mut rows = self.images.write().map_err(lock_error)?;
        rows.push(ImageRow::from_item(item));
        Ok(())
    }

    /// Seed a video row.
    pub fn insert_video(&self, item: &VideoItem) -> StoreResult<()> {
        let mut rows = self.videos.write().map_err(lock_error)?;
        rows.push(VideoRow::from_item(item));
        Ok(())
    }
}

fn lock_error<T>(e: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Other(format!("lock error: {e}"))
}

impl ContentStore for MemoryStore {
    fn fetch_images(&self) -> BoxFuture<'_, StoreResult<Vec<ImageItem>>> {
        Box::pin(async move {
            let rows = self.images.read().map_err(lock_error)?;
            let mut rows = rows.clone();
            rows.sort_by_key(|r| r.created_at);
            Ok(rows.into_iter().map(ImageRow::into_item).collect())
        })
    }

    fn fetch_texts(&self) -> BoxFuture<'_, StoreResult<Vec<TextBlock>>> {
        Box::pin(async move {
            let rows = self.texts.read().map_err(lock_error)?;
            let mut rows = rows.clone();
            rows.sort_by_key(|r| r.created_at);
            Ok(rows.into_iter().map(TextRow::into_item).collect())
        })
    }

    fn fetch_videos(&self) -> BoxFuture<'_, StoreResult<Vec<VideoItem>>> {
        Box::pin(async move {
            let rows = self.videos.read().map_err(lock_error)?;
            let mut rows = rows.clone();
            rows.sort_by_key(|r| r.created_at);
            Ok(rows.into_iter().map(VideoRow::into_item).collect())
        })
    }

    fn save_positions(&self, batch: SaveBatch) -> BoxFuture<'_, StoreResult<usize>> {
        Box::pin(async move {
            let mut applied = 0;

            {
                let mut rows = self.images.write().map_err(lock_error)?;
                for update in &batch.images {
                    let row = rows
                        .iter_mut()
                        .find(|r| r.id == update.id)
                        .ok_or(StoreError::NotFound(update.id))?;
                    row.apply_update(update);
                    applied += 1;
                }
            }
            {
                let mut rows = self.videos.write().map_err(lock_error)?;
                for update in &batch.videos {
                    let row = rows
                        .iter_mut()
                        .find(|r| r.id == update.id)
                        .ok_or(StoreError::NotFound(update.id))?;
                    row.apply_update(update);
                    applied += 1;
                }
            }
            {
                let mut rows = self.texts.write().map_err(lock_error)?;
                for update in &batch.text_blocks {
                    let row = rows
                        .iter_mut()
                        .find(|r| r.id == update.id)
                        .ok_or(StoreError::NotFound(update.id))?;
                    row.apply_update(update);
                    applied += 1;
                }
            }

            Ok(applied)
        })
    }

    fn create_text(&self, block: TextBlock) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let mut rows = self.texts.write().map_err(lock_error)?;
            rows.push(TextRow::from_item(&block));
            Ok(())
        })
    }

    fn delete_text(&self, id: ItemId) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let mut rows = self.texts.write().map_err(lock_error)?;
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(StoreError::NotFound(id));
            }
            Ok(())
        })
    }
}
