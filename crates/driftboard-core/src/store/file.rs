//! File-based store implementation.
//!
//! Rows are kept as one JSON file per table under a base directory. Row
//! updates are still applied one at a time, so a batch that fails midway
//! leaves the rows written so far on disk, matching the independent
//! per-row upsert semantics of the remote store.

use super::rows::{ImageRow, TextRow, VideoRow};
use super::{BoxFuture, ContentStore, SaveBatch, StoreError, StoreResult};
use crate::items::{ImageItem, ItemId, TextBlock, VideoItem};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

const IMAGES_FILE: &str = "images.json";
const TEXTS_FILE: &str = "text_blocks.json";
const VIDEOS_FILE: &str = "videos.json";

/// Content store backed by JSON files.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a file store at the given directory, creating it if needed.
    pub fn new(base_path: PathBuf) -> StoreResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StoreError::Io(format!("failed to create store directory: {e}"))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn load_rows<T: DeserializeOwned>(&self, file: &str) -> StoreResult<Vec<T>> {
        let path = self.base_path.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&path)
            .map_err(|e| StoreError::Io(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&json)
            .map_err(|e| StoreError::Serialization(format!("failed to parse {}: {e}", path.display())))
    }

    fn save_rows<T: Serialize>(&self, file: &str, rows: &[T]) -> StoreResult<()> {
        let path = self.base_path.join(file);
        let json = serde_json::to_string_pretty(rows)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StoreError::Io(format!("failed to write {}: {e}", path.display())))
    }

    /// Apply a batch of updates to one table file. Rows applied before the
    /// first failure are persisted even when an error is returned.
    fn apply_to_table<T, F>(
        &self,
        file: &str,
        updates: &[super::PositionUpdate],
        mut apply: F,
        id_of: impl Fn(&T) -> ItemId,
    ) -> StoreResult<usize>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut(&mut T, &super::PositionUpdate),
    {
        if updates.is_empty() {
            return Ok(0);
        }
        let mut rows: Vec<T> = self.load_rows(file)?;
        let mut applied = 0;
        let mut failure = None;

        for update in updates {
            match rows.iter_mut().find(|r| id_of(r) == update.id) {
                Some(row) => {
                    apply(row, update);
                    applied += 1;
                }
                None => {
                    failure = Some(StoreError::NotFound(update.id));
                    break;
                }
            }
        }

        self.save_rows(file, &rows)?;
        match failure {
            Some(e) => Err(e),
            None => Ok(applied),
        }
    }

    /// Seed an image row.
    pub fn insert_image(&self, item: &ImageItem) -> StoreResult<()> {
        let mut rows: Vec<ImageRow> = self.load_rows(IMAGES_FILE)?;
        rows.push(ImageRow::from_item(item));
        self.save_rows(IMAGES_FILE, &rows)
    }

    /// Seed a video row.
    pub fn insert_video(&self, item: &VideoItem) -> StoreResult<()> {
        let mut rows: Vec<VideoRow> = self.load_rows(VIDEOS_FILE)?;
        rows.push(VideoRow::from_item(item));
        self.save_rows(VIDEOS_FILE, &rows)
    }
}

impl ContentStore for FileStore {
    fn fetch_images(&self) -> BoxFuture<'_, StoreResult<Vec<ImageItem>>> {
        Box::pin(async move {
            let mut rows: Vec<ImageRow> = self.load_rows(IMAGES_FILE)?;
            rows.sort_by_key(|r| r.created_at);
            Ok(rows.into_iter().map(ImageRow::into_item).collect())
        })
    }

    fn fetch_texts(&self) -> BoxFuture<'_, StoreResult<Vec<TextBlock>>> {
        Box::pin(async move {
            let mut rows: Vec<TextRow> = self.load_rows(TEXTS_FILE)?;
            rows.sort_by_key(|r| r.created_at);
            Ok(rows.into_iter().map(TextRow::into_item).collect())
        })
    }

    fn fetch_videos(&self) -> BoxFuture<'_, StoreResult<Vec<VideoItem>>> {
        Box::pin(async move {
            let mut rows: Vec<VideoRow> = self.load_rows(VIDEOS_FILE)?;
            rows.sort_by_key(|r| r.created_at);
            Ok(rows.into_iter().map(VideoRow::into_item).collect())
        })
    }

    fn save_positions(&self, batch: SaveBatch) -> BoxFuture<'_, StoreResult<usize>> {
        Box::pin(async move {
            let mut applied = self.apply_to_table(
                IMAGES_FILE,
                &batch.images,
                ImageRow::apply_update,
                |r: &ImageRow| r.id,
            )?;
            applied += self.apply_to_table(
                VIDEOS_FILE,
                &batch.videos,
                VideoRow::apply_update,
                |r: &VideoRow| r.id,
            )?;
            applied += self.apply_to_table(
                TEXTS_FILE,
                &batch.text_blocks,
                TextRow::apply_update,
                |r: &TextRow| r.id,
            )?;
            Ok(applied)
        })
    }

    fn create_text(&self, block: TextBlock) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let mut rows: Vec<TextRow> = self.load_rows(TEXTS_FILE)?;
            rows.push(TextRow::from_item(&block));
            self.save_rows(TEXTS_FILE, &rows)
        })
    }

    fn delete_text(&self, id: ItemId) -> BoxFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            let mut rows: Vec<TextRow> = self.load_rows(TEXTS_FILE)?;
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(StoreError::NotFound(id));
            }
            self.save_rows(TEXTS_FILE, &rows)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PositionUpdate;
    use crate::store::testing::block_on;
    use kurbo::Point;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_save_load() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        let img = ImageItem::new("t.jpg", "o.jpg", "x", Point::new(800.0, 200.0), 300.0, 400.0);
        store.insert_image(&img).unwrap();

        let batch = SaveBatch {
            images: vec![PositionUpdate {
                id: img.id,
                position: Point::new(112.0, 240.0),
                description: None,
                is_expanded: None,
                content: None,
            }],
            ..Default::default()
        };
        block_on(store.save_positions(batch)).unwrap();

        // Reopen the directory to prove the write hit disk.
        let reopened = FileStore::new(dir.path().to_path_buf()).unwrap();
        let fetched = block_on(reopened.fetch_images()).unwrap();
        assert_eq!(fetched[0].current_position, Point::new(112.0, 240.0));
    }

    #[test]
    fn test_file_store_missing_tables_fetch_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert!(block_on(store.fetch_images()).unwrap().is_empty());
        assert!(block_on(store.fetch_texts()).unwrap().is_empty());
        assert!(block_on(store.fetch_videos()).unwrap().is_empty());
    }

    #[test]
    fn test_file_store_text_lifecycle() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        let block = TextBlock::new("note", Point::ZERO);
        let id = block.id;
        block_on(store.create_text(block)).unwrap();
        assert_eq!(block_on(store.fetch_texts()).unwrap().len(), 1);

        block_on(store.delete_text(id)).unwrap();
        assert!(block_on(store.fetch_texts()).unwrap().is_empty());
    }

    #[test]
    fn test_file_store_partial_batch_persists_early_rows() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        let a = ImageItem::new("a.jpg", "a.jpg", "a", Point::ZERO, 300.0, 400.0);
        store.insert_image(&a).unwrap();

        let missing = uuid::Uuid::new_v4();
        let batch = SaveBatch {
            images: vec![
                PositionUpdate {
                    id: a.id,
                    position: Point::new(16.0, 16.0),
                    description: None,
                    is_expanded: None,
                    content: None,
                },
                PositionUpdate {
                    id: missing,
                    position: Point::ZERO,
                    description: None,
                    is_expanded: None,
                    content: None,
                },
            ],
            ..Default::default()
        };

        assert!(matches!(
            block_on(store.save_positions(batch)),
            Err(StoreError::NotFound(id)) if id == missing
        ));

        let fetched = block_on(store.fetch_images()).unwrap();
        assert_eq!(fetched[0].current_position, Point::new(16.0, 16.0));
    }
}
