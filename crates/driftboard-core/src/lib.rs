//! Driftboard Core Library
//!
//! Platform-agnostic state and layout logic for the Driftboard canvas:
//! draggable images, text blocks and videos with grid snapping, a packed
//! "clean up" layout and pluggable persistence.

pub mod board;
pub mod drag;
pub mod items;
pub mod layout;
pub mod snap;
pub mod store;
pub mod zorder;

pub use board::Board;
pub use drag::{DragHandler, DragSession, ItemRef};
pub use items::{ImageItem, Item, ItemId, ItemKind, TextBlock, VideoItem};
pub use layout::{LayoutItem, layout, measure};
pub use snap::{GRID_SIZE, snap_position};
pub use store::{
    ContentStore, FileStore, MemoryStore, PositionUpdate, SaveBatch, StoreError, StoreResult,
    load_board,
};
pub use zorder::ZOrderCounter;
