//! Pointer-drag tracking for canvas items.

use crate::board::Board;
use crate::items::{ItemId, ItemKind};
use crate::zorder::ZOrderCounter;
use kurbo::Point;
use std::collections::HashMap;

/// Reference to an item on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: ItemId,
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: ItemId) -> Self {
        Self { kind, id }
    }
}

/// State of an active drag.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// The item being dragged.
    pub item: ItemRef,
    /// Pointer position when the drag started.
    pub start_pointer: Point,
    /// Item position when the drag started.
    pub origin: Point,
}

impl DragSession {
    /// Drag delta from the starting pointer position.
    pub fn delta(&self, pointer: Point) -> kurbo::Vec2 {
        kurbo::Vec2::new(pointer.x - self.start_pointer.x, pointer.y - self.start_pointer.y)
    }
}

/// Tracks the drag session, editing focus and per-item stacking values.
///
/// Interaction state lives here, apart from the item data on the board.
/// At most one drag and one editing focus exist at a time.
#[derive(Debug, Default)]
pub struct DragHandler {
    active: Option<DragSession>,
    editing: Option<ItemRef>,
    stacking: HashMap<ItemId, u64>,
}

impl DragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag session from the item's current position and raise it
    /// to the top of the stack.
    ///
    /// Refused (returns false) while the item is being edited, or when the
    /// item does not exist on the board.
    pub fn pointer_down(
        &mut self,
        board: &Board,
        item: ItemRef,
        pointer: Point,
        zorder: &mut ZOrderCounter,
    ) -> bool {
        if self.editing == Some(item) {
            return false;
        }
        let Some(origin) = board.position_of(item.kind, item.id) else {
            return false;
        };

        self.stacking.insert(item.id, zorder.next_z());
        self.active = Some(DragSession {
            item,
            start_pointer: pointer,
            origin,
        });
        true
    }

    /// Report the pointer's new position for the active drag.
    ///
    /// Called on every move event; the item's absolute position becomes
    /// origin plus the pointer delta, snapped by the board. Returns the
    /// snapped position, or `None` when no drag is active.
    pub fn pointer_move(&mut self, board: &mut Board, pointer: Point) -> Option<Point> {
        let session = self.active.as_ref()?;
        let delta = session.delta(pointer);
        let raw = session.origin + delta;
        board.set_position(session.item.kind, session.item.id, raw)
    }

    /// End the active drag, returning its session.
    pub fn pointer_up(&mut self) -> Option<DragSession> {
        self.active.take()
    }

    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Enter editing mode for an item (double-click on a text block).
    ///
    /// Editing takes focus: any drag in progress ends and drag starts are
    /// suppressed for this item until [`Self::end_editing`].
    pub fn begin_editing(&mut self, item: ItemRef, zorder: &mut ZOrderCounter) {
        self.active = None;
        self.stacking.insert(item.id, zorder.next_z());
        self.editing = Some(item);
    }

    /// Leave editing mode (blur or explicit confirm).
    pub fn end_editing(&mut self) {
        self.editing = None;
    }

    /// Whether the given item is currently being edited.
    pub fn is_editing(&self, item: ItemRef) -> bool {
        self.editing == Some(item)
    }

    /// Raise an item to the top of the stack on plain click focus.
    pub fn focus(&mut self, item: ItemRef, zorder: &mut ZOrderCounter) -> u64 {
        let z = zorder.next_z();
        self.stacking.insert(item.id, z);
        z
    }

    /// Stacking value assigned to an item, if it was ever focused.
    pub fn z_of(&self, id: ItemId) -> Option<u64> {
        self.stacking.get(&id).copied()
    }

    /// Drop interaction state for a removed item.
    pub fn remove(&mut self, item: ItemRef) {
        self.stacking.remove(&item.id);
        if self.editing == Some(item) {
            self.editing = None;
        }
        if self.active.as_ref().map(|s| s.item) == Some(item) {
            self.active = None;
        }
    }
}
