//! Drag state for the drop zone.
//!
//! Browsers fire `dragenter`/`dragleave` for every nested element the
//! pointer crosses, so a plain boolean flickers. [`DragCounter`] keeps a
//! signed depth: each enter increments it, each leave decrements it, and
//! the zone only stops showing the dragging state when the depth is back
//! to zero.

/// Enter/leave counter plus the visible "is dragging" flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragCounter {
    depth: i32,
    dragging: bool,
}

impl DragCounter {
    /// A counter with no drag in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            depth: 0,
            dragging: false,
        }
    }

    /// Whether the zone should render its dragging state.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        self.dragging
    }

    /// Current nesting depth of the drag.
    ///
    /// May go negative if the browser delivers a leave without a
    /// matching enter (e.g. a drag that started inside the zone).
    #[must_use]
    pub const fn depth(self) -> i32 {
        self.depth
    }

    /// Handle `dragenter`.
    ///
    /// Only a payload carrying items turns the dragging state on; the
    /// depth is counted either way so enters and leaves stay paired.
    pub const fn enter(&mut self, has_items: bool) {
        self.depth += 1;
        if has_items {
            self.dragging = true;
        }
    }

    /// Handle `dragleave`.
    pub const fn leave(&mut self) {
        self.depth -= 1;
        if self.depth == 0 {
            self.dragging = false;
        }
    }

    /// Handle `drop`.
    ///
    /// Clears the dragging state and the depth. Returns `true` when the
    /// drop carried files and should be forwarded to the drop handler.
    pub const fn drop(&mut self, file_count: usize) -> bool {
        self.dragging = false;
        self.depth = 0;
        file_count > 0
    }
}
