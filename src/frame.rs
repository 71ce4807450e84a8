//! Edge-based positioning over a single placed item.
//!
//! A frame names the edge of the item that is encountered first when scanning
//! in the movement direction that produced it. All main-axis placement math
//! lives here; cross-axis edges are computed by the engine before a frame is
//! placed (see `LoopLayout::non_scrolling_edges`).

use crate::{MovementDirection, Orientation, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameKind {
    /// Horizontal, items appended on the right.
    LeadingLeft,
    /// Horizontal, items appended on the left.
    LeadingRight,
    /// Vertical, items appended at the bottom.
    LeadingTop,
    /// Vertical, items appended at the top.
    LeadingBottom,
}

impl FrameKind {
    pub(crate) fn select(orientation: Orientation, movement: MovementDirection) -> Self {
        match (orientation, movement) {
            (Orientation::Vertical, MovementDirection::TowardsTopLeft) => Self::LeadingBottom,
            (Orientation::Vertical, MovementDirection::TowardsBottomRight) => Self::LeadingTop,
            (Orientation::Horizontal, MovementDirection::TowardsTopLeft) => Self::LeadingRight,
            (Orientation::Horizontal, MovementDirection::TowardsBottomRight) => Self::LeadingLeft,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ItemFrame {
    kind: FrameKind,
    rect: Rect,
    main_size: i32,
}

impl ItemFrame {
    /// Frame over an item that already has a full rect.
    pub(crate) fn placed(orientation: Orientation, movement: MovementDirection, rect: Rect) -> Self {
        let main_size = match orientation {
            Orientation::Horizontal => rect.width(),
            Orientation::Vertical => rect.height(),
        };
        Self {
            kind: FrameKind::select(orientation, movement),
            rect,
            main_size,
        }
    }

    /// Frame over a freshly measured item. `cross_rect` carries the already
    /// resolved cross-axis edges; the main-axis edges are set by
    /// [`Self::place_following`] or [`Self::place_as_first`].
    pub(crate) fn unplaced(
        orientation: Orientation,
        movement: MovementDirection,
        cross_rect: Rect,
        main_size: i32,
    ) -> Self {
        Self {
            kind: FrameKind::select(orientation, movement),
            rect: cross_rect,
            main_size,
        }
    }

    pub(crate) fn rect(&self) -> Rect {
        self.rect
    }

    /// Main-axis extent of the item.
    pub(crate) fn size(&self) -> i32 {
        self.main_size
    }

    /// How much of the item lies outside `bounds`, on the side new content
    /// scrolls in from. Never negative.
    pub(crate) fn hidden_size(&self, bounds: Rect) -> i32 {
        match self.kind {
            FrameKind::LeadingLeft => (self.rect.right - bounds.right).max(0),
            FrameKind::LeadingRight => (bounds.left - self.rect.left).max(0),
            FrameKind::LeadingTop => (self.rect.bottom - bounds.bottom).max(0),
            FrameKind::LeadingBottom => (bounds.top - self.rect.top).max(0),
        }
    }

    /// The edge encountered first when scanning in the movement direction.
    pub(crate) fn leading_edge(&self) -> i32 {
        match self.kind {
            FrameKind::LeadingLeft => self.rect.left,
            FrameKind::LeadingRight => self.rect.right,
            FrameKind::LeadingTop => self.rect.top,
            FrameKind::LeadingBottom => self.rect.bottom,
        }
    }

    /// The edge encountered last; the next item abuts it.
    pub(crate) fn following_edge(&self) -> i32 {
        match self.kind {
            FrameKind::LeadingLeft => self.rect.right,
            FrameKind::LeadingRight => self.rect.left,
            FrameKind::LeadingTop => self.rect.bottom,
            FrameKind::LeadingBottom => self.rect.top,
        }
    }

    /// Sets the main-axis edges of the item placed immediately after `self`
    /// in the traversal direction, abutting, no gap.
    pub(crate) fn place_following(&self, next: &mut Self) {
        debug_assert_eq!(self.kind, next.kind, "frames from mixed movement directions");
        match self.kind {
            FrameKind::LeadingLeft => {
                next.rect.left = self.following_edge();
                next.rect.right = next.rect.left + next.main_size;
            }
            FrameKind::LeadingRight => {
                next.rect.right = self.following_edge();
                next.rect.left = next.rect.right - next.main_size;
            }
            FrameKind::LeadingTop => {
                next.rect.top = self.following_edge();
                next.rect.bottom = next.rect.top + next.main_size;
            }
            FrameKind::LeadingBottom => {
                next.rect.bottom = self.following_edge();
                next.rect.top = next.rect.bottom - next.main_size;
            }
        }
    }

    /// Aligns `self` flush against the static edge of `bounds` that matches
    /// its variant, pushed `hidden_amount` pixels out of view.
    pub(crate) fn place_as_first(&mut self, bounds: Rect, hidden_amount: i32) {
        match self.kind {
            FrameKind::LeadingLeft => {
                self.rect.left = bounds.left - hidden_amount;
                self.rect.right = self.rect.left + self.main_size;
            }
            FrameKind::LeadingRight => {
                self.rect.right = bounds.right + hidden_amount;
                self.rect.left = self.rect.right - self.main_size;
            }
            FrameKind::LeadingTop => {
                self.rect.top = bounds.top - hidden_amount;
                self.rect.bottom = self.rect.top + self.main_size;
            }
            FrameKind::LeadingBottom => {
                self.rect.bottom = bounds.bottom + hidden_amount;
                self.rect.top = self.rect.bottom - self.main_size;
            }
        }
    }
}
