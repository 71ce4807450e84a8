use crate::MovementDirection;

/// The adapter indices bound to the two extreme attached items.
///
/// Owned and mutated exclusively by the layout, scroll, and recycle passes.
/// The values are meaningless while nothing is attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportIndices {
    pub top_left: usize,
    pub bottom_right: usize,
}

impl ViewportIndices {
    pub fn new(top_left: usize, bottom_right: usize) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// The index at the extreme that `movement` points at.
    pub fn extreme(&self, movement: MovementDirection) -> usize {
        match movement {
            MovementDirection::TowardsTopLeft => self.top_left,
            MovementDirection::TowardsBottomRight => self.bottom_right,
        }
    }

    /// Records a new item appended at the extreme that `movement` points at.
    pub fn extend(&mut self, movement: MovementDirection, new_index: usize) {
        match movement {
            MovementDirection::TowardsTopLeft => self.top_left = new_index,
            MovementDirection::TowardsBottomRight => self.bottom_right = new_index,
        }
    }

    /// Moves the extreme **opposite** `movement` after trailing items were
    /// recycled.
    pub fn reanchor(&mut self, movement: MovementDirection, new_index: usize) {
        self.extend(movement.opposite(), new_index);
    }
}
