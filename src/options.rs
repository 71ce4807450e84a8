use crate::{LayoutConfig, LayoutDirection, Orientation, Viewport};

/// Construction-time configuration for [`crate::LoopLayout`].
///
/// Everything here can also be changed later through the engine's setters,
/// which invalidate the layout when a value actually changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopLayoutOptions {
    pub orientation: Orientation,
    pub reverse_layout: bool,
    /// Resolved by the host from its locale/widget tree; only consulted for
    /// horizontal lists when resolving directions, but it also picks the
    /// cross-axis alignment edge of vertical lists.
    pub layout_direction: LayoutDirection,
    pub viewport: Viewport,
}

impl LoopLayoutOptions {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            orientation: Orientation::Vertical,
            reverse_layout: false,
            layout_direction: LayoutDirection::Ltr,
            viewport,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.reverse_layout = reverse_layout;
        self
    }

    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    pub fn config(&self) -> LayoutConfig {
        LayoutConfig {
            orientation: self.orientation,
            reverse_layout: self.reverse_layout,
            layout_direction: self.layout_direction,
        }
    }
}
