#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Screen-space direction in which newly revealed content appears.
///
/// This is independent of index order; [`crate::direction`] maps it to and
/// from [`AdapterDirection`] for the active [`LayoutConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementDirection {
    TowardsTopLeft,
    TowardsBottomRight,
}

impl MovementDirection {
    pub fn sign(self) -> i32 {
        match self {
            Self::TowardsTopLeft => -1,
            Self::TowardsBottomRight => 1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::TowardsTopLeft => Self::TowardsBottomRight,
            Self::TowardsBottomRight => Self::TowardsTopLeft,
        }
    }
}

/// Index-space traversal direction through the item sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdapterDirection {
    TowardsLower,
    TowardsHigher,
}

impl AdapterDirection {
    pub fn sign(self) -> i32 {
        match self {
            Self::TowardsLower => -1,
            Self::TowardsHigher => 1,
        }
    }
}

/// Host layout direction. Resolved by the host (locale, widget tree), never
/// guessed by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// The configuration a direction lookup depends on.
///
/// Immutable during a layout or scroll pass; changing any field invalidates
/// the layout and forces a full refill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub orientation: Orientation,
    pub reverse_layout: bool,
    pub layout_direction: LayoutDirection,
}

impl LayoutConfig {
    pub fn is_rtl(&self) -> bool {
        self.layout_direction == LayoutDirection::Rtl
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            reverse_layout: false,
            layout_direction: LayoutDirection::Ltr,
        }
    }
}

/// Pixel edges of a placed item or of the viewport clip, in viewport
/// coordinates (origin at the viewport's top-left corner).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Decorated size of an item, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn main(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Padding between the viewport's outer edges and the area items occupy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Viewport geometry supplied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            insets: Insets::default(),
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// The area items occupy: the viewport minus its insets.
    pub fn inner_bounds(&self) -> Rect {
        Rect {
            left: self.insets.left,
            top: self.insets.top,
            right: self.width - self.insets.right,
            bottom: self.height - self.insets.bottom,
        }
    }

    /// Extent along the scroll axis, insets excluded.
    pub fn main_extent(&self, orientation: Orientation) -> i32 {
        let bounds = self.inner_bounds();
        match orientation {
            Orientation::Horizontal => bounds.width(),
            Orientation::Vertical => bounds.height(),
        }
    }
}
