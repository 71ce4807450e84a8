//! Resolution between screen-space movement and index-space traversal.
//!
//! The two functions below are inverses of each other for every combination
//! of orientation, `reverse_layout`, and layout direction. RTL only
//! participates for horizontal lists; the vertical arms ignore it.

use crate::{AdapterDirection, LayoutConfig, MovementDirection, Orientation};

/// The index-space direction that reveals new content when the viewport moves
/// in `movement`.
pub fn adapter_direction_from_movement(
    movement: MovementDirection,
    config: LayoutConfig,
) -> AdapterDirection {
    use AdapterDirection::{TowardsHigher, TowardsLower};
    use MovementDirection::{TowardsBottomRight, TowardsTopLeft};
    use Orientation::{Horizontal, Vertical};

    match (
        config.orientation,
        movement,
        config.reverse_layout,
        config.is_rtl(),
    ) {
        (Vertical, TowardsTopLeft, false, _) => TowardsLower,
        (Vertical, TowardsTopLeft, true, _) => TowardsHigher,
        (Vertical, TowardsBottomRight, false, _) => TowardsHigher,
        (Vertical, TowardsBottomRight, true, _) => TowardsLower,
        (Horizontal, TowardsTopLeft, false, false) => TowardsLower,
        (Horizontal, TowardsTopLeft, true, false) => TowardsHigher,
        (Horizontal, TowardsTopLeft, false, true) => TowardsHigher,
        (Horizontal, TowardsTopLeft, true, true) => TowardsLower,
        (Horizontal, TowardsBottomRight, false, false) => TowardsHigher,
        (Horizontal, TowardsBottomRight, true, false) => TowardsLower,
        (Horizontal, TowardsBottomRight, false, true) => TowardsLower,
        (Horizontal, TowardsBottomRight, true, true) => TowardsHigher,
    }
}

/// The screen-space direction in which items appear when traversing indices
/// in `adapter` order. Inverse of [`adapter_direction_from_movement`].
pub fn movement_direction_from_adapter(
    adapter: AdapterDirection,
    config: LayoutConfig,
) -> MovementDirection {
    use AdapterDirection::{TowardsHigher, TowardsLower};
    use MovementDirection::{TowardsBottomRight, TowardsTopLeft};
    use Orientation::{Horizontal, Vertical};

    match (
        config.orientation,
        adapter,
        config.reverse_layout,
        config.is_rtl(),
    ) {
        (Vertical, TowardsLower, false, _) => TowardsTopLeft,
        (Vertical, TowardsLower, true, _) => TowardsBottomRight,
        (Vertical, TowardsHigher, false, _) => TowardsBottomRight,
        (Vertical, TowardsHigher, true, _) => TowardsTopLeft,
        (Horizontal, TowardsLower, false, false) => TowardsTopLeft,
        (Horizontal, TowardsLower, true, false) => TowardsBottomRight,
        (Horizontal, TowardsLower, false, true) => TowardsBottomRight,
        (Horizontal, TowardsLower, true, true) => TowardsTopLeft,
        (Horizontal, TowardsHigher, false, false) => TowardsBottomRight,
        (Horizontal, TowardsHigher, true, false) => TowardsTopLeft,
        (Horizontal, TowardsHigher, false, true) => TowardsTopLeft,
        (Horizontal, TowardsHigher, true, true) => TowardsBottomRight,
    }
}
