//! Pickers selecting which attached item answers a find-by-index query.
//!
//! Because the list loops, the same adapter index can transiently be attached
//! more than once (a viewport wider than the whole loop). A picker decides
//! which instance wins. Any
//! `Fn(usize, &LoopLayout<H>) -> Option<&AttachedItem<H>>` works; the default
//! everywhere is [`closest_to_middle`].

use crate::direction::movement_direction_from_adapter;
use crate::{AdapterDirection, AttachedItem, LoopLayout, MovementDirection, Orientation};

/// The instance of `target` whose center is nearest the viewport's main-axis
/// midpoint; the first one encountered wins exact ties.
pub fn closest_to_middle<H>(target: usize, layout: &LoopLayout<H>) -> Option<&AttachedItem<H>> {
    let bounds = layout.inner_bounds();
    let orientation = layout.orientation();
    let middle = match orientation {
        Orientation::Horizontal => bounds.left + bounds.width() / 2,
        Orientation::Vertical => bounds.top + bounds.height() / 2,
    };

    let mut best: Option<(&AttachedItem<H>, i32)> = None;
    for child in layout.children() {
        if child.index() != target {
            continue;
        }
        let rect = child.rect();
        let child_middle = match orientation {
            Orientation::Horizontal => rect.left + rect.width() / 2,
            Orientation::Vertical => rect.top + rect.height() / 2,
        };
        let distance = (child_middle - middle).abs();
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((child, distance));
        }
    }
    best.map(|(child, _)| child)
}

/// The instance of `target` nearest the anchor edge.
///
/// Scans the attached items starting from the edge opposite the movement
/// direction that `TowardsHigher` maps to, so the scan begins where index 0
/// was laid out.
pub fn closest_to_anchor_edge<H>(target: usize, layout: &LoopLayout<H>) -> Option<&AttachedItem<H>> {
    let movement = movement_direction_from_adapter(AdapterDirection::TowardsHigher, layout.config());
    let children = layout.children();
    match movement {
        MovementDirection::TowardsBottomRight => children.iter().find(|c| c.index() == target),
        MovementDirection::TowardsTopLeft => children.iter().rev().find(|c| c.index() == target),
    }
}
