//! Direction deciders for reaching an arbitrary target index.
//!
//! A decider answers one question: in which screen-space direction should the
//! viewport move so that `target` appears? Any
//! `Fn(usize, &LoopLayout<H>) -> MovementDirection` works; this module
//! provides the documented strategies. The default everywhere is
//! [`estimate_shortest_route`].

use crate::direction::movement_direction_from_adapter;
use crate::index_loop::distances;
use crate::{AdapterDirection, LoopLayout, MovementDirection};

/// Picks the direction with the shortest estimated travel to `target`.
///
/// A target already sitting at an extreme resolves to that edge directly —
/// the partially visible case where distance comparison would lie. Otherwise
/// four route candidates are measured against the two extremes, in the fixed
/// order top-left/in-loop, top-left/over-seam, bottom-right/in-loop,
/// bottom-right/over-seam; the minimum wins and ties resolve to the earliest
/// candidate.
pub fn estimate_shortest_route<H>(target: usize, layout: &LoopLayout<H>) -> MovementDirection {
    let top_left = layout.top_left_index();
    let bottom_right = layout.bottom_right_index();
    if target == top_left {
        return MovementDirection::TowardsTopLeft;
    }
    if target == bottom_right {
        return MovementDirection::TowardsBottomRight;
    }

    let count = layout.item_count();
    let top_left_distances = distances(target, top_left, count);
    let bottom_right_distances = distances(target, bottom_right, count);

    // (distance, target_is_smaller, is_in_loop); the order is contractual.
    let candidates = [
        (top_left_distances.in_loop, target < top_left, true),
        (top_left_distances.over_seam, target < top_left, false),
        (bottom_right_distances.in_loop, target < bottom_right, true),
        (bottom_right_distances.over_seam, target < bottom_right, false),
    ];
    let mut winner = candidates[0];
    for candidate in candidates {
        if candidate.0 < winner.0 {
            winner = candidate;
        }
    }

    let (_, target_is_smaller, is_in_loop) = winner;
    let adapter = match (target_is_smaller, is_in_loop) {
        (true, true) => AdapterDirection::TowardsLower,
        (true, false) => AdapterDirection::TowardsHigher,
        (false, true) => AdapterDirection::TowardsHigher,
        (false, false) => AdapterDirection::TowardsLower,
    };
    movement_direction_from_adapter(adapter, layout.config())
}

/// Always approaches `target` through the anchor edge — the edge index 0 was
/// laid out against. Fast when targets cluster near the anchor.
pub fn towards_anchor_edge<H>(_target: usize, layout: &LoopLayout<H>) -> MovementDirection {
    movement_direction_from_adapter(AdapterDirection::TowardsLower, layout.config())
}

/// Always approaches `target` through the edge opposite the anchor edge.
pub fn towards_opt_anchor_edge<H>(_target: usize, layout: &LoopLayout<H>) -> MovementDirection {
    movement_direction_from_adapter(AdapterDirection::TowardsHigher, layout.config())
}
