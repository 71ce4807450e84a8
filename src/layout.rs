use alloc::vec::Vec;

use crate::direction::{adapter_direction_from_movement, movement_direction_from_adapter};
use crate::frame::ItemFrame;
use crate::{
    AdapterDirection, ItemProvider, LayoutConfig, LayoutDirection, LayoutSnapshot,
    LoopLayoutOptions, MovementDirection, Orientation, Rect, Size, Viewport, ViewportIndices,
    deciders, index_loop, pickers,
};

/// One materialized item currently inside (or partially inside) the viewport.
#[derive(Clone, Debug)]
pub struct AttachedItem<H> {
    index: usize,
    rect: Rect,
    handle: H,
}

impl<H> AttachedItem<H> {
    /// The adapter index this item is bound to. Because the list loops, the
    /// same index can transiently be attached more than once.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Decorated pixel edges, in viewport coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The provider's token for this item.
    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// A headless circular (looping) list layout and scroll engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; items are opaque provider handles.
/// - Your adapter drives it from its layout/scroll callbacks and reads the
///   placed rects back out of [`Self::children`].
/// - The list wraps: index `n - 1` sits next to index 0, there is no first or
///   last item, and scrolling never runs out of content.
///
/// The engine owns two pieces of persistent state between calls: the attached
/// items (in screen order, top-left to bottom-right) and the
/// [`ViewportIndices`] naming the extreme attached indices. Everything else is
/// recomputed per call.
#[derive(Clone, Debug)]
pub struct LoopLayout<H = u64> {
    options: LoopLayoutOptions,
    item_count: usize,
    children: Vec<AttachedItem<H>>,
    indices: ViewportIndices,
    pending_anchor: Option<usize>,
    needs_layout: bool,
}

impl<H> LoopLayout<H> {
    pub fn new(options: LoopLayoutOptions) -> Self {
        ldebug!(
            orientation = ?options.orientation,
            reverse_layout = options.reverse_layout,
            "LoopLayout::new"
        );
        Self {
            options,
            item_count: 0,
            children: Vec::new(),
            indices: ViewportIndices::default(),
            pending_anchor: None,
            needs_layout: true,
        }
    }

    pub fn options(&self) -> &LoopLayoutOptions {
        &self.options
    }

    pub fn config(&self) -> LayoutConfig {
        self.options.config()
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn reverse_layout(&self) -> bool {
        self.options.reverse_layout
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.options.layout_direction
    }

    pub fn viewport(&self) -> Viewport {
        self.options.viewport
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.options.orientation == orientation {
            return;
        }
        self.options.orientation = orientation;
        self.invalidate();
    }

    pub fn set_reverse_layout(&mut self, reverse_layout: bool) {
        if self.options.reverse_layout == reverse_layout {
            return;
        }
        self.options.reverse_layout = reverse_layout;
        self.invalidate();
    }

    /// Updates the host-resolved layout direction (LTR/RTL).
    pub fn set_layout_direction(&mut self, layout_direction: LayoutDirection) {
        if self.options.layout_direction == layout_direction {
            return;
        }
        self.options.layout_direction = layout_direction;
        self.invalidate();
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.options.viewport == viewport {
            return;
        }
        self.options.viewport = viewport;
        self.invalidate();
    }

    /// Whether a config change or a jump request is waiting for the next
    /// [`Self::layout`] call.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    fn invalidate(&mut self) {
        ldebug!("invalidate");
        self.needs_layout = true;
    }

    /// The item count of the most recent [`Self::layout`] pass. A structural
    /// change on the host side must come back through `layout`.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Currently attached items, in screen order (top-left to bottom-right).
    pub fn children(&self) -> &[AttachedItem<H>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True while nothing is attached (before the first layout, or when the
    /// item count is 0).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The tracked extreme indices. Meaningless while [`Self::is_empty`].
    pub fn indices(&self) -> ViewportIndices {
        self.indices
    }

    /// Adapter index of the item at the viewport's top-left extreme.
    pub fn top_left_index(&self) -> usize {
        self.indices.top_left
    }

    /// Adapter index of the item at the viewport's bottom-right extreme.
    pub fn bottom_right_index(&self) -> usize {
        self.indices.bottom_right
    }

    /// The index at the anchor edge — the edge index 0 was aligned to during
    /// the most recent full layout.
    pub fn anchor_index(&self) -> usize {
        let movement = movement_direction_from_adapter(AdapterDirection::TowardsLower, self.config());
        self.indices.extreme(movement)
    }

    /// The index at the edge opposite the anchor edge.
    pub fn opt_anchor_index(&self) -> usize {
        let movement = movement_direction_from_adapter(AdapterDirection::TowardsHigher, self.config());
        self.indices.extreme(movement)
    }

    /// Viewport minus insets: the area items occupy and are clipped against.
    pub fn inner_bounds(&self) -> Rect {
        self.options.viewport.inner_bounds()
    }

    fn main_extent(&self) -> i32 {
        self.options.viewport.main_extent(self.options.orientation)
    }

    /// [`crate::direction::adapter_direction_from_movement`] for the active
    /// config.
    pub fn adapter_direction_from_movement_direction(
        &self,
        movement: MovementDirection,
    ) -> AdapterDirection {
        adapter_direction_from_movement(movement, self.config())
    }

    /// [`crate::direction::movement_direction_from_adapter`] for the active
    /// config.
    pub fn movement_direction_from_adapter_direction(
        &self,
        adapter: AdapterDirection,
    ) -> MovementDirection {
        movement_direction_from_adapter(adapter, self.config())
    }

    /// Captures the logical position for later [`Self::restore`].
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            anchor_index: self.anchor_index(),
        }
    }

    /// Queues a captured position; the next [`Self::layout`] starts there.
    pub fn restore(&mut self, snapshot: LayoutSnapshot) {
        ldebug!(anchor_index = snapshot.anchor_index, "restore");
        self.pending_anchor = Some(snapshot.anchor_index);
        self.needs_layout = true;
    }

    /// Requests an instant jump: the next [`Self::layout`] call anchors
    /// `index` at the anchor edge. For an animated approach, resolve a
    /// direction with [`Self::direction_to`] and let the host's smooth-scroll
    /// mechanism feed [`Self::scroll_by`].
    pub fn scroll_to_index(&mut self, index: usize) {
        if self.item_count > 0 && index >= self.item_count {
            lwarn!(
                index,
                item_count = self.item_count,
                "scroll_to_index: index out of range, will be clamped"
            );
        }
        self.pending_anchor = Some(index);
        self.needs_layout = true;
    }

    /// Fills the viewport from scratch.
    ///
    /// Every currently attached item is recycled first. The fill anchors the
    /// pending jump target if one is queued, else the current anchor index
    /// (0 on a fresh engine), and walks `TowardsHigher` until the main-axis
    /// extent is covered. With `item_count == 0` the engine simply ends up
    /// empty.
    pub fn layout(&mut self, item_count: usize, provider: &mut impl ItemProvider<Handle = H>) {
        ldebug!(item_count, children = self.children.len(), "layout");
        let anchor_hint = if self.children.is_empty() {
            0
        } else {
            self.anchor_index()
        };
        for child in self.children.drain(..) {
            provider.remove_and_recycle(child.handle);
        }
        self.item_count = item_count;
        self.needs_layout = false;
        if item_count == 0 {
            self.pending_anchor = None;
            self.indices = ViewportIndices::default();
            return;
        }
        let extent = self.main_extent();
        if extent <= 0 {
            lwarn!(extent, "layout: non-positive main extent, nothing to fill");
            return;
        }

        let config = self.config();
        let movement = movement_direction_from_adapter(AdapterDirection::TowardsHigher, config);
        let bounds = self.inner_bounds();
        let anchor = self
            .pending_anchor
            .take()
            .unwrap_or(anchor_hint)
            .min(item_count - 1);

        let mut filled = 0;
        let mut index = anchor;
        let mut last_index = anchor;
        let mut prev: Option<ItemFrame> = None;
        while filled < extent {
            let handle = provider.create(index);
            let size = provider.measure(&handle);
            let main_size = size.main(self.options.orientation);
            debug_assert!(main_size > 0, "provider measured a non-positive main size");
            let mut frame = ItemFrame::unplaced(
                self.options.orientation,
                movement,
                self.non_scrolling_edges(size),
                main_size,
            );
            match &prev {
                Some(prev) => prev.place_following(&mut frame),
                None => frame.place_as_first(bounds, 0),
            }
            self.attach(
                AttachedItem {
                    index,
                    rect: frame.rect(),
                    handle,
                },
                movement,
            );
            filled += frame.size();
            last_index = index;
            index = index_loop::increment(index, item_count);
            prev = Some(frame);
        }

        self.indices = match movement {
            MovementDirection::TowardsBottomRight => ViewportIndices::new(anchor, last_index),
            MovementDirection::TowardsTopLeft => ViewportIndices::new(last_index, anchor),
        };
        ltrace!(
            top_left = self.indices.top_left,
            bottom_right = self.indices.bottom_right,
            children = self.children.len(),
            "layout filled"
        );
    }

    /// Scrolls the viewport by `delta` pixels along the main axis.
    ///
    /// Positive deltas reveal content towards the bottom/right, negative
    /// towards the top/left. Items are materialized on demand at the leading
    /// extreme and fully hidden trailing items are recycled afterwards.
    ///
    /// Returns the amount consumed: 0 when nothing is attached, else always
    /// the full `delta` — the circular space never runs out of items.
    pub fn scroll_by(&mut self, delta: i32, provider: &mut impl ItemProvider<Handle = H>) -> i32 {
        if delta == 0 || self.children.is_empty() || self.item_count == 0 {
            return 0;
        }
        let movement = if delta < 0 {
            MovementDirection::TowardsTopLeft
        } else {
            MovementDirection::TowardsBottomRight
        };
        ltrace!(delta, "scroll_by");
        let bounds = self.inner_bounds();
        let amount = (delta as i64).abs();
        let mut scrolled: i64 = 0;
        while scrolled < amount {
            let frame = self.extreme_frame(movement);
            let hidden = frame.hidden_size(bounds) as i64;
            let step = hidden.min(amount - scrolled);
            scrolled += step;
            self.offset_children(-movement.sign() * step as i32);
            if scrolled < amount {
                let new_index = self.step_index(movement);
                self.materialize(new_index, movement, provider);
            }
        }
        self.recycle_hidden(movement, provider);
        delta
    }

    /// Resolves the movement direction that reaches `target` fastest, using
    /// the default shortest-route estimator. `None` while empty.
    pub fn direction_to(&self, target: usize) -> Option<MovementDirection> {
        self.direction_to_with(target, deciders::estimate_shortest_route)
    }

    /// Resolves a movement direction towards `target` with a caller-chosen
    /// decider (see [`crate::deciders`]). `None` while empty.
    pub fn direction_to_with<F>(&self, target: usize, decider: F) -> Option<MovementDirection>
    where
        F: FnOnce(usize, &Self) -> MovementDirection,
    {
        if self.children.is_empty() || self.item_count == 0 {
            return None;
        }
        Some(decider(target, self))
    }

    /// The direction to `target` as a unit `(x, y)` vector for host smooth
    /// scrollers. `None` while empty.
    pub fn scroll_vector_to(&self, target: usize) -> Option<(f32, f32)> {
        self.scroll_vector_to_with(target, deciders::estimate_shortest_route)
    }

    /// [`Self::scroll_vector_to`] with a caller-chosen decider.
    pub fn scroll_vector_to_with<F>(&self, target: usize, decider: F) -> Option<(f32, f32)>
    where
        F: FnOnce(usize, &Self) -> MovementDirection,
    {
        let movement = self.direction_to_with(target, decider)?;
        Some(match self.options.orientation {
            Orientation::Horizontal => (movement.sign() as f32, 0.0),
            Orientation::Vertical => (0.0, movement.sign() as f32),
        })
    }

    /// The attached item bound to `target`, picked by the default
    /// closest-to-middle strategy. `None` while empty or when `target` is not
    /// attached.
    pub fn find_item_at(&self, target: usize) -> Option<&AttachedItem<H>> {
        self.find_item_at_with(target, pickers::closest_to_middle)
    }

    /// [`Self::find_item_at`] with a caller-chosen picker (see
    /// [`crate::pickers`]).
    pub fn find_item_at_with<'a, F>(&'a self, target: usize, picker: F) -> Option<&'a AttachedItem<H>>
    where
        F: FnOnce(usize, &'a Self) -> Option<&'a AttachedItem<H>>,
    {
        picker(target, self)
    }

    /// Whether any part of `rect` is inside the inner bounds on the main
    /// axis. Strict: an item abutting an edge exactly is not visible.
    pub(crate) fn rect_visible(&self, rect: Rect, bounds: Rect) -> bool {
        match self.options.orientation {
            Orientation::Horizontal => rect.right > bounds.left && rect.left < bounds.right,
            Orientation::Vertical => rect.bottom > bounds.top && rect.top < bounds.bottom,
        }
    }

    /// Cross-axis edges for a freshly measured item. Vertical lists align to
    /// the left inner edge (right under RTL); horizontal lists to the top.
    fn non_scrolling_edges(&self, size: Size) -> Rect {
        let bounds = self.inner_bounds();
        let mut rect = Rect::default();
        match (self.options.orientation, self.options.layout_direction) {
            (Orientation::Vertical, LayoutDirection::Rtl) => {
                rect.right = bounds.right;
                rect.left = rect.right - size.width;
            }
            (Orientation::Vertical, LayoutDirection::Ltr) => {
                rect.left = bounds.left;
                rect.right = rect.left + size.width;
            }
            (Orientation::Horizontal, _) => {
                rect.top = bounds.top;
                rect.bottom = rect.top + size.height;
            }
        }
        rect
    }

    /// Frame over the attached item at the extreme `movement` points at.
    /// Callers guarantee at least one item is attached.
    fn extreme_frame(&self, movement: MovementDirection) -> ItemFrame {
        let child = match movement {
            MovementDirection::TowardsTopLeft => &self.children[0],
            MovementDirection::TowardsBottomRight => &self.children[self.children.len() - 1],
        };
        ItemFrame::placed(self.options.orientation, movement, child.rect)
    }

    /// Advances the tracked extreme in `movement` one index step and returns
    /// the new extreme index.
    fn step_index(&mut self, movement: MovementDirection) -> usize {
        let adapter = adapter_direction_from_movement(movement, self.config());
        let index = self.indices.extreme(movement);
        let new_index = match adapter {
            AdapterDirection::TowardsHigher => index_loop::increment(index, self.item_count),
            AdapterDirection::TowardsLower => index_loop::decrement(index, self.item_count),
        };
        self.indices.extend(movement, new_index);
        new_index
    }

    /// Creates, measures, and places the item for `index` immediately after
    /// the current extreme in `movement`, making it the new extreme.
    fn materialize(
        &mut self,
        index: usize,
        movement: MovementDirection,
        provider: &mut impl ItemProvider<Handle = H>,
    ) {
        let handle = provider.create(index);
        let size = provider.measure(&handle);
        let main_size = size.main(self.options.orientation);
        debug_assert!(main_size > 0, "provider measured a non-positive main size");
        let mut frame = ItemFrame::unplaced(
            self.options.orientation,
            movement,
            self.non_scrolling_edges(size),
            main_size,
        );
        self.extreme_frame(movement).place_following(&mut frame);
        self.attach(
            AttachedItem {
                index,
                rect: frame.rect(),
                handle,
            },
            movement,
        );
    }

    /// Inserts at the end of the child list that `movement` points at,
    /// keeping the children in screen order.
    fn attach(&mut self, item: AttachedItem<H>, movement: MovementDirection) {
        match movement {
            MovementDirection::TowardsTopLeft => self.children.insert(0, item),
            MovementDirection::TowardsBottomRight => self.children.push(item),
        }
    }

    /// Shifts every attached rect by `amount` pixels along the main axis.
    fn offset_children(&mut self, amount: i32) {
        match self.options.orientation {
            Orientation::Horizontal => {
                for child in &mut self.children {
                    child.rect.left += amount;
                    child.rect.right += amount;
                }
            }
            Orientation::Vertical => {
                for child in &mut self.children {
                    child.rect.top += amount;
                    child.rect.bottom += amount;
                }
            }
        }
    }

    /// Recycles items that fully left the viewport after a scroll towards
    /// `movement`, then re-anchors the trailing extreme index.
    fn recycle_hidden(
        &mut self,
        movement: MovementDirection,
        provider: &mut impl ItemProvider<Handle = H>,
    ) {
        let bounds = self.inner_bounds();
        let leading_index = self.indices.extreme(movement);
        let count = self.children.len();

        // The first visible item bumps this to 0; it then counts the index
        // steps from the leading extreme to the last still-visible item.
        let mut distance_from_start: i64 = -1;
        let mut found_visible = false;
        let mut to_remove: Vec<usize> = Vec::new();

        // Walk from the extreme the scroll moved towards back to the
        // opposite edge; fully hidden items live past the visible run.
        for step in 0..count {
            let i = match movement {
                MovementDirection::TowardsBottomRight => count - 1 - step,
                MovementDirection::TowardsTopLeft => step,
            };
            if self.rect_visible(self.children[i].rect, bounds) {
                found_visible = true;
                distance_from_start += 1;
            } else if found_visible {
                to_remove.push(i);
            }
        }

        if to_remove.is_empty() {
            return;
        }

        // Highest child position first so the collected positions stay valid.
        to_remove.sort_unstable_by(|a, b| b.cmp(a));
        for i in to_remove {
            let child = self.children.remove(i);
            provider.remove_and_recycle(child.handle);
        }

        let adapter = adapter_direction_from_movement(movement.opposite(), self.config());
        let change = adapter.sign() as i64 * distance_from_start;
        let new_index = index_loop::wrap(leading_index as i64 + change, self.item_count);
        self.indices.reanchor(movement, new_index);
        ltrace!(
            distance_from_start,
            top_left = self.indices.top_left,
            bottom_right = self.indices.bottom_right,
            "recycle_hidden"
        );
    }
}
