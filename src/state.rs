/// A lightweight, serializable snapshot of the layout's logical position.
///
/// The anchor index is enough to restore the user-visible position across
/// engine re-creation (process death, tab restore): laying out anchored at
/// the same index reproduces the same viewport, modulo sub-item offset.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    /// The adapter index at the anchor edge at capture time.
    pub anchor_index: usize,
}
