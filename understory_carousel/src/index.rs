// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The active-index model.

/// What happens when navigation runs past either end of the list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EdgeMode {
    /// Stop at the first and last item.
    #[default]
    Clamp,
    /// Continue from the opposite end.
    Wrap,
}

impl EdgeMode {
    /// `Wrap` if `looping`, `Clamp` otherwise.
    pub const fn from_looping(looping: bool) -> Self {
        if looping { Self::Wrap } else { Self::Clamp }
    }
}

/// Active index over a list of `len` items.
///
/// Invariant: `active < len` whenever `len > 0`, and `active == 0` otherwise.
/// Every mutator returns `true` if the active index changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexModel {
    active: usize,
    len: usize,
    edge: EdgeMode,
}

impl IndexModel {
    /// Create a model over `len` items starting at `active` (clamped).
    pub const fn new(len: usize, active: usize, edge: EdgeMode) -> Self {
        Self {
            active: clamp_index(active, len),
            len,
            edge,
        }
    }

    /// Create a model starting on the middle item, `floor(len / 2)`.
    pub const fn centered(len: usize, edge: EdgeMode) -> Self {
        Self::new(len, len / 2, edge)
    }

    /// Current active index.
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Number of items.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no items.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current edge behavior.
    pub const fn edge(&self) -> EdgeMode {
        self.edge
    }

    /// Change the edge behavior. The active index is unaffected.
    pub fn set_edge(&mut self, edge: EdgeMode) {
        self.edge = edge;
    }

    /// Whether navigation can ever move the index (more than one item).
    pub const fn can_navigate(&self) -> bool {
        self.len > 1
    }

    /// Move to the next item.
    ///
    /// Wraps to `0` at the end in [`EdgeMode::Wrap`], stays put in
    /// [`EdgeMode::Clamp`]. No-op with one item or none.
    pub fn advance(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        if self.edge == EdgeMode::Clamp && self.active == self.len - 1 {
            return false;
        }
        self.active = (self.active + 1) % self.len;
        true
    }

    /// Move to the previous item.
    ///
    /// Wraps to the last item at `0` in [`EdgeMode::Wrap`], stays put in
    /// [`EdgeMode::Clamp`]. No-op with one item or none.
    pub fn retreat(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        if self.edge == EdgeMode::Clamp && self.active == 0 {
            return false;
        }
        self.active = (self.active + self.len - 1) % self.len;
        true
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range indices are clamped to the last item.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.len && self.len > 0 {
            log::warn!(
                "active index {index} out of range for {} items; clamping",
                self.len
            );
        }
        let index = clamp_index(index, self.len);
        let changed = index != self.active;
        self.active = index;
        changed
    }

    /// Apply a new item count, clamping the active index into range.
    pub fn set_len(&mut self, len: usize) -> bool {
        self.len = len;
        let index = clamp_index(self.active, len);
        let changed = index != self.active;
        self.active = index;
        changed
    }
}

const fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index >= len {
        len - 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_picks_floor_midpoint() {
        assert_eq!(IndexModel::centered(0, EdgeMode::Wrap).active(), 0);
        assert_eq!(IndexModel::centered(1, EdgeMode::Wrap).active(), 0);
        assert_eq!(IndexModel::centered(2, EdgeMode::Wrap).active(), 1);
        assert_eq!(IndexModel::centered(6, EdgeMode::Wrap).active(), 3);
        assert_eq!(IndexModel::centered(7, EdgeMode::Wrap).active(), 3);
    }

    #[test]
    fn wrap_cycles_in_both_directions() {
        let mut model = IndexModel::new(3, 2, EdgeMode::Wrap);
        assert!(model.advance());
        assert_eq!(model.active(), 0);
        assert!(model.retreat());
        assert_eq!(model.active(), 2);
    }

    #[test]
    fn clamp_stops_at_edges() {
        let mut model = IndexModel::new(3, 2, EdgeMode::Clamp);
        assert!(!model.advance());
        assert_eq!(model.active(), 2);

        model.set_active(0);
        assert!(!model.retreat());
        assert_eq!(model.active(), 0);
    }

    #[test]
    fn single_and_empty_lists_never_move() {
        for edge in [EdgeMode::Clamp, EdgeMode::Wrap] {
            let mut one = IndexModel::new(1, 0, edge);
            assert!(!one.advance());
            assert!(!one.retreat());
            assert_eq!(one.active(), 0);

            let mut none = IndexModel::new(0, 5, edge);
            assert_eq!(none.active(), 0);
            assert!(!none.advance());
            assert!(!none.retreat());
            assert!(!none.set_active(3));
            assert_eq!(none.active(), 0);
        }
    }

    #[test]
    fn advance_then_retreat_round_trips_when_wrapping() {
        for len in 1..8 {
            for start in 0..len {
                let mut model = IndexModel::new(len, start, EdgeMode::Wrap);
                model.advance();
                model.retreat();
                assert_eq!(model.active(), start, "len={len} start={start}");

                model.retreat();
                model.advance();
                assert_eq!(model.active(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn clamped_round_trip_breaks_only_at_edges() {
        for len in 2..8 {
            for start in 0..len {
                let mut model = IndexModel::new(len, start, EdgeMode::Clamp);
                model.advance();
                model.retreat();
                let expected = if start == len - 1 { len - 2 } else { start };
                assert_eq!(model.active(), expected, "len={len} start={start}");

                let mut model = IndexModel::new(len, start, EdgeMode::Clamp);
                model.retreat();
                model.advance();
                let expected = if start == 0 { 1 } else { start };
                assert_eq!(model.active(), expected, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn set_active_clamps_out_of_range() {
        let mut model = IndexModel::new(4, 0, EdgeMode::Clamp);
        assert!(model.set_active(9));
        assert_eq!(model.active(), 3);
        assert!(!model.set_active(3));
    }

    #[test]
    fn shrinking_len_clamps_active() {
        let mut model = IndexModel::new(6, 5, EdgeMode::Wrap);
        assert!(model.set_len(3));
        assert_eq!(model.active(), 2);

        assert!(!model.set_len(10));
        assert_eq!(model.active(), 2);

        assert!(model.set_len(0));
        assert_eq!(model.active(), 0);
    }
}
