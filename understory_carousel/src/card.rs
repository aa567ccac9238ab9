// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fanned card layout: the active card in front, tilted neighbors to either side.

use crate::layout::{LayoutPolicy, SlotContext, SlotFlags, SlotLayout, raw_distance, to_isize};

/// Card carousel layout.
///
/// Slots at relative position `p` (after wraparound when looping) are placed as:
///
/// | `p`     | offset         | rotation | scale  | opacity | stack |
/// |---------|----------------|----------|--------|---------|-------|
/// | `0`     | `0`            | `0°`     | `1.0`  | `1`     | `3`   |
/// | `±1`    | `p * spacing`  | `p * 5°` | `0.92` | `1`     | `2`   |
/// | other   | `0`            | `0°`     | `0.85` | `0`     | `1`   |
///
/// With exactly two items both are always shown.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardLayout {
    /// Distance between neighboring card centers, in logical pixels.
    pub spacing: f64,
}

impl CardLayout {
    /// Spacing used when no viewport width is known.
    pub const DEFAULT_SPACING: f64 = 140.0;
    /// Lower bound of the responsive spacing.
    pub const MIN_SPACING: f64 = 100.0;
    /// Upper bound of the responsive spacing.
    pub const MAX_SPACING: f64 = 180.0;
    /// Responsive spacing as a fraction of the viewport width.
    pub const SPACING_VIEWPORT_FRACTION: f64 = 0.15;
    /// Tilt per slot of relative position, in degrees.
    pub const TILT_DEGREES: f64 = 5.0;
    /// Scale of visible neighbors.
    pub const NEIGHBOR_SCALE: f64 = 0.92;
    /// Scale of hidden cards.
    pub const HIDDEN_SCALE: f64 = 0.85;

    /// Create a layout with a fixed `spacing`.
    ///
    /// Negative spacing is clamped to zero.
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing: if spacing.is_sign_negative() {
                0.0
            } else {
                spacing
            },
        }
    }

    /// Spacing derived from the viewport width: 15% of it, kept within
    /// `100..=180` logical pixels.
    pub fn responsive(viewport_width: f64) -> Self {
        Self::new(
            (viewport_width * Self::SPACING_VIEWPORT_FRACTION)
                .clamp(Self::MIN_SPACING, Self::MAX_SPACING),
        )
    }

    /// Relative position of a slot, taking the shorter way around when looping.
    ///
    /// When looping, a distance is wrapped only if it exceeds half the length,
    /// so the result lies in `[-len/2, len/2]` and an even split keeps the
    /// direct path.
    pub fn relative_position(cx: &SlotContext) -> isize {
        let mut relative = raw_distance(cx);
        if !cx.looping {
            return relative;
        }
        let len = to_isize(cx.len);
        if 2 * relative > len {
            relative -= len;
        } else if 2 * relative < -len {
            relative += len;
        }
        relative
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPACING)
    }
}

impl LayoutPolicy for CardLayout {
    fn layout(&self, cx: &SlotContext) -> SlotLayout {
        debug_assert!(cx.len > 0, "layout requested for an empty list");

        if cx.len == 1 {
            let flags = SlotFlags::CURRENT | SlotFlags::VISIBLE | SlotFlags::PICKABLE;
            return SlotLayout {
                signed_distance: 0,
                rotation_degrees: 0.0,
                lateral_offset: cx.drag_offset(flags),
                scale: 1.0,
                opacity: 1.0,
                stack_order: 3,
                flags,
            };
        }

        let p = Self::relative_position(cx);
        let current = p == 0;
        let visible = p.abs() <= 1 || cx.len == 2;

        let mut flags = SlotFlags::empty();
        flags.set(SlotFlags::CURRENT, current);
        flags.set(SlotFlags::VISIBLE | SlotFlags::PICKABLE, visible);

        let pf = p as f64;

        let (rotation_degrees, lateral_offset) = if visible {
            (pf * Self::TILT_DEGREES, pf * self.spacing)
        } else {
            (0.0, 0.0)
        };

        SlotLayout {
            signed_distance: p,
            rotation_degrees,
            lateral_offset: lateral_offset + cx.drag_offset(flags),
            scale: if current {
                1.0
            } else if visible {
                Self::NEIGHBOR_SCALE
            } else {
                Self::HIDDEN_SCALE
            },
            opacity: if visible { 1.0 } else { 0.0 },
            stack_order: if current {
                3
            } else if visible {
                2
            } else {
                1
            },
            flags,
        }
    }
}
