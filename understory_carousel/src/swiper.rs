// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat slide strip layout with loop-aware neighbors.

use crate::layout::{LayoutPolicy, SlotContext, SlotFlags, SlotLayout, raw_distance, to_isize};

/// Swiper layout: slides in a row, one `slide_offset` apart, active in the middle.
///
/// When looping, the previous and next neighbors are found modulo the length,
/// so the first and last slides sit next to each other. Other slides take the
/// wrapped path only when it is strictly shorter than the direct one.
///
/// Every slide stays visible; the active one is drawn opaque and on top.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwiperLayout {
    /// Distance between neighboring slide centers (slide width plus gap).
    pub slide_offset: f64,
    /// Index to start on, clamped to the list.
    pub start_index: usize,
}

impl SwiperLayout {
    /// Default slide width in logical pixels.
    pub const SLIDE_WIDTH: f64 = 234.0;
    /// Default slide height in logical pixels.
    pub const SLIDE_HEIGHT: f64 = 169.0;
    /// Default gap between slides in logical pixels.
    pub const SLIDE_GAP: f64 = 24.0;
    /// Opacity of slides other than the active one.
    pub const INACTIVE_OPACITY: f64 = 0.8;

    /// Create a layout for slides `width` wide separated by `gap`.
    pub fn new(width: f64, gap: f64) -> Self {
        Self {
            slide_offset: (width + gap).max(0.0),
            start_index: 1,
        }
    }

    /// Set the starting index.
    #[must_use]
    pub const fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Position of a slide relative to the active one, in slots.
    pub fn relative_position(cx: &SlotContext) -> isize {
        let raw = raw_distance(cx);
        if raw == 0 || !cx.looping {
            return raw;
        }

        let len = to_isize(cx.len);
        let active = to_isize(cx.active);
        let index = to_isize(cx.index);
        if index == (active - 1 + len) % len {
            return -1;
        }
        if index == (active + 1) % len {
            return 1;
        }

        let distance = raw.abs();
        let reverse = len - distance;
        if reverse < distance {
            let direction = if (active + reverse) % len == index { 1 } else { -1 };
            direction * reverse
        } else {
            raw
        }
    }
}

impl Default for SwiperLayout {
    fn default() -> Self {
        Self::new(Self::SLIDE_WIDTH, Self::SLIDE_GAP)
    }
}

impl LayoutPolicy for SwiperLayout {
    fn layout(&self, cx: &SlotContext) -> SlotLayout {
        debug_assert!(cx.len > 0, "layout requested for an empty list");

        let p = Self::relative_position(cx);
        let current = p == 0;
        let mut flags = SlotFlags::VISIBLE | SlotFlags::PICKABLE;
        flags.set(SlotFlags::CURRENT, current);

        SlotLayout {
            signed_distance: p,
            rotation_degrees: 0.0,
            lateral_offset: p as f64 * self.slide_offset + cx.drag_offset(flags),
            scale: 1.0,
            opacity: if current { 1.0 } else { Self::INACTIVE_OPACITY },
            stack_order: if current { 2 } else { 1 },
            flags,
        }
    }

    fn initial_index(&self, len: usize) -> usize {
        self.start_index.min(len.saturating_sub(1))
    }
}
