// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slot layout parameters and the policy trait that produces them.

use core::f64::consts::PI;

use kurbo::{Affine, Vec2};

bitflags::bitflags! {
    /// Slot state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlotFlags: u8 {
        /// Slot holds the active item.
        const CURRENT  = 0b0000_0001;
        /// Slot is shown (non-zero opacity).
        const VISIBLE  = 0b0000_0010;
        /// Slot accepts pointer input. Never set on hidden slots.
        const PICKABLE = 0b0000_0100;
    }
}

/// Which slots follow the pointer while a drag is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DragFollow {
    /// Only the active slot is nudged.
    #[default]
    Current,
    /// Every visible slot is nudged, moving the whole strip.
    AllVisible,
}

/// Everything a [`LayoutPolicy`] needs to place one slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotContext {
    /// Index of the slot being placed.
    pub index: usize,
    /// Active index.
    pub active: usize,
    /// Total number of items; always greater than zero.
    pub len: usize,
    /// Whether navigation wraps around the ends.
    pub looping: bool,
    /// Raw drag delta from the gesture recognizer (`origin - current`), or `0.0`.
    pub drag: f64,
    /// Divisor applied to `drag` before it is added to an offset.
    pub drag_damping: f64,
    /// Which slots receive the damped drag.
    pub drag_follow: DragFollow,
}

impl SlotContext {
    /// A resting context (no drag) for `index`.
    pub const fn new(index: usize, active: usize, len: usize, looping: bool) -> Self {
        Self {
            index,
            active,
            len,
            looping,
            drag: 0.0,
            drag_damping: 10.0,
            drag_follow: DragFollow::Current,
        }
    }

    /// The drag contribution for a slot with the given flags.
    pub fn drag_offset(&self, flags: SlotFlags) -> f64 {
        let follows = match self.drag_follow {
            DragFollow::Current => flags.contains(SlotFlags::CURRENT),
            DragFollow::AllVisible => flags.contains(SlotFlags::VISIBLE),
        };
        if !follows || self.drag == 0.0 || self.drag_damping <= 0.0 {
            return 0.0;
        }
        self.drag / self.drag_damping
    }
}

/// Visual parameters for one slot, consumed by a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotLayout {
    /// Position relative to the active slot after any wraparound, in slots.
    pub signed_distance: isize,
    /// Rotation in degrees, clockwise in a y-down space.
    pub rotation_degrees: f64,
    /// Offset along the carousel axis from the resting center, in logical pixels.
    pub lateral_offset: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Stacking order; higher draws on top.
    pub stack_order: i32,
    /// State flags.
    pub flags: SlotFlags,
}

impl SlotLayout {
    /// Whether this slot holds the active item.
    pub const fn is_current(&self) -> bool {
        self.flags.contains(SlotFlags::CURRENT)
    }

    /// Whether this slot is shown.
    pub const fn is_visible(&self) -> bool {
        self.flags.contains(SlotFlags::VISIBLE)
    }

    /// Whether this slot should receive pointer input.
    pub const fn is_pickable(&self) -> bool {
        self.flags.contains(SlotFlags::PICKABLE)
    }

    /// Slot transform about its resting center: scale, then rotate, then translate.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale)
            .then_rotate(self.rotation_degrees * PI / 180.0)
            .then_translate(Vec2::new(self.lateral_offset, 0.0))
    }
}

/// Maps a slot's position relative to the active index to its visual parameters.
pub trait LayoutPolicy {
    /// Place one slot.
    fn layout(&self, cx: &SlotContext) -> SlotLayout;

    /// Active index to start on for a list of `len` items.
    ///
    /// Defaults to the middle item.
    fn initial_index(&self, len: usize) -> usize {
        len / 2
    }
}

impl<P: LayoutPolicy + ?Sized> LayoutPolicy for &P {
    fn layout(&self, cx: &SlotContext) -> SlotLayout {
        (**self).layout(cx)
    }

    fn initial_index(&self, len: usize) -> usize {
        (**self).initial_index(len)
    }
}

/// Signed distance `index - active`.
pub(crate) fn raw_distance(cx: &SlotContext) -> isize {
    to_isize(cx.index) - to_isize(cx.active)
}

pub(crate) fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
