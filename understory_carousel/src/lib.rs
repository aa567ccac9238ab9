// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Carousel: renderer-agnostic carousel and swiper state.
//!
//! This crate computes *what* a carousel shows: which item is active and where
//! every item goes. Drawing, animation, and styling are left to the host.
//!
//! The pieces are:
//!
//! - [`normalize_items`]: turns caller input ([`ItemSource`], either bare image
//!   references or objects with `id`/`image`/`image_url`) into a uniform list of
//!   [`Item`]s with stable identities.
//! - [`IndexModel`]: the active index, with [`EdgeMode::Clamp`] or
//!   [`EdgeMode::Wrap`] behavior at the ends.
//! - [`LayoutPolicy`]: maps a slot's position relative to the active item to a
//!   [`SlotLayout`] (offset, rotation, scale, opacity, stacking, flags). Two
//!   policies are provided:
//!   - [`CardLayout`]: fanned cards with tilted neighbors and hidden far cards.
//!   - [`SwiperLayout`]: a flat strip of slides with loop-aware neighbors.
//! - [`Carousel`]: a controller that owns the items, index, layout policy, and
//!   the swipe gesture recognizer from `understory_event_state`, and exposes
//!   button, indicator, and pointer handlers.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::Carousel;
//!
//! let mut carousel = Carousel::card(["a.png", "b.png", "c.png"]);
//! assert_eq!(carousel.active_index(), 1);
//!
//! carousel.next();
//! for slot in carousel.slots() {
//!     // Host frameworks would position `slot.item.image` using
//!     // `slot.layout.transform()`, `opacity`, and `stack_order`.
//!     let _ = (slot.item, slot.layout.transform());
//! }
//!
//! // In a three-card loop the first card sits right after the last one.
//! assert_eq!(carousel.slot(0).unwrap().signed_distance, 1);
//! ```
//!
//! ## Swiping
//!
//! ```rust
//! use kurbo::Point;
//! use understory_carousel::{Carousel, CarouselOptions};
//! use understory_event_state::swipe::SwipeResult;
//!
//! let mut swiper = Carousel::swiper(["one", "two", "three"], CarouselOptions::default());
//! assert_eq!(swiper.active_index(), 1);
//!
//! swiper.pointer_down(Point::new(100.0, 0.0));
//! swiper.pointer_move(Point::new(40.0, 0.0));
//! // While dragging, the active slide follows the pointer at a tenth of its travel.
//! assert_eq!(swiper.slot(1).unwrap().lateral_offset, 6.0);
//!
//! assert_eq!(swiper.pointer_up(), SwipeResult::Forward);
//! assert_eq!(swiper.active_index(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for items, sources, and options.
//! - `json`: [`items_from_json`] and [`options_from_json`], with errors reported
//!   through [`Error`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod card;
mod carousel;
mod index;
mod items;
#[cfg(feature = "json")]
mod json;
mod layout;
mod options;
mod swiper;

pub use card::CardLayout;
pub use carousel::{Carousel, Indicator, Slot};
pub use index::{EdgeMode, IndexModel};
pub use items::{Item, ItemEntry, ItemId, ItemSource, normalize_items};
#[cfg(feature = "json")]
pub use json::{Error, items_from_json, options_from_json};
pub use layout::{DragFollow, LayoutPolicy, SlotContext, SlotFlags, SlotLayout};
pub use options::{CarouselOptions, IndicatorColors};
pub use swiper::SwiperLayout;
