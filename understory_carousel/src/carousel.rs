// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: items, active index, gestures, and layout in one place.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use understory_event_state::capture::PointerHooks;
use understory_event_state::swipe::{SwipeResult, SwipeState};

use crate::card::CardLayout;
use crate::index::{EdgeMode, IndexModel};
use crate::items::{Item, ItemEntry, ItemId, ItemSource, normalize_items};
use crate::layout::{LayoutPolicy, SlotContext, SlotLayout};
use crate::options::CarouselOptions;
use crate::swiper::SwiperLayout;

/// One item together with its computed layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot<'a> {
    /// Position of the item in the list.
    pub index: usize,
    /// The item.
    pub item: &'a Item,
    /// Where and how to draw it.
    pub layout: SlotLayout,
}

/// A "go to item" button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indicator<'a> {
    /// Item index the button jumps to.
    pub index: usize,
    /// Whether this is the active item's indicator.
    pub active: bool,
    /// Style token for the renderer.
    pub color: &'a str,
}

/// Carousel state driven by button clicks and swipe gestures.
///
/// The controller owns the normalized items, the [`IndexModel`], a
/// [`LayoutPolicy`] and the [`SwipeState`] of the current gesture. Hosts call
/// the input methods from their event handlers and read [`slots`](Self::slots)
/// to render.
///
/// `H` registers the global pointer listeners a drag needs; see
/// [`PointerHooks`].
#[derive(Debug)]
pub struct Carousel<P: LayoutPolicy, H: PointerHooks = ()> {
    items: Vec<Item>,
    index: IndexModel,
    layout: P,
    swipe: SwipeState<H>,
    options: CarouselOptions,
}

impl Carousel<CardLayout> {
    /// A looping card carousel over `sources`, starting on the middle card.
    pub fn card<I>(sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemSource>,
    {
        Self::new(CardLayout::default(), CarouselOptions::card(), sources)
    }
}

impl Carousel<SwiperLayout> {
    /// A three-slide swiper with ids `1..=3`, starting on the second slide.
    pub fn swiper<S: Into<String>>(images: [S; 3], options: CarouselOptions) -> Self {
        let sources = images.into_iter().zip(1_i64..).map(|(image, id)| ItemEntry {
            id: Some(id.into()),
            image: Some(image.into()),
            image_url: None,
        });
        Self::new(SwiperLayout::default(), options, sources)
    }
}

impl<P: LayoutPolicy> Carousel<P> {
    /// Create a carousel over `sources` without pointer hooks.
    pub fn new<I>(layout: P, options: CarouselOptions, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemSource>,
    {
        Self::with_hooks(layout, options, sources, ())
    }
}

impl<P: LayoutPolicy, H: PointerHooks> Carousel<P, H> {
    /// Create a carousel whose drags attach `hooks` while in progress.
    pub fn with_hooks<I>(layout: P, options: CarouselOptions, sources: I, hooks: H) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemSource>,
    {
        let items = normalize_items(sources);
        let index = IndexModel::new(
            items.len(),
            layout.initial_index(items.len()),
            EdgeMode::from_looping(options.looping),
        );
        let swipe = SwipeState::with_hooks(hooks, options.swipe_threshold, options.axis);
        Self {
            items,
            index,
            layout,
            swipe,
            options,
        }
    }

    /// Replace the items, keeping the active index where it still fits.
    pub fn set_sources<I>(&mut self, sources: I)
    where
        I: IntoIterator,
        I::Item: Into<ItemSource>,
    {
        self.items = normalize_items(sources);
        if self.index.set_len(self.items.len()) {
            log::debug!(
                "items shrank to {}; active index clamped to {}",
                self.items.len(),
                self.index.active()
            );
        }
    }

    /// Normalized items, in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the active item (`0` when empty).
    pub fn active_index(&self) -> usize {
        self.index.active()
    }

    /// The active item, if any.
    pub fn active_item(&self) -> Option<&Item> {
        self.items.get(self.index.active())
    }

    /// Position of the item with identity `id`.
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }

    /// Whether previous/next controls should be enabled.
    pub fn can_navigate(&self) -> bool {
        self.index.can_navigate()
    }

    /// The options in effect.
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The layout policy.
    pub fn layout_policy(&self) -> &P {
        &self.layout
    }

    /// Turn looping on or off.
    pub fn set_looping(&mut self, looping: bool) {
        self.options.looping = looping;
        self.index.set_edge(EdgeMode::from_looping(looping));
    }

    /// "Next" button handler.
    pub fn next(&mut self) -> bool {
        let changed = self.index.advance();
        if changed {
            log::debug!("advanced to {}", self.index.active());
        }
        changed
    }

    /// "Previous" button handler.
    pub fn prev(&mut self) -> bool {
        let changed = self.index.retreat();
        if changed {
            log::debug!("retreated to {}", self.index.active());
        }
        changed
    }

    /// Indicator handler: jump to `index` (clamped).
    pub fn go_to(&mut self, index: usize) -> bool {
        let changed = self.index.set_active(index);
        if changed {
            log::debug!("jumped to {}", self.index.active());
        }
        changed
    }

    /// Pointer or touch pressed on the carousel.
    pub fn pointer_down(&mut self, position: Point) {
        self.swipe.on_down(position);
    }

    /// Pointer moved. Returns `false` if no drag is in progress.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        self.swipe.on_move(position)
    }

    /// Pointer released; navigates if the gesture was a swipe.
    pub fn pointer_up(&mut self) -> SwipeResult {
        let result = self.swipe.on_up();
        self.apply_swipe(result);
        result
    }

    /// The host lost pointer capture; treated like a release.
    pub fn pointer_capture_lost(&mut self) -> SwipeResult {
        let result = self.swipe.on_capture_lost();
        self.apply_swipe(result);
        result
    }

    /// Abandon the current gesture without navigating.
    pub fn pointer_cancel(&mut self) -> bool {
        self.swipe.cancel()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging()
    }

    /// The raw drag delta of the current gesture, `0.0` when idle.
    pub fn drag_delta(&self) -> f64 {
        self.swipe.drag_delta()
    }

    /// Shared access to the pointer hooks.
    pub fn hooks(&self) -> &H {
        self.swipe.hooks()
    }

    /// Layout for the item at `index`, including the live drag.
    pub fn slot(&self, index: usize) -> Option<SlotLayout> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.layout.layout(&self.context(index)))
    }

    /// Every item with its layout, in item order.
    ///
    /// Renderers should draw by ascending [`SlotLayout::stack_order`].
    pub fn slots(&self) -> Vec<Slot<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| Slot {
                index,
                item,
                layout: self.layout.layout(&self.context(index)),
            })
            .collect()
    }

    /// Indicator buttons, or none when indicators are disabled.
    pub fn indicators(&self) -> Vec<Indicator<'_>> {
        if !self.options.show_indicators {
            return Vec::new();
        }
        let colors = &self.options.indicator_colors;
        (0..self.items.len())
            .map(|index| {
                let active = index == self.index.active();
                Indicator {
                    index,
                    active,
                    color: if active {
                        &colors.active
                    } else {
                        &colors.inactive
                    },
                }
            })
            .collect()
    }

    fn context(&self, index: usize) -> SlotContext {
        SlotContext {
            index,
            active: self.index.active(),
            len: self.items.len(),
            looping: self.options.looping,
            drag: self.swipe.drag_delta(),
            drag_damping: self.options.drag_damping,
            drag_follow: self.options.drag_follow,
        }
    }

    fn apply_swipe(&mut self, result: SwipeResult) {
        match result {
            SwipeResult::Forward => {
                self.next();
            }
            SwipeResult::Backward => {
                self.prev();
            }
            SwipeResult::Tap | SwipeResult::NoGesture => {}
        }
    }
}
