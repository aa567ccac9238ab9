// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing configuration.

use alloc::string::String;

use understory_event_state::swipe::{Axis, SwipeState};

use crate::layout::DragFollow;

/// Style tokens for indicator buttons, passed through to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct IndicatorColors {
    /// Token for the indicator of the active item.
    pub active: String,
    /// Token for every other indicator.
    pub inactive: String,
}

impl Default for IndicatorColors {
    fn default() -> Self {
        Self {
            active: "bg-blue-500".into(),
            inactive: "bg-gray-300".into(),
        }
    }
}

/// Behavior switches for a [`Carousel`](crate::Carousel).
///
/// The defaults describe a swiper: no looping, indicators shown. Use
/// [`CarouselOptions::card`] for the card carousel preset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselOptions {
    /// Whether navigation wraps around the ends.
    #[cfg_attr(feature = "serde", serde(alias = "loop"))]
    pub looping: bool,
    /// Whether per-item indicator buttons are produced.
    pub show_indicators: bool,
    /// Indicator style tokens.
    pub indicator_colors: IndicatorColors,
    /// Travel (exclusive) a release needs to count as a swipe.
    pub swipe_threshold: f64,
    /// Divisor applied to the live drag before it moves slots.
    pub drag_damping: f64,
    /// Which slots follow the live drag.
    pub drag_follow: DragFollow,
    /// Axis along which swipes are measured.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub axis: Axis,
}

impl CarouselOptions {
    /// Default drag damping divisor.
    pub const DEFAULT_DRAG_DAMPING: f64 = 10.0;

    /// Card carousel preset: looping, no indicators.
    pub fn card() -> Self {
        Self {
            looping: true,
            show_indicators: false,
            ..Self::default()
        }
    }

    /// Set [`looping`](Self::looping).
    #[must_use]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set [`show_indicators`](Self::show_indicators).
    #[must_use]
    pub fn with_indicators(mut self, show: bool) -> Self {
        self.show_indicators = show;
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            looping: false,
            show_indicators: true,
            indicator_colors: IndicatorColors::default(),
            swipe_threshold: SwipeState::DEFAULT_THRESHOLD,
            drag_damping: Self::DEFAULT_DRAG_DAMPING,
            drag_follow: DragFollow::Current,
            axis: Axis::Horizontal,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{"loop": true, "indicatorColors": {"active": "red"}}"#)
                .unwrap();
        assert!(options.looping);
        assert!(options.show_indicators);
        assert_eq!(options.indicator_colors.active, "red");
        assert_eq!(options.indicator_colors.inactive, "bg-gray-300");
        assert_eq!(options.swipe_threshold, 50.0);
    }

    #[test]
    fn drag_follow_uses_camel_case() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{"dragFollow": "allVisible", "showIndicators": false}"#)
                .unwrap();
        assert_eq!(options.drag_follow, DragFollow::AllVisible);
        assert!(!options.show_indicators);
    }
}
