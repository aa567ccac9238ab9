// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Looping three-slide swiper driven by scripted pointer gestures.
//!
//! A stand-in window counts its global pointer listeners so you can see them
//! attach on press and detach on release, including when a drag leaves the
//! widget and the capture is lost.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example swiper`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_carousel::{Carousel, CarouselOptions, SwiperLayout};
use understory_event_state::capture::PointerHooks;

/// Pretend window that tracks how many global listeners are registered.
#[derive(Debug, Default)]
struct Window {
    listeners: u32,
}

impl PointerHooks for Window {
    fn attach(&mut self) {
        self.listeners += 2; // mousemove + mouseup
    }

    fn detach(&mut self) {
        self.listeners -= 2;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = CarouselOptions::default().with_looping(true);
    let mut swiper = Carousel::with_hooks(
        SwiperLayout::default(),
        options,
        ["Slide 1", "Slide 2", "Slide 3"],
        Window::default(),
    );
    print_state("initial", &swiper);

    // Drag left by 60px: past the 50px threshold, so the next slide comes in.
    gesture(&mut swiper, "swipe left 60px", &[100.0, 70.0, 40.0]);

    // Drag right by 20px: just a tap.
    gesture(&mut swiper, "nudge right 20px", &[100.0, 120.0]);

    // Drag right and lose capture before release.
    swiper.pointer_down(Point::new(10.0, 0.0));
    swiper.pointer_move(Point::new(200.0, 0.0));
    println!("\n-- dragging, listeners={}", swiper.hooks().listeners);
    let result = swiper.pointer_capture_lost();
    println!("-- capture lost -> {result:?}");
    print_state("after capture loss", &swiper);

    // Indicator click.
    swiper.go_to(0);
    print_state("indicator 0 clicked", &swiper);
}

fn gesture<H: PointerHooks>(swiper: &mut Carousel<SwiperLayout, H>, label: &str, xs: &[f64]) {
    let Some((first, rest)) = xs.split_first() else {
        return;
    };
    println!("\n-- {label}");
    swiper.pointer_down(Point::new(*first, 0.0));
    for x in rest {
        swiper.pointer_move(Point::new(*x, 0.0));
        if let Some(active) = swiper.slot(swiper.active_index()) {
            println!(
                "   drag delta {:+.0}, active slide offset {:+.1}",
                swiper.drag_delta(),
                active.lateral_offset
            );
        }
    }
    println!("   released -> {:?}", swiper.pointer_up());
    print_state("after gesture", swiper);
}

fn print_state<H: PointerHooks>(label: &str, swiper: &Carousel<SwiperLayout, H>) {
    println!("\n== {label}: active {} ==", swiper.active_index());
    for slot in swiper.slots() {
        println!(
            "  {:<8} x={:+7.1} opacity={:.1} z={}",
            slot.item.image,
            slot.layout.lateral_offset,
            slot.layout.opacity,
            slot.layout.stack_order
        );
    }
    let dots: String = swiper
        .indicators()
        .iter()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect();
    println!("  indicators {dots}");
}
