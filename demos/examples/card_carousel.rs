// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card carousel driven by its previous/next buttons.
//!
//! Items are decoded from JSON the way a host would receive them, including an
//! entry without an image that gets dropped. The carousel is then stepped in
//! both directions and every card's layout is printed in draw order.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example card_carousel`

use tracing_subscriber::EnvFilter;
use understory_carousel::{CardLayout, Carousel, CarouselOptions, items_from_json};

const ITEMS: &str = r#"[
    "https://picsum.photos/id/1035/600/600",
    "https://picsum.photos/id/1043/600/600",
    { "id": "forest", "imageUrl": "https://picsum.photos/id/1059/600/600" },
    { "caption": "no image, dropped" },
    "https://picsum.photos/id/1060/600/600",
    "https://picsum.photos/id/1069/600/600",
    { "image": "https://picsum.photos/id/1074/600/600" }
]"#;

fn main() -> Result<(), understory_carousel::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let items = items_from_json(ITEMS)?;
    // A 1280px wide viewport resolves the responsive spacing to its upper bound.
    let mut carousel = Carousel::new(
        CardLayout::responsive(1280.0),
        CarouselOptions::card(),
        items.clone(),
    );
    print_cards("initial", &carousel);

    carousel.next();
    print_cards("after next", &carousel);

    for _ in 0..5 {
        carousel.prev();
    }
    print_cards("after 5x prev (wrapped)", &carousel);

    carousel.set_sources(items.into_iter().take(2));
    print_cards("shrunk to two items", &carousel);

    Ok(())
}

fn print_cards(label: &str, carousel: &Carousel<CardLayout>) {
    println!(
        "\n== {label}: active {} of {} ==",
        carousel.active_index(),
        carousel.len()
    );
    let mut slots = carousel.slots();
    slots.sort_by_key(|slot| slot.layout.stack_order);
    for slot in slots {
        let l = slot.layout;
        println!(
            "  [{}] id={:<3} p={:+} x={:+7.1} rot={:+4.1} scale={:.2} opacity={:.0} z={} pickable={}",
            slot.index,
            slot.item.id.to_string(),
            l.signed_distance,
            l.lateral_offset,
            l.rotation_degrees,
            l.scale,
            l.opacity,
            l.stack_order,
            l.is_pickable(),
        );
    }
}
