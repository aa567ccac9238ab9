// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding item lists and options from JSON text.

use alloc::vec::Vec;

use thiserror::Error;

use crate::{CarouselOptions, Item, ItemSource, normalize_items};

/// Errors produced while decoding carousel input.
#[derive(Debug, Error)]
pub enum Error {
    /// The item list was not a JSON array of strings and objects.
    #[error("item list json: {0}")]
    Items(#[source] serde_json::Error),
    /// The options object could not be decoded.
    #[error("carousel options json: {0}")]
    Options(#[source] serde_json::Error),
}

/// Decode a JSON array of item sources and normalize it.
///
/// `null` is accepted as an absent list.
///
/// ```
/// use understory_carousel::{Item, items_from_json};
///
/// let items = items_from_json(r#"[{"image":"x"},{"foo":"bar"},{"imageUrl":"y","id":"z9"}]"#)?;
/// assert_eq!(items, [Item::new(0, "x"), Item::new("z9", "y")]);
/// # Ok::<(), understory_carousel::Error>(())
/// ```
pub fn items_from_json(text: &str) -> Result<Vec<Item>, Error> {
    let sources: Option<Vec<ItemSource>> = serde_json::from_str(text).map_err(Error::Items)?;
    Ok(normalize_items(sources.into_iter().flatten()))
}

/// Decode [`CarouselOptions`]; missing fields take their defaults.
pub fn options_from_json(text: &str) -> Result<CarouselOptions, Error> {
    serde_json::from_str(text).map_err(Error::Options)
}
