// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item sources and their normalization into a uniform item list.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

/// Stable identity of an item, used by hosts as a diffing key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    /// Numeric identity; also used for positional fallbacks.
    Int(i64),
    /// Caller-provided string identity.
    Str(String),
}

impl ItemId {
    /// Identity derived from an item's position in the caller's input.
    pub fn positional(index: usize) -> Self {
        Self::Int(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for ItemId {
    fn from(value: usize) -> Self {
        Self::positional(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// A normalized item: identity plus image reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Identity, unique within its list.
    pub id: ItemId,
    /// Image reference (typically a URL).
    pub image: String,
}

impl Item {
    /// Create an item.
    pub fn new(id: impl Into<ItemId>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
        }
    }
}

/// Object-shaped item description.
///
/// `image` wins over `image_url` when both are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ItemEntry {
    /// Explicit identity; falls back to the entry's input position.
    pub id: Option<ItemId>,
    /// Preferred image reference.
    pub image: Option<String>,
    /// Alternate image reference, consulted only when `image` is absent.
    pub image_url: Option<String>,
}

/// One caller-supplied item, in any of the accepted shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemSource {
    /// A bare image reference.
    Url(String),
    /// An object with optional identity and image fields.
    Entry(ItemEntry),
}

impl From<&str> for ItemSource {
    fn from(value: &str) -> Self {
        Self::Url(value.into())
    }
}

impl From<String> for ItemSource {
    fn from(value: String) -> Self {
        Self::Url(value)
    }
}

impl From<ItemEntry> for ItemSource {
    fn from(value: ItemEntry) -> Self {
        Self::Entry(value)
    }
}

impl From<Item> for ItemSource {
    fn from(value: Item) -> Self {
        Self::Entry(ItemEntry {
            id: Some(value.id),
            image: Some(value.image),
            image_url: None,
        })
    }
}

impl ItemSource {
    /// Resolve this source, which sits at `position` in the caller's input.
    ///
    /// Returns `None` for entries with no usable image reference.
    pub fn resolve(self, position: usize) -> Option<Item> {
        let (id, image) = match self {
            Self::Url(image) => (None, image),
            Self::Entry(entry) => (entry.id, entry.image.or(entry.image_url)?),
        };
        if image.is_empty() {
            return None;
        }
        Some(Item {
            id: id.unwrap_or_else(|| ItemId::positional(position)),
            image,
        })
    }
}

/// Normalize caller input into an ordered item list.
///
/// - Strings become items keyed by their input position.
/// - Entries without an image reference are dropped; the positions of later
///   entries are unaffected.
/// - Later entries reusing an identity are dropped.
///
/// ```
/// use understory_carousel::{Item, ItemEntry, ItemSource, normalize_items};
///
/// let items = normalize_items([
///     ItemSource::Entry(ItemEntry { image: Some("x".into()), ..Default::default() }),
///     ItemSource::Entry(ItemEntry::default()),
///     ItemSource::Entry(ItemEntry {
///         id: Some("z9".into()),
///         image_url: Some("y".into()),
///         ..Default::default()
///     }),
/// ]);
/// assert_eq!(items, [Item::new(0, "x"), Item::new("z9", "y")]);
/// ```
pub fn normalize_items<I>(sources: I) -> Vec<Item>
where
    I: IntoIterator,
    I::Item: Into<ItemSource>,
{
    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for (position, source) in sources.into_iter().enumerate() {
        let Some(item) = source.into().resolve(position) else {
            continue;
        };
        if !seen.insert(item.id.clone()) {
            log::warn!(
                "dropping item at position {position}: duplicate id {}",
                item.id
            );
            continue;
        }
        items.push(item);
    }
    items
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn strings_use_position() {
        let items = normalize_items(["a.png", "b.png"]);
        assert_eq!(items, [Item::new(0, "a.png"), Item::new(1, "b.png")]);
    }

    #[test]
    fn empty_input_is_empty() {
        let items = normalize_items(Vec::<ItemSource>::new());
        assert!(items.is_empty());

        let absent: Option<Vec<ItemSource>> = None;
        assert!(normalize_items(absent.into_iter().flatten()).is_empty());
    }

    #[test]
    fn imageless_entries_are_dropped_without_shifting_ids() {
        let items = normalize_items(vec![
            ItemSource::Entry(ItemEntry::default()),
            ItemSource::from("b.png"),
            ItemSource::Entry(ItemEntry {
                image_url: Some("c.png".into()),
                ..ItemEntry::default()
            }),
        ]);
        assert_eq!(items, [Item::new(1, "b.png"), Item::new(2, "c.png")]);
    }

    #[test]
    fn image_takes_precedence_over_image_url() {
        let item = ItemSource::Entry(ItemEntry {
            id: Some(7.into()),
            image: Some("front.png".into()),
            image_url: Some("back.png".into()),
        })
        .resolve(0);
        assert_eq!(item, Some(Item::new(7, "front.png")));
    }

    #[test]
    fn empty_image_is_treated_as_missing() {
        assert_eq!(ItemSource::from("").resolve(0), None);

        // A present-but-empty `image` does not fall through to `image_url`.
        let entry = ItemSource::Entry(ItemEntry {
            image: Some(String::new()),
            image_url: Some("y".into()),
            ..ItemEntry::default()
        });
        assert_eq!(entry.resolve(0), None);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let items = normalize_items(vec![
            ItemSource::Entry(ItemEntry {
                id: Some("a".into()),
                image: Some("1.png".into()),
                ..ItemEntry::default()
            }),
            ItemSource::Entry(ItemEntry {
                id: Some("a".into()),
                image: Some("2.png".into()),
                ..ItemEntry::default()
            }),
            ItemSource::Entry(ItemEntry {
                id: Some(3.into()),
                image: Some("3.png".into()),
                ..ItemEntry::default()
            }),
            ItemSource::from("4.png"),
        ]);
        assert_eq!(
            items,
            [Item::new("a", "1.png"), Item::new(3, "3.png")],
            "the positional id 3 of the last entry collides with the explicit id 3"
        );
    }

    #[test]
    fn normalized_items_round_trip_as_sources() {
        let items = normalize_items(vec![
            ItemSource::from("a"),
            ItemSource::Entry(ItemEntry {
                id: Some("b".into()),
                image_url: Some("b.png".into()),
                ..ItemEntry::default()
            }),
        ]);
        // Re-normalizing a subset keeps the ids assigned the first time.
        let again = normalize_items(items.iter().skip(1).cloned());
        assert_eq!(again, [Item::new("b", "b.png")]);
    }

    #[test]
    fn string_and_int_ids_are_distinct() {
        let items = normalize_items(vec![
            ItemSource::Entry(ItemEntry {
                id: Some("0".into()),
                image: Some("a".into()),
                ..ItemEntry::default()
            }),
            ItemSource::from("b"),
        ]);
        assert_eq!(items.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_mixed_shapes() {
        let sources: Vec<ItemSource> =
            serde_json::from_str(r#"[{"image":"x"},{"foo":"bar"},{"imageUrl":"y","id":"z9"},"w"]"#)
                .unwrap();
        let items = normalize_items(sources);
        assert_eq!(
            items,
            [Item::new(0, "x"), Item::new("z9", "y"), Item::new(3, "w")]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn numeric_ids_deserialize_as_int() {
        let source: ItemSource = serde_json::from_str(r#"{"id": 12, "image": "a"}"#).unwrap();
        assert_eq!(source.resolve(0), Some(Item::new(12, "a")));
    }
}
