use alloc::string::String;

use crate::ItemId;

/// Default identity type for [`Item`].
pub type ItemKey = u64;

/// A record that can be listed and selected.
///
/// The controller only looks at the id (for dedup and selection membership) and the title
/// (for display). Everything else on the record is carried along untouched.
pub trait SelectItem: Clone {
    type Id: ItemId;

    fn id(&self) -> Self::Id;
    fn title(&self) -> &str;
}

/// A minimal id + title record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K = ItemKey> {
    pub id: K,
    pub title: String,
}

impl<K> Item<K> {
    pub fn new(id: K, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl<K: ItemId> SelectItem for Item<K> {
    type Id = K;

    fn id(&self) -> K {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// The rows a virtualization layer currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    /// Whether the range ends within `distance` rows of a list of `len` rows.
    pub fn is_near_end(&self, len: usize, distance: usize) -> bool {
        self.end_index.saturating_add(distance) >= len
    }
}
