use alloc::vec::Vec;

use crate::SelectItem;
use crate::key::IdIndexMap;

/// The backing list behind the menu: fetch order, unique by id.
///
/// An id is indexed on insertion, so `push` never appends a second entry for an id that is
/// already present. Entries are only removed all at once via [`ItemsList::clear`].
#[derive(Clone)]
pub struct ItemsList<T: SelectItem> {
    items: Vec<T>,
    index: IdIndexMap<T::Id>,
}

impl<T: SelectItem> Default for ItemsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SelectItem> ItemsList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: IdIndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` unless its id is already listed. Returns `true` when appended.
    pub fn push(&mut self, item: T) -> bool {
        let id = item.id();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.items.len());
        self.items.push(item);
        true
    }

    /// Appends every item whose id is not yet listed. Returns the number appended.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        let mut appended = 0usize;
        for item in items {
            if self.push(item) {
                appended += 1;
            }
        }
        appended
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_by_id(&self, id: &T::Id) -> Option<&T> {
        self.position(id).and_then(|i| self.items.get(i))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: SelectItem + core::fmt::Debug> core::fmt::Debug for ItemsList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemsList")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<'a, T: SelectItem> IntoIterator for &'a ItemsList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
