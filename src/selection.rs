use alloc::vec::Vec;

use crate::{ItemsList, SelectItem};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

impl SelectionMode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }
}

/// An externally controlled value, as bound by the host (two-way binding).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelValue<T> {
    Empty,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for ModelValue<T> {
    fn default() -> Self {
        Self::Empty
    }
}

/// The current selection.
///
/// In `Multiple` mode entries are unique by id and kept in selection order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection<T> {
    Single(Option<T>),
    Multiple(Vec<T>),
}

impl<T: SelectItem> Selection<T> {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(item) => usize::from(item.is_some()),
            Self::Multiple(items) => items.len(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Single(item) => item.as_slice(),
            Self::Multiple(items) => items,
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.iter().any(|it| it.id() == *id)
    }

    /// Single mode: replaces the selection. Multiple mode: toggles membership by id.
    pub fn select(&mut self, item: T) {
        match self {
            Self::Single(current) => *current = Some(item),
            Self::Multiple(items) => {
                let id = item.id();
                if let Some(pos) = items.iter().position(|it| it.id() == id) {
                    items.remove(pos);
                } else {
                    items.push(item);
                }
            }
        }
    }

    /// Removes the entry with `id`. Returns `true` when something was removed.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        match self {
            Self::Single(current) => {
                if current.as_ref().is_some_and(|it| it.id() == *id) {
                    *current = None;
                    true
                } else {
                    false
                }
            }
            Self::Multiple(items) => {
                let before = items.len();
                items.retain(|it| it.id() != *id);
                items.len() != before
            }
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::Single(current) => *current = None,
            Self::Multiple(items) => items.clear(),
        }
    }

    /// Converts to `mode`. Going to single mode keeps the first selected item.
    pub fn into_mode(self, mode: SelectionMode) -> Self {
        match (self, mode) {
            (Self::Single(item), SelectionMode::Multiple) => {
                Self::Multiple(item.into_iter().collect())
            }
            (Self::Multiple(items), SelectionMode::Single) => {
                Self::Single(items.into_iter().next())
            }
            (same, _) => same,
        }
    }

    /// The value to emit through the host's two-way binding.
    pub fn to_model_value(&self) -> ModelValue<T> {
        match self {
            Self::Single(None) => ModelValue::Empty,
            Self::Single(Some(item)) => ModelValue::One(item.clone()),
            Self::Multiple(items) => ModelValue::Many(items.clone()),
        }
    }
}

/// The result of [`reconcile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciliation<T> {
    pub selection: Selection<T>,
    /// Selected items the list does not know yet, in selection order.
    pub missing: Vec<T>,
}

/// Maps an external value onto `list` without mutating either.
///
/// Selected ids that are already listed resolve to the listed item. Ids the list lacks are
/// returned in `missing` so the caller can merge them and render their titles without a
/// dedicated fetch.
pub fn reconcile<T: SelectItem>(
    value: &ModelValue<T>,
    list: &ItemsList<T>,
    mode: SelectionMode,
) -> Reconciliation<T> {
    let wanted: &[T] = match value {
        ModelValue::Empty => &[],
        ModelValue::One(item) => core::slice::from_ref(item),
        ModelValue::Many(items) => items,
    };

    let mut selected: Vec<T> = Vec::with_capacity(wanted.len());
    let mut missing = Vec::new();
    for item in wanted {
        let id = item.id();
        if selected.iter().any(|it| it.id() == id) {
            continue;
        }
        match list.get_by_id(&id) {
            Some(listed) => selected.push(listed.clone()),
            None => {
                missing.push(item.clone());
                selected.push(item.clone());
            }
        }
        if mode == SelectionMode::Single {
            break;
        }
    }

    let selection = match mode {
        SelectionMode::Single => Selection::Single(selected.into_iter().next()),
        SelectionMode::Multiple => Selection::Multiple(selected),
    };
    Reconciliation { selection, missing }
}
