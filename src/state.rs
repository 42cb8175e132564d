use alloc::string::String;

use crate::{FocusState, LoadStatus, MenuState, PagingCursor};

/// A serializable snapshot of the controller's non-item state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Useful for
/// debugging overlays and for asserting on the whole state at once in adapter tests.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutocompleteState {
    pub menu: MenuState,
    pub focus: FocusState,
    pub search_text: String,
    pub effective_search: String,
    pub cursor: PagingCursor,
    pub item_count: usize,
    pub selected_count: usize,
    pub exhausted: bool,
    pub status: LoadStatus,
}
