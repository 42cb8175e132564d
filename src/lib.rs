//! A headless type-ahead selection controller.
//!
//! This crate holds the state behind a searchable, paginated select box: debounced search,
//! paged loading with deduplication, stale-response discarding, scroll-triggered
//! prefetching, single/multiple selection, and the menu/focus state machine.
//!
//! It is UI-agnostic and performs no I/O. A TUI/GUI/web layer is expected to provide:
//! - timestamps (`now_ms`) for debouncing
//! - focus and toggle events
//! - the visible row range reported by its virtualized list
//! - a `loadItems(skip, take, search)` capability, driven through [`LoadRequest`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod debounce;
mod error;
mod fetch;
mod items;
mod key;
mod menu;
mod options;
mod paging;
mod selection;
mod state;
mod types;


pub use controller::Autocomplete;
pub use debounce::SearchDebounce;
pub use error::{Error, LoadError};
pub use fetch::{LoadOutcome, LoadRequest, LoadStatus, PageLoader};
pub use items::ItemsList;
pub use key::ItemId;
pub use menu::{FocusState, FocusTarget, MenuEvent, MenuMachine, MenuState};
pub use options::{
    AutocompleteOptions, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_ITEM_SIZE, DEFAULT_PAGE_SIZE,
    DEFAULT_PREFETCH_DISTANCE, OnChangeCallback, StyleTokens,
};
pub use paging::PagingCursor;
pub use selection::{ModelValue, Reconciliation, Selection, SelectionMode, reconcile};
pub use state::AutocompleteState;
pub use types::{Item, ItemKey, SelectItem, VisibleRange};
