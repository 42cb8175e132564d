use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    AutocompleteOptions, AutocompleteState, Error, FocusTarget, ItemsList, LoadError,
    LoadOutcome, LoadRequest, LoadStatus, MenuEvent, MenuMachine, MenuState, ModelValue,
    PageLoader, PagingCursor, SearchDebounce, SelectItem, Selection, SelectionMode,
    VisibleRange, reconcile,
};

/// A headless type-ahead selection controller.
///
/// This type does not hold any UI objects and never performs I/O. Adapters drive it by
/// calling:
/// - `mount` / `unmount` around the component's lifetime
/// - `on_input`, `on_focus_in`, `on_focus_out`, `on_toggle_button` when UI events occur
/// - `on_visible_range` whenever the virtualized list reports the rows it shows
/// - `tick(now_ms)` from a timer (see `next_deadline`) to settle debounced searches
///
/// Any of these may return a [`LoadRequest`]. The adapter runs its `loadItems` capability
/// for it and reports back through [`Autocomplete::resolve_load`]; results that arrive
/// after the search moved on are dropped there.
#[derive(Debug)]
pub struct Autocomplete<T: SelectItem> {
    options: AutocompleteOptions<T>,
    loader: PageLoader<T>,
    search: SearchDebounce,
    selection: Selection<T>,
    menu: MenuMachine,
    mounted: bool,
}

impl<T: SelectItem> Autocomplete<T> {
    /// Creates an unmounted controller. The initial `model_value` is reconciled right away.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroPageSize`] when `options.page_size` is zero.
    pub fn new(options: AutocompleteOptions<T>) -> Result<Self, Error> {
        if options.page_size == 0 {
            return Err(Error::ZeroPageSize);
        }
        tdebug!(
            page_size = options.page_size,
            multiple = options.multiple,
            debounce_ms = options.debounce_ms,
            "Autocomplete::new"
        );
        let mut this = Self {
            loader: PageLoader::new(options.page_size),
            search: SearchDebounce::new(options.debounce_ms),
            selection: Selection::empty(options.selection_mode()),
            menu: MenuMachine::new(),
            mounted: false,
            options,
        };
        let initial = this.options.model_value.clone();
        this.set_model_value(&initial);
        Ok(this)
    }

    pub fn options(&self) -> &AutocompleteOptions<T> {
        &self.options
    }

    /// Replaces the options, applying whatever changed.
    ///
    /// A new page size applies from the next request. Switching `multiple` converts the
    /// current selection. `model_value` is only read by `new`; use `set_model_value` for
    /// later updates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroPageSize`] (and keeps the previous options) when
    /// `options.page_size` is zero.
    pub fn set_options(&mut self, options: AutocompleteOptions<T>) -> Result<(), Error> {
        if options.page_size == 0 {
            return Err(Error::ZeroPageSize);
        }
        let multiple = options.multiple;
        self.loader.set_take(options.page_size);
        self.search.set_delay_ms(options.debounce_ms);
        self.options = options;
        self.set_multiple(multiple);
        ttrace!(
            page_size = self.options.page_size,
            multiple = self.options.multiple,
            "Autocomplete::set_options"
        );
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    ///
    /// # Errors
    ///
    /// See [`Autocomplete::set_options`].
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut AutocompleteOptions<T>),
    ) -> Result<(), Error> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    // ---- lifecycle ----

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mounts the controller and requests the first page.
    pub fn mount(&mut self) -> Option<LoadRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        tdebug!("Autocomplete::mount");
        self.loader.request(self.search.effective())
    }

    /// Tears down list, cursor, search and menu state. Outstanding requests become stale.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.loader.reset();
        self.search.reset();
        self.menu.reset();
        tdebug!("Autocomplete::unmount");
    }

    // ---- search ----

    /// The text shown in the input. Updates immediately on every `on_input`.
    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    /// The debounced term the current list was loaded for.
    pub fn effective_search(&self) -> &str {
        self.search.effective()
    }

    /// Records typed text. Loading is deferred until the debounce window elapses.
    pub fn on_input(&mut self, text: impl Into<String>, now_ms: u64) {
        self.search.on_input(text, now_ms);
    }

    /// When the adapter should call `tick` next, if a search is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.search.deadline()
    }

    /// Advances timers. When a debounced search settles on a new term, the list is cleared,
    /// paging restarts at zero and the first page for the new term is requested.
    pub fn tick(&mut self, now_ms: u64) -> Option<LoadRequest> {
        if !self.mounted {
            return None;
        }
        let term = self.search.poll(now_ms)?;
        tdebug!(now_ms, "Autocomplete: search settled, reloading");
        self.loader.reset();
        self.loader.request(term)
    }

    // ---- loading ----

    pub fn items(&self) -> &ItemsList<T> {
        self.loader.items()
    }

    pub fn cursor(&self) -> PagingCursor {
        self.loader.cursor()
    }

    pub fn load_status(&self) -> &LoadStatus {
        self.loader.status()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn is_exhausted(&self) -> bool {
        self.loader.is_exhausted()
    }

    /// Requests the next page for the effective search term.
    ///
    /// Returns `None` while unmounted, while a request is in flight, or after a short page
    /// ended the session.
    pub fn load_next_page(&mut self) -> Option<LoadRequest> {
        if !self.mounted {
            return None;
        }
        self.loader.request(self.search.effective())
    }

    /// Re-requests the page that last failed. `None` if the last load did not fail.
    pub fn retry(&mut self) -> Option<LoadRequest> {
        if !matches!(self.loader.status(), LoadStatus::Failed(_)) {
            return None;
        }
        self.load_next_page()
    }

    /// Prefetch trigger from the virtualization layer.
    pub fn on_visible_range(&mut self, range: VisibleRange) -> Option<LoadRequest> {
        if !range.is_near_end(self.loader.items().len(), self.options.prefetch_distance) {
            return None;
        }
        ttrace!(
            start = range.start_index,
            end = range.end_index,
            "Autocomplete: visible range near end"
        );
        self.load_next_page()
    }

    /// Applies the result of a request previously handed out by this controller.
    pub fn resolve_load(
        &mut self,
        request: &LoadRequest,
        result: Result<Vec<T>, LoadError>,
    ) -> LoadOutcome {
        if !self.mounted {
            return LoadOutcome::Stale;
        }
        self.loader.resolve(request, result)
    }

    /// Row height hint for the virtualization layer.
    pub fn estimate_size(&self, _index: usize) -> u32 {
        self.options.min_item_size
    }

    // ---- menu / focus ----

    pub fn menu_state(&self) -> MenuState {
        self.menu.menu()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.menu.is_focused()
    }

    /// Feeds a menu/focus event through the state machine.
    ///
    /// Opening the menu over an empty list (nothing loaded yet, or the last load failed)
    /// requests a page.
    pub fn handle_menu_event(&mut self, event: MenuEvent) -> Option<LoadRequest> {
        let changed = self.menu.handle(event)?;
        if changed == MenuState::Open && self.loader.items().is_empty() {
            return self.load_next_page();
        }
        None
    }

    pub fn on_toggle_button(&mut self) -> Option<LoadRequest> {
        self.handle_menu_event(MenuEvent::ToggleButton)
    }

    pub fn on_focus_in(&mut self) -> Option<LoadRequest> {
        self.handle_menu_event(MenuEvent::FocusIn)
    }

    pub fn on_focus_out(&mut self, target: FocusTarget) {
        self.handle_menu_event(MenuEvent::FocusOut(target));
    }

    // ---- selection ----

    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn is_selected(&self, id: &T::Id) -> bool {
        self.selection.contains(id)
    }

    /// Titles of the selected items, in selection order.
    pub fn selected_titles(&self) -> impl Iterator<Item = &str> {
        self.selection.iter().map(SelectItem::title)
    }

    /// The current selection as a model value, for two-way binding.
    pub fn model_value(&self) -> ModelValue<T> {
        self.selection.to_model_value()
    }

    /// User selection. Single mode replaces the value and closes the menu; multiple mode
    /// toggles `item` and leaves the menu open. Emits selection-changed.
    ///
    /// A selected item the list does not hold yet is appended to it, as reconciliation does
    /// for external values.
    pub fn select_item(&mut self, item: T) {
        let id = item.id();
        let unlisted = (!self.loader.items().contains(&id)).then(|| item.clone());
        self.selection.select(item);
        if let Some(item) = unlisted.filter(|_| self.selection.contains(&id)) {
            ttrace!("Autocomplete::select_item: merging unlisted item");
            self.loader.merge([item]);
        }
        if self.selection.mode() == SelectionMode::Single {
            self.menu.handle(MenuEvent::Dismiss);
        }
        self.emit_change();
    }

    /// Removes one selected item (e.g. a chip's close button). Emits selection-changed when
    /// something was removed.
    pub fn deselect(&mut self, id: &T::Id) -> bool {
        let removed = self.selection.remove(id);
        if removed {
            self.emit_change();
        }
        removed
    }

    /// Clears the selection. Emits selection-changed when it was not already empty.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.emit_change();
    }

    /// Switches between single and multiple selection, converting the current value.
    pub fn set_multiple(&mut self, multiple: bool) {
        self.options.multiple = multiple;
        let mode = SelectionMode::from_multiple(multiple);
        if self.selection.mode() == mode {
            return;
        }
        let current = core::mem::replace(&mut self.selection, Selection::empty(mode));
        self.selection = current.into_mode(mode);
    }

    /// Applies an externally controlled value.
    ///
    /// Selected items the list does not contain yet are appended to it, so their titles can
    /// be rendered before any page containing them arrives. Does not emit selection-changed.
    pub fn set_model_value(&mut self, value: &ModelValue<T>) {
        let rec = reconcile(value, self.loader.items(), self.selection.mode());
        ttrace!(
            missing = rec.missing.len(),
            selected = rec.selection.len(),
            "Autocomplete::set_model_value"
        );
        self.loader.merge(rec.missing);
        self.selection = rec.selection;
    }

    fn emit_change(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.selection);
        }
    }

    /// A snapshot of the non-item state.
    pub fn state(&self) -> AutocompleteState {
        AutocompleteState {
            menu: self.menu.menu(),
            focus: self.menu.focus(),
            search_text: self.search.text().into(),
            effective_search: self.search.effective().into(),
            cursor: self.loader.cursor(),
            item_count: self.loader.items().len(),
            selected_count: self.selection.len(),
            exhausted: self.loader.is_exhausted(),
            status: self.loader.status().clone(),
        }
    }
}
