use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{ModelValue, Selection, SelectionMode};

pub const DEFAULT_PAGE_SIZE: usize = 40;
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_MIN_ITEM_SIZE: u32 = 40;
pub const DEFAULT_PREFETCH_DISTANCE: usize = 5;

/// A callback fired when the user changes the selection (the "selection-changed" event).
///
/// It is not fired for external model-value updates or mode switches, so a host that feeds
/// the emitted value back through `set_model_value` does not loop.
pub type OnChangeCallback<T> = Arc<dyn Fn(&Selection<T>) + Send + Sync>;

/// Presentation tokens. The controller only stores and forwards them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleTokens {
    pub main_color: Option<String>,
    pub accent_color: Option<String>,
    pub input_bg_color: Option<String>,
    pub text_color: Option<String>,
    pub border_radius: Option<String>,
}

impl StyleTokens {
    /// The tokens that are set, as `(css custom property, value)` pairs.
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        [
            ("--main-color", &self.main_color),
            ("--accent-color", &self.accent_color),
            ("--input-bg-color", &self.input_bg_color),
            ("--text-color", &self.text_color),
            ("--border-radius", &self.border_radius),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// Configuration for [`crate::Autocomplete`].
///
/// Callbacks are stored in `Arc`s, so cloning is cheap and adapters can tweak a field and
/// pass the result to `Autocomplete::set_options`.
pub struct AutocompleteOptions<T> {
    /// Placeholder text for the input.
    pub label: String,
    /// Row height hint for the virtualization layer.
    pub min_item_size: u32,
    pub multiple: bool,
    /// Render multiple selections as removable chips.
    pub chip: bool,
    /// Items requested per page (`take`).
    pub page_size: usize,
    pub debounce_ms: u64,
    /// How many rows before the end of the list count as "near the end" for prefetching.
    pub prefetch_distance: usize,
    /// Initial external value.
    pub model_value: ModelValue<T>,
    pub style: StyleTokens,
    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T> Default for AutocompleteOptions<T> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<T: Clone> Clone for AutocompleteOptions<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            min_item_size: self.min_item_size,
            multiple: self.multiple,
            chip: self.chip,
            page_size: self.page_size,
            debounce_ms: self.debounce_ms,
            prefetch_distance: self.prefetch_distance,
            model_value: self.model_value.clone(),
            style: self.style.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> AutocompleteOptions<T> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            min_item_size: DEFAULT_MIN_ITEM_SIZE,
            multiple: false,
            chip: false,
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            prefetch_distance: DEFAULT_PREFETCH_DISTANCE,
            model_value: ModelValue::Empty,
            style: StyleTokens::default(),
            on_change: None,
        }
    }

    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_multiple(self.multiple)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_min_item_size(mut self, min_item_size: u32) -> Self {
        self.min_item_size = min_item_size;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_chip(mut self, chip: bool) -> Self {
        self.chip = chip;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_prefetch_distance(mut self, prefetch_distance: usize) -> Self {
        self.prefetch_distance = prefetch_distance;
        self
    }

    pub fn with_model_value(mut self, model_value: ModelValue<T>) -> Self {
        self.model_value = model_value;
        self
    }

    pub fn with_style(mut self, style: StyleTokens) -> Self {
        self.style = style;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Selection<T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T> core::fmt::Debug for AutocompleteOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutocompleteOptions")
            .field("label", &self.label)
            .field("min_item_size", &self.min_item_size)
            .field("multiple", &self.multiple)
            .field("chip", &self.chip)
            .field("page_size", &self.page_size)
            .field("debounce_ms", &self.debounce_ms)
            .field("prefetch_distance", &self.prefetch_distance)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
