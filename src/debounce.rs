use alloc::string::String;

/// Trailing-edge debounce between the raw input text and the search term that drives
/// loading.
///
/// The raw text updates on every keystroke. The effective term only moves once no input
/// has arrived for `delay_ms`. The adapter supplies all timestamps; nothing here reads a
/// clock.
#[derive(Clone, Debug)]
pub struct SearchDebounce {
    delay_ms: u64,
    text: String,
    effective: String,
    last_input_ms: Option<u64>,
}

impl SearchDebounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            text: String::new(),
            effective: String::new(),
            last_input_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// The text as typed, updated synchronously.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The last term that made it through the debounce window.
    pub fn effective(&self) -> &str {
        &self.effective
    }

    pub fn is_pending(&self) -> bool {
        self.last_input_ms.is_some()
    }

    /// When the pending input settles, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.last_input_ms
            .map(|last| last.saturating_add(self.delay_ms))
    }

    /// Records a keystroke-level update. Restarts the window.
    pub fn on_input(&mut self, text: impl Into<String>, now_ms: u64) {
        self.text = text.into();
        self.last_input_ms = Some(now_ms);
        ttrace!(now_ms, "SearchDebounce::on_input");
    }

    /// Fires the debounce if the window has elapsed.
    ///
    /// Returns the new effective term when it differs from the previous one. Settling on the
    /// term that is already effective clears the pending input and returns `None`.
    pub fn poll(&mut self, now_ms: u64) -> Option<&str> {
        let last = self.last_input_ms?;
        if now_ms.saturating_sub(last) < self.delay_ms {
            return None;
        }
        self.last_input_ms = None;
        if self.text == self.effective {
            return None;
        }
        self.effective.clone_from(&self.text);
        tdebug!(now_ms, "SearchDebounce fired");
        Some(&self.effective)
    }

    /// Drops any pending input without touching the effective term.
    pub fn cancel(&mut self) {
        self.last_input_ms = None;
    }

    /// Clears text, effective term and any pending input.
    pub fn reset(&mut self) {
        self.text.clear();
        self.effective.clear();
        self.last_input_ms = None;
    }
}
