#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
}

/// Where focus went when the input lost it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// An element inside the component (toggle button, a row, a chip).
    Inside,
    /// Anything else, including no element at all.
    Outside,
}

impl FocusTarget {
    /// Maps a DOM-style `relatedTarget` containment check. `None` counts as outside.
    pub fn from_contains(contains: Option<bool>) -> Self {
        match contains {
            Some(true) => Self::Inside,
            Some(false) | None => Self::Outside,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleButton,
    FocusIn,
    FocusOut(FocusTarget),
    /// Closes the menu without touching focus (e.g. after a single-mode selection).
    Dismiss,
}

/// The joint menu × focus state machine.
///
/// | event                 | focus       | menu              |
/// |-----------------------|-------------|-------------------|
/// | `ToggleButton`        | unchanged   | flipped           |
/// | `FocusIn`             | focused     | open              |
/// | `FocusOut(Inside)`    | unfocused   | unchanged         |
/// | `FocusOut(Outside)`   | unfocused   | closed            |
/// | `Dismiss`             | unchanged   | closed            |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuMachine {
    menu: MenuState,
    focus: FocusState,
}

impl MenuMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn is_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn is_focused(&self) -> bool {
        self.focus == FocusState::Focused
    }

    /// Applies `event`. Returns the new menu state if it changed.
    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuState> {
        let prev = self.menu;
        match event {
            MenuEvent::ToggleButton => {
                self.menu = match self.menu {
                    MenuState::Closed => MenuState::Open,
                    MenuState::Open => MenuState::Closed,
                };
            }
            MenuEvent::FocusIn => {
                self.focus = FocusState::Focused;
                self.menu = MenuState::Open;
            }
            MenuEvent::FocusOut(target) => {
                self.focus = FocusState::Unfocused;
                if target == FocusTarget::Outside {
                    self.menu = MenuState::Closed;
                }
            }
            MenuEvent::Dismiss => self.menu = MenuState::Closed,
        }
        ttrace!(?event, menu = ?self.menu, focus = ?self.focus, "MenuMachine::handle");
        (self.menu != prev).then_some(self.menu)
    }

    /// Returns to the initial `closed, unfocused` state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
