use crate::selection::Selection;

/// Keys the dialog reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Other,
}

/// Input delivered to an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// The filter input now holds this text.
    Input(String),
    /// A key press inside the dialog.
    Key(DialogKey),
    /// An option (by position in the option set) was clicked.
    Click(usize),
    /// The close button was pressed.
    Close,
}

/// What handling one event did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The host should suppress its default reaction (e.g. scrolling).
    pub default_prevented: bool,
    pub focus_changed: bool,
    /// Set when the event committed an option.
    pub committed: Option<Selection>,
    pub closed: bool,
}

impl EventOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }
}
