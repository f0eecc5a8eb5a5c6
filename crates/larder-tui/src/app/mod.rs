mod entries;

pub use entries::Entry;

use larder_core::behaviors::{Submission, Toggler};
use larder_core::{AppConfig, DialogEvent, EventOutcome, HostPage, Selection};
use tracing::debug;

use crate::popup::Popup;
use crate::theme::NordTheme;

/// Selector of the key-hint panel, shown and hidden with `?`.
pub const HELP_PANEL: &str = "#help";

/// Input modes outside the selection dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Search => write!(f, "SEARCH"),
        }
    }
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub mode: Mode,

    /// The page model: picker dialog, target fields, toggled elements.
    pub page: HostPage,

    /// Consumptions logged during this session.
    pub entries: Vec<Entry>,
    /// Position of the highlighted entry among the visible ones.
    pub selected_entry: usize,

    /// Status bar message.
    pub status_message: String,

    /// Active popup (if any).
    pub popup: Option<Popup>,

    pub help_toggler: Toggler,

    /// App configuration.
    pub config: AppConfig,

    /// UI Theme
    pub theme: NordTheme,
}

impl App {
    pub fn new(config: AppConfig, mut page: HostPage) -> Self {
        page.elements.insert(HELP_PANEL, true);
        let option_count = page.dialog.as_ref().map_or(0, |d| d.len());

        Self {
            should_quit: false,
            mode: Mode::Normal,
            page,
            entries: Vec::new(),
            selected_entry: 0,
            status_message: format!("{option_count} consumables · a: add  ?: help  q: quit"),
            popup: None,
            help_toggler: Toggler::new(HELP_PANEL),
            config,
            theme: NordTheme::default(),
        }
    }

    // ── Page behaviors ─────────────────────────────────────

    pub fn toggle_help(&mut self) {
        self.page.toggle(&self.help_toggler);
    }

    pub fn help_visible(&self) -> bool {
        self.page.elements.is_hidden(HELP_PANEL) == Some(false)
    }

    pub fn toggle_add_form(&mut self) {
        match self.page.toggle_add_consumption() {
            Some(false) => self.status_message = "Add consumption".to_string(),
            Some(true) => self.status_message.clear(),
            None => self.status_message = "No add form on this page".to_string(),
        }
    }

    /// Press the trigger button of the add form.
    pub fn open_picker(&mut self) {
        if !self.page.add_form_visible() {
            self.status_message = "Open the add form first (a)".to_string();
            return;
        }
        if !self.page.activate_trigger() {
            self.status_message = "Nothing to pick from".to_string();
        }
    }

    /// Show the add form with the picker open, optionally pre-filtered.
    /// Auto-open already shows the picker; it is opened here only when
    /// auto-open is off.
    pub fn start_pick(&mut self, query: Option<String>) {
        if !self.page.add_form_visible() {
            self.toggle_add_form();
        }
        if !self.page.dialog_open() {
            self.open_picker();
        }
        if let Some(query) = query {
            self.dialog_event(DialogEvent::Input(query));
        }
    }

    /// Feed one event to the selection dialog and report commits.
    pub fn dialog_event(&mut self, event: DialogEvent) -> EventOutcome {
        let outcome = self.page.dialog_event(event);
        if let Some(ref selection) = outcome.committed {
            self.status_message = format!("Picked {} ({})", selection.name, selection.ctype);
        }
        outcome
    }

    /// The consumable currently picked in the add form.
    pub fn picked(&self) -> Option<Selection> {
        self.page.selection()
    }

    // ── Popups ─────────────────────────────────────────────

    /// Ask for confirmation before deleting the highlighted entry.
    pub fn request_delete(&mut self) {
        let Some(index) = self.selected_entry_index() else {
            self.status_message = "Nothing to delete".to_string();
            return;
        };
        self.popup = Some(Popup::DeleteConfirm {
            index,
            name: self.entries[index].selection.name.clone(),
            prompt: self.page.delete_guard.prompt().to_string(),
        });
    }

    pub fn answer_popup(&mut self, confirmed: bool) {
        let Some(Popup::DeleteConfirm { index, name, .. }) = self.popup.take() else {
            return;
        };
        match self.page.delete_guard.resolve(confirmed) {
            Submission::Submitted => {
                self.remove_entry(index);
                self.status_message = format!("Deleted {name}");
            }
            Submission::Cancelled => {
                debug!(index, "delete cancelled");
                self.status_message = "Delete cancelled".to_string();
            }
        }
    }
}
