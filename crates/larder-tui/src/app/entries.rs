use chrono::{DateTime, Local};
use larder_core::Selection;
use tracing::info;

use super::App;

/// One logged consumption.
#[derive(Debug, Clone)]
pub struct Entry {
    pub selection: Selection,
    pub logged_at: DateTime<Local>,
}

impl Entry {
    /// Text the entry list search matches against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.selection.name, self.selection.ctype)
    }
}

impl App {
    /// Submit the add form: log the picked consumable.
    pub fn submit_form(&mut self) {
        if !self.page.add_form_visible() {
            return;
        }
        let Some(selection) = self.picked() else {
            self.status_message = "Pick a consumable first".to_string();
            return;
        };

        info!(id = %selection.id, "consumption logged");
        let entry = Entry {
            selection,
            logged_at: Local::now(),
        };
        self.page.search.push(entry.search_text());
        self.status_message = format!("Logged {}", entry.selection.name);
        self.entries.push(entry);
    }

    pub(crate) fn remove_entry(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        self.entries.remove(index);
        self.page.search.remove(index);
        self.clamp_entry_selection();
    }

    /// Entry indices the list search leaves visible.
    pub fn visible_entries(&self) -> Vec<usize> {
        self.page.search.visible_indices()
    }

    /// Index into `entries` of the highlighted entry.
    pub fn selected_entry_index(&self) -> Option<usize> {
        self.visible_entries().get(self.selected_entry).copied()
    }

    pub fn entry_down(&mut self) {
        let count = self.visible_entries().len();
        if count > 0 && self.selected_entry < count - 1 {
            self.selected_entry += 1;
        }
    }

    pub fn entry_up(&mut self) {
        self.selected_entry = self.selected_entry.saturating_sub(1);
    }

    pub fn search_query(&self) -> &str {
        self.page.search.query()
    }

    /// Re-run the entry list search with `query`.
    pub fn set_search(&mut self, query: &str) {
        self.page.search.apply(query);
        self.clamp_entry_selection();
    }

    fn clamp_entry_selection(&mut self) {
        let count = self.visible_entries().len();
        self.selected_entry = self.selected_entry.min(count.saturating_sub(1));
    }
}
