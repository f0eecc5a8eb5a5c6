//! Searchable selection dialog.
//!
//! A [`SelectDialog`] owns an ordered option set and tracks, for one
//! open/close cycle, which options the filter text hides, which visible
//! option is last, and which visible option holds keyboard focus. Front-ends
//! render a [`DialogView`] and feed input back through [`SelectDialog::handle`].

mod event;
mod navigator;
mod view;

pub use event::{DialogEvent, DialogKey, EventOutcome};
pub use navigator::{Direction, next_focus};
pub use view::{DialogView, OptionRow};

use tracing::debug;

use crate::error::{LarderError, Result};
use crate::filter::FilterPass;
use crate::models::SelectOption;
use crate::selection::{Selection, SelectionTarget};

#[derive(Debug, Clone)]
pub struct SelectDialog {
    options: Vec<SelectOption>,
    hidden: Vec<bool>,
    last_visible: Option<usize>,
    /// Focused option index. Always visible when set.
    cursor: Option<usize>,
    filter: String,
    open: bool,
}

impl SelectDialog {
    /// Build a closed dialog over `options`, all of them visible.
    pub fn new(options: Vec<SelectOption>) -> Self {
        let mut dialog = Self {
            hidden: Vec::new(),
            last_visible: None,
            cursor: None,
            filter: String::new(),
            open: false,
            options,
        };
        dialog.refilter();
        dialog
    }

    // ── Open / close ───────────────────────────────────────

    /// Show the dialog. Opening an open dialog does nothing.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.cursor = None;
        debug!(options = self.options.len(), "selection dialog opened");
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.cursor = None;
        debug!("selection dialog closed");
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // ── Filtering ──────────────────────────────────────────

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Replace the filter text and recompute visibility of every option.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.refilter();
        debug!(
            filter = %self.filter,
            visible = self.visible_indices().len(),
            "selection dialog filtered"
        );
    }

    fn refilter(&mut self) {
        let pass = FilterPass::run(
            self.options.iter().map(|o| o.search_text.as_str()),
            &self.filter,
        );
        self.hidden = pass.hidden;
        self.last_visible = pass.last_visible;

        if self.cursor.is_some_and(|c| self.hidden[c]) {
            self.cursor = None;
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.hidden.get(index).is_some_and(|h| !h)
    }

    /// Indices of the visible options, in document order.
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.options.len()).filter(|&i| !self.hidden[i]).collect()
    }

    /// Index of the option carrying the last-visible marker.
    pub fn last_visible(&self) -> Option<usize> {
        self.last_visible
    }

    // ── Navigation ─────────────────────────────────────────

    /// Move focus within the visible options, wrapping at both ends.
    /// Returns whether the focused option changed.
    pub fn move_focus(&mut self, direction: Direction) -> bool {
        let visible = self.visible_indices();
        match next_focus(&visible, self.cursor, direction) {
            Some(target) => {
                let changed = self.cursor != Some(target);
                self.cursor = Some(target);
                changed
            }
            None => false,
        }
    }

    /// Focus a specific option, e.g. under the pointer. Hidden options
    /// cannot take focus.
    pub fn focus(&mut self, index: usize) -> bool {
        if !self.is_visible(index) {
            return false;
        }
        self.cursor = Some(index);
        true
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn focused(&self) -> Option<&SelectOption> {
        self.cursor.and_then(|c| self.options.get(c))
    }

    // ── Commit ─────────────────────────────────────────────

    /// Commit the only visible option. With zero or several visible
    /// options nothing happens.
    pub fn confirm(&mut self, target: &mut SelectionTarget) -> Option<Selection> {
        match self.visible_indices().as_slice() {
            [only] => Some(self.commit(*only, target)),
            _ => None,
        }
    }

    /// Commit the option at `index`, as a click on it would.
    pub fn activate(&mut self, index: usize, target: &mut SelectionTarget) -> Option<Selection> {
        if !self.is_visible(index) {
            debug!(index, "ignoring activation of hidden or unknown option");
            return None;
        }
        Some(self.commit(index, target))
    }

    /// Commit the option with identifier `id`, visible or not.
    pub fn select(&mut self, id: &str, target: &mut SelectionTarget) -> Result<Selection> {
        let index = self
            .options
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| LarderError::OptionNotFound(id.to_string()))?;
        Ok(self.commit(index, target))
    }

    fn commit(&mut self, index: usize, target: &mut SelectionTarget) -> Selection {
        let selection = Selection::from(&self.options[index]);
        target.write(&selection);
        self.close();
        selection
    }

    // ── Event protocol ─────────────────────────────────────

    /// Dispatch one input event. Events reaching a closed dialog are ignored.
    pub fn handle(&mut self, event: DialogEvent, target: &mut SelectionTarget) -> EventOutcome {
        if !self.open {
            return EventOutcome::ignored();
        }

        match event {
            DialogEvent::Input(text) => {
                let before = self.cursor;
                self.set_filter(&text);
                EventOutcome {
                    focus_changed: before != self.cursor,
                    ..EventOutcome::default()
                }
            }
            DialogEvent::Key(DialogKey::ArrowUp) => EventOutcome {
                default_prevented: true,
                focus_changed: self.move_focus(Direction::Up),
                ..EventOutcome::default()
            },
            DialogEvent::Key(DialogKey::ArrowDown) => EventOutcome {
                default_prevented: true,
                focus_changed: self.move_focus(Direction::Down),
                ..EventOutcome::default()
            },
            DialogEvent::Key(DialogKey::Enter) => Self::commit_outcome(self.confirm(target)),
            DialogEvent::Key(DialogKey::Other) => EventOutcome::ignored(),
            DialogEvent::Click(index) => Self::commit_outcome(self.activate(index, target)),
            DialogEvent::Close => {
                self.close();
                EventOutcome {
                    closed: true,
                    ..EventOutcome::default()
                }
            }
        }
    }

    fn commit_outcome(committed: Option<Selection>) -> EventOutcome {
        EventOutcome {
            closed: committed.is_some(),
            committed,
            ..EventOutcome::default()
        }
    }

    // ── Accessors ──────────────────────────────────────────

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn view(&self) -> DialogView<'_> {
        let rows = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionRow {
                index,
                option,
                hidden: self.hidden[index],
                focused: self.cursor == Some(index),
                last_visible: self.last_visible == Some(index),
            })
            .collect();

        DialogView {
            open: self.open,
            filter: &self.filter,
            rows,
        }
    }
}

#[cfg(test)]
mod tests;
