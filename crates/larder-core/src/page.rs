use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::behaviors::{DeleteGuard, SearchList, Toggler};
use crate::catalog::Catalog;
use crate::config::DialogConfig;
use crate::dialog::{DialogEvent, EventOutcome, SelectDialog};
use crate::selection::{Selection, SelectionTarget};

/// Selector of the form that logs a new consumption.
pub const ADD_CONSUMPTION_FORM: &str = "[data-add-consumption-form]";

/// A page element other behaviors can show or hide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageElement {
    pub hidden: bool,
}

/// Page elements addressable by selector.
#[derive(Debug, Clone, Default)]
pub struct Elements {
    by_selector: BTreeMap<String, PageElement>,
}

impl Elements {
    pub fn insert(&mut self, selector: impl Into<String>, hidden: bool) {
        self.by_selector.insert(selector.into(), PageElement { hidden });
    }

    pub fn get(&self, selector: &str) -> Option<&PageElement> {
        self.by_selector.get(selector)
    }

    pub fn get_mut(&mut self, selector: &str) -> Option<&mut PageElement> {
        self.by_selector.get_mut(selector)
    }

    pub fn is_hidden(&self, selector: &str) -> Option<bool> {
        self.get(selector).map(|e| e.hidden)
    }

    pub fn remove(&mut self, selector: &str) -> Option<PageElement> {
        self.by_selector.remove(selector)
    }
}

/// In-memory model of a page carrying the consumable picker and its
/// neighbouring behaviors.
#[derive(Debug, Clone)]
pub struct HostPage {
    pub dialog: Option<SelectDialog>,
    pub target: SelectionTarget,
    pub elements: Elements,
    pub search: SearchList,
    pub delete_guard: DeleteGuard,
    /// Open the dialog when the add form appears with nothing picked.
    pub auto_open: bool,
}

impl HostPage {
    pub fn new(dialog: Option<SelectDialog>, target: SelectionTarget) -> Self {
        Self {
            dialog,
            target,
            elements: Elements::default(),
            search: SearchList::default(),
            delete_guard: DeleteGuard::default(),
            auto_open: true,
        }
    }

    /// A page listing `catalog` in its dialog, with a hidden add form.
    pub fn from_catalog(catalog: &Catalog, config: &DialogConfig) -> Self {
        let mut page = Self::new(
            Some(SelectDialog::new(catalog.options())),
            SelectionTarget::complete(),
        );
        page.elements.insert(ADD_CONSUMPTION_FORM, true);
        page.delete_guard = DeleteGuard::new(config.confirm_delete_prompt.clone());
        page.auto_open = config.auto_open;
        page
    }

    /// Trigger click: open the dialog if the page has one.
    pub fn activate_trigger(&mut self) -> bool {
        match self.dialog.as_mut() {
            Some(dialog) => {
                dialog.open();
                true
            }
            None => {
                debug!("no selection dialog on page, trigger inert");
                false
            }
        }
    }

    /// Route an event to the dialog.
    pub fn dialog_event(&mut self, event: DialogEvent) -> EventOutcome {
        match self.dialog.as_mut() {
            Some(dialog) => dialog.handle(event, &mut self.target),
            None => EventOutcome::ignored(),
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.as_ref().is_some_and(SelectDialog::is_open)
    }

    pub fn toggle(&mut self, toggler: &Toggler) -> Option<bool> {
        toggler.activate(&mut self.elements)
    }

    /// Show or hide the add-consumption form. Showing it with no
    /// consumable picked yet opens the selection dialog.
    pub fn toggle_add_consumption(&mut self) -> Option<bool> {
        let Some(form) = self.elements.get_mut(ADD_CONSUMPTION_FORM) else {
            warn!("add consumption form not found");
            return None;
        };
        form.hidden = !form.hidden;
        let hidden = form.hidden;

        if !hidden && self.auto_open && self.target.selected_id().is_none() {
            self.activate_trigger();
        }
        Some(hidden)
    }

    pub fn add_form_visible(&self) -> bool {
        self.elements.is_hidden(ADD_CONSUMPTION_FORM) == Some(false)
    }

    /// The consumable currently picked on the page.
    pub fn selection(&self) -> Option<Selection> {
        self.target.current()
    }
}
