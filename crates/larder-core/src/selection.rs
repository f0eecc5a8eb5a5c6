use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{ConsumableType, SelectOption};

/// The values written to the host page when an option is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,
    #[serde(rename = "type")]
    pub ctype: ConsumableType,
    pub name: String,
    pub url: String,
}

impl From<&SelectOption> for Selection {
    fn from(option: &SelectOption) -> Self {
        Self {
            id: option.id.clone(),
            ctype: option.ctype,
            name: option.name.clone(),
            url: option.url.clone(),
        }
    }
}

/// A host-page element that receives one selection attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostField {
    pub value: String,
}

impl HostField {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// The four host-page fields a commit writes into. Any of them may be
/// missing from the page; missing fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTarget {
    /// Hidden input carrying the consumable id.
    pub id_input: Option<HostField>,
    /// Hidden input carrying the consumable type.
    pub type_input: Option<HostField>,
    /// Text of the button that opens the dialog.
    pub trigger_label: Option<HostField>,
    /// `href` of the "open" link.
    pub open_link: Option<HostField>,
}

impl SelectionTarget {
    /// A page carrying all four fields, empty.
    pub fn complete() -> Self {
        Self {
            id_input: Some(HostField::default()),
            type_input: Some(HostField::default()),
            trigger_label: Some(HostField::default()),
            open_link: Some(HostField::default()),
        }
    }

    /// Pre-fill the fields from an earlier selection, as a page editing an
    /// existing entry would render them.
    pub fn prefilled(selection: &Selection) -> Self {
        let mut target = Self::complete();
        target.write(selection);
        target
    }

    /// Write every field that exists on the page. Returns how many were written.
    pub fn write(&mut self, selection: &Selection) -> usize {
        let writes: [(&str, &mut Option<HostField>, &str); 4] = [
            ("id input", &mut self.id_input, selection.id.as_str()),
            ("type input", &mut self.type_input, selection.ctype.as_str()),
            ("trigger label", &mut self.trigger_label, selection.name.as_str()),
            ("open link", &mut self.open_link, selection.url.as_str()),
        ];

        let mut written = 0;
        for (label, slot, value) in writes {
            match slot {
                Some(field) => {
                    field.value = value.to_string();
                    written += 1;
                }
                None => warn!(field = label, "selection target not found, skipping"),
            }
        }
        info!(id = %selection.id, kind = %selection.ctype, written, "selection committed");
        written
    }

    /// Current id value, if the id input exists and is non-empty.
    pub fn selected_id(&self) -> Option<&str> {
        self.id_input
            .as_ref()
            .map(|f| f.value.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Reassemble the selection currently shown on the page, when every
    /// field is present and filled.
    pub fn current(&self) -> Option<Selection> {
        let id = self.selected_id()?.to_string();
        let ctype = self.type_input.as_ref()?.value.parse().ok()?;
        let name = self.trigger_label.as_ref()?.value.clone();
        let url = self.open_link.as_ref()?.value.clone();
        Some(Selection { id, ctype, name, url })
    }
}
