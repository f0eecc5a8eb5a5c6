use serde::{Deserialize, Serialize};

use super::consumable::{Consumable, ConsumableType};

/// One selectable entry inside a selection dialog.
///
/// Options are built once when the dialog is constructed and never change
/// while it lives; only their visibility and focus are tracked by the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub ctype: ConsumableType,
    pub name: String,
    pub url: String,
    /// Text the filter matches against.
    pub search_text: String,
    #[serde(default)]
    pub starred: bool,
}

impl SelectOption {
    pub fn new(
        id: impl Into<String>,
        ctype: ConsumableType,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            ctype,
            search_text: name.clone(),
            name,
            url: url.into(),
            starred: false,
        }
    }

    pub fn is_recipe(&self) -> bool {
        self.ctype == ConsumableType::Recipe
    }
}

impl From<&Consumable> for SelectOption {
    fn from(c: &Consumable) -> Self {
        // Star and recipe markers are icons and contribute no searchable text.
        Self {
            id: c.id.clone(),
            ctype: c.ctype,
            name: c.name.clone(),
            url: c.url(),
            search_text: c.name.clone(),
            starred: c.starred,
        }
    }
}
