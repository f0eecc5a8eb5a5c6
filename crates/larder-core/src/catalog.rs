use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{LarderError, Result};
use crate::models::{Consumable, SelectOption, sort_by_relevance};

/// The set of consumables a page offers for selection, in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Consumable>,
}

impl Catalog {
    /// Build a catalog, ordering items by relevance at `now`.
    pub fn new(mut items: Vec<Consumable>, now: DateTime<Utc>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(LarderError::DuplicateConsumable(item.id.clone()));
            }
        }
        sort_by_relevance(&mut items, now);
        Ok(Self { items })
    }

    /// Parse a JSON array of consumable records.
    pub fn from_json(json: &str, now: DateTime<Utc>) -> Result<Self> {
        let items: Vec<Consumable> = serde_json::from_str(json)?;
        Self::new(items, now)
    }

    /// Load a catalog file.
    pub fn load_from(path: &Path, now: DateTime<Utc>) -> Result<Self> {
        if !path.exists() {
            return Err(LarderError::CatalogNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents, now)
    }

    pub fn items(&self) -> &[Consumable] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Consumable> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Dialog options in catalog order.
    pub fn options(&self) -> Vec<SelectOption> {
        self.items.iter().map(SelectOption::from).collect()
    }
}
