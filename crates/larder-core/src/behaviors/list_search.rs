use crate::filter::FilterPass;

/// An item of a flat, searchable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    pub text: String,
    pub hidden: bool,
}

/// A flat list filtered by substring, with no focus or marker.
#[derive(Debug, Clone, Default)]
pub struct SearchList {
    items: Vec<SearchItem>,
    query: String,
}

impl SearchList {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: texts
                .into_iter()
                .map(|t| SearchItem {
                    text: t.into(),
                    hidden: false,
                })
                .collect(),
            query: String::new(),
        }
    }

    /// Show items containing `query`, hide the rest.
    pub fn apply(&mut self, query: &str) {
        self.query = query.to_string();
        let pass = FilterPass::run(self.items.iter().map(|i| i.text.as_str()), query);
        for (item, hidden) in self.items.iter_mut().zip(pass.hidden) {
            item.hidden = hidden;
        }
    }

    /// Append an item, filtered by the current query.
    pub fn push(&mut self, text: impl Into<String>) {
        self.items.push(SearchItem {
            text: text.into(),
            hidden: false,
        });
        let query = std::mem::take(&mut self.query);
        self.apply(&query);
    }

    pub fn remove(&mut self, index: usize) -> Option<SearchItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// Indices of the items currently shown.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.hidden)
            .map(|(i, _)| i)
            .collect()
    }
}
