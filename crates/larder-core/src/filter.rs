//! Substring filtering shared by the selection dialog and flat list search.

/// Normalize user-typed filter text: trim, then lowercase.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `text` contains an already-normalized query, ignoring case.
/// An empty query matches everything.
pub fn matches(text: &str, normalized_query: &str) -> bool {
    text.to_lowercase().contains(normalized_query)
}

/// Result of one filter pass over an ordered item set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPass {
    /// Per-item hidden flag, in input order.
    pub hidden: Vec<bool>,
    /// Index of the last item that stayed visible.
    pub last_visible: Option<usize>,
}

impl FilterPass {
    /// Run the filter over `texts` with raw (unnormalized) query text.
    pub fn run<'a, I>(texts: I, query: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = normalize_query(query);
        let mut pass = Self::default();
        for (i, text) in texts.into_iter().enumerate() {
            let visible = matches(text, &query);
            if visible {
                pass.last_visible = Some(i);
            }
            pass.hidden.push(!visible);
        }
        pass
    }

    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|h| !**h).count()
    }
}
