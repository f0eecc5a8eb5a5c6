use crate::models::SelectOption;

/// Presentation state of one option, derived from the dialog model.
#[derive(Debug, Clone, Copy)]
pub struct OptionRow<'a> {
    /// Position in the option set.
    pub index: usize,
    pub option: &'a SelectOption,
    pub hidden: bool,
    pub focused: bool,
    /// Last option still visible after filtering.
    pub last_visible: bool,
}

/// Read-only snapshot a front-end renders from.
#[derive(Debug, Clone)]
pub struct DialogView<'a> {
    pub open: bool,
    pub filter: &'a str,
    pub rows: Vec<OptionRow<'a>>,
}

impl<'a> DialogView<'a> {
    /// Rows that are not hidden, in document order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &OptionRow<'a>> {
        self.rows.iter().filter(|r| !r.hidden)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }

    /// Position of the focused row among the visible rows.
    pub fn focused_position(&self) -> Option<usize> {
        self.visible_rows().position(|r| r.focused)
    }
}
