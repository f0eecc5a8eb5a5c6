/// Popup dialogs drawn over the page (the selection dialog is separate,
/// it lives on the page model).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    /// Waiting for a yes/no answer before deleting a logged entry.
    DeleteConfirm {
        /// Position of the entry in the log.
        index: usize,
        name: String,
        prompt: String,
    },
}
