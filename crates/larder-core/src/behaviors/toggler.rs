use tracing::warn;

use crate::page::Elements;

/// Flips the hidden flag of a separately addressed element.
#[derive(Debug, Clone, Default)]
pub struct Toggler {
    target: Option<String>,
}

impl Toggler {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
        }
    }

    /// A toggler whose markup names no target.
    pub fn untargeted() -> Self {
        Self { target: None }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Toggle the target. Returns its new hidden state, or `None` when the
    /// target could not be resolved.
    pub fn activate(&self, elements: &mut Elements) -> Option<bool> {
        let Some(selector) = self.target.as_deref() else {
            warn!("toggler has no target selector");
            return None;
        };
        let Some(element) = elements.get_mut(selector) else {
            warn!(selector, "toggler target not found");
            return None;
        };
        element.hidden = !element.hidden;
        Some(element.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_hidden() {
        let mut elements = Elements::default();
        elements.insert("form.food", true);

        let toggler = Toggler::new("form.food");
        assert_eq!(toggler.activate(&mut elements), Some(false));
        assert!(!elements.is_hidden("form.food").unwrap());
        assert_eq!(toggler.activate(&mut elements), Some(true));
    }

    #[test]
    fn test_missing_target_is_noop() {
        let mut elements = Elements::default();
        elements.insert("form.food", false);

        assert_eq!(Toggler::new("form.recipe").activate(&mut elements), None);
        assert_eq!(Toggler::untargeted().activate(&mut elements), None);
        assert_eq!(elements.is_hidden("form.food"), Some(false));
    }
}
