use tracing::debug;

/// Something that can ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Whether an intercepted submission went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Submitted,
    Cancelled,
}

/// Holds a delete submission until the user confirms it.
#[derive(Debug, Clone)]
pub struct DeleteGuard {
    prompt: String,
}

impl DeleteGuard {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Ask `confirmer` and let the submission through only on "yes".
    pub fn submit<C: Confirm + ?Sized>(&self, confirmer: &mut C) -> Submission {
        self.resolve(confirmer.confirm(&self.prompt))
    }

    /// Settle a submission with an answer collected elsewhere.
    pub fn resolve(&self, confirmed: bool) -> Submission {
        if confirmed {
            Submission::Submitted
        } else {
            debug!("delete cancelled by user");
            Submission::Cancelled
        }
    }
}

impl Default for DeleteGuard {
    fn default() -> Self {
        Self::new("Are you sure you want to delete this?")
    }
}
