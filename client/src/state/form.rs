//! Submission status shared by the login and registration forms.
//!
//! DESIGN
//! ======
//! Both forms follow the same cycle: clear the error and set `loading` on
//! submit, then either leave the page or show one inline message. Keeping that
//! cycle here lets the pages stay thin and the transitions stay testable.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Result of a completed submission, decided before any navigation happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Leave the page for the given route.
    Navigate(&'static str),
    /// Stay on the page and show the message.
    Failed(String),
}

/// Loading flag and inline error for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub loading: bool,
    pub error: Option<String>,
}

impl FormStatus {
    /// Enter the in-flight state. Returns `false` if a submission is already
    /// running, in which case nothing changes.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Record the outcome and return the route to navigate to, if any.
    ///
    /// `loading` stays set on success so the button remains disabled while
    /// the page is being replaced.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> Option<&'static str> {
        match outcome {
            SubmitOutcome::Navigate(path) => Some(path),
            SubmitOutcome::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
                None
            }
        }
    }
}
