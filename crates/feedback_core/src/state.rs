use crate::view_model::{confirmation_text, FormViewModel, PhaseView};
use crate::Field;

pub type SubmissionId = u64;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// A valid submit is waiting for its confirmation delay.
    Pending {
        submission: SubmissionId,
        /// Name as typed when the submit happened.
        name: String,
    },
    Confirmed { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    name: String,
    message: String,
    phase: SubmitPhase,
    last_submission: SubmissionId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Message => &self.message,
        }
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.phase, SubmitPhase::Confirmed { .. })
    }

    pub fn pending_submission(&self) -> Option<SubmissionId> {
        match self.phase {
            SubmitPhase::Pending { submission, .. } => Some(submission),
            _ => None,
        }
    }

    pub fn view(&self) -> FormViewModel {
        let (phase, confirmation) = match &self.phase {
            SubmitPhase::Idle => (PhaseView::Idle, None),
            SubmitPhase::Pending { .. } => (PhaseView::Pending, None),
            SubmitPhase::Confirmed { name } => {
                (PhaseView::Confirmed, Some(confirmation_text(name)))
            }
        };
        FormViewModel {
            name: self.name.clone(),
            message: self.message.clone(),
            phase,
            confirmation,
            submit_enabled: true,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Replaces a field verbatim. Returns false when the value is unchanged.
    pub(crate) fn set_field(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Message => &mut self.message,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        self.dirty = true;
        true
    }

    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.last_submission += 1;
        self.phase = SubmitPhase::Pending {
            submission: self.last_submission,
            name: self.name.clone(),
        };
        self.dirty = true;
        self.last_submission
    }

    pub(crate) fn confirm(&mut self, submission: SubmissionId) -> bool {
        match &mut self.phase {
            SubmitPhase::Pending {
                submission: current,
                name,
            } if *current == submission => {
                let name = std::mem::take(name);
                self.phase = SubmitPhase::Confirmed { name };
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn reset_phase(&mut self) {
        if self.phase != SubmitPhase::Idle {
            self.phase = SubmitPhase::Idle;
            self.dirty = true;
        }
    }
}
