use crate::SubmissionId;

/// Which text field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited a field; carries the full new value, not a delta.
    FieldEdited { field: Field, value: String },
    /// User clicked the submit button.
    SubmitClicked,
    /// The confirmation delay for a submission elapsed.
    ConfirmationElapsed { submission: SubmissionId },
}
